//! Customer levels and TVL thresholds

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use bitrewards_core::{CustomerLevel, LevelThresholds};

/// Hours a boost must age before it counts towards a level-up
pub const DEFAULT_LEVEL_UP_TIMER_HOURS: f64 = 24.0;

/// Classify a TVL, highest threshold first
pub fn determine_level(tvl: f64, thresholds: &LevelThresholds) -> CustomerLevel {
    match tvl {
        t if t >= thresholds.level3 => CustomerLevel::Level3,
        t if t >= thresholds.level2 => CustomerLevel::Level2,
        t if t >= thresholds.level1 => CustomerLevel::Level1,
        _ => CustomerLevel::Level0,
    }
}

/// Minimum TVL for a level
pub fn threshold_for(level: CustomerLevel, thresholds: &LevelThresholds) -> f64 {
    match level {
        CustomerLevel::Level0 => 0.0,
        CustomerLevel::Level1 => thresholds.level1,
        CustomerLevel::Level2 => thresholds.level2,
        CustomerLevel::Level3 => thresholds.level3,
    }
}

/// Direction of a reclassification
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum LevelChange {
    Promoted {
        from: CustomerLevel,
        to: CustomerLevel,
    },
    Demoted {
        from: CustomerLevel,
        to: CustomerLevel,
    },
}

/// Compare a stored level against a freshly computed one.
///
/// Levels are always recomputed from TVL; this only tells the caller whether
/// the recomputation moved the customer so it can notify them.
pub fn level_change(previous: CustomerLevel, current: CustomerLevel) -> Option<LevelChange> {
    use std::cmp::Ordering;

    match current.cmp(&previous) {
        Ordering::Greater => Some(LevelChange::Promoted {
            from: previous,
            to: current,
        }),
        Ordering::Less => Some(LevelChange::Demoted {
            from: previous,
            to: current,
        }),
        Ordering::Equal => None,
    }
}

pub fn has_met_level_up_timer(
    boost_created_at: DateTime<Utc>,
    now: DateTime<Utc>,
    timer_hours: f64,
) -> bool {
    let hours = (now - boost_created_at).num_milliseconds() as f64 / 3_600_000.0;
    hours >= timer_hours
}

/// Where a TVL sits relative to the thresholds
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct LevelStanding {
    pub tvl: f64,
    pub level: CustomerLevel,
    pub next_level: Option<CustomerLevel>,
    /// Additional TVL needed to reach `next_level`
    pub tvl_to_next: Option<f64>,
}

impl LevelStanding {
    pub fn compute(tvl: f64, thresholds: &LevelThresholds) -> Self {
        let level = determine_level(tvl, thresholds);
        let next_level = CustomerLevel::ALL.get(level.index() + 1).copied();
        let tvl_to_next = next_level.map(|next| (threshold_for(next, thresholds) - tvl).max(0.0));

        Self {
            tvl,
            level,
            next_level,
            tvl_to_next,
        }
    }
}
