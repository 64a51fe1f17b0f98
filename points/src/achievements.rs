//! Achievements unlocked by user statistics

use serde::{Deserialize, Serialize};
use std::fmt;

/// Aggregated statistics the caller gathers for a user
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct UserStats {
    pub total_points: u64,
    pub sats_earned: u64,
    pub brands_followed: u32,
    pub brands_boosted: u32,
    pub login_streak: u32,
    /// Fiat value of all deposits
    pub total_deposits: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Achievement {
    SatoshiCollector, // 100,000 sats earned
    NetworkBuilder,   // 10 brands boosted
    DedicatedMember,  // 30-day login streak
    BitcoinWhale,     // $10,000 deposited
}

impl Achievement {
    /// In display order
    pub const ALL: [Achievement; 4] = [
        Achievement::SatoshiCollector,
        Achievement::NetworkBuilder,
        Achievement::DedicatedMember,
        Achievement::BitcoinWhale,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Self::SatoshiCollector => "first_100k_sats",
            Self::NetworkBuilder => "ten_brands_boosted",
            Self::DedicatedMember => "thirty_day_streak",
            Self::BitcoinWhale => "whale_depositor",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::SatoshiCollector => "Earned 100,000 satoshis",
            Self::NetworkBuilder => "Boosted 10 brands",
            Self::DedicatedMember => "30-day login streak",
            Self::BitcoinWhale => "Total deposits over $10,000",
        }
    }

    pub fn points_required(&self) -> u64 {
        match self {
            Self::SatoshiCollector => 100,
            Self::NetworkBuilder => 200,
            Self::DedicatedMember => 300,
            Self::BitcoinWhale => 500,
        }
    }

    pub fn is_met(&self, stats: &UserStats) -> bool {
        match self {
            Self::SatoshiCollector => stats.sats_earned >= 100_000,
            Self::NetworkBuilder => stats.brands_boosted >= 10,
            Self::DedicatedMember => stats.login_streak >= 30,
            Self::BitcoinWhale => stats.total_deposits >= 10_000.0,
        }
    }
}

impl fmt::Display for Achievement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SatoshiCollector => write!(f, "Satoshi Collector"),
            Self::NetworkBuilder => write!(f, "Network Builder"),
            Self::DedicatedMember => write!(f, "Dedicated Member"),
            Self::BitcoinWhale => write!(f, "Bitcoin Whale"),
        }
    }
}

pub fn achieved(stats: &UserStats) -> Vec<Achievement> {
    Achievement::ALL
        .into_iter()
        .filter(|a| a.is_met(stats))
        .collect()
}

/// First achievement, in display order, not yet unlocked
pub fn next_achievement(stats: &UserStats) -> Option<Achievement> {
    Achievement::ALL.into_iter().find(|a| !a.is_met(stats))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nothing_achieved() {
        let stats = UserStats::default();
        assert!(achieved(&stats).is_empty());
        assert_eq!(next_achievement(&stats), Some(Achievement::SatoshiCollector));
    }

    #[test]
    fn test_partial_progress() {
        let stats = UserStats {
            sats_earned: 150_000,
            login_streak: 31,
            ..Default::default()
        };
        assert_eq!(
            achieved(&stats),
            vec![Achievement::SatoshiCollector, Achievement::DedicatedMember]
        );
        assert_eq!(next_achievement(&stats), Some(Achievement::NetworkBuilder));
    }

    #[test]
    fn test_everything_achieved() {
        let stats = UserStats {
            sats_earned: 100_000,
            brands_boosted: 10,
            login_streak: 30,
            total_deposits: 10_000.0,
            ..Default::default()
        };
        assert_eq!(achieved(&stats).len(), 4);
        assert_eq!(next_achievement(&stats), None);
        assert_eq!(Achievement::BitcoinWhale.to_string(), "Bitcoin Whale");
        assert_eq!(Achievement::BitcoinWhale.id(), "whale_depositor");
    }
}
