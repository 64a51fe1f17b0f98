//! Engagement rewards on gamified posts
//!
//! A like on a gamified post pays the liker's tier reward until that tier's
//! like cap is passed, never more than what is left in the post's pool.
//! One engagement per user per post is enforced by the caller's storage.

use serde::{Deserialize, Serialize};

use bitrewards_core::{CustomerLevel, PointsSchedule};

use crate::error::{ReputationError, Result};

/// One value per customer level
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TierValues<T> {
    pub level_0: T,
    pub level_1: T,
    pub level_2: T,
    pub level_3: T,
}

impl<T: Copy> TierValues<T> {
    pub fn get(&self, level: CustomerLevel) -> T {
        match level {
            CustomerLevel::Level0 => self.level_0,
            CustomerLevel::Level1 => self.level_1,
            CustomerLevel::Level2 => self.level_2,
            CustomerLevel::Level3 => self.level_3,
        }
    }

    pub fn set(&mut self, level: CustomerLevel, value: T) {
        match level {
            CustomerLevel::Level0 => self.level_0 = value,
            CustomerLevel::Level1 => self.level_1 = value,
            CustomerLevel::Level2 => self.level_2 = value,
            CustomerLevel::Level3 => self.level_3 = value,
        }
    }
}

/// Per-post reward and like cap for each tier. Unset tiers pay nothing and
/// have no cap.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RewardTable {
    pub rewards: TierValues<f64>,
    pub caps: TierValues<u64>,
}

impl RewardTable {
    pub fn with_tier(mut self, level: CustomerLevel, reward: f64, cap: u64) -> Self {
        self.rewards.set(level, reward);
        self.caps.set(level, cap);
        self
    }

    pub fn tier(&self, level: CustomerLevel) -> (f64, u64) {
        (self.rewards.get(level), self.caps.get(level))
    }
}

/// How a single like's reward was decided
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct RewardDecision {
    pub reward: f64,
    pub tier_reward: f64,
    pub tier_cap: u64,
    /// The like count passed the tier's cap
    pub over_cap: bool,
    /// The tier reward was cut down to the remaining budget
    pub capped_by_budget: bool,
}

/// Decide the reward for a like.
///
/// `like_count_after` must already include the like being rewarded, so the
/// like that crosses a cap earns nothing.
pub fn evaluate_engagement(
    level: CustomerLevel,
    table: &RewardTable,
    like_count_after: u64,
    remaining_budget: f64,
) -> RewardDecision {
    let (tier_reward, tier_cap) = table.tier(level);

    if tier_cap > 0 && like_count_after > tier_cap {
        log::debug!(
            "{} cap of {} likes passed at like {}, no reward",
            level,
            tier_cap,
            like_count_after
        );
        return RewardDecision {
            reward: 0.0,
            tier_reward,
            tier_cap,
            over_cap: true,
            capped_by_budget: false,
        };
    }

    let capped_by_budget = tier_reward > remaining_budget;
    let reward = tier_reward.min(remaining_budget).max(0.0);
    if capped_by_budget {
        log::debug!(
            "{} reward {} clamped to remaining budget {}",
            level,
            tier_reward,
            remaining_budget
        );
    }

    RewardDecision {
        reward,
        tier_reward,
        tier_cap,
        over_cap: false,
        capped_by_budget,
    }
}

pub fn calculate_engagement_reward(
    level: CustomerLevel,
    table: &RewardTable,
    like_count_after: u64,
    remaining_budget: f64,
) -> f64 {
    evaluate_engagement(level, table, like_count_after, remaining_budget).reward
}

/// A post's remaining reward budget
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct RewardPool {
    remaining: f64,
}

impl RewardPool {
    pub fn new(remaining: f64) -> Self {
        Self { remaining }
    }

    pub fn remaining(&self) -> f64 {
        self.remaining
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining <= 0.0
    }

    /// Take up to `amount` from the pool, returning what was taken
    pub fn withdraw(&mut self, amount: f64) -> Result<f64> {
        if !amount.is_finite() || amount < 0.0 {
            return Err(ReputationError::InvalidAmount(amount));
        }
        if self.is_exhausted() {
            return Err(ReputationError::BudgetExhausted {
                requested: amount,
                available: self.remaining.max(0.0),
            });
        }
        let taken = amount.min(self.remaining);
        self.remaining -= taken;
        Ok(taken)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EngagementKind {
    Like,
    Dislike,
}

/// The reward-relevant columns of a post
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PostRewardState {
    pub is_gamified: bool,
    pub like_count: u64,
    pub dislike_count: u64,
    pub pool: RewardPool,
    pub table: RewardTable,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct EngagementOutcome {
    pub kind: EngagementKind,
    /// Reward paid to the engaging user, 0 if none
    pub reward: f64,
    pub capped_by_budget: bool,
    /// Points owed for reacting to a post
    pub points: u64,
}

impl PostRewardState {
    pub fn gamified(pool: f64, table: RewardTable) -> Self {
        Self {
            is_gamified: true,
            pool: RewardPool::new(pool),
            table,
            ..Default::default()
        }
    }

    /// Apply one engagement and report what it earned.
    ///
    /// Only likes on gamified posts with budget left can earn a reward.
    /// The updated counts and pool are what the caller must write back.
    pub fn engage(
        &mut self,
        kind: EngagementKind,
        level: CustomerLevel,
        schedule: &PointsSchedule,
    ) -> Result<EngagementOutcome> {
        let mut reward = 0.0;
        let mut capped_by_budget = false;

        match kind {
            EngagementKind::Like => {
                if self.is_gamified && !self.pool.is_exhausted() {
                    let decision = evaluate_engagement(
                        level,
                        &self.table,
                        self.like_count + 1,
                        self.pool.remaining(),
                    );
                    if decision.reward > 0.0 {
                        reward = self.pool.withdraw(decision.reward)?;
                    }
                    capped_by_budget = decision.capped_by_budget;
                }
                self.like_count += 1;
            }
            EngagementKind::Dislike => {
                self.dislike_count += 1;
            }
        }

        Ok(EngagementOutcome {
            kind,
            reward,
            capped_by_budget,
            points: schedule.react_post,
        })
    }
}
