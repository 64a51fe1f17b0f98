//! BitRewards Points Module
//!
//! Tracks the gamified side of the platform:
//! - Points granted per activity
//! - Daily login streaks and their milestone bonuses
//! - Weekly referral invite quotas
//! - Achievements and leaderboard ranking
//!
//! Grants are returned to the caller, which records them in its ledger.

pub mod achievements;
pub mod error;
pub mod ledger;
pub mod referral;
pub mod streak;

pub use achievements::{achieved, next_achievement, Achievement, UserStats};
pub use error::{PointsError, Result};
pub use ledger::{
    deposit_streak_points, leaderboard_rank, swap_points, total_points, PointsActivity,
    PointsGrant,
};
pub use referral::{
    can_invite, generate_referral_code, next_week_reset_date, referral_grant, ReferralQuota,
    REFERRAL_CODE_PREFIX,
};
pub use streak::{
    advance_streak, days_to_next_milestone, next_streak_milestone, LoginOutcome, LoginState,
};
