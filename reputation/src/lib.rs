//! BitRewards Reputation Module
//!
//! Customer levels derived from TVL and the per-like engagement rewards
//! those levels unlock on gamified posts.

pub mod activity;
pub mod engagement;
pub mod error;
pub mod levels;

pub use activity::activity_score;
pub use engagement::{
    calculate_engagement_reward, evaluate_engagement, EngagementKind, EngagementOutcome,
    PostRewardState, RewardDecision, RewardPool, RewardTable, TierValues,
};
pub use error::{ReputationError, Result};
pub use levels::{
    determine_level, has_met_level_up_timer, level_change, threshold_for, LevelChange,
    LevelStanding, DEFAULT_LEVEL_UP_TIMER_HOURS,
};
