//! Points activities, grants and totals

use serde::{Deserialize, Serialize};
use std::fmt;

use bitrewards_core::PointsSchedule;

/// Minimum streak before deposits earn streak points
pub const DEPOSIT_STREAK_MIN_DAYS: u32 = 14;

/// (minimum deposit, points), highest first
const DEPOSIT_STREAK_TIERS: [(f64, u64); 7] = [
    (50_000.0, 5_000),
    (30_000.0, 3_000),
    (20_000.0, 2_000),
    (10_000.0, 1_000),
    (5_000.0, 500),
    (1_000.0, 100),
    (500.0, 50),
];

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PointsActivity {
    ReactPost,
    ReferUser,
    DailyLogin,
    #[serde(rename = "LOGIN_STREAK_2_WEEKS")]
    LoginStreakTwoWeeks,
    #[serde(rename = "LOGIN_STREAK_1_MONTH")]
    LoginStreakOneMonth,
    #[serde(rename = "SWAP_5K")]
    Swap5k,
    #[serde(rename = "SWAP_10K")]
    Swap10k,
    DepositStreak,
}

impl PointsActivity {
    /// Fixed points for the activity. Deposit streaks vary with the amount
    /// and report 0 here; see [`deposit_streak_points`].
    pub fn base_points(&self, schedule: &PointsSchedule) -> u64 {
        match self {
            Self::ReactPost => schedule.react_post,
            Self::ReferUser => schedule.refer_user,
            Self::DailyLogin => schedule.daily_login,
            Self::LoginStreakTwoWeeks => schedule.login_streak_two_weeks,
            Self::LoginStreakOneMonth => schedule.login_streak_one_month,
            Self::Swap5k => schedule.swap_5k,
            Self::Swap10k => schedule.swap_10k,
            Self::DepositStreak => 0,
        }
    }
}

impl fmt::Display for PointsActivity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ReactPost => write!(f, "REACT_POST"),
            Self::ReferUser => write!(f, "REFER_USER"),
            Self::DailyLogin => write!(f, "DAILY_LOGIN"),
            Self::LoginStreakTwoWeeks => write!(f, "LOGIN_STREAK_2_WEEKS"),
            Self::LoginStreakOneMonth => write!(f, "LOGIN_STREAK_1_MONTH"),
            Self::Swap5k => write!(f, "SWAP_5K"),
            Self::Swap10k => write!(f, "SWAP_10K"),
            Self::DepositStreak => write!(f, "DEPOSIT_STREAK"),
        }
    }
}

/// A points award to be written to the ledger
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PointsGrant {
    pub activity: PointsActivity,
    pub points: u64,
    pub description: String,
}

impl PointsGrant {
    pub fn new(activity: PointsActivity, points: u64, description: impl Into<String>) -> Self {
        Self {
            activity,
            points,
            description: description.into(),
        }
    }

    /// Grant the scheduled amount for a fixed-value activity
    pub fn scheduled(
        activity: PointsActivity,
        schedule: &PointsSchedule,
        description: impl Into<String>,
    ) -> Self {
        Self::new(activity, activity.base_points(schedule), description)
    }
}

pub fn total_points(grants: &[PointsGrant]) -> u64 {
    grants.iter().map(|g| g.points).sum()
}

/// Points for a deposit held through a streak
pub fn deposit_streak_points(deposit_amount: f64, streak_days: u32) -> u64 {
    if streak_days < DEPOSIT_STREAK_MIN_DAYS {
        return 0;
    }
    DEPOSIT_STREAK_TIERS
        .iter()
        .find(|(min, _)| deposit_amount >= *min)
        .map(|(_, points)| *points)
        .unwrap_or(0)
}

/// Swap activity earned by a swap's fiat value, if any
pub fn swap_points(swap_usd: f64, schedule: &PointsSchedule) -> Option<PointsGrant> {
    let activity = match swap_usd {
        v if v >= 10_000.0 => PointsActivity::Swap10k,
        v if v >= 5_000.0 => PointsActivity::Swap5k,
        _ => return None,
    };
    Some(PointsGrant::scheduled(
        activity,
        schedule,
        format!("Swap of ${:.2}", swap_usd),
    ))
}

/// 1-based leaderboard position; tied users share the best rank
pub fn leaderboard_rank(user_points: u64, all_points: &[u64]) -> Option<usize> {
    if !all_points.contains(&user_points) {
        return None;
    }
    Some(all_points.iter().filter(|p| **p > user_points).count() + 1)
}
