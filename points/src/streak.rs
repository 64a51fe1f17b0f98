//! Daily login streaks
//!
//! Streaks move on calendar days (UTC), not rolling 24h windows: a login at
//! 23:59 followed by one at 00:01 counts as two consecutive days.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use bitrewards_core::{PointsSchedule, StreakSettings};

use crate::ledger::{PointsActivity, PointsGrant};

/// New streak length after a login on `today`
pub fn advance_streak(last_login: Option<NaiveDate>, current_streak: u32, today: NaiveDate) -> u32 {
    let Some(last) = last_login else {
        return 1;
    };

    match (today - last).num_days() {
        0 => current_streak,
        1 => current_streak.saturating_add(1),
        gap => {
            log::debug!("Streak of {} broken after {} days", current_streak, gap);
            1
        }
    }
}

/// Next streak length that earns a bonus, `None` once the month milestone
/// has been passed
pub fn next_streak_milestone(streak: u32, settings: &StreakSettings) -> Option<u32> {
    if streak < settings.two_weeks_days {
        Some(settings.two_weeks_days)
    } else if streak < settings.one_month_days {
        Some(settings.one_month_days)
    } else {
        None
    }
}

pub fn days_to_next_milestone(streak: u32, settings: &StreakSettings) -> Option<u32> {
    next_streak_milestone(streak, settings).map(|m| m - streak)
}

/// Per-user login tracking columns
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginState {
    pub last_login: Option<DateTime<Utc>>,
    pub streak: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginOutcome {
    pub streak: u32,
    /// First login of the calendar day
    pub new_day: bool,
    pub daily_points: u64,
    pub streak_bonus: u64,
    pub grants: Vec<PointsGrant>,
}

impl LoginOutcome {
    pub fn points_awarded(&self) -> u64 {
        self.daily_points + self.streak_bonus
    }
}

impl LoginState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a login at `now`.
    ///
    /// Only the first login of a calendar day earns points. Milestone
    /// bonuses fire when the streak lands exactly on a milestone, so each
    /// is earned once per streak.
    pub fn record_login(
        &mut self,
        now: DateTime<Utc>,
        schedule: &PointsSchedule,
        settings: &StreakSettings,
    ) -> LoginOutcome {
        let today = now.date_naive();
        let last_day = self.last_login.map(|t| t.date_naive());
        self.last_login = Some(now);

        if last_day == Some(today) {
            return LoginOutcome {
                streak: self.streak,
                ..Default::default()
            };
        }

        let streak = advance_streak(last_day, self.streak, today);
        self.streak = streak;

        let mut grants = Vec::new();
        let mut streak_bonus = 0;

        let milestone = if streak == settings.two_weeks_days {
            Some((PointsActivity::LoginStreakTwoWeeks, "2-week login streak achievement"))
        } else if streak == settings.one_month_days {
            Some((PointsActivity::LoginStreakOneMonth, "1-month login streak achievement"))
        } else {
            None
        };
        if let Some((activity, description)) = milestone {
            let grant = PointsGrant::scheduled(activity, schedule, description);
            streak_bonus = grant.points;
            log::debug!("Login streak milestone reached: {} days", streak);
            grants.push(grant);
        }

        let daily = PointsGrant::scheduled(PointsActivity::DailyLogin, schedule, "Daily login");
        let daily_points = daily.points;
        grants.push(daily);

        LoginOutcome {
            streak,
            new_day: true,
            daily_points,
            streak_bonus,
            grants,
        }
    }
}
