//! Referral codes and weekly invite quotas

use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

use bitrewards_core::{PointsSchedule, ReferralSettings};

use crate::error::{PointsError, Result};
use crate::ledger::{PointsActivity, PointsGrant};

pub const REFERRAL_CODE_PREFIX: &str = "REF";
const REFERRAL_CODE_LEN: usize = 6;
const REFERRAL_CODE_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Whether another invite may be sent.
///
/// Once `now` is past the reset date the week has rolled over and the used
/// count no longer applies. The check itself does not reset anything.
pub fn can_invite(
    invites_used: u32,
    max_invites: u32,
    week_reset_date: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) -> bool {
    if let Some(reset) = week_reset_date {
        if now > reset {
            return true;
        }
    }
    invites_used < max_invites
}

pub fn next_week_reset_date(now: DateTime<Utc>, week_length_days: i64) -> DateTime<Utc> {
    now + Duration::days(week_length_days)
}

/// Random code such as `REF7KQ2ZD`
pub fn generate_referral_code<R: Rng + ?Sized>(rng: &mut R) -> String {
    let mut code = String::with_capacity(REFERRAL_CODE_PREFIX.len() + REFERRAL_CODE_LEN);
    code.push_str(REFERRAL_CODE_PREFIX);
    for _ in 0..REFERRAL_CODE_LEN {
        let idx = rng.random_range(0..REFERRAL_CODE_CHARSET.len());
        code.push(REFERRAL_CODE_CHARSET[idx] as char);
    }
    code
}

/// Points owed to a referrer for a successful referral
pub fn referral_grant(schedule: &PointsSchedule, referee: &str) -> PointsGrant {
    PointsGrant::scheduled(
        PointsActivity::ReferUser,
        schedule,
        format!("Referred user {}", referee),
    )
}

/// Per-user invite counters
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReferralQuota {
    pub invites_used_this_week: u32,
    pub max_invites_per_week: u32,
    pub week_reset_date: Option<DateTime<Utc>>,
}

impl ReferralQuota {
    pub fn new(max_invites_per_week: u32) -> Self {
        Self {
            invites_used_this_week: 0,
            max_invites_per_week,
            week_reset_date: None,
        }
    }

    pub fn from_settings(settings: &ReferralSettings) -> Self {
        Self::new(settings.max_invites_per_week)
    }

    /// The stored week is over and the counter is stale
    pub fn week_elapsed(&self, now: DateTime<Utc>) -> bool {
        matches!(self.week_reset_date, Some(reset) if now > reset)
    }

    pub fn can_invite(&self, now: DateTime<Utc>) -> bool {
        can_invite(
            self.invites_used_this_week,
            self.max_invites_per_week,
            self.week_reset_date,
            now,
        )
    }

    /// Invites still available this week
    pub fn remaining(&self, now: DateTime<Utc>) -> u32 {
        if self.week_elapsed(now) {
            return self.max_invites_per_week;
        }
        self.max_invites_per_week
            .saturating_sub(self.invites_used_this_week)
    }

    /// Open the first weekly window, as done when a user first gets a code
    pub fn start_week(&mut self, now: DateTime<Utc>, settings: &ReferralSettings) {
        if self.week_reset_date.is_none() {
            self.week_reset_date = Some(next_week_reset_date(now, settings.week_length_days));
        }
    }

    /// Spend one invite. The updated counters must be persisted by the
    /// caller together with the referral itself.
    pub fn consume(&mut self, now: DateTime<Utc>, settings: &ReferralSettings) -> Result<()> {
        if !self.can_invite(now) {
            return Err(PointsError::InsufficientQuota {
                used: self.invites_used_this_week,
                max: self.max_invites_per_week,
            });
        }

        if self.week_elapsed(now) {
            log::debug!(
                "Referral week rolled over ({} invites used), starting a new one",
                self.invites_used_this_week
            );
            self.invites_used_this_week = 1;
            self.week_reset_date = Some(next_week_reset_date(now, settings.week_length_days));
        } else {
            self.invites_used_this_week += 1;
            self.start_week(now, settings);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 9, 10, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_can_invite() {
        let past = Some(now() - Duration::days(1));
        let future = Some(now() + Duration::days(1));

        assert!(can_invite(5, 5, past, now()));
        assert!(!can_invite(5, 5, future, now()));
        assert!(can_invite(4, 5, future, now()));
        assert!(!can_invite(5, 5, None, now()));
        assert!(can_invite(0, 5, None, now()));
    }

    #[test]
    fn test_reset_boundary_is_exclusive() {
        // Exactly at the reset instant the old week still applies
        assert!(!can_invite(5, 5, Some(now()), now()));
    }

    #[test]
    fn test_consume_until_limit() {
        let settings = ReferralSettings::default();
        let mut quota = ReferralQuota::from_settings(&settings);

        for _ in 0..5 {
            quota.consume(now(), &settings).unwrap();
        }
        assert_eq!(quota.invites_used_this_week, 5);
        assert_eq!(quota.week_reset_date, Some(now() + Duration::days(7)));
        assert_eq!(quota.remaining(now()), 0);

        assert_eq!(
            quota.consume(now(), &settings),
            Err(PointsError::InsufficientQuota { used: 5, max: 5 })
        );
    }

    #[test]
    fn test_consume_after_week_resets() {
        let settings = ReferralSettings::default();
        let mut quota = ReferralQuota {
            invites_used_this_week: 5,
            max_invites_per_week: 5,
            week_reset_date: Some(now() - Duration::hours(1)),
        };

        assert_eq!(quota.remaining(now()), 5);
        quota.consume(now(), &settings).unwrap();
        assert_eq!(quota.invites_used_this_week, 1);
        assert_eq!(quota.week_reset_date, Some(now() + Duration::days(7)));
    }

    #[test]
    fn test_referral_code_format() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let code = generate_referral_code(&mut rng);

        assert_eq!(code.len(), 9);
        assert!(code.starts_with(REFERRAL_CODE_PREFIX));
        assert!(code[3..]
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));

        let mut again = ChaCha8Rng::seed_from_u64(42);
        assert_eq!(generate_referral_code(&mut again), code);
    }

    #[test]
    fn test_referral_grant() {
        let grant = referral_grant(&PointsSchedule::default(), "user-9");
        assert_eq!(grant.activity, PointsActivity::ReferUser);
        assert_eq!(grant.points, 50);
    }
}
