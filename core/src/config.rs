//! Rewards configuration file (rewards.toml) support
//!
//! Every section is optional and falls back to the platform defaults:
//!
//! ```toml
//! [levels]
//! level1 = 100.0
//! level2 = 1000.0
//! level3 = 10000.0
//!
//! [split]
//! protocol_percent = 10.0
//! user_percent = 85.0
//! referral_percent = 5.0
//!
//! [referral]
//! max_invites_per_week = 5
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{ConfigError, Result};
use crate::types::{ApyTable, LevelThresholds, PointsSchedule, ProtocolSplit};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ReferralSettings {
    pub max_invites_per_week: u32,
    pub week_length_days: i64,
}

impl Default for ReferralSettings {
    fn default() -> Self {
        Self {
            max_invites_per_week: 5,
            week_length_days: 7,
        }
    }
}

/// Login streak lengths that earn a one-off bonus
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct StreakSettings {
    pub two_weeks_days: u32,
    pub one_month_days: u32,
}

impl Default for StreakSettings {
    fn default() -> Self {
        Self {
            two_weeks_days: 14,
            one_month_days: 30,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PriceSettings {
    /// How long a fetched spot price stays fresh
    pub cache_ttl_secs: i64,
    /// Used when no price has ever been fetched successfully
    pub fallback_usd: f64,
}

impl Default for PriceSettings {
    fn default() -> Self {
        Self {
            cache_ttl_secs: 60,
            fallback_usd: 50_000.0,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RewardsConfig {
    pub levels: LevelThresholds,
    pub split: ProtocolSplit,
    pub points: PointsSchedule,
    pub referral: ReferralSettings,
    pub streak: StreakSettings,
    pub apy: ApyTable,
    pub price: PriceSettings,
}

impl RewardsConfig {
    /// Load and validate a configuration file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&contents)?;
        log::debug!("Loaded rewards config from {}", path.display());
        Ok(config)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: RewardsConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.levels.validate()?;
        self.split.validate()?;

        if self.referral.week_length_days <= 0 {
            return Err(ConfigError::InvalidSetting(format!(
                "referral.week_length_days must be positive, got {}",
                self.referral.week_length_days
            )));
        }
        if self.streak.two_weeks_days == 0 || self.streak.one_month_days == 0 {
            return Err(ConfigError::InvalidSetting(
                "streak milestones must be at least one day".to_string(),
            ));
        }
        if self.streak.two_weeks_days >= self.streak.one_month_days {
            return Err(ConfigError::InvalidSetting(format!(
                "streak milestones must be ascending: {} / {}",
                self.streak.two_weeks_days, self.streak.one_month_days
            )));
        }
        if self.price.cache_ttl_secs < 0 {
            return Err(ConfigError::InvalidSetting(format!(
                "price.cache_ttl_secs must not be negative, got {}",
                self.price.cache_ttl_secs
            )));
        }
        if !self.price.fallback_usd.is_finite() || self.price.fallback_usd <= 0.0 {
            return Err(ConfigError::InvalidSetting(format!(
                "price.fallback_usd must be positive, got {}",
                self.price.fallback_usd
            )));
        }
        let apy = [self.apy.btc, self.apy.cb_btc, self.apy.usdc];
        if apy.iter().any(|r| !r.is_finite() || *r < 0.0) {
            return Err(ConfigError::InvalidSetting(format!(
                "apy rates must be finite and non-negative: {:?}",
                apy
            )));
        }
        Ok(())
    }
}
