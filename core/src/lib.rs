//! BitRewards Core Library
//!
//! Shared value types, constants and configuration for the reward and
//! reputation calculation crates.

pub mod config;
pub mod error;
pub mod types;
pub mod units;

pub use config::{PriceSettings, ReferralSettings, RewardsConfig, StreakSettings};
pub use error::{ConfigError, Result};
pub use types::{
    ApyTable, BoostType, CustomerLevel, Deposit, LevelThresholds, PointsSchedule, ProtocolSplit,
    TokenType,
};
pub use units::{btc_to_sats, sats_to_btc, SATS_PER_BTC};

/// Library version
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
