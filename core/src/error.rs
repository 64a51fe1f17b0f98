//! Configuration error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error(
        "Invalid protocol split: {protocol}% protocol + {user}% user + {referral}% referral = {total}%, expected 100%"
    )]
    InvalidSplit {
        protocol: f64,
        user: f64,
        referral: f64,
        total: f64,
    },

    #[error("Invalid level thresholds: {0}")]
    InvalidThresholds(String),

    #[error("Invalid setting: {0}")]
    InvalidSetting(String),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
