//! Shared value types
//!
//! Everything here is a plain value read from or written to the persistence
//! layer by callers. None of these types own any storage.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{ConfigError, Result};

/// Tolerance used when checking that split percentages add up to 100
const SPLIT_EPSILON: f64 = 1e-9;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum TokenType {
    #[serde(rename = "BTC")]
    Btc,
    #[serde(rename = "cbBTC")]
    CbBtc,
    #[serde(rename = "USDC")]
    Usdc,
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Btc => write!(f, "BTC"),
            Self::CbBtc => write!(f, "cbBTC"),
            Self::Usdc => write!(f, "USDC"),
        }
    }
}

impl FromStr for TokenType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "btc" => Ok(Self::Btc),
            "cbbtc" => Ok(Self::CbBtc),
            "usdc" => Ok(Self::Usdc),
            other => Err(format!("unknown token type: {}", other)),
        }
    }
}

/// A single deposit. Only the principal matters for TVL.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Deposit {
    pub principal_amount: f64,
    pub token_type: TokenType,
}

impl Deposit {
    pub fn new(principal_amount: f64, token_type: TokenType) -> Self {
        Self {
            principal_amount,
            token_type,
        }
    }

    pub fn btc(principal_amount: f64) -> Self {
        Self::new(principal_amount, TokenType::Btc)
    }
}

/// Customer reputation bracket derived from TVL. Ordered lowest first.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash, Default,
)]
pub enum CustomerLevel {
    #[default]
    #[serde(rename = "LEVEL_0")]
    Level0,
    #[serde(rename = "LEVEL_1")]
    Level1,
    #[serde(rename = "LEVEL_2")]
    Level2,
    #[serde(rename = "LEVEL_3")]
    Level3,
}

impl CustomerLevel {
    pub const ALL: [CustomerLevel; 4] = [
        CustomerLevel::Level0,
        CustomerLevel::Level1,
        CustomerLevel::Level2,
        CustomerLevel::Level3,
    ];

    pub fn index(&self) -> usize {
        match self {
            Self::Level0 => 0,
            Self::Level1 => 1,
            Self::Level2 => 2,
            Self::Level3 => 3,
        }
    }
}

impl fmt::Display for CustomerLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LEVEL_{}", self.index())
    }
}

impl FromStr for CustomerLevel {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let digits = s
            .trim()
            .to_ascii_uppercase()
            .trim_start_matches("LEVEL")
            .trim_start_matches('_')
            .to_string();
        match digits.as_str() {
            "0" => Ok(Self::Level0),
            "1" => Ok(Self::Level1),
            "2" => Ok(Self::Level2),
            "3" => Ok(Self::Level3),
            _ => Err(format!("unknown customer level: {}", s)),
        }
    }
}

/// Where the non-protocol, non-referral part of a boost's yield goes
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BoostType {
    BoostMe,
    BoostBrand,
    BoostCustomer,
    BoostNetwork,
}

impl fmt::Display for BoostType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoostMe => write!(f, "BOOST_ME"),
            Self::BoostBrand => write!(f, "BOOST_BRAND"),
            Self::BoostCustomer => write!(f, "BOOST_CUSTOMER"),
            Self::BoostNetwork => write!(f, "BOOST_NETWORK"),
        }
    }
}

impl FromStr for BoostType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('-', "_").as_str() {
            "boost_me" | "me" => Ok(Self::BoostMe),
            "boost_brand" | "brand" => Ok(Self::BoostBrand),
            "boost_customer" | "customer" => Ok(Self::BoostCustomer),
            "boost_network" | "network" => Ok(Self::BoostNetwork),
            other => Err(format!("unknown boost type: {}", other)),
        }
    }
}

/// TVL thresholds for levels 1 to 3, in fiat
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LevelThresholds {
    pub level1: f64,
    pub level2: f64,
    pub level3: f64,
}

impl LevelThresholds {
    pub fn new(level1: f64, level2: f64, level3: f64) -> Result<Self> {
        let thresholds = Self {
            level1,
            level2,
            level3,
        };
        thresholds.validate()?;
        Ok(thresholds)
    }

    /// Thresholds must be finite, non-negative and ascending
    pub fn validate(&self) -> Result<()> {
        let values = [self.level1, self.level2, self.level3];
        if values.iter().any(|v| !v.is_finite() || *v < 0.0) {
            return Err(ConfigError::InvalidThresholds(format!(
                "thresholds must be finite and non-negative: {:?}",
                values
            )));
        }
        if !(self.level1 <= self.level2 && self.level2 <= self.level3) {
            return Err(ConfigError::InvalidThresholds(format!(
                "thresholds must be ascending: {} / {} / {}",
                self.level1, self.level2, self.level3
            )));
        }
        Ok(())
    }
}

impl Default for LevelThresholds {
    fn default() -> Self {
        Self {
            level1: 100.0,
            level2: 1_000.0,
            level3: 10_000.0,
        }
    }
}

/// Global yield split in percent
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ProtocolSplit {
    pub protocol_percent: f64,
    pub user_percent: f64,
    pub referral_percent: f64,
}

impl ProtocolSplit {
    pub fn new(protocol_percent: f64, user_percent: f64, referral_percent: f64) -> Result<Self> {
        let split = Self {
            protocol_percent,
            user_percent,
            referral_percent,
        };
        split.validate()?;
        Ok(split)
    }

    pub fn total(&self) -> f64 {
        self.protocol_percent + self.user_percent + self.referral_percent
    }

    pub fn validate(&self) -> Result<()> {
        let total = self.total();
        let parts = [self.protocol_percent, self.user_percent, self.referral_percent];
        if parts.iter().any(|p| !p.is_finite() || *p < 0.0)
            || (total - 100.0).abs() > SPLIT_EPSILON
        {
            return Err(ConfigError::InvalidSplit {
                protocol: self.protocol_percent,
                user: self.user_percent,
                referral: self.referral_percent,
                total,
            });
        }
        Ok(())
    }
}

impl Default for ProtocolSplit {
    fn default() -> Self {
        Self {
            protocol_percent: 10.0,
            user_percent: 85.0,
            referral_percent: 5.0,
        }
    }
}

/// Estimated annual yield per token, as a fraction (0.02 = 2%)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ApyTable {
    pub btc: f64,
    pub cb_btc: f64,
    pub usdc: f64,
}

impl ApyTable {
    pub fn for_token(&self, token: TokenType) -> f64 {
        match token {
            TokenType::Btc => self.btc,
            TokenType::CbBtc => self.cb_btc,
            TokenType::Usdc => self.usdc,
        }
    }
}

impl Default for ApyTable {
    fn default() -> Self {
        Self {
            btc: 0.02,
            cb_btc: 0.02,
            usdc: 0.05,
        }
    }
}

/// Points granted per activity
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PointsSchedule {
    pub react_post: u64,
    pub refer_user: u64,
    pub daily_login: u64,
    pub login_streak_two_weeks: u64,
    pub login_streak_one_month: u64,
    pub swap_5k: u64,
    pub swap_10k: u64,
}

impl Default for PointsSchedule {
    fn default() -> Self {
        Self {
            react_post: 5,
            refer_user: 50,
            daily_login: 10,
            login_streak_two_weeks: 50,
            login_streak_one_month: 100,
            swap_5k: 5,
            swap_10k: 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_ordering() {
        assert!(CustomerLevel::Level0 < CustomerLevel::Level1);
        assert!(CustomerLevel::Level2 < CustomerLevel::Level3);
        assert_eq!(CustomerLevel::default(), CustomerLevel::Level0);
    }

    #[test]
    fn test_level_parsing() {
        assert_eq!("LEVEL_2".parse::<CustomerLevel>(), Ok(CustomerLevel::Level2));
        assert_eq!("level3".parse::<CustomerLevel>(), Ok(CustomerLevel::Level3));
        assert_eq!("1".parse::<CustomerLevel>(), Ok(CustomerLevel::Level1));
        assert!("LEVEL_4".parse::<CustomerLevel>().is_err());
    }

    #[test]
    fn test_boost_parsing() {
        assert_eq!("BOOST_ME".parse::<BoostType>(), Ok(BoostType::BoostMe));
        assert_eq!("boost-network".parse::<BoostType>(), Ok(BoostType::BoostNetwork));
        assert_eq!("brand".parse::<BoostType>(), Ok(BoostType::BoostBrand));
        assert!("boost_everyone".parse::<BoostType>().is_err());
    }

    #[test]
    fn test_default_split_is_valid() {
        let split = ProtocolSplit::default();
        assert!(split.validate().is_ok());
        assert_eq!(split.total(), 100.0);
    }

    #[test]
    fn test_invalid_split_rejected() {
        let err = ProtocolSplit::new(10.0, 80.0, 5.0).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidSplit { total, .. } if total == 95.0));

        assert!(ProtocolSplit::new(-5.0, 100.0, 5.0).is_err());
        assert!(ProtocolSplit::new(20.0, 70.0, 10.0).is_ok());
    }

    #[test]
    fn test_thresholds_validation() {
        assert!(LevelThresholds::default().validate().is_ok());
        assert!(LevelThresholds::new(500.0, 100.0, 1_000.0).is_err());
        assert!(LevelThresholds::new(f64::NAN, 100.0, 1_000.0).is_err());
        assert!(LevelThresholds::new(50.0, 50.0, 50.0).is_ok());
    }

    #[test]
    fn test_apy_lookup() {
        let apy = ApyTable::default();
        assert_eq!(apy.for_token(TokenType::Btc), 0.02);
        assert_eq!(apy.for_token(TokenType::Usdc), 0.05);
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&CustomerLevel::Level1).unwrap();
        assert_eq!(json, "\"LEVEL_1\"");
        let json = serde_json::to_string(&BoostType::BoostCustomer).unwrap();
        assert_eq!(json, "\"BOOST_CUSTOMER\"");
        let token: TokenType = serde_json::from_str("\"cbBTC\"").unwrap();
        assert_eq!(token, TokenType::CbBtc);
    }
}
