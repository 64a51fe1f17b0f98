//! BitRewards Economics Module
//!
//! Implements the money side of the rewards model:
//! - TVL (total value locked) computation
//! - Yield accrual (simple and compound)
//! - Yield distribution across user, brand, protocol and referrer
//! - Fiat/BTC pricing and a cached spot price

pub mod distribution;
pub mod error;
pub mod price_feed;
pub mod pricing;
pub mod tvl;
pub mod yields;

pub use distribution::{
    distribute_yield, remainder_recipient, YieldDistribution, YieldRecipient, YieldSplitter,
};
pub use error::{PriceError, Result};
pub use price_feed::{CachedPrice, FixedPrice, PriceSource};
pub use pricing::{PriceCalculator, PurchaseReward};
pub use tvl::{calculate_tvl, total_principal, tvl_growth_rate};
pub use yields::{
    compound_yield, days_elapsed, monthly_yield, pro_rata_share, simple_yield, withdrawable_yield,
    YieldFormula,
};

/// Economic constants
pub mod constants {
    /// Day count used to annualize rates
    pub const DAYS_PER_YEAR: f64 = 365.0;

    /// Compounding periods when none are specified (daily)
    pub const DEFAULT_COMPOUNDING_PERIODS: u32 = 365;

    /// Compounding periods for monthly accrual
    pub const MONTHLY_COMPOUNDING_PERIODS: u32 = 12;

    /// Days after which all accrued yield becomes withdrawable
    pub const WITHDRAWAL_PERIOD_DAYS: f64 = 30.0;

    pub const MILLIS_PER_DAY: f64 = 86_400_000.0;
}
