//! Yield accrual formulas

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use bitrewards_core::{ApyTable, TokenType};

use crate::constants::{
    DAYS_PER_YEAR, DEFAULT_COMPOUNDING_PERIODS, MILLIS_PER_DAY, MONTHLY_COMPOUNDING_PERIODS,
    WITHDRAWAL_PERIOD_DAYS,
};

/// Which accrual formula applies to a computation
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum YieldFormula {
    /// `P * r * (days / 365)`
    #[default]
    Simple,
    /// `P * (1 + r/n)^(n*t) - P`
    Compound { periods_per_year: u32 },
}

impl YieldFormula {
    pub fn daily_compound() -> Self {
        Self::Compound {
            periods_per_year: DEFAULT_COMPOUNDING_PERIODS,
        }
    }

    pub fn monthly_compound() -> Self {
        Self::Compound {
            periods_per_year: MONTHLY_COMPOUNDING_PERIODS,
        }
    }

    pub fn accrue(&self, principal: f64, apy: f64, days_elapsed: f64) -> f64 {
        match *self {
            Self::Simple => simple_yield(principal, apy, days_elapsed),
            Self::Compound { periods_per_year } => {
                compound_yield(principal, apy, days_elapsed, periods_per_year)
            }
        }
    }
}

pub fn simple_yield(principal: f64, apy: f64, days_elapsed: f64) -> f64 {
    principal * apy * (days_elapsed / DAYS_PER_YEAR)
}

/// Compound interest earned, excluding the principal.
///
/// Zero compounding periods has no meaning; it degrades to simple interest.
pub fn compound_yield(principal: f64, apy: f64, days_elapsed: f64, periods_per_year: u32) -> f64 {
    if periods_per_year == 0 {
        return simple_yield(principal, apy, days_elapsed);
    }
    let n = periods_per_year as f64;
    let years = days_elapsed / DAYS_PER_YEAR;
    principal * (1.0 + apy / n).powf(n * years) - principal
}

/// Fractional days between two instants, never negative
pub fn days_elapsed(from: DateTime<Utc>, to: DateTime<Utc>) -> f64 {
    let millis = (to - from).num_milliseconds() as f64;
    (millis / MILLIS_PER_DAY).max(0.0)
}

/// Yield accrued on a deposit since it was made, compounded monthly
pub fn monthly_yield(
    principal: f64,
    token: TokenType,
    deposit_date: DateTime<Utc>,
    now: DateTime<Utc>,
    apy_table: &ApyTable,
) -> f64 {
    let apy = apy_table.for_token(token);
    let days = days_elapsed(deposit_date, now);
    YieldFormula::monthly_compound().accrue(principal, apy, days)
}

/// Portion of accrued yield that can be withdrawn now.
///
/// Everything is withdrawable on the first withdrawal or once a full period
/// has passed since the last one; otherwise the share grows linearly.
pub fn withdrawable_yield(
    total_yield: f64,
    last_withdrawal: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) -> f64 {
    let Some(last) = last_withdrawal else {
        return total_yield;
    };

    let days = days_elapsed(last, now);
    if days >= WITHDRAWAL_PERIOD_DAYS {
        return total_yield;
    }
    total_yield * (days / WITHDRAWAL_PERIOD_DAYS)
}

/// A user's share of a brand's yield, proportional to principal
pub fn pro_rata_share(
    user_principal: f64,
    total_brand_principal: f64,
    total_brand_yield: f64,
) -> f64 {
    if total_brand_principal == 0.0 {
        return 0.0;
    }
    total_brand_yield * (user_principal / total_brand_principal)
}
