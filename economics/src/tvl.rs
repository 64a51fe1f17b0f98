//! Total value locked

use bitrewards_core::Deposit;

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Sum of deposit principal. Non-finite amounts count as zero.
pub fn total_principal(deposits: &[Deposit]) -> f64 {
    deposits
        .iter()
        .map(|d| finite_or_zero(d.principal_amount))
        .sum()
}

/// Fiat value of the deposits at the given spot price.
///
/// Deposits are assumed to share one unit; no currency conversion happens
/// between token types.
pub fn calculate_tvl(deposits: &[Deposit], price: f64) -> f64 {
    total_principal(deposits) * finite_or_zero(price)
}

/// Percentage change between two TVL readings, 0 when there is no baseline
pub fn tvl_growth_rate(current: f64, previous: f64) -> f64 {
    if previous == 0.0 {
        return 0.0;
    }
    ((current - previous) / previous) * 100.0
}
