//! Bitcoin unit conversions

/// Satoshis per bitcoin (8 decimal places)
pub const SATS_PER_BTC: u64 = 100_000_000;

pub fn sats_to_btc(sats: u64) -> f64 {
    sats as f64 / SATS_PER_BTC as f64
}

/// Resolution (in satoshis) the product is snapped to before rounding down
const SUB_SAT_STEPS: f64 = 1_000.0;

/// Converts to satoshis, rounding down. Negative and non-finite amounts give 0.
///
/// Float noise below a thousandth of a satoshi is removed first, so an exact
/// amount such as 0.29 BTC converts to 29,000,000 rather than one less.
pub fn btc_to_sats(btc: f64) -> u64 {
    if !btc.is_finite() || btc <= 0.0 {
        return 0;
    }
    let sats = btc * SATS_PER_BTC as f64;
    ((sats * SUB_SAT_STEPS).round() / SUB_SAT_STEPS).floor() as u64
}
