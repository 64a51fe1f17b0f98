use bitrewards_core::{BoostType, Deposit, ProtocolSplit, TokenType};
use chrono::{Duration, TimeZone, Utc};
use economics::*;

#[test]
fn test_tvl_from_deposits() {
    let deposits = vec![Deposit::btc(0.01), Deposit::btc(0.02), Deposit::btc(0.005)];

    assert!((total_principal(&deposits) - 0.035).abs() < 1e-12);
    assert!((calculate_tvl(&deposits, 60_000.0) - 2_100.0).abs() < 1e-9);
}

#[test]
fn test_monthly_accrual_then_split() {
    // $10k USDC deposited for a year, boosted towards a brand
    let deposited = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
    let now = deposited + Duration::days(365);
    let config = bitrewards_core::RewardsConfig::default();

    let accrued = monthly_yield(10_000.0, TokenType::Usdc, deposited, now, &config.apy);
    assert!(accrued > 500.0 && accrued < 520.0, "accrued {}", accrued);

    let d = distribute_yield(accrued, BoostType::BoostBrand, &config.split);
    assert_eq!(d.to_user, 0.0);
    assert!((d.to_protocol - accrued * 0.10).abs() < 1e-9);
    assert!((d.to_referrer - accrued * 0.05).abs() < 1e-9);
    assert!((d.total() - accrued).abs() < 1e-9);
}

#[test]
fn test_withdrawable_after_partial_month() {
    let now = Utc.with_ymd_and_hms(2025, 8, 15, 0, 0, 0).unwrap();
    let total = 0.0009;

    let half = withdrawable_yield(total, Some(now - Duration::days(15)), now);
    assert!((half - total / 2.0).abs() < 1e-15);
    assert_eq!(withdrawable_yield(total, Some(now - Duration::days(31)), now), total);
}

#[test]
fn test_brand_pool_pro_rata() {
    // Three users share a brand boost's yield in proportion to principal
    let principals = [0.5, 0.3, 0.2];
    let total: f64 = principals.iter().sum();
    let brand_yield = 0.01;

    let shares: Vec<f64> = principals
        .iter()
        .map(|p| pro_rata_share(*p, total, brand_yield))
        .collect();

    assert!((shares.iter().sum::<f64>() - brand_yield).abs() < 1e-15);
    assert!((shares[0] - 0.005).abs() < 1e-15);
}

#[test]
fn test_custom_split_distribution() {
    let split = ProtocolSplit::new(5.0, 85.0, 10.0).unwrap();
    let splitter = YieldSplitter::new(split).unwrap();

    let d = splitter.split(1_000.0, BoostType::BoostCustomer);
    assert!((d.to_protocol - 50.0).abs() < 1e-9);
    assert!((d.to_referrer - 100.0).abs() < 1e-9);
    assert!((d.to_user - 850.0).abs() < 1e-9);
}

#[test]
fn test_purchase_reward_in_sats() {
    let reward = PriceCalculator::calculate_purchase_reward(250.0, 0.01, 50_000.0);
    assert_eq!(reward.reward_sats, 5_000);
    assert_eq!(PriceCalculator::format_usd(reward.reward_usd), "$2.50");
}

#[test]
fn test_cached_price_feeds_tvl() {
    let mut feed = CachedPrice::new(FixedPrice(60_000.0), Duration::seconds(60), 50_000.0);
    let tvl = calculate_tvl(&[Deposit::btc(0.1)], feed.price());
    assert!((tvl - 6_000.0).abs() < 1e-9);
}
