use bitrewards_core::{CustomerLevel, LevelThresholds, PointsSchedule};
use reputation::*;

#[test]
fn test_tvl_scenario_level_two() {
    // 0.035 BTC at $60k
    let tvl = (0.01 + 0.02 + 0.005) * 60_000.0;
    assert_eq!(
        determine_level(tvl, &LevelThresholds::default()),
        CustomerLevel::Level2
    );
}

#[test]
fn test_thousandth_and_thousand_first_like() {
    let schedule = PointsSchedule::default();
    let table = RewardTable::default().with_tier(CustomerLevel::Level0, 1.0, 1_000);
    let mut post = PostRewardState::gamified(500.0, table);
    post.like_count = 999;

    // 1000th like still pays
    let outcome = post
        .engage(EngagementKind::Like, CustomerLevel::Level0, &schedule)
        .unwrap();
    assert_eq!(outcome.reward, 1.0);
    assert_eq!(post.like_count, 1_000);
    assert_eq!(post.pool.remaining(), 499.0);

    // 1001st like is over the cap
    let outcome = post
        .engage(EngagementKind::Like, CustomerLevel::Level0, &schedule)
        .unwrap();
    assert_eq!(outcome.reward, 0.0);
    assert_eq!(post.like_count, 1_001);
    assert_eq!(post.pool.remaining(), 499.0);
}

#[test]
fn test_pool_drains_across_tiers() {
    let schedule = PointsSchedule::default();
    let table = RewardTable::default()
        .with_tier(CustomerLevel::Level0, 1.0, 0)
        .with_tier(CustomerLevel::Level3, 4.0, 0);
    let mut post = PostRewardState::gamified(6.0, table);

    let first = post
        .engage(EngagementKind::Like, CustomerLevel::Level3, &schedule)
        .unwrap();
    let second = post
        .engage(EngagementKind::Like, CustomerLevel::Level3, &schedule)
        .unwrap();
    let third = post
        .engage(EngagementKind::Like, CustomerLevel::Level0, &schedule)
        .unwrap();

    assert_eq!(first.reward, 4.0);
    assert_eq!(second.reward, 2.0);
    assert!(second.capped_by_budget);
    assert_eq!(third.reward, 0.0);
    assert!(post.pool.is_exhausted());
    assert_eq!(post.like_count, 3);
}

#[test]
fn test_reclassification_after_withdrawal() {
    let thresholds = LevelThresholds::default();
    let before = determine_level(12_000.0, &thresholds);
    let after = determine_level(900.0, &thresholds);

    assert_eq!(
        level_change(before, after),
        Some(LevelChange::Demoted {
            from: CustomerLevel::Level3,
            to: CustomerLevel::Level1,
        })
    );
}

#[test]
fn test_post_state_persists_as_json() {
    let table = RewardTable::default()
        .with_tier(CustomerLevel::Level1, 0.5, 200)
        .with_tier(CustomerLevel::Level2, 1.5, 50);
    let post = PostRewardState::gamified(25.0, table);

    let json = serde_json::to_string(&post).unwrap();
    let back: PostRewardState = serde_json::from_str(&json).unwrap();
    assert_eq!(back, post);

    // Missing tiers in stored tables default to zero
    let sparse: RewardTable =
        serde_json::from_str(r#"{"rewards":{"level_2":1.5},"caps":{}}"#).unwrap();
    assert_eq!(sparse.tier(CustomerLevel::Level2), (1.5, 0));
    assert_eq!(sparse.tier(CustomerLevel::Level0), (0.0, 0));
}
