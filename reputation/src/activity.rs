//! Active-status score

pub const LOGIN_WEIGHT: f64 = 0.2;
pub const ENGAGEMENT_WEIGHT: f64 = 0.8;

/// Weighted activity score from daily-login and engagement percentages
pub fn activity_score(daily_login_percent: f64, engagement_percent: f64) -> f64 {
    daily_login_percent * LOGIN_WEIGHT + engagement_percent * ENGAGEMENT_WEIGHT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activity_score() {
        assert_eq!(activity_score(100.0, 100.0), 100.0);
        assert_eq!(activity_score(100.0, 0.0), 20.0);
        assert!((activity_score(50.0, 25.0) - 30.0).abs() < 1e-9);
    }
}
