//! Purchase reward pricing and BTC/USD conversions

use serde::{Deserialize, Serialize};

use bitrewards_core::btc_to_sats;

/// Reward owed for a purchase, in both fiat and bitcoin
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurchaseReward {
    pub purchase_usd: f64,
    pub reward_rate: f64,
    pub btc_price: f64,
    pub reward_usd: f64,
    pub reward_btc: f64,
    pub reward_sats: u64,
}

pub struct PriceCalculator;

impl PriceCalculator {
    /// BTC bought by `usd_amount` at `btc_price`. A non-positive price buys nothing.
    pub fn btc_amount(usd_amount: f64, btc_price: f64) -> f64 {
        if btc_price <= 0.0 {
            return 0.0;
        }
        usd_amount / btc_price
    }

    pub fn btc_to_usd(btc_amount: f64, btc_price: f64) -> f64 {
        btc_amount * btc_price
    }

    pub fn calculate_purchase_reward(
        purchase_usd: f64,
        reward_rate: f64,
        btc_price: f64,
    ) -> PurchaseReward {
        let reward_usd = purchase_usd * reward_rate;
        let reward_btc = Self::btc_amount(reward_usd, btc_price);

        PurchaseReward {
            purchase_usd,
            reward_rate,
            btc_price,
            reward_usd,
            reward_btc,
            reward_sats: btc_to_sats(reward_btc),
        }
    }

    /// Eight decimal places, e.g. `0.00123456`
    pub fn format_btc(amount: f64) -> String {
        format!("{:.8}", amount)
    }

    /// US dollar formatting with thousands separators, e.g. `$1,234.56`
    pub fn format_usd(amount: f64) -> String {
        let cents = (amount.abs() * 100.0).round() as u64;
        let dollars = cents / 100;
        let digits = dollars.to_string();

        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(c);
        }

        let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
        format!("{}${}.{:02}", sign, grouped, cents % 100)
    }
}
