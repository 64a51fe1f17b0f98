//! CoinGecko spot price source

use serde::Deserialize;
use std::time::Duration;

use economics::{PriceError, PriceSource};

pub const SIMPLE_PRICE_URL: &str =
    "https://api.coingecko.com/api/v3/simple/price?ids=bitcoin&vs_currencies=usd";

#[derive(Debug, Deserialize)]
struct SimplePrice {
    bitcoin: UsdQuote,
}

#[derive(Debug, Deserialize)]
struct UsdQuote {
    usd: f64,
}

pub struct CoinGecko {
    client: reqwest::blocking::Client,
    url: String,
}

impl CoinGecko {
    pub fn new(timeout: Duration) -> anyhow::Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()?;
        Ok(Self {
            client,
            url: SIMPLE_PRICE_URL.to_string(),
        })
    }
}

impl PriceSource for CoinGecko {
    fn fetch_usd(&self) -> economics::Result<f64> {
        let response = self
            .client
            .get(self.url.as_str())
            .send()
            .map_err(|e| PriceError::Unavailable(e.to_string()))?;

        if !response.status().is_success() {
            return Err(PriceError::Unavailable(format!(
                "HTTP {} from price API",
                response.status()
            )));
        }

        let body: SimplePrice = response
            .json()
            .map_err(|e| PriceError::Unavailable(format!("bad price payload: {}", e)))?;
        log::debug!("Fetched BTC price ${}", body.bitcoin.usd);
        Ok(body.bitcoin.usd)
    }
}
