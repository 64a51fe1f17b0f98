//! Spot price caching
//!
//! Callers poll an external price source; the cache keeps a fetched price
//! fresh for a TTL and degrades to the last good price (or a configured
//! fallback) when the source fails.

use chrono::{DateTime, Duration, Utc};

use bitrewards_core::PriceSettings;

use crate::error::{PriceError, Result};

/// Anything that can quote a BTC/USD spot price
pub trait PriceSource {
    fn fetch_usd(&self) -> Result<f64>;
}

/// Constant price, for tests and offline use
#[derive(Debug, Clone, Copy)]
pub struct FixedPrice(pub f64);

impl PriceSource for FixedPrice {
    fn fetch_usd(&self) -> Result<f64> {
        Ok(self.0)
    }
}

#[derive(Debug, Clone, Copy)]
struct Quote {
    price: f64,
    fetched_at: DateTime<Utc>,
}

pub struct CachedPrice<S: PriceSource> {
    source: S,
    ttl: Duration,
    fallback: f64,
    last: Option<Quote>,
}

impl<S: PriceSource> CachedPrice<S> {
    pub fn new(source: S, ttl: Duration, fallback: f64) -> Self {
        Self {
            source,
            ttl,
            fallback,
            last: None,
        }
    }

    pub fn from_settings(source: S, settings: &PriceSettings) -> Self {
        Self::new(
            source,
            Duration::seconds(settings.cache_ttl_secs),
            settings.fallback_usd,
        )
    }

    /// Current price, refreshing through the source if the cache is stale
    pub fn price(&mut self) -> f64 {
        self.price_at(Utc::now())
    }

    pub fn price_at(&mut self, now: DateTime<Utc>) -> f64 {
        if let Some(quote) = self.last {
            if now - quote.fetched_at < self.ttl {
                return quote.price;
            }
        }

        match self.fetch_checked() {
            Ok(price) => {
                self.last = Some(Quote {
                    price,
                    fetched_at: now,
                });
                price
            }
            Err(e) => match self.last {
                Some(quote) => {
                    log::warn!(
                        "Price fetch failed ({}), reusing price from {}",
                        e,
                        quote.fetched_at
                    );
                    quote.price
                }
                None => {
                    log::warn!(
                        "Price fetch failed ({}), using fallback ${}",
                        e,
                        self.fallback
                    );
                    self.fallback
                }
            },
        }
    }

    /// Time of the last successful fetch
    pub fn last_fetched(&self) -> Option<DateTime<Utc>> {
        self.last.map(|q| q.fetched_at)
    }

    fn fetch_checked(&self) -> Result<f64> {
        let price = self.source.fetch_usd()?;
        if !price.is_finite() || price <= 0.0 {
            return Err(PriceError::InvalidPrice(price));
        }
        Ok(price)
    }
}
