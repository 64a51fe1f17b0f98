//! Economics error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PriceError {
    #[error("Price source unavailable: {0}")]
    Unavailable(String),

    #[error("Invalid price: {0}")]
    InvalidPrice(f64),
}

pub type Result<T> = std::result::Result<T, PriceError>;
