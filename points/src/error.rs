//! Points error types

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum PointsError {
    #[error("Weekly invite limit reached: {used} of {max} invites used")]
    InsufficientQuota { used: u32, max: u32 },
}

pub type Result<T> = std::result::Result<T, PointsError>;
