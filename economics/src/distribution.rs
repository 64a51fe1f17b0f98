//! Yield distribution across protocol, referrer, user and brand

use serde::{Deserialize, Serialize};

use bitrewards_core::{BoostType, ProtocolSplit};

/// Party receiving the remainder after protocol and referral cuts
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum YieldRecipient {
    User,
    Brand,
}

/// Routing table for the remainder of a boost's yield
pub fn remainder_recipient(boost: BoostType) -> YieldRecipient {
    match boost {
        BoostType::BoostMe | BoostType::BoostCustomer => YieldRecipient::User,
        // Network boosts feed the brand-side reward pool
        BoostType::BoostBrand | BoostType::BoostNetwork => YieldRecipient::Brand,
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct YieldDistribution {
    pub to_user: f64,
    pub to_brand: f64,
    pub to_protocol: f64,
    pub to_referrer: f64,
}

impl YieldDistribution {
    pub fn total(&self) -> f64 {
        self.to_user + self.to_brand + self.to_protocol + self.to_referrer
    }
}

/// Split `total_yield` according to the boost type and the global split.
///
/// `user_percent` is informational: the user's share is whatever remains
/// after the protocol and referral cuts, so the parts always add up to the
/// total.
pub fn distribute_yield(
    total_yield: f64,
    boost: BoostType,
    split: &ProtocolSplit,
) -> YieldDistribution {
    let to_protocol = total_yield * (split.protocol_percent / 100.0);
    let to_referrer = total_yield * (split.referral_percent / 100.0);
    let remainder = total_yield - to_protocol - to_referrer;

    let mut distribution = YieldDistribution {
        to_protocol,
        to_referrer,
        ..Default::default()
    };

    match remainder_recipient(boost) {
        YieldRecipient::User => distribution.to_user = remainder,
        YieldRecipient::Brand => distribution.to_brand = remainder,
    }

    distribution
}

/// Yield splitter bound to a validated protocol split
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct YieldSplitter {
    split: ProtocolSplit,
}

impl YieldSplitter {
    pub fn new(split: ProtocolSplit) -> bitrewards_core::Result<Self> {
        split.validate()?;
        Ok(Self { split })
    }

    pub fn split_config(&self) -> &ProtocolSplit {
        &self.split
    }

    pub fn split(&self, total_yield: f64, boost: BoostType) -> YieldDistribution {
        distribute_yield(total_yield, boost, &self.split)
    }
}
