//! Loyalty card record - a customer's stamp count in one campaign.
//!
//! At most one card exists per (customer, campaign) pair, enforced solely by
//! the get-or-create accessor in [`crate::core::card`], not by storage.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A customer's stamp card for a campaign
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoyaltyCard {
    /// Unique identifier
    pub id: String,
    /// Customer the card belongs to
    pub customer_id: String,
    /// Campaign the card collects stamps in
    pub campaign_id: String,
    /// Collected stamp count; may exceed the campaign's requirement
    pub stamps: u32,
    /// When the card was last stamped or adjusted
    pub updated_at: DateTime<Utc>,
}
