//! Reward record - what a customer redeems a full card for.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A redeemable reward attached to a campaign
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reward {
    /// Unique identifier
    pub id: String,
    /// Campaign this reward belongs to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub campaign_id: Option<String>,
    /// Display name (e.g., "Free Coffee")
    pub name: String,
    /// Short description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Stamps required to redeem
    pub stamps_required: u32,
    /// Whether the reward can currently be redeemed
    pub active: bool,
    /// When the reward was created
    pub created_at: DateTime<Utc>,
}
