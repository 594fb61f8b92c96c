//! Redemption record - an append-only log entry for a claimed reward.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One reward redemption by a user
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Redemption {
    /// Unique identifier
    pub id: String,
    /// User who redeemed
    pub user_id: String,
    /// Reward that was redeemed
    pub reward_id: String,
    /// When the redemption happened
    pub date: DateTime<Utc>,
}
