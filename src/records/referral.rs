//! Referral record - one per owner, tracking how many users they referred.
//!
//! The code is derived deterministically from the owner id, so two store
//! instances independently agree on it before anything is persisted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user's referral code and running count
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Referral {
    /// Unique identifier
    pub id: String,
    /// User who owns this referral code
    pub owner_user_id: String,
    /// Shareable code derived from the owner id
    pub code: String,
    /// How many users joined through this code
    pub referred_count: u32,
    /// When the referral record was created
    pub created_at: DateTime<Utc>,
}
