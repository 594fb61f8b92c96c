//! Coupon record - a percentage discount code.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A discount coupon
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coupon {
    /// Unique identifier
    pub id: String,
    /// Redeemable code string
    pub code: String,
    /// Discount percent, expected in 0-100 (not validated on write)
    pub discount: u32,
    /// Expiry timestamp; no expiry when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
    /// Whether the coupon can currently be used
    pub active: bool,
    /// When the coupon was created
    pub created_at: DateTime<Utc>,
}
