//! QR code record - a scannable payload tied to a campaign.
//!
//! The image itself is rendered elsewhere; the data layer only stores the
//! payload string and the pre-rendered data URL.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A generated QR code and its payload
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QrCode {
    /// Unique identifier
    pub id: String,
    /// Campaign this code belongs to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub campaign_id: Option<String>,
    /// The scannable payload (e.g., `"stamp:campaign:coffee"`)
    pub code: String,
    /// Pre-rendered image as a data URL
    pub data_url: String,
    /// What scanning this code does
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purpose: Option<String>,
    /// Whether scans of this code are currently honored
    pub active: bool,
    /// When the code was generated
    pub created_at: DateTime<Utc>,
}
