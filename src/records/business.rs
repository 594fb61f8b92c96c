//! Business record - a tenant's storefront identity.
//!
//! Each business belongs to an owner user and carries the visual defaults
//! (template, colors) its campaigns inherit. The slug is derived from the
//! name once at creation and is never recomputed on rename.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A business registered on the platform
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Business {
    /// Unique identifier
    pub id: String,
    /// Display name (e.g., "Demo Coffee Shop")
    pub name: String,
    /// URL-safe identifier derived from the name; unique among businesses
    pub slug: String,
    /// Short description shown on the public page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Logo asset path or data URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    /// Card template identifier used as the default for campaigns
    pub template: String,
    /// Brand colors
    pub colors: BusinessColors,
    /// User ID of the owning business admin
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<String>,
    /// When the business was created
    pub created_at: DateTime<Utc>,
}

/// Brand colors for a business
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessColors {
    /// Primary brand color (hex)
    pub primary: String,
    /// Background color (hex)
    pub background: String,
}
