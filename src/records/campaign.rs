//! Campaign record - a stamp-collection program run by a business.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A loyalty campaign customers can join and collect stamps in
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    /// Unique identifier
    pub id: String,
    /// Business this campaign belongs to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_id: Option<String>,
    /// Display name (e.g., "Coffee Lovers")
    pub name: String,
    /// URL-safe identifier derived from the name; unique among campaigns
    pub slug: String,
    /// Short description (e.g., "Buy 9 get 1 free")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Stamps needed to fill the card
    pub stamps_required: u32,
    /// Whether customers can currently collect stamps
    pub active: bool,
    /// Business owner user ID, duplicated here for older stored data
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<String>,
    /// Contact email shown on the campaign page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
    /// Contact phone shown on the campaign page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_phone: Option<String>,
    /// Social media links shown on the campaign page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub social_links: Option<SocialLinks>,
    /// When the campaign was created
    pub created_at: DateTime<Utc>,
}

/// Optional social media links for a campaign
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialLinks {
    /// Website URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    /// Facebook profile URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,
    /// Instagram profile URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
    /// Twitter profile URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
}
