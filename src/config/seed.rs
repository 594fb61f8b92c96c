//! Seed dataset loading from seed.toml
//!
//! This module provides functionality to load the starter dataset from a TOML
//! file. The business and campaigns defined in seed.toml are inserted exactly
//! once on first run to give a fresh installation non-empty demo content; see
//! [`crate::core::seed`]. When no file is present the built-in demo dataset
//! is used instead.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;

/// The entire seed dataset: one demo business and its campaigns
#[derive(Debug, Clone, Deserialize)]
pub struct SeedData {
    /// The demo business inserted when no businesses exist
    pub business: SeedBusiness,
    /// Campaigns linked to the demo business, inserted when no campaigns exist
    #[serde(default)]
    pub campaigns: Vec<SeedCampaign>,
}

/// Seed configuration for the demo business
#[derive(Debug, Clone, Deserialize)]
pub struct SeedBusiness {
    /// Display name of the business
    pub name: String,
    /// Short description shown on the public page
    pub description: Option<String>,
    /// Logo asset path or data URL
    pub logo: Option<String>,
    /// Card template identifier
    pub template: String,
    /// Primary brand color (hex)
    pub primary_color: String,
    /// Background color (hex)
    pub background_color: String,
    /// Owner user identifier the demo data is attributed to
    pub owner_id: String,
}

/// Seed configuration for a single campaign
#[derive(Debug, Clone, Deserialize)]
pub struct SeedCampaign {
    /// Display name of the campaign
    pub name: String,
    /// Short description (e.g., "Buy 9 get 1 free")
    pub description: Option<String>,
    /// Stamps needed to fill the card
    pub stamps_required: u32,
    /// Whether the campaign starts out active
    pub active: bool,
    /// Contact email shown on the campaign page
    pub contact_email: Option<String>,
    /// Website link
    pub website: Option<String>,
    /// Instagram link
    pub instagram: Option<String>,
}

impl Default for SeedData {
    /// The built-in demo dataset, used when no seed.toml is present.
    fn default() -> Self {
        Self {
            business: SeedBusiness {
                name: "Demo Coffee Shop".to_string(),
                description: Some("Your favorite local coffee spot".to_string()),
                logo: Some("/placeholder.svg".to_string()),
                template: "modern".to_string(),
                primary_color: "#8B4513".to_string(),
                background_color: "#FFF8F0".to_string(),
                owner_id: "demo-business-admin".to_string(),
            },
            campaigns: vec![SeedCampaign {
                name: "Coffee Lovers".to_string(),
                description: Some("Buy 9 get 1 free".to_string()),
                stamps_required: 10,
                active: true,
                contact_email: Some("coffee@demo.com".to_string()),
                website: Some("https://example.com".to_string()),
                instagram: Some("https://instagram.com/coffeelovers".to_string()),
            }],
        }
    }
}

/// Loads the seed dataset from a TOML file
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid
/// - Required fields are missing
pub fn load_seed_data<P: AsRef<Path>>(path: P) -> Result<SeedData> {
    let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| Error::Config {
        message: format!("Failed to read seed file: {e}"),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse seed.toml: {e}"),
    })
}

/// Loads the seed dataset from the default location (./seed.toml), falling
/// back to the built-in demo dataset when the file does not exist.
///
/// # Errors
/// Returns an error if a seed.toml exists but cannot be parsed.
pub fn load_default_seed_data() -> Result<SeedData> {
    if Path::new("seed.toml").exists() {
        load_seed_data("seed.toml")
    } else {
        Ok(SeedData::default())
    }
}
