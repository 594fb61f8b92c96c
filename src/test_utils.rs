//! Shared test utilities for punchcard.
//!
//! This module provides common helper functions for setting up test stores
//! and creating test records with sensible defaults.

use crate::{
    core::{
        business::{self, NewBusiness},
        campaign::{self, NewCampaign},
    },
    errors::Result,
    records::{Business, BusinessColors, Campaign},
};
use sea_orm::DatabaseConnection;

/// Creates an in-memory `SQLite` store with the key-value table initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Creates a test business with sensible defaults.
///
/// # Arguments
/// * `db` - Store connection
/// * `name` - Business name (slug source)
///
/// # Defaults
/// * `template`: "modern"
/// * `colors`: brown on cream
/// * `owner_id`: "test-owner"
pub async fn create_test_business(db: &DatabaseConnection, name: &str) -> Result<Business> {
    business::add_business(
        db,
        NewBusiness {
            name: name.to_string(),
            description: Some("A test business".to_string()),
            logo: None,
            template: "modern".to_string(),
            colors: BusinessColors {
                primary: "#8B4513".to_string(),
                background: "#FFF8F0".to_string(),
            },
            owner_id: Some("test-owner".to_string()),
        },
    )
    .await
}

/// Creates a test campaign with sensible defaults and no business link.
///
/// # Defaults
/// * `stamps_required`: 10
/// * `active`: true
pub async fn create_test_campaign(db: &DatabaseConnection, name: &str) -> Result<Campaign> {
    create_custom_campaign(db, name, None).await
}

/// Creates a test campaign linked to a specific business.
/// Use this when the test needs per-business filtering.
pub async fn create_custom_campaign(
    db: &DatabaseConnection,
    name: &str,
    business_id: Option<&str>,
) -> Result<Campaign> {
    campaign::add_campaign(
        db,
        NewCampaign {
            business_id: business_id.map(ToString::to_string),
            name: name.to_string(),
            description: None,
            stamps_required: 10,
            active: true,
            owner_id: Some("test-owner".to_string()),
            contact_email: None,
            contact_phone: None,
            social_links: None,
        },
    )
    .await
}

/// Sets up a complete test environment with a business and one campaign.
/// Returns (db, business, campaign) for common test scenarios.
pub async fn setup_with_campaign() -> Result<(DatabaseConnection, Business, Campaign)> {
    let db = setup_test_db().await?;
    let business = create_test_business(&db, "Test Business").await?;
    let campaign = create_custom_campaign(&db, "Test Campaign", Some(&business.id)).await?;
    Ok((db, business, campaign))
}
