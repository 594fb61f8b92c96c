//! One-time demo-data seeding.
//!
//! Gated by a persisted flag rather than by collection emptiness alone: once
//! the flag is set, later runs never reseed, even if a user deletes every
//! record. Reseeding requires clearing the flag (and the data) explicitly,
//! e.g. via [`crate::store::clear_all`].

use crate::{
    config::seed::SeedData,
    core::{
        business::{self, NewBusiness},
        campaign::{self, NewCampaign},
    },
    errors::Result,
    records::{BusinessColors, SocialLinks},
    store,
};
use sea_orm::DatabaseConnection;
use tracing::{debug, info};

/// Seeds the demo dataset on first run and marks the store initialized.
/// Returns whether any seeding happened. Safe to call on every startup.
///
/// # Errors
/// Returns an error if the store is unavailable.
pub async fn seed_if_empty(db: &DatabaseConnection, seed: &SeedData) -> Result<bool> {
    if store::is_initialized(db).await? {
        debug!("Store already initialized, skipping seed");
        return Ok(false);
    }

    let mut seeded = false;
    if business::list_businesses(db).await?.is_empty() {
        info!("First-time initialization: seeding demo business");
        let demo_business = business::add_business(
            db,
            NewBusiness {
                name: seed.business.name.clone(),
                description: seed.business.description.clone(),
                logo: seed.business.logo.clone(),
                template: seed.business.template.clone(),
                colors: BusinessColors {
                    primary: seed.business.primary_color.clone(),
                    background: seed.business.background_color.clone(),
                },
                owner_id: Some(seed.business.owner_id.clone()),
            },
        )
        .await?;

        if campaign::list_campaigns(db).await?.is_empty() {
            info!("Seeding {} demo campaign(s)", seed.campaigns.len());
            for demo_campaign in &seed.campaigns {
                let social_links =
                    if demo_campaign.website.is_some() || demo_campaign.instagram.is_some() {
                        Some(SocialLinks {
                            website: demo_campaign.website.clone(),
                            instagram: demo_campaign.instagram.clone(),
                            ..Default::default()
                        })
                    } else {
                        None
                    };
                campaign::add_campaign(
                    db,
                    NewCampaign {
                        business_id: Some(demo_business.id.clone()),
                        name: demo_campaign.name.clone(),
                        description: demo_campaign.description.clone(),
                        stamps_required: demo_campaign.stamps_required,
                        active: demo_campaign.active,
                        owner_id: Some(seed.business.owner_id.clone()),
                        contact_email: demo_campaign.contact_email.clone(),
                        contact_phone: None,
                        social_links,
                    },
                )
                .await?;
            }
        }
        seeded = true;
    }

    store::set_initialized(db, true).await?;
    info!("Store initialization complete");
    Ok(seeded)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::core::{business::list_businesses, campaign::list_campaigns};
    use crate::test_utils::setup_test_db;

    #[tokio::test]
    async fn test_seeds_demo_dataset_once() -> Result<()> {
        let db = setup_test_db().await?;
        let seed = SeedData::default();

        assert!(seed_if_empty(&db, &seed).await?);

        let businesses = list_businesses(&db).await?;
        assert_eq!(businesses.len(), 1);
        assert_eq!(businesses[0].name, "Demo Coffee Shop");
        assert_eq!(businesses[0].slug, "demo-coffee-shop");
        assert_eq!(businesses[0].owner_id.as_deref(), Some("demo-business-admin"));

        let campaigns = list_campaigns(&db).await?;
        assert_eq!(campaigns.len(), 1);
        assert_eq!(campaigns[0].name, "Coffee Lovers");
        assert_eq!(campaigns[0].stamps_required, 10);
        assert_eq!(campaigns[0].business_id.as_deref(), Some(businesses[0].id.as_str()));

        // Second call is a no-op; nothing is duplicated
        assert!(!seed_if_empty(&db, &seed).await?);
        assert_eq!(list_businesses(&db).await?.len(), 1);
        assert_eq!(list_campaigns(&db).await?.len(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn test_emptied_collections_do_not_reseed_while_flag_is_set() -> Result<()> {
        let db = setup_test_db().await?;
        let seed = SeedData::default();
        seed_if_empty(&db, &seed).await?;

        let business_id = list_businesses(&db).await?[0].id.clone();
        business::remove_business(&db, &business_id).await?;
        assert!(list_businesses(&db).await?.is_empty());

        assert!(!seed_if_empty(&db, &seed).await?);
        assert!(list_businesses(&db).await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_clearing_flag_and_data_reseeds() -> Result<()> {
        let db = setup_test_db().await?;
        let seed = SeedData::default();
        seed_if_empty(&db, &seed).await?;

        store::clear_all(&db).await?;

        assert!(seed_if_empty(&db, &seed).await?);
        assert_eq!(list_businesses(&db).await?.len(), 1);
        assert_eq!(list_campaigns(&db).await?.len(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn test_existing_data_marks_initialized_without_seeding() -> Result<()> {
        let db = setup_test_db().await?;
        crate::test_utils::create_test_business(&db, "Pre-existing").await?;

        assert!(!seed_if_empty(&db, &SeedData::default()).await?);

        let businesses = list_businesses(&db).await?;
        assert_eq!(businesses.len(), 1);
        assert_eq!(businesses[0].name, "Pre-existing");
        assert!(store::is_initialized(&db).await?);
        Ok(())
    }
}
