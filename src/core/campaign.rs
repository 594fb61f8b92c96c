//! Campaign accessors - create, look up, update, and remove campaigns.
//!
//! Same create-by-slug dedup policy as businesses: a colliding name returns
//! the existing campaign and leaves the collection unchanged.

use crate::{
    core::ident::{new_id, slugify},
    errors::Result,
    records::{Campaign, SocialLinks},
    store::{self, keys},
};
use chrono::Utc;
use sea_orm::DatabaseConnection;
use tracing::{debug, warn};

/// Fields supplied when creating a campaign; id, slug, and timestamp are
/// assigned by the store.
#[derive(Debug, Clone)]
pub struct NewCampaign {
    /// Business the campaign belongs to
    pub business_id: Option<String>,
    /// Display name; also the slug source
    pub name: String,
    /// Short description
    pub description: Option<String>,
    /// Stamps needed to fill the card
    pub stamps_required: u32,
    /// Whether the campaign starts active
    pub active: bool,
    /// Business owner user id
    pub owner_id: Option<String>,
    /// Contact email
    pub contact_email: Option<String>,
    /// Contact phone
    pub contact_phone: Option<String>,
    /// Social links
    pub social_links: Option<SocialLinks>,
}

/// Optional field updates for a campaign. Absent fields are left unchanged;
/// the slug is never touched.
#[derive(Debug, Clone, Default)]
pub struct CampaignPatch {
    /// New business link
    pub business_id: Option<String>,
    /// New display name
    pub name: Option<String>,
    /// New description
    pub description: Option<String>,
    /// New stamp requirement
    pub stamps_required: Option<u32>,
    /// New active state
    pub active: Option<bool>,
    /// New owner
    pub owner_id: Option<String>,
    /// New contact email
    pub contact_email: Option<String>,
    /// New contact phone
    pub contact_phone: Option<String>,
    /// New social links (replaces the whole set)
    pub social_links: Option<SocialLinks>,
}

/// Lists all campaigns, newest first.
///
/// # Errors
/// Returns an error if the store is unavailable.
pub async fn list_campaigns(db: &DatabaseConnection) -> Result<Vec<Campaign>> {
    store::read_collection(db, keys::CAMPAIGNS).await
}

/// Creates a campaign, or returns the existing one when the derived slug
/// collides. The collection grows by at most one record.
///
/// # Errors
/// Returns an error if the store is unavailable.
pub async fn add_campaign(db: &DatabaseConnection, input: NewCampaign) -> Result<Campaign> {
    let slug = slugify(&input.name);
    let mut items = list_campaigns(db).await?;

    if let Some(existing) = items.iter().find(|c| c.slug == slug) {
        warn!("Campaign with slug '{}' already exists, returning it", slug);
        return Ok(existing.clone());
    }

    let campaign = Campaign {
        id: new_id(),
        business_id: input.business_id,
        name: input.name,
        slug,
        description: input.description,
        stamps_required: input.stamps_required,
        active: input.active,
        owner_id: input.owner_id,
        contact_email: input.contact_email,
        contact_phone: input.contact_phone,
        social_links: input.social_links,
        created_at: Utc::now(),
    };
    items.insert(0, campaign.clone());
    store::write_collection(db, keys::CAMPAIGNS, &items).await?;
    debug!("Campaign '{}' saved as '{}'", campaign.name, campaign.slug);
    Ok(campaign)
}

/// Applies a patch to the campaign with the given id. Silent no-op when the
/// id is absent.
///
/// # Errors
/// Returns an error if the store is unavailable.
pub async fn update_campaign(
    db: &DatabaseConnection,
    id: &str,
    patch: CampaignPatch,
) -> Result<()> {
    let mut items = list_campaigns(db).await?;
    for campaign in items.iter_mut().filter(|c| c.id == id) {
        if let Some(business_id) = patch.business_id.clone() {
            campaign.business_id = Some(business_id);
        }
        if let Some(name) = patch.name.clone() {
            campaign.name = name;
        }
        if let Some(description) = patch.description.clone() {
            campaign.description = Some(description);
        }
        if let Some(stamps_required) = patch.stamps_required {
            campaign.stamps_required = stamps_required;
        }
        if let Some(active) = patch.active {
            campaign.active = active;
        }
        if let Some(owner_id) = patch.owner_id.clone() {
            campaign.owner_id = Some(owner_id);
        }
        if let Some(contact_email) = patch.contact_email.clone() {
            campaign.contact_email = Some(contact_email);
        }
        if let Some(contact_phone) = patch.contact_phone.clone() {
            campaign.contact_phone = Some(contact_phone);
        }
        if let Some(social_links) = patch.social_links.clone() {
            campaign.social_links = Some(social_links);
        }
    }
    store::write_collection(db, keys::CAMPAIGNS, &items).await
}

/// Removes the campaign with the given id. Silent no-op when the id is
/// absent. Cards and rewards referencing the campaign are left in place.
///
/// # Errors
/// Returns an error if the store is unavailable.
pub async fn remove_campaign(db: &DatabaseConnection, id: &str) -> Result<()> {
    let mut items = list_campaigns(db).await?;
    items.retain(|c| c.id != id);
    store::write_collection(db, keys::CAMPAIGNS, &items).await
}

/// Finds a campaign by its slug.
///
/// # Errors
/// Returns an error if the store is unavailable.
pub async fn find_campaign_by_slug(
    db: &DatabaseConnection,
    slug: &str,
) -> Result<Option<Campaign>> {
    Ok(list_campaigns(db).await?.into_iter().find(|c| c.slug == slug))
}

/// Lists the campaigns belonging to a business, newest first.
///
/// # Errors
/// Returns an error if the store is unavailable.
pub async fn campaigns_for_business(
    db: &DatabaseConnection,
    business_id: &str,
) -> Result<Vec<Campaign>> {
    Ok(list_campaigns(db)
        .await?
        .into_iter()
        .filter(|c| c.business_id.as_deref() == Some(business_id))
        .collect())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::{create_custom_campaign, create_test_campaign, setup_test_db};

    #[tokio::test]
    async fn test_punctuated_name_dedups_against_clean_name() -> Result<()> {
        let db = setup_test_db().await?;

        let first = create_test_campaign(&db, "Coffee Lovers!!").await?;
        assert_eq!(first.slug, "coffee-lovers");

        let second = create_test_campaign(&db, "Coffee Lovers").await?;
        assert_eq!(second.id, first.id);
        assert_eq!(list_campaigns(&db).await?.len(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn test_find_by_slug() -> Result<()> {
        let db = setup_test_db().await?;
        let campaign = create_test_campaign(&db, "Tea Time").await?;

        let found = find_campaign_by_slug(&db, "tea-time").await?.unwrap();
        assert_eq!(found.id, campaign.id);
        assert!(find_campaign_by_slug(&db, "absent").await?.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn test_campaigns_for_business_filters_and_orders() -> Result<()> {
        let db = setup_test_db().await?;

        let mine_old = create_custom_campaign(&db, "Mine Old", Some("biz-1")).await?;
        create_custom_campaign(&db, "Theirs", Some("biz-2")).await?;
        let mine_new = create_custom_campaign(&db, "Mine New", Some("biz-1")).await?;

        let campaigns = campaigns_for_business(&db, "biz-1").await?;
        assert_eq!(campaigns, vec![mine_new, mine_old]);
        Ok(())
    }

    #[tokio::test]
    async fn test_update_patches_only_given_fields() -> Result<()> {
        let db = setup_test_db().await?;
        let campaign = create_test_campaign(&db, "Loyal Friends").await?;

        update_campaign(
            &db,
            &campaign.id,
            CampaignPatch {
                active: Some(false),
                stamps_required: Some(12),
                ..Default::default()
            },
        )
        .await?;

        let updated = find_campaign_by_slug(&db, &campaign.slug).await?.unwrap();
        assert!(!updated.active);
        assert_eq!(updated.stamps_required, 12);
        assert_eq!(updated.name, campaign.name);
        assert_eq!(updated.created_at, campaign.created_at);
        Ok(())
    }

    #[tokio::test]
    async fn test_remove_does_not_cascade() -> Result<()> {
        let db = setup_test_db().await?;
        let campaign = create_test_campaign(&db, "Short Lived").await?;
        let card =
            crate::core::card::get_or_create_card(&db, "customer-1", &campaign.id).await?;

        remove_campaign(&db, &campaign.id).await?;

        assert!(list_campaigns(&db).await?.is_empty());
        // The card referencing the removed campaign survives
        let cards = crate::core::card::list_cards(&db).await?;
        assert_eq!(cards, vec![card]);
        Ok(())
    }
}
