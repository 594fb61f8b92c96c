//! Business accessors - create, look up, update, and remove businesses.
//!
//! Creation derives the slug from the name and dedups on it: a second create
//! with a colliding name returns the existing record instead of failing or
//! inserting a duplicate. Renames never recompute the slug.

use crate::{
    core::ident::{new_id, slugify},
    errors::Result,
    records::{Business, BusinessColors},
    store::{self, keys},
};
use chrono::Utc;
use sea_orm::DatabaseConnection;
use tracing::{debug, warn};

/// Fields supplied when creating a business; id, slug, and timestamp are
/// assigned by the store.
#[derive(Debug, Clone)]
pub struct NewBusiness {
    /// Display name; also the slug source
    pub name: String,
    /// Short description
    pub description: Option<String>,
    /// Logo asset path or data URL
    pub logo: Option<String>,
    /// Card template identifier
    pub template: String,
    /// Brand colors
    pub colors: BusinessColors,
    /// Owning user id
    pub owner_id: Option<String>,
}

/// Optional field updates for a business. Absent fields are left unchanged;
/// the slug is never touched.
#[derive(Debug, Clone, Default)]
pub struct BusinessPatch {
    /// New display name
    pub name: Option<String>,
    /// New description
    pub description: Option<String>,
    /// New logo
    pub logo: Option<String>,
    /// New template identifier
    pub template: Option<String>,
    /// New brand colors
    pub colors: Option<BusinessColors>,
    /// New owner
    pub owner_id: Option<String>,
}

/// Lists all businesses, newest first.
///
/// # Errors
/// Returns an error if the store is unavailable.
pub async fn list_businesses(db: &DatabaseConnection) -> Result<Vec<Business>> {
    store::read_collection(db, keys::BUSINESSES).await
}

/// Creates a business, or returns the existing one when the derived slug
/// collides. The collection grows by at most one record.
///
/// # Errors
/// Returns an error if the store is unavailable.
pub async fn add_business(db: &DatabaseConnection, input: NewBusiness) -> Result<Business> {
    let slug = slugify(&input.name);
    let mut items = list_businesses(db).await?;

    if let Some(existing) = items.iter().find(|b| b.slug == slug) {
        warn!("Business with slug '{}' already exists, returning it", slug);
        return Ok(existing.clone());
    }

    let business = Business {
        id: new_id(),
        name: input.name,
        slug,
        description: input.description,
        logo: input.logo,
        template: input.template,
        colors: input.colors,
        owner_id: input.owner_id,
        created_at: Utc::now(),
    };
    items.insert(0, business.clone());
    store::write_collection(db, keys::BUSINESSES, &items).await?;
    debug!("Business '{}' saved as '{}'", business.name, business.slug);
    Ok(business)
}

/// Applies a patch to the business with the given id. Silent no-op when the
/// id is absent.
///
/// # Errors
/// Returns an error if the store is unavailable.
pub async fn update_business(
    db: &DatabaseConnection,
    id: &str,
    patch: BusinessPatch,
) -> Result<()> {
    let mut items = list_businesses(db).await?;
    for business in items.iter_mut().filter(|b| b.id == id) {
        if let Some(name) = patch.name.clone() {
            business.name = name;
        }
        if let Some(description) = patch.description.clone() {
            business.description = Some(description);
        }
        if let Some(logo) = patch.logo.clone() {
            business.logo = Some(logo);
        }
        if let Some(template) = patch.template.clone() {
            business.template = template;
        }
        if let Some(colors) = patch.colors.clone() {
            business.colors = colors;
        }
        if let Some(owner_id) = patch.owner_id.clone() {
            business.owner_id = Some(owner_id);
        }
    }
    store::write_collection(db, keys::BUSINESSES, &items).await
}

/// Removes the business with the given id. Silent no-op when the id is
/// absent. Campaigns referencing the business are left in place.
///
/// # Errors
/// Returns an error if the store is unavailable.
pub async fn remove_business(db: &DatabaseConnection, id: &str) -> Result<()> {
    let mut items = list_businesses(db).await?;
    items.retain(|b| b.id != id);
    store::write_collection(db, keys::BUSINESSES, &items).await
}

/// Finds a business by its slug.
///
/// # Errors
/// Returns an error if the store is unavailable.
pub async fn find_business_by_slug(
    db: &DatabaseConnection,
    slug: &str,
) -> Result<Option<Business>> {
    Ok(list_businesses(db).await?.into_iter().find(|b| b.slug == slug))
}

/// Finds a business by its id.
///
/// # Errors
/// Returns an error if the store is unavailable.
pub async fn find_business_by_id(db: &DatabaseConnection, id: &str) -> Result<Option<Business>> {
    Ok(list_businesses(db).await?.into_iter().find(|b| b.id == id))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::{create_test_business, setup_test_db};

    #[tokio::test]
    async fn test_add_assigns_id_slug_and_timestamp() -> Result<()> {
        let db = setup_test_db().await?;

        let business = create_test_business(&db, "Demo Coffee Shop").await?;
        assert!(!business.id.is_empty());
        assert_eq!(business.slug, "demo-coffee-shop");

        let listed = list_businesses(&db).await?;
        assert_eq!(listed, vec![business]);
        Ok(())
    }

    #[tokio::test]
    async fn test_colliding_names_return_existing_record() -> Result<()> {
        let db = setup_test_db().await?;

        let first = create_test_business(&db, "Corner Cafe!!").await?;
        let second = create_test_business(&db, "Corner Cafe").await?;

        assert_eq!(first.id, second.id);
        assert_eq!(first.slug, "corner-cafe");
        assert_eq!(list_businesses(&db).await?.len(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn test_list_is_newest_first() -> Result<()> {
        let db = setup_test_db().await?;

        create_test_business(&db, "First").await?;
        create_test_business(&db, "Second").await?;

        let listed = list_businesses(&db).await?;
        assert_eq!(listed[0].name, "Second");
        assert_eq!(listed[1].name, "First");
        Ok(())
    }

    #[tokio::test]
    async fn test_rename_keeps_slug() -> Result<()> {
        let db = setup_test_db().await?;
        let business = create_test_business(&db, "Old Name").await?;

        update_business(
            &db,
            &business.id,
            BusinessPatch {
                name: Some("New Name".to_string()),
                ..Default::default()
            },
        )
        .await?;

        let updated = find_business_by_id(&db, &business.id).await?.unwrap();
        assert_eq!(updated.name, "New Name");
        assert_eq!(updated.slug, "old-name");
        Ok(())
    }

    #[tokio::test]
    async fn test_update_and_remove_of_absent_id_are_no_ops() -> Result<()> {
        let db = setup_test_db().await?;
        let business = create_test_business(&db, "Stable").await?;

        update_business(
            &db,
            "missing",
            BusinessPatch {
                name: Some("Nope".to_string()),
                ..Default::default()
            },
        )
        .await?;
        remove_business(&db, "missing").await?;

        assert_eq!(list_businesses(&db).await?, vec![business]);
        Ok(())
    }

    #[tokio::test]
    async fn test_remove_filters_by_id() -> Result<()> {
        let db = setup_test_db().await?;
        let keep = create_test_business(&db, "Keep").await?;
        let drop = create_test_business(&db, "Drop").await?;

        remove_business(&db, &drop.id).await?;

        assert_eq!(list_businesses(&db).await?, vec![keep]);
        assert!(find_business_by_slug(&db, "drop").await?.is_none());
        Ok(())
    }
}
