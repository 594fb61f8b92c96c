//! Tenant branding accessor - a per-owner upsert store.
//!
//! Unlike the list-based collections, branding is keyed by owner and patched
//! field-by-field: `set_branding_for_owner` merges a partial patch onto the
//! stored record (or onto defaults when none exists) and returns the merged
//! result. Readers always receive a fully-populated record.

use crate::{
    errors::Result,
    records::{
        AnimationStyle, BrandingColors, CelebrationAnimation, CornerRadius, GridSize, Layout,
        StampShape, StampSound, TemplateId, TemplateStyle, TenantBranding,
    },
    store::{self, keys},
};
use chrono::Utc;
use sea_orm::DatabaseConnection;
use tracing::debug;

/// Partial branding update. Absent fields are left as stored (or defaulted,
/// for a first-time save). `colors`, `grid_size`, and other composite values
/// are replaced whole, not deep-merged.
#[derive(Debug, Clone, Default)]
pub struct BrandingPatch {
    /// New template selection
    pub template_id: Option<TemplateId>,
    /// New card orientation
    pub layout: Option<Layout>,
    /// New grid dimensions
    pub grid_size: Option<GridSize>,
    /// New corner rounding
    pub corner_radius: Option<CornerRadius>,
    /// New stamp shape
    pub stamp_shape: Option<StampShape>,
    /// New named palette
    pub palette_name: Option<String>,
    /// New custom colors
    pub colors: Option<BrandingColors>,
    /// New logo data URL
    pub logo_data_url: Option<String>,
    /// New background data URL
    pub background_data_url: Option<String>,
    /// New stamp animation
    pub animation_style: Option<AnimationStyle>,
    /// New visual treatment
    pub template_style: Option<TemplateStyle>,
    /// New stamp sound
    pub stamp_sound: Option<StampSound>,
    /// New completion animation
    pub celebration_animation: Option<CelebrationAnimation>,
    /// New linked campaign
    pub linked_campaign_id: Option<String>,
}

/// Returns the owner's stored branding, or fully-populated defaults when
/// nothing has been saved yet.
///
/// # Errors
/// Returns an error if the store is unavailable.
pub async fn branding_for_owner(
    db: &DatabaseConnection,
    owner_user_id: &str,
) -> Result<TenantBranding> {
    let map = store::read_map::<TenantBranding>(db, keys::BRANDING).await?;
    Ok(map
        .get(owner_user_id)
        .cloned()
        .unwrap_or_else(|| TenantBranding::defaults_for(owner_user_id)))
}

/// Merges a patch onto the owner's stored branding (or onto defaults),
/// stamps `updated_at`, persists, and returns the merged record.
///
/// # Errors
/// Returns an error if the store is unavailable.
pub async fn set_branding_for_owner(
    db: &DatabaseConnection,
    owner_user_id: &str,
    patch: BrandingPatch,
) -> Result<TenantBranding> {
    let mut map = store::read_map::<TenantBranding>(db, keys::BRANDING).await?;
    let mut branding = map
        .get(owner_user_id)
        .cloned()
        .unwrap_or_else(|| TenantBranding::defaults_for(owner_user_id));

    if let Some(template_id) = patch.template_id {
        branding.template_id = template_id;
    }
    if let Some(layout) = patch.layout {
        branding.layout = layout;
    }
    if let Some(grid_size) = patch.grid_size {
        branding.grid_size = grid_size;
    }
    if let Some(corner_radius) = patch.corner_radius {
        branding.corner_radius = corner_radius;
    }
    if let Some(stamp_shape) = patch.stamp_shape {
        branding.stamp_shape = stamp_shape;
    }
    if let Some(palette_name) = patch.palette_name {
        branding.palette_name = Some(palette_name);
    }
    if let Some(colors) = patch.colors {
        branding.colors = Some(colors);
    }
    if let Some(logo_data_url) = patch.logo_data_url {
        branding.logo_data_url = Some(logo_data_url);
    }
    if let Some(background_data_url) = patch.background_data_url {
        branding.background_data_url = Some(background_data_url);
    }
    if let Some(animation_style) = patch.animation_style {
        branding.animation_style = animation_style;
    }
    if let Some(template_style) = patch.template_style {
        branding.template_style = template_style;
    }
    if let Some(stamp_sound) = patch.stamp_sound {
        branding.stamp_sound = stamp_sound;
    }
    if let Some(celebration_animation) = patch.celebration_animation {
        branding.celebration_animation = celebration_animation;
    }
    if let Some(linked_campaign_id) = patch.linked_campaign_id {
        branding.linked_campaign_id = Some(linked_campaign_id);
    }
    branding.updated_at = Utc::now();

    map.insert(owner_user_id.to_string(), branding.clone());
    store::write_map(db, keys::BRANDING, &map).await?;
    debug!("Branding saved for owner '{}'", owner_user_id);
    Ok(branding)
}

/// The owner's selected template, defaulting like the rest of the record.
///
/// # Errors
/// Returns an error if the store is unavailable.
pub async fn template_for_owner(
    db: &DatabaseConnection,
    owner_user_id: &str,
) -> Result<TemplateId> {
    Ok(branding_for_owner(db, owner_user_id).await?.template_id)
}

/// Convenience wrapper: saves only the template selection.
///
/// # Errors
/// Returns an error if the store is unavailable.
pub async fn set_template_for_owner(
    db: &DatabaseConnection,
    owner_user_id: &str,
    template_id: TemplateId,
) -> Result<TenantBranding> {
    set_branding_for_owner(
        db,
        owner_user_id,
        BrandingPatch {
            template_id: Some(template_id),
            ..Default::default()
        },
    )
    .await
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::setup_test_db;

    #[tokio::test]
    async fn test_unsaved_owner_gets_full_defaults() -> Result<()> {
        let db = setup_test_db().await?;

        let branding = branding_for_owner(&db, "owner-1").await?;
        assert_eq!(branding, {
            let mut expected = TenantBranding::defaults_for("owner-1");
            expected.updated_at = branding.updated_at;
            expected
        });
        Ok(())
    }

    #[tokio::test]
    async fn test_patch_touches_only_given_fields() -> Result<()> {
        let db = setup_test_db().await?;

        let saved = set_branding_for_owner(
            &db,
            "owner-1",
            BrandingPatch {
                template_id: Some(TemplateId::Honeycomb),
                palette_name: Some("Ocean Breeze".to_string()),
                ..Default::default()
            },
        )
        .await?;

        let patched = set_branding_for_owner(
            &db,
            "owner-1",
            BrandingPatch {
                stamp_sound: Some(StampSound::Chime),
                ..Default::default()
            },
        )
        .await?;

        assert_eq!(patched.stamp_sound, StampSound::Chime);
        // Untouched fields carry over from the prior save
        assert_eq!(patched.template_id, TemplateId::Honeycomb);
        assert_eq!(patched.palette_name.as_deref(), Some("Ocean Breeze"));
        assert_eq!(patched.layout, saved.layout);
        assert!(patched.updated_at >= saved.updated_at);

        // And the merge was persisted, not just returned
        let read_back = branding_for_owner(&db, "owner-1").await?;
        assert_eq!(read_back, patched);
        Ok(())
    }

    #[tokio::test]
    async fn test_owners_are_isolated() -> Result<()> {
        let db = setup_test_db().await?;

        set_branding_for_owner(
            &db,
            "owner-1",
            BrandingPatch {
                layout: Some(Layout::Vertical),
                ..Default::default()
            },
        )
        .await?;

        let other = branding_for_owner(&db, "owner-2").await?;
        assert_eq!(other.layout, Layout::Horizontal);
        Ok(())
    }

    #[tokio::test]
    async fn test_template_wrappers() -> Result<()> {
        let db = setup_test_db().await?;

        assert_eq!(template_for_owner(&db, "owner-1").await?, TemplateId::Grid);
        set_template_for_owner(&db, "owner-1", TemplateId::Star).await?;
        assert_eq!(template_for_owner(&db, "owner-1").await?, TemplateId::Star);
        Ok(())
    }
}
