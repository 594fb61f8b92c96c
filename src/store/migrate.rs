//! Startup migration away from superseded storage keys.
//!
//! Earlier deployments stored several collections under `db_`-prefixed keys
//! and kept tenant branding as a flat array. This module upgrades that data
//! into the canonical namespace exactly once: for each legacy/canonical pair,
//! if the canonical key holds no data and the legacy key does, the legacy
//! records are normalized into the current shape and written back; the legacy
//! key is then deleted in every case. Re-running is a no-op, and legacy data
//! is never resurrected once the canonical key has content.

use crate::core::ident::{new_id, slugify};
use crate::errors::Result;
use crate::records::{Campaign, SocialLinks, TenantBranding};
use crate::store::{self, keys};
use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;
use serde::Deserialize;
use std::collections::BTreeMap;
use tracing::{info, instrument, warn};

/// Legacy key and its canonical successor.
const LEGACY_KEYS: [(&str, &str); 9] = [
    ("db_campaigns", keys::CAMPAIGNS),
    ("db_rewards", keys::REWARDS),
    ("db_coupons", keys::COUPONS),
    ("db_loyalty_cards", keys::CARDS),
    ("db_redemptions", keys::REDEMPTIONS),
    ("db_referrals", keys::REFERRALS),
    ("db_customer_campaigns", keys::MEMBERSHIPS),
    ("db_qrcodes", keys::QR_CODES),
    ("db_tenant_settings", keys::BRANDING),
];

/// A campaign as older deployments stored it: every field optional.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LegacyCampaign {
    id: Option<String>,
    business_id: Option<String>,
    name: Option<String>,
    slug: Option<String>,
    description: Option<String>,
    stamps_required: Option<u32>,
    active: Option<bool>,
    owner_id: Option<String>,
    contact_email: Option<String>,
    contact_phone: Option<String>,
    social_links: Option<SocialLinks>,
    created_at: Option<DateTime<Utc>>,
}

/// Branding as older deployments stored it: an array entry with optional
/// knobs rather than a map value with every field populated.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LegacyBranding {
    owner_user_id: String,
    #[serde(flatten)]
    rest: serde_json::Map<String, serde_json::Value>,
}

/// Migrates all known legacy keys into the canonical namespace.
///
/// Idempotent; safe to call on every startup.
///
/// # Errors
/// Returns an error if the store itself is unavailable.
#[instrument(skip(db))]
pub async fn migrate_legacy_keys(db: &DatabaseConnection) -> Result<()> {
    for (legacy, canonical) in LEGACY_KEYS {
        let Some(raw) = store::read_raw(db, legacy).await? else {
            continue;
        };

        if canonical_has_data(db, canonical).await? {
            info!(
                "Canonical key '{}' already has data, dropping superseded '{}'",
                canonical, legacy
            );
        } else {
            upgrade_legacy_payload(db, legacy, canonical, &raw).await?;
        }

        store::remove_key(db, legacy).await?;
    }
    Ok(())
}

/// Whether the canonical key already holds at least one record. An empty
/// array or object counts as no data, so an upgraded payload can still land.
async fn canonical_has_data(db: &DatabaseConnection, canonical: &str) -> Result<bool> {
    let Some(raw) = store::read_raw(db, canonical).await? else {
        return Ok(false);
    };
    match serde_json::from_str::<serde_json::Value>(&raw) {
        Ok(serde_json::Value::Array(items)) => Ok(!items.is_empty()),
        Ok(serde_json::Value::Object(map)) => Ok(!map.is_empty()),
        _ => Ok(false),
    }
}

/// Normalizes one legacy payload into the current shape and commits it under
/// the canonical key. Unparseable payloads are logged and dropped.
async fn upgrade_legacy_payload(
    db: &DatabaseConnection,
    legacy: &str,
    canonical: &str,
    raw: &str,
) -> Result<()> {
    match canonical {
        keys::CAMPAIGNS => {
            let Ok(items) = serde_json::from_str::<Vec<LegacyCampaign>>(raw) else {
                warn!("Unparseable legacy payload under '{}', dropping it", legacy);
                return Ok(());
            };
            let upgraded: Vec<Campaign> = items.into_iter().map(normalize_campaign).collect();
            info!(
                "Upgraded {} campaign(s) from '{}' into '{}'",
                upgraded.len(),
                legacy,
                canonical
            );
            store::write_collection(db, canonical, &upgraded).await
        }
        keys::BRANDING => {
            let Ok(items) = serde_json::from_str::<Vec<LegacyBranding>>(raw) else {
                warn!("Unparseable legacy payload under '{}', dropping it", legacy);
                return Ok(());
            };
            let mut map = BTreeMap::new();
            for item in items {
                map.insert(item.owner_user_id.clone(), normalize_branding(item));
            }
            info!(
                "Upgraded {} branding record(s) from '{}' into '{}'",
                map.len(),
                legacy,
                canonical
            );
            store::write_map(db, canonical, &map).await
        }
        _ => {
            // Already shape-compatible; validate it is a JSON array and move
            // the payload as-is.
            if serde_json::from_str::<Vec<serde_json::Value>>(raw).is_err() {
                warn!("Unparseable legacy payload under '{}', dropping it", legacy);
                return Ok(());
            }
            info!("Moved payload from '{}' into '{}'", legacy, canonical);
            store::write_raw(db, canonical, raw.to_string()).await
        }
    }
}

/// Fills the gaps an old-shape campaign may have: missing ids are minted,
/// missing slugs derived from the name, and absent knobs take the historical
/// defaults (10 stamps, active).
fn normalize_campaign(item: LegacyCampaign) -> Campaign {
    let name = item
        .name
        .unwrap_or_else(|| "Untitled Campaign".to_string());
    let slug = item.slug.unwrap_or_else(|| slugify(&name));
    Campaign {
        id: item.id.unwrap_or_else(new_id),
        business_id: item.business_id,
        name,
        slug,
        description: item.description,
        stamps_required: item.stamps_required.unwrap_or(10),
        active: item.active.unwrap_or(true),
        owner_id: item.owner_id,
        contact_email: item.contact_email,
        contact_phone: item.contact_phone,
        social_links: item.social_links,
        created_at: item.created_at.unwrap_or_else(Utc::now),
    }
}

/// Re-reads a legacy branding entry through the current record type, starting
/// from the owner's defaults so absent knobs come out populated.
fn normalize_branding(item: LegacyBranding) -> TenantBranding {
    let defaults = TenantBranding::defaults_for(&item.owner_user_id);
    let Ok(mut base) = serde_json::to_value(&defaults) else {
        return defaults;
    };
    if let Some(base_map) = base.as_object_mut() {
        for (field, value) in item.rest {
            if !value.is_null() {
                base_map.insert(field, value);
            }
        }
        base_map.insert(
            "id".to_string(),
            serde_json::Value::String(item.owner_user_id.clone()),
        );
        base_map.insert(
            "ownerUserId".to_string(),
            serde_json::Value::String(item.owner_user_id),
        );
    }
    serde_json::from_value(base).unwrap_or(defaults)
}
