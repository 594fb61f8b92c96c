//! Key-value storage primitives behind every collection.
//!
//! Each named collection is serialized as one JSON array (branding: one JSON
//! map) under its key in the `kv_entries` table. Every mutation upstream is a
//! full read-modify-write of a single collection; there is no atomicity
//! across keys, so a failure between two writes can leave two collections
//! inconsistent. That is the accepted consistency model, not a bug to fix
//! here.
//!
//! Read recovery: an absent key or a malformed payload yields an empty
//! collection. Parse failures are logged and swallowed; storage failures
//! propagate.

pub mod migrate;

use crate::entities::{KvEntry, kv_entry};
use crate::errors::{Error, Result};
use chrono::Utc;
use sea_orm::sea_query::OnConflict;
use sea_orm::{ActiveValue::Set, DatabaseConnection, EntityTrait};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::collections::BTreeMap;
use tracing::{debug, instrument, warn};

/// Canonical storage keys, one per collection plus the init flag.
pub mod keys {
    /// Business collection
    pub const BUSINESSES: &str = "businesses";
    /// Campaign collection
    pub const CAMPAIGNS: &str = "campaigns";
    /// Reward collection
    pub const REWARDS: &str = "rewards";
    /// Coupon collection
    pub const COUPONS: &str = "coupons";
    /// Loyalty card collection
    pub const CARDS: &str = "loyalty_cards";
    /// Redemption log
    pub const REDEMPTIONS: &str = "redemptions";
    /// Referral collection
    pub const REFERRALS: &str = "referrals";
    /// Customer-campaign membership collection
    pub const MEMBERSHIPS: &str = "customer_campaigns";
    /// QR code collection
    pub const QR_CODES: &str = "qr_codes";
    /// Tenant branding map, keyed by owner user id
    pub const BRANDING: &str = "tenant_branding";
    /// One-time seeding flag
    pub const INITIALIZED: &str = "app_initialized";
}

/// All collection keys, used by [`clear_all`] and the migration sweep.
pub const COLLECTION_KEYS: [&str; 10] = [
    keys::BUSINESSES,
    keys::CAMPAIGNS,
    keys::REWARDS,
    keys::COUPONS,
    keys::CARDS,
    keys::REDEMPTIONS,
    keys::REFERRALS,
    keys::MEMBERSHIPS,
    keys::QR_CODES,
    keys::BRANDING,
];

/// Reads the raw string stored under `key`, if any.
///
/// # Errors
/// Returns an error if the store itself is unavailable.
#[instrument(skip(db))]
pub async fn read_raw(db: &DatabaseConnection, key: &str) -> Result<Option<String>> {
    let entry = KvEntry::find_by_id(key.to_string()).one(db).await?;
    Ok(entry.map(|e| e.value))
}

/// Stores `value` under `key`, unconditionally overwriting prior contents.
///
/// # Errors
/// Returns an error if the store itself is unavailable.
#[instrument(skip(db, value))]
pub async fn write_raw(db: &DatabaseConnection, key: &str, value: String) -> Result<()> {
    let entry = kv_entry::ActiveModel {
        key: Set(key.to_string()),
        value: Set(value),
        updated_at: Set(Utc::now().naive_utc()),
    };
    KvEntry::insert(entry)
        .on_conflict(
            OnConflict::column(kv_entry::Column::Key)
                .update_columns([kv_entry::Column::Value, kv_entry::Column::UpdatedAt])
                .to_owned(),
        )
        .exec(db)
        .await?;
    Ok(())
}

/// Deletes the entry stored under `key`. No-op if the key is absent.
///
/// # Errors
/// Returns an error if the store itself is unavailable.
#[instrument(skip(db))]
pub async fn remove_key(db: &DatabaseConnection, key: &str) -> Result<()> {
    KvEntry::delete_by_id(key.to_string()).exec(db).await?;
    Ok(())
}

/// Reads a collection stored as a JSON array under `key`.
///
/// Absent key or malformed payload yields an empty vector; the malformed case
/// is logged. Only storage unavailability is an error.
///
/// # Errors
/// Returns an error if the store itself is unavailable.
pub async fn read_collection<T: DeserializeOwned>(
    db: &DatabaseConnection,
    key: &str,
) -> Result<Vec<T>> {
    let Some(raw) = read_raw(db, key).await? else {
        return Ok(Vec::new());
    };
    match serde_json::from_str(&raw) {
        Ok(items) => Ok(items),
        Err(e) => {
            warn!("Malformed payload under '{}', treating as empty: {}", key, e);
            Ok(Vec::new())
        }
    }
}

/// Serializes `items` and stores the whole array under `key`.
///
/// # Errors
/// Returns an error if serialization fails or the store is unavailable.
pub async fn write_collection<T: Serialize>(
    db: &DatabaseConnection,
    key: &str,
    items: &[T],
) -> Result<()> {
    let payload = serde_json::to_string(items).map_err(|e| Error::Serialization {
        key: key.to_string(),
        message: e.to_string(),
    })?;
    write_raw(db, key, payload).await?;
    debug!("Wrote {} record(s) under '{}'", items.len(), key);
    Ok(())
}

/// Reads a map-valued entry (used for tenant branding) stored as a JSON
/// object under `key`. Same recovery contract as [`read_collection`].
///
/// # Errors
/// Returns an error if the store itself is unavailable.
pub async fn read_map<V: DeserializeOwned>(
    db: &DatabaseConnection,
    key: &str,
) -> Result<BTreeMap<String, V>> {
    let Some(raw) = read_raw(db, key).await? else {
        return Ok(BTreeMap::new());
    };
    match serde_json::from_str(&raw) {
        Ok(map) => Ok(map),
        Err(e) => {
            warn!("Malformed payload under '{}', treating as empty: {}", key, e);
            Ok(BTreeMap::new())
        }
    }
}

/// Serializes `map` and stores the whole object under `key`.
///
/// # Errors
/// Returns an error if serialization fails or the store is unavailable.
pub async fn write_map<V: Serialize>(
    db: &DatabaseConnection,
    key: &str,
    map: &BTreeMap<String, V>,
) -> Result<()> {
    let payload = serde_json::to_string(map).map_err(|e| Error::Serialization {
        key: key.to_string(),
        message: e.to_string(),
    })?;
    write_raw(db, key, payload).await
}

/// Whether the one-time seeding flag is set.
///
/// # Errors
/// Returns an error if the store itself is unavailable.
pub async fn is_initialized(db: &DatabaseConnection) -> Result<bool> {
    Ok(read_raw(db, keys::INITIALIZED).await?.as_deref() == Some("true"))
}

/// Sets or clears the one-time seeding flag.
///
/// # Errors
/// Returns an error if the store itself is unavailable.
pub async fn set_initialized(db: &DatabaseConnection, initialized: bool) -> Result<()> {
    write_raw(db, keys::INITIALIZED, initialized.to_string()).await
}

/// Removes every collection and the seeding flag. Intended for tests and
/// explicit resets; after this, [`crate::core::seed::seed_if_empty`] will
/// seed again.
///
/// # Errors
/// Returns an error if the store itself is unavailable.
pub async fn clear_all(db: &DatabaseConnection) -> Result<()> {
    for key in COLLECTION_KEYS {
        remove_key(db, key).await?;
    }
    remove_key(db, keys::INITIALIZED).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::records::{Redemption, Reward};
    use crate::test_utils::setup_test_db;
    use chrono::Utc;

    #[tokio::test]
    async fn test_collection_round_trip_preserves_fields() -> Result<()> {
        let db = setup_test_db().await?;

        let reward = Reward {
            id: "r-1".to_string(),
            campaign_id: Some("c-1".to_string()),
            name: "Free Coffee".to_string(),
            description: None,
            stamps_required: 10,
            active: true,
            created_at: Utc::now(),
        };
        write_collection(&db, keys::REWARDS, &[reward.clone()]).await?;

        let read_back: Vec<Reward> = read_collection(&db, keys::REWARDS).await?;
        assert_eq!(read_back, vec![reward]);
        Ok(())
    }

    #[tokio::test]
    async fn test_absent_key_reads_as_empty() -> Result<()> {
        let db = setup_test_db().await?;
        let items: Vec<Reward> = read_collection(&db, keys::REWARDS).await?;
        assert!(items.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_malformed_payload_reads_as_empty() -> Result<()> {
        let db = setup_test_db().await?;
        write_raw(&db, keys::REWARDS, "{not json".to_string()).await?;

        let items: Vec<Reward> = read_collection(&db, keys::REWARDS).await?;
        assert!(items.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_write_overwrites_unconditionally() -> Result<()> {
        let db = setup_test_db().await?;

        let first = Redemption {
            id: "rd-1".to_string(),
            user_id: "u-1".to_string(),
            reward_id: "r-1".to_string(),
            date: Utc::now(),
        };
        let second = Redemption {
            id: "rd-2".to_string(),
            ..first.clone()
        };

        write_collection(&db, keys::REDEMPTIONS, &[first]).await?;
        write_collection(&db, keys::REDEMPTIONS, std::slice::from_ref(&second)).await?;

        let read_back: Vec<Redemption> = read_collection(&db, keys::REDEMPTIONS).await?;
        assert_eq!(read_back, vec![second]);
        Ok(())
    }

    #[tokio::test]
    async fn test_initialized_flag_lifecycle() -> Result<()> {
        let db = setup_test_db().await?;

        assert!(!is_initialized(&db).await?);
        set_initialized(&db, true).await?;
        assert!(is_initialized(&db).await?);
        set_initialized(&db, false).await?;
        assert!(!is_initialized(&db).await?);
        Ok(())
    }

    #[tokio::test]
    async fn test_clear_all_removes_collections_and_flag() -> Result<()> {
        let db = setup_test_db().await?;
        write_raw(&db, keys::REWARDS, "[]".to_string()).await?;
        set_initialized(&db, true).await?;

        clear_all(&db).await?;

        assert!(read_raw(&db, keys::REWARDS).await?.is_none());
        assert!(!is_initialized(&db).await?);
        Ok(())
    }
}
