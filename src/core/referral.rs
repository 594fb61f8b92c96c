//! Referral accessors - one record per owner, get-or-create.
//!
//! The code comes from [`crate::core::ident::referral_code`], a pure
//! derivation of the owner id, so repeated ensure calls - even against a
//! fresh store - always agree on it.

use crate::{
    core::ident::{new_id, referral_code},
    errors::Result,
    records::Referral,
    store::{self, keys},
};
use chrono::Utc;
use sea_orm::DatabaseConnection;

/// Lists all referral records, newest first.
///
/// # Errors
/// Returns an error if the store is unavailable.
pub async fn list_referrals(db: &DatabaseConnection) -> Result<Vec<Referral>> {
    store::read_collection(db, keys::REFERRALS).await
}

/// Finds the referral record owned by `owner_user_id`, if any.
///
/// # Errors
/// Returns an error if the store is unavailable.
pub async fn referral_for_owner(
    db: &DatabaseConnection,
    owner_user_id: &str,
) -> Result<Option<Referral>> {
    Ok(list_referrals(db)
        .await?
        .into_iter()
        .find(|r| r.owner_user_id == owner_user_id))
}

/// Returns the owner's referral record, creating it with a zero count when
/// absent. Idempotent.
///
/// # Errors
/// Returns an error if the store is unavailable.
pub async fn ensure_referral_for_owner(
    db: &DatabaseConnection,
    owner_user_id: &str,
) -> Result<Referral> {
    let mut items = list_referrals(db).await?;
    if let Some(existing) = items.iter().find(|r| r.owner_user_id == owner_user_id) {
        return Ok(existing.clone());
    }

    let referral = Referral {
        id: new_id(),
        owner_user_id: owner_user_id.to_string(),
        code: referral_code(owner_user_id),
        referred_count: 0,
        created_at: Utc::now(),
    };
    items.insert(0, referral.clone());
    store::write_collection(db, keys::REFERRALS, &items).await?;
    Ok(referral)
}

/// Adds `count` to the referral's running total. Silent no-op when the id is
/// absent.
///
/// # Errors
/// Returns an error if the store is unavailable.
pub async fn increment_referred(db: &DatabaseConnection, id: &str, count: u32) -> Result<()> {
    let mut items = list_referrals(db).await?;
    for referral in items.iter_mut().filter(|r| r.id == id) {
        referral.referred_count += count;
    }
    store::write_collection(db, keys::REFERRALS, &items).await
}
