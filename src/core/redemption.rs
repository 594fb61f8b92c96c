//! Redemption accessors - an append-only log.
//!
//! No uniqueness is enforced; redeeming the same reward twice produces two
//! entries. There is no update or remove.

use crate::{
    core::ident::new_id,
    errors::Result,
    records::Redemption,
    store::{self, keys},
};
use chrono::Utc;
use sea_orm::DatabaseConnection;

/// Lists all redemptions, newest first.
///
/// # Errors
/// Returns an error if the store is unavailable.
pub async fn list_redemptions(db: &DatabaseConnection) -> Result<Vec<Redemption>> {
    store::read_collection(db, keys::REDEMPTIONS).await
}

/// Records a redemption of `reward_id` by `user_id`.
///
/// # Errors
/// Returns an error if the store is unavailable.
pub async fn add_redemption(
    db: &DatabaseConnection,
    user_id: &str,
    reward_id: &str,
) -> Result<Redemption> {
    let mut items = list_redemptions(db).await?;
    let redemption = Redemption {
        id: new_id(),
        user_id: user_id.to_string(),
        reward_id: reward_id.to_string(),
        date: Utc::now(),
    };
    items.insert(0, redemption.clone());
    store::write_collection(db, keys::REDEMPTIONS, &items).await?;
    Ok(redemption)
}
