//! Loyalty card accessors - get-or-create plus stamp mutation.
//!
//! `get_or_create_card` is the only place enforcing "at most one card per
//! (customer, campaign)". It is a read-then-write with no concurrency guard:
//! two racing callers could each create a card. That race is a documented
//! limitation of the single-writer model, not something patched here.

use crate::{
    core::ident::new_id,
    errors::Result,
    records::LoyaltyCard,
    store::{self, keys},
};
use chrono::Utc;
use sea_orm::DatabaseConnection;
use tracing::debug;

/// Lists all loyalty cards, newest first.
///
/// # Errors
/// Returns an error if the store is unavailable.
pub async fn list_cards(db: &DatabaseConnection) -> Result<Vec<LoyaltyCard>> {
    store::read_collection(db, keys::CARDS).await
}

/// Lists a customer's cards, newest first.
///
/// # Errors
/// Returns an error if the store is unavailable.
pub async fn cards_for_customer(
    db: &DatabaseConnection,
    customer_id: &str,
) -> Result<Vec<LoyaltyCard>> {
    Ok(list_cards(db)
        .await?
        .into_iter()
        .filter(|c| c.customer_id == customer_id)
        .collect())
}

/// Returns the existing card for the (customer, campaign) pair, or creates
/// one with zero stamps.
///
/// # Errors
/// Returns an error if the store is unavailable.
pub async fn get_or_create_card(
    db: &DatabaseConnection,
    customer_id: &str,
    campaign_id: &str,
) -> Result<LoyaltyCard> {
    let mut items = list_cards(db).await?;
    if let Some(found) = items
        .iter()
        .find(|c| c.customer_id == customer_id && c.campaign_id == campaign_id)
    {
        return Ok(found.clone());
    }

    let card = LoyaltyCard {
        id: new_id(),
        customer_id: customer_id.to_string(),
        campaign_id: campaign_id.to_string(),
        stamps: 0,
        updated_at: Utc::now(),
    };
    items.insert(0, card.clone());
    store::write_collection(db, keys::CARDS, &items).await?;
    debug!(
        "Created card for customer '{}' in campaign '{}'",
        customer_id, campaign_id
    );
    Ok(card)
}

/// Adds `count` stamps to the card and advances its timestamp. No upper
/// bound is enforced against the campaign's requirement; over-collection is
/// allowed. Silent no-op when the id is absent.
///
/// # Errors
/// Returns an error if the store is unavailable.
pub async fn add_stamp(db: &DatabaseConnection, card_id: &str, count: u32) -> Result<()> {
    let mut items = list_cards(db).await?;
    for card in items.iter_mut().filter(|c| c.id == card_id) {
        card.stamps += count;
        card.updated_at = Utc::now();
    }
    store::write_collection(db, keys::CARDS, &items).await
}

/// Sets the card's stamp count outright and advances its timestamp. Silent
/// no-op when the id is absent.
///
/// # Errors
/// Returns an error if the store is unavailable.
pub async fn set_stamps(db: &DatabaseConnection, card_id: &str, stamps: u32) -> Result<()> {
    let mut items = list_cards(db).await?;
    for card in items.iter_mut().filter(|c| c.id == card_id) {
        card.stamps = stamps;
        card.updated_at = Utc::now();
    }
    store::write_collection(db, keys::CARDS, &items).await
}
