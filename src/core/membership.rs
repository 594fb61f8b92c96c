//! Customer-campaign membership accessors - the "joined" join table.

use crate::{
    core::ident::new_id,
    errors::Result,
    records::CustomerCampaign,
    store::{self, keys},
};
use chrono::Utc;
use sea_orm::DatabaseConnection;

/// Lists all memberships, newest first.
///
/// # Errors
/// Returns an error if the store is unavailable.
pub async fn list_memberships(db: &DatabaseConnection) -> Result<Vec<CustomerCampaign>> {
    store::read_collection(db, keys::MEMBERSHIPS).await
}

/// Whether the customer has joined the campaign.
///
/// # Errors
/// Returns an error if the store is unavailable.
pub async fn has_joined(
    db: &DatabaseConnection,
    customer_id: &str,
    campaign_id: &str,
) -> Result<bool> {
    Ok(list_memberships(db)
        .await?
        .iter()
        .any(|m| m.customer_id == customer_id && m.campaign_id == campaign_id))
}

/// Joins the customer to the campaign, returning the existing membership
/// when already joined. Idempotent.
///
/// # Errors
/// Returns an error if the store is unavailable.
pub async fn join_campaign(
    db: &DatabaseConnection,
    customer_id: &str,
    campaign_id: &str,
) -> Result<CustomerCampaign> {
    let mut items = list_memberships(db).await?;
    if let Some(existing) = items
        .iter()
        .find(|m| m.customer_id == customer_id && m.campaign_id == campaign_id)
    {
        return Ok(existing.clone());
    }

    let membership = CustomerCampaign {
        id: new_id(),
        customer_id: customer_id.to_string(),
        campaign_id: campaign_id.to_string(),
        date_joined: Utc::now(),
    };
    items.insert(0, membership.clone());
    store::write_collection(db, keys::MEMBERSHIPS, &items).await?;
    Ok(membership)
}

/// Counts how many customers have joined the campaign.
///
/// # Errors
/// Returns an error if the store is unavailable.
pub async fn count_by_campaign(db: &DatabaseConnection, campaign_id: &str) -> Result<usize> {
    Ok(list_memberships(db)
        .await?
        .iter()
        .filter(|m| m.campaign_id == campaign_id)
        .count())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::setup_test_db;

    #[tokio::test]
    async fn test_join_is_idempotent() -> Result<()> {
        let db = setup_test_db().await?;

        let first = join_campaign(&db, "customer-1", "campaign-1").await?;
        let second = join_campaign(&db, "customer-1", "campaign-1").await?;

        assert_eq!(first, second);
        assert_eq!(list_memberships(&db).await?.len(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn test_has_joined_and_count() -> Result<()> {
        let db = setup_test_db().await?;

        join_campaign(&db, "customer-1", "campaign-1").await?;
        join_campaign(&db, "customer-2", "campaign-1").await?;
        join_campaign(&db, "customer-1", "campaign-2").await?;

        assert!(has_joined(&db, "customer-1", "campaign-1").await?);
        assert!(!has_joined(&db, "customer-2", "campaign-2").await?);
        assert_eq!(count_by_campaign(&db, "campaign-1").await?, 2);
        assert_eq!(count_by_campaign(&db, "campaign-2").await?, 1);
        assert_eq!(count_by_campaign(&db, "campaign-3").await?, 0);
        Ok(())
    }
}
