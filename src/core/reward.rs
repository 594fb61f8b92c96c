//! Reward accessors.

use crate::{
    core::ident::new_id,
    errors::Result,
    records::Reward,
    store::{self, keys},
};
use chrono::Utc;
use sea_orm::DatabaseConnection;

/// Fields supplied when creating a reward
#[derive(Debug, Clone)]
pub struct NewReward {
    /// Campaign the reward belongs to
    pub campaign_id: Option<String>,
    /// Display name
    pub name: String,
    /// Short description
    pub description: Option<String>,
    /// Stamps required to redeem
    pub stamps_required: u32,
    /// Whether the reward starts active
    pub active: bool,
}

/// Optional field updates for a reward
#[derive(Debug, Clone, Default)]
pub struct RewardPatch {
    /// New campaign link
    pub campaign_id: Option<String>,
    /// New display name
    pub name: Option<String>,
    /// New description
    pub description: Option<String>,
    /// New stamp requirement
    pub stamps_required: Option<u32>,
    /// New active state
    pub active: Option<bool>,
}

/// Lists all rewards, newest first.
///
/// # Errors
/// Returns an error if the store is unavailable.
pub async fn list_rewards(db: &DatabaseConnection) -> Result<Vec<Reward>> {
    store::read_collection(db, keys::REWARDS).await
}

/// Creates a reward and prepends it to the collection.
///
/// # Errors
/// Returns an error if the store is unavailable.
pub async fn add_reward(db: &DatabaseConnection, input: NewReward) -> Result<Reward> {
    let mut items = list_rewards(db).await?;
    let reward = Reward {
        id: new_id(),
        campaign_id: input.campaign_id,
        name: input.name,
        description: input.description,
        stamps_required: input.stamps_required,
        active: input.active,
        created_at: Utc::now(),
    };
    items.insert(0, reward.clone());
    store::write_collection(db, keys::REWARDS, &items).await?;
    Ok(reward)
}

/// Applies a patch to the reward with the given id. Silent no-op when the id
/// is absent.
///
/// # Errors
/// Returns an error if the store is unavailable.
pub async fn update_reward(db: &DatabaseConnection, id: &str, patch: RewardPatch) -> Result<()> {
    let mut items = list_rewards(db).await?;
    for reward in items.iter_mut().filter(|r| r.id == id) {
        if let Some(campaign_id) = patch.campaign_id.clone() {
            reward.campaign_id = Some(campaign_id);
        }
        if let Some(name) = patch.name.clone() {
            reward.name = name;
        }
        if let Some(description) = patch.description.clone() {
            reward.description = Some(description);
        }
        if let Some(stamps_required) = patch.stamps_required {
            reward.stamps_required = stamps_required;
        }
        if let Some(active) = patch.active {
            reward.active = active;
        }
    }
    store::write_collection(db, keys::REWARDS, &items).await
}

/// Removes the reward with the given id. Silent no-op when the id is absent.
///
/// # Errors
/// Returns an error if the store is unavailable.
pub async fn remove_reward(db: &DatabaseConnection, id: &str) -> Result<()> {
    let mut items = list_rewards(db).await?;
    items.retain(|r| r.id != id);
    store::write_collection(db, keys::REWARDS, &items).await
}

/// Lists the rewards attached to a campaign, newest first.
///
/// # Errors
/// Returns an error if the store is unavailable.
pub async fn rewards_for_campaign(
    db: &DatabaseConnection,
    campaign_id: &str,
) -> Result<Vec<Reward>> {
    Ok(list_rewards(db)
        .await?
        .into_iter()
        .filter(|r| r.campaign_id.as_deref() == Some(campaign_id))
        .collect())
}
