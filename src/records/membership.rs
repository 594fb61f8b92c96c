//! Customer-campaign membership record - the "joined" join table.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A customer's membership in a campaign
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerCampaign {
    /// Unique identifier
    pub id: String,
    /// Customer who joined
    pub customer_id: String,
    /// Campaign that was joined
    pub campaign_id: String,
    /// When the customer joined
    pub date_joined: DateTime<Utc>,
}
