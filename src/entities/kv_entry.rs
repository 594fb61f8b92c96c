//! Key-value entry entity - the single table behind the whole data layer.
//! Each row holds one named collection (or flag) serialized as a JSON string,
//! mirroring a browser-style string key-value store.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Key-value storage model - one row per named collection or flag
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "kv_entries")]
pub struct Model {
    /// Storage key (e.g., `"campaigns"`, `"app_initialized"`)
    #[sea_orm(primary_key, auto_increment = false)]
    pub key: String,
    /// Serialized JSON payload stored under the key
    #[sea_orm(column_type = "Text")]
    pub value: String,
    /// When this entry was last written
    pub updated_at: DateTime,
}

/// `KvEntry` has no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
