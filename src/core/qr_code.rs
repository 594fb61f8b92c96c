//! QR code accessors. Image rendering happens elsewhere; this stores the
//! payload and the pre-rendered data URL.

use crate::{
    core::ident::new_id,
    errors::Result,
    records::QrCode,
    store::{self, keys},
};
use chrono::Utc;
use sea_orm::DatabaseConnection;

/// Fields supplied when storing a generated QR code
#[derive(Debug, Clone)]
pub struct NewQrCode {
    /// Campaign the code belongs to
    pub campaign_id: Option<String>,
    /// The scannable payload
    pub code: String,
    /// Pre-rendered image as a data URL
    pub data_url: String,
    /// What scanning this code does
    pub purpose: Option<String>,
    /// Whether scans start out honored
    pub active: bool,
}

/// Optional field updates for a QR code
#[derive(Debug, Clone, Default)]
pub struct QrCodePatch {
    /// New campaign link
    pub campaign_id: Option<String>,
    /// New payload
    pub code: Option<String>,
    /// New rendered image
    pub data_url: Option<String>,
    /// New purpose text
    pub purpose: Option<String>,
    /// New active state
    pub active: Option<bool>,
}

/// Lists all QR codes, newest first.
///
/// # Errors
/// Returns an error if the store is unavailable.
pub async fn list_qr_codes(db: &DatabaseConnection) -> Result<Vec<QrCode>> {
    store::read_collection(db, keys::QR_CODES).await
}

/// Stores a QR code and prepends it to the collection.
///
/// # Errors
/// Returns an error if the store is unavailable.
pub async fn add_qr_code(db: &DatabaseConnection, input: NewQrCode) -> Result<QrCode> {
    let mut items = list_qr_codes(db).await?;
    let qr_code = QrCode {
        id: new_id(),
        campaign_id: input.campaign_id,
        code: input.code,
        data_url: input.data_url,
        purpose: input.purpose,
        active: input.active,
        created_at: Utc::now(),
    };
    items.insert(0, qr_code.clone());
    store::write_collection(db, keys::QR_CODES, &items).await?;
    Ok(qr_code)
}

/// Applies a patch to the QR code with the given id. Silent no-op when the
/// id is absent.
///
/// # Errors
/// Returns an error if the store is unavailable.
pub async fn update_qr_code(db: &DatabaseConnection, id: &str, patch: QrCodePatch) -> Result<()> {
    let mut items = list_qr_codes(db).await?;
    for qr_code in items.iter_mut().filter(|q| q.id == id) {
        if let Some(campaign_id) = patch.campaign_id.clone() {
            qr_code.campaign_id = Some(campaign_id);
        }
        if let Some(code) = patch.code.clone() {
            qr_code.code = code;
        }
        if let Some(data_url) = patch.data_url.clone() {
            qr_code.data_url = data_url;
        }
        if let Some(purpose) = patch.purpose.clone() {
            qr_code.purpose = Some(purpose);
        }
        if let Some(active) = patch.active {
            qr_code.active = active;
        }
    }
    store::write_collection(db, keys::QR_CODES, &items).await
}

/// Removes the QR code with the given id. Silent no-op when the id is
/// absent.
///
/// # Errors
/// Returns an error if the store is unavailable.
pub async fn remove_qr_code(db: &DatabaseConnection, id: &str) -> Result<()> {
    let mut items = list_qr_codes(db).await?;
    items.retain(|q| q.id != id);
    store::write_collection(db, keys::QR_CODES, &items).await
}

/// Lists the QR codes attached to a campaign, newest first.
///
/// # Errors
/// Returns an error if the store is unavailable.
pub async fn qr_codes_for_campaign(
    db: &DatabaseConnection,
    campaign_id: &str,
) -> Result<Vec<QrCode>> {
    Ok(list_qr_codes(db)
        .await?
        .into_iter()
        .filter(|q| q.campaign_id.as_deref() == Some(campaign_id))
        .collect())
}
