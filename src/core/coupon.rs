//! Coupon accessors.
//!
//! The discount is expected in 0-100 but, matching the stored contract, is
//! not validated on write.

use crate::{
    core::ident::new_id,
    errors::Result,
    records::Coupon,
    store::{self, keys},
};
use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;

/// Fields supplied when creating a coupon
#[derive(Debug, Clone)]
pub struct NewCoupon {
    /// Redeemable code string
    pub code: String,
    /// Discount percent, expected in 0-100
    pub discount: u32,
    /// Expiry timestamp; no expiry when absent
    pub expires_at: Option<DateTime<Utc>>,
    /// Whether the coupon starts active
    pub active: bool,
}

/// Optional field updates for a coupon
#[derive(Debug, Clone, Default)]
pub struct CouponPatch {
    /// New code string
    pub code: Option<String>,
    /// New discount percent
    pub discount: Option<u32>,
    /// New expiry
    pub expires_at: Option<DateTime<Utc>>,
    /// New active state
    pub active: Option<bool>,
}

/// Lists all coupons, newest first.
///
/// # Errors
/// Returns an error if the store is unavailable.
pub async fn list_coupons(db: &DatabaseConnection) -> Result<Vec<Coupon>> {
    store::read_collection(db, keys::COUPONS).await
}

/// Creates a coupon and prepends it to the collection.
///
/// # Errors
/// Returns an error if the store is unavailable.
pub async fn add_coupon(db: &DatabaseConnection, input: NewCoupon) -> Result<Coupon> {
    let mut items = list_coupons(db).await?;
    let coupon = Coupon {
        id: new_id(),
        code: input.code,
        discount: input.discount,
        expires_at: input.expires_at,
        active: input.active,
        created_at: Utc::now(),
    };
    items.insert(0, coupon.clone());
    store::write_collection(db, keys::COUPONS, &items).await?;
    Ok(coupon)
}

/// Applies a patch to the coupon with the given id. Silent no-op when the id
/// is absent.
///
/// # Errors
/// Returns an error if the store is unavailable.
pub async fn update_coupon(db: &DatabaseConnection, id: &str, patch: CouponPatch) -> Result<()> {
    let mut items = list_coupons(db).await?;
    for coupon in items.iter_mut().filter(|c| c.id == id) {
        if let Some(code) = patch.code.clone() {
            coupon.code = code;
        }
        if let Some(discount) = patch.discount {
            coupon.discount = discount;
        }
        if let Some(expires_at) = patch.expires_at {
            coupon.expires_at = Some(expires_at);
        }
        if let Some(active) = patch.active {
            coupon.active = active;
        }
    }
    store::write_collection(db, keys::COUPONS, &items).await
}

/// Removes the coupon with the given id. Silent no-op when the id is absent.
///
/// # Errors
/// Returns an error if the store is unavailable.
pub async fn remove_coupon(db: &DatabaseConnection, id: &str) -> Result<()> {
    let mut items = list_coupons(db).await?;
    items.retain(|c| c.id != id);
    store::write_collection(db, keys::COUPONS, &items).await
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::setup_test_db;

    #[tokio::test]
    async fn test_coupon_lifecycle() -> Result<()> {
        let db = setup_test_db().await?;

        let coupon = add_coupon(
            &db,
            NewCoupon {
                code: "WELCOME10".to_string(),
                discount: 10,
                expires_at: None,
                active: true,
            },
        )
        .await?;
        assert!(coupon.expires_at.is_none());

        update_coupon(
            &db,
            &coupon.id,
            CouponPatch {
                discount: Some(25),
                active: Some(false),
                ..Default::default()
            },
        )
        .await?;

        let listed = list_coupons(&db).await?;
        assert_eq!(listed[0].discount, 25);
        assert!(!listed[0].active);
        assert_eq!(listed[0].code, "WELCOME10");

        remove_coupon(&db, &coupon.id).await?;
        assert!(list_coupons(&db).await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_out_of_range_discount_is_stored_as_given() -> Result<()> {
        let db = setup_test_db().await?;

        let coupon = add_coupon(
            &db,
            NewCoupon {
                code: "TOO-MUCH".to_string(),
                discount: 150,
                expires_at: None,
                active: true,
            },
        )
        .await?;

        assert_eq!(coupon.discount, 150);
        assert_eq!(list_coupons(&db).await?[0].discount, 150);
        Ok(())
    }
}
