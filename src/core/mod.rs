//! Core data-layer logic - typed accessors over the key-value store.
//!
//! One module per collection, each exposing free async functions over a
//! `DatabaseConnection` in the same shape: `list_*`, `add_*`, `update_*`,
//! `remove_*`, plus the collection's specialized lookups. Every mutation is a
//! full read-modify-write of its collection.

/// Branding settings accessor (per-owner upsert)
pub mod branding;
/// Business collection accessors
pub mod business;
/// Campaign collection accessors
pub mod campaign;
/// Loyalty card accessors (get-or-create, stamping)
pub mod card;
/// Coupon collection accessors
pub mod coupon;
/// Identifier, slug, and referral-code generation
pub mod ident;
/// Customer-campaign membership accessors
pub mod membership;
/// QR code collection accessors
pub mod qr_code;
/// Redemption log accessors
pub mod redemption;
/// Referral accessors
pub mod referral;
/// Reward collection accessors
pub mod reward;
/// One-time demo-data seeding
pub mod seed;
