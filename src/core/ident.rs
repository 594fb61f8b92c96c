//! Identifier, slug, and referral-code generation.
//!
//! Slugs and referral codes are pure derivations; only [`new_id`] draws
//! randomness. Slug uniqueness is a policy of the accessors that use slugs,
//! not of [`slugify`] itself.

use uuid::Uuid;

/// Generates a new random, globally-unique record identifier.
#[must_use]
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// Derives a URL-safe slug from a display name: lowercase, trimmed,
/// characters outside `[a-z0-9\s-]` stripped, whitespace runs collapsed to
/// single hyphens, hyphen runs collapsed.
#[must_use]
pub fn slugify(name: &str) -> String {
    let lowered = name.to_lowercase();
    let mut slug = String::with_capacity(lowered.len());
    let mut prev_hyphen = false;
    for ch in lowered.trim().chars() {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            slug.push(ch);
            prev_hyphen = false;
        } else if (ch.is_whitespace() || ch == '-') && !prev_hyphen {
            slug.push('-');
            prev_hyphen = true;
        }
    }
    slug
}

/// Derives a referral code from an owner id: `REF-` plus the first six
/// characters of the id, uppercased. Deterministic, so independent store
/// instances agree on the code before anything is persisted.
#[must_use]
pub fn referral_code(owner_user_id: &str) -> String {
    let fragment: String = owner_user_id.chars().take(6).collect();
    format!("REF-{}", fragment.to_uppercase())
}
