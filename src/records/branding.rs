//! Tenant branding record and the template catalog.
//!
//! Branding is keyed by owner user id - one logical record per tenant, stored
//! as a map rather than a sequence. Every field has a default, so readers
//! always receive a fully-populated record and never null-check individual
//! knobs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Card template identifier
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TemplateId {
    /// Stamp grid with squares; classic punch-card feel
    #[default]
    Grid,
    /// Row of circles for each stamp
    Circular,
    /// Linear progress toward reward
    Progress,
    /// Multi-step tiers unlocking better rewards
    Tiered,
    /// Clean lines and lots of whitespace
    Minimal,
    /// A path with milestones leading to reward
    Pathway,
    /// Hex cells fill as you earn stamps
    Honeycomb,
    /// Collect stars to redeem rewards
    Star,
    /// Unlock via code scans; bars as progress
    Barcode,
    /// Assemble pieces to complete the card
    Puzzle,
    /// Retained for older stored settings
    Classic,
    /// Retained for older stored settings
    Modern,
    /// Retained for older stored settings
    Playful,
}

/// Card orientation
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Layout {
    /// Stamps laid out left-to-right
    #[default]
    Horizontal,
    /// Stamps laid out top-to-bottom
    Vertical,
}

/// Shape of an individual stamp cell
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StampShape {
    Square,
    Circle,
    #[default]
    RoundedSquare,
}

/// Corner rounding applied to the card frame
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CornerRadius {
    None,
    Small,
    #[default]
    Medium,
    Large,
}

/// Animation played when a stamp lands
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnimationStyle {
    SubtleBounce,
    #[default]
    Fade,
    PopScale,
    SlideIn,
    GlowPulse,
}

/// Overall visual treatment of the card
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TemplateStyle {
    #[default]
    Modern,
    Classic,
    Minimal,
    Bold,
}

/// Sound effect played when a stamp lands
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StampSound {
    None,
    #[default]
    Pop,
    Ding,
    Swoosh,
    Chime,
}

/// Animation played when the card is completed
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CelebrationAnimation {
    #[default]
    Confetti,
    Fireworks,
    Sparkles,
    Bounce,
    None,
}

/// Stamp grid dimensions for grid-style templates
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridSize {
    /// Number of stamp rows
    pub rows: u8,
    /// Number of stamp columns
    pub cols: u8,
}

impl Default for GridSize {
    fn default() -> Self {
        Self { rows: 2, cols: 5 }
    }
}

/// Custom colors overriding a named palette
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandingColors {
    /// Primary color (hex)
    pub primary: String,
    /// Secondary color (hex)
    pub secondary: String,
    /// Accent color (hex)
    pub accent: String,
}

/// Per-tenant branding settings, keyed by the owning user's id
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TenantBranding {
    /// Record identifier; same as the owner user id
    pub id: String,
    /// User who owns these settings
    pub owner_user_id: String,
    /// Selected card template
    pub template_id: TemplateId,
    /// Card orientation
    pub layout: Layout,
    /// Stamp grid dimensions
    pub grid_size: GridSize,
    /// Corner rounding
    pub corner_radius: CornerRadius,
    /// Stamp cell shape
    pub stamp_shape: StampShape,
    /// Named palette selection, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub palette_name: Option<String>,
    /// Custom colors overriding the palette
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colors: Option<BrandingColors>,
    /// Uploaded logo as a data URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_data_url: Option<String>,
    /// Uploaded background image as a data URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_data_url: Option<String>,
    /// Stamp landing animation
    pub animation_style: AnimationStyle,
    /// Overall visual treatment
    pub template_style: TemplateStyle,
    /// Stamp sound effect
    pub stamp_sound: StampSound,
    /// Card completion animation
    pub celebration_animation: CelebrationAnimation,
    /// Campaign this branding is previewed against, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linked_campaign_id: Option<String>,
    /// When the settings were last changed
    pub updated_at: DateTime<Utc>,
}

impl TenantBranding {
    /// Fully-populated default settings for an owner who has never saved any.
    #[must_use]
    pub fn defaults_for(owner_user_id: &str) -> Self {
        Self {
            id: owner_user_id.to_string(),
            owner_user_id: owner_user_id.to_string(),
            template_id: TemplateId::default(),
            layout: Layout::default(),
            grid_size: GridSize::default(),
            corner_radius: CornerRadius::default(),
            stamp_shape: StampShape::default(),
            palette_name: None,
            colors: None,
            logo_data_url: None,
            background_data_url: None,
            animation_style: AnimationStyle::default(),
            template_style: TemplateStyle::default(),
            stamp_sound: StampSound::default(),
            celebration_animation: CelebrationAnimation::default(),
            linked_campaign_id: None,
            updated_at: Utc::now(),
        }
    }
}

/// A template catalog entry shown in the branding picker
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TemplateDef {
    /// Template identifier
    pub id: TemplateId,
    /// Display name
    pub name: &'static str,
    /// One-line description
    pub description: &'static str,
}

/// The selectable template catalog.
pub const TEMPLATE_CATALOG: [TemplateDef; 10] = [
    TemplateDef {
        id: TemplateId::Grid,
        name: "Grid Template",
        description: "Stamp grid with squares; classic punch-card feel.",
    },
    TemplateDef {
        id: TemplateId::Circular,
        name: "Circular Template",
        description: "Row of circles for each stamp.",
    },
    TemplateDef {
        id: TemplateId::Progress,
        name: "Progress Bar Template",
        description: "Linear progress toward reward.",
    },
    TemplateDef {
        id: TemplateId::Tiered,
        name: "Tiered Template",
        description: "Multi-step tiers unlocking better rewards.",
    },
    TemplateDef {
        id: TemplateId::Minimal,
        name: "Minimal Template",
        description: "Clean lines and lots of whitespace.",
    },
    TemplateDef {
        id: TemplateId::Pathway,
        name: "Pathway Template",
        description: "A path with milestones leading to reward.",
    },
    TemplateDef {
        id: TemplateId::Honeycomb,
        name: "Hexagonal Honeycomb Template",
        description: "Hex cells fill as you earn stamps.",
    },
    TemplateDef {
        id: TemplateId::Star,
        name: "Star Progress Template",
        description: "Collect stars to redeem rewards.",
    },
    TemplateDef {
        id: TemplateId::Barcode,
        name: "Barcode / QR Code Unlock Template",
        description: "Unlock via code scans; bars as progress.",
    },
    TemplateDef {
        id: TemplateId::Puzzle,
        name: "Puzzle Piece Template",
        description: "Assemble pieces to complete the card.",
    },
];

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_enum_wire_names_are_kebab_case() {
        assert_eq!(
            serde_json::to_string(&StampShape::RoundedSquare).unwrap(),
            "\"rounded-square\""
        );
        assert_eq!(
            serde_json::to_string(&AnimationStyle::SubtleBounce).unwrap(),
            "\"subtle-bounce\""
        );
        assert_eq!(serde_json::to_string(&TemplateId::Grid).unwrap(), "\"grid\"");
    }

    #[test]
    fn test_defaults_match_fresh_tenant_expectations() {
        let branding = TenantBranding::defaults_for("owner-1");
        assert_eq!(branding.id, "owner-1");
        assert_eq!(branding.owner_user_id, "owner-1");
        assert_eq!(branding.template_id, TemplateId::Grid);
        assert_eq!(branding.layout, Layout::Horizontal);
        assert_eq!(branding.grid_size, GridSize { rows: 2, cols: 5 });
        assert_eq!(branding.stamp_shape, StampShape::RoundedSquare);
        assert_eq!(branding.corner_radius, CornerRadius::Medium);
        assert_eq!(branding.animation_style, AnimationStyle::Fade);
        assert_eq!(branding.template_style, TemplateStyle::Modern);
        assert_eq!(branding.stamp_sound, StampSound::Pop);
        assert_eq!(
            branding.celebration_animation,
            CelebrationAnimation::Confetti
        );
        assert!(branding.palette_name.is_none());
        assert!(branding.colors.is_none());
    }
}
