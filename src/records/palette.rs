//! Named color palettes selectable in branding settings.

/// A named five-color palette
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    /// Palette display name, also the lookup key
    pub name: &'static str,
    /// Primary color (hex)
    pub primary: &'static str,
    /// Secondary color (hex)
    pub secondary: &'static str,
    /// Accent color (hex)
    pub accent: &'static str,
    /// Background color (hex)
    pub background: &'static str,
    /// Foreground/text color (hex)
    pub foreground: &'static str,
}

/// The fixed palette catalog.
pub const PALETTES: [Palette; 5] = [
    Palette {
        name: "Modern Pastels",
        primary: "#D8A7B1",
        secondary: "#A3B18A",
        accent: "#E3C567",
        background: "#FAF3E0",
        foreground: "#2F2F2F",
    },
    Palette {
        name: "Earthy Tones",
        primary: "#E07A5F",
        secondary: "#6B8F71",
        accent: "#E3B23C",
        background: "#E6CCB2",
        foreground: "#3A2F28",
    },
    Palette {
        name: "Bold Contrast",
        primary: "#4169E1",
        secondary: "#FF6F61",
        accent: "#FFC107",
        background: "#FFFFFF",
        foreground: "#333333",
    },
    Palette {
        name: "Muted Jewel Tones",
        primary: "#0F52BA",
        secondary: "#9B111E",
        accent: "#9966CC",
        background: "#0B0B0B",
        foreground: "#F5F5F5",
    },
    Palette {
        name: "Ocean Breeze",
        primary: "#008080",
        secondary: "#9FE2BF",
        accent: "#F4E1C1",
        background: "#1B3B6F",
        foreground: "#F7FAFC",
    },
];

/// Looks up a palette by its display name.
#[must_use]
pub fn palette_by_name(name: &str) -> Option<&'static Palette> {
    PALETTES.iter().find(|p| p.name == name)
}
