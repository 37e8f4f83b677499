//! Static design catalog: selectable templates, theme colors, and fonts.
//! Served read-only; the editor only ever stores the `value`/`id` strings.

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct TemplateInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub tagline: &'static str,
}

/// Every selectable template id. Rendering maps these onto the three layout
/// variants in `render::TemplateVariant`.
pub const TEMPLATES: &[TemplateInfo] = &[
    TemplateInfo {
        id: "titanium",
        name: "Titanium (ATS)",
        tagline: "100% Robot Readable",
    },
    TemplateInfo {
        id: "san-francisco",
        name: "San Francisco",
        tagline: "Modern & Clean",
    },
    TemplateInfo {
        id: "new-york",
        name: "New York",
        tagline: "Classic Professional",
    },
    TemplateInfo {
        id: "london",
        name: "London",
        tagline: "Executive Serif",
    },
    TemplateInfo {
        id: "berlin",
        name: "Berlin",
        tagline: "Bold Minimalist",
    },
    TemplateInfo {
        id: "paris",
        name: "Paris",
        tagline: "Luxury Editorial",
    },
    TemplateInfo {
        id: "dubai",
        name: "Dubai",
        tagline: "High Impact",
    },
];

#[derive(Debug, Clone, Serialize)]
pub struct ThemeColor {
    pub name: &'static str,
    pub value: &'static str,
}

pub const THEME_COLORS: &[ThemeColor] = &[
    ThemeColor { name: "Royal Blue", value: "#2563eb" },
    ThemeColor { name: "Obsidian", value: "#1e293b" },
    ThemeColor { name: "Emerald", value: "#059669" },
    ThemeColor { name: "Crimson", value: "#dc2626" },
    ThemeColor { name: "Amethyst", value: "#7c3aed" },
    ThemeColor { name: "Gold", value: "#d97706" },
    ThemeColor { name: "Midnight", value: "#0f172a" },
    ThemeColor { name: "Teal", value: "#0d9488" },
    ThemeColor { name: "Rose", value: "#e11d48" },
    ThemeColor { name: "Indigo", value: "#4f46e5" },
    ThemeColor { name: "Fuchsia", value: "#c026d3" },
    ThemeColor { name: "Cyan", value: "#0891b2" },
    ThemeColor { name: "Orange", value: "#ea580c" },
];

#[derive(Debug, Clone, Serialize)]
pub struct FontInfo {
    pub name: &'static str,
    pub value: &'static str,
    pub kind: &'static str,
}

pub const FONTS: &[FontInfo] = &[
    FontInfo { name: "Inter (Modern)", value: "Inter", kind: "sans" },
    FontInfo { name: "Roboto (Clean)", value: "Roboto", kind: "sans" },
    FontInfo { name: "Open Sans (Neutral)", value: "Open Sans", kind: "sans" },
    FontInfo { name: "Montserrat (Bold)", value: "Montserrat", kind: "sans" },
    FontInfo { name: "Lato (Friendly)", value: "Lato", kind: "sans" },
    FontInfo { name: "Merriweather (Read)", value: "Merriweather", kind: "serif" },
    FontInfo { name: "Playfair (Elegant)", value: "Playfair Display", kind: "serif" },
    FontInfo { name: "Lora (Classic)", value: "Lora", kind: "serif" },
    FontInfo { name: "Roboto Slab (Strong)", value: "Roboto Slab", kind: "serif" },
    FontInfo { name: "JetBrains (Tech)", value: "JetBrains Mono", kind: "mono" },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_template_ids_are_unique() {
        let ids: HashSet<_> = TEMPLATES.iter().map(|t| t.id).collect();
        assert_eq!(ids.len(), TEMPLATES.len());
    }

    #[test]
    fn test_default_design_values_exist_in_catalog() {
        assert!(TEMPLATES.iter().any(|t| t.id == "titanium"));
        assert!(THEME_COLORS.iter().any(|c| c.value == "#2563eb"));
        assert!(FONTS.iter().any(|f| f.value == "Inter"));
    }
}
