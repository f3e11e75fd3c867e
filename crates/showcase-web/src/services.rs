//! Service descriptors: the static records each landing-page panel renders.

use serde::{Deserialize, Serialize};

/// One offered service, as configured in the page catalog.
///
/// Panels treat a descriptor as an immutable value for their whole lifetime.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceDescriptor {
    pub id: String,
    pub icon: ServiceIcon,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    /// Gradient utility classes for the section background (e.g. `from-premium-black to-premium-gray`)
    pub background: String,
    /// Gradient utility classes for the glow and tile (e.g. `from-blue-500 to-cyan-500`)
    pub accent_color: String,
    #[serde(default)]
    pub is_special: bool,
    pub primary_button_text: String,
    pub secondary_button_text: String,
}

/// Icons a service panel can carry. Each renders as an inline 24x24 stroke SVG.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ServiceIcon {
    Sparkles,
    Code,
    Palette,
    Rocket,
    Cpu,
    Globe,
    ChevronRight,
}

impl ServiceIcon {
    /// SVG path data for the glyph, drawn on a 24x24 viewBox.
    pub fn paths(self) -> &'static [&'static str] {
        match self {
            ServiceIcon::Sparkles => &[
                "M9.94 15.5A2 2 0 0 0 8.5 14.06l-6.14-1.58a.5.5 0 0 1 0-.96L8.5 9.94A2 2 0 0 0 9.94 8.5l1.58-6.14a.5.5 0 0 1 .96 0L14.06 8.5A2 2 0 0 0 15.5 9.94l6.14 1.58a.5.5 0 0 1 0 .96L15.5 14.06a2 2 0 0 0-1.44 1.44l-1.58 6.14a.5.5 0 0 1-.96 0z",
                "M20 3v4",
                "M22 5h-4",
                "M4 17v2",
                "M5 18H3",
            ],
            ServiceIcon::Code => &["m16 18 6-6-6-6", "m8 6-6 6 6 6"],
            ServiceIcon::Palette => &[
                "M12 22a10 10 0 1 1 10-10c0 2.5-2 4-4.5 4H15a2 2 0 0 0-1.5 3.3A1.7 1.7 0 0 1 12 22z",
                "M7.5 10.5h.01",
                "M10.5 7.5h.01",
                "M15.5 8.5h.01",
            ],
            ServiceIcon::Rocket => &[
                "M4.5 16.5c-1.5 1.26-2 5-2 5s3.74-.5 5-2c.71-.84.7-2.13-.09-2.91a2.18 2.18 0 0 0-2.91-.09z",
                "m12 15-3-3a22 22 0 0 1 2-3.95A12.88 12.88 0 0 1 22 2c0 2.72-.78 7.5-6 11a22.35 22.35 0 0 1-4 2z",
                "M9 12H4s.55-3.03 2-4c1.62-1.08 5 0 5 0",
                "M12 15v5s3.03-.55 4-2c1.08-1.62 0-5 0-5",
            ],
            ServiceIcon::Cpu => &[
                "M6 4h12a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H6a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z",
                "M9 9h6v6H9z",
                "M15 2v2",
                "M15 20v2",
                "M2 15h2",
                "M2 9h2",
                "M20 15h2",
                "M20 9h2",
                "M9 2v2",
                "M9 20v2",
            ],
            ServiceIcon::Globe => &[
                "M12 2a10 10 0 1 0 0 20 10 10 0 1 0 0-20z",
                "M12 2a14.5 14.5 0 0 0 0 20 14.5 14.5 0 0 0 0-20",
                "M2 12h20",
            ],
            ServiceIcon::ChevronRight => &["m9 18 6-6-6-6"],
        }
    }
}
