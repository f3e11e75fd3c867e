use crate::services::ServiceDescriptor;

/// Which side of the two-column grid the text block takes on large screens.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    /// Text left, visual right (1st, 3rd, 5th panel)
    ContentFirst,
    /// Visual left, text right (2nd, 4th panel)
    VisualFirst,
}

impl Orientation {
    pub fn from_index(index: usize) -> Self {
        if index % 2 == 1 {
            Orientation::VisualFirst
        } else {
            Orientation::ContentFirst
        }
    }

    pub fn content_class(self) -> &'static str {
        match self {
            Orientation::ContentFirst => "lg:order-1",
            Orientation::VisualFirst => "lg:order-2",
        }
    }

    pub fn visual_class(self) -> &'static str {
        match self {
            Orientation::ContentFirst => "lg:order-2 lg:justify-self-end",
            Orientation::VisualFirst => "lg:order-1 lg:justify-self-start",
        }
    }
}

/// The decorative visual drawn beside the text.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DecorativeVisual {
    /// Concentric rings with orbiting dots, for the featured service
    Core,
    /// Square icon tile with a light sweep, staggered by panel position
    Tile { sweep_delay_secs: f32 },
}

impl DecorativeVisual {
    pub fn for_service(service: &ServiceDescriptor, index: usize) -> Self {
        if service.is_special {
            DecorativeVisual::Core
        } else {
            DecorativeVisual::Tile {
                sweep_delay_secs: index as f32 * 0.5,
            }
        }
    }

    /// Value of the `data-visual` marker on the rendered section.
    pub fn marker(self) -> &'static str {
        match self {
            DecorativeVisual::Core => "core",
            DecorativeVisual::Tile { .. } => "tile",
        }
    }

    pub fn sweep_style(self) -> Option<String> {
        match self {
            DecorativeVisual::Core => None,
            DecorativeVisual::Tile { sweep_delay_secs } => Some(format!(
                "animation: sweep 3s ease-in-out infinite; animation-delay: {}s",
                sweep_delay_secs
            )),
        }
    }
}

/// Glow colour for a tile icon, picked from the accent gradient's hue.
pub fn glow_hex(accent_color: &str) -> &'static str {
    if accent_color.contains("blue") {
        "#60a5fa"
    } else if accent_color.contains("purple") {
        "#a855f7"
    } else if accent_color.contains("green") {
        "#34d399"
    } else {
        "#60a5fa"
    }
}

/// Inline `filter` style for a tile icon.
pub fn glow_filter(accent_color: &str) -> String {
    // 40 = 25% alpha suffix on the hex colour
    format!("filter: drop-shadow(0 0 8px {}40)", glow_hex(accent_color))
}

pub fn content_reveal_class(shown: bool) -> &'static str {
    if shown {
        "transition-all duration-1000 ease-out opacity-100 translate-y-0"
    } else {
        "transition-all duration-1000 ease-out opacity-0 translate-y-12"
    }
}

pub fn visual_reveal_class(shown: bool) -> &'static str {
    if shown {
        "transition-all duration-1200 ease-out opacity-100 translate-y-0 scale-100"
    } else {
        "transition-all duration-1200 ease-out opacity-0 translate-y-8 scale-95"
    }
}

pub fn visual_reveal_delay(shown: bool) -> &'static str {
    if shown { "transition-delay: 200ms" } else { "transition-delay: 0ms" }
}

pub fn device_class(hovered: bool) -> &'static str {
    if hovered {
        "relative w-72 h-72 transition-all duration-700 scale-105"
    } else {
        "relative w-72 h-72 transition-all duration-700 scale-100"
    }
}

pub fn glow_class(accent_color: &str, hovered: bool) -> String {
    let state = if hovered { "opacity-70 scale-110" } else { "opacity-40 scale-100" };
    format!(
        "absolute inset-0 bg-gradient-to-br {} rounded-3xl blur-3xl transition-all duration-700 {}",
        accent_color, state
    )
}

pub fn tile_border_class(accent_color: &str, hovered: bool) -> String {
    let opacity = if hovered { "opacity-100" } else { "opacity-90" };
    format!(
        "absolute inset-0 rounded-2xl bg-gradient-to-br {} p-0.5 transition-all duration-500 shadow-xl {}",
        accent_color, opacity
    )
}

pub fn tile_ambient_class(accent_color: &str, hovered: bool) -> String {
    let opacity = if hovered { "opacity-20" } else { "opacity-10" };
    format!(
        "absolute inset-2 rounded-xl bg-gradient-to-br {} transition-all duration-700 {}",
        accent_color, opacity
    )
}

pub fn accent_square_class(accent_color: &str, hovered: bool) -> String {
    let state = if hovered {
        "translate-y-1 rotate-12 shadow-xl opacity-90"
    } else {
        "shadow-lg opacity-80"
    };
    format!(
        "absolute -top-4 -right-4 w-8 h-8 rounded-lg bg-gradient-to-br {} transition-all duration-700 {}",
        accent_color, state
    )
}

pub fn accent_dot_class(accent_color: &str, hovered: bool) -> String {
    let state = if hovered {
        "-translate-y-1 rotate-45 shadow-xl opacity-85"
    } else {
        "shadow-lg opacity-75"
    };
    format!(
        "absolute -bottom-4 -left-4 w-6 h-6 rounded-full bg-gradient-to-br {} transition-all duration-700 delay-100 {}",
        accent_color, state
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::ServiceIcon;

    fn service(is_special: bool) -> ServiceDescriptor {
        ServiceDescriptor {
            id: "studio".to_string(),
            icon: ServiceIcon::Sparkles,
            title: "Studio".to_string(),
            subtitle: "Creative".to_string(),
            description: "Things".to_string(),
            background: "from-premium-black to-premium-gray".to_string(),
            accent_color: "from-purple-500 to-pink-500".to_string(),
            is_special,
            primary_button_text: "Go".to_string(),
            secondary_button_text: "Learn".to_string(),
        }
    }

    #[test]
    fn orientation_alternates_by_index() {
        let orientations: Vec<_> = (0..4).map(Orientation::from_index).collect();
        assert_eq!(
            orientations,
            vec![
                Orientation::ContentFirst,
                Orientation::VisualFirst,
                Orientation::ContentFirst,
                Orientation::VisualFirst,
            ]
        );
        assert_eq!(Orientation::from_index(1).content_class(), "lg:order-2");
        assert_eq!(Orientation::from_index(2).visual_class(), "lg:order-2 lg:justify-self-end");
    }

    #[test]
    fn special_service_gets_core_visual() {
        assert_eq!(DecorativeVisual::for_service(&service(true), 3), DecorativeVisual::Core);
        assert_eq!(DecorativeVisual::Core.marker(), "core");
        assert!(DecorativeVisual::Core.sweep_style().is_none());
    }

    #[test]
    fn tile_sweep_is_staggered_by_index() {
        let visual = DecorativeVisual::for_service(&service(false), 3);
        assert_eq!(visual, DecorativeVisual::Tile { sweep_delay_secs: 1.5 });
        assert_eq!(visual.marker(), "tile");
        assert!(visual.sweep_style().unwrap().ends_with("animation-delay: 1.5s"));

        let first = DecorativeVisual::for_service(&service(false), 0);
        assert!(first.sweep_style().unwrap().ends_with("animation-delay: 0s"));
    }

    #[test]
    fn glow_follows_accent_hue() {
        assert_eq!(glow_hex("from-blue-500 to-cyan-500"), "#60a5fa");
        assert_eq!(glow_hex("from-purple-500 to-pink-500"), "#a855f7");
        assert_eq!(glow_hex("from-green-400 to-emerald-500"), "#34d399");
        assert_eq!(glow_hex("from-orange-500 to-red-500"), "#60a5fa");
        assert_eq!(glow_filter("from-green-400"), "filter: drop-shadow(0 0 8px #34d39940)");
    }

    #[test]
    fn reveal_classes_track_visibility() {
        assert!(content_reveal_class(false).contains("opacity-0 translate-y-12"));
        assert!(content_reveal_class(true).contains("opacity-100"));
        assert!(visual_reveal_class(false).contains("scale-95"));
        assert_eq!(visual_reveal_delay(true), "transition-delay: 200ms");
        assert_eq!(visual_reveal_delay(false), "transition-delay: 0ms");
    }

    #[test]
    fn hover_classes_switch_state() {
        assert!(device_class(true).ends_with("scale-105"));
        assert!(device_class(false).ends_with("scale-100"));
        let accent = "from-blue-500 to-cyan-500";
        assert!(glow_class(accent, true).ends_with("opacity-70 scale-110"));
        assert!(glow_class(accent, false).contains(accent));
        assert!(tile_ambient_class(accent, true).ends_with("opacity-20"));
        assert!(accent_square_class(accent, true).contains("rotate-12"));
        assert!(!accent_dot_class(accent, false).contains("rotate-45"));
    }
}
