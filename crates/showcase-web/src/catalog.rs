//! Page catalog: the ordered list of services the landing page renders.
//!
//! Read from a TOML file of `[[services]]` tables, or taken from the
//! built-in catalog when no file is configured.

use anyhow::{Context, Result, bail, ensure};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use std::sync::OnceLock;

use crate::services::{ServiceDescriptor, ServiceIcon};

static CATALOG: OnceLock<ServiceCatalog> = OnceLock::new();

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceCatalog {
    #[serde(default)]
    pub services: Vec<ServiceDescriptor>,
}

impl ServiceCatalog {
    /// Load and validate a catalog file.
    pub fn load(path: &Path) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).with_context(|| format!("Failed to read catalog: {}", path.display()))?;
        let catalog = Self::parse(&content).with_context(|| format!("Invalid catalog: {}", path.display()))?;
        tracing::info!(path = %path.display(), services = catalog.services.len(), "loaded service catalog");
        Ok(catalog)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let catalog: ServiceCatalog = toml::from_str(content).context("Failed to parse catalog TOML")?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Check the invariants panels rely on but do not enforce themselves.
    pub fn validate(&self) -> Result<()> {
        ensure!(!self.services.is_empty(), "catalog has no services");

        let mut ids = HashSet::new();
        let mut special: Option<&str> = None;
        for service in &self.services {
            ensure!(!service.id.trim().is_empty(), "service with title {:?} has an empty id", service.title);
            ensure!(!service.title.trim().is_empty(), "service {:?} has an empty title", service.id);
            if !ids.insert(service.id.as_str()) {
                bail!("duplicate service id {:?}", service.id);
            }
            if service.is_special {
                if let Some(first) = special {
                    bail!("services {:?} and {:?} are both marked special", first, service.id);
                }
                special = Some(service.id.as_str());
            }
        }
        Ok(())
    }

    /// Default catalog shipped with the site.
    pub fn builtin() -> Self {
        let service = |id: &str,
                       icon: ServiceIcon,
                       title: &str,
                       subtitle: &str,
                       description: &str,
                       accent_color: &str,
                       is_special: bool,
                       primary: &str| ServiceDescriptor {
            id: id.to_string(),
            icon,
            title: title.to_string(),
            subtitle: subtitle.to_string(),
            description: description.to_string(),
            background: "from-premium-black to-premium-gray".to_string(),
            accent_color: accent_color.to_string(),
            is_special,
            primary_button_text: primary.to_string(),
            secondary_button_text: "Learn more".to_string(),
        };

        Self {
            services: vec![
                service(
                    "web",
                    ServiceIcon::Globe,
                    "Web Experiences",
                    "Fast, accessible sites that convert",
                    "Marketing sites and web apps built on a modern stack, tuned for speed and search from the first commit.",
                    "from-blue-500 to-cyan-500",
                    false,
                    "Start a project",
                ),
                service(
                    "product",
                    ServiceIcon::Code,
                    "Product Engineering",
                    "From prototype to production",
                    "Small senior teams that design, build and ship software alongside yours, with clear milestones and no hand-off gaps.",
                    "from-purple-500 to-pink-500",
                    false,
                    "Book a call",
                ),
                service(
                    "studio",
                    ServiceIcon::Sparkles,
                    "Studio",
                    "Brand, motion and interface design",
                    "A design studio for launches and rebrands: identity systems, product UI and motion that hold together across every surface.",
                    "from-blue-400 to-cyan-400",
                    true,
                    "See the studio",
                ),
                service(
                    "infrastructure",
                    ServiceIcon::Cpu,
                    "Infrastructure",
                    "Reliable systems that scale quietly",
                    "Cloud architecture, observability and on-call practices that keep releases boring and outages short.",
                    "from-green-400 to-emerald-500",
                    false,
                    "Get an audit",
                ),
            ],
        }
    }
}

/// Install the process-wide catalog. Only the first call takes effect.
pub fn install(catalog: ServiceCatalog) -> bool {
    CATALOG.set(catalog).is_ok()
}

/// The installed catalog, or the built-in one if nothing was installed.
pub fn current() -> &'static ServiceCatalog {
    CATALOG.get_or_init(ServiceCatalog::builtin)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
[[services]]
id = "web"
icon = "globe"
title = "Web"
subtitle = "Sites"
description = "We build sites."
background = "from-black to-gray-900"
accent_color = "from-blue-500 to-cyan-500"
primary_button_text = "Start"
secondary_button_text = "More"

[[services]]
id = "studio"
icon = "sparkles"
title = "Studio"
subtitle = "Design"
description = "We design things."
background = "from-black to-gray-900"
accent_color = "from-purple-500 to-pink-500"
is_special = true
primary_button_text = "Visit"
secondary_button_text = "More"
"#;

    #[test]
    fn parses_services_in_order() {
        let catalog = ServiceCatalog::parse(SAMPLE).unwrap();
        let ids: Vec<_> = catalog.services.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["web", "studio"]);
        assert!(!catalog.services[0].is_special);
        assert!(catalog.services[1].is_special);
        assert_eq!(catalog.services[1].icon, ServiceIcon::Sparkles);
    }

    #[test]
    fn rejects_duplicate_ids() {
        let doubled = SAMPLE.replace("id = \"studio\"", "id = \"web\"");
        let err = ServiceCatalog::parse(&doubled).unwrap_err();
        assert!(err.to_string().contains("duplicate service id \"web\""), "{}", err);
    }

    #[test]
    fn rejects_two_special_services() {
        let mut catalog = ServiceCatalog::parse(SAMPLE).unwrap();
        catalog.services[0].is_special = true;
        let err = catalog.validate().unwrap_err();
        assert!(err.to_string().contains("both marked special"), "{}", err);
    }

    #[test]
    fn rejects_empty_catalog() {
        assert!(ServiceCatalog::parse("").is_err());
    }

    #[test]
    fn rejects_unknown_icon() {
        let bad = SAMPLE.replace("icon = \"globe\"", "icon = \"teapot\"");
        assert!(ServiceCatalog::parse(&bad).is_err());
    }

    #[test]
    fn builtin_catalog_is_valid() {
        let catalog = ServiceCatalog::builtin();
        catalog.validate().unwrap();
        assert_eq!(catalog.services.iter().filter(|s| s.is_special).count(), 1);
    }

    #[test]
    fn example_catalog_is_valid() {
        let catalog = ServiceCatalog::parse(include_str!("../services.example.toml")).unwrap();
        assert_eq!(catalog.services.len(), 3);
        assert_eq!(catalog.services[2].icon, ServiceIcon::Palette);
    }

    #[test]
    fn install_takes_effect_once() {
        let custom = ServiceCatalog::parse(SAMPLE).unwrap();
        assert!(install(custom.clone()));
        assert!(!install(ServiceCatalog::builtin()));
        assert_eq!(current(), &custom);
    }

    #[test]
    fn load_reports_missing_file() {
        let err = ServiceCatalog::load(Path::new("/nonexistent/services.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read catalog"), "{}", err);
    }
}
