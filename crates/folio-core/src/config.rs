//! Page configuration
//!
//! Settings are loaded from `config/folio.yaml`, embedded at compile time.
//! Every field has a compiled-in default, so a partial document only
//! overrides what it names. Use [`FolioConfig::embedded`] at startup.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const EMBEDDED_CONFIG: &str = include_str!("../config/folio.yaml");

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FolioConfig {
    /// Enables parallax floating elements and intersection-triggered reveals.
    pub scroll_animations: bool,
    /// Section the page is forced onto when it opens.
    pub home_section: String,
    pub selectors: Selectors,
    /// Call-to-action buttons, matched by their exact (trimmed) label.
    pub cta: Vec<CtaBinding>,
    pub notifications: NotificationTimings,
    pub greeting: GreetingConfig,
    pub roles: RoleConfig,
    pub loading: LoadingConfig,
    pub decor: DecorConfig,
    pub cv: CvConfig,
}

impl Default for FolioConfig {
    fn default() -> Self {
        Self {
            scroll_animations: false,
            home_section: "home".to_string(),
            selectors: Selectors::default(),
            cta: vec![
                CtaBinding::new("Let's Connect", "contact"),
                CtaBinding::new("My Works", "projects"),
            ],
            notifications: NotificationTimings::default(),
            greeting: GreetingConfig::default(),
            roles: RoleConfig::default(),
            loading: LoadingConfig::default(),
            decor: DecorConfig::default(),
            cv: CvConfig::default(),
        }
    }
}

impl FolioConfig {
    /// Parse and validate a YAML document.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: FolioConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// The configuration shipped with the page.
    ///
    /// Falls back to defaults (with a warning) if the embedded document is
    /// rejected.
    pub fn embedded() -> Self {
        match Self::from_yaml(EMBEDDED_CONFIG) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Embedded config rejected, using defaults: {}", e);
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.home_section.trim().is_empty() {
            return Err(ConfigError::invalid("home_section", "must not be empty"));
        }
        for (i, binding) in self.cta.iter().enumerate() {
            if binding.label.trim().is_empty() {
                return Err(ConfigError::invalid(
                    format!("cta[{}].label", i),
                    "must not be empty",
                ));
            }
            if binding.section.trim().is_empty() {
                return Err(ConfigError::invalid(
                    format!("cta[{}].section", i),
                    "must not be empty",
                ));
            }
        }
        if self.roles.interval_ms == 0 {
            return Err(ConfigError::invalid("roles.interval_ms", "must be > 0"));
        }
        if self.roles.fade_ms >= self.roles.interval_ms {
            return Err(ConfigError::invalid(
                "roles.fade_ms",
                "must be shorter than roles.interval_ms",
            ));
        }
        if self.greeting.char_interval_ms == 0 {
            return Err(ConfigError::invalid("greeting.char_interval_ms", "must be > 0"));
        }
        if !(0.0..=1.0).contains(&self.decor.reveal_threshold) {
            return Err(ConfigError::invalid(
                "decor.reveal_threshold",
                "must be within 0.0..=1.0",
            ));
        }
        Ok(())
    }

    /// Section a CTA label scrolls to, if any.
    pub fn cta_target(&self, label: &str) -> Option<&str> {
        find_cta(&self.cta, label)
    }
}

/// CSS selectors for the DOM contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Selectors {
    pub container: String,
    pub section: String,
    pub nav_link: String,
    pub anchor: String,
    pub cta_button: String,
    pub cv_button: String,
    pub loading_screen: String,
    pub greeting: String,
    /// Element id, not a selector.
    pub role_rotator_id: String,
    pub lazy_image: String,
    pub skill_item: String,
    pub social_link: String,
    pub project_card: String,
    pub legacy_menu_toggle: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            container: ".main-content".to_string(),
            section: ".section".to_string(),
            nav_link: ".nav-link".to_string(),
            anchor: "a[href^=\"#\"]".to_string(),
            cta_button: ".btn".to_string(),
            cv_button: ".btn-cv".to_string(),
            loading_screen: ".loading-screen".to_string(),
            greeting: ".greeting".to_string(),
            role_rotator_id: "role-rotator".to_string(),
            lazy_image: "img[data-src]".to_string(),
            skill_item: ".skill-item".to_string(),
            social_link: ".social-link, .bottom-social-link".to_string(),
            project_card: ".project-card".to_string(),
            legacy_menu_toggle: ".mobile-menu-toggle".to_string(),
        }
    }
}

/// Match a button label (trimmed, exact) against CTA bindings.
pub fn find_cta<'a>(bindings: &'a [CtaBinding], label: &str) -> Option<&'a str> {
    let label = label.trim();
    bindings
        .iter()
        .find(|b| b.label == label)
        .map(|b| b.section.as_str())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CtaBinding {
    pub label: String,
    pub section: String,
}

impl CtaBinding {
    pub fn new(label: impl Into<String>, section: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            section: section.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationTimings {
    pub show_delay_ms: u32,
    pub auto_dismiss_ms: u32,
    pub remove_delay_ms: u32,
}

impl Default for NotificationTimings {
    fn default() -> Self {
        Self {
            show_delay_ms: 100,
            auto_dismiss_ms: 5000,
            remove_delay_ms: 300,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GreetingConfig {
    pub text: String,
    pub start_delay_ms: u32,
    pub char_interval_ms: u32,
}

impl Default for GreetingConfig {
    fn default() -> Self {
        Self {
            text: "Hello!".to_string(),
            start_delay_ms: 1000,
            char_interval_ms: 150,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoleConfig {
    pub entries: Vec<String>,
    pub interval_ms: u32,
    pub fade_ms: u32,
}

impl Default for RoleConfig {
    fn default() -> Self {
        Self {
            entries: vec![
                "I'm a Tech Enthusiast".to_string(),
                "I'm a Python Developer".to_string(),
                "I'm a Web Developer".to_string(),
            ],
            interval_ms: 2800,
            fade_ms: 400,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadingConfig {
    pub hold_ms: u32,
    pub fade_ms: u32,
}

impl Default for LoadingConfig {
    fn default() -> Self {
        Self {
            hold_ms: 1500,
            fade_ms: 500,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecorConfig {
    pub floating_elements: usize,
    pub parallax_speed: f64,
    pub reveal_threshold: f64,
    pub reveal_root_margin: String,
}

impl Default for DecorConfig {
    fn default() -> Self {
        Self {
            floating_elements: 6,
            parallax_speed: 0.5,
            reveal_threshold: 0.3,
            reveal_root_margin: "0px 0px -100px 0px".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CvConfig {
    pub path: String,
    pub file_name: String,
}

impl Default for CvConfig {
    fn default() -> Self {
        Self {
            path: "assets/Shaik_Abdul_Gaffar_CV.pdf".to_string(),
            file_name: "Shaik_Abdul_Gaffar_CV.pdf".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_embedded_config_matches_defaults() {
        let parsed = FolioConfig::from_yaml(EMBEDDED_CONFIG).unwrap();
        assert_eq!(parsed, FolioConfig::default());
    }

    #[test]
    fn test_partial_document_keeps_defaults() {
        let config = FolioConfig::from_yaml("scroll_animations: true\n").unwrap();
        assert!(config.scroll_animations);
        assert_eq!(config.home_section, "home");
        assert_eq!(config.roles.interval_ms, 2800);
        assert_eq!(config.selectors.container, ".main-content");
    }

    #[test]
    fn test_cta_target_uses_trimmed_exact_label() {
        let config = FolioConfig::default();
        assert_eq!(config.cta_target("My Works"), Some("projects"));
        assert_eq!(config.cta_target("  Let's Connect \n"), Some("contact"));
        assert_eq!(config.cta_target("my works"), None);
        assert_eq!(config.cta_target("Download CV"), None);
    }

    #[test]
    fn test_rejects_zero_role_interval() {
        let err = FolioConfig::from_yaml("roles:\n  interval_ms: 0\n").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid { ref field, .. } if field == "roles.interval_ms"
        ));
    }

    #[test]
    fn test_rejects_empty_cta_section() {
        let yaml = "cta:\n  - label: Hire Me\n    section: \"\"\n";
        let err = FolioConfig::from_yaml(yaml).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { ref field, .. } if field == "cta[0].section"));
    }

    #[test]
    fn test_malformed_yaml_is_parse_error() {
        let err = FolioConfig::from_yaml("roles: [unterminated").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
