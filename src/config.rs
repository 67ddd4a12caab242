//! Shop Configuration
//!
//! Timing constants and storage keys. Defaults live in code; a host page may
//! override any subset with an inline JSON block:
//!
//! ```html
//! <script id="shop-config" type="application/json">{ "flight_ms": 600 }</script>
//! ```

use serde::Deserialize;

/// Element id of the optional inline JSON config block
pub const CONFIG_ELEMENT_ID: &str = "shop-config";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ShopConfig {
    /// Duration of one add-to-cart flight
    pub flight_ms: f64,
    /// Delay between landing and removal of the flying element / guard release
    pub landing_grace_ms: u32,
    /// Particles spawned around the cart icon on landing
    pub particle_count: u32,
    /// Delay between consecutive particle spawns
    pub particle_stagger_ms: u32,
    /// Hero exit animation length before the shop is revealed
    pub hero_exit_ms: u32,
    /// Entrance delay step between product cards
    pub card_stagger_ms: u32,
    /// How long a toast stays visible
    pub toast_ms: u32,
    /// Cart badge pulse length
    pub badge_pulse_ms: u32,
    /// Prefix for local storage keys
    pub storage_prefix: String,
    /// Minimum log level ("error", "warn", "info", "debug", "trace")
    pub log_level: String,
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            flight_ms: 800.0,
            landing_grace_ms: 100,
            particle_count: 12,
            particle_stagger_ms: 30,
            hero_exit_ms: 700,
            card_stagger_ms: 80,
            toast_ms: 2500,
            badge_pulse_ms: 200,
            storage_prefix: "boutique".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl ShopConfig {
    /// Parse a JSON override; missing keys keep their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Read the inline config block from the host page, falling back to defaults
    pub fn from_document() -> Self {
        let text = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());

        match text {
            Some(json) if !json.trim().is_empty() => Self::from_json(&json).unwrap_or_else(|e| {
                web_sys::console::warn_1(&format!("[CONFIG] Ignoring invalid shop-config: {}", e).into());
                Self::default()
            }),
            _ => Self::default(),
        }
    }

    /// Full local storage key for a namespace
    pub fn storage_key(&self, name: &str) -> String {
        format!("{}.{}", self.storage_prefix, name)
    }

    pub fn level_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config = ShopConfig::from_json(r#"{ "flight_ms": 600, "particle_count": 6 }"#).unwrap();
        assert_eq!(config.flight_ms, 600.0);
        assert_eq!(config.particle_count, 6);
        assert_eq!(config.landing_grace_ms, 100);
        assert_eq!(config.storage_prefix, "boutique");
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(ShopConfig::from_json("{ flight_ms: }").is_err());
    }

    #[test]
    fn test_storage_key() {
        let config = ShopConfig::default();
        assert_eq!(config.storage_key("users"), "boutique.users");
    }

    #[test]
    fn test_level_filter() {
        let mut config = ShopConfig::default();
        assert_eq!(config.level_filter(), log::LevelFilter::Info);
        config.log_level = "debug".to_string();
        assert_eq!(config.level_filter(), log::LevelFilter::Debug);
        config.log_level = "loud".to_string();
        assert_eq!(config.level_filter(), log::LevelFilter::Info);
    }
}
