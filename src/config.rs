//! Storefront Configuration
//!
//! Defaults can be overridden by a `window.STOREFRONT_CONFIG` object (or JSON
//! string) set in `index.html` before the wasm bundle loads. Every field is
//! optional.

use serde::{Deserialize, Serialize};
use wasm_bindgen::JsValue;

use crate::i18n::LocalizedString;

const GLOBAL_CONFIG_KEY: &str = "STOREFRONT_CONFIG";
const FORECAST_ENDPOINT: &str = "https://api.open-meteo.com/v1/forecast";

/// Lower bounds for page-supplied timer periods
pub const MIN_CLOCK_TICK_MS: u32 = 250;
pub const MIN_REFRESH_SECS: u32 = 60;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid config object: {0}")]
    Object(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorefrontConfig {
    /// Cart API prefix, relative to the page origin unless absolute
    pub api_base: String,
    pub weather: WeatherConfig,
    pub clock_tick_ms: u32,
    /// How long a product button shows its "added" label
    pub added_feedback_ms: u32,
    pub demo_account: DemoAccount,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeatherConfig {
    pub latitude: f64,
    pub longitude: f64,
    pub location: LocalizedString,
    pub refresh_secs: u32,
}

/// The single account the demo authenticator accepts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoAccount {
    pub email: String,
    pub password: String,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            api_base: "/api".to_string(),
            weather: WeatherConfig::default(),
            clock_tick_ms: 1000,
            added_feedback_ms: 2000,
            demo_account: DemoAccount::default(),
        }
    }
}

impl Default for WeatherConfig {
    fn default() -> Self {
        // Jeddah
        Self {
            latitude: 21.4858,
            longitude: 39.1925,
            location: LocalizedString {
                ar: "جدة".to_string(),
                en: "Jeddah".to_string(),
            },
            refresh_secs: 600,
        }
    }
}

impl Default for DemoAccount {
    fn default() -> Self {
        Self {
            email: "user@example.com".to_string(),
            password: "123456".to_string(),
        }
    }
}

impl WeatherConfig {
    pub fn forecast_url(&self) -> String {
        format!(
            "{}?latitude={}&longitude={}&current_weather=true&timezone=auto",
            FORECAST_ENDPOINT, self.latitude, self.longitude
        )
    }

    pub fn refresh_ms(&self) -> u32 {
        self.refresh_secs.saturating_mul(1000)
    }
}

impl StorefrontConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Raise timer periods that are below their minimum
    pub fn clamped(mut self) -> Self {
        if self.clock_tick_ms < MIN_CLOCK_TICK_MS {
            log::warn!("[CONFIG] clock_tick_ms {} raised to {}", self.clock_tick_ms, MIN_CLOCK_TICK_MS);
            self.clock_tick_ms = MIN_CLOCK_TICK_MS;
        }
        if self.weather.refresh_secs < MIN_REFRESH_SECS {
            log::warn!("[CONFIG] refresh_secs {} raised to {}", self.weather.refresh_secs, MIN_REFRESH_SECS);
            self.weather.refresh_secs = MIN_REFRESH_SECS;
        }
        self
    }

    /// Read `window.STOREFRONT_CONFIG`, `None` when the page sets nothing
    fn from_window() -> Result<Option<Self>, ConfigError> {
        let Some(window) = web_sys::window() else {
            return Ok(None);
        };
        let value = js_sys::Reflect::get(&window, &JsValue::from_str(GLOBAL_CONFIG_KEY))
            .map_err(|e| ConfigError::Object(format!("{:?}", e)))?;
        if value.is_undefined() || value.is_null() {
            return Ok(None);
        }
        if let Some(json) = value.as_string() {
            return Self::from_json(&json).map(Some);
        }
        serde_wasm_bindgen::from_value(value)
            .map(Some)
            .map_err(|e| ConfigError::Object(e.to_string()))
    }

    /// Page config if present and valid, defaults otherwise
    pub fn load() -> Self {
        match Self::from_window() {
            Ok(Some(config)) => {
                log::info!("[CONFIG] Loaded page config, api_base={}", config.api_base);
                config.clamped()
            }
            Ok(None) => Self::default(),
            Err(e) => {
                log::warn!("[CONFIG] {}, using defaults", e);
                Self::default()
            }
        }
    }
}
