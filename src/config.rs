use serde::{Deserialize, Serialize};

#[cfg(target_arch = "wasm32")]
use gloo_storage::{errors::StorageError, LocalStorage, Storage};

#[cfg(target_arch = "wasm32")]
const CONFIG_KEY: &str = "allfines.config";

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Runtime configuration, shared through context by the app shell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub gemini_api_key: Option<String>,
    #[serde(default = "default_gemini_model")]
    pub gemini_model: String,
    #[serde(default = "default_gemini_base_url")]
    pub gemini_base_url: String,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u32,
    #[serde(default = "default_initial_volume")]
    pub initial_volume: f64,
}

fn default_gemini_model() -> String {
    DEFAULT_GEMINI_MODEL.to_string()
}

fn default_gemini_base_url() -> String {
    DEFAULT_GEMINI_BASE_URL.to_string()
}

fn default_request_timeout_secs() -> u32 {
    12
}

fn default_initial_volume() -> f64 {
    0.7
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            gemini_api_key: None,
            gemini_model: default_gemini_model(),
            gemini_base_url: default_gemini_base_url(),
            request_timeout_secs: default_request_timeout_secs(),
            initial_volume: default_initial_volume(),
        }
    }
}

/// Partial config read from browser storage; every field present wins over the build defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigOverrides {
    #[serde(default)]
    pub gemini_api_key: Option<String>,
    #[serde(default)]
    pub gemini_model: Option<String>,
    #[serde(default)]
    pub gemini_base_url: Option<String>,
    #[serde(default)]
    pub request_timeout_secs: Option<u32>,
    #[serde(default)]
    pub initial_volume: Option<f64>,
}

impl AppConfig {
    /// Defaults plus whatever the build environment baked in.
    pub fn from_build_env() -> Self {
        let api_key = option_env!("ALLFINES_GEMINI_API_KEY")
            .or(option_env!("GEMINI_API_KEY"))
            .map(str::to_string);
        Self {
            gemini_api_key: api_key,
            ..Self::default()
        }
        .normalized()
    }

    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(key) = overrides.gemini_api_key {
            self.gemini_api_key = Some(key);
        }
        if let Some(model) = overrides.gemini_model {
            self.gemini_model = model;
        }
        if let Some(base_url) = overrides.gemini_base_url {
            self.gemini_base_url = base_url;
        }
        if let Some(timeout) = overrides.request_timeout_secs {
            self.request_timeout_secs = timeout;
        }
        if let Some(volume) = overrides.initial_volume {
            self.initial_volume = volume;
        }
        self.normalized()
    }

    pub fn normalized(mut self) -> Self {
        self.gemini_api_key = self
            .gemini_api_key
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty());
        if self.gemini_model.trim().is_empty() {
            self.gemini_model = default_gemini_model();
        }
        let base_url = self.gemini_base_url.trim().trim_end_matches('/');
        self.gemini_base_url = if base_url.is_empty() {
            default_gemini_base_url()
        } else {
            base_url.to_string()
        };
        self.request_timeout_secs = self.request_timeout_secs.clamp(1, 60);
        self.initial_volume = normalize_volume(self.initial_volume);
        self
    }

    /// Build-time config with the optional browser-storage override applied.
    pub fn load() -> Self {
        let config = Self::from_build_env();
        match load_overrides() {
            Some(overrides) => config.with_overrides(overrides),
            None => config,
        }
    }
}

/// Clamp into `[0, 1]`; non-finite values fall back to the default level.
pub fn normalize_volume(value: f64) -> f64 {
    if !value.is_finite() {
        return default_initial_volume();
    }
    value.clamp(0.0, 1.0)
}

#[cfg(target_arch = "wasm32")]
fn load_overrides() -> Option<ConfigOverrides> {
    match LocalStorage::get::<ConfigOverrides>(CONFIG_KEY) {
        Ok(overrides) => Some(overrides),
        Err(StorageError::KeyNotFound(_)) => None,
        Err(err) => {
            crate::diagnostics::log_warn("config", format!("ignoring stored config: {err}"));
            None
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn load_overrides() -> Option<ConfigOverrides> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_session_setup() {
        let config = AppConfig::default();
        assert_eq!(config.gemini_model, "gemini-2.5-flash");
        assert_eq!(config.initial_volume, 0.7);
        assert_eq!(config.request_timeout_secs, 12);
        assert!(config.gemini_api_key.is_none());
    }

    #[test]
    fn overrides_are_normalized() {
        let config = AppConfig::default().with_overrides(ConfigOverrides {
            gemini_api_key: Some("  secret  ".to_string()),
            gemini_base_url: Some("https://proxy.example/v1/".to_string()),
            request_timeout_secs: Some(600),
            initial_volume: Some(0.45),
            ..ConfigOverrides::default()
        });
        assert_eq!(config.gemini_api_key.as_deref(), Some("secret"));
        assert_eq!(config.gemini_base_url, "https://proxy.example/v1");
        assert_eq!(config.request_timeout_secs, 60);
        assert_eq!(config.initial_volume, 0.45);
        assert_eq!(config.gemini_model, DEFAULT_GEMINI_MODEL);
    }

    #[test]
    fn blank_key_is_treated_as_missing() {
        let config = AppConfig::default().with_overrides(ConfigOverrides {
            gemini_api_key: Some("   ".to_string()),
            gemini_model: Some(String::new()),
            ..ConfigOverrides::default()
        });
        assert!(config.gemini_api_key.is_none());
        assert_eq!(config.gemini_model, DEFAULT_GEMINI_MODEL);
    }

    #[test]
    fn stored_json_fills_missing_fields_with_defaults() {
        let overrides: ConfigOverrides =
            serde_json::from_str(r#"{"gemini_api_key":"abc"}"#).unwrap();
        let config = AppConfig::default().with_overrides(overrides);
        assert_eq!(config.gemini_api_key.as_deref(), Some("abc"));
        assert_eq!(config.gemini_base_url, DEFAULT_GEMINI_BASE_URL);
    }

    #[test]
    fn volume_normalization() {
        assert_eq!(normalize_volume(0.5), 0.5);
        assert_eq!(normalize_volume(-1.0), 0.0);
        assert_eq!(normalize_volume(80.0), 1.0);
        assert_eq!(normalize_volume(f64::NAN), 0.7);
    }
}
