use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use mkfly_webhook::WebhookConfig;
use serde::Deserialize;
use std::env;

pub const DEFAULT_WEBHOOK_URL: &str = "https://geovas.app.n8n.cloud/webhook/Mkfly";

/// Locales with a notification catalogue under `locales/`.
pub const SUPPORTED_LOCALES: [&str; 2] = ["es", "en"];

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub webhook: WebhookConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct UiConfig {
    #[serde(default = "default_locale")]
    pub locale: String,
    #[serde(default = "default_submit_label")]
    pub submit_label: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            locale: default_locale(),
            submit_label: default_submit_label(),
        }
    }
}

fn default_locale() -> String {
    "es".to_string()
}

fn default_submit_label() -> String {
    "Enviar mensaje".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (MKFLY__WEBHOOK__URL, etc.)
    /// 2. Config file specified by path
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder()
            .set_default("webhook.url", DEFAULT_WEBHOOK_URL)?
            .set_default("ui.locale", default_locale())?
            .set_default("observability.log_level", default_log_level())?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Optional: a missing file falls back to defaults
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("MKFLY")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        let url = self.webhook.url.trim();
        if url.is_empty() {
            return Err("Webhook url must not be empty".to_string());
        }
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(format!("Webhook url must use http or https: {url}"));
        }
        if self.webhook.timeout_secs == Some(0) {
            return Err("Webhook timeout_secs must be greater than 0".to_string());
        }
        if !SUPPORTED_LOCALES.contains(&self.ui.locale.as_str()) {
            return Err(format!(
                "Unsupported locale '{}', expected one of {:?}",
                self.ui.locale, SUPPORTED_LOCALES
            ));
        }
        Ok(())
    }
}
