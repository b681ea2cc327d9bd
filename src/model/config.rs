use serde::Deserialize;
use std::fs;
use std::path::Path;

const ENV_CONFIG_PATH: &str = "LOVECOURT_CONFIG_PATH";
const DEFAULT_CONFIG_PATH: &str = "config.yaml";

const ENV_FCM_CREDENTIALS: &str = "LOVECOURT_FCM_CREDENTIALS";

const DEFAULT_SITE_URL: &str = "https://www.love-court.site";

fn default_site_url() -> String {
    DEFAULT_SITE_URL.to_string()
}

/// Push notification configuration
#[derive(Debug, Clone, Deserialize)]
pub struct PushConfig {
    /// Path to the Firebase service-account JSON. Push is disabled when unset.
    #[serde(default)]
    pub credentials_path: Option<String>,
    /// Public site base URL used for notification deep links
    #[serde(default = "default_site_url")]
    pub site_url: String,
}

impl Default for PushConfig {
    fn default() -> Self {
        Self {
            credentials_path: None,
            site_url: default_site_url(),
        }
    }
}

/// YAML configuration file structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub push: PushConfig,
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub push: PushConfig,
    pub port: u16,
    pub host: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            push: PushConfig::default(),
            port: 8080,
            host: "127.0.0.1".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment and config file
    pub fn from_env() -> Self {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(8080);

        let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());

        let config_path =
            std::env::var(ENV_CONFIG_PATH).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

        let mut push = Self::load_config_file(&config_path)
            .map(|cf| cf.push)
            .unwrap_or_default();

        // Env var takes precedence over the config file
        if let Ok(path) = std::env::var(ENV_FCM_CREDENTIALS) {
            push.credentials_path = Some(path);
        }

        Self { push, port, host }
    }

    /// Load configuration from YAML file
    fn load_config_file(path: &str) -> Option<ConfigFile> {
        let path = Path::new(path);

        if !path.exists() {
            tracing::debug!(path = %path.display(), "Config file not found, using defaults");
            return None;
        }

        match fs::read_to_string(path) {
            Ok(contents) => {
                // Handle empty file
                let contents = contents.trim();
                if contents.is_empty() {
                    tracing::debug!(path = %path.display(), "Config file is empty, using defaults");
                    return Some(ConfigFile::default());
                }

                match serde_yaml::from_str(contents) {
                    Ok(config) => {
                        tracing::info!(path = %path.display(), "Loaded configuration from file");
                        Some(config)
                    }
                    Err(e) => {
                        tracing::warn!(path = %path.display(), error = %e, "Failed to parse config file, using defaults");
                        None
                    }
                }
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Failed to read config file, using defaults");
                None
            }
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
