use serde::Deserialize;
use thiserror::Error;

use crate::balloons::DEFAULT_FEED_URL;
use crate::flights::{DEFAULT_API_URL, DEFAULT_THRESHOLD_KM};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub web: WebConfig,
    #[serde(default)]
    pub balloons: BalloonsConfig,
    #[serde(default)]
    pub opensky: OpenSkyConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WebConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

fn default_bind() -> String {
    "0.0.0.0:8080".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct BalloonsConfig {
    #[serde(default = "default_feed_url")]
    pub feed_url: String,
    /// Trailing hours of the feed to aggregate.
    #[serde(default = "default_hours")]
    pub hours: u32,
}

impl Default for BalloonsConfig {
    fn default() -> Self {
        Self {
            feed_url: default_feed_url(),
            hours: default_hours(),
        }
    }
}

fn default_feed_url() -> String {
    DEFAULT_FEED_URL.to_string()
}

fn default_hours() -> u32 {
    24
}

#[derive(Debug, Clone, Deserialize)]
pub struct OpenSkyConfig {
    #[serde(default = "default_api_url")]
    pub api_url: String,
    pub username: Option<String>,
    pub password: Option<String>,
    #[serde(default = "default_threshold_km")]
    pub threshold_km: f64,
}

impl Default for OpenSkyConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            username: None,
            password: None,
            threshold_km: default_threshold_km(),
        }
    }
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_threshold_km() -> f64 {
    DEFAULT_THRESHOLD_KM
}

impl Config {
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}

impl OpenSkyConfig {
    /// Basic-auth pair, present only when both halves are configured.
    pub fn credentials(&self) -> Option<(String, String)> {
        match (&self.username, &self.password) {
            (Some(username), Some(password)) => Some((username.clone(), password.clone())),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config: Config = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config.web.bind, "0.0.0.0:8080");
        assert_eq!(config.balloons.hours, 24);
        assert_eq!(config.balloons.feed_url, DEFAULT_FEED_URL);
        assert_eq!(config.opensky.threshold_km, DEFAULT_THRESHOLD_KM);
        assert!(config.opensky.credentials().is_none());
    }

    #[test]
    fn explicit_values_override_defaults() {
        let yaml = r#"
web:
  bind: "127.0.0.1:3000"
balloons:
  feed_url: "https://feed.example.com/treasure"
  hours: 6
opensky:
  username: observer
  password: hunter2
  threshold_km: 50
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.web.bind, "127.0.0.1:3000");
        assert_eq!(config.balloons.hours, 6);
        assert_eq!(config.opensky.threshold_km, 50.0);
        assert_eq!(
            config.opensky.credentials(),
            Some(("observer".to_string(), "hunter2".to_string()))
        );
    }

    #[test]
    fn a_lone_username_is_not_a_credential() {
        let yaml = "opensky:\n  username: observer\n";
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert!(config.opensky.credentials().is_none());
    }
}
