//! Shared configuration for flightdeck.
//!
//! TOML profiles, credential resolution (env + keyring + plaintext), and
//! translation to `flightdeck_core::ClientConfig`. The CLI layers its
//! `GlobalOpts` overrides on top.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use flightdeck_api::aviation::DEFAULT_BASE_URL;
use flightdeck_api::document::firestore_base_url;
use flightdeck_core::controller::DEFAULT_REFRESH_CONCURRENCY;
use flightdeck_core::{ClientConfig, DEFAULT_BASE_AIRPORT, TlsMode};

const KEYRING_SERVICE: &str = "flightdeck";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("no access key configured for profile '{profile}'")]
    NoCredentials { profile: String },

    #[error("no favourites store configured for profile '{profile}'")]
    NoStore { profile: String },

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level TOML configuration.
#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    /// Default profile name.
    pub default_profile: Option<String>,

    /// Global defaults.
    #[serde(default)]
    pub defaults: Defaults,

    /// Named profiles.
    #[serde(default)]
    pub profiles: HashMap<String, Profile>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_profile: Some("default".into()),
            defaults: Defaults::default(),
            profiles: HashMap::new(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct Defaults {
    #[serde(default = "default_output")]
    pub output: String,

    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            output: default_output(),
            timeout: default_timeout(),
        }
    }
}

fn default_output() -> String {
    "table".into()
}
fn default_timeout() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

/// A named profile: one flight provider account plus one favourites store.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Profile {
    /// Flight data API base URL. Defaults to the public Aviationstack endpoint.
    pub provider_url: Option<String>,

    /// Access key (plaintext; prefer keyring or env var).
    pub access_key: Option<String>,

    /// Environment variable name containing the access key.
    pub access_key_env: Option<String>,

    /// Hosted Firestore project id; expands to its documents URL.
    pub store_project: Option<String>,

    /// Explicit documents base URL; wins over `store_project`.
    pub store_url: Option<String>,

    /// Store bearer token (plaintext; prefer keyring or env var).
    pub store_token: Option<String>,

    /// Environment variable name containing the store token.
    pub store_token_env: Option<String>,

    /// Signed-in user id.
    pub user_id: Option<String>,

    /// Airport for featured flights.
    pub base_airport: Option<String>,

    /// Path to a custom CA certificate.
    pub ca_cert: Option<PathBuf>,

    /// Override timeout (seconds).
    pub timeout: Option<u64>,

    /// Status lookups in flight at once during a favourites refresh.
    pub refresh_concurrency: Option<usize>,
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("com", "flightdeck", "flightdeck").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("flightdeck");
    p
}

// ── Config loading ──────────────────────────────────────────────────

/// Load the full Config from the canonical file + environment.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(&config_path())
}

/// Load from a specific file, merged over defaults and under
/// `FLIGHTDECK_`-prefixed environment variables (`__` separates keys).
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed("FLIGHTDECK_").split("__"));

    let config: Config = figment.extract()?;
    Ok(config)
}

/// Load config, returning a default if the file is missing or invalid.
pub fn load_config_or_default() -> Config {
    load_config().unwrap_or_default()
}

// ── Config saving ───────────────────────────────────────────────────

/// Serialize config to TOML and write to the canonical config path.
pub fn save_config(cfg: &Config) -> Result<(), ConfigError> {
    save_config_to(cfg, &config_path())
}

pub fn save_config_to(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(cfg)?;
    std::fs::write(path, toml_str)?;
    Ok(())
}

// ── Credential resolution (without CLI flags) ───────────────────────

/// Env var named by the profile, then the system keyring, then plaintext.
fn resolve_secret(
    env_name: Option<&str>,
    keyring_key: &str,
    plaintext: Option<&str>,
) -> Option<SecretString> {
    if let Some(val) = env_name.and_then(|name| std::env::var(name).ok()) {
        return Some(SecretString::from(val));
    }

    if let Ok(secret) =
        keyring::Entry::new(KEYRING_SERVICE, keyring_key).and_then(|entry| entry.get_password())
    {
        return Some(SecretString::from(secret));
    }

    plaintext.map(|s| SecretString::from(s.to_owned()))
}

/// Resolve the flight provider access key.
pub fn resolve_access_key(
    profile: &Profile,
    profile_name: &str,
) -> Result<SecretString, ConfigError> {
    resolve_secret(
        profile.access_key_env.as_deref(),
        &format!("{profile_name}/access-key"),
        profile.access_key.as_deref(),
    )
    .ok_or_else(|| ConfigError::NoCredentials {
        profile: profile_name.into(),
    })
}

/// Resolve the optional store bearer token.
pub fn resolve_store_token(profile: &Profile, profile_name: &str) -> Option<SecretString> {
    resolve_secret(
        profile.store_token_env.as_deref(),
        &format!("{profile_name}/store-token"),
        profile.store_token.as_deref(),
    )
}

/// Documents base URL: explicit `store_url`, else the hosted project URL.
pub fn resolve_store_url(profile: &Profile, profile_name: &str) -> Result<url::Url, ConfigError> {
    let raw = match (&profile.store_url, &profile.store_project) {
        (Some(url), _) => url.clone(),
        (None, Some(project)) => firestore_base_url(project),
        (None, None) => {
            return Err(ConfigError::NoStore {
                profile: profile_name.into(),
            });
        }
    };
    parse_url("store_url", &raw)
}

pub fn parse_url(field: &str, raw: &str) -> Result<url::Url, ConfigError> {
    raw.parse().map_err(|_| ConfigError::Validation {
        field: field.into(),
        reason: format!("invalid URL: {raw}"),
    })
}

/// Build a `ClientConfig` from a profile, without CLI flag overrides.
pub fn profile_to_client_config(
    profile: &Profile,
    profile_name: &str,
) -> Result<ClientConfig, ConfigError> {
    let provider_url = parse_url(
        "provider_url",
        profile.provider_url.as_deref().unwrap_or(DEFAULT_BASE_URL),
    )?;
    let access_key = resolve_access_key(profile, profile_name)?;
    let store_url = resolve_store_url(profile, profile_name)?;

    let mut config = ClientConfig::new(provider_url, access_key, store_url);
    config.store_token = resolve_store_token(profile, profile_name);
    config.user_id.clone_from(&profile.user_id);
    config.base_airport = profile
        .base_airport
        .clone()
        .unwrap_or_else(|| DEFAULT_BASE_AIRPORT.into());
    if let Some(ref ca_path) = profile.ca_cert {
        config.tls = TlsMode::CustomCa(ca_path.clone());
    }
    config.timeout = Duration::from_secs(profile.timeout.unwrap_or(DEFAULT_TIMEOUT_SECS));
    config.refresh_concurrency = profile
        .refresh_concurrency
        .unwrap_or(DEFAULT_REFRESH_CONCURRENCY);

    if config.refresh_concurrency == 0 {
        return Err(ConfigError::Validation {
            field: "refresh_concurrency".into(),
            reason: "must be at least 1".into(),
        });
    }

    Ok(config)
}
