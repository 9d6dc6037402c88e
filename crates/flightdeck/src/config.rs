//! CLI configuration: thin wrapper around `flightdeck_config` shared types.
//!
//! Re-exports the shared types and adds CLI-specific resolution that
//! respects `GlobalOpts` flag overrides (--provider-url, --access-key, etc.).

use secrecy::SecretString;

use flightdeck_core::ClientConfig;

use crate::cli::GlobalOpts;
use crate::error::CliError;

// ── Re-exports from shared crate ────────────────────────────────────

pub use flightdeck_config::{
    Config, Profile, config_path, load_config_or_default, parse_url, profile_to_client_config,
    save_config,
};

// ── CLI-specific helpers ────────────────────────────────────────────

/// Resolve the active profile name from CLI flags and config.
pub fn active_profile_name(global: &GlobalOpts, config: &Config) -> String {
    global
        .profile
        .clone()
        .or_else(|| config.default_profile.clone())
        .unwrap_or_else(|| "default".into())
}

/// Build a `ClientConfig` from the config file, profile, and CLI overrides.
///
/// Without a matching profile the flags and environment alone must supply
/// an access key and a store; naming a missing profile is an error.
pub fn build_client_config(global: &GlobalOpts) -> Result<ClientConfig, CliError> {
    let cfg = load_config_or_default();
    let profile_name = active_profile_name(global, &cfg);

    let profile = match cfg.profiles.get(&profile_name) {
        Some(profile) => profile.clone(),
        None if global.profile.is_some() => {
            let mut names: Vec<_> = cfg.profiles.keys().cloned().collect();
            names.sort();
            return Err(CliError::ProfileNotFound {
                name: profile_name,
                available: if names.is_empty() {
                    "(none)".into()
                } else {
                    names.join(", ")
                },
            });
        }
        None => Profile::default(),
    };

    resolve_profile(profile, &profile_name, cfg.defaults.timeout, global)
}

/// Layer global flags over `profile` and translate it.
///
/// Flag > profile > default for every overridable field.
pub fn resolve_profile(
    mut profile: Profile,
    profile_name: &str,
    default_timeout: u64,
    global: &GlobalOpts,
) -> Result<ClientConfig, CliError> {
    if let Some(ref url) = global.provider_url {
        profile.provider_url = Some(url.clone());
    }
    if let Some(ref url) = global.store_url {
        profile.store_url = Some(url.clone());
    }
    if let Some(ref user) = global.user {
        profile.user_id = Some(user.clone());
    }
    profile.timeout = global.timeout.or(profile.timeout).or(Some(default_timeout));

    // A flag-supplied key short-circuits env and keyring lookup.
    if let Some(ref key) = global.access_key {
        profile.access_key = Some(key.clone());
    }

    let mut config = profile_to_client_config(&profile, profile_name)?;
    if let Some(ref key) = global.access_key {
        config.access_key = SecretString::from(key.clone());
    }
    Ok(config)
}
