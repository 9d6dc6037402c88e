//! Config subcommand handlers.

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts, InitArgs, SecretKind};
use crate::config::{self, Config, Profile};
use crate::error::CliError;
use crate::output;

const KEYRING_SERVICE: &str = "flightdeck";
const MASK: &str = "****";

// ── Helpers ─────────────────────────────────────────────────────────

/// Replace stored secrets with a mask.
fn redact(mut cfg: Config) -> Config {
    for profile in cfg.profiles.values_mut() {
        if profile.access_key.is_some() {
            profile.access_key = Some(MASK.into());
        }
        if profile.store_token.is_some() {
            profile.store_token = Some(MASK.into());
        }
    }
    cfg
}

/// Format an already-redacted config for display.
fn format_config(cfg: &Config) -> String {
    use std::fmt::Write;
    let mut out = String::new();

    if let Some(ref default) = cfg.default_profile {
        let _ = writeln!(out, "default_profile = \"{default}\"");
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "[defaults]");
    let _ = writeln!(out, "output = \"{}\"", cfg.defaults.output);
    let _ = writeln!(out, "timeout = {}", cfg.defaults.timeout);

    let mut names: Vec<_> = cfg.profiles.keys().collect();
    names.sort();
    for name in names {
        let p = &cfg.profiles[name];
        let _ = writeln!(out);
        let _ = writeln!(out, "[profiles.{name}]");
        let strings = [
            ("provider_url", &p.provider_url),
            ("access_key", &p.access_key),
            ("access_key_env", &p.access_key_env),
            ("store_project", &p.store_project),
            ("store_url", &p.store_url),
            ("store_token", &p.store_token),
            ("store_token_env", &p.store_token_env),
            ("user_id", &p.user_id),
            ("base_airport", &p.base_airport),
        ];
        for (key, value) in strings {
            if let Some(value) = value {
                let _ = writeln!(out, "{key} = \"{value}\"");
            }
        }
        if let Some(ref ca) = p.ca_cert {
            let _ = writeln!(out, "ca_cert = \"{}\"", ca.display());
        }
        if let Some(timeout) = p.timeout {
            let _ = writeln!(out, "timeout = {timeout}");
        }
        if let Some(n) = p.refresh_concurrency {
            let _ = writeln!(out, "refresh_concurrency = {n}");
        }
    }

    out
}

fn available_profiles(cfg: &Config) -> String {
    let mut names: Vec<_> = cfg.profiles.keys().cloned().collect();
    names.sort();
    if names.is_empty() {
        "(none)".into()
    } else {
        names.join(", ")
    }
}

/// Merge flags into a (possibly new) profile.
fn apply_init(profile: &mut Profile, args: &InitArgs, global: &GlobalOpts) -> Result<(), CliError> {
    if let Some(ref url) = global.provider_url {
        config::parse_url("provider_url", url)?;
        profile.provider_url = Some(url.clone());
    }
    if let Some(ref url) = global.store_url {
        config::parse_url("store_url", url)?;
        profile.store_url = Some(url.clone());
    }
    if let Some(ref project) = args.store_project {
        profile.store_project = Some(project.clone());
    }
    if let Some(ref user) = global.user {
        profile.user_id = Some(user.clone());
    }
    if let Some(ref env) = args.access_key_env {
        profile.access_key_env = Some(env.clone());
    }
    if let Some(ref airport) = args.base_airport {
        let code = flightdeck_core::normalize_iata(airport);
        if code.is_empty() {
            return Err(CliError::Validation {
                field: "base_airport".into(),
                reason: "airport code cannot be empty".into(),
            });
        }
        profile.base_airport = Some(code);
    }
    if let Some(timeout) = global.timeout {
        profile.timeout = Some(timeout);
    }
    Ok(())
}

// ── Handler ─────────────────────────────────────────────────────────

pub fn handle(args: ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let color = output::should_color(&global.color);

    match args.command {
        ConfigCommand::Path => {
            output::print_output(&config::config_path().display().to_string(), global.quiet);
            Ok(())
        }

        ConfigCommand::Show => {
            let cfg = redact(config::load_config_or_default());
            let out = output::render_single(&global.output, &cfg, format_config, |_| {
                config::config_path().display().to_string()
            })?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        ConfigCommand::Init(init) => {
            let mut cfg = config::load_config_or_default();
            let profile = cfg.profiles.entry(init.name.clone()).or_default();
            apply_init(profile, &init, global)?;

            if init.default || cfg.profiles.len() == 1 {
                cfg.default_profile = Some(init.name.clone());
            }
            config::save_config(&cfg)?;

            output::print_notice(
                &format!(
                    "Profile '{}' written to {}",
                    init.name,
                    config::config_path().display()
                ),
                color,
                global.quiet,
            );
            Ok(())
        }

        ConfigCommand::Profiles => {
            let cfg = config::load_config_or_default();
            let default = cfg.default_profile.as_deref().unwrap_or("default");
            if cfg.profiles.is_empty() {
                eprintln!("No profiles configured. Run: flightdeck config init");
                return Ok(());
            }
            let mut names: Vec<_> = cfg.profiles.keys().collect();
            names.sort();
            let lines: Vec<String> = names
                .into_iter()
                .map(|name| {
                    let marker = if name == default { " *" } else { "" };
                    format!("{name}{marker}")
                })
                .collect();
            output::print_output(&lines.join("\n"), global.quiet);
            Ok(())
        }

        ConfigCommand::Use { name } => {
            let mut cfg = config::load_config_or_default();
            if !cfg.profiles.contains_key(&name) {
                return Err(CliError::ProfileNotFound {
                    available: available_profiles(&cfg),
                    name,
                });
            }

            cfg.default_profile = Some(name.clone());
            config::save_config(&cfg)?;
            output::print_notice(&format!("Default profile set to '{name}'"), color, global.quiet);
            Ok(())
        }

        ConfigCommand::SetSecret { kind, value } => {
            let cfg = config::load_config_or_default();
            let profile_name = config::active_profile_name(global, &cfg);
            store_secret(&profile_name, kind, &value)?;
            output::print_notice(
                &format!(
                    "Stored {} for profile '{profile_name}' in the system keyring",
                    kind.keyring_suffix()
                ),
                color,
                global.quiet,
            );
            Ok(())
        }
    }
}

fn store_secret(profile_name: &str, kind: SecretKind, value: &str) -> Result<(), CliError> {
    if value.trim().is_empty() {
        return Err(CliError::Validation {
            field: kind.keyring_suffix().into(),
            reason: "secret cannot be empty".into(),
        });
    }
    let key = format!("{profile_name}/{}", kind.keyring_suffix());
    keyring::Entry::new(KEYRING_SERVICE, &key)
        .and_then(|entry| entry.set_password(value))
        .map_err(|e| CliError::Validation {
            field: "keyring".into(),
            reason: format!("failed to store {}: {e}", kind.keyring_suffix()),
        })
}
