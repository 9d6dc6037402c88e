//! CLI error types with miette diagnostics.
//!
//! Maps config and core failures, plus controller outcomes, into
//! user-facing errors with actionable help text.

use miette::Diagnostic;
use thiserror::Error;

use flightdeck_config::ConfigError;
use flightdeck_core::CoreError;

/// Process exit codes.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const AUTH: i32 = 3;
    pub const NOT_FOUND: i32 = 4;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Identity / credentials ───────────────────────────────────────
    #[error("{message}")]
    #[diagnostic(
        code(flightdeck::not_signed_in),
        help(
            "Pass --user <ID>, set FLIGHTDECK_USER, or add user_id to your profile.\n\
             Run: flightdeck config init --user <ID>"
        )
    )]
    NotSignedIn { message: String },

    #[error("No access key configured for profile '{profile}'")]
    #[diagnostic(
        code(flightdeck::no_credentials),
        help(
            "Store one with: flightdeck config set-secret access-key <KEY>\n\
             Or set the FLIGHTDECK_ACCESS_KEY environment variable."
        )
    )]
    NoCredentials { profile: String },

    // ── Results ──────────────────────────────────────────────────────
    #[error("{message}")]
    #[diagnostic(
        code(flightdeck::no_flights),
        help("Check the flight number or airport codes and try again.")
    )]
    NoFlights { message: String },

    #[error("{message}")]
    #[diagnostic(code(flightdeck::operation_failed), help("Re-run with -vv for details."))]
    Operation { message: String },

    // ── Validation ───────────────────────────────────────────────────
    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(flightdeck::validation))]
    Validation { field: String, reason: String },

    // ── Configuration ────────────────────────────────────────────────
    #[error("Profile '{name}' not found in configuration")]
    #[diagnostic(
        code(flightdeck::profile_not_found),
        help(
            "Available profiles: {available}\n\
             Create one with: flightdeck config init --name {name}"
        )
    )]
    ProfileNotFound { name: String, available: String },

    #[error("No favourites store configured for profile '{profile}'")]
    #[diagnostic(
        code(flightdeck::no_store),
        help(
            "Pass --store-url, set FLIGHTDECK_STORE_URL, or run:\n\
             flightdeck config init --store-project <PROJECT>"
        )
    )]
    NoStore { profile: String },

    #[error("{0}")]
    #[diagnostic(code(flightdeck::config))]
    Config(ConfigError),

    #[error("{0}")]
    #[diagnostic(code(flightdeck::setup))]
    Core(#[from] CoreError),

    // ── IO / Serialization ────────────────────────────────────────────
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Failed to render JSON: {0}")]
    #[diagnostic(code(flightdeck::json))]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::NotSignedIn { .. } | Self::NoCredentials { .. } => exit_code::AUTH,
            Self::NoFlights { .. } => exit_code::NOT_FOUND,
            Self::Validation { .. } | Self::ProfileNotFound { .. } | Self::NoStore { .. } => {
                exit_code::USAGE
            }
            _ => exit_code::GENERAL,
        }
    }
}

// ── ConfigError → CliError mapping ───────────────────────────────────

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::NoCredentials { profile } => Self::NoCredentials { profile },
            ConfigError::NoStore { profile } => Self::NoStore { profile },
            ConfigError::Validation { field, reason } => Self::Validation { field, reason },
            other => Self::Config(other),
        }
    }
}
