//! Clap derive structures for the `flightdeck` CLI.
//!
//! Defines the complete command tree, global flags, and shared types.

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// flightdeck -- flight search and saved favourites from the terminal
#[derive(Debug, Parser)]
#[command(
    name = "flightdeck",
    version,
    about = "Search flights and track saved favourites from the command line",
    long_about = "Look up flights by number or route, browse featured flights for a\n\
        base airport, and keep a list of favourite flights whose status can be\n\
        refreshed on demand.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Configuration profile to use
    #[arg(long, short = 'p', env = "FLIGHTDECK_PROFILE", global = true)]
    pub profile: Option<String>,

    /// Flight data API base URL (overrides profile)
    #[arg(long, env = "FLIGHTDECK_PROVIDER_URL", global = true)]
    pub provider_url: Option<String>,

    /// Flight data API access key
    #[arg(long, env = "FLIGHTDECK_ACCESS_KEY", global = true, hide_env = true)]
    pub access_key: Option<String>,

    /// Favourites store base URL (overrides profile)
    #[arg(long, env = "FLIGHTDECK_STORE_URL", global = true)]
    pub store_url: Option<String>,

    /// Signed-in user id (overrides profile)
    #[arg(long, short = 'u', env = "FLIGHTDECK_USER", global = true)]
    pub user: Option<String>,

    /// Output format
    #[arg(
        long,
        short = 'o',
        env = "FLIGHTDECK_OUTPUT",
        default_value = "table",
        global = true
    )]
    pub output: OutputFormat,

    /// When to use color output
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorMode,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Request timeout in seconds (overrides profile)
    #[arg(long, env = "FLIGHTDECK_TIMEOUT", global = true)]
    pub timeout: Option<u64>,
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// Plain text, one value per line (scripting)
    Plain,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Look up flights by number or route
    #[command(alias = "s")]
    Search(SearchArgs),

    /// Show featured flights for the base airport
    Featured(FeaturedArgs),

    /// Manage saved favourite flights
    #[command(alias = "fav")]
    Favourites(FavouritesArgs),

    /// Manage CLI configuration and profiles
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ── Search ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct SearchArgs {
    #[command(subcommand)]
    pub command: SearchCommand,
}

#[derive(Debug, Subcommand)]
pub enum SearchCommand {
    /// Search by flight number (e.g. "AC 430")
    #[command(alias = "n")]
    Number {
        /// Flight number; whitespace is ignored
        flight: String,

        #[command(flatten)]
        save: SaveArgs,
    },

    /// Search by departure and arrival airport codes
    #[command(alias = "r")]
    Route {
        /// Departure IATA code (e.g. YWG)
        departure: String,

        /// Arrival IATA code (e.g. YYZ)
        arrival: String,

        #[command(flatten)]
        save: SaveArgs,
    },
}

#[derive(Debug, Args)]
pub struct SaveArgs {
    /// Save the Nth result (1-based) to favourites
    #[arg(long, value_name = "N")]
    pub save: Option<usize>,
}

// ── Featured ─────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct FeaturedArgs {
    /// Base airport IATA code (overrides profile)
    #[arg(long, short = 'a')]
    pub airport: Option<String>,
}

// ── Favourites ───────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct FavouritesArgs {
    #[command(subcommand)]
    pub command: FavouritesCommand,
}

#[derive(Debug, Subcommand)]
pub enum FavouritesCommand {
    /// List saved favourites
    #[command(alias = "ls")]
    List,

    /// Fetch the latest status of every favourite
    Refresh,

    /// Remove a favourite by id
    #[command(alias = "rm")]
    Delete {
        /// Favourite id (see `favourites list`)
        id: String,
    },
}

// ── Config ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Print the config file path
    Path,

    /// Display current configuration (secrets masked)
    Show,

    /// Create or update a profile (uses --provider-url, --store-url, and
    /// --user when given)
    Init(InitArgs),

    /// List configured profiles
    Profiles,

    /// Set the default profile
    Use {
        /// Profile name to set as default
        name: String,
    },

    /// Store a secret in the system keyring for the active profile
    SetSecret {
        /// Which secret to store
        #[arg(value_enum)]
        kind: SecretKind,

        /// Secret value
        value: String,
    },
}

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Profile name
    #[arg(long, default_value = "default")]
    pub name: String,

    /// Hosted Firestore project id for favourites (or pass --store-url)
    #[arg(long)]
    pub store_project: Option<String>,

    /// Environment variable holding the access key
    #[arg(long)]
    pub access_key_env: Option<String>,

    /// Base airport for featured flights
    #[arg(long)]
    pub base_airport: Option<String>,

    /// Make this the default profile
    #[arg(long)]
    pub default: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SecretKind {
    /// Flight data API access key
    AccessKey,
    /// Favourites store bearer token
    StoreToken,
}

impl SecretKind {
    /// Keyring entry name under a profile.
    pub fn keyring_suffix(self) -> &'static str {
        match self {
            Self::AccessKey => "access-key",
            Self::StoreToken => "store-token",
        }
    }
}

// ── Completions ──────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
