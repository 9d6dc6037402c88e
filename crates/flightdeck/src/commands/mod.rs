//! Command dispatch: bridges CLI args -> controllers -> output formatting.

pub mod config_cmd;
pub mod favourites;
pub mod featured;
pub mod search;

use flightdeck_core::FlightDeck;

use crate::cli::{Command, GlobalOpts};
use crate::error::CliError;

/// Dispatch a backend-bound command to the appropriate handler.
pub async fn dispatch(cmd: Command, deck: &FlightDeck, global: &GlobalOpts) -> Result<(), CliError> {
    match cmd {
        Command::Search(args) => search::handle(deck, args, global).await,
        Command::Featured(args) => featured::handle(deck, args, global).await,
        Command::Favourites(args) => favourites::handle(deck, args, global).await,
        // Config and Completions are handled before dispatch
        Command::Config(_) | Command::Completions(_) => unreachable!(),
    }
}
