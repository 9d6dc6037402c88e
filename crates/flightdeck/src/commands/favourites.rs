//! Favourites command handlers.

use flightdeck_core::controller::messages::{DELETE_REQUIRES_SIGN_IN, LOAD_REQUIRES_SIGN_IN};
use flightdeck_core::{FavouritesState, FlightDeck, SavedFlight};

use crate::cli::{FavouritesArgs, FavouritesCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

pub async fn handle(
    deck: &FlightDeck,
    args: FavouritesArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let favourites = deck.favourites();

    favourites.load().await;
    let state = checked(favourites.state())?;

    match args.command {
        FavouritesCommand::List => print_list(&state, global),

        FavouritesCommand::Refresh => {
            favourites.refresh_status().await;
            let state = checked(favourites.state())?;
            print_list(&state, global)
        }

        FavouritesCommand::Delete { id } => {
            let target = state
                .favourites
                .iter()
                .find(|f| f.id == id)
                .cloned()
                .unwrap_or_else(|| SavedFlight {
                    id: id.clone(),
                    ..SavedFlight::default()
                });

            favourites.delete(&target).await;
            checked(favourites.state())?;
            output::print_notice(
                &format!("Removed favourite '{id}'"),
                output::should_color(&global.color),
                global.quiet,
            );
            Ok(())
        }
    }
}

/// Surface a published error as a CLI failure.
fn checked(state: FavouritesState) -> Result<FavouritesState, CliError> {
    match state.error {
        Some(message) if message == LOAD_REQUIRES_SIGN_IN || message == DELETE_REQUIRES_SIGN_IN => {
            Err(CliError::NotSignedIn { message })
        }
        Some(message) => Err(CliError::Operation { message }),
        None => Ok(state),
    }
}

fn print_list(state: &FavouritesState, global: &GlobalOpts) -> Result<(), CliError> {
    let out = output::render_favourites(&global.output, &state.favourites)?;
    output::print_output(&out, global.quiet);
    Ok(())
}
