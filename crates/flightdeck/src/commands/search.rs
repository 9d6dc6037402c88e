//! Search command handlers.

use flightdeck_core::FlightDeck;
use flightdeck_core::controller::messages::{
    NUMBER_SEARCH_FAILED, ROUTE_SEARCH_FAILED, SAVE_REQUIRES_SIGN_IN, SAVED,
};

use crate::cli::{GlobalOpts, SearchArgs, SearchCommand};
use crate::error::CliError;
use crate::output;

pub async fn handle(deck: &FlightDeck, args: SearchArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let search = deck.search();

    let (save, failure) = match args.command {
        SearchCommand::Number { flight, save } => {
            search.search_by_number(&flight).await;
            (save.save, NUMBER_SEARCH_FAILED)
        }
        SearchCommand::Route {
            departure,
            arrival,
            save,
        } => {
            search.search_by_route(&departure, &arrival).await;
            (save.save, ROUTE_SEARCH_FAILED)
        }
    };

    let state = search.state();
    if let Some(message) = state.error {
        // Backend failures publish a fixed message; anything else is "no flights".
        return Err(if message == failure {
            CliError::Operation { message }
        } else {
            CliError::NoFlights { message }
        });
    }

    let out = output::render_flights(&global.output, &state.results)?;
    output::print_output(&out, global.quiet);

    let Some(position) = save else {
        return Ok(());
    };
    let record = position
        .checked_sub(1)
        .and_then(|i| state.results.get(i))
        .ok_or_else(|| CliError::Validation {
            field: "save".into(),
            reason: format!(
                "expected a result number between 1 and {}, got {position}",
                state.results.len()
            ),
        })?;

    search.save_to_favourites(record).await;
    let message = search.state().save_message.unwrap_or_default();
    match message.as_str() {
        SAVED => {
            output::print_notice(&message, output::should_color(&global.color), global.quiet);
            Ok(())
        }
        SAVE_REQUIRES_SIGN_IN => Err(CliError::NotSignedIn { message }),
        _ => Err(CliError::Operation { message }),
    }
}
