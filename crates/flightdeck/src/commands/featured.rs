//! Featured flights handler.

use flightdeck_core::FlightDeck;

use crate::cli::{FeaturedArgs, GlobalOpts};
use crate::error::CliError;
use crate::output;

pub async fn handle(
    deck: &FlightDeck,
    args: FeaturedArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let featured = match args.airport {
        Some(ref airport) => deck.featured_at(airport),
        None => deck.featured(),
    };
    tracing::debug!(airport = %featured.base_airport(), "featured flights");

    featured.load_featured().await;
    let state = featured.state();
    if let Some(message) = state.error {
        return Err(CliError::Operation { message });
    }

    let out = output::render_flights(&global.output, &state.featured)?;
    output::print_output(&out, global.quiet);
    Ok(())
}
