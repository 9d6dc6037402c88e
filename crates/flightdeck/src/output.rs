//! Output formatting: table, JSON, plain.
//!
//! Renders data in the format selected by `--output`. Table uses `tabled`,
//! structured formats use serde, plain emits one line per item.

use std::io::{self, IsTerminal, Write};

use owo_colors::OwoColorize;
use tabled::{Table, Tabled, settings::Style};

use flightdeck_core::{FlightRecord, SavedFlight};

use crate::cli::{ColorMode, OutputFormat};
use crate::error::CliError;

// ── Color helpers ────────────────────────────────────────────────────

/// Determine whether color output should be enabled.
pub fn should_color(mode: &ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => io::stderr().is_terminal() && std::env::var("NO_COLOR").is_err(),
    }
}

/// Print a status line to stderr (success in green), respecting quiet mode.
pub fn print_notice(message: &str, color: bool, quiet: bool) {
    if quiet || message.is_empty() {
        return;
    }
    let mut stderr = io::stderr().lock();
    if color {
        let _ = writeln!(stderr, "{} {message}", "✓".green());
    } else {
        let _ = writeln!(stderr, "✓ {message}");
    }
}

// ── Render dispatchers ───────────────────────────────────────────────

/// Render a list of serde-serializable + tabled items in the chosen format.
///
/// - `table`: uses the `Tabled` derive to build a pretty table
/// - `json` / `json-compact`: serializes the data via serde
/// - `plain`: calls `line_fn` on each item to emit one line per item
pub fn render_list<T, R>(
    format: &OutputFormat,
    data: &[T],
    to_row: impl FnMut(&T) -> R,
    line_fn: impl Fn(&T) -> String,
) -> Result<String, CliError>
where
    T: serde::Serialize,
    R: Tabled,
{
    Ok(match format {
        OutputFormat::Table => {
            let rows: Vec<R> = data.iter().map(to_row).collect();
            render_table(&rows)
        }
        OutputFormat::Json => serde_json::to_string_pretty(data)?,
        OutputFormat::JsonCompact => serde_json::to_string(data)?,
        OutputFormat::Plain => data.iter().map(&line_fn).collect::<Vec<_>>().join("\n"),
    })
}

/// Render a single serde-serializable item in the chosen format.
///
/// Table rendering uses `detail_fn`, since single-item views don't use
/// the `Tabled` derive.
pub fn render_single<T>(
    format: &OutputFormat,
    data: &T,
    detail_fn: impl Fn(&T) -> String,
    line_fn: impl Fn(&T) -> String,
) -> Result<String, CliError>
where
    T: serde::Serialize,
{
    Ok(match format {
        OutputFormat::Table => detail_fn(data),
        OutputFormat::Json => serde_json::to_string_pretty(data)?,
        OutputFormat::JsonCompact => serde_json::to_string(data)?,
        OutputFormat::Plain => line_fn(data),
    })
}

/// Print the rendered output to stdout, respecting quiet mode.
pub fn print_output(output: &str, quiet: bool) {
    if quiet || output.is_empty() {
        return;
    }
    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{output}");
}

fn render_table<R: Tabled>(rows: &[R]) -> String {
    Table::new(rows).with(Style::rounded()).to_string()
}

// ── Row types ────────────────────────────────────────────────────────

#[derive(Tabled)]
pub struct FlightRow {
    #[tabled(rename = "#")]
    pub index: usize,
    #[tabled(rename = "Flight")]
    pub flight: String,
    #[tabled(rename = "Airline")]
    pub airline: String,
    #[tabled(rename = "From")]
    pub from: String,
    #[tabled(rename = "To")]
    pub to: String,
    #[tabled(rename = "Departs")]
    pub departs: String,
    #[tabled(rename = "Status")]
    pub status: String,
}

fn airport_cell(name: &str, iata: &str) -> String {
    if iata.is_empty() {
        name.to_owned()
    } else {
        format!("{name} ({iata})")
    }
}

/// Render flight records; table rows are numbered for `--save N`.
pub fn render_flights(format: &OutputFormat, flights: &[FlightRecord]) -> Result<String, CliError> {
    let mut next = 0;
    render_list(
        format,
        flights,
        |f| {
            next += 1;
            FlightRow {
                index: next,
                flight: f.flight_number_label().to_owned(),
                airline: f.airline_name().to_owned(),
                from: airport_cell(f.departure.airport_name(), f.departure.iata_code()),
                to: airport_cell(f.arrival.airport_name(), f.arrival.iata_code()),
                departs: f.departure.scheduled_time(),
                status: f.display_status().to_string(),
            }
        },
        |f| format!("{}\t{}", f.flight_number_label(), f.display_status()),
    )
}

#[derive(Tabled)]
pub struct FavouriteRow {
    #[tabled(rename = "ID")]
    pub id: String,
    #[tabled(rename = "Flight")]
    pub flight: String,
    #[tabled(rename = "Airline")]
    pub airline: String,
    #[tabled(rename = "Route")]
    pub route: String,
    #[tabled(rename = "Last Known Status")]
    pub status: String,
}

pub fn render_favourites(
    format: &OutputFormat,
    favourites: &[SavedFlight],
) -> Result<String, CliError> {
    render_list(
        format,
        favourites,
        |f| FavouriteRow {
            id: f.id.clone(),
            flight: f.flight_number.clone(),
            airline: f.airline_name.clone(),
            route: format!("{} → {}", f.departure_iata, f.arrival_iata),
            status: f.display_status().to_string(),
        },
        |f| format!("{}\t{}\t{}", f.id, f.flight_number, f.status),
    )
}

#[cfg(test)]
mod tests {
    use flightdeck_core::FlightLeg;

    use super::*;

    fn record() -> FlightRecord {
        FlightRecord {
            status: Some("active".into()),
            airline: Some("Air Canada".into()),
            flight_number: Some("AC430".into()),
            departure: FlightLeg {
                airport: Some("Winnipeg".into()),
                iata: Some("YWG".into()),
                scheduled: Some("2025-11-20T06:00:00+00:00".into()),
                delay_minutes: None,
            },
            arrival: FlightLeg::default(),
        }
    }

    #[test]
    fn table_numbers_rows_and_uses_placeholders() {
        let out = render_flights(&OutputFormat::Table, &[record(), FlightRecord::default()])
            .expect("renders");
        assert!(out.contains("AC430"));
        assert!(out.contains("Winnipeg (YWG)"));
        assert!(out.contains("6:00 AM"));
        assert!(out.contains("On time"));
        assert!(out.contains("Unknown number"));
        assert!(out.contains("Unknown Airport"));
    }

    #[test]
    fn plain_emits_one_line_per_flight() {
        let out = render_flights(&OutputFormat::Plain, &[record(), record()]).expect("renders");
        assert_eq!(out, "AC430\tOn time\nAC430\tOn time");
    }

    #[test]
    fn json_keeps_raw_fields() {
        let out = render_favourites(
            &OutputFormat::JsonCompact,
            &[SavedFlight {
                id: "a".into(),
                flight_number: "WS7105".into(),
                ..SavedFlight::default()
            }],
        )
        .expect("renders");
        assert!(out.contains(r#""flightNumber":"WS7105""#));
        assert!(out.contains(r#""id":"a""#));
    }
}
