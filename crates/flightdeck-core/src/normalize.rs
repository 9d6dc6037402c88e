// User input normalization for provider queries.

/// Remove all whitespace and upper-case: `"ac 123"` becomes `"AC123"`.
pub fn normalize_flight_number(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_uppercase)
        .collect()
}

/// Trim and upper-case an airport code: `" ywg "` becomes `"YWG"`.
pub fn normalize_iata(raw: &str) -> String {
    raw.trim().to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flight_numbers_lose_whitespace() {
        assert_eq!(normalize_flight_number("ac 123"), "AC123");
        assert_eq!(normalize_flight_number(" ws\t7105\n"), "WS7105");
        assert_eq!(normalize_flight_number(""), "");
    }

    #[test]
    fn iata_codes_are_trimmed_only() {
        assert_eq!(normalize_iata(" ywg "), "YWG");
        assert_eq!(normalize_iata("y ul"), "Y UL");
    }

    #[test]
    fn normalization_is_idempotent() {
        for raw in ["ac 123", "  Ws7105 ", "", "already"] {
            let once = normalize_flight_number(raw);
            assert_eq!(normalize_flight_number(&once), once);
        }
        for raw in [" ywg", "Yul ", "", "y ul"] {
            let once = normalize_iata(raw);
            assert_eq!(normalize_iata(&once), once);
        }
    }
}
