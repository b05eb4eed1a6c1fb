use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Airport {
    pub code: &'static str,
    pub city: &'static str,
    pub country: &'static str,
}

const fn airport(code: &'static str, city: &'static str, country: &'static str) -> Airport {
    Airport {
        code,
        city,
        country,
    }
}

pub(crate) static AIRPORTS: [Airport; 11] = [
    airport("DFW", "Dallas/Fort Worth", "USA"),
    airport("DAL", "Dallas (Love Field)", "USA"),
    airport("IAH", "Houston", "USA"),
    airport("LAX", "Los Angeles", "USA"),
    airport("JFK", "New York (JFK)", "USA"),
    airport("ORD", "Chicago (O'Hare)", "USA"),
    airport("MIA", "Miami", "USA"),
    airport("MAD", "Madrid", "Spain"),
    airport("DOH", "Doha", "Qatar"),
    airport("LHR", "London (Heathrow)", "UK"),
    airport("CDG", "Paris (CDG)", "France"),
];

fn iata_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[A-Z]{3}$").expect("IATA pattern compiles"))
}

/// Advisory format check for a home airport code; codes outside the curated list are allowed.
pub fn is_iata_code(code: &str) -> bool {
    iata_pattern().is_match(code)
}
