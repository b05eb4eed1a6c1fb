//! User selections that feed the rules engine, plus their persistence.

mod store;

pub use store::{
    load_or_default, save_best_effort, JsonFileStore, MemorySelectionStore, SelectionStore,
    StoreError,
};

use crate::catalog::is_iata_code;
use crate::plan::{generate_plan, PlanBlock, DEFAULT_HOME_AIRPORT};
use serde::{Deserialize, Deserializer, Serialize};

/// Advisory hint shown next to the airport input when a code is malformed.
pub const IATA_HINT: &str = "IATA codes are 3 letters (A–Z).";

const DEFAULT_CARDS: [&str; 4] = [
    "capone-venture",
    "amex-platinum",
    "hilton-aspire",
    "chase-ink-preferred",
];
const DEFAULT_ALLIANCES: [&str; 4] = ["oneworld", "ba", "ib", "qr"];
const DEFAULT_HOTELS: [&str; 3] = ["marriott", "hilton", "hyatt"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionField {
    Cards,
    Alliances,
    Hotels,
    Airports,
}

impl SelectionField {
    pub const ALL: [SelectionField; 4] = [
        SelectionField::Cards,
        SelectionField::Alliances,
        SelectionField::Hotels,
        SelectionField::Airports,
    ];

    /// Key the field is persisted under.
    pub const fn storage_key(self) -> &'static str {
        match self {
            Self::Cards => "ps.cards",
            Self::Alliances => "ps.air",
            Self::Hotels => "ps.hotels",
            Self::Airports => "ps.airport",
        }
    }
}

/// Ordered, de-duplicated selections with at least one home airport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "SelectionInput")]
pub struct Selection {
    cards: Vec<String>,
    alliances: Vec<String>,
    hotels: Vec<String>,
    home_airports: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SelectionInput {
    #[serde(default)]
    cards: Vec<String>,
    #[serde(default)]
    alliances: Vec<String>,
    #[serde(default)]
    hotels: Vec<String>,
    #[serde(default, alias = "homeAirport", deserialize_with = "deserialize_airports")]
    home_airports: Vec<String>,
}

impl From<SelectionInput> for Selection {
    fn from(input: SelectionInput) -> Self {
        Selection::new(input.cards, input.alliances, input.hotels, input.home_airports)
    }
}

impl Default for Selection {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Selection {
    pub fn new<I, S>(cards: I, alliances: I, hotels: I, home_airports: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut airports = Vec::new();
        for code in home_airports {
            push_unique(&mut airports, normalize_airport(code.into()));
        }
        if airports.is_empty() {
            airports.push(DEFAULT_HOME_AIRPORT.to_string());
        }

        Self {
            cards: collect_ids(cards),
            alliances: collect_ids(alliances),
            hotels: collect_ids(hotels),
            home_airports: airports,
        }
    }

    /// Starting point on first load and after a reset.
    pub fn defaults() -> Self {
        Self::new(
            DEFAULT_CARDS.to_vec(),
            DEFAULT_ALLIANCES.to_vec(),
            DEFAULT_HOTELS.to_vec(),
            vec![DEFAULT_HOME_AIRPORT],
        )
    }

    pub fn cards(&self) -> &[String] {
        &self.cards
    }

    pub fn alliances(&self) -> &[String] {
        &self.alliances
    }

    pub fn hotels(&self) -> &[String] {
        &self.hotels
    }

    pub fn home_airports(&self) -> &[String] {
        &self.home_airports
    }

    pub fn values(&self, field: SelectionField) -> &[String] {
        match field {
            SelectionField::Cards => &self.cards,
            SelectionField::Alliances => &self.alliances,
            SelectionField::Hotels => &self.hotels,
            SelectionField::Airports => &self.home_airports,
        }
    }

    fn values_mut(&mut self, field: SelectionField) -> &mut Vec<String> {
        match field {
            SelectionField::Cards => &mut self.cards,
            SelectionField::Alliances => &mut self.alliances,
            SelectionField::Hotels => &mut self.hotels,
            SelectionField::Airports => &mut self.home_airports,
        }
    }

    fn normalize(field: SelectionField, value: &str) -> String {
        match field {
            SelectionField::Airports => normalize_airport(value.to_string()),
            _ => value.trim().to_string(),
        }
    }

    pub fn contains(&self, field: SelectionField, value: &str) -> bool {
        let value = Self::normalize(field, value);
        self.values(field).contains(&value)
    }

    /// Appends the value; returns false when it was already selected or blank.
    pub fn add(&mut self, field: SelectionField, value: &str) -> bool {
        let value = Self::normalize(field, value);
        if value.is_empty() {
            return false;
        }
        push_unique(self.values_mut(field), value)
    }

    /// Removes the value; the last home airport is never removed.
    pub fn remove(&mut self, field: SelectionField, value: &str) -> bool {
        let value = Self::normalize(field, value);
        let values = self.values_mut(field);
        if field == SelectionField::Airports && values.len() == 1 {
            return false;
        }
        let before = values.len();
        values.retain(|existing| existing != &value);
        values.len() != before
    }

    /// Flips membership and reports whether the value is selected afterwards.
    pub fn toggle(&mut self, field: SelectionField, value: &str) -> bool {
        if self.contains(field, value) {
            !self.remove(field, value)
        } else {
            self.add(field, value)
        }
    }

    pub fn reset(&mut self) {
        *self = Self::defaults();
    }

    /// Advisory message when any home airport is not a 3-letter code.
    pub fn airport_hint(&self) -> Option<&'static str> {
        if self.home_airports.iter().all(|code| is_iata_code(code)) {
            None
        } else {
            Some(IATA_HINT)
        }
    }

    pub fn plan(&self) -> Vec<PlanBlock> {
        generate_plan(
            self.cards.as_slice(),
            self.alliances.as_slice(),
            self.hotels.as_slice(),
            self.home_airports.as_slice(),
        )
    }
}

fn collect_ids<I, S>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut ids = Vec::new();
    for value in values {
        let value: String = value.into();
        let trimmed = value.trim();
        if !trimmed.is_empty() {
            push_unique(&mut ids, trimmed.to_string());
        }
    }
    ids
}

fn normalize_airport(code: String) -> String {
    code.trim().to_uppercase()
}

fn push_unique(values: &mut Vec<String>, value: String) -> bool {
    if value.is_empty() || values.contains(&value) {
        return false;
    }
    values.push(value);
    true
}

/// Either a single code (older saves) or a list of codes.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(crate) enum AirportCodes {
    One(String),
    Many(Vec<String>),
}

impl AirportCodes {
    pub(crate) fn into_vec(self) -> Vec<String> {
        match self {
            Self::One(code) => vec![code],
            Self::Many(codes) => codes,
        }
    }
}

pub(crate) fn deserialize_airports<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    AirportCodes::deserialize(deserializer).map(AirportCodes::into_vec)
}
