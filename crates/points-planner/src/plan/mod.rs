//! Rules engine turning a selection into an ordered list of strategy blocks.

mod content;
mod holdings;
mod rules;

pub use content::{DEFAULT_HOME_AIRPORT, EMPTY_PLAN_PROMPT};
pub use holdings::Holdings;

use rules::{PlanContext, PLAN_RULES};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// One recommended point movement from a held currency to a loyalty program.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferPath {
    pub source: String,
    #[serde(rename = "to")]
    pub destination: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub via: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl TransferPath {
    pub fn new(source: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
            via: None,
            note: None,
        }
    }

    pub fn with_via(mut self, via: impl Into<String>) -> Self {
        self.via = Some(via.into());
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }
}

/// Titled section of a plan: guidance notes plus optional transfer paths.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanBlock {
    pub title: String,
    pub details: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paths: Option<Vec<TransferPath>>,
}

impl PlanBlock {
    pub fn paths(&self) -> &[TransferPath] {
        self.paths.as_deref().unwrap_or(&[])
    }
}

/// Builds the prioritized plan for the given selections.
///
/// Unknown identifiers are ignored and airport codes are taken as-is; the first
/// code seeds the example routes in the Avios block. An empty result means
/// nothing in the selection triggered a rule.
pub fn generate_plan<S: AsRef<str>>(
    cards: &[S],
    alliances: &[S],
    hotels: &[S],
    home_airports: &[S],
) -> Vec<PlanBlock> {
    let context = PlanContext::new(cards, alliances, hotels, home_airports);

    let blocks: Vec<PlanBlock> = PLAN_RULES
        .iter()
        .filter(|rule| (rule.applies)(&context))
        .map(|rule| {
            trace!(rule = rule.name, "plan rule matched");
            (rule.build)(&context)
        })
        .collect();

    debug!(
        blocks = blocks.len(),
        cards = cards.len(),
        alliances = alliances.len(),
        hotels = hotels.len(),
        "generated points plan"
    );

    blocks
}
