use super::ExportError;
use crate::plan::PlanBlock;
use crate::selection::{deserialize_airports, Selection};
use serde::{Deserialize, Serialize};

/// Structured export: the selections that produced a plan, followed by the plan itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanDocument {
    pub selected_cards: Vec<String>,
    pub preferred_air: Vec<String>,
    pub preferred_hotels: Vec<String>,
    #[serde(alias = "homeAirport", deserialize_with = "deserialize_airports")]
    pub home_airports: Vec<String>,
    pub plan: Vec<PlanBlock>,
}

impl PlanDocument {
    pub fn new(selection: &Selection, plan: &[PlanBlock]) -> Self {
        Self {
            selected_cards: selection.cards().to_vec(),
            preferred_air: selection.alliances().to_vec(),
            preferred_hotels: selection.hotels().to_vec(),
            home_airports: selection.home_airports().to_vec(),
            plan: plan.to_vec(),
        }
    }

    pub fn to_json(&self) -> Result<String, ExportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

pub fn parse_document(raw: &str) -> Result<PlanDocument, ExportError> {
    Ok(serde_json::from_str(raw)?)
}
