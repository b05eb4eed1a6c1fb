use points_planner::catalog::{self, CatalogView};
use points_planner::plan::{PlanBlock, EMPTY_PLAN_PROMPT};
use points_planner::Selection;
use std::fmt::Write;

/// Plain-text rendering of a selection and its plan for terminal output.
pub(crate) fn render_plan(selection: &Selection, plan: &[PlanBlock]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Points Strategy Planner");

    let cards: Vec<String> = selection
        .cards()
        .iter()
        .map(|id| match catalog::card(id) {
            Some(card) => format!("{} ({})", card.name, card.currency_label),
            None => id.clone(),
        })
        .collect();
    let networks: Vec<&str> = selection
        .alliances()
        .iter()
        .map(|id| catalog::network_label(id).unwrap_or(id.as_str()))
        .collect();
    let hotels: Vec<&str> = selection
        .hotels()
        .iter()
        .map(|id| catalog::hotel_label(id).unwrap_or(id.as_str()))
        .collect();
    let airports: Vec<String> = selection
        .home_airports()
        .iter()
        .map(|code| match catalog::airport(code) {
            Some(airport) => format!("{} ({})", airport.code, airport.city),
            None => code.clone(),
        })
        .collect();

    let _ = writeln!(out, "Cards: {}", list_or_none(&cards));
    let _ = writeln!(out, "Airline networks: {}", list_or_none(&networks));
    let _ = writeln!(out, "Hotel programs: {}", list_or_none(&hotels));
    let _ = writeln!(out, "Home airports: {}", airports.join(", "));
    if let Some(hint) = selection.airport_hint() {
        let _ = writeln!(out, "  {hint}");
    }

    let _ = writeln!(out, "\nOptimized Strategy Plan");
    if plan.is_empty() {
        let _ = writeln!(out, "{EMPTY_PLAN_PROMPT}");
        return out;
    }

    for (index, block) in plan.iter().enumerate() {
        let _ = writeln!(out, "\n{}. {}", index + 1, block.title);
        if !block.paths().is_empty() {
            let _ = writeln!(out, "   Transfer paths:");
            for path in block.paths() {
                let mut line = format!("   - {} → {}", path.source, path.destination);
                if let Some(via) = &path.via {
                    let _ = write!(line, " via {via}");
                }
                if let Some(note) = path.note.as_deref().filter(|note| !note.is_empty()) {
                    let _ = write!(line, " ({note})");
                }
                let _ = writeln!(out, "{line}");
            }
        }
        if !block.details.is_empty() {
            let _ = writeln!(out, "   Notes:");
            for detail in &block.details {
                let _ = writeln!(out, "   - {detail}");
            }
        }
    }

    out
}

pub(crate) fn render_catalog(view: &CatalogView) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Cards");
    for card in view.cards {
        let _ = writeln!(
            out,
            "  {:<24} {} [{}] {}",
            card.id, card.name, card.issuer, card.currency_label
        );
    }

    let _ = writeln!(out, "\nAirline networks");
    for network in view.networks {
        let _ = writeln!(out, "  {:<24} {}", network.id, network.label);
    }

    let _ = writeln!(out, "\nHotel programs");
    for program in view.hotels {
        let _ = writeln!(out, "  {:<24} {}", program.id, program.label);
    }

    let _ = writeln!(out, "\nAirports");
    for airport in view.airports {
        let _ = writeln!(out, "  {:<24} {}, {}", airport.code, airport.city, airport.country);
    }

    let _ = writeln!(out, "\nValuations");
    for valuation in view.valuations {
        let _ = writeln!(out, "  {:<24} {}", valuation.label, valuation.cents_label());
    }

    out
}

fn list_or_none<S: AsRef<str>>(values: &[S]) -> String {
    if values.is_empty() {
        "none".to_string()
    } else {
        values
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<_>>()
            .join(", ")
    }
}
