//! Static reference data: cards, airline networks, hotel programs, airports, and valuations.
//!
//! Everything here is immutable and shared by the rules engine and the presentation layer.

mod airports;
mod cards;
mod hotels;
mod networks;
mod valuations;

pub use airports::{is_iata_code, Airport};
pub use cards::{Card, RewardsCurrency, ASPIRE_CARD_ID};
pub use hotels::{HotelProgram, HILTON, HYATT, MARRIOTT};
pub use networks::{AlliancePartner, PartnerGroup};
pub use valuations::{
    cents, rounded_cents, Valuation, AIRLINE_FLOOR, HILTON_TYPICAL, HYATT_FLOOR, MARRIOTT_TYPICAL,
};

use serde::Serialize;

pub fn cards() -> &'static [Card] {
    &cards::CARDS
}

pub fn card(id: &str) -> Option<&'static Card> {
    cards::CARDS.iter().find(|card| card.id == id)
}

pub fn networks() -> &'static [AlliancePartner] {
    &networks::NETWORKS
}

pub fn network_label(id: &str) -> Option<&'static str> {
    networks::NETWORKS
        .iter()
        .find(|network| network.id == id)
        .map(|network| network.label)
}

pub fn hotel_programs() -> &'static [HotelProgram] {
    &hotels::HOTEL_PROGRAMS
}

pub fn hotel_label(id: &str) -> Option<&'static str> {
    hotels::HOTEL_PROGRAMS
        .iter()
        .find(|program| program.id == id)
        .map(|program| program.label)
}

pub fn airports() -> &'static [Airport] {
    &airports::AIRPORTS
}

pub fn airport(code: &str) -> Option<&'static Airport> {
    airports::AIRPORTS
        .iter()
        .find(|airport| airport.code.eq_ignore_ascii_case(code))
}

pub fn valuations() -> &'static [Valuation] {
    &valuations::VALUATIONS
}

/// Serializable snapshot of the whole catalog for selection widgets.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogView {
    pub cards: &'static [Card],
    pub networks: &'static [AlliancePartner],
    pub hotels: &'static [HotelProgram],
    pub airports: &'static [Airport],
    pub valuations: &'static [Valuation],
}

impl CatalogView {
    pub fn snapshot() -> Self {
        Self {
            cards: cards(),
            networks: networks(),
            hotels: hotel_programs(),
            airports: airports(),
            valuations: valuations(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn card_ids_are_unique() {
        let ids: HashSet<_> = cards().iter().map(|card| card.id).collect();
        assert_eq!(ids.len(), cards().len());
    }

    #[test]
    fn every_group_member_has_a_label() {
        for group in PartnerGroup::ALL {
            assert!(network_label(group.umbrella()).is_some());
            for id in group.members() {
                assert!(network_label(id).is_some(), "missing label for {id}");
            }
        }
    }

    #[test]
    fn partner_groups_are_disjoint() {
        let mut seen = HashSet::new();
        for group in PartnerGroup::ALL {
            for id in group.members() {
                assert!(seen.insert(*id), "{id} appears in more than one group");
            }
        }
    }

    #[test]
    fn every_network_entry_belongs_to_its_group() {
        for network in networks() {
            assert_eq!(PartnerGroup::for_id(network.id), Some(network.group));
        }
        assert_eq!(PartnerGroup::for_id("aa"), None);
    }

    #[test]
    fn lookups_resolve_known_ids() {
        assert_eq!(
            card("chase-ink-cash").map(|card| card.currency),
            Some(RewardsCurrency::UltimateRewards)
        );
        assert_eq!(card("unknown"), None);
        assert_eq!(hotel_label(HYATT), Some("World of Hyatt"));
        assert_eq!(network_label("afkl"), Some("Air France / KLM (Flying Blue)"));
        assert_eq!(airport("doh").map(|airport| airport.city), Some("Doha"));
    }
}
