use super::content::{self, RouteTemplate};
use super::holdings::Holdings;
use super::{PlanBlock, TransferPath};
use crate::catalog::{
    cents, rounded_cents, PartnerGroup, RewardsCurrency, AIRLINE_FLOOR, HILTON, HILTON_TYPICAL,
    HYATT, HYATT_FLOOR, MARRIOTT,
};

/// Per-call view over the selections shared by every rule.
pub(crate) struct PlanContext<'a> {
    cards: Vec<&'a str>,
    alliances: Vec<&'a str>,
    hotels: Vec<&'a str>,
    home_airport: &'a str,
    holdings: Holdings,
}

impl<'a> PlanContext<'a> {
    pub(crate) fn new<S: AsRef<str>>(
        cards: &'a [S],
        alliances: &'a [S],
        hotels: &'a [S],
        home_airports: &'a [S],
    ) -> Self {
        Self {
            cards: cards.iter().map(AsRef::as_ref).collect(),
            alliances: alliances.iter().map(AsRef::as_ref).collect(),
            hotels: hotels.iter().map(AsRef::as_ref).collect(),
            home_airport: home_airports
                .first()
                .map(AsRef::as_ref)
                .unwrap_or(content::DEFAULT_HOME_AIRPORT),
            holdings: Holdings::from_cards(cards),
        }
    }

    fn has_card(&self, id: &str) -> bool {
        self.cards.contains(&id)
    }

    fn has_hotel(&self, id: &str) -> bool {
        self.hotels.contains(&id)
    }

    fn wants_network(&self, group: PartnerGroup) -> bool {
        self.alliances.iter().any(|id| group.covers(id))
    }
}

/// Trigger predicate paired with the builder for one block.
pub(crate) struct PlanRule {
    pub name: &'static str,
    pub applies: fn(&PlanContext<'_>) -> bool,
    pub build: fn(&PlanContext<'_>) -> PlanBlock,
}

/// Evaluation order is output order.
pub(crate) static PLAN_RULES: [PlanRule; 7] = [
    PlanRule {
        name: "avios_network",
        applies: |ctx| ctx.wants_network(PartnerGroup::Avios),
        build: avios_block,
    },
    PlanRule {
        name: "star_network",
        applies: |ctx| ctx.wants_network(PartnerGroup::Star),
        build: star_block,
    },
    PlanRule {
        name: "sky_network",
        applies: |ctx| ctx.wants_network(PartnerGroup::Sky),
        build: sky_block,
    },
    PlanRule {
        name: "marriott",
        applies: |ctx| {
            ctx.has_hotel(MARRIOTT)
                && (ctx.holdings.membership_rewards || ctx.holdings.ultimate_rewards)
        },
        build: marriott_block,
    },
    PlanRule {
        name: "hilton",
        applies: |ctx| ctx.has_hotel(HILTON),
        build: hilton_block,
    },
    PlanRule {
        name: "hyatt",
        applies: |ctx| ctx.has_hotel(HYATT) && ctx.holdings.ultimate_rewards,
        build: hyatt_block,
    },
    PlanRule {
        name: "merchant_hints",
        applies: |ctx| !merchant_hints(ctx).is_empty(),
        build: merchant_block,
    },
];

fn held_paths(ctx: &PlanContext<'_>, routes: &[RouteTemplate]) -> Vec<TransferPath> {
    routes
        .iter()
        .filter(|route| ctx.holdings.holds(route.currency))
        .map(|route| {
            let path = TransferPath::new(route.currency.label(), route.destination);
            if route.note.is_empty() {
                path
            } else {
                path.with_note(route.note)
            }
        })
        .collect()
}

fn block(title: &str, details: Vec<String>, paths: Option<Vec<TransferPath>>) -> PlanBlock {
    PlanBlock {
        title: title.to_string(),
        details,
        paths,
    }
}

fn static_details(details: &[&str]) -> Vec<String> {
    details.iter().map(|detail| detail.to_string()).collect()
}

fn avios_block(ctx: &PlanContext<'_>) -> PlanBlock {
    let mut paths = held_paths(ctx, &content::AVIOS_ROUTES);
    if let Some(path) = paths
        .iter_mut()
        .find(|path| path.source == RewardsCurrency::MembershipRewards.label())
    {
        path.note = Some(content::avios_membership_note(ctx.home_airport));
    }

    block(
        content::AVIOS_TITLE,
        static_details(&content::AVIOS_DETAILS),
        Some(paths),
    )
}

fn star_block(ctx: &PlanContext<'_>) -> PlanBlock {
    block(
        content::STAR_TITLE,
        static_details(&content::STAR_DETAILS),
        Some(held_paths(ctx, &content::STAR_ROUTES)),
    )
}

fn sky_block(ctx: &PlanContext<'_>) -> PlanBlock {
    block(
        content::SKY_TITLE,
        static_details(&content::SKY_DETAILS),
        Some(held_paths(ctx, &content::SKY_ROUTES)),
    )
}

fn marriott_block(ctx: &PlanContext<'_>) -> PlanBlock {
    let details = vec![
        format!(
            "Target ≥ {}¢/pt or wait for promos.",
            cents(AIRLINE_FLOOR, 1)
        ),
        content::MARRIOTT_CASH_DETAIL.to_string(),
    ];

    block(
        content::MARRIOTT_TITLE,
        details,
        Some(held_paths(ctx, &content::MARRIOTT_ROUTES)),
    )
}

fn hilton_block(ctx: &PlanContext<'_>) -> PlanBlock {
    let mut paths = Vec::new();
    if ctx.holdings.aspire {
        let (destination, note) = content::HILTON_ASPIRE_ROUTE;
        paths.push(
            TransferPath::new(RewardsCurrency::HiltonHonors.label(), destination).with_note(note),
        );
    }
    if ctx.holdings.membership_rewards {
        let (destination, note) = content::HILTON_MR_ROUTE;
        paths.push(
            TransferPath::new(RewardsCurrency::MembershipRewards.label(), destination)
                .with_note(note),
        );
    }

    let aspire_detail = if ctx.holdings.aspire {
        content::HILTON_WITH_ASPIRE
    } else {
        content::HILTON_WITHOUT_ASPIRE
    };
    let details = vec![
        format!(
            "Hilton typical ~{}¢/pt; aim higher with WA/Conrad + 5th night.",
            rounded_cents(HILTON_TYPICAL)
        ),
        aspire_detail.to_string(),
    ];

    block(content::HILTON_TITLE, details, Some(paths))
}

fn hyatt_block(_ctx: &PlanContext<'_>) -> PlanBlock {
    let route = &content::HYATT_ROUTE;
    let details = vec![
        format!(
            "Hyatt target ≥ {}¢/pt; Park Hyatt/Andaz/Alila often qualify.",
            cents(HYATT_FLOOR, 1)
        ),
        content::HYATT_FEED_DETAIL.to_string(),
    ];

    block(
        content::HYATT_TITLE,
        details,
        Some(vec![TransferPath::new(route.currency.label(), route.destination)
            .with_note(route.note)]),
    )
}

fn merchant_hints(ctx: &PlanContext<'_>) -> Vec<String> {
    content::MERCHANT_HINTS
        .iter()
        .filter(|(card_id, _)| ctx.has_card(card_id))
        .map(|(_, hint)| hint.to_string())
        .collect()
}

fn merchant_block(ctx: &PlanContext<'_>) -> PlanBlock {
    block(content::MERCHANT_TITLE, merchant_hints(ctx), None)
}
