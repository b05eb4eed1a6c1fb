use crate::catalog::RewardsCurrency::{self, CapitalOneMiles, MembershipRewards, UltimateRewards};

/// Airport used for the Avios example routes when no home airport is given.
pub const DEFAULT_HOME_AIRPORT: &str = "DFW";

/// Shown by the presentation layer when no rule fires.
pub const EMPTY_PLAN_PROMPT: &str =
    "Add at least one card, an airline network, and a hotel program.";

/// Static destination and note for one currency inside a block.
pub(crate) struct RouteTemplate {
    pub currency: RewardsCurrency,
    pub destination: &'static str,
    pub note: &'static str,
}

const fn route(
    currency: RewardsCurrency,
    destination: &'static str,
    note: &'static str,
) -> RouteTemplate {
    RouteTemplate {
        currency,
        destination,
        note,
    }
}

pub(crate) const AVIOS_TITLE: &str = "Priority 1 — AA/oneworld via Avios Triangle";
pub(crate) const AVIOS_DESTINATION: &str = "BA/Iberia/Qatar Avios";
// Membership Rewards note is rendered per plan, see `avios_membership_note`.
pub(crate) const AVIOS_ROUTES: [RouteTemplate; 3] = [
    route(MembershipRewards, AVIOS_DESTINATION, ""),
    route(
        UltimateRewards,
        AVIOS_DESTINATION,
        "UR→BA then move to Iberia/Qatar as needed",
    ),
    route(
        CapitalOneMiles,
        AVIOS_DESTINATION,
        "1:1; pick program with best space/price",
    ),
];
pub(crate) const AVIOS_DETAILS: [&str; 2] = [
    "Search BA/Iberia/Qatar; move Avios between them after you find space.",
    "Earn MR 5x flights, UR 3x travel/5x office supply, CapOne 2x everywhere.",
];

pub(crate) fn avios_membership_note(home_airport: &str) -> String {
    format!(
        "DFW: BA AA short-haul 7.5k; Iberia DFW–MAD 34k; Qatar QSuites {}–DOH 70k",
        home_airport.to_uppercase()
    )
}

pub(crate) const STAR_TITLE: &str = "Star Alliance Options (when selected)";
pub(crate) const STAR_ROUTES: [RouteTemplate; 3] = [
    route(
        MembershipRewards,
        "Aeroplan / LifeMiles / Turkish",
        "Star Alliance; Aeroplan stopovers +5k",
    ),
    route(
        UltimateRewards,
        "United / Aeroplan / KrisFlyer",
        "United no YQ; SQ for premium cabins",
    ),
    route(
        CapitalOneMiles,
        "Aeroplan / LifeMiles / Turkish",
        "Europe biz often 45–63k",
    ),
];
pub(crate) const STAR_DETAILS: [&str; 2] = [
    "Compare Aeroplan vs LifeMiles vs United; pick lowest miles/fees.",
    "Feed with Ink 3x/5x and Venture 2x.",
];

pub(crate) const SKY_TITLE: &str = "SkyTeam Options (when selected)";
const FLYING_BLUE: &str = "Flying Blue (AF/KLM)";
pub(crate) const SKY_ROUTES: [RouteTemplate; 3] = [
    route(
        MembershipRewards,
        FLYING_BLUE,
        "Monthly Promo Rewards to Europe",
    ),
    route(UltimateRewards, FLYING_BLUE, "Redundancy = flexibility"),
    route(CapitalOneMiles, FLYING_BLUE, "1:1; watch promos"),
];
pub(crate) const SKY_DETAILS: [&str; 1] = ["Hunt Flying Blue Promo Rewards; position if needed."];

pub(crate) const MARRIOTT_TITLE: &str = "Priority 2 — Marriott Bonvoy (selective)";
pub(crate) const MARRIOTT_ROUTES: [RouteTemplate; 2] = [
    route(
        MembershipRewards,
        "Marriott Bonvoy",
        "Transfer only during 20–30% promos or high-value off-peak + 5th night",
    ),
    route(
        UltimateRewards,
        "Marriott Bonvoy",
        "Use only when Hyatt isn’t better",
    ),
];
pub(crate) const MARRIOTT_CASH_DETAIL: &str = "Use 5th-night-free; compare cash vs points.";

pub(crate) const HILTON_TITLE: &str = "Priority 3 — Hilton Honors (aspirational)";
pub(crate) const HILTON_ASPIRE_ROUTE: (&str, &str) = (
    "Hilton awards",
    "Earn 14x on stays; deploy on WA/Conrad + 5th-night-free",
);
pub(crate) const HILTON_MR_ROUTE: (&str, &str) = (
    "Hilton (1:2)",
    "Top off only for aspirational + 5th-night-free",
);
pub(crate) const HILTON_WITH_ASPIRE: &str =
    "Use Aspire for Hilton stays (14x + Diamond + free night).";
pub(crate) const HILTON_WITHOUT_ASPIRE: &str = "Consider Aspire to supercharge Hilton.";

pub(crate) const HYATT_TITLE: &str = "Priority 4 — World of Hyatt via UR";
pub(crate) const HYATT_ROUTE: RouteTemplate = route(
    UltimateRewards,
    "World of Hyatt",
    "Transfer 1:1 for 2¢+/pt redemptions",
);
pub(crate) const HYATT_FEED_DETAIL: &str =
    "Feed UR via Ink Preferred 3x travel and Ink Cash 5x office supply (gift cards).";

pub(crate) const MERCHANT_TITLE: &str = "Card-by-Merchant Optimizations";
/// Category-spend hints keyed by card, in display order.
pub(crate) const MERCHANT_HINTS: [(&str, &str); 4] = [
    (
        "chase-ink-cash",
        "Amazon: buy gift cards at Staples/Office Depot with Ink Cash → 5x UR",
    ),
    (
        "amex-platinum",
        "Flights: book direct or Amex Travel → 5x MR (feed Avios)",
    ),
    (
        "chase-ink-preferred",
        "Business travel/shipping/ads: 3x UR → Avios or Hyatt",
    ),
    (
        "capone-venture",
        "Everything else: Venture 2x → Avios Triangle as needed",
    ),
];
