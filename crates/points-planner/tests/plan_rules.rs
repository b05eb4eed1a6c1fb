use points_planner::generate_plan;
use points_planner::plan::PlanBlock;

const AVIOS: &str = "Priority 1 — AA/oneworld via Avios Triangle";
const STAR: &str = "Star Alliance Options (when selected)";
const SKY: &str = "SkyTeam Options (when selected)";
const MARRIOTT: &str = "Priority 2 — Marriott Bonvoy (selective)";
const HILTON: &str = "Priority 3 — Hilton Honors (aspirational)";
const HYATT: &str = "Priority 4 — World of Hyatt via UR";
const MERCHANT: &str = "Card-by-Merchant Optimizations";

fn titles(plan: &[PlanBlock]) -> Vec<&str> {
    plan.iter().map(|block| block.title.as_str()).collect()
}

fn sources(block: &PlanBlock) -> Vec<&str> {
    block.paths().iter().map(|path| path.source.as_str()).collect()
}

fn find<'a>(plan: &'a [PlanBlock], title: &str) -> &'a PlanBlock {
    plan.iter()
        .find(|block| block.title == title)
        .unwrap_or_else(|| panic!("block '{title}' missing"))
}

#[test]
fn default_selection_produces_full_priority_plan() {
    let plan = generate_plan(
        &[
            "capone-venture",
            "amex-platinum",
            "hilton-aspire",
            "chase-ink-preferred",
        ],
        &["oneworld", "ba", "ib", "qr"],
        &["marriott", "hilton", "hyatt"],
        &["DFW"],
    );

    assert_eq!(titles(&plan), [AVIOS, MARRIOTT, HILTON, HYATT, MERCHANT]);

    let avios = find(&plan, AVIOS);
    assert_eq!(
        sources(avios),
        ["Membership Rewards", "Ultimate Rewards", "Capital One Miles"]
    );
    assert!(avios
        .paths()
        .iter()
        .all(|path| path.destination == "BA/Iberia/Qatar Avios"));
    assert_eq!(avios.details.len(), 2);

    let hilton = find(&plan, HILTON);
    assert_eq!(sources(hilton), ["Hilton Honors", "Membership Rewards"]);
    assert_eq!(
        hilton.details[1],
        "Use Aspire for Hilton stays (14x + Diamond + free night)."
    );

    let merchant = find(&plan, MERCHANT);
    assert!(merchant.paths.is_none());
    assert_eq!(
        merchant.details,
        [
            "Flights: book direct or Amex Travel → 5x MR (feed Avios)",
            "Business travel/shipping/ads: 3x UR → Avios or Hyatt",
            "Everything else: Venture 2x → Avios Triangle as needed",
        ]
    );
}

#[test]
fn identical_inputs_yield_identical_plans() {
    let cards = ["amex-gold", "chase-sapphire-reserve", "capone-venturex"];
    let alliances = ["star", "skyteam", "qr"];
    let hotels = ["marriott", "hyatt", "hilton"];
    let airports = ["LAX"];

    let first = generate_plan(&cards, &alliances, &hotels, &airports);
    let second = generate_plan(&cards, &alliances, &hotels, &airports);
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).expect("plan serializes"),
        serde_json::to_string(&second).expect("plan serializes")
    );
}

#[test]
fn empty_selections_produce_no_blocks() {
    let none: [&str; 0] = [];
    assert!(generate_plan(&none, &none, &none, &none).is_empty());
    assert!(generate_plan(&none, &none, &none, &["DFW"]).is_empty());
}

#[test]
fn adding_oneworld_adds_exactly_one_avios_block() {
    let cards = ["chase-ink-cash", "amex-gold"];
    let hotels = ["hyatt"];
    let before = generate_plan(&cards, &["star"], &hotels, &["DFW"]);
    let after = generate_plan(&cards, &["star", "oneworld"], &hotels, &["DFW"]);

    assert!(!titles(&before).contains(&AVIOS));
    assert_eq!(titles(&after).iter().filter(|title| **title == AVIOS).count(), 1);
    assert_eq!(after.len(), before.len() + 1);
    assert_eq!(after[0].title, AVIOS);
}

#[test]
fn several_avios_partners_still_emit_a_single_block() {
    let plan = generate_plan(&["amex-gold"], &["oneworld", "ba", "ib", "qr"], &[], &["DFW"]);
    assert_eq!(titles(&plan), [AVIOS]);
}

#[test]
fn hyatt_requires_ultimate_rewards() {
    let without_ur = generate_plan(
        &["amex-platinum", "capone-venture", "hilton-aspire"],
        &[],
        &["hyatt"],
        &["DFW"],
    );
    assert!(!titles(&without_ur).contains(&HYATT));

    let with_ur = generate_plan(&["chase-sapphire-preferred"], &[], &["hyatt"], &["DFW"]);
    let hyatt = find(&with_ur, HYATT);
    assert_eq!(sources(hyatt), ["Ultimate Rewards"]);
    assert_eq!(
        hyatt.details[0],
        "Hyatt target ≥ 2.0¢/pt; Park Hyatt/Andaz/Alila often qualify."
    );
}

#[test]
fn marriott_requires_membership_or_ultimate_rewards() {
    let capital_one_only = generate_plan(&["capone-venture"], &[], &["marriott"], &["DFW"]);
    assert!(!titles(&capital_one_only).contains(&MARRIOTT));

    let plan = generate_plan(&["chase-ink-cash"], &[], &["marriott"], &["DFW"]);
    let marriott = find(&plan, MARRIOTT);
    assert_eq!(sources(marriott), ["Ultimate Rewards"]);
    assert_eq!(marriott.details[0], "Target ≥ 1.4¢/pt or wait for promos.");
}

#[test]
fn paths_follow_mr_ur_capital_one_order() {
    let plan = generate_plan(
        &["capone-venturex", "chase-ink-preferred", "amex-biz-platinum"],
        &["ua", "afkl"],
        &[],
        &["DFW"],
    );
    let star = find(&plan, STAR);
    assert_eq!(
        sources(star),
        ["Membership Rewards", "Ultimate Rewards", "Capital One Miles"]
    );
    assert_eq!(star.paths()[1].destination, "United / Aeroplan / KrisFlyer");

    let sky = find(&plan, SKY);
    assert_eq!(
        sources(sky),
        ["Membership Rewards", "Ultimate Rewards", "Capital One Miles"]
    );

    let partial = generate_plan(&["capone-venture", "amex-gold"], &["sq"], &[], &["DFW"]);
    assert_eq!(
        sources(find(&partial, STAR)),
        ["Membership Rewards", "Capital One Miles"]
    );
}

#[test]
fn star_block_without_cards_keeps_guidance_and_no_paths() {
    let none: [&str; 0] = [];
    let plan = generate_plan(&none, &["star"], &none, &none);
    assert_eq!(titles(&plan), [STAR]);
    assert_eq!(plan[0].paths, Some(Vec::new()));
    assert_eq!(plan[0].details.len(), 2);
}

#[test]
fn ink_cash_alone_yields_amazon_hint() {
    let plan = generate_plan(&["chase-ink-cash"], &[], &[], &["DFW"]);
    assert_eq!(titles(&plan), [MERCHANT]);
    assert_eq!(
        plan[0].details,
        ["Amazon: buy gift cards at Staples/Office Depot with Ink Cash → 5x UR"]
    );
}

#[test]
fn merchant_hints_ignore_selection_order() {
    let plan = generate_plan(&["capone-venture", "chase-ink-cash"], &[], &[], &["DFW"]);
    let merchant = find(&plan, MERCHANT);
    assert!(merchant.details[0].starts_with("Amazon:"));
    assert!(merchant.details[1].starts_with("Everything else:"));
}

#[test]
fn first_home_airport_seeds_avios_example_route() {
    let plan = generate_plan(&["amex-gold"], &["ba"], &[], &["mia", "LAX"]);
    let note = find(&plan, AVIOS).paths()[0]
        .note
        .clone()
        .expect("membership rewards note");
    assert_eq!(
        note,
        "DFW: BA AA short-haul 7.5k; Iberia DFW–MAD 34k; Qatar QSuites MIA–DOH 70k"
    );
}

#[test]
fn hilton_without_aspire_suggests_the_card() {
    let plan = generate_plan(&["chase-ink-cash"], &[], &["hilton"], &["DFW"]);
    let hilton = find(&plan, HILTON);
    assert!(hilton.paths().is_empty());
    assert_eq!(
        hilton.details,
        [
            "Hilton typical ~1¢/pt; aim higher with WA/Conrad + 5th night.",
            "Consider Aspire to supercharge Hilton.",
        ]
    );
}

#[test]
fn unknown_identifiers_are_ignored() {
    let plan = generate_plan(
        &["not-a-card"],
        &["aa", "delta"],
        &["motel6"],
        &["not an airport"],
    );
    assert!(plan.is_empty());
}
