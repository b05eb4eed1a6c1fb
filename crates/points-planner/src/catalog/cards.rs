use serde::{Deserialize, Serialize};

/// Rewards currency earned by a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RewardsCurrency {
    MembershipRewards,
    UltimateRewards,
    CapitalOneMiles,
    HiltonHonors,
    ThankYouPoints,
    Cashback,
}

impl RewardsCurrency {
    /// Currencies that move to airline and hotel partners, in path emission order.
    pub const TRANSFERABLE: [RewardsCurrency; 3] = [
        RewardsCurrency::MembershipRewards,
        RewardsCurrency::UltimateRewards,
        RewardsCurrency::CapitalOneMiles,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::MembershipRewards => "Membership Rewards",
            Self::UltimateRewards => "Ultimate Rewards",
            Self::CapitalOneMiles => "Capital One Miles",
            Self::HiltonHonors => "Hilton Honors",
            Self::ThankYouPoints => "ThankYou Points",
            Self::Cashback => "Cashback",
        }
    }

    pub fn is_transferable(self) -> bool {
        Self::TRANSFERABLE.contains(&self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Card {
    pub id: &'static str,
    pub name: &'static str,
    pub issuer: &'static str,
    pub currency: RewardsCurrency,
    pub currency_label: &'static str,
    pub tags: &'static [&'static str],
}

impl Card {
    const fn new(
        id: &'static str,
        name: &'static str,
        issuer: &'static str,
        currency: RewardsCurrency,
        tags: &'static [&'static str],
    ) -> Self {
        Self {
            id,
            name,
            issuer,
            currency,
            currency_label: currency.label(),
            tags,
        }
    }
}

pub const ASPIRE_CARD_ID: &str = "hilton-aspire";

pub(crate) static CARDS: [Card; 12] = [
    Card::new(
        "capone-venture",
        "Capital One Venture",
        "Capital One",
        RewardsCurrency::CapitalOneMiles,
        &["2x on everything"],
    ),
    Card::new(
        "amex-platinum",
        "Amex Platinum (Personal)",
        "American Express",
        RewardsCurrency::MembershipRewards,
        &["5x flights"],
    ),
    Card::new(
        "amex-biz-platinum",
        "Amex Platinum (Business)",
        "American Express",
        RewardsCurrency::MembershipRewards,
        &["5x flights", "35% rebate"],
    ),
    Card::new(
        ASPIRE_CARD_ID,
        "Amex Hilton Honors Aspire",
        "American Express",
        RewardsCurrency::HiltonHonors,
        &["14x Hilton", "Diamond"],
    ),
    Card::new(
        "chase-ink-cash",
        "Chase Ink Cash",
        "Chase",
        RewardsCurrency::UltimateRewards,
        &["5x office supply"],
    ),
    Card::new(
        "chase-ink-preferred",
        "Chase Ink Preferred",
        "Chase",
        RewardsCurrency::UltimateRewards,
        &["3x travel & shipping"],
    ),
    Card::new(
        "chase-amazon-prime",
        "Chase Amazon Prime",
        "Chase",
        RewardsCurrency::Cashback,
        &["5% Amazon"],
    ),
    Card::new(
        "chase-sapphire-preferred",
        "Chase Sapphire Preferred",
        "Chase",
        RewardsCurrency::UltimateRewards,
        &[],
    ),
    Card::new(
        "chase-sapphire-reserve",
        "Chase Sapphire Reserve",
        "Chase",
        RewardsCurrency::UltimateRewards,
        &[],
    ),
    Card::new(
        "amex-gold",
        "Amex Gold",
        "American Express",
        RewardsCurrency::MembershipRewards,
        &[],
    ),
    Card::new(
        "capone-venturex",
        "Capital One Venture X",
        "Capital One",
        RewardsCurrency::CapitalOneMiles,
        &[],
    ),
    Card::new(
        "citi-premier",
        "Citi Strata Premier / Premier",
        "Citi",
        RewardsCurrency::ThankYouPoints,
        &[],
    ),
];
