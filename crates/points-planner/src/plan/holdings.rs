use crate::catalog::{self, RewardsCurrency, ASPIRE_CARD_ID};

/// Currency facts derived once per plan from the selected cards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Holdings {
    pub membership_rewards: bool,
    pub ultimate_rewards: bool,
    pub capital_one_miles: bool,
    pub aspire: bool,
}

impl Holdings {
    pub fn from_cards<S: AsRef<str>>(card_ids: &[S]) -> Self {
        let mut holdings = Self::default();

        for id in card_ids.iter().map(AsRef::as_ref) {
            if id == ASPIRE_CARD_ID {
                holdings.aspire = true;
            }
            match catalog::card(id).map(|card| card.currency) {
                Some(RewardsCurrency::MembershipRewards) => holdings.membership_rewards = true,
                Some(RewardsCurrency::UltimateRewards) => holdings.ultimate_rewards = true,
                Some(RewardsCurrency::CapitalOneMiles) => holdings.capital_one_miles = true,
                _ => {}
            }
        }

        holdings
    }

    pub fn holds(&self, currency: RewardsCurrency) -> bool {
        match currency {
            RewardsCurrency::MembershipRewards => self.membership_rewards,
            RewardsCurrency::UltimateRewards => self.ultimate_rewards,
            RewardsCurrency::CapitalOneMiles => self.capital_one_miles,
            _ => false,
        }
    }

    /// Transferable currencies held, in MR, UR, Capital One order.
    pub fn transferable(&self) -> impl Iterator<Item = RewardsCurrency> + '_ {
        RewardsCurrency::TRANSFERABLE
            .into_iter()
            .filter(move |currency| self.holds(*currency))
    }
}
