use serde::Serialize;

/// Airline partner groups, each reachable through one alliance umbrella.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PartnerGroup {
    Avios,
    Star,
    Sky,
}

impl PartnerGroup {
    pub const ALL: [PartnerGroup; 3] = [PartnerGroup::Avios, PartnerGroup::Star, PartnerGroup::Sky];

    /// Umbrella identifier that triggers the group on its own.
    pub const fn umbrella(self) -> &'static str {
        match self {
            Self::Avios => "oneworld",
            Self::Star => "star",
            Self::Sky => "skyteam",
        }
    }

    pub const fn members(self) -> &'static [&'static str] {
        match self {
            Self::Avios => &["ba", "ib", "qr"],
            Self::Star => &["ua", "ac", "tk", "sq"],
            Self::Sky => &["afkl"],
        }
    }

    /// True when the identifier is the umbrella or one of the group's partners.
    pub fn covers(self, id: &str) -> bool {
        self.umbrella() == id || self.members().contains(&id)
    }

    /// Resolves the group an identifier belongs to, if it is a recognized network input.
    pub fn for_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|group| group.covers(id))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlliancePartner {
    pub id: &'static str,
    pub label: &'static str,
    pub umbrella: bool,
    pub group: PartnerGroup,
}

const fn umbrella(id: &'static str, label: &'static str, group: PartnerGroup) -> AlliancePartner {
    AlliancePartner {
        id,
        label,
        umbrella: true,
        group,
    }
}

const fn partner(id: &'static str, label: &'static str, group: PartnerGroup) -> AlliancePartner {
    AlliancePartner {
        id,
        label,
        umbrella: false,
        group,
    }
}

pub(crate) static NETWORKS: [AlliancePartner; 11] = [
    umbrella("oneworld", "oneworld", PartnerGroup::Avios),
    umbrella("star", "Star Alliance", PartnerGroup::Star),
    umbrella("skyteam", "SkyTeam", PartnerGroup::Sky),
    partner("ba", "British Airways (Avios)", PartnerGroup::Avios),
    partner("ib", "Iberia (Avios)", PartnerGroup::Avios),
    partner("qr", "Qatar (Avios)", PartnerGroup::Avios),
    partner("ua", "United", PartnerGroup::Star),
    partner("ac", "Air Canada (Aeroplan)", PartnerGroup::Star),
    partner("tk", "Turkish (Miles&Smiles)", PartnerGroup::Star),
    partner("sq", "Singapore (KrisFlyer)", PartnerGroup::Star),
    partner("afkl", "Air France / KLM (Flying Blue)", PartnerGroup::Sky),
];
