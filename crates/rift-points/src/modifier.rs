use rift_types::Role;

/// Role modifier applied to match points.
///
/// Fixed table over the closed role set; carry and mid roles score above
/// baseline, support below.
pub fn point_modifier(role: Role) -> f64 {
    match role {
        Role::Top => 1.0,
        Role::Jungle => 1.05,
        Role::Mid => 1.1,
        Role::Bot => 1.15,
        Role::Support => 0.9,
    }
}

/// Role modifier applied to a player's initial market price.
///
/// Same table as [`point_modifier`]: demand for a role tracks its scoring
/// potential.
pub fn price_modifier(role: Role) -> f64 {
    point_modifier(role)
}

/// Real-world organization tier, used as a price multiplier at ingestion.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TeamTier {
    /// International title contenders.
    Premier,
    /// Strong regional teams.
    Contender,
    /// Everyone else.
    Standard,
}

impl TeamTier {
    // TODO: source the tier lists from season configuration instead of
    // hard-coding last season's results.
    const PREMIER: [&'static str; 4] = ["T1", "G2 Esports", "JD Gaming", "Bilibili Gaming"];
    const CONTENDER: [&'static str; 4] = ["Gen.G", "Fnatic", "Team Liquid", "Cloud9"];

    /// Classify a real-world team by name.
    pub fn for_team(name: &str) -> Self {
        if Self::PREMIER.contains(&name) {
            TeamTier::Premier
        } else if Self::CONTENDER.contains(&name) {
            TeamTier::Contender
        } else {
            TeamTier::Standard
        }
    }

    /// The price multiplier for this tier.
    pub fn multiplier(&self) -> f64 {
        match self {
            TeamTier::Premier => 1.3,
            TeamTier::Contender => 1.15,
            TeamTier::Standard => 1.0,
        }
    }
}
