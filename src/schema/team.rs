use serde::{Deserialize, Serialize};

/// Which half of the fixture a team belongs to.
///
/// The feed keys both sides by their discriminant: `"0"` for the home team,
/// `"1"` for the away team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Home,
    Away,
}

impl Side {
    /// Key used for this side in the feed's per-side tables.
    pub fn feed_key(&self) -> &'static str {
        match self {
            Self::Home => "0",
            Self::Away => "1",
        }
    }

    pub fn opponent(&self) -> Side {
        match self {
            Self::Home => Self::Away,
            Self::Away => Self::Home,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    pub id: u64,
    pub name: String,
}

/// A person who can appear in an incident.
///
/// Lineup members carry every field. Non-roster personnel (a coach booked
/// from the bench) only have an id and a full name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: u64,
    pub full_name: String,
    pub country: Option<Country>,
    pub lineup_position_id: Option<u64>,
    pub number: Option<u32>,
}

impl Player {
    /// Placeholder for someone who is not on either lineup.
    pub fn off_roster(id: u64, full_name: impl Into<String>) -> Self {
        Self {
            id,
            full_name: full_name.into(),
            country: None,
            lineup_position_id: None,
            number: None,
        }
    }

    /// Family name. The feed writes names family-first, so this is the
    /// first token of the full name.
    pub fn last_name(&self) -> &str {
        self.full_name
            .split_whitespace()
            .next()
            .unwrap_or(&self.full_name)
    }

    /// Given name: the last token of the full name.
    pub fn first_name(&self) -> &str {
        self.full_name
            .split_whitespace()
            .next_back()
            .unwrap_or(&self.full_name)
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.number {
            Some(number) => write!(f, "({}, {})", self.full_name, number),
            None => write!(f, "({})", self.full_name),
        }
    }
}

/// One side of a match with its starting lineup and substitutes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: u64,
    pub name: String,
    pub country: Country,
    pub side: Side,
    pub lineup: Vec<Player>,
}

impl Team {
    /// Looks up a lineup member by id.
    pub fn player(&self, id: u64) -> Option<&Player> {
        self.lineup.iter().find(|p| p.id == id)
    }
}
