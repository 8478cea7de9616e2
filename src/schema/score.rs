use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Outcome of a match, always from the home team's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchResult {
    Win,
    Draw,
    Loss,
}

impl MatchResult {
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Win => "win",
            Self::Draw => "draw",
            Self::Loss => "loss",
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("malformed score snapshot '{0}': expected H:A")]
pub struct ScoreParseError(pub String);

/// Score snapshot with its derived fields.
///
/// Construct through [`Score::new`] so the derived fields always agree
/// with the goal counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub goals_home: u32,
    pub goals_away: u32,
    pub goals_sum: u64,
    pub goals_difference: u32,
    pub result: MatchResult,
}

impl Score {
    pub fn new(goals_home: u32, goals_away: u32) -> Self {
        let result = match goals_home.cmp(&goals_away) {
            std::cmp::Ordering::Greater => MatchResult::Win,
            std::cmp::Ordering::Equal => MatchResult::Draw,
            std::cmp::Ordering::Less => MatchResult::Loss,
        };
        Self {
            goals_home,
            goals_away,
            goals_sum: u64::from(goals_home) + u64::from(goals_away),
            goals_difference: goals_home.abs_diff(goals_away),
            result,
        }
    }
}

impl Default for Score {
    fn default() -> Self {
        Self::new(0, 0)
    }
}

impl FromStr for Score {
    type Err = ScoreParseError;

    /// Parses the feed's `"H:A"` running-score format.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ScoreParseError(s.to_string());
        let (home, away) = s.split_once(':').ok_or_else(err)?;
        let home = home.trim().parse().map_err(|_| err())?;
        let away = away.trim().parse().map_err(|_| err())?;
        Ok(Score::new(home, away))
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.goals_home, self.goals_away)
    }
}
