use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::incident::Incident;
use super::score::Score;
use super::team::Team;
use super::venue::Venue;

/// Everything known about one match after correlation. Read-only input
/// to the document planner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchData {
    pub team_home: Arc<Team>,
    pub team_away: Arc<Team>,
    pub score: Score,
    pub venue: Venue,
    pub incidents: Vec<Incident>,
}

impl std::fmt::Display for MatchData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "MATCH DATA SUMMARY")?;
        writeln!(f, "\t{} (home) vs {} (away)", self.team_home.name, self.team_away.name)?;
        writeln!(f, "\tscore: {}", self.score)?;
        writeln!(
            f,
            "\tvenue: {}, {} ({}/{}, {}%)",
            self.venue.name,
            self.venue.town,
            self.venue.attendance,
            self.venue.capacity,
            self.venue.full_percentage
        )?;
        write!(f, "INCIDENTS")?;
        for incident in &self.incidents {
            write!(f, "\n\t{}", incident)?;
        }
        Ok(())
    }
}
