use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::score::Score;
use super::team::{Player, Team};
use super::time::Time;

/// How a goal came about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GoalKind {
    Penalty,
    Assistance,
    SoloPlay,
    OwnGoal,
}

impl GoalKind {
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Penalty => "penalty",
            Self::Assistance => "assistance",
            Self::SoloPlay => "solo_play",
            Self::OwnGoal => "own_goal",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardKind {
    Yellow,
    /// Red card following a second yellow.
    RedAuto,
    RedInstant,
}

impl CardKind {
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Yellow => "yellow",
            Self::RedAuto => "red_auto",
            Self::RedInstant => "red_instant",
        }
    }
}

/// Discriminant of [`Incident`], for logging and assertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IncidentKind {
    Goal,
    Penalty,
    Card,
    Substitution,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalIncident {
    pub participant: Player,
    pub team: Arc<Team>,
    pub time: Time,
    /// Running score after this goal.
    pub current_score: Score,
    pub assistance: Option<Player>,
    pub kind: GoalKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PenaltyIncident {
    pub participant: Player,
    pub team: Arc<Team>,
    pub time: Time,
    pub current_score: Score,
    pub scored: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardIncident {
    pub participant: Player,
    pub team: Arc<Team>,
    pub time: Time,
    pub kind: CardKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubstitutionIncident {
    /// The player leaving the pitch.
    pub participant: Player,
    pub team: Arc<Team>,
    pub time: Time,
    pub participant_in: Player,
}

/// A fully correlated match incident.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Incident {
    Goal(GoalIncident),
    Penalty(PenaltyIncident),
    Card(CardIncident),
    Substitution(SubstitutionIncident),
}

impl Incident {
    pub fn kind(&self) -> IncidentKind {
        match self {
            Self::Goal(_) => IncidentKind::Goal,
            Self::Penalty(_) => IncidentKind::Penalty,
            Self::Card(_) => IncidentKind::Card,
            Self::Substitution(_) => IncidentKind::Substitution,
        }
    }

    pub fn participant(&self) -> &Player {
        match self {
            Self::Goal(i) => &i.participant,
            Self::Penalty(i) => &i.participant,
            Self::Card(i) => &i.participant,
            Self::Substitution(i) => &i.participant,
        }
    }

    pub fn team(&self) -> &Arc<Team> {
        match self {
            Self::Goal(i) => &i.team,
            Self::Penalty(i) => &i.team,
            Self::Card(i) => &i.team,
            Self::Substitution(i) => &i.team,
        }
    }

    pub fn time(&self) -> Time {
        match self {
            Self::Goal(i) => i.time,
            Self::Penalty(i) => i.time,
            Self::Card(i) => i.time,
            Self::Substitution(i) => i.time,
        }
    }
}

impl std::fmt::Display for Incident {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "-> {:?} --- time: {}, participant: {}, team: {}",
            self.kind(),
            self.time(),
            self.participant().full_name,
            self.team().name
        )
    }
}
