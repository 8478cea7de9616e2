use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::incident::{CardKind, GoalKind};
use super::score::{MatchResult, Score};
use super::team::{Player, Team};
use super::time::Time;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultMessage {
    pub team_home: Arc<Team>,
    pub team_away: Arc<Team>,
    pub score: Score,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalMessage {
    pub participant: Player,
    pub assistance: Option<Player>,
    pub current_score: Score,
    pub team: Arc<Team>,
    pub time: Time,
    pub kind: GoalKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardMessage {
    pub participant: Player,
    pub team: Arc<Team>,
    pub time: Time,
    pub kind: CardKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubstitutionMessage {
    pub participant_out: Player,
    pub participant_in: Player,
    pub team: Arc<Team>,
    pub time: Time,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissedPenaltyMessage {
    pub participant: Player,
    pub team: Arc<Team>,
    pub time: Time,
}

/// One sentence's worth of reportable content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Message {
    Result(ResultMessage),
    Goal(GoalMessage),
    Card(CardMessage),
    Substitution(SubstitutionMessage),
    MissedPenalty(MissedPenaltyMessage),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MessageKind {
    Result,
    Goal,
    Card,
    Substitution,
    MissedPenalty,
}

impl MessageKind {
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Result => "result",
            Self::Goal => "goal",
            Self::Card => "card",
            Self::Substitution => "substitution",
            Self::MissedPenalty => "missed_penalty",
        }
    }

    /// Every (kind, subtype) pair a [`Message`] can produce.
    pub fn all_template_keys() -> Vec<TemplateKey> {
        let mut keys = Vec::new();
        for result in [MatchResult::Win, MatchResult::Draw, MatchResult::Loss] {
            keys.push(TemplateKey::new(Self::Result, Some(MessageSubtype::Result(result))));
        }
        for goal in [
            GoalKind::Penalty,
            GoalKind::Assistance,
            GoalKind::SoloPlay,
            GoalKind::OwnGoal,
        ] {
            keys.push(TemplateKey::new(Self::Goal, Some(MessageSubtype::Goal(goal))));
        }
        for card in [CardKind::Yellow, CardKind::RedAuto, CardKind::RedInstant] {
            keys.push(TemplateKey::new(Self::Card, Some(MessageSubtype::Card(card))));
        }
        keys.push(TemplateKey::new(Self::Substitution, None));
        keys.push(TemplateKey::new(Self::MissedPenalty, None));
        keys
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MessageSubtype {
    Result(MatchResult),
    Goal(GoalKind),
    Card(CardKind),
}

impl MessageSubtype {
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Result(r) => r.tag(),
            Self::Goal(g) => g.tag(),
            Self::Card(c) => c.tag(),
        }
    }
}

/// Lookup key into the template repository, rendered as `kind` or
/// `kind.subtype` (e.g. `goal.solo_play`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TemplateKey {
    pub kind: MessageKind,
    pub subtype: Option<MessageSubtype>,
}

impl TemplateKey {
    pub fn new(kind: MessageKind, subtype: Option<MessageSubtype>) -> Self {
        Self { kind, subtype }
    }
}

impl std::fmt::Display for TemplateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.subtype {
            Some(subtype) => write!(f, "{}.{}", self.kind.tag(), subtype.tag()),
            None => write!(f, "{}", self.kind.tag()),
        }
    }
}

impl Message {
    pub fn kind(&self) -> MessageKind {
        match self {
            Self::Result(_) => MessageKind::Result,
            Self::Goal(_) => MessageKind::Goal,
            Self::Card(_) => MessageKind::Card,
            Self::Substitution(_) => MessageKind::Substitution,
            Self::MissedPenalty(_) => MessageKind::MissedPenalty,
        }
    }

    pub fn subtype(&self) -> Option<MessageSubtype> {
        match self {
            Self::Result(m) => Some(MessageSubtype::Result(m.score.result)),
            Self::Goal(m) => Some(MessageSubtype::Goal(m.kind)),
            Self::Card(m) => Some(MessageSubtype::Card(m.kind)),
            Self::Substitution(_) | Self::MissedPenalty(_) => None,
        }
    }

    pub fn template_key(&self) -> TemplateKey {
        TemplateKey::new(self.kind(), self.subtype())
    }

    /// Time of the underlying incident; the result message has none.
    pub fn time(&self) -> Option<Time> {
        match self {
            Self::Result(_) => None,
            Self::Goal(m) => Some(m.time),
            Self::Card(m) => Some(m.time),
            Self::Substitution(m) => Some(m.time),
            Self::MissedPenalty(m) => Some(m.time),
        }
    }
}

impl std::fmt::Display for Message {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Result(m) => write!(
                f,
                "-> {}: {} vs {}, score: {}",
                self.template_key(),
                m.team_home.name,
                m.team_away.name,
                m.score
            ),
            Self::Goal(m) => write!(
                f,
                "-> {}: time: {}, participant: {}, team: {}, score: {}",
                self.template_key(),
                m.time,
                m.participant.full_name,
                m.team.name,
                m.current_score
            ),
            Self::Card(m) => write!(
                f,
                "-> {}: time: {}, participant: {}, team: {}",
                self.template_key(),
                m.time,
                m.participant.full_name,
                m.team.name
            ),
            Self::Substitution(m) => write!(
                f,
                "-> {}: time: {}, out: {}, in: {}, team: {}",
                self.template_key(),
                m.time,
                m.participant_out.full_name,
                m.participant_in.full_name,
                m.team.name
            ),
            Self::MissedPenalty(m) => write!(
                f,
                "-> {}: time: {}, participant: {}, team: {}",
                self.template_key(),
                m.time,
                m.participant.full_name,
                m.team.name
            ),
        }
    }
}

/// Title message plus the ordered body of a report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentPlan {
    pub title: Message,
    pub body: Vec<Message>,
}

impl std::fmt::Display for DocumentPlan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "TITLE MESSAGE:\n\t{}", self.title)?;
        write!(f, "MESSAGES")?;
        for message in &self.body {
            write!(f, "\n\t{}", message)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_key_rendering() {
        let key = TemplateKey::new(
            MessageKind::Goal,
            Some(MessageSubtype::Goal(GoalKind::SoloPlay)),
        );
        assert_eq!(key.to_string(), "goal.solo_play");
        assert_eq!(
            TemplateKey::new(MessageKind::Substitution, None).to_string(),
            "substitution"
        );
        assert_eq!(
            TemplateKey::new(MessageKind::MissedPenalty, None).to_string(),
            "missed_penalty"
        );
        assert_eq!(
            TemplateKey::new(MessageKind::Result, Some(MessageSubtype::Result(MatchResult::Draw)))
                .to_string(),
            "result.draw"
        );
    }

    #[test]
    fn all_template_keys_are_distinct() {
        let keys = MessageKind::all_template_keys();
        assert_eq!(keys.len(), 12);
        let rendered: std::collections::HashSet<String> =
            keys.iter().map(|k| k.to_string()).collect();
        assert_eq!(rendered.len(), keys.len());
    }
}
