/// Incident correlation. Turns the feed's flat, parent-linked event list
/// into typed match incidents.
///
/// Supplementary events (an assist, a penalty outcome, the incoming half of
/// a substitution) point at their primary event through `parentId`. Every
/// primary event looks up the first event that names it as parent and uses
/// it to decide its variant.

use rustc_hash::FxHashMap;
use std::sync::Arc;
use thiserror::Error;

use crate::schema::feed::{RawIncident, RawMatch};
use crate::schema::incident::{
    CardIncident, CardKind, GoalIncident, GoalKind, Incident, PenaltyIncident,
    SubstitutionIncident,
};
use crate::schema::match_data::MatchData;
use crate::schema::score::{Score, ScoreParseError};
use crate::schema::team::{Country, Player, Side, Team};
use crate::schema::time::Time;
use crate::schema::venue::Venue;

/// Score-table entry holding the final result.
pub const FINAL_SCORE_KEY: &str = "1";

#[derive(Debug, Error)]
pub enum CorrelationError {
    #[error("unknown incident type '{type_name}' (incident {id})")]
    UnknownIncidentType { id: u64, type_name: String },
    #[error("incident {id} ({type_name}) has no participant")]
    MissingParticipant { id: u64, type_name: String },
    #[error("incident {id} ({type_name}) is not attributed to a team")]
    MissingTeam { id: u64, type_name: String },
    #[error("incident {id} is attributed to team {team_id}, which plays on neither side")]
    UnknownTeam { id: u64, team_id: u64 },
    #[error("player {player_id} from incident {id} is on neither lineup")]
    PlayerNotFound { id: u64, player_id: u64 },
    #[error("incident {id} ({type_name}) has no correlated auxiliary event")]
    MissingAuxiliary { id: u64, type_name: String },
    #[error("incident {id}: {source}")]
    MalformedScore {
        id: u64,
        #[source]
        source: ScoreParseError,
    },
    #[error("no participant descriptor for side '{0}'")]
    MissingSide(&'static str),
    #[error("no final score for side '{0}'")]
    MissingScore(&'static str),
}

/// Feed vocabulary, classified by the role an event plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EventType {
    Goal,
    OwnGoal,
    PenaltyKick,
    SubstitutionOut,
    YellowCard,
    RedCard,
    /// Only ever enriches another event.
    Auxiliary,
}

const PENALTY_SCORED: &str = "Penalty scored";

impl EventType {
    fn classify(name: &str) -> Option<EventType> {
        let event_type = match name {
            "Goal" => Self::Goal,
            "Own Goal" => Self::OwnGoal,
            "Penalty Kick" => Self::PenaltyKick,
            "Substitution - Out" => Self::SubstitutionOut,
            "Yellow Card" => Self::YellowCard,
            "Red Card" => Self::RedCard,
            "Substitution - In" | "Assistance" | PENALTY_SCORED | "Penalty missed"
            | "Action not on pitch" | "Goal Disallowed" => Self::Auxiliary,
            other if other.starts_with("Extended time") => Self::Auxiliary,
            _ => return None,
        };
        Some(event_type)
    }

    fn is_card(&self) -> bool {
        matches!(self, Self::YellowCard | Self::RedCard)
    }
}

/// Correlates one match's raw events against its two resolved rosters.
pub struct Correlator<'a> {
    raw: &'a [RawIncident],
    home: &'a Arc<Team>,
    away: &'a Arc<Team>,
    /// parentId → index of the first event naming that parent.
    children: FxHashMap<u64, usize>,
}

impl<'a> Correlator<'a> {
    pub fn new(raw: &'a [RawIncident], home: &'a Arc<Team>, away: &'a Arc<Team>) -> Self {
        let mut children = FxHashMap::default();
        for (index, incident) in raw.iter().enumerate() {
            if let Some(parent) = incident.parent_id {
                children.entry(parent).or_insert(index);
            }
        }
        Self {
            raw,
            home,
            away,
            children,
        }
    }

    /// Produces the match's incidents ordered by time. Events at the same
    /// time keep their feed order.
    pub fn correlate(&self) -> Result<Vec<Incident>, CorrelationError> {
        let mut incidents = Vec::new();
        for raw in self.raw {
            if let Some(incident) = self.correlate_one(raw)? {
                incidents.push(incident);
            }
        }
        incidents.sort_by_key(Incident::time);
        Ok(incidents)
    }

    fn correlate_one(&self, raw: &RawIncident) -> Result<Option<Incident>, CorrelationError> {
        let event_type = EventType::classify(raw.type_name()).ok_or_else(|| {
            CorrelationError::UnknownIncidentType {
                id: raw.id,
                type_name: raw.type_name().to_string(),
            }
        })?;

        match event_type {
            EventType::Auxiliary => return Ok(None),
            EventType::RedCard if raw.parent_id.is_some() => {
                tracing::debug!(
                    incident = raw.id,
                    "red card belongs to a second yellow, not emitted on its own"
                );
                return Ok(None);
            }
            _ => {}
        }

        let time = Time::new(raw.time, raw.added_time.unwrap_or(0));
        let side_team = self.team_of(raw)?;
        let participant_id = raw
            .participant
            .id
            .ok_or_else(|| missing_participant(raw))?;
        let participant = if event_type.is_card() {
            self.card_recipient(raw, side_team, participant_id)?
        } else {
            self.player(raw, side_team, participant_id)?
        };
        let auxiliary = self.auxiliary_of(raw);

        let incident = match event_type {
            EventType::Goal => {
                let assistance = match auxiliary {
                    Some(aux) => {
                        let id = aux.participant.id.ok_or_else(|| missing_participant(aux))?;
                        Some(self.player(aux, side_team, id)?)
                    }
                    None => None,
                };
                let kind = if assistance.is_some() {
                    GoalKind::Assistance
                } else {
                    GoalKind::SoloPlay
                };
                Incident::Goal(GoalIncident {
                    participant,
                    team: side_team.clone(),
                    time,
                    current_score: current_score(raw)?,
                    assistance,
                    kind,
                })
            }
            EventType::OwnGoal => Incident::Goal(GoalIncident {
                participant,
                team: self.opponent_of(side_team).clone(),
                time,
                current_score: current_score(raw)?,
                assistance: None,
                kind: GoalKind::OwnGoal,
            }),
            EventType::PenaltyKick => Incident::Penalty(PenaltyIncident {
                participant,
                team: side_team.clone(),
                time,
                current_score: current_score(raw)?,
                scored: auxiliary.is_some_and(|aux| aux.type_name() == PENALTY_SCORED),
            }),
            EventType::SubstitutionOut => {
                let aux = auxiliary.ok_or_else(|| CorrelationError::MissingAuxiliary {
                    id: raw.id,
                    type_name: raw.type_name().to_string(),
                })?;
                let incoming_id = aux.participant.id.ok_or_else(|| missing_participant(aux))?;
                Incident::Substitution(SubstitutionIncident {
                    participant,
                    team: side_team.clone(),
                    time,
                    participant_in: self.player(aux, side_team, incoming_id)?,
                })
            }
            EventType::YellowCard => Incident::Card(CardIncident {
                participant,
                team: side_team.clone(),
                time,
                kind: if auxiliary.is_some() {
                    CardKind::RedAuto
                } else {
                    CardKind::Yellow
                },
            }),
            EventType::RedCard => Incident::Card(CardIncident {
                participant,
                team: side_team.clone(),
                time,
                kind: CardKind::RedInstant,
            }),
            EventType::Auxiliary => return Ok(None),
        };

        Ok(Some(incident))
    }

    /// First event whose parentId names `raw`.
    fn auxiliary_of(&self, raw: &RawIncident) -> Option<&'a RawIncident> {
        self.children.get(&raw.id).map(|&index| &self.raw[index])
    }

    /// Team identified by the event-participant grouping.
    fn team_of(&self, raw: &RawIncident) -> Result<&'a Arc<Team>, CorrelationError> {
        let team_id = raw.team_id().ok_or_else(|| CorrelationError::MissingTeam {
            id: raw.id,
            type_name: raw.type_name().to_string(),
        })?;
        if team_id == self.home.id {
            Ok(self.home)
        } else if team_id == self.away.id {
            Ok(self.away)
        } else {
            Err(CorrelationError::UnknownTeam {
                id: raw.id,
                team_id,
            })
        }
    }

    fn opponent_of(&self, team: &Arc<Team>) -> &'a Arc<Team> {
        match team.side.opponent() {
            Side::Home => self.home,
            Side::Away => self.away,
        }
    }

    /// Looks a player up on `team`'s lineup, then on the opponent's.
    fn player(
        &self,
        raw: &RawIncident,
        team: &Arc<Team>,
        player_id: u64,
    ) -> Result<Player, CorrelationError> {
        team.player(player_id)
            .or_else(|| self.opponent_of(team).player(player_id))
            .cloned()
            .ok_or(CorrelationError::PlayerNotFound {
                id: raw.id,
                player_id,
            })
    }

    /// Cards can go to bench staff, who are not on the lineup.
    fn card_recipient(
        &self,
        raw: &RawIncident,
        team: &Arc<Team>,
        player_id: u64,
    ) -> Result<Player, CorrelationError> {
        if let Some(player) = team.player(player_id) {
            return Ok(player.clone());
        }
        let full_name = raw
            .participant
            .full_name
            .as_deref()
            .ok_or_else(|| missing_participant(raw))?;
        tracing::debug!(
            incident = raw.id,
            person = full_name,
            team = %team.name,
            "card recipient not on the lineup, treating as staff"
        );
        Ok(Player::off_roster(player_id, full_name))
    }
}

fn missing_participant(raw: &RawIncident) -> CorrelationError {
    CorrelationError::MissingParticipant {
        id: raw.id,
        type_name: raw.type_name().to_string(),
    }
}

/// Running score after the event. The feed sometimes omits it; such
/// events get 0:0 rather than a score inferred from earlier goals.
fn current_score(raw: &RawIncident) -> Result<Score, CorrelationError> {
    match raw.value.as_deref() {
        Some(value) => value
            .parse()
            .map_err(|source| CorrelationError::MalformedScore { id: raw.id, source }),
        None => {
            tracing::debug!(incident = raw.id, "no score snapshot, defaulting to 0:0");
            Ok(Score::default())
        }
    }
}

/// Correlate a raw event list against both rosters.
pub fn correlate_incidents(
    raw: &[RawIncident],
    home: &Arc<Team>,
    away: &Arc<Team>,
) -> Result<Vec<Incident>, CorrelationError> {
    Correlator::new(raw, home, away).correlate()
}

fn build_team(raw: &RawMatch, side: Side) -> Result<Team, CorrelationError> {
    let key = side.feed_key();
    let descriptor = raw
        .participants
        .get(key)
        .ok_or(CorrelationError::MissingSide(key))?;

    let lineup = raw
        .lineup
        .get(key)
        .map(|entries| {
            entries
                .iter()
                .map(|entry| Player {
                    id: entry.participant.id,
                    full_name: entry.participant.full_name.clone(),
                    country: entry.participant.countries.first().map(|c| Country {
                        id: c.id,
                        name: c.name.clone(),
                    }),
                    lineup_position_id: entry.lineup_position_id,
                    number: entry.number,
                })
                .collect()
        })
        .unwrap_or_default();

    Ok(Team {
        id: descriptor.id,
        name: descriptor.name.clone(),
        country: Country {
            id: descriptor.country_id,
            name: descriptor.country_name.clone(),
        },
        side,
        lineup,
    })
}

/// Resolve teams, score, venue and incidents of one match document.
pub fn build_match_data(raw: &RawMatch) -> Result<MatchData, CorrelationError> {
    let team_home = Arc::new(build_team(raw, Side::Home)?);
    let team_away = Arc::new(build_team(raw, Side::Away)?);

    let final_goals = |side: Side| {
        raw.score_entry(side.feed_key(), FINAL_SCORE_KEY)
            .ok_or(CorrelationError::MissingScore(side.feed_key()))
    };
    let score = Score::new(final_goals(Side::Home)?, final_goals(Side::Away)?);

    let venue = Venue::new(
        raw.venue_name.clone(),
        raw.venue_town.clone(),
        raw.venue_capacity,
        raw.venue_attendance.unwrap_or(0),
    );

    let incidents = correlate_incidents(&raw.incidents, &team_home, &team_away)?;
    tracing::debug!(
        home = %team_home.name,
        away = %team_away.name,
        score = %score,
        incidents = incidents.len(),
        "match data built"
    );

    Ok(MatchData {
        team_home,
        team_away,
        score,
        venue,
        incidents,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::feed::{
        RawEventParticipant, RawIncidentParticipant, RawIncidentType, RawTeamRef,
    };
    use crate::schema::incident::IncidentKind;

    const HOME_ID: u64 = 100;
    const AWAY_ID: u64 = 200;

    fn player(id: u64, name: &str, number: u32) -> Player {
        Player {
            id,
            full_name: name.to_string(),
            country: Some(Country {
                id: 62,
                name: "Czech Republic".to_string(),
            }),
            lineup_position_id: Some(1),
            number: Some(number),
        }
    }

    fn make_teams() -> (Arc<Team>, Arc<Team>) {
        let country = Country {
            id: 62,
            name: "Czech Republic".to_string(),
        };
        let home = Team {
            id: HOME_ID,
            name: "Slavia Praha".to_string(),
            country: country.clone(),
            side: Side::Home,
            lineup: vec![
                player(1, "Olatunji Mick", 9),
                player(2, "Provod Lukáš", 17),
                player(3, "Holeš Tomáš", 3),
                player(4, "Chytil Mojmír", 13),
            ],
        };
        let away = Team {
            id: AWAY_ID,
            name: "Sparta Praha".to_string(),
            country,
            side: Side::Away,
            lineup: vec![player(11, "Haraslín Lukáš", 22), player(12, "Kairinen Kaan", 3)],
        };
        (Arc::new(home), Arc::new(away))
    }

    fn raw(id: u64, parent: Option<u64>, type_name: &str, minute: u32, team: u64, person: u64) -> RawIncident {
        RawIncident {
            id,
            parent_id: parent,
            incident_type: RawIncidentType {
                name: type_name.to_string(),
            },
            time: minute,
            added_time: None,
            value: None,
            participant: RawIncidentParticipant {
                id: Some(person),
                full_name: None,
            },
            event_participant: RawEventParticipant {
                participant: vec![RawTeamRef { id: team }],
            },
        }
    }

    fn with_value(mut incident: RawIncident, value: &str) -> RawIncident {
        incident.value = Some(value.to_string());
        incident
    }

    #[test]
    fn goal_with_assist_and_solo_goal() {
        let (home, away) = make_teams();
        let events = vec![
            with_value(raw(1, None, "Goal", 23, HOME_ID, 1), "1:0"),
            with_value(raw(2, None, "Goal", 88, HOME_ID, 4), "2:1"),
            raw(3, Some(2), "Assistance", 88, HOME_ID, 2),
        ];
        let incidents = correlate_incidents(&events, &home, &away).unwrap();
        assert_eq!(incidents.len(), 2);

        match &incidents[0] {
            Incident::Goal(goal) => {
                assert_eq!(goal.kind, GoalKind::SoloPlay);
                assert!(goal.assistance.is_none());
                assert_eq!(goal.current_score, Score::new(1, 0));
            }
            other => panic!("expected goal, got {:?}", other),
        }
        match &incidents[1] {
            Incident::Goal(goal) => {
                assert_eq!(goal.kind, GoalKind::Assistance);
                assert_eq!(goal.assistance.as_ref().map(|p| p.id), Some(2));
                assert_eq!(goal.participant.id, 4);
                assert_eq!(goal.current_score, Score::new(2, 1));
            }
            other => panic!("expected goal, got {:?}", other),
        }
    }

    #[test]
    fn penalty_outcome_comes_from_auxiliary() {
        let (home, away) = make_teams();
        let events = vec![
            with_value(raw(1, None, "Penalty Kick", 60, AWAY_ID, 11), "1:1"),
            raw(2, Some(1), "Penalty scored", 60, AWAY_ID, 11),
            raw(3, None, "Penalty Kick", 70, HOME_ID, 1),
            raw(4, Some(3), "Penalty missed", 70, HOME_ID, 1),
            raw(5, None, "Penalty Kick", 80, HOME_ID, 1),
        ];
        let incidents = correlate_incidents(&events, &home, &away).unwrap();
        let scored: Vec<bool> = incidents
            .iter()
            .map(|i| match i {
                Incident::Penalty(p) => p.scored,
                other => panic!("expected penalty, got {:?}", other),
            })
            .collect();
        assert_eq!(scored, vec![true, false, false]);
        match &incidents[1] {
            Incident::Penalty(p) => assert_eq!(p.current_score, Score::new(0, 0)),
            _ => unreachable!(),
        }
    }

    #[test]
    fn second_yellow_becomes_red_auto() {
        let (home, away) = make_teams();
        let events = vec![
            raw(1, None, "Yellow Card", 30, AWAY_ID, 12),
            raw(2, None, "Yellow Card", 75, AWAY_ID, 12),
            raw(3, Some(2), "Red Card", 75, AWAY_ID, 12),
        ];
        let incidents = correlate_incidents(&events, &home, &away).unwrap();
        assert_eq!(incidents.len(), 2);
        let kinds: Vec<(u32, CardKind)> = incidents
            .iter()
            .map(|i| match i {
                Incident::Card(c) => (c.time.base, c.kind),
                other => panic!("expected card, got {:?}", other),
            })
            .collect();
        assert_eq!(kinds, vec![(30, CardKind::Yellow), (75, CardKind::RedAuto)]);
    }

    #[test]
    fn parentless_red_card_is_instant() {
        let (home, away) = make_teams();
        let events = vec![raw(1, None, "Red Card", 51, HOME_ID, 3)];
        let incidents = correlate_incidents(&events, &home, &away).unwrap();
        assert!(matches!(
            &incidents[0],
            Incident::Card(CardIncident { kind: CardKind::RedInstant, .. })
        ));
    }

    #[test]
    fn own_goal_is_credited_to_the_opponent() {
        let (home, away) = make_teams();
        let events = vec![with_value(raw(1, None, "Own Goal", 12, AWAY_ID, 12), "1:0")];
        let incidents = correlate_incidents(&events, &home, &away).unwrap();
        match &incidents[0] {
            Incident::Goal(goal) => {
                assert_eq!(goal.kind, GoalKind::OwnGoal);
                assert_eq!(goal.team.side, Side::Home);
                assert_eq!(goal.participant.full_name, "Kairinen Kaan");
                assert!(goal.assistance.is_none());
            }
            other => panic!("expected goal, got {:?}", other),
        }
    }

    #[test]
    fn substitution_takes_incoming_player_from_auxiliary() {
        let (home, away) = make_teams();
        let events = vec![
            raw(1, None, "Substitution - Out", 65, HOME_ID, 1),
            raw(2, Some(1), "Substitution - In", 65, HOME_ID, 4),
        ];
        let incidents = correlate_incidents(&events, &home, &away).unwrap();
        match &incidents[0] {
            Incident::Substitution(sub) => {
                assert_eq!(sub.participant.id, 1);
                assert_eq!(sub.participant_in.id, 4);
                assert!(Arc::ptr_eq(&sub.team, &home));
            }
            other => panic!("expected substitution, got {:?}", other),
        }
    }

    #[test]
    fn substitution_without_incoming_player_fails() {
        let (home, away) = make_teams();
        let events = vec![raw(1, None, "Substitution - Out", 65, HOME_ID, 1)];
        let err = correlate_incidents(&events, &home, &away).unwrap_err();
        assert!(matches!(err, CorrelationError::MissingAuxiliary { id: 1, .. }));
    }

    #[test]
    fn card_for_staff_synthesizes_placeholder() {
        let (home, away) = make_teams();
        let mut event = raw(1, None, "Yellow Card", 40, HOME_ID, 900);
        event.participant.full_name = Some("Trpišovský Jindřich".to_string());
        let incidents = correlate_incidents(&[event], &home, &away).unwrap();
        let coach = incidents[0].participant();
        assert_eq!(coach.id, 900);
        assert_eq!(coach.full_name, "Trpišovský Jindřich");
        assert!(coach.number.is_none());
        assert!(coach.country.is_none());
    }

    #[test]
    fn goal_by_unknown_player_fails() {
        let (home, away) = make_teams();
        let events = vec![raw(1, None, "Goal", 10, HOME_ID, 999)];
        let err = correlate_incidents(&events, &home, &away).unwrap_err();
        assert!(matches!(
            err,
            CorrelationError::PlayerNotFound { id: 1, player_id: 999 }
        ));
    }

    #[test]
    fn auxiliary_only_events_are_skipped() {
        let (home, away) = make_teams();
        let mut extended = raw(1, None, "Extended time second half", 90, HOME_ID, 0);
        extended.participant.id = None;
        extended.event_participant.participant.clear();
        let events = vec![
            extended,
            raw(2, None, "Action not on pitch", 50, HOME_ID, 1),
            raw(3, None, "Goal Disallowed", 55, HOME_ID, 1),
            raw(4, None, "Assistance", 56, HOME_ID, 2),
        ];
        let incidents = correlate_incidents(&events, &home, &away).unwrap();
        assert!(incidents.is_empty());
    }

    #[test]
    fn unknown_type_aborts_correlation() {
        let (home, away) = make_teams();
        let events = vec![
            raw(1, None, "Goal", 10, HOME_ID, 1),
            raw(2, None, "Corner Kick", 12, HOME_ID, 1),
        ];
        let err = correlate_incidents(&events, &home, &away).unwrap_err();
        assert!(
            matches!(err, CorrelationError::UnknownIncidentType { id: 2, ref type_name } if type_name == "Corner Kick")
        );
    }

    #[test]
    fn unknown_team_and_missing_grouping() {
        let (home, away) = make_teams();
        let err = correlate_incidents(&[raw(1, None, "Goal", 10, 777, 1)], &home, &away).unwrap_err();
        assert!(matches!(err, CorrelationError::UnknownTeam { team_id: 777, .. }));

        let mut ungrouped = raw(2, None, "Goal", 10, HOME_ID, 1);
        ungrouped.event_participant.participant.clear();
        let err = correlate_incidents(&[ungrouped], &home, &away).unwrap_err();
        assert!(matches!(err, CorrelationError::MissingTeam { id: 2, .. }));
    }

    #[test]
    fn malformed_score_snapshot_fails() {
        let (home, away) = make_teams();
        let events = vec![with_value(raw(1, None, "Goal", 10, HOME_ID, 1), "1-0")];
        let err = correlate_incidents(&events, &home, &away).unwrap_err();
        assert!(matches!(err, CorrelationError::MalformedScore { id: 1, .. }));
    }

    #[test]
    fn extreme_score_snapshot_keeps_exact_sum() {
        let (home, away) = make_teams();
        let events = vec![with_value(raw(1, None, "Goal", 10, HOME_ID, 1), "4294967295:1")];
        let incidents = correlate_incidents(&events, &home, &away).unwrap();
        match &incidents[0] {
            Incident::Goal(goal) => assert_eq!(goal.current_score.goals_sum, 4_294_967_296),
            other => panic!("expected goal, got {:?}", other),
        }

        let overflowing = vec![with_value(raw(1, None, "Goal", 10, HOME_ID, 1), "4294967296:1")];
        let err = correlate_incidents(&overflowing, &home, &away).unwrap_err();
        assert!(matches!(err, CorrelationError::MalformedScore { id: 1, .. }));
    }

    #[test]
    fn incidents_are_sorted_by_time_stably() {
        let (home, away) = make_teams();
        let mut stoppage = raw(1, None, "Yellow Card", 45, HOME_ID, 3);
        stoppage.added_time = Some(2);
        let events = vec![
            raw(2, None, "Goal", 80, HOME_ID, 1),
            stoppage,
            raw(3, None, "Yellow Card", 45, AWAY_ID, 11),
            raw(4, None, "Yellow Card", 45, AWAY_ID, 12),
            raw(5, None, "Goal", 5, AWAY_ID, 11),
        ];
        let incidents = correlate_incidents(&events, &home, &away).unwrap();
        let order: Vec<(u32, u32, u64)> = incidents
            .iter()
            .map(|i| (i.time().base, i.time().added, i.participant().id))
            .collect();
        assert_eq!(
            order,
            vec![(5, 0, 11), (45, 0, 11), (45, 0, 12), (45, 2, 3), (80, 0, 1)]
        );
        assert_eq!(incidents[0].kind(), IncidentKind::Goal);
    }

    #[test]
    fn first_child_wins_when_several_name_the_same_parent() {
        let (home, away) = make_teams();
        let events = vec![
            raw(1, None, "Penalty Kick", 60, HOME_ID, 1),
            raw(2, Some(1), "Penalty missed", 60, HOME_ID, 1),
            raw(3, Some(1), "Penalty scored", 60, HOME_ID, 1),
        ];
        let incidents = correlate_incidents(&events, &home, &away).unwrap();
        assert!(matches!(&incidents[0], Incident::Penalty(p) if !p.scored));
    }
}
