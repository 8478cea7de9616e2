/// Document planning: one title message, then one body message per incident.

use crate::schema::incident::{GoalKind, Incident};
use crate::schema::match_data::MatchData;
use crate::schema::message::{
    CardMessage, DocumentPlan, GoalMessage, Message, MissedPenaltyMessage, ResultMessage,
    SubstitutionMessage,
};

/// Build the document plan for a match. The body keeps the incidents'
/// count and order.
pub fn plan_document(match_data: &MatchData) -> DocumentPlan {
    let title = Message::Result(ResultMessage {
        team_home: match_data.team_home.clone(),
        team_away: match_data.team_away.clone(),
        score: match_data.score,
    });
    let body: Vec<Message> = match_data.incidents.iter().map(incident_message).collect();
    tracing::debug!(messages = body.len(), "document planned");
    DocumentPlan { title, body }
}

fn incident_message(incident: &Incident) -> Message {
    match incident {
        Incident::Goal(goal) => Message::Goal(GoalMessage {
            participant: goal.participant.clone(),
            assistance: goal.assistance.clone(),
            current_score: goal.current_score,
            team: goal.team.clone(),
            time: goal.time,
            kind: goal.kind,
        }),
        Incident::Penalty(penalty) if penalty.scored => Message::Goal(GoalMessage {
            participant: penalty.participant.clone(),
            assistance: None,
            current_score: penalty.current_score,
            team: penalty.team.clone(),
            time: penalty.time,
            kind: GoalKind::Penalty,
        }),
        Incident::Penalty(penalty) => Message::MissedPenalty(MissedPenaltyMessage {
            participant: penalty.participant.clone(),
            team: penalty.team.clone(),
            time: penalty.time,
        }),
        Incident::Card(card) => Message::Card(CardMessage {
            participant: card.participant.clone(),
            team: card.team.clone(),
            time: card.time,
            kind: card.kind,
        }),
        Incident::Substitution(sub) => Message::Substitution(SubstitutionMessage {
            participant_out: sub.participant.clone(),
            participant_in: sub.participant_in.clone(),
            team: sub.team.clone(),
            time: sub.time,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::incident::{
        CardIncident, CardKind, GoalIncident, PenaltyIncident, SubstitutionIncident,
    };
    use crate::schema::message::MessageKind;
    use crate::schema::score::{MatchResult, Score};
    use crate::schema::team::{Country, Player, Side, Team};
    use crate::schema::time::Time;
    use crate::schema::venue::Venue;
    use std::sync::Arc;

    fn team(id: u64, name: &str, side: Side) -> Arc<Team> {
        Arc::new(Team {
            id,
            name: name.to_string(),
            country: Country {
                id: 62,
                name: "Czech Republic".to_string(),
            },
            side,
            lineup: Vec::new(),
        })
    }

    fn match_with(incidents: Vec<Incident>) -> MatchData {
        MatchData {
            team_home: team(1, "Sigma Olomouc", Side::Home),
            team_away: team(2, "Baník Ostrava", Side::Away),
            score: Score::new(2, 1),
            venue: Venue::new("Andrův stadion", "Olomouc", 12483, 6120),
            incidents,
        }
    }

    #[test]
    fn title_is_the_final_result() {
        let data = match_with(Vec::new());
        let plan = plan_document(&data);
        match &plan.title {
            Message::Result(result) => {
                assert_eq!(result.score.result, MatchResult::Win);
                assert_eq!(result.team_home.name, "Sigma Olomouc");
                assert_eq!(result.team_away.name, "Baník Ostrava");
            }
            other => panic!("expected result message, got {:?}", other),
        }
        assert!(plan.body.is_empty());
    }

    #[test]
    fn body_maps_incidents_one_to_one_in_order() {
        let data = match_with(Vec::new());
        let home = data.team_home.clone();
        let away = data.team_away.clone();
        let scorer = Player::off_roster(10, "Zmrzlý Jan");
        let keeper = Player::off_roster(20, "Budínský Viktor");

        let incidents = vec![
            Incident::Goal(GoalIncident {
                participant: scorer.clone(),
                team: home.clone(),
                time: Time::new(23, 0),
                current_score: Score::new(1, 0),
                assistance: None,
                kind: GoalKind::SoloPlay,
            }),
            Incident::Penalty(PenaltyIncident {
                participant: keeper.clone(),
                team: away.clone(),
                time: Time::new(60, 0),
                current_score: Score::new(1, 1),
                scored: true,
            }),
            Incident::Penalty(PenaltyIncident {
                participant: scorer.clone(),
                team: home.clone(),
                time: Time::new(70, 0),
                current_score: Score::new(1, 1),
                scored: false,
            }),
            Incident::Card(CardIncident {
                participant: keeper.clone(),
                team: away.clone(),
                time: Time::new(75, 0),
                kind: CardKind::RedAuto,
            }),
            Incident::Substitution(SubstitutionIncident {
                participant: scorer.clone(),
                team: home.clone(),
                time: Time::new(80, 0),
                participant_in: keeper.clone(),
            }),
        ];
        let data = MatchData {
            incidents,
            ..data
        };
        let plan = plan_document(&data);

        assert_eq!(plan.body.len(), data.incidents.len());
        let keys: Vec<String> = plan.body.iter().map(|m| m.template_key().to_string()).collect();
        assert_eq!(
            keys,
            vec![
                "goal.solo_play",
                "goal.penalty",
                "missed_penalty",
                "card.red_auto",
                "substitution"
            ]
        );

        match &plan.body[1] {
            Message::Goal(goal) => {
                assert!(goal.assistance.is_none());
                assert_eq!(goal.current_score, Score::new(1, 1));
                assert!(Arc::ptr_eq(&goal.team, &away));
            }
            other => panic!("expected goal, got {:?}", other),
        }
        match &plan.body[4] {
            Message::Substitution(sub) => {
                assert_eq!(sub.participant_out, scorer);
                assert_eq!(sub.participant_in, keeper);
            }
            other => panic!("expected substitution, got {:?}", other),
        }
        assert_eq!(plan.body[2].kind(), MessageKind::MissedPenalty);
        let times: Vec<u32> = plan.body.iter().filter_map(|m| m.time()).map(|t| t.base).collect();
        assert_eq!(times, vec![23, 60, 70, 75, 80]);
    }
}
