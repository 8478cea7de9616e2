//! Raw match records as delivered by the match-data feed.
//!
//! These types mirror the JSON document one-to-one and carry no
//! interpretation; the correlator turns them into domain values.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// The feed writes ids and minutes either as numbers or as numeric strings.
#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(u64),
    String(String),
}

impl NumberOrString {
    fn into_u64<E: serde::de::Error>(self) -> Result<u64, E> {
        match self {
            Self::Number(n) => Ok(n),
            Self::String(s) => s
                .trim()
                .parse()
                .map_err(|_| E::custom(format!("expected a number, got '{}'", s))),
        }
    }
}

fn de_u64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    NumberOrString::deserialize(deserializer)?.into_u64()
}

fn de_opt_u64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u64>, D::Error> {
    Option::<NumberOrString>::deserialize(deserializer)?
        .map(NumberOrString::into_u64)
        .transpose()
}

fn de_u32<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    let value = de_u64(deserializer)?;
    u32::try_from(value).map_err(serde::de::Error::custom)
}

fn de_opt_u32<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u32>, D::Error> {
    de_opt_u64(deserializer)?
        .map(|v| u32::try_from(v).map_err(serde::de::Error::custom))
        .transpose()
}

/// Team descriptor, keyed by side in [`RawMatch::participants`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawTeam {
    #[serde(deserialize_with = "de_u64")]
    pub id: u64,
    pub name: String,
    #[serde(deserialize_with = "de_u64")]
    pub country_id: u64,
    pub country_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawCountry {
    #[serde(deserialize_with = "de_u64")]
    pub id: u64,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPerson {
    #[serde(deserialize_with = "de_u64")]
    pub id: u64,
    pub full_name: String,
    #[serde(default)]
    pub countries: Vec<RawCountry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawLineupEntry {
    pub participant: RawPerson,
    #[serde(default, deserialize_with = "de_opt_u64")]
    pub lineup_position_id: Option<u64>,
    #[serde(default, deserialize_with = "de_opt_u32")]
    pub number: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawIncidentType {
    pub name: String,
}

/// The person an incident is about. Match-level events (extended time)
/// have no participant id.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawIncidentParticipant {
    #[serde(default, deserialize_with = "de_opt_u64")]
    pub id: Option<u64>,
    #[serde(default)]
    pub full_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawTeamRef {
    #[serde(deserialize_with = "de_u64")]
    pub id: u64,
}

/// Grouping that names the team an incident is attributed to.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawEventParticipant {
    #[serde(default)]
    pub participant: Vec<RawTeamRef>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawIncident {
    #[serde(deserialize_with = "de_u64")]
    pub id: u64,
    #[serde(default, deserialize_with = "de_opt_u64")]
    pub parent_id: Option<u64>,
    #[serde(rename = "type")]
    pub incident_type: RawIncidentType,
    #[serde(deserialize_with = "de_u32")]
    pub time: u32,
    #[serde(default, deserialize_with = "de_opt_u32")]
    pub added_time: Option<u32>,
    /// Running score after the incident, `"H:A"`.
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub participant: RawIncidentParticipant,
    #[serde(default)]
    pub event_participant: RawEventParticipant,
}

impl RawIncident {
    pub fn type_name(&self) -> &str {
        &self.incident_type.name
    }

    /// Team id of the event-participant grouping, if any.
    pub fn team_id(&self) -> Option<u64> {
        self.event_participant.participant.first().map(|t| t.id)
    }
}

/// A whole match document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawMatch {
    pub participants: HashMap<String, RawTeam>,
    #[serde(default)]
    pub lineup: HashMap<String, Vec<RawLineupEntry>>,
    /// Per side, a table of score entries; key `"1"` holds the final score.
    pub score: HashMap<String, HashMap<String, serde_json::Value>>,
    pub venue_name: String,
    pub venue_town: String,
    #[serde(deserialize_with = "de_u32")]
    pub venue_capacity: u32,
    #[serde(default, deserialize_with = "de_opt_u32")]
    pub venue_attendance: Option<u32>,
    #[serde(default)]
    pub incidents: Vec<RawIncident>,
}

impl RawMatch {
    pub fn from_json_str(input: &str) -> Result<RawMatch, FeedError> {
        Ok(serde_json::from_str(input)?)
    }

    pub fn load(path: &Path) -> Result<RawMatch, FeedError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Reads one entry of a side's score table. Entries may be numbers,
    /// numeric strings or null.
    pub fn score_entry(&self, side_key: &str, entry: &str) -> Option<u32> {
        match self.score.get(side_key)?.get(entry)? {
            serde_json::Value::Number(n) => n.as_u64().and_then(|v| u32::try_from(v).ok()),
            serde_json::Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn incident_accepts_numbers_and_strings() {
        let json = r#"{
            "id": "17",
            "parentId": 16,
            "type": {"name": "Assistance"},
            "time": "88",
            "addedTime": null,
            "value": null,
            "participant": {"id": "204", "fullName": "Provod Lukáš"},
            "eventParticipant": {"participant": [{"id": 1}]}
        }"#;
        let incident: RawIncident = serde_json::from_str(json).unwrap();
        assert_eq!(incident.id, 17);
        assert_eq!(incident.parent_id, Some(16));
        assert_eq!(incident.time, 88);
        assert_eq!(incident.added_time, None);
        assert_eq!(incident.participant.id, Some(204));
        assert_eq!(incident.team_id(), Some(1));
        assert_eq!(incident.type_name(), "Assistance");
    }

    #[test]
    fn incident_without_participant_or_grouping() {
        let json = r#"{
            "id": 3,
            "parentId": null,
            "type": {"name": "Extended time first half"},
            "time": 45,
            "addedTime": 2,
            "participant": {"id": null, "fullName": null},
            "eventParticipant": {"participant": []}
        }"#;
        let incident: RawIncident = serde_json::from_str(json).unwrap();
        assert_eq!(incident.added_time, Some(2));
        assert!(incident.participant.id.is_none());
        assert!(incident.team_id().is_none());
        assert!(incident.value.is_none());
    }

    #[test]
    fn non_numeric_id_is_rejected() {
        let json = r#"{
            "id": "abc",
            "type": {"name": "Goal"},
            "time": 1
        }"#;
        assert!(serde_json::from_str::<RawIncident>(json).is_err());
    }

    #[test]
    fn score_entries_tolerate_strings_and_nulls() {
        let json = r#"{
            "participants": {},
            "score": {"0": {"1": 2, "2": null}, "1": {"1": "1"}},
            "venue_name": "Andrův stadion",
            "venue_town": "Olomouc",
            "venue_capacity": "12483",
            "venue_attendance": null
        }"#;
        let raw = RawMatch::from_json_str(json).unwrap();
        assert_eq!(raw.score_entry("0", "1"), Some(2));
        assert_eq!(raw.score_entry("0", "2"), None);
        assert_eq!(raw.score_entry("1", "1"), Some(1));
        assert_eq!(raw.score_entry("2", "1"), None);
        assert_eq!(raw.venue_capacity, 12483);
        assert!(raw.venue_attendance.is_none());
        assert!(raw.incidents.is_empty());
    }

    #[test]
    fn invalid_document_is_a_json_error() {
        let err = RawMatch::from_json_str("{\"participants\": 5}").unwrap_err();
        assert!(matches!(err, FeedError::Json(_)));
    }
}
