/// Sentence templates and the lexicon: parsing, loading and linting.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

use crate::core::morph::{MorphError, MorphParams};
use crate::schema::message::{MessageKind, TemplateKey};

/// The Czech templates shipped with the crate.
const CZECH_TEMPLATES: &str = include_str!("../../templates/cs.ron");

#[derive(Debug, Error)]
pub enum GrammarError {
    #[error("template parse error: {0}")]
    TemplateParse(String),
    #[error("morphology error in '{slot}': {source}")]
    Morph {
        slot: String,
        #[source]
        source: MorphError,
    },
    #[error("template repository is incomplete: {}", .0.iter().map(|i| i.to_string()).collect::<Vec<_>>().join("; "))]
    Incomplete(Vec<LintIssue>),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON deserialization error: {0}")]
    Ron(#[from] ron::error::SpannedError),
}

/// Which team a `{team...}` slot refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TeamRole {
    Home,
    Away,
    /// The team the message's incident belongs to.
    Acting,
}

/// Which person a `{player...}` slot refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerRole {
    /// The message's main participant (scorer, booked player, player
    /// leaving the pitch).
    Participant,
    Assistant,
    Incoming,
    Outgoing,
}

/// Where the text of a slot comes from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SlotSource {
    Team(TeamRole),
    Player(PlayerRole),
    Time,
    Score,
    /// A verb lexeme from the lexicon: `{verb:goal}`.
    Verb(String),
    /// A noun/adjective lexeme from the lexicon: `{word:penalty}`.
    Word(String),
}

impl std::fmt::Display for SlotSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Team(TeamRole::Acting) => write!(f, "team"),
            Self::Team(TeamRole::Home) => write!(f, "team:home"),
            Self::Team(TeamRole::Away) => write!(f, "team:away"),
            Self::Player(PlayerRole::Participant) => write!(f, "player"),
            Self::Player(PlayerRole::Assistant) => write!(f, "player:assistant"),
            Self::Player(PlayerRole::Incoming) => write!(f, "player:in"),
            Self::Player(PlayerRole::Outgoing) => write!(f, "player:out"),
            Self::Time => write!(f, "time"),
            Self::Score => write!(f, "score"),
            Self::Verb(name) => write!(f, "verb:{}", name),
            Self::Word(name) => write!(f, "word:{}", name),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    pub source: SlotSource,
    pub morph: MorphParams,
}

/// A segment of a parsed template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TemplateSegment {
    /// Literal text, emitted as-is.
    Literal(String),
    /// A slot filled at lexicalization time: `{source}` or
    /// `{source|directive}`.
    Slot(Slot),
}

/// A parsed template as a sequence of segments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    pub segments: Vec<TemplateSegment>,
}

impl Template {
    /// Parse a template string into a sequence of segments.
    ///
    /// Syntax:
    /// - `{team:home}`, `{team:away}`, `{team}` → team name
    /// - `{player}`, `{player:assistant}`, `{player:in}`, `{player:out}` → person
    /// - `{time}`, `{score}` → incident time, score
    /// - `{verb:name}`, `{word:name}` → lexicon entry
    /// - `{...|case=acc,tense=past,ref=1,agr=1}` → slot with morphology
    /// - `{{` / `}}` → literal braces
    /// - Everything else → `Literal`
    pub fn parse(input: &str) -> Result<Template, GrammarError> {
        let mut segments = Vec::new();
        let mut literal_buf = String::new();
        let chars: Vec<char> = input.chars().collect();
        let len = chars.len();
        let mut i = 0;

        while i < len {
            if chars[i] == '{' {
                // Escaped brace
                if i + 1 < len && chars[i + 1] == '{' {
                    literal_buf.push('{');
                    i += 2;
                    continue;
                }

                if !literal_buf.is_empty() {
                    segments.push(TemplateSegment::Literal(std::mem::take(&mut literal_buf)));
                }

                let start = i + 1;
                let mut end = start;
                let mut closed = false;
                while end < len {
                    if chars[end] == '{' {
                        return Err(GrammarError::TemplateParse(
                            "nested braces are not allowed".to_string(),
                        ));
                    }
                    if chars[end] == '}' {
                        closed = true;
                        break;
                    }
                    end += 1;
                }

                if !closed {
                    return Err(GrammarError::TemplateParse("unclosed brace".to_string()));
                }

                let content: String = chars[start..end].iter().collect();
                if content.trim().is_empty() {
                    return Err(GrammarError::TemplateParse("empty braces".to_string()));
                }

                segments.push(TemplateSegment::Slot(Self::parse_slot(&content)?));
                i = end + 1;
            } else if chars[i] == '}' {
                if i + 1 < len && chars[i + 1] == '}' {
                    literal_buf.push('}');
                    i += 2;
                    continue;
                }
                return Err(GrammarError::TemplateParse(
                    "unmatched closing brace".to_string(),
                ));
            } else {
                literal_buf.push(chars[i]);
                i += 1;
            }
        }

        if !literal_buf.is_empty() {
            segments.push(TemplateSegment::Literal(literal_buf));
        }

        Ok(Template { segments })
    }

    fn parse_slot(content: &str) -> Result<Slot, GrammarError> {
        let (source, directive) = match content.split_once('|') {
            Some((source, directive)) => (source.trim(), Some(directive)),
            None => (content.trim(), None),
        };

        let morph = match directive {
            Some(d) => MorphParams::parse(d).map_err(|source| GrammarError::Morph {
                slot: content.to_string(),
                source,
            })?,
            None => MorphParams::default(),
        };

        Ok(Slot {
            source: Self::parse_source(source)?,
            morph,
        })
    }

    fn parse_source(source: &str) -> Result<SlotSource, GrammarError> {
        let (head, arg) = match source.split_once(':') {
            Some((head, arg)) => (head, Some(arg)),
            None => (source, None),
        };

        let parsed = match (head, arg) {
            ("team", None) => SlotSource::Team(TeamRole::Acting),
            ("team", Some("home")) => SlotSource::Team(TeamRole::Home),
            ("team", Some("away")) => SlotSource::Team(TeamRole::Away),
            ("player", None) => SlotSource::Player(PlayerRole::Participant),
            ("player", Some("assistant")) => SlotSource::Player(PlayerRole::Assistant),
            ("player", Some("in")) => SlotSource::Player(PlayerRole::Incoming),
            ("player", Some("out")) => SlotSource::Player(PlayerRole::Outgoing),
            ("time", None) => SlotSource::Time,
            ("score", None) => SlotSource::Score,
            ("verb", Some(name)) if !name.is_empty() => SlotSource::Verb(name.to_string()),
            ("word", Some(name)) if !name.is_empty() => SlotSource::Word(name.to_string()),
            _ => {
                return Err(GrammarError::TemplateParse(format!(
                    "unknown slot '{}'",
                    source
                )))
            }
        };
        Ok(parsed)
    }

    pub fn slots(&self) -> impl Iterator<Item = &Slot> {
        self.segments.iter().filter_map(|s| match s {
            TemplateSegment::Slot(slot) => Some(slot),
            TemplateSegment::Literal(_) => None,
        })
    }
}

/// A weighted phrasing within a sentence rule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alternative {
    pub weight: u32,
    pub template: Template,
}

/// All candidate phrasings for one (message kind, subtype) key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentenceRule {
    pub key: String,
    pub alternatives: Vec<Alternative>,
}

impl SentenceRule {
    /// Sum of the alternative weights, `None` when it does not fit a `u32`.
    pub fn total_weight(&self) -> Option<u32> {
        self.alternatives
            .iter()
            .try_fold(0u32, |sum, a| sum.checked_add(a.weight))
    }
}

/// Problems found by [`TemplateRepository::lint`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LintIssue {
    MissingRule(String),
    EmptyRule(String),
    UnknownVerb { rule: String, verb: String },
    UnknownWord { rule: String, word: String },
    EmptyLexeme(String),
    /// Alternative weights whose sum overflows `u32`.
    WeightOverflow(String),
    /// A rule no message can select. Harmless, reported as a warning.
    UnusedRule(String),
}

impl LintIssue {
    pub fn is_error(&self) -> bool {
        !matches!(self, Self::UnusedRule(_))
    }
}

impl std::fmt::Display for LintIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingRule(key) => write!(f, "no sentence rule for '{}'", key),
            Self::EmptyRule(key) => write!(f, "rule '{}' has no selectable alternative", key),
            Self::UnknownVerb { rule, verb } => {
                write!(f, "rule '{}' references unknown verb '{}'", rule, verb)
            }
            Self::UnknownWord { rule, word } => {
                write!(f, "rule '{}' references unknown word '{}'", rule, word)
            }
            Self::EmptyLexeme(name) => write!(f, "lexeme '{}' has no forms", name),
            Self::WeightOverflow(key) => write!(f, "weights of rule '{}' overflow u32", key),
            Self::UnusedRule(key) => write!(f, "rule '{}' is never selected", key),
        }
    }
}

/// Immutable store of sentence rules and the verb/word lexicon.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TemplateRepository {
    pub sentences: HashMap<String, SentenceRule>,
    pub verbs: FxHashMap<String, Vec<String>>,
    pub words: FxHashMap<String, Vec<String>>,
}

// The file format keeps alternatives as raw text; parsing happens on load.

#[derive(Debug, Deserialize)]
struct RonAlternative {
    #[serde(default = "default_weight")]
    weight: u32,
    text: String,
}

fn default_weight() -> u32 {
    1
}

#[derive(Debug, Deserialize)]
struct RonRepository {
    #[serde(default)]
    sentences: HashMap<String, Vec<RonAlternative>>,
    #[serde(default)]
    verbs: HashMap<String, Vec<String>>,
    #[serde(default)]
    words: HashMap<String, Vec<String>>,
}

impl TemplateRepository {
    /// The built-in Czech repository, validated.
    pub fn czech() -> Result<TemplateRepository, GrammarError> {
        let repo = Self::parse_ron(CZECH_TEMPLATES)?;
        repo.validate()?;
        Ok(repo)
    }

    /// Load a repository from a RON file. The result may be partial; call
    /// [`validate`](Self::validate) before using it on its own.
    pub fn load_from_ron(path: &Path) -> Result<TemplateRepository, GrammarError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse_ron(&contents)
    }

    /// Parse a repository from a RON string.
    pub fn parse_ron(input: &str) -> Result<TemplateRepository, GrammarError> {
        let raw: RonRepository = ron::from_str(input)?;

        let mut sentences = HashMap::new();
        for (key, ron_alternatives) in raw.sentences {
            let mut alternatives = Vec::with_capacity(ron_alternatives.len());
            for alt in ron_alternatives {
                alternatives.push(Alternative {
                    weight: alt.weight,
                    template: Template::parse(&alt.text)?,
                });
            }
            sentences.insert(key.clone(), SentenceRule { key, alternatives });
        }

        Ok(TemplateRepository {
            sentences,
            verbs: raw.verbs.into_iter().collect(),
            words: raw.words.into_iter().collect(),
        })
    }

    /// Merge another repository into this one. Rules and lexemes from
    /// `other` override those in `self` with the same name.
    pub fn merge(&mut self, other: TemplateRepository) {
        self.sentences.extend(other.sentences);
        self.verbs.extend(other.verbs);
        self.words.extend(other.words);
    }

    pub fn rule(&self, key: &TemplateKey) -> Option<&SentenceRule> {
        self.sentences.get(&key.to_string())
    }

    pub fn verb(&self, name: &str) -> Option<&[String]> {
        self.verbs.get(name).map(Vec::as_slice)
    }

    pub fn word(&self, name: &str) -> Option<&[String]> {
        self.words.get(name).map(Vec::as_slice)
    }

    /// Checks that every message key has a selectable rule and that every
    /// lexeme a template mentions exists.
    pub fn lint(&self) -> Vec<LintIssue> {
        let mut issues = Vec::new();
        let known: Vec<String> = MessageKind::all_template_keys()
            .iter()
            .map(|k| k.to_string())
            .collect();

        for key in &known {
            match self.sentences.get(key) {
                None => issues.push(LintIssue::MissingRule(key.clone())),
                Some(rule) if rule.alternatives.iter().all(|a| a.weight == 0) => {
                    issues.push(LintIssue::EmptyRule(key.clone()))
                }
                Some(_) => {}
            }
        }

        let mut rule_names: Vec<&String> = self.sentences.keys().collect();
        rule_names.sort();
        for name in rule_names {
            let rule = &self.sentences[name];
            if !known.contains(name) {
                issues.push(LintIssue::UnusedRule(name.clone()));
            }
            if rule.total_weight().is_none() {
                issues.push(LintIssue::WeightOverflow(name.clone()));
            }
            for slot in rule.alternatives.iter().flat_map(|a| a.template.slots()) {
                match &slot.source {
                    SlotSource::Verb(verb) if !self.verbs.contains_key(verb) => {
                        issues.push(LintIssue::UnknownVerb {
                            rule: name.clone(),
                            verb: verb.clone(),
                        })
                    }
                    SlotSource::Word(word) if !self.words.contains_key(word) => {
                        issues.push(LintIssue::UnknownWord {
                            rule: name.clone(),
                            word: word.clone(),
                        })
                    }
                    _ => {}
                }
            }
        }

        let mut lexemes: Vec<&String> = self
            .verbs
            .iter()
            .chain(self.words.iter())
            .filter(|(_, forms)| forms.is_empty())
            .map(|(name, _)| name)
            .collect();
        lexemes.sort();
        issues.extend(lexemes.into_iter().map(|n| LintIssue::EmptyLexeme(n.clone())));

        issues
    }

    pub fn validate(&self) -> Result<(), GrammarError> {
        let errors: Vec<LintIssue> = self.lint().into_iter().filter(LintIssue::is_error).collect();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(GrammarError::Incomplete(errors))
        }
    }
}
