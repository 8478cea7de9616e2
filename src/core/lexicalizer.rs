/// Lexicalization. Turns planned messages into annotated sentence text.
///
/// Each message passes through three stages, each its own type:
/// [`SelectedSentence`] (a phrasing has been drawn), [`FilledSentence`]
/// (every slot has its text) and [`AnnotatedSentence`] (morphology
/// directives applied). A stage can only be built from the one before it.
///
/// All choices draw from one caller-supplied random sequence in message
/// order, title first, slots left to right, so a seeded generator yields a
/// reproducible report.

use rand::distributions::{Distribution, WeightedIndex};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::grammar::{
    PlayerRole, SlotSource, TeamRole, Template, TemplateRepository, TemplateSegment,
};
use crate::core::morph::MorphParams;
use crate::schema::message::{DocumentPlan, Message, TemplateKey};
use crate::schema::team::Player;
use crate::schema::time::Time;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LexicalError {
    #[error("no sentence rule for '{0}'")]
    MissingRule(TemplateKey),
    #[error("rule '{0}' has no alternative with a positive weight")]
    NoAlternatives(TemplateKey),
    #[error("weights of rule '{0}' overflow u32")]
    WeightOverflow(TemplateKey),
    #[error("message '{key}' has no value for slot '{slot}'")]
    MissingSlot { key: TemplateKey, slot: String },
    #[error("lexeme '{0}' is unknown or has no forms")]
    UnknownLexeme(String),
}

/// Lexicalized report text, ready for the realizer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexicalizedReport {
    pub title: String,
    pub body: Vec<String>,
}

impl LexicalizedReport {
    /// Title and body sentences joined by single spaces.
    pub fn template_body(&self) -> String {
        std::iter::once(self.title.as_str())
            .chain(self.body.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Czech phrase for an incident time.
pub fn time_phrase(time: Time) -> String {
    if !time.is_stoppage() {
        format!("v {}. minutě", time.base)
    } else if time.is_first_half_stoppage() {
        format!("v {}. minutě nastavení prvního poločasu", time.added)
    } else {
        format!("v {}. minutě nastavení druhého poločasu", time.added)
    }
}

/// Ways to refer to a player: full name, family name and, when the jersey
/// number is known, "the player with number N".
pub fn player_variants(player: &Player) -> Vec<String> {
    let mut variants = vec![player.full_name.clone(), player.last_name().to_string()];
    if let Some(number) = player.number {
        variants.push(format!("hráč s číslem {}", number));
    }
    variants
}

/// Upper-cases the first letter and closes the sentence with a full stop.
fn finish_sentence(text: &str) -> String {
    let mut sentence = String::with_capacity(text.len() + 1);
    let mut capitalized = false;
    for c in text.chars() {
        if !capitalized && c.is_alphabetic() {
            sentence.extend(c.to_uppercase());
            capitalized = true;
        } else {
            sentence.push(c);
        }
    }
    sentence.push('.');
    sentence
}

/// A message paired with the phrasing drawn for it.
pub struct SelectedSentence<'a> {
    message: &'a Message,
    key: TemplateKey,
    template: &'a Template,
}

enum FilledSegment<'a> {
    Literal(&'a str),
    Slot { text: String, morph: &'a MorphParams },
}

/// Every slot has its text; morphology is not yet applied.
pub struct FilledSentence<'a> {
    segments: Vec<FilledSegment<'a>>,
}

/// Sentence text with morphology directives, not yet capitalized.
pub struct AnnotatedSentence {
    text: String,
}

impl<'a> SelectedSentence<'a> {
    pub fn key(&self) -> TemplateKey {
        self.key
    }

    /// Draws one variant per slot, left to right.
    pub fn fill<R: Rng + ?Sized>(
        self,
        lexicon: &TemplateRepository,
        rng: &mut R,
    ) -> Result<FilledSentence<'a>, LexicalError> {
        let template: &'a Template = self.template;
        let mut segments = Vec::with_capacity(template.segments.len());
        for segment in &template.segments {
            match segment {
                TemplateSegment::Literal(text) => segments.push(FilledSegment::Literal(text)),
                TemplateSegment::Slot(slot) => {
                    let variants = self.variants(&slot.source, lexicon)?;
                    let text = variants
                        .choose(rng)
                        .cloned()
                        .ok_or_else(|| self.missing(&slot.source))?;
                    segments.push(FilledSegment::Slot {
                        text,
                        morph: &slot.morph,
                    });
                }
            }
        }
        Ok(FilledSentence { segments })
    }

    fn missing(&self, source: &SlotSource) -> LexicalError {
        LexicalError::MissingSlot {
            key: self.key,
            slot: source.to_string(),
        }
    }

    fn variants(
        &self,
        source: &SlotSource,
        lexicon: &TemplateRepository,
    ) -> Result<Vec<String>, LexicalError> {
        let message = self.message;
        let variants = match (source, message) {
            (SlotSource::Team(TeamRole::Home), Message::Result(m)) => vec![m.team_home.name.clone()],
            (SlotSource::Team(TeamRole::Away), Message::Result(m)) => vec![m.team_away.name.clone()],
            (SlotSource::Team(TeamRole::Acting), Message::Goal(m)) => vec![m.team.name.clone()],
            (SlotSource::Team(TeamRole::Acting), Message::Card(m)) => vec![m.team.name.clone()],
            (SlotSource::Team(TeamRole::Acting), Message::Substitution(m)) => vec![m.team.name.clone()],
            (SlotSource::Team(TeamRole::Acting), Message::MissedPenalty(m)) => vec![m.team.name.clone()],

            (SlotSource::Player(PlayerRole::Participant), Message::Goal(m)) => player_variants(&m.participant),
            (SlotSource::Player(PlayerRole::Participant), Message::Card(m)) => player_variants(&m.participant),
            (SlotSource::Player(PlayerRole::Participant), Message::MissedPenalty(m)) => {
                player_variants(&m.participant)
            }
            (
                SlotSource::Player(PlayerRole::Participant | PlayerRole::Outgoing),
                Message::Substitution(m),
            ) => player_variants(&m.participant_out),
            (SlotSource::Player(PlayerRole::Incoming), Message::Substitution(m)) => {
                player_variants(&m.participant_in)
            }
            (SlotSource::Player(PlayerRole::Assistant), Message::Goal(m)) => match &m.assistance {
                Some(assistant) => player_variants(assistant),
                None => return Err(self.missing(source)),
            },

            (SlotSource::Time, _) => match message.time() {
                Some(time) => vec![time_phrase(time)],
                None => return Err(self.missing(source)),
            },
            (SlotSource::Score, Message::Result(m)) => vec![m.score.to_string()],
            (SlotSource::Score, Message::Goal(m)) => vec![m.current_score.to_string()],

            (SlotSource::Verb(name), _) => lexeme(lexicon.verb(name), name)?,
            (SlotSource::Word(name), _) => lexeme(lexicon.word(name), name)?,

            _ => return Err(self.missing(source)),
        };
        Ok(variants)
    }
}

fn lexeme(forms: Option<&[String]>, name: &str) -> Result<Vec<String>, LexicalError> {
    match forms {
        Some(forms) if !forms.is_empty() => Ok(forms.to_vec()),
        _ => Err(LexicalError::UnknownLexeme(name.to_string())),
    }
}

impl FilledSentence<'_> {
    pub fn annotate(self) -> AnnotatedSentence {
        let text = self
            .segments
            .into_iter()
            .map(|segment| match segment {
                FilledSegment::Literal(text) => text.to_string(),
                FilledSegment::Slot { text, morph } => morph.apply(&text),
            })
            .collect();
        AnnotatedSentence { text }
    }
}

impl AnnotatedSentence {
    pub fn finish(self) -> String {
        finish_sentence(&self.text)
    }
}

/// Lexicalizes document plans against a template repository.
pub struct Lexicalizer<'a> {
    repo: &'a TemplateRepository,
}

impl<'a> Lexicalizer<'a> {
    pub fn new(repo: &'a TemplateRepository) -> Self {
        Self { repo }
    }

    pub fn lexicalize<R: Rng + ?Sized>(
        &self,
        plan: &DocumentPlan,
        rng: &mut R,
    ) -> Result<LexicalizedReport, LexicalError> {
        let title = self.sentence(&plan.title, rng)?;
        let body = plan
            .body
            .iter()
            .map(|message| self.sentence(message, rng))
            .collect::<Result<Vec<_>, _>>()?;
        tracing::debug!(sentences = body.len() + 1, "plan lexicalized");
        Ok(LexicalizedReport { title, body })
    }

    /// Runs one message through every stage.
    pub fn sentence<R: Rng + ?Sized>(
        &self,
        message: &Message,
        rng: &mut R,
    ) -> Result<String, LexicalError> {
        let selected = self.select(message, rng)?;
        tracing::trace!(key = %selected.key(), "template selected");
        let filled = selected.fill(self.repo, rng)?;
        Ok(filled.annotate().finish())
    }

    /// Draws a phrasing for `message` by alternative weight.
    pub fn select<'m, R: Rng + ?Sized>(
        &self,
        message: &'m Message,
        rng: &mut R,
    ) -> Result<SelectedSentence<'m>, LexicalError>
    where
        'a: 'm,
    {
        let repo: &'a TemplateRepository = self.repo;
        let key = message.template_key();
        let rule = repo.rule(&key).ok_or(LexicalError::MissingRule(key))?;
        if rule.total_weight().is_none() {
            return Err(LexicalError::WeightOverflow(key));
        }
        let weights = WeightedIndex::new(rule.alternatives.iter().map(|a| a.weight))
            .map_err(|_| LexicalError::NoAlternatives(key))?;
        let alternative = &rule.alternatives[weights.sample(rng)];
        Ok(SelectedSentence {
            message,
            key,
            template: &alternative.template,
        })
    }
}
