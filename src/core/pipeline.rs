/// The report pipeline: feed document → match data → document plan →
/// lexicalized text → realized article.

use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::correlator::{build_match_data, CorrelationError};
use crate::core::grammar::{GrammarError, TemplateRepository};
use crate::core::lexicalizer::{LexicalError, LexicalizedReport, Lexicalizer};
use crate::core::planner::plan_document;
use crate::core::realizer::{RealizeError, RealizeRequest, Realizer};
use crate::schema::feed::{FeedError, RawMatch};
use crate::schema::match_data::MatchData;
use crate::schema::message::DocumentPlan;

/// Seed used when the builder is not given one.
pub const DEFAULT_SEED: u64 = 10;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("feed error: {0}")]
    Feed(#[from] FeedError),
    #[error("correlation error: {0}")]
    Correlation(#[from] CorrelationError),
    #[error("template error: {0}")]
    Grammar(#[from] GrammarError),
    #[error("lexicalization error: {0}")]
    Lexical(#[from] LexicalError),
    #[error("realizer error: {0}")]
    Realize(#[from] RealizeError),
}

/// The top-level report engine. Built via `ReportEngine::builder()`.
pub struct ReportEngine {
    templates: TemplateRepository,
    seed: u64,
}

/// Builder for constructing a `ReportEngine`.
pub struct ReportEngineBuilder {
    seed: u64,
    template_paths: Vec<PathBuf>,
    /// Directly provided templates, replacing the built-in Czech set.
    templates: Option<TemplateRepository>,
}

impl ReportEngine {
    pub fn builder() -> ReportEngineBuilder {
        ReportEngineBuilder {
            seed: DEFAULT_SEED,
            template_paths: Vec::new(),
            templates: None,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn templates(&self) -> &TemplateRepository {
        &self.templates
    }

    /// Correlate and plan without lexicalizing.
    pub fn plan(&self, raw: &RawMatch) -> Result<(MatchData, DocumentPlan), PipelineError> {
        let match_data = build_match_data(raw)?;
        let plan = plan_document(&match_data);
        Ok((match_data, plan))
    }

    /// Lexicalize a plan. Every call starts a fresh sequence from the
    /// engine's seed, so the same plan always yields the same text.
    pub fn lexicalize(&self, plan: &DocumentPlan) -> Result<LexicalizedReport, PipelineError> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        Ok(Lexicalizer::new(&self.templates).lexicalize(plan, &mut rng)?)
    }

    pub fn generate(&self, raw: &RawMatch) -> Result<LexicalizedReport, PipelineError> {
        let (match_data, plan) = self.plan(raw)?;
        tracing::info!(
            home = %match_data.team_home.name,
            away = %match_data.team_away.name,
            score = %match_data.score,
            messages = plan.body.len(),
            "lexicalizing report"
        );
        self.lexicalize(&plan)
    }

    pub fn generate_file(&self, path: &Path) -> Result<LexicalizedReport, PipelineError> {
        tracing::debug!(path = %path.display(), "loading match data");
        let raw = RawMatch::load(path)?;
        self.generate(&raw)
    }

    /// Generate and hand the result to a realizer.
    pub fn realize<R: Realizer + ?Sized>(
        &self,
        raw: &RawMatch,
        realizer: &R,
    ) -> Result<String, PipelineError> {
        let report = self.generate(raw)?;
        let request = RealizeRequest::from_report(&report);
        Ok(realizer.realize(&request)?)
    }
}

impl ReportEngineBuilder {
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Merge a RON template file over the base templates. Later files
    /// override earlier ones.
    pub fn templates_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.template_paths.push(path.into());
        self
    }

    /// Provide templates directly instead of the built-in set.
    pub fn with_templates(mut self, templates: TemplateRepository) -> Self {
        self.templates = Some(templates);
        self
    }

    pub fn build(self) -> Result<ReportEngine, PipelineError> {
        let mut templates = match self.templates {
            Some(templates) => templates,
            None => TemplateRepository::czech()?,
        };

        for path in &self.template_paths {
            tracing::debug!(path = %path.display(), "merging template file");
            templates.merge(TemplateRepository::load_from_ron(path)?);
        }
        templates.validate()?;

        tracing::info!(
            rules = templates.sentences.len(),
            verbs = templates.verbs.len(),
            words = templates.words.len(),
            seed = self.seed,
            "report engine ready"
        );

        Ok(ReportEngine {
            templates,
            seed: self.seed,
        })
    }
}
