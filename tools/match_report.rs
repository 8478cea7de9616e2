/// Match Report. Generates a Czech report for one match-data file, or
/// checks a whole directory of them.
///
/// The realizer API key is read from `GENJA_API_KEY` (a `.env` file in the
/// working directory is honoured).

use anyhow::{Context, Result};
use clap::Parser;
use match_reporter::core::batch::scan_directory;
use match_reporter::core::pipeline::{ReportEngine, DEFAULT_SEED};
use match_reporter::core::realizer::{
    render_plain, GeneeaClient, RealizeRequest, Realizer, RealizerConfig,
};
use match_reporter::schema::feed::RawMatch;
use match_reporter::telemetry::{get_subscriber, init_subscriber};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "match_report")]
#[command(about = "Generate Czech football match reports", long_about = None)]
struct Cli {
    /// Match-data JSON file
    #[arg(long, default_value = "0Ao9H20P.json")]
    match_data: PathBuf,

    /// Run every file in the match file's directory through the pipeline
    /// and list the ones that fail (with --offline, without the realizer)
    #[arg(long)]
    test: bool,

    /// Print the lexicalized text instead of calling the realizer
    #[arg(long)]
    offline: bool,

    /// Seed for template and variant selection
    #[arg(long, default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Extra RON template file merged over the built-in templates
    /// (repeatable)
    #[arg(long)]
    templates: Vec<PathBuf>,

    /// Print the document plan as RON
    #[arg(long)]
    dump_plan: bool,

    /// Log filter, e.g. "info" or "match_reporter=debug"
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    init_subscriber(get_subscriber(&cli.log_level, std::io::stderr))
        .context("failed to install log subscriber")?;

    let mut builder = ReportEngine::builder().seed(cli.seed);
    for path in &cli.templates {
        builder = builder.templates_path(path);
    }
    let engine = builder.build().context("failed to build report engine")?;

    if cli.test {
        let dir = match cli.match_data.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let realizer = if cli.offline {
            None
        } else {
            Some(GeneeaClient::new(RealizerConfig::from_env()?)?)
        };
        let report = scan_directory(&engine, dir, realizer.as_ref().map(|r| r as &dyn Realizer))
            .with_context(|| format!("failed to scan {}", dir.display()))?;
        println!("{}", report.verdict());
        return Ok(());
    }

    let raw = RawMatch::load(&cli.match_data)
        .with_context(|| format!("failed to load {}", cli.match_data.display()))?;
    let (match_data, plan) = engine
        .plan(&raw)
        .with_context(|| format!("failed to plan {}", cli.match_data.display()))?;
    tracing::debug!("\n{}", match_data);

    if cli.dump_plan {
        let pretty = ron::ser::to_string_pretty(&plan, ron::ser::PrettyConfig::default())
            .context("failed to serialize document plan")?;
        println!("{}", pretty);
    }

    let report = engine.lexicalize(&plan)?;
    if cli.offline {
        println!("{}", render_plain(&report));
        return Ok(());
    }

    let config = RealizerConfig::from_env()?;
    let realizer = GeneeaClient::new(config)?;
    let article = realizer
        .realize(&RealizeRequest::from_report(&report))
        .with_context(|| format!("realizer call to {} failed", realizer.endpoint()))?;
    println!("{}", article);
    Ok(())
}
