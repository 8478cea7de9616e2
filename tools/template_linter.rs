/// Template Linter. Checks a sentence-template repository for coverage
/// and dangling lexicon references.
///
/// Usage: template_linter <templates.ron | dir> [--over-builtin]

use clap::Parser;
use match_reporter::core::grammar::TemplateRepository;
use std::path::{Path, PathBuf};
use std::process;

#[derive(Parser, Debug)]
#[command(name = "template_linter", about = "Lint Czech match-report templates")]
struct Args {
    /// A RON template file, or a directory searched recursively for them.
    path: PathBuf,

    /// Lint the files merged over the built-in templates instead of on
    /// their own (for override files).
    #[arg(long)]
    over_builtin: bool,
}

fn main() {
    let args = Args::parse();

    let mut repo = if args.over_builtin {
        match TemplateRepository::czech() {
            Ok(repo) => repo,
            Err(e) => {
                eprintln!("ERROR: Built-in templates are broken: {}", e);
                process::exit(1);
            }
        }
    } else {
        TemplateRepository::default()
    };

    let mut load_failures = 0usize;
    if args.path.is_file() {
        match TemplateRepository::load_from_ron(&args.path) {
            Ok(loaded) => repo.merge(loaded),
            Err(e) => {
                eprintln!("ERROR: Failed to load template file: {}", e);
                process::exit(1);
            }
        }
    } else if args.path.is_dir() {
        load_failures = load_templates_recursive(&args.path, &mut repo);
    } else {
        eprintln!("ERROR: Path '{}' does not exist", args.path.display());
        process::exit(1);
    }

    println!(
        "Loaded {} sentence rules, {} verbs, {} words",
        repo.sentences.len(),
        repo.verbs.len(),
        repo.words.len()
    );

    let issues = repo.lint();
    let (errors, warnings): (Vec<_>, Vec<_>) = issues.iter().partition(|i| i.is_error());

    println!("\n=== Template Lint Report ===\n");

    if issues.is_empty() && load_failures == 0 {
        println!("All checks passed!");
    }

    for warning in &warnings {
        println!("WARNING: {}", warning);
    }

    for error in &errors {
        println!("ERROR: {}", error);
    }

    println!(
        "\nSummary: {} errors, {} warnings",
        errors.len() + load_failures,
        warnings.len()
    );

    if errors.is_empty() && load_failures == 0 {
        process::exit(0);
    } else {
        process::exit(1);
    }
}

/// Merges every `.ron` file under `dir` in path order. Returns the number
/// of files that failed to load.
fn load_templates_recursive(dir: &Path, repo: &mut TemplateRepository) -> usize {
    let mut failures = 0;
    let mut paths: Vec<PathBuf> = match std::fs::read_dir(dir) {
        Ok(entries) => entries.flatten().map(|e| e.path()).collect(),
        Err(e) => {
            eprintln!("  ERROR reading {}: {}", dir.display(), e);
            return 1;
        }
    };
    paths.sort();

    for path in paths {
        if path.is_dir() {
            failures += load_templates_recursive(&path, repo);
        } else if path.extension().and_then(|s| s.to_str()) == Some("ron") {
            match TemplateRepository::load_from_ron(&path) {
                Ok(loaded) => {
                    println!("  Loaded: {}", path.display());
                    repo.merge(loaded);
                }
                Err(e) => {
                    eprintln!("  ERROR loading {}: {}", path.display(), e);
                    failures += 1;
                }
            }
        }
    }
    failures
}
