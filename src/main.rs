use clap::Parser;
use std::path::Path;
use tracing::{debug, Level};

use strdist::{
    damerau_levenshtein_with, levenshtein_distance, levenshtein_distance_utf16, Algorithm,
    CompareConfig, DamerauOptions, EditDistance, SimilarityResult,
};

mod cli;
use cli::display::*;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

/// Logs go to stderr so stdout stays machine-readable.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(verbose > 1)
        .init();
}

fn run(command: Commands) -> Result<(), String> {
    match command {
        Commands::Levenshtein { a, b, utf16 } => {
            let distance = if utf16 {
                levenshtein_distance_utf16(&a, &b)
            } else {
                levenshtein_distance(&a, &b)
            };
            println!("{}", distance);
            Ok(())
        }
        Commands::Damerau {
            a,
            b,
            limit,
            early_exit,
        } => {
            let options = DamerauOptions { limit, early_exit };
            let result = damerau_levenshtein_with(&a, &b, &options);
            print_edit_distance(&result);
            Ok(())
        }
        Commands::Compare {
            a,
            b,
            algorithm,
            case_sensitive,
            normalize,
            config,
            json,
        } => {
            let config = resolve_config(
                config.as_deref(),
                algorithm.as_deref(),
                case_sensitive,
                normalize,
            )?;
            debug!(
                algorithm = %config.algorithm,
                options = ?config.options,
                damerau = ?config.damerau,
                "compare"
            );
            let result = config.compare(&a, &b);
            if json {
                let out = serde_json::to_string_pretty(&result)
                    .map_err(|e| format!("Failed to serialize result: {}", e))?;
                println!("{}", out);
            } else {
                print_similarity(&a, &b, config.algorithm, &result);
            }
            Ok(())
        }
    }
}

/// Config file first, then command-line flags on top.
fn resolve_config(
    path: Option<&Path>,
    algorithm: Option<&str>,
    case_sensitive: bool,
    normalize: bool,
) -> Result<CompareConfig, String> {
    let mut config = match path {
        Some(path) => CompareConfig::load(path).map_err(|e| e.to_string())?,
        None => CompareConfig::default(),
    };
    if let Some(name) = algorithm {
        config.algorithm = name.parse::<Algorithm>().map_err(|e| e.to_string())?;
    }
    // Boolean flags can only switch a setting on.
    config.options.case_sensitive |= case_sensitive;
    config.options.normalize |= normalize;
    Ok(config)
}

fn print_edit_distance(result: &EditDistance) {
    println!("steps:      {}", result.steps);
    println!("relative:   {:.4}", result.relative);
    println!("similarity: {:.4}", result.similarity);
}

fn print_similarity(a: &str, b: &str, algorithm: Algorithm, result: &SimilarityResult) {
    let max_input = BOX_WIDTH.saturating_sub(14);
    section_top(algorithm.as_str());
    field("a", &truncate(a, max_input));
    field("b", &truncate(b, max_input));
    field("distance", &themed(CYAN, &[BOLD], &format!("{}", result.distance)));
    field("similarity", &similarity_bar(result.similarity));
    section_bot();
}
