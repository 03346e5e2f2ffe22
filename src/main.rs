mod analyzer;
mod error;
mod loader;
mod models;
mod report;

use analyzer::CandidateAnalyzer;
use anyhow::{Context, Result};
use clap::{Arg, ArgAction, ArgMatches, Command};
use loader::CandidateLoader;
use log::LevelFilter;
use models::Config;
use std::path::Path;

const DEFAULT_CONFIG_FILE: &str = "academy.toml";

fn build_cli() -> Command {
    Command::new("academy-candidates")
        .version("1.0")
        .about("Summarizes academy candidates, exports a sorted CSV and finds the instructors")
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("Configuration file path (used only if it exists)")
                .default_value(DEFAULT_CONFIG_FILE),
        )
        .arg(
            Arg::new("input")
                .short('i')
                .long("input")
                .value_name("FILE")
                .help("Candidate file to read, overrides input_file"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("FILE")
                .help("CSV file to write, overrides output_file"),
        )
        .arg(
            Arg::new("init-config")
                .long("init-config")
                .help("Write the default configuration file and exit")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Increase log verbosity (repeatable)")
                .action(ArgAction::Count),
        )
}

fn level_from_verbosity(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn resolve_config(matches: &ArgMatches) -> Result<Config> {
    let config_file = matches
        .get_one::<String>("config")
        .map(String::as_str)
        .unwrap_or(DEFAULT_CONFIG_FILE);

    let config = if Path::new(config_file).exists() {
        log::info!("Loading configuration from: {}", config_file);
        Config::load_from_file(config_file)
            .with_context(|| format!("Failed to load configuration: {}", config_file))?
    } else {
        log::debug!("No configuration at {}, using defaults", config_file);
        Config::default()
    };

    Ok(config.with_overrides(
        matches.get_one::<String>("input").map(String::as_str),
        matches.get_one::<String>("output").map(String::as_str),
    ))
}

/// Load, summarize, export and pick instructors; returns the console text.
fn run(config: &Config) -> Result<String> {
    // Step 1: Load candidates and the distinct states
    let (candidates, states) = CandidateLoader::new()
        .load_file(&config.input_file)
        .with_context(|| format!("Failed to load candidates from {}", config.input_file))?;

    // Step 2: Aggregate per position and render the summary
    let analyzer = CandidateAnalyzer::new(&candidates);
    let metrics = analyzer.calculate_metrics();

    let mut output = report::render_report(&metrics, candidates.len(), states.len());

    // Step 3: Export the name-sorted CSV, replacing any previous file
    report::generate_sorted_csv(&candidates, Path::new(&config.output_file))
        .with_context(|| format!("Failed to write {}", config.output_file))?;
    output.push_str(&report::render_export_notice(&config.output_file));

    // Step 4: Pick the instructors
    let picks = analyzer.find_instructors();
    output.push_str(&report::render_instructors(&picks));

    Ok(output)
}

fn main() -> Result<()> {
    let matches = build_cli().get_matches();

    env_logger::Builder::new()
        .filter_level(level_from_verbosity(matches.get_count("verbose")))
        .parse_default_env()
        .init();

    if matches.get_flag("init-config") {
        let config_file = matches
            .get_one::<String>("config")
            .map(String::as_str)
            .unwrap_or(DEFAULT_CONFIG_FILE);
        Config::default().save_to_file(config_file)?;
        println!("Wrote default configuration to {}", config_file);
        return Ok(());
    }

    // Load configuration, command line flags taking precedence
    let config = resolve_config(&matches)?;
    print!("{}", run(&config)?);
    Ok(())
}
