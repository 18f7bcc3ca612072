//! Brainrot Wordle - CLI
//!
//! Slang Wordle with a full-screen TUI and a line-based simple mode.

use anyhow::{Context, Result};
use brainrot_wordle::{
    commands::run_simple,
    core::Answer,
    engine::{EngineConfig, EventQueue, GuessEngine, HintBannerPolicy, HintMode, RngPicker},
    interactive::{App, run_tui},
    wordlists::{Entry, WordSource, loader::load_from_file},
};
use clap::{Parser, Subcommand};
use env_logger::{Builder, Target};
use log::LevelFilter;
use std::fs::File;
use std::path::Path;

#[derive(Parser)]
#[command(
    name = "brainrot_wordle",
    about = "Wordle for slang words and phrases, with staged hints",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default, slang dictionary) or path to file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Hints: full (default, letter then description), letter, off
    #[arg(long, global = true, default_value = "full")]
    hints: String,

    /// Description banner: stage-or-end (default) or stage
    #[arg(long, global = true, default_value = "stage-or-end")]
    hint_banner: String,

    /// Seed for reproducible answer selection
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Play a fixed answer instead of a random one
    #[arg(short, long, global = true)]
    answer: Option<String>,

    /// Log level: off, error, warn (default), info, debug, trace
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based, no TUI)
    Simple,
}

/// Initialize `env_logger`; `RUST_LOG` overrides the level flag when set
fn init_logger(level: &str, file: Option<&Path>) -> Result<()> {
    let level = level.parse::<LevelFilter>().unwrap_or(LevelFilter::Warn);

    let mut builder = Builder::new();
    builder.filter_level(level).parse_default_env();

    if let Some(path) = file {
        let file = File::create(path)
            .with_context(|| format!("Failed to create log file {}", path.display()))?;
        builder.target(Target::Pipe(Box::new(file)));
    }

    builder.format_timestamp_millis().try_init().ok();
    Ok(())
}

/// Load the word source based on the -w flag
fn load_source(wordlist: &str) -> Result<WordSource> {
    match wordlist {
        "embedded" => Ok(WordSource::embedded()),
        path => load_from_file(path).with_context(|| format!("Failed to load wordlist {path}")),
    }
}

fn build_engine(cli: &Cli) -> Result<GuessEngine<RngPicker, EventQueue>> {
    let source = load_source(&cli.wordlist)?;
    let config = EngineConfig {
        hint_mode: HintMode::from_name(&cli.hints),
        banner_policy: HintBannerPolicy::from_name(&cli.hint_banner),
        ..EngineConfig::default()
    };
    let picker = cli.seed.map_or_else(RngPicker::from_os_rng, RngPicker::seeded);

    if let Some(text) = &cli.answer {
        let answer = Answer::new(text).map_err(|e| anyhow::anyhow!("Invalid answer: {e}"))?;
        let hint = source.hint_for(answer.text()).map(str::to_string);
        return Ok(GuessEngine::with_entry(
            Entry { answer, hint },
            config,
            picker,
            EventQueue::new(),
        ));
    }

    GuessEngine::new(source, config, picker, EventQueue::new())
        .with_context(|| format!("No playable answers in wordlist {}", cli.wordlist))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logger(&cli.log_level, cli.log_file.as_deref().map(Path::new))?;

    let mut engine = build_engine(&cli)?;
    log::info!("Starting game with {} candidate answers", engine.source().len());

    // Default to Play mode if no command given
    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_tui(App::new(engine)),
        Commands::Simple => run_simple(&mut engine).map_err(|e| anyhow::anyhow!(e)),
    }
}
