//! Word Scramble - CLI
//!
//! Word scramble game with TUI and CLI modes, plus helpers for checking words
//! and listing every word a root allows.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use word_scramble::{
    commands::{check_word, run_simple, run_solutions},
    config::GameConfig,
    logging,
    output::{print_check_result, print_solutions},
};

#[derive(Parser)]
#[command(
    name = "word_scramble",
    about = "Make as many words as you can from the letters of a root word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Root words: 'embedded' (default) or path to a file with one word per line
    #[arg(short, long, global = true, default_value = "embedded")]
    start_words: String,

    /// Dictionary: 'embedded' (default) or path to a file with one word per line
    #[arg(short, long, global = true, default_value = "embedded")]
    dictionary: String,

    /// Language tag for dictionary lookups
    #[arg(short, long, global = true, default_value = "en")]
    locale: String,

    /// Seed for root word selection (random when omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based game without TUI)
    Simple,

    /// Check a single word against a root word
    Check {
        /// The word to check
        word: String,

        /// Root word to check against
        #[arg(short, long)]
        root: String,

        /// Words already found, comma separated
        #[arg(short, long, value_delimiter = ',')]
        used: Vec<String>,
    },

    /// List every dictionary word a root word allows
    Solutions {
        /// Root word (random from the start words when omitted)
        #[arg(short, long)]
        root: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    // Logging to stderr would draw over the TUI
    if !matches!(command, Commands::Play) || cli.log_file.is_some() {
        logging::init(cli.verbose, cli.log_file.as_deref())?;
    }

    let config = GameConfig::new(&cli.start_words, &cli.dictionary, &cli.locale, cli.seed);

    match command {
        Commands::Play => run_play_command(&config),
        Commands::Simple => run_simple_command(&config),
        Commands::Check { word, root, used } => run_check_command(&config, &root, &used, &word),
        Commands::Solutions { root } => run_solutions_command(&config, root.as_deref()),
    }
}

fn run_play_command(config: &GameConfig) -> Result<()> {
    use word_scramble::interactive::{App, run_tui};

    let validator = config.validator()?;
    let pool = config.root_pool();
    let app = App::new(&validator, &pool, config.rng());
    run_tui(app)
}

fn run_simple_command(config: &GameConfig) -> Result<()> {
    let validator = config.validator()?;
    let pool = config.root_pool();
    let mut rng = config.rng();
    run_simple(&validator, &pool, &mut rng).map_err(|e| anyhow::anyhow!(e))
}

fn run_check_command(config: &GameConfig, root: &str, used: &[String], word: &str) -> Result<()> {
    let validator = config.validator()?;
    let result = check_word(root, used, word, &validator).map_err(|e| anyhow::anyhow!(e))?;
    print_check_result(&result);
    Ok(())
}

fn run_solutions_command(config: &GameConfig, root: Option<&str>) -> Result<()> {
    let validator = config.validator()?;

    let root = match root {
        Some(root) => root.to_string(),
        None => {
            let mut rng = config.rng();
            config.root_pool().choose(&mut rng).text().to_string()
        }
    };

    let result = run_solutions(&root, &validator, true).map_err(|e| anyhow::anyhow!(e))?;
    print_solutions(&result);
    Ok(())
}
