//! Simple interactive CLI mode
//!
//! Text-based game loop without TUI

use crate::core::WordValidator;
use crate::dictionary::Dictionary;
use crate::output::{print_outcome, print_root_banner, print_used_words};
use crate::session::GameSession;
use crate::wordlists::RootWordPool;
use colored::Colorize;
use rand::Rng;
use std::io::{self, Write};
use tracing::warn;

/// A line of player input in simple mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimpleCommand {
    Quit,
    NewGame,
    Words,
    Help,
    /// Anything else is a word to submit
    Submit(String),
}

impl SimpleCommand {
    /// Parse a line of input; commands start with ':'
    ///
    /// # Examples
    /// ```
    /// use word_scramble::commands::SimpleCommand;
    ///
    /// assert_eq!(SimpleCommand::parse(":q"), SimpleCommand::Quit);
    /// assert_eq!(SimpleCommand::parse(" Silk "), SimpleCommand::Submit(" Silk ".to_string()));
    /// ```
    #[must_use]
    pub fn parse(input: &str) -> Self {
        match input.trim().to_lowercase().as_str() {
            ":quit" | ":q" | ":exit" => Self::Quit,
            ":new" | ":n" => Self::NewGame,
            ":words" | ":w" => Self::Words,
            ":help" | ":h" | ":?" => Self::Help,
            _ => Self::Submit(input.to_string()),
        }
    }
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple<D: Dictionary, R: Rng + ?Sized>(
    validator: &WordValidator<D>,
    pool: &RootWordPool,
    rng: &mut R,
) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Word Scramble - Simple Mode                  ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Make as many words as you can from the letters of the root word.");
    println!("Each letter can be used once per word, and words need at least 3 letters.\n");
    print_help();

    let mut session = GameSession::start(pool, rng);
    print_root_banner(&session);

    loop {
        let Some(input) = get_user_input("Word")? else {
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        };

        match SimpleCommand::parse(&input) {
            SimpleCommand::Quit => {
                println!(
                    "\n👋 Thanks for playing! Final score: {}\n",
                    session.score().to_string().bright_cyan().bold()
                );
                return Ok(());
            }
            SimpleCommand::NewGame => {
                session.new_game(pool, rng);
                println!("\n🔄 New game started!\n");
                print_root_banner(&session);
            }
            SimpleCommand::Words => print_used_words(&session),
            SimpleCommand::Help => print_help(),
            SimpleCommand::Submit(word) => match session.submit_word(&word, validator) {
                Ok(Some(outcome)) => print_outcome(outcome, &session),
                Ok(None) => {}
                Err(err) => {
                    warn!(error = %err, "dictionary lookup failed");
                    println!("{} {err}\n", "⚠ Dictionary unavailable:".yellow().bold());
                }
            },
        }
    }
}

fn print_help() {
    println!("Commands: ':new' for a new game, ':words' to list your words, ':quit' to exit\n");
}

/// Get user input with a prompt
///
/// Returns `None` at end of input.
fn get_user_input(prompt: &str) -> Result<Option<String>, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    if read == 0 {
        return Ok(None);
    }

    Ok(Some(input.trim_end_matches(['\r', '\n']).to_string()))
}
