//! Display functions for game and command results

use super::formatters::{create_progress_bar, length_badge, signed, spaced_letters};
use crate::commands::{CheckResult, SolutionsResult};
use crate::core::ValidationOutcome;
use crate::session::GameSession;
use colored::Colorize;

/// Print the root word for a new game
pub fn print_root_banner(session: &GameSession) {
    println!("{}", "─".repeat(60).cyan());
    println!(
        "Root word: {}",
        spaced_letters(session.root().text()).bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());
    println!();
}

/// Print the result of a submission
pub fn print_outcome(outcome: ValidationOutcome, session: &GameSession) {
    match outcome.alert(session.root().text()) {
        None => {
            let word = session.used_words().first().map_or("", String::as_str);
            println!(
                "{} {} {}  {}",
                "✓".green().bold(),
                length_badge(word.chars().count()),
                word.bright_white().bold(),
                format!("Score: {}", session.score()).bright_cyan()
            );
        }
        Some(alert) => {
            println!("{} {}", "✗".red().bold(), alert.title.red().bold());
            println!("  {}", alert.message);

            let delta = outcome.score_delta();
            if delta == 0 {
                println!("  {}", format!("Score: {}", session.score()).bright_black());
            } else {
                println!(
                    "  {}",
                    format!("Score: {} ({})", session.score(), signed(delta)).yellow()
                );
            }
        }
    }
    println!();
}

/// Print every word found so far, most recent first
pub fn print_used_words(session: &GameSession) {
    if session.used_words().is_empty() {
        println!("No words yet. Root word is {}\n", session.root().text().bright_yellow());
        return;
    }

    println!(
        "\n{} {} words, score {}",
        "📝".bright_white(),
        session.words_found(),
        session.score().to_string().bright_cyan().bold()
    );
    for word in session.used_words() {
        println!("   {} {}", length_badge(word.chars().count()), word);
    }
    println!();
}

/// Print the result of checking one word
pub fn print_check_result(result: &CheckResult) {
    println!(
        "\nChecking {} against {}",
        result.word.bright_white().bold(),
        result.root.bright_yellow().bold()
    );

    match result.outcome {
        None => println!("{}", "Nothing to check: the word is blank".bright_black()),
        Some(ValidationOutcome::Accepted) => {
            println!(
                "{} {}",
                "✅ Accepted".green().bold(),
                format!("(score {})", signed(result.score_delta())).bright_black()
            );
        }
        Some(outcome) => {
            if let Some(alert) = outcome.alert(&result.root) {
                println!("{} {}", "❌".red(), alert.title.red().bold());
                println!("   {}", alert.message);
            }
            println!(
                "   {}",
                format!("(score {})", signed(result.score_delta())).bright_black()
            );
        }
    }
}

/// Print every word that can be made from a root
pub fn print_solutions(result: &SolutionsResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "SOLUTIONS FOR".bright_cyan().bold(),
        spaced_letters(&result.root).bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n📊 {} words found in {} scanned ({:.2}s)",
        result.words.len().to_string().bright_yellow().bold(),
        result.scanned,
        result.duration.as_secs_f64()
    );

    let total = result.words.len() as f64;
    for (len, words) in result.by_length() {
        let bar = create_progress_bar(words.len() as f64, total, 20);
        println!(
            "\n{} {} {} {}",
            length_badge(len),
            bar.green(),
            words.len(),
            if words.len() == 1 { "word" } else { "words" }
        );
        for chunk in words.chunks(8) {
            println!("   {}", chunk.join("  "));
        }
    }
    println!();
}
