//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use crate::core::{Word, normalize};
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file
///
/// Returns a vector of valid Word instances, skipping blank lines and any entry
/// that is not a single word.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use word_scramble::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/start.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;
    Ok(words_from_lines(&content))
}

/// Load every non-blank line of a file, normalized
///
/// Unlike [`load_from_file`] this keeps entries as plain strings, which is what a
/// dictionary needs.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
pub fn load_lines<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;

    Ok(content
        .lines()
        .map(normalize)
        .filter(|line| !line.is_empty())
        .collect())
}

/// Parse newline-separated text into words
#[must_use]
pub fn words_from_lines(content: &str) -> Vec<Word> {
    content
        .lines()
        .filter_map(|line| Word::new(line).ok())
        .collect()
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use word_scramble::wordlists::loader::words_from_slice;
/// use word_scramble::wordlists::START_WORDS;
///
/// let words = words_from_slice(START_WORDS);
/// assert_eq!(words.len(), START_WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn temp_file(name: &str, content: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!(
            "word_scramble_{name}_{}.txt",
            std::process::id()
        ));
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn words_from_slice_converts_valid_words() {
        let input = &["silkworm", "Balloon", "plates"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "silkworm");
        assert_eq!(words[1].text(), "balloon");
        assert_eq!(words[2].text(), "plates");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let input = &["silkworm", "", "two words", "plates"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "silkworm");
        assert_eq!(words[1].text(), "plates");
    }

    #[test]
    fn words_from_lines_skips_trailing_blank_line() {
        let words = words_from_lines("silkworm\nballoon\n\n");
        assert_eq!(words.len(), 2);
    }

    #[test]
    fn words_from_slice_empty() {
        let input: &[&str] = &[];
        assert!(words_from_slice(input).is_empty());
    }

    #[test]
    fn load_from_file_reads_words() {
        let path = temp_file("roots", "Silkworm\r\n  balloon \n\nplates\n");
        let words = load_from_file(&path).unwrap();
        fs::remove_file(&path).ok();

        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["silkworm", "balloon", "plates"]);
    }

    #[test]
    fn load_lines_normalizes() {
        let path = temp_file("dict", "Plate\n\n  SILK\n");
        let lines = load_lines(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(lines, ["plate", "silk"]);
    }

    #[test]
    fn load_from_missing_file_errors() {
        assert!(load_from_file("/nonexistent/start.txt").is_err());
        assert!(load_lines("/nonexistent/dictionary.txt").is_err());
    }

    #[test]
    fn load_from_embedded_start_words() {
        use crate::wordlists::START_WORDS;

        let words = words_from_slice(START_WORDS);
        assert_eq!(words.len(), START_WORDS.len());
    }
}
