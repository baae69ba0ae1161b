//! Formatting utilities for terminal output

/// Circled number for a word length, like the badges next to found words
///
/// Falls back to a parenthesized number past twenty.
#[must_use]
pub fn length_badge(len: usize) -> String {
    match len {
        1..=20 => char::from_u32(0x2460 + len as u32 - 1)
            .map_or_else(|| format!("({len})"), String::from),
        _ => format!("({len})"),
    }
}

/// Score with an explicit sign for non-zero changes
#[must_use]
pub fn signed(delta: i32) -> String {
    if delta > 0 {
        format!("+{delta}")
    } else {
        delta.to_string()
    }
}

/// Root word spaced out in capitals: `S I L K W O R M`
#[must_use]
pub fn spaced_letters(word: &str) -> String {
    word.to_uppercase()
        .chars()
        .map(String::from)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
