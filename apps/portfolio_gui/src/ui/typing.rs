//! Character-by-character reveal for the hero tagline.

use std::time::Duration;

pub const TYPING_STEP: Duration = Duration::from_millis(100);

/// The part of `text` visible after `elapsed`: one more character per step,
/// starting from nothing.
pub fn typed_prefix(text: &str, elapsed: Duration) -> &str {
    let shown = (elapsed.as_millis() / TYPING_STEP.as_millis()) as usize;
    match text.char_indices().nth(shown) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}

pub fn typing_finished(text: &str, elapsed: Duration) -> bool {
    typed_prefix(text, elapsed).len() == text.len()
}

#[cfg(test)]
#[path = "../tests/typing_tests.rs"]
mod tests;
