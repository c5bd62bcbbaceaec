//! Formatting utilities for terminal output

use crate::config::STARTING_SCORE;
use crate::core::Word;

/// Render a ladder as `cat → hat → hot`
#[must_use]
pub fn format_path(path: &[Word]) -> String {
    path.iter().map(Word::text).collect::<Vec<_>>().join(" → ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max).max(0.0) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// The round score as a bar out of the starting score, followed by the number
#[must_use]
pub fn score_bar(score: i32, width: usize) -> String {
    format!(
        "{} {score}",
        create_progress_bar(f64::from(score), f64::from(STARTING_SCORE), width)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(t).unwrap()).collect()
    }

    #[test]
    fn path_with_arrows() {
        assert_eq!(format_path(&words(&["cat", "hat", "hot"])), "cat → hat → hot");
    }

    #[test]
    fn path_single_and_empty() {
        assert_eq!(format_path(&words(&["cat"])), "cat");
        assert_eq!(format_path(&[]), "");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_clamps_negative() {
        assert_eq!(create_progress_bar(-5.0, 100.0, 4), "░░░░");
        assert_eq!(create_progress_bar(1.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn score_bar_shows_value() {
        assert_eq!(score_bar(100, 4), "████ 100");
        assert_eq!(score_bar(50, 4), "██░░ 50");
    }
}
