//! Formatting utilities for terminal output

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a difficulty score as a bar
///
/// 60 is roughly the difficulty of a long, high-value word; anything above
/// renders as a full bar.
#[must_use]
pub fn difficulty_bar(difficulty: f64, width: usize) -> String {
    let max_difficulty = 60.0;
    create_progress_bar(difficulty, max_difficulty, width)
}

#[cfg(test)]
mod tests {
    use super::*;

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
    fn progress_bar_clamps_overflow() {
        let bar = create_progress_bar(250.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn difficulty_bar_monotone() {
        let low = difficulty_bar(5.0, 20);
        let high = difficulty_bar(40.0, 20);
        assert!(low.matches('█').count() < high.matches('█').count());
    }
}
