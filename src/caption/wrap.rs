//! Greedy caption wrapping.
//!
//! Words are added to the current line until the next word would exceed the
//! available width, then a new line starts. This is deliberately a plain
//! greedy fit, not a minimum-line or balanced-line optimizer — the bar
//! height arithmetic in [`calculations`](super::calculations) assumes
//! exactly this policy.

use super::measure::TextMeasurer;

/// Split `caption` into lines that fit within `available_width`.
///
/// Guarantees:
/// - every input word appears in exactly one output line, in original order,
///   single-space joined;
/// - a word wider than `available_width` is placed alone on its own line and
///   overflows (no hyphenation, no truncation);
/// - a caption with no words produces a single empty line, so the bar is
///   still drawn.
pub fn wrap_caption(
    caption: &str,
    available_width: u32,
    font_size: u32,
    measurer: &impl TextMeasurer,
) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in caption.split_whitespace() {
        let tentative = if current.is_empty() {
            word.to_string()
        } else {
            format!("{current} {word}")
        };

        if current.is_empty() || measurer.line_width(&tentative, font_size) < available_width {
            current = tentative;
        } else {
            lines.push(std::mem::take(&mut current));
            current = word.to_string();
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}
