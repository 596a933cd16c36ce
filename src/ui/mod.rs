pub mod card;
pub mod header_bar;
pub mod help_panel;
pub mod input;
pub mod projects_view;
pub mod status_bar;
pub mod theme;
pub mod toast;

use ratatui::layout::{Constraint, Layout, Rect};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub fn truncate_with_ellipsis(s: &str, max: usize) -> String {
    if UnicodeWidthStr::width(s) <= max {
        return s.to_string();
    }
    if max <= 1 {
        return "\u{2026}".to_string();
    }
    let mut result = String::new();
    let mut w = 0;
    for ch in s.chars() {
        let cw = UnicodeWidthChar::width(ch).unwrap_or(0);
        if w + cw > max - 1 {
            break;
        }
        result.push(ch);
        w += cw;
    }
    result.push('\u{2026}');
    result
}

/// Greedy word wrap into at most `max_lines` lines of `width` cells. Text that
/// does not fit ends with an ellipsis.
pub fn wrap_clamped(s: &str, width: usize, max_lines: usize) -> Vec<String> {
    if width == 0 || max_lines == 0 {
        return Vec::new();
    }
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut words = s.split_whitespace();

    while let Some(word) = words.next() {
        let candidate_w = if current.is_empty() {
            UnicodeWidthStr::width(word)
        } else {
            UnicodeWidthStr::width(current.as_str()) + 1 + UnicodeWidthStr::width(word)
        };

        if candidate_w <= width {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
            continue;
        }

        if lines.len() + 1 == max_lines {
            let rest: Vec<&str> = std::iter::once(word).chain(words.by_ref()).collect();
            let joined = if current.is_empty() {
                rest.join(" ")
            } else {
                format!("{current} {}", rest.join(" "))
            };
            lines.push(truncate_with_ellipsis(&joined, width));
            return lines;
        }

        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        current = truncate_with_ellipsis(word, width);
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vert = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Min(0),
    ])
    .split(area);

    Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Min(0),
    ])
    .split(vert[1])[1]
}

pub fn contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x && column < area.right() && row >= area.y && row < area.bottom()
}
