//! A single repository card and its click targets.
//!
//! A card exposes two navigation actions bound at different scopes: the whole
//! card opens the repository page, and the "live" badge inside it (present
//! only when the repository has a homepage) opens the deployment. Hit testing
//! resolves the inner badge first and stops there.

use crate::github::types::RepositoryRecord;
use crate::ui::{contains, theme, truncate_with_ellipsis, wrap_clamped};
use ratatui::{
    buffer::Buffer as Buf,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Widget},
};
use unicode_width::UnicodeWidthStr;

pub const CARD_HEIGHT: u16 = 8;
const LIVE_BADGE: &str = "\u{2197} live";
const NO_DESCRIPTION: &str = "No description provided.";
const DESCRIPTION_LINES: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardHit {
    /// Card body: open the canonical repository page.
    Primary,
    /// Live badge: open the homepage, never the repository page.
    Secondary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardRegions {
    pub card: Rect,
    pub live: Option<Rect>,
}

impl CardRegions {
    pub fn compute(area: Rect, record: &RepositoryRecord) -> Self {
        let inner = inner_rect(area);
        let badge_w = UnicodeWidthStr::width(LIVE_BADGE) as u16;
        let live = (record.homepage.is_some() && inner.width > badge_w && inner.height > 0)
            .then(|| Rect::new(inner.right() - badge_w, inner.y, badge_w, 1));
        Self { card: area, live }
    }

    pub fn hit(&self, column: u16, row: u16) -> Option<CardHit> {
        if let Some(live) = self.live {
            if contains(live, column, row) {
                return Some(CardHit::Secondary);
            }
        }
        contains(self.card, column, row).then_some(CardHit::Primary)
    }
}

fn inner_rect(area: Rect) -> Rect {
    Block::default().borders(Borders::ALL).inner(area)
}

pub struct RepoCard<'a> {
    pub record: &'a RepositoryRecord,
    pub selected: bool,
}

impl<'a> Widget for RepoCard<'a> {
    fn render(self, area: Rect, buf: &mut Buf) {
        let border = if self.selected {
            theme::SELECTED_BORDER
        } else {
            theme::BORDER_COLOR
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width < 4 || inner.height == 0 {
            return;
        }
        let regions = CardRegions::compute(area, self.record);
        let width = inner.width as usize;

        // Title row, badge on the right
        let title_w = match regions.live {
            Some(live) => width.saturating_sub(live.width as usize + 1),
            None => width,
        };
        let title_fg = if self.selected { theme::ACCENT } else { theme::TITLE_FG };
        let title = Span::styled(
            truncate_with_ellipsis(&self.record.display_title(), title_w),
            Style::default().fg(title_fg).add_modifier(Modifier::BOLD),
        );
        buf.set_line(inner.x, inner.y, &Line::from(title), title_w as u16);

        if let Some(live) = regions.live {
            let badge = Span::styled(
                LIVE_BADGE,
                Style::default()
                    .fg(theme::LIVE_FG)
                    .add_modifier(Modifier::UNDERLINED),
            );
            buf.set_line(live.x, live.y, &Line::from(badge), live.width);
        }

        // Description
        let description = self.record.description.as_deref().unwrap_or(NO_DESCRIPTION);
        let max_lines = DESCRIPTION_LINES.min(inner.height.saturating_sub(2) as usize);
        for (i, text) in wrap_clamped(description, width, max_lines).iter().enumerate() {
            buf.set_line(
                inner.x,
                inner.y + 1 + i as u16,
                &Line::from(Span::styled(text.clone(), Style::default().fg(theme::BODY_FG))),
                inner.width,
            );
        }

        // Footer: language badge and year
        if inner.height < 2 {
            return;
        }
        let footer_y = inner.bottom() - 1;
        if let Some(language) = self.record.language.as_deref() {
            let line = Line::from(vec![
                Span::styled("\u{25cf} ", Style::default().fg(theme::LANGUAGE_DOT)),
                Span::styled(language.to_string(), Style::default().fg(theme::DIM_TEXT)),
            ]);
            buf.set_line(inner.x, footer_y, &line, inner.width);
        }

        let year = self.record.updated_year().to_string();
        let year_w = year.len() as u16;
        if inner.width > year_w {
            buf.set_line(
                inner.right() - year_w,
                footer_y,
                &Line::from(Span::styled(year, Style::default().fg(theme::FAINT_TEXT))),
                year_w,
            );
        }
    }
}

/// Placeholder shown while the list is loading.
pub struct SkeletonCard;

impl Widget for SkeletonCard {
    fn render(self, area: Rect, buf: &mut Buf) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme::BORDER_COLOR));
        let inner = block.inner(area);
        block.render(area, buf);

        let bar = Style::default().fg(theme::SKELETON);
        let w = inner.width as usize;
        let widths = [w * 3 / 4, w, w * 2 / 3];
        for (i, bar_w) in widths.iter().enumerate() {
            let y = inner.y + 1 + i as u16;
            if y >= inner.bottom() {
                break;
            }
            buf.set_line(
                inner.x,
                y,
                &Line::from(Span::styled("\u{2591}".repeat(*bar_w), bar)),
                inner.width,
            );
        }
    }
}
