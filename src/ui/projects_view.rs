use crate::loader::LoadState;
use crate::ui::card::{RepoCard, SkeletonCard, CARD_HEIGHT};
use crate::ui::theme;
use ratatui::{
    buffer::Buffer as Buf,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};
use unicode_width::UnicodeWidthStr;

pub const SECTION_TITLE: &str = "05 \u{2014} Open Source";
pub const EMPTY_MESSAGE: &str = "No public repositories found.";
pub const VIEW_ALL: &str = "View all repositories on GitHub \u{2192}";
const SKELETON_COUNT: usize = 3;
const GAP: u16 = 1;

pub fn columns_for_width(width: u16) -> usize {
    match width {
        0..=59 => 1,
        60..=99 => 2,
        _ => 3,
    }
}

/// Where everything in the projects section lands for one frame.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProjectsLayout {
    pub title: Rect,
    pub body: Rect,
    /// Visible card slots as (card index, area).
    pub slots: Vec<(usize, Rect)>,
    pub footer: Rect,
    pub columns: usize,
}

impl ProjectsLayout {
    pub fn compute(area: Rect, card_count: usize, first_row: usize) -> Self {
        if area.height < 3 {
            return Self {
                columns: 1,
                ..Self::default()
            };
        }
        let title = Rect::new(area.x, area.y, area.width, 1);
        let footer = Rect::new(area.x, area.bottom() - 1, area.width, 1);
        let body = Rect::new(area.x, area.y + 2, area.width, area.height.saturating_sub(4));

        let columns = columns_for_width(area.width);
        let cols = columns as u16;
        let card_w = area.width.saturating_sub(GAP * (cols - 1)) / cols;

        let mut slots = Vec::new();
        for idx in 0..card_count {
            let row = idx / columns;
            if row < first_row {
                continue;
            }
            let col = (idx % columns) as u16;
            let y_off = (row - first_row) as u16 * (CARD_HEIGHT + GAP);
            if y_off + CARD_HEIGHT > body.height {
                break;
            }
            slots.push((
                idx,
                Rect::new(body.x + col * (card_w + GAP), body.y + y_off, card_w, CARD_HEIGHT),
            ));
        }

        Self {
            title,
            body,
            slots,
            footer,
            columns,
        }
    }

    pub fn visible_rows(&self) -> usize {
        ((self.body.height + GAP) / (CARD_HEIGHT + GAP)).max(1) as usize
    }

    /// The clickable part of the footer: the centred link text.
    pub fn footer_link(&self) -> Rect {
        let w = (UnicodeWidthStr::width(VIEW_ALL) as u16).min(self.footer.width);
        Rect::new(
            self.footer.x + (self.footer.width - w) / 2,
            self.footer.y,
            w,
            self.footer.height,
        )
    }
}

pub struct ProjectsView<'a> {
    pub state: Option<&'a LoadState>,
    pub layout: &'a ProjectsLayout,
    pub selected: usize,
}

impl<'a> Widget for ProjectsView<'a> {
    fn render(self, area: Rect, buf: &mut Buf) {
        if self.layout.title.height == 0 {
            return;
        }

        let title = Line::from(vec![
            Span::styled("\u{2500}\u{2500}\u{2500} ", Style::default().fg(theme::SEPARATOR)),
            Span::styled(
                SECTION_TITLE.to_uppercase(),
                Style::default()
                    .fg(theme::DIM_TEXT)
                    .add_modifier(Modifier::BOLD),
            ),
        ]);
        buf.set_line(self.layout.title.x, self.layout.title.y, &title, area.width);

        match self.state {
            None | Some(LoadState::Loading) => {
                let skeleton = ProjectsLayout::compute(area, SKELETON_COUNT, 0);
                for (_, slot) in &skeleton.slots {
                    SkeletonCard.render(*slot, buf);
                }
            }
            Some(LoadState::Populated(list)) => {
                for (idx, slot) in &self.layout.slots {
                    if let Some(record) = list.get(*idx) {
                        RepoCard {
                            record,
                            selected: *idx == self.selected,
                        }
                        .render(*slot, buf);
                    }
                }
            }
            Some(LoadState::Empty) => {
                let body = self.layout.body;
                if body.height > 0 {
                    let w = (UnicodeWidthStr::width(EMPTY_MESSAGE) as u16).min(body.width);
                    let x = body.x + (body.width - w) / 2;
                    let y = body.y + body.height / 2;
                    buf.set_line(
                        x,
                        y,
                        &Line::from(Span::styled(EMPTY_MESSAGE, Style::default().fg(theme::DIM_TEXT))),
                        w,
                    );
                }
            }
        }

        let link = self.layout.footer_link();
        buf.set_line(
            link.x,
            link.y,
            &Line::from(Span::styled(
                VIEW_ALL,
                Style::default()
                    .fg(theme::BODY_FG)
                    .add_modifier(Modifier::UNDERLINED),
            )),
            link.width,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::types::DisplayList;
    use crate::test_utils::*;

    fn buffer_text(buf: &Buf) -> String {
        let area = buf.area;
        let mut out = String::new();
        for y in area.y..area.bottom() {
            for x in area.x..area.right() {
                out.push_str(buf[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    fn render_state(state: &LoadState, area: Rect) -> String {
        let count = state.display_list().map_or(0, |l| l.len());
        let layout = ProjectsLayout::compute(area, count, 0);
        let mut buf = Buf::empty(area);
        ProjectsView {
            state: Some(state),
            layout: &layout,
            selected: 0,
        }
        .render(area, &mut buf);
        buffer_text(&buf)
    }

    #[test]
    fn test_columns_follow_width() {
        assert_eq!(columns_for_width(40), 1);
        assert_eq!(columns_for_width(80), 2);
        assert_eq!(columns_for_width(120), 3);
    }

    #[test]
    fn test_six_cards_in_three_columns() {
        let layout = ProjectsLayout::compute(Rect::new(0, 0, 120, 40), 6, 0);

        assert_eq!(layout.columns, 3);
        assert_eq!(layout.slots.len(), 6);
        let (_, first) = layout.slots[0];
        let (_, fourth) = layout.slots[3];
        assert_eq!(first.x, fourth.x);
        assert_eq!(fourth.y, first.y + CARD_HEIGHT + 1);
    }

    #[test]
    fn test_scrolled_rows_are_skipped() {
        let layout = ProjectsLayout::compute(Rect::new(0, 0, 40, 14), 6, 2);

        assert_eq!(layout.visible_rows(), 1);
        let indices: Vec<usize> = layout.slots.iter().map(|(i, _)| *i).collect();
        assert_eq!(indices, vec![2]);
    }

    #[test]
    fn test_empty_state_message() {
        let text = render_state(&LoadState::Empty, Rect::new(0, 0, 80, 20));
        assert!(text.contains(EMPTY_MESSAGE));
        assert!(text.contains("View all repositories on GitHub"));
    }

    #[test]
    fn test_loading_shows_skeletons() {
        let text = render_state(&LoadState::Loading, Rect::new(0, 0, 120, 20));
        assert!(text.contains('\u{2591}'));
        assert!(!text.contains(EMPTY_MESSAGE));
    }

    #[test]
    fn test_populated_renders_titles() {
        let list = DisplayList::derive(vec![
            make_record(1, "laravel-kpi", false),
            make_record(2, "forked-thing", true),
            make_record(3, "dotfiles", false),
        ]);
        let text = render_state(&LoadState::Populated(list), Rect::new(0, 0, 120, 20));

        assert!(text.contains("laravel kpi"));
        assert!(text.contains("dotfiles"));
        assert!(!text.contains("forked thing"));
    }
}
