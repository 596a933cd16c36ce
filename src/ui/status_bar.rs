use crate::loader::LoadState;
use crate::ui::theme;
use ratatui::{
    buffer::Buffer as Buf,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

pub struct StatusBar<'a> {
    pub state: Option<&'a LoadState>,
    pub selected_url: Option<&'a str>,
}

impl<'a> Widget for StatusBar<'a> {
    fn render(self, area: Rect, buf: &mut Buf) {
        let bg = Style::default().bg(theme::STATUS_BG);
        for x in area.x..area.right() {
            buf[(x, area.y)].set_style(bg);
        }

        let sep = || {
            Span::styled(
                "\u{2502}",
                Style::default().fg(theme::BORDER_COLOR).bg(theme::STATUS_BG),
            )
        };

        let label = self.state.map_or("idle", LoadState::label);
        let mut spans = vec![
            Span::styled(
                format!(" {label} "),
                Style::default()
                    .fg(theme::KEY_FG)
                    .bg(theme::STATUS_BG)
                    .add_modifier(Modifier::BOLD),
            ),
            sep(),
        ];

        if let Some(list) = self.state.and_then(LoadState::display_list) {
            spans.push(Span::styled(
                format!(" {} repos ", list.len()),
                Style::default().bg(theme::STATUS_BG),
            ));
            spans.push(sep());
        }

        if let Some(url) = self.selected_url {
            spans.push(Span::styled(
                format!(" {url} "),
                Style::default().fg(theme::DIM_TEXT).bg(theme::STATUS_BG),
            ));
            spans.push(sep());
        }

        spans.push(Span::styled(
            " \u{23ce} open  o live  g all  q quit ",
            Style::default().fg(theme::DIM_TEXT).bg(theme::STATUS_BG),
        ));

        buf.set_line(area.x, area.y, &Line::from(spans), area.width);
    }
}
