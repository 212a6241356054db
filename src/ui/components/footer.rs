use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::util::colors;

pub struct Footer {
    total: usize,
    search_focused: bool,
}

impl Footer {
    /// `total` is the size of the loaded chart, not of the filtered view.
    pub fn new(total: usize, search_focused: bool) -> Self {
        Self {
            total,
            search_focused,
        }
    }

    pub fn summary(&self) -> String {
        format!("Data sourced from Spotify • {} songs loaded", self.total)
    }

    fn hints(&self) -> &'static str {
        if self.search_focused {
            "type to filter  ↑↓ move  esc done  ^C quit"
        } else {
            "/ search  j/k move  g/G ends  esc clear  q quit"
        }
    }
}

impl Widget for Footer {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(1), Constraint::Length(48)])
            .split(area);

        Paragraph::new(Line::from(Span::styled(
            format!(" {}", self.summary()),
            Style::default().fg(colors::MUTED),
        )))
        .render(chunks[0], buf);

        Paragraph::new(Line::from(Span::styled(
            self.hints(),
            Style::default().fg(colors::NEUTRAL),
        )))
        .right_aligned()
        .render(chunks[1], buf);
    }
}
