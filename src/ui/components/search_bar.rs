use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    style::{Modifier, Style},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::util::colors;

pub const PLACEHOLDER: &str = "Search by song or artist...";
const PROMPT: &str = "/ ";

pub struct SearchBar<'a> {
    query: &'a str,
    focused: bool,
}

impl<'a> SearchBar<'a> {
    pub fn new(query: &'a str, focused: bool) -> Self {
        Self { query, focused }
    }

    /// Where the terminal cursor belongs while the box is focused.
    pub fn cursor_position(&self, area: Rect) -> Option<Position> {
        if !self.focused || area.width < 3 || area.height < 3 {
            return None;
        }
        let offset = u16::try_from(PROMPT.width() + self.query.width()).unwrap_or(u16::MAX);
        let max_x = area.x.saturating_add(area.width - 2);
        let x = area.x.saturating_add(1).saturating_add(offset).min(max_x);
        Some(Position::new(x, area.y + 1))
    }
}

impl Widget for SearchBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            Style::default().fg(colors::PRIMARY)
        } else {
            Style::default().fg(colors::NEUTRAL)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_set(border::ROUNDED)
            .border_style(border_style)
            .title(" Search ");

        let text = if self.query.is_empty() {
            Span::styled(
                PLACEHOLDER,
                Style::default()
                    .fg(colors::NEUTRAL)
                    .add_modifier(Modifier::ITALIC),
            )
        } else {
            Span::raw(self.query)
        };

        Paragraph::new(Line::from(vec![
            Span::styled(PROMPT, Style::default().fg(colors::MUTED)),
            text,
        ]))
        .block(block)
        .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_follows_the_query() {
        let area = Rect::new(0, 5, 40, 3);
        assert_eq!(SearchBar::new("", true).cursor_position(area), Some(Position::new(3, 6)));
        assert_eq!(
            SearchBar::new("drake", true).cursor_position(area),
            Some(Position::new(8, 6))
        );
        assert_eq!(SearchBar::new("drake", false).cursor_position(area), None);
    }

    #[test]
    fn cursor_is_clamped_inside_the_border() {
        let area = Rect::new(0, 0, 10, 3);
        let long = "a very long query indeed";
        assert_eq!(SearchBar::new(long, true).cursor_position(area), Some(Position::new(8, 1)));
    }

    #[test]
    fn huge_query_does_not_overflow() {
        let long = "x".repeat(usize::from(u16::MAX) + 10);
        let area = Rect::new(100, 0, 40, 3);
        assert_eq!(
            SearchBar::new(&long, true).cursor_position(area),
            Some(Position::new(138, 1))
        );

        let edge = Rect::new(u16::MAX - 40, 0, 40, 3);
        assert_eq!(
            SearchBar::new(&long, true).cursor_position(edge),
            Some(Position::new(u16::MAX - 2, 1))
        );
    }
}
