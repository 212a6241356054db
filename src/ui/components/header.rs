use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::{chart::format_date, util::colors};

pub const TITLE: &str = "Top 200 Most Streamed Songs";

pub struct Header<'a> {
    chart_date: &'a str,
}

impl<'a> Header<'a> {
    pub fn new(chart_date: &'a str) -> Self {
        Self { chart_date }
    }

    pub fn subtitle(&self) -> String {
        format!("All Time Chart • Updated {}", format_date(self.chart_date))
    }
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_set(border::ROUNDED)
            .border_style(Style::default().fg(colors::NEUTRAL));

        let lines = vec![
            Line::from(vec![
                Span::styled("♫ ", Style::default().fg(colors::PRIMARY)),
                Span::styled(
                    TITLE,
                    Style::default()
                        .fg(colors::PRIMARY)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(Span::styled(
                self.subtitle(),
                Style::default().fg(colors::MUTED),
            )),
        ];

        Paragraph::new(lines)
            .alignment(Alignment::Left)
            .block(block)
            .render(area, buf);
    }
}
