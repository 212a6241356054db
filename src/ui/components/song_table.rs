use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, StatefulWidget, Table, TableState, Widget},
};

use crate::{
    chart::{Song, format_full_number, format_streams},
    util::colors,
};

pub const COLUMNS: [&str; 6] = ["#", "", "Title", "Artist(s)", "Album", "Streams"];
const COVER_MARKER: &str = "♪";

pub struct SongTable<'a> {
    songs: &'a [&'a Song],
    total: usize,
    query: &'a str,
    selected: Option<&'a Song>,
}

impl<'a> SongTable<'a> {
    pub fn new(songs: &'a [&'a Song], total: usize, query: &'a str) -> Self {
        Self {
            songs,
            total,
            query,
            selected: None,
        }
    }

    /// Song whose details go in the bottom border.
    pub fn with_selected(mut self, song: Option<&'a Song>) -> Self {
        self.selected = song;
        self
    }

    /// Text shown instead of rows, if any.
    pub fn notice(&self) -> Option<String> {
        if !self.songs.is_empty() {
            None
        } else if self.total == 0 {
            Some("No songs in this chart".to_string())
        } else {
            Some(format!("No songs found matching \"{}\"", self.query))
        }
    }

    fn row(song: &Song) -> Row<'_> {
        let cover_style = if song.cover_art.is_empty() {
            Style::default().fg(colors::NEUTRAL)
        } else {
            Style::default().fg(colors::SECONDARY)
        };

        Row::new(vec![
            Cell::from(Span::styled(
                song.rank.to_string(),
                Style::default().fg(colors::MUTED),
            )),
            Cell::from(Span::styled(COVER_MARKER, cover_style)),
            Cell::from(Span::styled(
                song.title.as_str(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Cell::from(song.artist_line()),
            Cell::from(Span::styled(
                song.album_name.as_str(),
                Style::default().fg(colors::MUTED),
            )),
            Cell::from(Line::from(format_streams(song.play_count)).alignment(Alignment::Right)),
        ])
    }

    fn detail(song: &Song) -> Line<'_> {
        let mut spans = vec![Span::styled(
            format!(" {} streams ", format_full_number(song.play_count)),
            Style::default().fg(colors::PRIMARY),
        )];
        if !song.cover_art.is_empty() {
            spans.push(Span::styled(
                format!("• {} ", song.cover_art),
                Style::default().fg(colors::NEUTRAL),
            ));
        }
        Line::from(spans)
    }
}

impl StatefulWidget for SongTable<'_> {
    type State = TableState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut TableState) {
        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_set(border::ROUNDED)
            .border_style(Style::default().fg(colors::NEUTRAL));

        if let Some(song) = self.selected {
            block = block.title_bottom(Self::detail(song).right_aligned());
        }

        let header = Row::new(COLUMNS.iter().map(|c| Cell::from(*c)))
            .style(
                Style::default()
                    .fg(colors::MUTED)
                    .add_modifier(Modifier::BOLD),
            )
            .bottom_margin(1);

        let widths = [
            Constraint::Length(4),
            Constraint::Length(2),
            Constraint::Fill(3),
            Constraint::Fill(3),
            Constraint::Fill(2),
            Constraint::Length(9),
        ];

        if let Some(notice) = self.notice() {
            let inner = block.inner(area);
            block.render(area, buf);

            let [head, body] =
                Layout::vertical([Constraint::Length(2), Constraint::Min(1)]).areas(inner);
            Widget::render(Table::new(Vec::<Row>::new(), widths).header(header), head, buf);
            Paragraph::new(notice)
                .alignment(Alignment::Center)
                .style(Style::default().fg(colors::MUTED))
                .render(body, buf);
            return;
        }

        let rows: Vec<Row> = self.songs.iter().map(|song| Self::row(song)).collect();
        let table = Table::new(rows, widths)
            .header(header)
            .block(block)
            .column_spacing(2)
            .row_highlight_style(
                Style::default()
                    .fg(colors::PRIMARY)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");

        StatefulWidget::render(table, area, buf, state);
    }
}
