use async_trait::async_trait;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    symbols::border,
    text::Line,
    widgets::{Block, Borders, Paragraph, TableState, Wrap},
};
use tracing::info;

use crate::{
    chart::Chart,
    event::events::Event,
    ui::{
        components::{
            footer::Footer, header::Header, search_bar::SearchBar, song_table::SongTable,
            spinner::Spinner,
        },
        context::AppContext,
        state::{AppState, Mode},
        traits::View,
    },
    util::{colors, task::TaskManager},
};

pub const LOADING_LABEL: &str = "Loading Top 200 Songs...";
pub const FETCH_TASK: &str = "chart_fetch";

#[derive(Default)]
pub struct ChartView {
    table_state: TableState,
}

impl ChartView {
    pub fn new() -> Self {
        Self::default()
    }

    fn render_loading(f: &mut Frame, area: Rect) {
        let spinner = Spinner::default()
            .with_style(Style::default().fg(colors::PRIMARY))
            .with_label(LOADING_LABEL);
        f.render_widget(spinner, area);
    }

    fn render_error(f: &mut Frame, area: Rect, message: &str) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_set(border::ROUNDED)
            .border_style(Style::default().fg(colors::ERROR))
            .title(" Error ")
            .title_alignment(Alignment::Center);

        let inner = block.inner(area);
        f.render_widget(block, area);

        let text = vec![
            Line::from(message).style(
                Style::default()
                    .fg(colors::ERROR)
                    .add_modifier(Modifier::BOLD),
            ),
            Line::default(),
            Line::from("press q to quit").style(Style::default().fg(colors::NEUTRAL)),
        ];
        let height = (text.len() as u16).min(inner.height);
        let body = Rect {
            y: inner.y + inner.height.saturating_sub(height) / 2,
            height,
            ..inner
        };
        f.render_widget(
            Paragraph::new(text)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true }),
            body,
        );
    }

    fn render_ready(&mut self, f: &mut Frame, area: Rect, state: &AppState, chart: &Chart) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4),
                Constraint::Length(3),
                Constraint::Min(3),
                Constraint::Length(1),
            ])
            .split(area);

        f.render_widget(Header::new(&chart.chart_date), chunks[0]);

        let search = SearchBar::new(&state.search_query, state.search_focused);
        if let Some(position) = search.cursor_position(chunks[1]) {
            f.set_cursor_position(position);
        }
        f.render_widget(search, chunks[1]);

        let filtered = state.filtered_songs();
        if filtered.is_empty() {
            self.table_state.select(None);
        } else {
            self.table_state
                .select(Some(state.selected.min(filtered.len() - 1)));
        }
        f.render_stateful_widget(
            SongTable::new(&filtered, chart.songs.len(), &state.search_query)
                .with_selected(state.selected_song()),
            chunks[2],
            &mut self.table_state,
        );

        f.render_widget(Footer::new(chart.songs.len(), state.search_focused), chunks[3]);
    }
}

#[async_trait]
impl View for ChartView {
    /// Starts the one and only chart fetch. The outcome comes back as an
    /// [`Event`] on the context channel.
    async fn on_mount(&mut self, ctx: &AppContext, tasks: &mut TaskManager) {
        if tasks.contains(FETCH_TASK) {
            return;
        }

        let api = ctx.api.clone();
        let tx = ctx.event_tx.clone();
        tasks.spawn(
            FETCH_TASK,
            tokio::spawn(async move {
                let event = match api.fetch_chart().await {
                    Ok(chart) => Event::ChartFetched(chart),
                    Err(e) => Event::FetchError(e),
                };
                if tx.send_async(event).await.is_err() {
                    info!("Chart fetch finished after the UI closed");
                }
            }),
        );
    }

    fn render(&mut self, f: &mut Frame, area: Rect, state: &AppState) {
        f.buffer_mut()
            .set_style(area, Style::new().bg(colors::BACKGROUND));

        match state.mode() {
            Mode::Loading => Self::render_loading(f, area),
            Mode::Error(message) => Self::render_error(f, area, message),
            Mode::Ready(chart) => self.render_ready(f, area, state, chart),
        }
    }
}
