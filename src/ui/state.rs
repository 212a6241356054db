use tracing::debug;

use crate::{
    chart::{Chart, Song, filter_songs},
    ui::message::AppMessage,
};

pub const PAGE_SIZE: usize = 10;

/// Outcome of the one-shot chart fetch.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ChartLoad {
    #[default]
    Pending,
    Loaded(Chart),
    Failed(String),
}

/// What the screen shows. Derived from [`AppState`], never stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Mode<'a> {
    Loading,
    Error(&'a str),
    Ready(&'a Chart),
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    pub load: ChartLoad,
    pub search_query: String,
    pub search_focused: bool,
    pub selected: usize,
    pub should_quit: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            load: ChartLoad::Pending,
            search_query: String::new(),
            search_focused: true,
            selected: 0,
            should_quit: false,
        }
    }
}

impl AppState {
    pub fn mode(&self) -> Mode<'_> {
        match &self.load {
            ChartLoad::Pending => Mode::Loading,
            ChartLoad::Failed(message) => Mode::Error(message.as_str()),
            ChartLoad::Loaded(chart) => Mode::Ready(chart),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.load, ChartLoad::Pending)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.load, ChartLoad::Loaded(_))
    }

    pub fn error(&self) -> Option<&str> {
        match &self.load {
            ChartLoad::Failed(message) => Some(message.as_str()),
            _ => None,
        }
    }

    pub fn songs(&self) -> &[Song] {
        match &self.load {
            ChartLoad::Loaded(chart) => chart.songs.as_slice(),
            _ => &[],
        }
    }

    pub fn chart_date(&self) -> &str {
        match &self.load {
            ChartLoad::Loaded(chart) => chart.chart_date.as_str(),
            _ => "",
        }
    }

    pub fn filtered_songs(&self) -> Vec<&Song> {
        filter_songs(self.songs(), &self.search_query)
    }

    pub fn selected_song(&self) -> Option<&Song> {
        self.filtered_songs().get(self.selected).copied()
    }

    pub fn reduce(mut self, msg: AppMessage) -> Self {
        match msg {
            AppMessage::Quit => self.should_quit = true,
            AppMessage::ChartLoaded(chart) => {
                if self.is_loading() {
                    debug!("Chart loaded with {} songs", chart.songs.len());
                    self.load = ChartLoad::Loaded(chart);
                    self.selected = 0;
                }
            }
            AppMessage::FetchFailed(message) => {
                if self.is_loading() {
                    debug!("Chart failed to load: {}", message);
                    self.load = ChartLoad::Failed(message);
                }
            }
            // Everything below only applies once the table is on screen.
            _ if !self.is_ready() => {}
            AppMessage::FocusSearch => self.search_focused = true,
            AppMessage::BlurSearch => self.search_focused = false,
            AppMessage::SearchInput(c) => {
                self.search_query.push(c);
                self.selected = 0;
            }
            AppMessage::SearchBackspace => {
                if self.search_query.pop().is_some() {
                    self.selected = 0;
                }
            }
            AppMessage::ClearSearch => {
                if !self.search_query.is_empty() {
                    self.search_query.clear();
                    self.selected = 0;
                }
            }
            AppMessage::SelectNext => self.move_selection(1),
            AppMessage::SelectPrevious => self.move_selection(-1),
            AppMessage::PageDown => self.move_selection(PAGE_SIZE as isize),
            AppMessage::PageUp => self.move_selection(-(PAGE_SIZE as isize)),
            AppMessage::SelectFirst => self.selected = 0,
            AppMessage::SelectLast => {
                self.selected = self.filtered_songs().len().saturating_sub(1);
            }
        }
        self
    }

    fn move_selection(&mut self, delta: isize) {
        let len = self.filtered_songs().len();
        if len == 0 {
            self.selected = 0;
            return;
        }
        self.selected = self
            .selected
            .saturating_add_signed(delta)
            .min(len - 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn song(rank: u32, title: &str, artist: &str) -> Song {
        Song {
            rank,
            title: title.to_string(),
            artists: vec![artist.to_string()],
            album_name: String::new(),
            cover_art: String::new(),
            play_count: 0,
        }
    }

    fn chart(n: u32) -> Chart {
        Chart {
            chart_date: "2024-01-05".to_string(),
            songs: (1..=n)
                .map(|i| song(i, &format!("Song {i}"), &format!("Artist {i}")))
                .collect(),
        }
    }

    fn ready(n: u32) -> AppState {
        AppState::default().reduce(AppMessage::ChartLoaded(chart(n)))
    }

    fn type_text(state: AppState, text: &str) -> AppState {
        text.chars()
            .fold(state, |s, c| s.reduce(AppMessage::SearchInput(c)))
    }

    #[test]
    fn starts_loading() {
        let state = AppState::default();
        assert_eq!(state.mode(), Mode::Loading);
        assert!(state.is_loading());
        assert!(state.songs().is_empty());
        assert_eq!(state.chart_date(), "");
        assert_eq!(state.error(), None);
    }

    #[test]
    fn load_settles_exactly_once() {
        let state = ready(2);
        assert!(matches!(state.mode(), Mode::Ready(_)));
        assert_eq!(state.songs().len(), 2);
        assert_eq!(state.chart_date(), "2024-01-05");

        let state = state.reduce(AppMessage::FetchFailed("late".into()));
        assert!(state.is_ready());
        assert_eq!(state.error(), None);

        let failed =
            AppState::default().reduce(AppMessage::FetchFailed("Failed to fetch data".into()));
        assert_eq!(failed.mode(), Mode::Error("Failed to fetch data"));
        let failed = failed.reduce(AppMessage::ChartLoaded(chart(3)));
        assert_eq!(failed.error(), Some("Failed to fetch data"));
        assert!(failed.songs().is_empty());
    }

    #[test]
    fn search_edits_only_apply_when_ready() {
        let loading = AppState::default().reduce(AppMessage::SearchInput('x'));
        assert_eq!(loading.search_query, "");

        let state = type_text(ready(12), "song 1");
        assert_eq!(state.search_query, "song 1");
        assert_eq!(
            state.filtered_songs().iter().map(|s| s.rank).collect::<Vec<_>>(),
            vec![1, 10, 11, 12]
        );

        let state = state.reduce(AppMessage::SearchBackspace);
        assert_eq!(state.search_query, "song ");
        assert_eq!(state.filtered_songs().len(), 12);

        let state = state.reduce(AppMessage::ClearSearch);
        assert_eq!(state.search_query, "");
    }

    #[test]
    fn no_match_keeps_the_total() {
        let state = type_text(ready(2), "nothing like this");
        assert!(state.filtered_songs().is_empty());
        assert_eq!(state.songs().len(), 2);
        assert_eq!(state.selected_song(), None);
    }

    #[test]
    fn selection_stays_in_bounds() {
        let state = ready(25)
            .reduce(AppMessage::SelectPrevious)
            .reduce(AppMessage::SelectNext)
            .reduce(AppMessage::SelectNext);
        assert_eq!(state.selected, 2);

        let state = state.reduce(AppMessage::PageDown).reduce(AppMessage::PageDown);
        assert_eq!(state.selected, 22);
        let state = state.reduce(AppMessage::PageDown);
        assert_eq!(state.selected, 24);
        let state = state.reduce(AppMessage::PageUp);
        assert_eq!(state.selected, 14);

        let state = state.reduce(AppMessage::SelectFirst);
        assert_eq!(state.selected, 0);
        let state = state.reduce(AppMessage::SelectLast);
        assert_eq!(state.selected_song().map(|s| s.rank), Some(25));
    }

    #[test]
    fn typing_resets_the_selection() {
        let state = ready(5).reduce(AppMessage::SelectLast);
        assert_eq!(state.selected, 4);
        let state = state.reduce(AppMessage::SearchInput('2'));
        assert_eq!(state.selected, 0);
        assert_eq!(state.selected_song().map(|s| s.rank), Some(2));
    }

    #[test]
    fn quit_works_in_every_mode() {
        assert!(AppState::default().reduce(AppMessage::Quit).should_quit);
        assert!(ready(1).reduce(AppMessage::Quit).should_quit);
    }
}
