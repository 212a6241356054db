use crate::{chart::Chart, event::events::Event};

#[derive(Debug, Clone, PartialEq)]
pub enum AppMessage {
    // User Input
    Quit,
    FocusSearch,
    BlurSearch,
    SearchInput(char),
    SearchBackspace,
    ClearSearch,

    // Navigation
    SelectNext,
    SelectPrevious,
    SelectFirst,
    SelectLast,
    PageDown,
    PageUp,

    // Data Loaded
    ChartLoaded(Chart),

    // Errors
    FetchFailed(String),
}

impl From<Event> for AppMessage {
    fn from(event: Event) -> Self {
        match event {
            Event::ChartFetched(chart) => AppMessage::ChartLoaded(chart),
            Event::FetchError(e) => AppMessage::FetchFailed(e.user_message().to_string()),
        }
    }
}
