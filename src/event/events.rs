use crate::{chart::Chart, http::FetchError};

/// Messages delivered from background tasks to the UI loop.
#[derive(Debug, Clone)]
pub enum Event {
    ChartFetched(Chart),
    FetchError(FetchError),
}
