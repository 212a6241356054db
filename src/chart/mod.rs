pub mod filter;
pub mod format;
pub mod model;

pub use filter::filter_songs;
pub use format::{format_date, format_full_number, format_streams};
pub use model::{Chart, ChartEnvelope, Song};
