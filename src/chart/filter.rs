use super::model::Song;

/// Returns the songs whose title or any artist contains `query`, ignoring case.
/// Chart order is kept; an empty query returns every song.
pub fn filter_songs<'a>(songs: &'a [Song], query: &str) -> Vec<&'a Song> {
    if query.is_empty() {
        return songs.iter().collect();
    }

    let needle = query.to_lowercase();
    songs.iter().filter(|song| song.matches(&needle)).collect()
}
