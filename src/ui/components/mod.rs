pub mod footer;
pub mod header;
pub mod search_bar;
pub mod song_table;
pub mod spinner;
