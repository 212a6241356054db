use serde::{Deserialize, Deserializer};
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Song {
    pub rank: u32,
    pub title: String,
    pub artists: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub album_name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub cover_art: String,
    pub play_count: u64,
}

impl Song {
    pub fn artist_line(&self) -> String {
        self.artists.join(", ")
    }

    /// `needle` must already be lowercased.
    pub fn matches(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self
                .artists
                .iter()
                .any(|artist| artist.to_lowercase().contains(needle))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chart {
    pub chart_date: String,
    pub songs: Vec<Song>,
}

/// Outer response object. Both fields are kept loose so that a missing or
/// oddly typed `success` is read as "unsuccessful" rather than as a parse error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChartEnvelope {
    #[serde(default)]
    pub success: Value,
    #[serde(default)]
    pub chart: Option<Value>,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PayloadError {
    #[error("API reported success = false")]
    Unsuccessful,

    #[error("invalid chart payload: {0}")]
    Malformed(String),
}

impl ChartEnvelope {
    pub fn from_slice(body: &[u8]) -> Result<Self, PayloadError> {
        serde_json::from_slice(body).map_err(|e| PayloadError::Malformed(e.to_string()))
    }

    pub fn is_successful(&self) -> bool {
        is_truthy(&self.success)
    }

    pub fn into_chart(self) -> Result<Chart, PayloadError> {
        if !self.is_successful() {
            return Err(PayloadError::Unsuccessful);
        }

        let chart = self
            .chart
            .ok_or_else(|| PayloadError::Malformed("missing `chart`".to_string()))?;

        serde_json::from_value(chart).map_err(|e| PayloadError::Malformed(e.to_string()))
    }
}

/// Parses a raw response body into a validated chart.
pub fn parse_chart(body: &[u8]) -> Result<Chart, PayloadError> {
    ChartEnvelope::from_slice(body)?.into_chart()
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn body(value: Value) -> Vec<u8> {
        serde_json::to_vec(&value).unwrap()
    }

    #[test]
    fn parses_a_successful_envelope() {
        let chart = parse_chart(&body(json!({
            "success": true,
            "chart": {
                "chartDate": "2024-01-05",
                "songs": [{
                    "rank": 1,
                    "title": "Blinding Lights",
                    "artists": ["The Weeknd"],
                    "albumName": "After Hours",
                    "coverArt": "https://i.scdn.co/image/abc",
                    "playCount": 4_700_000_000u64
                }]
            }
        })))
        .unwrap();

        assert_eq!(chart.chart_date, "2024-01-05");
        assert_eq!(chart.songs.len(), 1);
        assert_eq!(chart.songs[0].album_name, "After Hours");
        assert_eq!(chart.songs[0].play_count, 4_700_000_000);
    }

    #[test]
    fn falsy_success_is_unsuccessful() {
        for success in [json!(false), json!(null), json!(0), json!("")] {
            let result = parse_chart(&body(json!({ "success": success, "chart": null })));
            assert_eq!(result, Err(PayloadError::Unsuccessful), "success = {success}");
        }

        assert_eq!(
            parse_chart(&body(json!({ "chart": {} }))),
            Err(PayloadError::Unsuccessful)
        );
    }

    #[test]
    fn missing_chart_is_malformed() {
        let result = parse_chart(&body(json!({ "success": true })));
        assert!(matches!(result, Err(PayloadError::Malformed(_))));
    }

    #[test]
    fn song_without_artists_rejects_the_whole_chart() {
        let result = parse_chart(&body(json!({
            "success": true,
            "chart": {
                "chartDate": "2024-01-05",
                "songs": [{ "rank": 1, "title": "Untitled", "playCount": 10 }]
            }
        })));
        assert!(matches!(result, Err(PayloadError::Malformed(_))));
    }

    #[test]
    fn optional_text_fields_default_to_empty() {
        let chart = parse_chart(&body(json!({
            "success": true,
            "chart": {
                "chartDate": "2024-01-05",
                "songs": [{
                    "rank": 3,
                    "title": "Shape of You",
                    "artists": ["Ed Sheeran"],
                    "albumName": null,
                    "playCount": 1
                }]
            }
        })))
        .unwrap();

        assert_eq!(chart.songs[0].album_name, "");
        assert_eq!(chart.songs[0].cover_art, "");
    }

    #[test]
    fn non_json_body_is_malformed() {
        let result = parse_chart(b"<html>502 Bad Gateway</html>");
        assert!(matches!(result, Err(PayloadError::Malformed(_))));
    }

    #[test]
    fn matching_checks_title_and_every_artist() {
        let song = Song {
            rank: 1,
            title: "Sunflower".to_string(),
            artists: vec!["Post Malone".to_string(), "Swae Lee".to_string()],
            album_name: String::new(),
            cover_art: String::new(),
            play_count: 0,
        };

        assert!(song.matches("sun"));
        assert!(song.matches("swae"));
        assert!(!song.matches("drake"));
        assert_eq!(song.artist_line(), "Post Malone, Swae Lee");
    }
}
