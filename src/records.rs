//! Caller-facing metadata records and the JSON export contract.
//!
//! The field names used on the wire (`id`, `title`, `itemCount`,
//! `description`, `publishedAt`) are stable: the serialized [`ResultSet`] is
//! what lands in the downloadable export file, and downstream consumers key
//! off these names. A record's `description` is omitted from the output
//! entirely (not serialized as `null`) when descriptions were not requested.

use crate::error::Result;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One playlist belonging to the fetched channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistRecord {
    /// The catalog's opaque playlist identifier.
    pub id: String,
    /// The playlist's title.
    pub title: String,
    /// Number of videos in the playlist.
    #[serde(rename = "itemCount")]
    pub item_count: u64,
    /// The playlist's description; present on every record of a result set
    /// or on none of them, depending on the fetch options.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// One video uploaded by the fetched channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoRecord {
    /// The catalog's opaque video identifier.
    pub id: String,
    /// The video's title.
    pub title: String,
    /// When the video was published, in ISO 8601 format.
    #[serde(rename = "publishedAt")]
    pub published_at: Timestamp,
    /// The video's description; present on every record of a result set
    /// or on none of them, depending on the fetch options.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// The aggregated result of one metadata fetch, and the unit of export.
///
/// Playlists and videos are independent listings; no playlist-membership
/// relationship is tracked between them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultSet {
    /// All playlists of the channel, in the API's order.
    pub playlists: Vec<PlaylistRecord>,
    /// All (surviving) uploads of the channel, in the API's order.
    pub videos: Vec<VideoRecord>,
}

impl ResultSet {
    /// Whether the fetch produced nothing at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.playlists.is_empty() && self.videos.is_empty()
    }

    /// Serializes the result set as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Writes the JSON export to the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub async fn write_json(&self, path: impl AsRef<Path>) -> Result<()> {
        tokio::fs::write(path, self.to_json()?).await?;
        Ok(())
    }
}

/// Default export filename carrying the UTC date of `now`, e.g.
/// `youtube-metadata-2025-01-15.json`.
#[must_use]
pub fn export_filename(now: Timestamp) -> String {
    format!("youtube-metadata-{}.json", now.strftime("%Y-%m-%d"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn video(description: Option<&str>) -> VideoRecord {
        VideoRecord {
            id: "xxxxxxxxxxx1".to_string(),
            title: "Introduction to Web Development".to_string(),
            published_at: "2025-01-15T10:30:00Z".parse().unwrap(),
            description: description.map(String::from),
        }
    }

    #[test]
    fn playlist_serializes_with_stable_field_names() {
        let record = PlaylistRecord {
            id: "PLxxxxxxxxxxxxxxxxxxx1".to_string(),
            title: "Coding Tutorials".to_string(),
            item_count: 42,
            description: Some("tutorial series".to_string()),
        };
        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            json!({
                "id": "PLxxxxxxxxxxxxxxxxxxx1",
                "title": "Coding Tutorials",
                "itemCount": 42,
                "description": "tutorial series",
            })
        );
    }

    #[test]
    fn absent_description_is_omitted_not_null() {
        let value = serde_json::to_value(video(None)).unwrap();
        assert_eq!(
            value,
            json!({
                "id": "xxxxxxxxxxx1",
                "title": "Introduction to Web Development",
                "publishedAt": "2025-01-15T10:30:00Z",
            })
        );
        assert!(value.get("description").is_none());
    }

    #[test]
    fn published_at_round_trips_as_iso8601() {
        let value = serde_json::to_value(video(Some("d"))).unwrap();
        assert_eq!(value["publishedAt"], json!("2025-01-15T10:30:00Z"));
        let back: VideoRecord = serde_json::from_value(value).unwrap();
        assert_eq!(back, video(Some("d")));
    }

    #[test]
    fn result_set_export_shape() {
        let results = ResultSet {
            playlists: vec![PlaylistRecord {
                id: "PL1".to_string(),
                title: "One".to_string(),
                item_count: 0,
                description: None,
            }],
            videos: vec![video(None)],
        };
        let value: serde_json::Value = serde_json::from_str(&results.to_json().unwrap()).unwrap();
        assert!(value["playlists"].is_array());
        assert!(value["videos"].is_array());
        assert_eq!(value["playlists"][0]["itemCount"], json!(0));
    }

    #[test]
    fn export_filename_uses_the_utc_date() {
        let now: Timestamp = "2025-01-15T23:59:59-05:00".parse().unwrap();
        // 23:59 EST is already January 16th in UTC.
        assert_eq!(export_filename(now), "youtube-metadata-2025-01-16.json");
    }

    #[test]
    fn empty_result_set() {
        assert!(ResultSet::default().is_empty());
    }

    #[tokio::test]
    async fn write_json_round_trips_through_a_file() {
        let path = std::env::temp_dir().join("youtube-metadata-export-test.json");
        let results = ResultSet {
            playlists: Vec::new(),
            videos: vec![video(None)],
        };
        results.write_json(&path).await.unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(serde_json::from_str::<ResultSet>(&contents).unwrap(), results);

        let _ = std::fs::remove_file(&path);
    }
}
