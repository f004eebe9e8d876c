//! Channel metadata retrieval for the YouTube Data API v3.
//!
//! This crate fetches a channel's playlist and video metadata through the
//! catalog's paginated list endpoints, optionally drops short-form videos
//! (60 seconds or less), and aggregates everything into a [`ResultSet`]
//! with a stable JSON export shape.
//!
//! Two authentication modes are supported through the [`Credential`] sum
//! type: an API key with an explicit channel id, or an OAuth bearer token
//! scoped to the authenticated user's own channel. The retriever is written
//! once against that type; nothing else in the crate cares which mode is
//! active.
//!
//! Fetching is strictly sequential (one request in flight at a time) and
//! all-or-nothing: a failed page discards every page aggregated before it.
//!
//! # Example
//!
//! ```rust,no_run
//! use youtube_metadata::{Credential, FetchSelection, YouTubeClient, fetch_metadata};
//!
//! # async fn example() -> youtube_metadata::Result<()> {
//! let credential = Credential::resolve(
//!     std::env::var("YOUTUBE_API_KEY").ok(),
//!     std::env::var("YOUTUBE_CHANNEL_ID").ok(),
//!     std::env::var("YOUTUBE_ACCESS_TOKEN").ok(),
//! )?;
//! let client = YouTubeClient::new(credential);
//!
//! let results = fetch_metadata(&client, FetchSelection::default()).await?;
//! println!("{}", results.to_json()?);
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod duration;
pub mod error;
pub mod records;
pub mod youtube_api;

pub use auth::Credential;
pub use duration::parse_duration;
pub use error::{Error, Result};
pub use records::{PlaylistRecord, ResultSet, VideoRecord, export_filename};
pub use youtube_api::client::{API_BASE_URL, YouTubeClient};

/// Which sections of a channel's metadata to fetch, and how.
///
/// Mirrors the five user-facing toggles: fetch playlists, fetch videos,
/// include the respective descriptions, and include shorts. Descriptions
/// are all-or-nothing per record kind: either every record of a kind in
/// the [`ResultSet`] carries one, or none does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchSelection {
    /// Fetch the channel's playlists.
    pub playlists: bool,
    /// Fetch the channel's uploaded videos.
    pub videos: bool,
    /// Include each playlist's description.
    pub playlist_descriptions: bool,
    /// Include each video's description.
    pub video_descriptions: bool,
    /// Keep videos of 60 seconds or less.
    pub include_shorts: bool,
}

impl Default for FetchSelection {
    /// Fetch both sections, without descriptions, keeping shorts.
    fn default() -> Self {
        Self {
            playlists: true,
            videos: true,
            playlist_descriptions: false,
            video_descriptions: false,
            include_shorts: true,
        }
    }
}

/// Fetches the selected sections of channel metadata into one [`ResultSet`].
///
/// Unselected sections come back as empty vectors. Sections are fetched one
/// after the other (playlists first), so a failure in either leaves the
/// caller with no partial result set.
///
/// # Errors
///
/// Propagates the first error of either fetch; see
/// [`YouTubeClient::fetch_playlists`] and [`YouTubeClient::fetch_videos`].
pub async fn fetch_metadata(
    client: &YouTubeClient,
    selection: FetchSelection,
) -> Result<ResultSet> {
    let playlists = if selection.playlists {
        client
            .fetch_playlists(selection.playlist_descriptions)
            .await?
    } else {
        Vec::new()
    };

    let videos = if selection.videos {
        client
            .fetch_videos(selection.video_descriptions, selection.include_shorts)
            .await?
    } else {
        Vec::new()
    };

    Ok(ResultSet { playlists, videos })
}
