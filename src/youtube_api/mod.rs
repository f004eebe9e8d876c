//! YouTube Data API v3 client for channel metadata.
//!
//! This module wraps the four read endpoints the crate needs:
//!
//! - `playlists.list`: a channel's playlists, paginated
//! - `channels.list`: resolves the channel's implicit "uploads" playlist
//! - `playlistItems.list`: the uploads playlist's videos, paginated
//! - `videos.list`: batched duration lookup behind shorts filtering
//!
//! All listings page at the API maximum of 50 items and follow the opaque
//! `nextPageToken` cursor until it disappears. Authentication is supplied by
//! a [`crate::auth::Credential`], either as a `key` query parameter or as an
//! `Authorization: Bearer` header.
//!
//! # Example
//!
//! ```rust,no_run
//! use youtube_metadata::{Credential, YouTubeClient};
//!
//! # async fn example() -> youtube_metadata::Result<()> {
//! let client = YouTubeClient::new(Credential::ApiKey {
//!     key: "AIza...".to_string(),
//!     channel_id: "UC0123456789".to_string(),
//! });
//!
//! let playlists = client.fetch_playlists(true).await?;
//! for playlist in &playlists {
//!     println!("{} ({} videos)", playlist.title, playlist.item_count);
//! }
//! # Ok(())
//! # }
//! ```

pub mod channels;
pub mod client;
pub mod playlist_items;
pub mod playlists;
pub mod types;
pub mod videos;

// Re-export main types for convenience
pub use client::{API_BASE_URL, YouTubeClient};
pub use types::PageInfo;

// Re-export commonly used types from each module
pub use channels::{Channel, ChannelContentDetails, ChannelListResponse, RelatedPlaylists};

pub use playlists::{Playlist, PlaylistContentDetails, PlaylistListResponse, PlaylistSnippet};

pub use playlist_items::{
    PlaylistItem, PlaylistItemContentDetails, PlaylistItemListResponse, PlaylistItemSnippet,
};

pub use videos::{Video, VideoContentDetails, VideoListResponse};
