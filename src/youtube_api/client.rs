//! Core catalog client: request plumbing, credential application, and the
//! paginated fetch-and-aggregate operations.

use crate::auth::Credential;
use crate::duration::parse_duration;
use crate::error::{Error, Result};
use crate::records::{PlaylistRecord, VideoRecord};
use crate::youtube_api::channels::ChannelListResponse;
use crate::youtube_api::playlist_items::PlaylistItemListResponse;
use crate::youtube_api::playlists::PlaylistListResponse;
use crate::youtube_api::types::{Page, paged};
use crate::youtube_api::videos::VideoListResponse;
use async_stream::try_stream;
use http::{Method, StatusCode};
use serde::Deserialize;
use std::collections::HashMap;
use tokio_stream::{Stream, StreamExt};
use tracing::instrument;

/// Production base URL for the YouTube Data API v3.
pub const API_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";

/// Page size used for every list call (the API maximum).
const MAX_RESULTS: u32 = 50;

/// Videos at most this long, in seconds, count as Shorts.
const SHORT_MAX_SECONDS: u64 = 60;

/// Client for reading channel metadata from the YouTube Data API v3.
///
/// The client owns a [`Credential`] selecting one of the two authentication
/// modes (API key in the query string, or an OAuth bearer header) and issues
/// strictly sequential requests: one page in flight at a time, and the
/// duration batch for a page completes before the next page is requested.
///
/// All fetch operations aggregate to completion before returning; a failed
/// page discards everything aggregated so far and surfaces the error.
#[derive(Debug, Clone)]
pub struct YouTubeClient {
    /// The active credential for this client.
    credential: Credential,
    /// HTTP client for API requests.
    client: reqwest::Client,
    /// API base URL; overridable so tests can point at a local server.
    base_url: String,
}

impl YouTubeClient {
    /// Creates a client with a fresh HTTP client and the production base URL.
    #[must_use]
    pub fn new(credential: Credential) -> Self {
        Self::with_http_client(credential, reqwest::Client::new())
    }

    /// Creates a client reusing an existing [`reqwest::Client`].
    #[must_use]
    pub fn with_http_client(credential: Credential, client: reqwest::Client) -> Self {
        Self {
            credential,
            client,
            base_url: API_BASE_URL.to_string(),
        }
    }

    /// Replaces the API base URL, primarily for tests.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Fetches every playlist belonging to the credential's channel.
    ///
    /// Pages through `playlists.list` (50 items per page) until the API
    /// stops returning a page token, preserving the API's order. Each
    /// record carries a `description` if and only if `include_description`
    /// is set.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RemoteApi`] when any page request comes back with a
    /// non-success status, and [`Error::Transport`] on failures below HTTP
    /// semantics. No partial results are returned in either case.
    ///
    /// # API Reference
    ///
    /// <https://developers.google.com/youtube/v3/docs/playlists/list>
    #[instrument(skip(self))]
    pub async fn fetch_playlists(&self, include_description: bool) -> Result<Vec<PlaylistRecord>> {
        let playlists = self.list_playlists(include_description);
        let mut playlists = std::pin::pin!(playlists);
        let mut all = Vec::new();
        while let Some(playlist) = playlists.next().await {
            all.push(playlist?);
        }
        tracing::debug!(playlists = all.len(), "aggregated all playlist pages");
        Ok(all)
    }

    /// Streaming variant of [`Self::fetch_playlists`].
    ///
    /// Yields records one by one, fetching the next page lazily when the
    /// current one is exhausted.
    pub fn list_playlists(
        &self,
        include_description: bool,
    ) -> impl Stream<Item = Result<PlaylistRecord>> + use<'_> {
        paged(move |page_token| self.playlists_page(include_description, page_token))
    }

    /// Fetches every video uploaded by the credential's channel.
    ///
    /// Two-stage lookup: the channel's implicit "uploads" playlist is
    /// resolved through `channels.list`, then its items are paged exactly
    /// like playlists. When `include_shorts` is false, each page triggers
    /// one batched `videos.list` duration lookup and videos of 60 seconds
    /// or less are dropped; a video whose duration cannot be determined is
    /// kept.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] when the channel lookup matches nothing,
    /// [`Error::RemoteApi`] when the lookup or any page request fails, and
    /// [`Error::Transport`] on failures below HTTP semantics. Duration
    /// batch failures are advisory and never propagate. No partial results
    /// are returned on error.
    ///
    /// # API Reference
    ///
    /// <https://developers.google.com/youtube/v3/docs/playlistItems/list>
    #[instrument(skip(self))]
    pub async fn fetch_videos(
        &self,
        include_description: bool,
        include_shorts: bool,
    ) -> Result<Vec<VideoRecord>> {
        let videos = self.list_videos(include_description, include_shorts);
        let mut videos = std::pin::pin!(videos);
        let mut all = Vec::new();
        while let Some(video) = videos.next().await {
            all.push(video?);
        }
        tracing::debug!(videos = all.len(), "aggregated all upload pages");
        Ok(all)
    }

    /// Streaming variant of [`Self::fetch_videos`].
    ///
    /// The uploads playlist is resolved when the stream is first polled;
    /// after that, records are yielded one by one with pages fetched lazily.
    pub fn list_videos(
        &self,
        include_description: bool,
        include_shorts: bool,
    ) -> impl Stream<Item = Result<VideoRecord>> + use<'_> {
        try_stream! {
            let uploads_playlist = self.resolve_uploads_playlist().await?;
            let pages = paged(move |page_token| {
                let uploads_playlist = uploads_playlist.clone();
                async move {
                    self.uploads_page(
                        &uploads_playlist,
                        include_description,
                        include_shorts,
                        page_token,
                    )
                    .await
                }
            });
            let mut pages = std::pin::pin!(pages);
            while let Some(video) = pages.next().await {
                yield video?;
            }
        }
    }

    /// Makes one HTTP request to the API with shared error handling.
    ///
    /// Consolidates the logic every call shares: URL assembly, query
    /// parameters, credential application (bearer header or `key` query
    /// parameter), status validation, and error-message extraction from the
    /// API's structured error body.
    async fn make_request(
        &self,
        method: Method,
        path: &str,
        query_params: &[(&str, &str)],
    ) -> Result<reqwest::Response> {
        let url = format!("{}/{}", self.base_url, path);

        let request = self.client.request(method, url).query(query_params);
        let response = self.credential.apply(request).send().await?;

        let status = response.status();
        if !status.is_success() {
            let message = remote_error_message(status, response).await;
            return Err(Error::RemoteApi { status, message });
        }

        Ok(response)
    }

    /// Requests one page of `playlists.list` and maps it to records.
    async fn playlists_page(
        &self,
        include_description: bool,
        page_token: Option<String>,
    ) -> Result<Page<PlaylistRecord>> {
        let max_results = MAX_RESULTS.to_string();
        let (owner_key, owner_value) = self.credential.owner_param();
        let mut query_params = vec![
            ("part", "snippet,contentDetails"),
            (owner_key, owner_value),
            ("maxResults", max_results.as_str()),
        ];
        if let Some(ref token) = page_token {
            query_params.push(("pageToken", token.as_str()));
        }

        let response = self.make_request(Method::GET, "playlists", &query_params).await?;
        let playlists: PlaylistListResponse = response.json().await?;

        tracing::debug!(
            total_results = playlists.page_info.total_results,
            returned_items = playlists.items.len(),
            "fetched playlists page"
        );

        let records = playlists
            .items
            .into_iter()
            .map(|playlist| PlaylistRecord {
                id: playlist.id,
                title: playlist.snippet.title,
                item_count: playlist.content_details.item_count,
                description: include_description
                    .then(|| playlist.snippet.description.unwrap_or_default()),
            })
            .collect();
        Ok((records, playlists.next_page_token))
    }

    /// Resolves the channel's implicit "uploads" playlist id.
    async fn resolve_uploads_playlist(&self) -> Result<String> {
        let (selector_key, selector_value) = self.credential.channel_param();
        let query_params = [("part", "contentDetails"), (selector_key, selector_value)];

        let response = self.make_request(Method::GET, "channels", &query_params).await?;
        let channels: ChannelListResponse = response.json().await?;

        let Some(channel) = channels.items.into_iter().next() else {
            return Err(Error::NotFound(self.credential.channel_description()));
        };

        let uploads = channel.content_details.related_playlists.uploads;
        tracing::debug!(
            channel_id = %channel.id,
            uploads_playlist = %uploads,
            "resolved uploads playlist"
        );
        Ok(uploads)
    }

    /// Requests one page of the uploads playlist and maps it to records,
    /// dropping Shorts when asked to.
    async fn uploads_page(
        &self,
        uploads_playlist: &str,
        include_description: bool,
        include_shorts: bool,
        page_token: Option<String>,
    ) -> Result<Page<VideoRecord>> {
        let max_results = MAX_RESULTS.to_string();
        let mut query_params = vec![
            ("part", "snippet,contentDetails"),
            ("playlistId", uploads_playlist),
            ("maxResults", max_results.as_str()),
        ];
        if let Some(ref token) = page_token {
            query_params.push(("pageToken", token.as_str()));
        }

        let response = self
            .make_request(Method::GET, "playlistItems", &query_params)
            .await?;
        let page: PlaylistItemListResponse = response.json().await?;

        tracing::debug!(
            total_results = page.page_info.total_results,
            returned_items = page.items.len(),
            "fetched uploads page"
        );

        // The duration lookup stays page-local: at most 50 ids per batched
        // call, and the batch for a page completes before the next page is
        // requested. `None` means the lookup was unavailable, in which case
        // every video on the page is kept.
        let durations = if include_shorts {
            None
        } else {
            let video_ids: Vec<&str> = page
                .items
                .iter()
                .map(|item| item.content_details.video_id.as_str())
                .collect();
            self.video_durations(&video_ids).await
        };

        let records = page
            .items
            .into_iter()
            .filter_map(|item| {
                let video_id = item.content_details.video_id;
                if let Some(durations) = &durations
                    && let Some(&seconds) = durations.get(&video_id)
                    && seconds <= SHORT_MAX_SECONDS
                {
                    tracing::trace!(video_id = %video_id, seconds, "excluding short");
                    return None;
                }
                Some(VideoRecord {
                    id: video_id,
                    title: item.snippet.title,
                    published_at: item.snippet.published_at,
                    description: include_description
                        .then(|| item.snippet.description.unwrap_or_default()),
                })
            })
            .collect();
        Ok((records, page.next_page_token))
    }

    /// Looks up the durations of a page's videos in one batched call.
    ///
    /// This lookup is advisory: any failure is logged and reported as
    /// `None`, and an id missing from the response simply has no map entry.
    /// Either way the affected videos are treated as "duration unknown"
    /// and kept.
    async fn video_durations(&self, video_ids: &[&str]) -> Option<HashMap<String, u64>> {
        if video_ids.is_empty() {
            return Some(HashMap::new());
        }

        let joined_ids = video_ids.join(",");
        let query_params = [("part", "contentDetails"), ("id", joined_ids.as_str())];

        let result: Result<VideoListResponse> = async {
            let response = self.make_request(Method::GET, "videos", &query_params).await?;
            Ok(response.json::<VideoListResponse>().await?)
        }
        .await;

        match result {
            Ok(videos) => Some(
                videos
                    .items
                    .into_iter()
                    .map(|video| {
                        let seconds = parse_duration(&video.content_details.duration);
                        (video.id, seconds)
                    })
                    .collect(),
            ),
            Err(error) => {
                tracing::warn!(%error, "duration lookup failed; keeping all videos on this page");
                None
            }
        }
    }
}

/// Extracts a human-readable message from a non-success API response.
///
/// Prefers the structured `error.message` field of the JSON error body and
/// falls back to the HTTP status' canonical reason.
async fn remote_error_message(status: StatusCode, response: reqwest::Response) -> String {
    #[derive(Debug, Deserialize)]
    struct ApiErrorBody {
        #[serde(default)]
        error: Option<ApiErrorDetail>,
    }

    #[derive(Debug, Deserialize)]
    struct ApiErrorDetail {
        #[serde(default)]
        message: Option<String>,
    }

    let structured_message = response
        .json::<ApiErrorBody>()
        .await
        .ok()
        .and_then(|body| body.error)
        .and_then(|detail| detail.message);

    structured_message.unwrap_or_else(|| {
        status
            .canonical_reason()
            .unwrap_or("unknown error")
            .to_string()
    })
}
