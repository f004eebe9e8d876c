//! Shared paging types for the YouTube API client.

use crate::error::Result;
use async_stream::try_stream;
use std::future::Future;
use tokio_stream::Stream;

/// One page of results: the items plus the token for the following page.
pub(crate) type Page<T> = (Vec<T>, Option<String>);

/// Turns a page-fetching closure into a stream of items.
///
/// The closure receives the page token to request (`None` for the first
/// page) and returns that page's items together with the next token. The
/// stream keeps at most one request in flight: the next page is fetched only
/// once the current page's items have been drained, and fetching stops as
/// soon as a page comes back without a token. The first error ends the
/// stream after being yielded.
pub(crate) fn paged<'a, T, F, Fut>(fetch_page: F) -> impl Stream<Item = Result<T>> + 'a
where
    T: 'a,
    F: Fn(Option<String>) -> Fut + 'a,
    Fut: Future<Output = Result<Page<T>>> + 'a,
{
    try_stream! {
        let mut page_token = None;
        loop {
            let (items, next_page_token) = fetch_page(page_token.take()).await?;
            for item in items {
                yield item;
            }
            let Some(token) = next_page_token else {
                break;
            };
            page_token = Some(token);
        }
    }
}

/// Paging details for lists of resources.
///
/// See: <https://developers.google.com/youtube/v3/docs/pageInfo>
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct PageInfo {
    /// The total number of results in the result set.
    #[serde(rename = "totalResults")]
    pub total_results: u32,
    /// The number of results included in the API response.
    #[serde(rename = "resultsPerPage")]
    pub results_per_page: u32,
}
