mod config;
mod gallery;
pub mod lookup;
mod queries;
mod transport;
mod types;
pub use crate::config::*;
pub use crate::gallery::*;
pub use crate::queries::*;
pub use crate::transport::*;
pub use crate::types::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroUsize;
use thiserror::Error;

static USER_AGENT: &str = concat!(
    env!("CARGO_PKG_NAME"),
    "/",
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("CARGO_PKG_REPOSITORY"),
    ")",
);

/// A client for paging through Behance GraphQL collections over a
/// [`Transport`]
#[derive(Clone, Debug)]
pub struct PagedFetcher<T> {
    transport: T,
    config: FetcherConfig,
}

impl PagedFetcher<UreqTransport> {
    pub fn new(config: FetcherConfig) -> PagedFetcher<UreqTransport> {
        let transport = UreqTransport::new(config.timeout);
        PagedFetcher { transport, config }
    }
}

impl<T: Transport> PagedFetcher<T> {
    pub fn with_transport(transport: T, config: FetcherConfig) -> PagedFetcher<T> {
        PagedFetcher { transport, config }
    }

    pub fn config(&self) -> &FetcherConfig {
        &self.config
    }

    /// Return a [`GalleryScraper`] that shares this fetcher's transport
    pub fn gallery_scraper(&self) -> GalleryScraper<&T> {
        GalleryScraper::new(&self.transport)
    }

    /// Perform a single GraphQL request and return the response's `"data"`
    /// field
    pub fn query(&self, payload: &QueryPayload) -> Result<JsonMap, FetchError> {
        let body = serde_json::to_vec(payload).map_err(FetchError::Encode)?;
        let session_id = self.config.session_id.as_str();
        let request = HttpRequest::post(&self.config.endpoint, body)
            .header("X-Requested-With", "XMLHttpRequest")
            .header("X-BCP", session_id)
            .header("Content-Type", "application/json")
            .cookie("bcp", session_id);
        let response = self.transport.perform(request)?;
        if !response.is_success() {
            return Err(FetchError::Status {
                status: response.status,
            });
        }
        serde_json::from_slice::<Response>(&response.body)
            .map_err(FetchError::Json)?
            .into_data()
            .map_err(Into::into)
    }

    /// Fetch up to `target` items from the collection described by `query`,
    /// starting `start_offset` items into the collection.
    ///
    /// Each request asks only for the items still needed.  The offset for the
    /// next request is derived from the number of nodes consumed so far
    /// rather than from the server's `endCursor`.  Pagination stops once
    /// `target` items have been collected, the server returns an empty page or
    /// reports that there are no more pages, or a request fails.  A failure
    /// is logged and recorded in the returned [`FetchOutcome`] along with
    /// whatever was collected before it; it is never retried.
    pub fn fetch<Q: PagedQuery>(
        &self,
        query: &Q,
        target: NonZeroUsize,
        start_offset: usize,
    ) -> FetchOutcome<Q::Item> {
        let mut items = Vec::new();
        let mut offset = start_offset;
        let mut requests = 0;
        let mut error = None;
        while let Some(remaining) = NonZeroUsize::new(target.get().saturating_sub(items.len())) {
            let after = (offset > 0).then(|| Cursor::from_offset(offset));
            let payload = query.payload(remaining, after.as_ref());
            requests += 1;
            tracing::debug!(
                page = requests,
                first = remaining.get(),
                offset,
                "Requesting page"
            );
            let data = match self.query(&payload) {
                Ok(data) => data,
                Err(e) => {
                    tracing::warn!(
                        page = requests,
                        collected = items.len(),
                        error = %e,
                        "Page request failed; stopping pagination"
                    );
                    error = Some(e);
                    break;
                }
            };
            let page = query.parse_page(data);
            if page.items.is_empty() {
                tracing::debug!(page = requests, "Received empty page; stopping pagination");
                break;
            }
            let consumed = page.items.len().min(remaining.get());
            items.extend(
                page.items
                    .iter()
                    .take(consumed)
                    .map(|node| query.normalize(node)),
            );
            offset = offset.saturating_add(consumed);
            if let Some(server_offset) = page.end_cursor.as_ref().and_then(Cursor::offset)
                && server_offset != offset
            {
                tracing::debug!(
                    local = offset,
                    server = server_offset,
                    "Server endCursor disagrees with locally derived offset"
                );
            }
            if !page.has_next_page {
                tracing::debug!(page = requests, "Server reports no further pages");
                break;
            }
        }
        FetchOutcome {
            items,
            requests,
            next_offset: offset,
            error,
        }
    }
}

/// The result of [`PagedFetcher::fetch`]
#[derive(Debug)]
pub struct FetchOutcome<T> {
    /// Normalized items in collection order
    pub items: Vec<T>,

    /// Number of page requests made
    pub requests: usize,

    /// Offset at which a subsequent fetch should start in order to continue
    /// where this one left off
    pub next_offset: usize,

    /// The failure that cut pagination short, if any
    pub error: Option<FetchError>,
}

impl<T> FetchOutcome<T> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the collected items, or `None` if nothing was collected
    pub fn into_nonempty(self) -> Option<Vec<T>> {
        (!self.items.is_empty()).then_some(self.items)
    }
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to serialize GraphQL request")]
    Encode(#[source] serde_json::Error),
    #[error("failed to perform GraphQL request")]
    Transport(#[from] TransportError),
    #[error("GraphQL server responded with HTTP status {status}")]
    Status { status: u16 },
    #[error("failed to deserialize GraphQL response")]
    Json(#[source] serde_json::Error),
    #[error("GraphQL server returned error response")]
    GraphQL(#[from] GqlError),
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct QueryPayload {
    pub query: String,
    pub variables: JsonMap,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
struct Response {
    #[serde(default)]
    data: Option<JsonMap>,
    #[serde(default)]
    errors: Option<GqlError>,
}

impl Response {
    /// Field-level errors reported alongside data are logged and otherwise
    /// ignored; errors are only fatal when there is no data at all.
    fn into_data(self) -> Result<JsonMap, GqlError> {
        match (self.data, self.errors) {
            (Some(data), Some(errors)) if !errors.is_empty() => {
                tracing::warn!(%errors, "GraphQL response contained errors alongside data");
                Ok(data)
            }
            (Some(data), _) => Ok(data),
            (None, Some(errors)) if !errors.is_empty() => Err(errors),
            (None, _) => Ok(JsonMap::new()),
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(transparent)]
pub struct GqlError(Vec<GqlInnerError>);

impl GqlError {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for GqlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Query errored:")?;
        let mut first = true;
        for e in &self.0 {
            if !std::mem::take(&mut first) {
                writeln!(f, "---")?;
            }
            if let Some(ref t) = e.err_type {
                writeln!(f, "    Type: {t}")?;
            }
            writeln!(f, "    Message: {}", e.message)?;
            if let Some(ref p) = e.path {
                let path = p
                    .iter()
                    .map(|seg| match seg {
                        serde_json::Value::String(s) => s.clone(),
                        other => other.to_string(),
                    })
                    .collect::<Vec<_>>()
                    .join(".");
                writeln!(f, "    Path: {path}")?;
            }
        }
        Ok(())
    }
}

impl std::error::Error for GqlError {}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
struct GqlInnerError {
    #[serde(default, rename = "type")]
    err_type: Option<String>,
    #[serde(default)]
    message: String,
    #[serde(default)]
    path: Option<Vec<serde_json::Value>>,
}
