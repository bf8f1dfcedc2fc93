use std::time::Duration;

pub static GRAPHQL_API_URL: &str = "https://www.behance.net/v3/graphql";

/// Session correlation ID accepted by the Behance GraphQL endpoint.  It is
/// sent both in the `X-BCP` header and the `bcp` cookie, and the two must
/// match.
pub static DEFAULT_SESSION_ID: &str = "96ee8700-3ce5-4445-96b2-ab0e1a76a63a";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Settings for a [`PagedFetcher`](crate::PagedFetcher)
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FetcherConfig {
    /// URL of the GraphQL endpoint
    pub endpoint: String,

    /// Value for the `X-BCP` header and `bcp` cookie
    pub session_id: String,

    /// Upper bound on the duration of each individual HTTP request
    pub timeout: Option<Duration>,
}

impl Default for FetcherConfig {
    fn default() -> FetcherConfig {
        FetcherConfig {
            endpoint: GRAPHQL_API_URL.to_owned(),
            session_id: DEFAULT_SESSION_ID.to_owned(),
            timeout: Some(DEFAULT_TIMEOUT),
        }
    }
}
