mod catalog;
mod documents;
mod moodboard;
mod profile_projects;
pub use self::catalog::*;
pub use self::moodboard::*;
pub use self::profile_projects::*;
use crate::QueryPayload;
use crate::types::{Cursor, JsonMap, Page};
use serde_json::Value;
use std::num::NonZeroUsize;

/// Cover sizes to use for a project's thumbnail, largest first
pub const THUMBNAIL_SIZES: &[&str] = &["size_808", "size_404", "size_202"];

/// Cover sizes to use for the small thumbnail in a project summary
pub const SUMMARY_THUMBNAIL_SIZES: &[&str] = &["size_404", "size_202"];

/// Cover sizes to use for a project's full-size image, largest first
pub const IMAGE_SIZES: &[&str] = &[
    "size_original",
    "size_max_808",
    "size_808",
    "size_404",
    "size_202",
];

/// Cover sizes to use for a moodboard item's thumbnail, largest first
pub const MOODBOARD_THUMBNAIL_SIZES: &[&str] = &["size_404", "size_202", "size_230", "size_115"];

/// Image sizes to use for a user's avatar, largest first
pub const AVATAR_SIZES: &[&str] = &[
    "size_276", "size_230", "size_138", "size_115", "size_100", "size_50",
];

/// A GraphQL query over one paginated Behance collection.
///
/// Implementors supply a fixed GraphQL document, the variables for a given
/// page, the location of the connection within the response, and a mapping
/// from raw nodes to flat records.
pub trait PagedQuery {
    type Item;

    /// The GraphQL document sent with every page request
    fn document(&self) -> &'static str;

    /// Construct the variables for a request for at most `first` nodes
    /// following `after` (or from the start of the collection if `None`)
    fn variables(&self, first: NonZeroUsize, after: Option<&Cursor>) -> JsonMap;

    /// JSON Pointer to the paginated connection within a response's `"data"`
    /// field
    fn connection_pointer(&self) -> &'static str;

    /// Convert a raw node to a flat record.  Must not fail on missing or
    /// mistyped fields.
    fn normalize(&self, node: &Value) -> Self::Item;

    fn payload(&self, first: NonZeroUsize, after: Option<&Cursor>) -> QueryPayload {
        QueryPayload {
            query: self.document().to_owned(),
            variables: self.variables(first, after),
        }
    }

    /// Extract the page of raw nodes from a response's `"data"` field.  If the
    /// connection is missing or malformed, an empty page is returned.
    fn parse_page(&self, data: JsonMap) -> Page<Value> {
        let pointer = self.connection_pointer();
        let mut data = Value::Object(data);
        let Some(connection) = data.pointer_mut(pointer).map(Value::take) else {
            tracing::debug!(pointer, "Response does not contain paginated connection");
            return Page::default();
        };
        match serde_json::from_value::<Page<Value>>(connection) {
            Ok(page) => page,
            Err(e) => {
                tracing::debug!(pointer, error = %e, "Failed to parse paginated connection");
                Page::default()
            }
        }
    }
}
