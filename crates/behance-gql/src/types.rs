use base64::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub type JsonMap = serde_json::Map<String, serde_json::Value>;

/// A Behance object ID.
///
/// The API returns some IDs as numbers and others as strings; both are stored
/// in their decimal string form so that they can serve as map keys.
#[derive(Clone, Debug, Default, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Id(String);

impl Id {
    /// Convert a JSON ID value to an `Id`.  Anything other than a string or
    /// number becomes the empty ID.
    pub fn from_value(value: &serde_json::Value) -> Id {
        match value {
            serde_json::Value::String(s) => Id(s.clone()),
            serde_json::Value::Number(n) => Id(n.to_string()),
            _ => Id::default(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for Id {
    fn from(value: &str) -> Id {
        Id(value.to_owned())
    }
}

impl From<Id> for serde_json::Value {
    fn from(value: Id) -> serde_json::Value {
        value.0.into()
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A pagination cursor as understood by the Behance GraphQL API: the base64
/// encoding of a decimal item offset
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Cursor(String);

impl Cursor {
    pub fn from_offset(offset: usize) -> Cursor {
        Cursor(BASE64_STANDARD.encode(offset.to_string()))
    }

    /// Decode the offset that the cursor points after.  Returns `None` for
    /// cursors that are not base64-encoded decimal integers.
    pub fn offset(&self) -> Option<usize> {
        let raw = BASE64_STANDARD.decode(&self.0).ok()?;
        std::str::from_utf8(&raw).ok()?.parse::<usize>().ok()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<Cursor> for serde_json::Value {
    fn from(value: Cursor) -> serde_json::Value {
        value.0.into()
    }
}

/// The user or collection whose items are being fetched, e.g., a Behance
/// username.  Never empty.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Subject(String);

impl Subject {
    pub fn new(value: String) -> Result<Subject, EmptySubjectError> {
        if value.trim().is_empty() {
            Err(EmptySubjectError)
        } else {
            Ok(Subject(value))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Subject {
    type Err = EmptySubjectError;

    fn from_str(s: &str) -> Result<Subject, EmptySubjectError> {
        Subject::new(s.to_owned())
    }
}

impl From<Subject> for serde_json::Value {
    fn from(value: Subject) -> serde_json::Value {
        value.0.into()
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
#[error("subject must not be empty")]
pub struct EmptySubjectError;

/// How many fields a query requests for each node.
///
/// Only moodboard queries take this: both moodboard documents normalize to
/// the same record, whereas the two profile variants produce different
/// record types and so are separate queries.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Detail {
    #[default]
    Minimal,
    Full,
}

/// One page of raw nodes from a GraphQL connection
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(from = "Connection<T>")]
pub struct Page<T> {
    pub items: Vec<T>,
    pub end_cursor: Option<Cursor>,
    pub has_next_page: bool,
}

impl<T> Default for Page<T> {
    fn default() -> Page<T> {
        Page {
            items: Vec::new(),
            end_cursor: None,
            has_next_page: false,
        }
    }
}

impl<T> From<Connection<T>> for Page<T> {
    fn from(value: Connection<T>) -> Page<T> {
        // A connection without `pageInfo` says nothing about whether it's
        // exhausted; the caller falls back to stopping on an empty page.
        let (end_cursor, has_next_page) = match value.page_info {
            Some(info) => (info.end_cursor, info.has_next_page.unwrap_or(true)),
            None => (None, true),
        };
        Page {
            items: value.nodes.unwrap_or_default(),
            end_cursor,
            has_next_page,
        }
    }
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
struct Connection<T> {
    nodes: Option<Vec<T>>,
    page_info: Option<PageInfo>,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
struct PageInfo {
    #[serde(default)]
    end_cursor: Option<Cursor>,
    #[serde(default)]
    has_next_page: Option<bool>,
}
