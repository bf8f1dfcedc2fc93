use super::documents::{MOODBOARD_ITEMS_FULL, MOODBOARD_ITEMS_MINIMAL};
use super::{IMAGE_SIZES, MOODBOARD_THUMBNAIL_SIZES, PagedQuery};
use crate::lookup::{first_url, id_at, str_at, u64_at};
use crate::types::{Cursor, Detail, Id, JsonMap};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::num::NonZeroUsize;

/// A [`PagedQuery`] for retrieving the projects saved to a moodboard as
/// [`MoodboardProject`] values
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct MoodboardItems {
    /// The numeric ID of the moodboard
    id: u64,

    /// Which GraphQL document to send
    detail: Detail,
}

impl MoodboardItems {
    pub fn new(id: u64, detail: Detail) -> MoodboardItems {
        MoodboardItems { id, detail }
    }
}

impl PagedQuery for MoodboardItems {
    type Item = MoodboardProject;

    fn document(&self) -> &'static str {
        match self.detail {
            Detail::Minimal => MOODBOARD_ITEMS_MINIMAL,
            Detail::Full => MOODBOARD_ITEMS_FULL,
        }
    }

    fn variables(&self, first: NonZeroUsize, after: Option<&Cursor>) -> JsonMap {
        let mut vars = JsonMap::new();
        vars.insert("id".into(), self.id.into());
        vars.insert("firstItem".into(), first.get().into());
        if let Some(cursor) = after {
            vars.insert("afterItem".into(), cursor.clone().into());
        }
        vars.insert("shouldGetItems".into(), true.into());
        vars.insert("shouldGetMoodboardFields".into(), false.into());
        vars.insert("shouldGetRecommendations".into(), false.into());
        vars
    }

    fn connection_pointer(&self) -> &'static str {
        "/moodboard/items"
    }

    fn normalize(&self, node: &Value) -> MoodboardProject {
        MoodboardProject::from_node(node)
    }
}

/// A project saved to a moodboard
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct MoodboardProject {
    pub id: Id,
    pub name: String,
    pub url: String,

    /// Publication time as a Unix timestamp
    pub published_on: u64,

    /// URL of the largest available cover image
    pub image: String,

    /// URL of a cover image around 404px wide
    pub thumbnail: String,

    pub views: u64,
    pub appreciations: u64,
    pub comments: u64,
}

impl MoodboardProject {
    /// Normalize a moodboard item node.  Items whose entity is an image module
    /// or media collection are reported as the project that contains them.
    pub fn from_node(node: &Value) -> MoodboardProject {
        let entity = node.get("entity").unwrap_or(&Value::Null);
        let project = match entity.get("project") {
            Some(p) if p.is_object() => p,
            _ => entity,
        };
        let covers = project.get("covers").unwrap_or(&Value::Null);
        MoodboardProject {
            id: id_at(project, "/id"),
            name: str_at(project, "/name"),
            url: str_at(project, "/url"),
            published_on: u64_at(project, "/publishedOn"),
            image: first_url(covers, IMAGE_SIZES),
            thumbnail: first_url(covers, MOODBOARD_THUMBNAIL_SIZES),
            views: u64_at(project, "/stats/views/all"),
            appreciations: u64_at(project, "/stats/appreciations/all"),
            comments: u64_at(project, "/stats/comments/all"),
        }
    }
}
