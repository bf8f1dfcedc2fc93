use super::documents::{PROFILE_PROJECTS_FULL, PROFILE_PROJECTS_MINIMAL};
use super::{AVATAR_SIZES, IMAGE_SIZES, PagedQuery, SUMMARY_THUMBNAIL_SIZES, THUMBNAIL_SIZES};
use crate::lookup::{array_at, bool_at, first_url, id_at, str_at, u64_at};
use crate::types::{Cursor, Id, JsonMap, Subject};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::num::NonZeroUsize;

static PROFILE_PROJECTS_POINTER: &str = "/user/profileProjects";

/// A [`PagedQuery`] for retrieving the projects on a user's profile as
/// [`ProjectSummary`] values
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProfileProjects {
    /// The Behance username whose projects to retrieve
    username: Subject,
}

impl ProfileProjects {
    pub fn new(username: Subject) -> ProfileProjects {
        ProfileProjects { username }
    }
}

impl PagedQuery for ProfileProjects {
    type Item = ProjectSummary;

    fn document(&self) -> &'static str {
        PROFILE_PROJECTS_MINIMAL
    }

    fn variables(&self, first: NonZeroUsize, after: Option<&Cursor>) -> JsonMap {
        profile_variables(&self.username, first, after)
    }

    fn connection_pointer(&self) -> &'static str {
        PROFILE_PROJECTS_POINTER
    }

    fn normalize(&self, node: &Value) -> ProjectSummary {
        ProjectSummary::from_node(node)
    }
}

/// A [`PagedQuery`] for retrieving the projects on a user's profile with
/// their owners, creative fields, and engagement stats as
/// [`DetailedProject`] values
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DetailedProfileProjects {
    /// The Behance username whose projects to retrieve
    username: Subject,
}

impl DetailedProfileProjects {
    pub fn new(username: Subject) -> DetailedProfileProjects {
        DetailedProfileProjects { username }
    }
}

impl PagedQuery for DetailedProfileProjects {
    type Item = DetailedProject;

    fn document(&self) -> &'static str {
        PROFILE_PROJECTS_FULL
    }

    fn variables(&self, first: NonZeroUsize, after: Option<&Cursor>) -> JsonMap {
        profile_variables(&self.username, first, after)
    }

    fn connection_pointer(&self) -> &'static str {
        PROFILE_PROJECTS_POINTER
    }

    fn normalize(&self, node: &Value) -> DetailedProject {
        DetailedProject::from_node(node)
    }
}

fn profile_variables(username: &Subject, first: NonZeroUsize, after: Option<&Cursor>) -> JsonMap {
    let mut vars = JsonMap::new();
    vars.insert("username".into(), username.clone().into());
    vars.insert("first".into(), first.get().into());
    if let Some(cursor) = after {
        vars.insert("after".into(), cursor.clone().into());
    }
    vars
}

/// A profile project's name, link, cover images, engagement stats, and
/// creative fields
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ProjectSummary {
    pub id: Id,
    pub slug: String,
    pub name: String,

    /// The HTTP URL to the project's page
    pub url: String,

    /// Publication time as a Unix timestamp
    pub published_on: u64,

    /// URL of the 404px-wide cover, or a smaller one if that's missing
    pub thumbnail: String,

    /// URL of the largest available cover image
    pub image: String,

    pub views: u64,
    pub comments: u64,
    pub likes: u64,
    pub fields: Vec<Field>,
}

impl ProjectSummary {
    pub fn from_node(node: &Value) -> ProjectSummary {
        let covers = node.get("covers").unwrap_or(&Value::Null);
        ProjectSummary {
            id: id_at(node, "/id"),
            slug: str_at(node, "/slug"),
            name: str_at(node, "/name"),
            url: str_at(node, "/url"),
            published_on: u64_at(node, "/publishedOn"),
            thumbnail: first_url(covers, SUMMARY_THUMBNAIL_SIZES),
            image: first_url(covers, IMAGE_SIZES),
            views: u64_at(node, "/stats/views/all"),
            comments: u64_at(node, "/stats/comments/all"),
            likes: u64_at(node, "/stats/appreciations/all"),
            fields: array_at(node, "/fields")
                .iter()
                .map(Field::from_node)
                .collect(),
        }
    }
}

/// A profile project with its owners, creative fields, and engagement stats
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct DetailedProject {
    pub id: Id,
    pub slug: String,
    pub name: String,
    pub url: String,

    /// Publication time as a Unix timestamp
    pub published_on: u64,

    /// Last modification time as a Unix timestamp
    pub modified_on: u64,

    /// URL of the largest available cover no bigger than 808px wide
    pub thumbnail: String,

    pub views: u64,
    pub comments: u64,

    /// Number of appreciations
    pub likes: u64,

    pub owners: Vec<Owner>,
    pub fields: Vec<Field>,
}

impl DetailedProject {
    pub fn from_node(node: &Value) -> DetailedProject {
        DetailedProject {
            id: id_at(node, "/id"),
            slug: str_at(node, "/slug"),
            name: str_at(node, "/name"),
            url: str_at(node, "/url"),
            published_on: u64_at(node, "/publishedOn"),
            modified_on: u64_at(node, "/modifiedOn"),
            thumbnail: first_url(node.get("covers").unwrap_or(&Value::Null), THUMBNAIL_SIZES),
            views: u64_at(node, "/stats/views/all"),
            comments: u64_at(node, "/stats/comments/all"),
            likes: u64_at(node, "/stats/appreciations/all"),
            owners: array_at(node, "/owners")
                .iter()
                .map(Owner::from_node)
                .collect(),
            fields: array_at(node, "/fields")
                .iter()
                .map(Field::from_node)
                .collect(),
        }
    }
}

/// A Behance user credited on a project
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Owner {
    pub id: Id,
    pub display_name: String,
    pub username: String,
    pub url: String,
    pub location: String,
    pub location_url: String,
    pub has_premium_access: bool,

    /// URL of the largest available avatar image
    pub image: String,
}

impl Owner {
    pub fn from_node(node: &Value) -> Owner {
        Owner {
            id: id_at(node, "/id"),
            display_name: str_at(node, "/displayName"),
            username: str_at(node, "/username"),
            url: str_at(node, "/url"),
            location: str_at(node, "/location"),
            location_url: str_at(node, "/locationUrl"),
            has_premium_access: bool_at(node, "/hasPremiumAccess"),
            image: first_url(node.get("images").unwrap_or(&Value::Null), AVATAR_SIZES),
        }
    }
}

/// A creative field (category) that a project is filed under
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Field {
    pub id: Id,
    pub label: String,
    pub slug: String,
    pub url: String,
}

impl Field {
    pub fn from_node(node: &Value) -> Field {
        Field {
            id: id_at(node, "/id"),
            label: str_at(node, "/label"),
            slug: str_at(node, "/slug"),
            url: str_at(node, "/url"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn pugbomb() -> Subject {
        "pugbomb".parse().unwrap()
    }

    #[test]
    fn variables_without_cursor() {
        let query = ProfileProjects::new(pugbomb());
        let vars = query.variables(NonZeroUsize::new(12).unwrap(), None);
        assert_eq!(
            Value::Object(vars),
            json!({"username": "pugbomb", "first": 12})
        );
    }

    #[test]
    fn variables_with_cursor() {
        let query = DetailedProfileProjects::new(pugbomb());
        let cursor = Cursor::from_offset(24);
        let vars = query.variables(NonZeroUsize::new(26).unwrap(), Some(&cursor));
        assert_eq!(
            Value::Object(vars),
            json!({"username": "pugbomb", "first": 26, "after": "MjQ="})
        );
    }

    #[test]
    fn documents_differ_by_detail() {
        let minimal = ProfileProjects::new(pugbomb());
        let full = DetailedProfileProjects::new(pugbomb());
        assert!(minimal.document().contains("profileProjects(first: $first, after: $after)"));
        assert!(full.document().contains("fragment OwnerFields on User"));
        assert!(!minimal.document().contains("fragment"));
    }

    #[test]
    fn summary_from_full_node() {
        let node = json!({
            "id": 201916747,
            "slug": "Turning-Red-Re-Creation",
            "name": "Turning Red Re-Creation",
            "url": "https://www.behance.net/gallery/201916747/Turning-Red-Re-Creation",
            "publishedOn": 1718064000,
            "covers": {
                "size_202": {"url": "https://mir-s3-cdn-cf.behance.net/202/a.png"},
                "size_404": {"url": "https://mir-s3-cdn-cf.behance.net/404/a.png"},
                "size_808": {"url": "https://mir-s3-cdn-cf.behance.net/808/a.png"},
                "size_original": {"url": "https://mir-s3-cdn-cf.behance.net/source/a.png"},
            },
            "stats": {
                "appreciations": {"all": 311},
                "views": {"all": "2045"},
                "comments": {"all": 12},
            },
            "fields": [
                {"id": 48, "label": "Illustration", "slug": "illustration", "url": "https://www.behance.net/galleries/illustration"},
            ],
        });
        assert_eq!(
            ProjectSummary::from_node(&node),
            ProjectSummary {
                id: Id::from("201916747"),
                slug: "Turning-Red-Re-Creation".into(),
                name: "Turning Red Re-Creation".into(),
                url: "https://www.behance.net/gallery/201916747/Turning-Red-Re-Creation".into(),
                published_on: 1718064000,
                thumbnail: "https://mir-s3-cdn-cf.behance.net/404/a.png".into(),
                image: "https://mir-s3-cdn-cf.behance.net/source/a.png".into(),
                views: 2045,
                comments: 12,
                likes: 311,
                fields: vec![Field {
                    id: Id::from("48"),
                    label: "Illustration".into(),
                    slug: "illustration".into(),
                    url: "https://www.behance.net/galleries/illustration".into(),
                }],
            }
        );
    }

    #[test]
    fn summary_from_bare_node() {
        let node = json!({"id": "12", "covers": {"size_202": {"url": "https://img/202.jpg"}}, "stats": null, "fields": {}});
        let summary = ProjectSummary::from_node(&node);
        assert_eq!(summary.id.as_str(), "12");
        assert_eq!(summary.slug, "");
        assert_eq!(summary.published_on, 0);
        assert_eq!(summary.thumbnail, "https://img/202.jpg");
        assert_eq!(summary.image, "https://img/202.jpg");
        assert_eq!((summary.views, summary.comments, summary.likes), (0, 0, 0));
        assert!(summary.fields.is_empty());
    }

    #[test]
    fn minimal_document_requests_stats_and_fields() {
        let document = ProfileProjects::new(pugbomb()).document();
        for field in ["slug", "publishedOn", "appreciations { all }", "fields {"] {
            assert!(document.contains(field), "{field:?} not requested");
        }
    }

    #[test]
    fn detailed_from_bare_node() {
        let node = json!({"id": 7, "covers": null, "stats": {"views": {}}, "owners": null});
        assert_eq!(
            DetailedProject::from_node(&node),
            DetailedProject {
                id: Id::from("7"),
                slug: String::new(),
                name: String::new(),
                url: String::new(),
                published_on: 0,
                modified_on: 0,
                thumbnail: String::new(),
                views: 0,
                comments: 0,
                likes: 0,
                owners: Vec::new(),
                fields: Vec::new(),
            }
        );
    }

    #[test]
    fn thumbnail_falls_back_to_smaller_size() {
        let node = json!({"id": 1, "covers": {"size_202": {"url": "https://img/202.jpg"}}});
        assert_eq!(DetailedProject::from_node(&node).thumbnail, "https://img/202.jpg");
    }

    #[test]
    fn thumbnail_prefers_largest_size() {
        let node = json!({"id": 1, "covers": {
            "size_202": {"url": "https://img/202.jpg"},
            "size_404": {"url": "https://img/404.jpg"},
            "size_808": {"url": "https://img/808.jpg"},
            "size_original": {"url": "https://img/orig.jpg"},
        }});
        assert_eq!(DetailedProject::from_node(&node).thumbnail, "https://img/808.jpg");
        assert_eq!(ProjectSummary::from_node(&node).image, "https://img/orig.jpg");
    }

    #[test]
    fn detailed_with_owners_and_fields() {
        let node = json!({
            "id": 99,
            "slug": "Poster-Series",
            "name": "Poster Series",
            "url": "https://www.behance.net/gallery/99/Poster-Series",
            "publishedOn": 1718064000,
            "modifiedOn": 1718150400,
            "stats": {
                "appreciations": {"all": 311},
                "views": {"all": 2045},
                "comments": {"all": 12},
            },
            "owners": [{
                "id": 555,
                "displayName": "Pug Bomb",
                "username": "pugbomb",
                "url": "https://www.behance.net/pugbomb",
                "location": "Lisbon, Portugal",
                "locationUrl": "https://www.behance.net/search/users?country=PT",
                "hasPremiumAccess": true,
                "images": {
                    "size_50": {"url": "https://img/u50.jpg"},
                    "size_115": {"url": "https://img/u115.jpg"},
                },
            }],
            "fields": [
                {"id": 48, "label": "Illustration", "slug": "illustration", "url": "https://www.behance.net/galleries/illustration"},
            ],
        });
        let project = DetailedProject::from_node(&node);
        assert_eq!(project.published_on, 1718064000);
        assert_eq!(project.likes, 311);
        assert_eq!(project.views, 2045);
        assert_eq!(project.comments, 12);
        assert_eq!(
            project.owners,
            [Owner {
                id: Id::from("555"),
                display_name: "Pug Bomb".into(),
                username: "pugbomb".into(),
                url: "https://www.behance.net/pugbomb".into(),
                location: "Lisbon, Portugal".into(),
                location_url: "https://www.behance.net/search/users?country=PT".into(),
                has_premium_access: true,
                image: "https://img/u115.jpg".into(),
            }]
        );
        assert_eq!(
            project.fields,
            [Field {
                id: Id::from("48"),
                label: "Illustration".into(),
                slug: "illustration".into(),
                url: "https://www.behance.net/galleries/illustration".into(),
            }]
        );
    }
}
