use super::{DetailedProject, Field, Owner};
use crate::types::Id;
use serde::Serialize;
use std::collections::BTreeMap;

/// A collection of [`DetailedProject`]s with their owners and creative fields
/// factored out into lookup tables keyed by ID, so that an owner or field
/// shared by several projects is stored once
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct ProjectCatalog {
    pub owners: BTreeMap<Id, Owner>,
    pub fields: BTreeMap<Id, Field>,

    /// Projects in the order in which they were added
    pub projects: Vec<CatalogEntry>,
}

impl ProjectCatalog {
    pub fn new() -> ProjectCatalog {
        ProjectCatalog::default()
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Add a project.  Owners and fields without an ID are dropped; a later
    /// record for an already-known ID replaces the earlier one.
    pub fn insert(&mut self, project: DetailedProject) {
        let DetailedProject {
            id,
            slug,
            name,
            url,
            published_on,
            modified_on,
            thumbnail,
            views,
            comments,
            likes,
            owners,
            fields,
        } = project;
        let mut owner_ids = Vec::with_capacity(owners.len());
        for owner in owners.into_iter().filter(|o| !o.id.is_empty()) {
            owner_ids.push(owner.id.clone());
            self.owners.insert(owner.id.clone(), owner);
        }
        let mut field_ids = Vec::with_capacity(fields.len());
        for field in fields.into_iter().filter(|f| !f.id.is_empty()) {
            field_ids.push(field.id.clone());
            self.fields.insert(field.id.clone(), field);
        }
        self.projects.push(CatalogEntry {
            id,
            owner_ids,
            field_ids,
            slug,
            name,
            url,
            published_on,
            modified_on,
            thumbnail,
            views,
            comments,
            likes,
        });
    }
}

impl Extend<DetailedProject> for ProjectCatalog {
    fn extend<I: IntoIterator<Item = DetailedProject>>(&mut self, iter: I) {
        for project in iter {
            self.insert(project);
        }
    }
}

impl FromIterator<DetailedProject> for ProjectCatalog {
    fn from_iter<I: IntoIterator<Item = DetailedProject>>(iter: I) -> ProjectCatalog {
        let mut catalog = ProjectCatalog::new();
        catalog.extend(iter);
        catalog
    }
}

/// A [`DetailedProject`] whose owners and fields are stored in the
/// containing [`ProjectCatalog`]
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct CatalogEntry {
    pub id: Id,
    pub owner_ids: Vec<Id>,
    pub field_ids: Vec<Id>,
    pub slug: String,
    pub name: String,
    pub url: String,
    pub published_on: u64,
    pub modified_on: u64,
    pub thumbnail: String,
    pub views: u64,
    pub comments: u64,
    pub likes: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn project(id: u64, owner_ids: &[u64], field_ids: &[u64]) -> DetailedProject {
        DetailedProject::from_node(&json!({
            "id": id,
            "name": format!("Project {id}"),
            "owners": owner_ids
                .iter()
                .map(|o| json!({"id": o, "username": format!("user{o}")}))
                .collect::<Vec<_>>(),
            "fields": field_ids
                .iter()
                .map(|f| json!({"id": f, "label": format!("Field {f}")}))
                .collect::<Vec<_>>(),
        }))
    }

    #[test]
    fn shared_owners_and_fields_are_stored_once() {
        let catalog = [
            project(1, &[10], &[100, 101]),
            project(2, &[10, 11], &[101]),
            project(3, &[], &[]),
        ]
        .into_iter()
        .collect::<ProjectCatalog>();
        assert_eq!(catalog.len(), 3);
        assert_eq!(
            catalog.owners.keys().map(Id::as_str).collect::<Vec<_>>(),
            ["10", "11"]
        );
        assert_eq!(
            catalog.fields.keys().map(Id::as_str).collect::<Vec<_>>(),
            ["100", "101"]
        );
        assert_eq!(catalog.projects[1].owner_ids, [Id::from("10"), Id::from("11")]);
        assert_eq!(catalog.projects[1].field_ids, [Id::from("101")]);
        assert!(catalog.projects[2].owner_ids.is_empty());
        assert_eq!(
            catalog.projects.iter().map(|p| p.id.as_str()).collect::<Vec<_>>(),
            ["1", "2", "3"]
        );
    }

    #[test]
    fn idless_owner_is_dropped() {
        let mut catalog = ProjectCatalog::new();
        catalog.insert(DetailedProject::from_node(&json!({
            "id": 5,
            "owners": [{"displayName": "Anonymous"}],
        })));
        assert!(catalog.owners.is_empty());
        assert!(catalog.projects[0].owner_ids.is_empty());
    }

    #[test]
    fn serializes_as_lookup_tables() {
        let catalog = [project(1, &[10], &[100])]
            .into_iter()
            .collect::<ProjectCatalog>();
        let value = serde_json::to_value(&catalog).unwrap();
        assert_eq!(value["owners"]["10"]["username"], json!("user10"));
        assert_eq!(value["fields"]["100"]["label"], json!("Field 100"));
        assert_eq!(value["projects"][0]["owner_ids"], json!(["10"]));
    }

    #[test]
    fn empty_catalog() {
        let catalog = ProjectCatalog::new();
        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
    }
}
