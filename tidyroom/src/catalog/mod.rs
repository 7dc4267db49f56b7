mod builtin;

use std::sync::Arc;

use anyhow::{Result, ensure};
use itertools::Itertools;
use log::debug;

use crate::entities::{RoomTemplate, TemplateSummary};

/// Immutable, ordered set of room templates.
///
/// Guaranteed to be non-empty and free of duplicate ids.
/// The order of the templates is part of the daily content: reordering changes which room
/// every date maps to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateCatalog {
    templates: Vec<Arc<RoomTemplate>>,
}

impl TemplateCatalog {
    pub fn new(templates: Vec<RoomTemplate>) -> Result<Self> {
        ensure!(!templates.is_empty(), "a template catalog requires at least one template");
        let duplicates = templates.iter().map(|t| &t.id).duplicates().collect_vec();
        ensure!(duplicates.is_empty(), "duplicate template ids: {duplicates:?}");
        for t in &templates {
            ensure!(
                !t.item_pool.is_empty(),
                "template {} has no candidate items",
                t.id
            );
        }
        debug!(
            "[CATALOG] created catalog with templates [{}]",
            templates.iter().map(|t| t.id.as_str()).join(", ")
        );

        Ok(Self {
            templates: templates.into_iter().map(Arc::new).collect(),
        })
    }

    /// The catalog shipped with the game: bedroom, kitchen and living room.
    pub fn builtin() -> Self {
        Self::new(builtin::templates()).expect("built-in catalog should be valid")
    }

    /// Id, name and description of every template, in catalog order
    pub fn list(&self) -> Vec<TemplateSummary> {
        self.templates.iter().map(|t| t.summary()).collect()
    }

    pub fn get(&self, id: &str) -> Option<&Arc<RoomTemplate>> {
        self.templates.iter().find(|t| t.id == id)
    }

    pub fn template(&self, index: usize) -> &Arc<RoomTemplate> {
        &self.templates[index]
    }

    pub fn templates(&self) -> &[Arc<RoomTemplate>] {
        &self.templates
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{ItemCategory, ItemDescriptor, SizeClass};

    fn minimal(id: &str) -> RoomTemplate {
        RoomTemplate {
            id: id.to_string(),
            name: id.to_uppercase(),
            description: String::new(),
            furniture: vec![],
            cleaning_zones: vec![],
            item_pool: vec![ItemDescriptor::new(
                ItemCategory::Trash,
                "Tissue",
                "#F5F5F5",
                SizeClass::Small,
            )],
        }
    }

    #[test]
    fn empty_catalog_is_rejected() {
        assert!(TemplateCatalog::new(vec![]).is_err());
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        assert!(TemplateCatalog::new(vec![minimal("a"), minimal("a")]).is_err());
        assert!(TemplateCatalog::new(vec![minimal("a"), minimal("b")]).is_ok());
    }

    #[test]
    fn template_without_items_is_rejected() {
        let mut t = minimal("a");
        t.item_pool.clear();
        assert!(TemplateCatalog::new(vec![t]).is_err());
    }

    #[test]
    fn builtin_catalog_listing_and_lookup() {
        let catalog = TemplateCatalog::builtin();
        let ids = catalog.list().into_iter().map(|s| s.id).collect_vec();
        assert_eq!(ids, ["bedroom", "kitchen", "living_room"]);

        let kitchen = catalog.get("kitchen").unwrap();
        assert_eq!(kitchen.name, "Kitchen");
        assert_eq!(kitchen.furniture.len(), 5);
        assert!(catalog.get("garage").is_none());
    }

    #[test]
    fn builtin_templates_are_well_formed() {
        for t in TemplateCatalog::builtin().templates() {
            assert!((3..=5).contains(&t.furniture.len()), "{}", t.id);
            assert!((3..=5).contains(&t.cleaning_zones.len()), "{}", t.id);
            assert!((15..=25).contains(&t.item_pool.len()), "{}", t.id);
            assert!(t.zone("trash").is_some(), "{} has no trash zone", t.id);
            // every item can be put away somewhere
            for item in &t.item_pool {
                assert!(
                    t.cleaning_zones.iter().any(|z| z.accepts(item.category)),
                    "{}: no zone accepts {}",
                    t.id,
                    item.name
                );
            }
        }
    }
}
