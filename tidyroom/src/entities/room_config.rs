use std::sync::Arc;

use crate::entities::{
    CleaningZone, Furniture, ItemCategory, ItemDescriptor, PlacedItem, RoomTemplate,
};
use crate::geometry::geo_traits::Contains;
use crate::geometry::{Point, Rect};
use crate::placement::Placement;
use crate::seed::Seed;

/// Everything the rendering and interaction layer needs to set up the room of the day.
/// Read-only once generated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomConfiguration {
    /// The chosen template, shared with the catalog
    pub template: Arc<RoomTemplate>,
    /// Selected items in selection order, each with its initial position
    pub placed_items: Vec<PlacedItem>,
    pub seed: Seed,
    /// Bounds of the room canvas the items were placed on
    pub canvas: Rect,
}

impl RoomConfiguration {
    /// Zips the selected items with their placements (by index) into a configuration.
    pub fn assemble(
        template: Arc<RoomTemplate>,
        selected_items: Vec<ItemDescriptor>,
        placements: Vec<Placement>,
        seed: Seed,
        canvas: Rect,
    ) -> Self {
        assert_eq!(
            selected_items.len(),
            placements.len(),
            "every selected item requires exactly one placement"
        );
        let placed_items = selected_items
            .into_iter()
            .zip(placements)
            .map(|(item, placement)| PlacedItem {
                item,
                rect: placement.rect,
                origin: placement.origin,
            })
            .collect();

        Self {
            template,
            placed_items,
            seed,
            canvas,
        }
    }

    pub fn template_id(&self) -> &str {
        &self.template.id
    }

    pub fn furniture(&self) -> &[Furniture] {
        &self.template.furniture
    }

    pub fn cleaning_zones(&self) -> &[CleaningZone] {
        &self.template.cleaning_zones
    }

    /// Selected item descriptors, in selection order
    pub fn selected_items(&self) -> impl Iterator<Item = &ItemDescriptor> {
        self.placed_items.iter().map(|pi| &pi.item)
    }

    /// Item footprints, parallel to [`RoomConfiguration::selected_items`]
    pub fn item_positions(&self) -> impl Iterator<Item = Rect> + '_ {
        self.placed_items.iter().map(|pi| pi.rect)
    }

    pub fn n_items(&self) -> usize {
        self.placed_items.len()
    }

    /// Number of items that ended up on a fallback slot
    pub fn n_fallbacks(&self) -> usize {
        self.placed_items.iter().filter(|pi| pi.is_fallback()).count()
    }

    /// First cleaning zone (in template order) containing `point`, edges included.
    pub fn zone_at(&self, point: Point) -> Option<&CleaningZone> {
        self.cleaning_zones()
            .iter()
            .find(|zone| zone.rect.contains(&point))
    }

    /// Zone in which an item of `category` dropped at `point` is put away.
    /// `None` when there is no zone at the point or the zone refuses the category.
    pub fn drop_target(&self, category: ItemCategory, point: Point) -> Option<&CleaningZone> {
        self.zone_at(point).filter(|zone| zone.accepts(category))
    }
}
