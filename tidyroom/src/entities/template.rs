use crate::entities::{ItemCategory, ItemDescriptor};
use crate::geometry::{Point, Rect};

/// A fixed piece of furniture, items are never scattered on top of it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Furniture {
    /// Semantic type, e.g. `bed` or `coffee_table`
    pub kind: String,
    pub rect: Rect,
}

/// Area of the room where items of specific categories are put away.
/// Only consulted by the gameplay layer, the generator ignores zones.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CleaningZone {
    pub id: String,
    pub rect: Rect,
    pub accepts: Vec<ItemCategory>,
}

impl CleaningZone {
    pub fn accepts(&self, category: ItemCategory) -> bool {
        self.accepts.contains(&category)
    }

    /// Top-left position which centres an item of `width` x `height` within the zone.
    /// Odd margins are floored: a 25 wide item in a 60 wide zone starting at 400 snaps to 417.
    pub fn snap_position(&self, width: i32, height: i32) -> Point {
        Point(
            self.rect.x_min + (self.rect.width() - width).div_euclid(2),
            self.rect.y_min + (self.rect.height() - height).div_euclid(2),
        )
    }
}

/// Hand-authored room layout: furniture, cleaning zones and the pool of candidate clutter.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RoomTemplate {
    pub id: String,
    pub name: String,
    pub description: String,
    pub furniture: Vec<Furniture>,
    pub cleaning_zones: Vec<CleaningZone>,
    /// Candidate items, the order matters for the seeded shuffle
    pub item_pool: Vec<ItemDescriptor>,
}

impl RoomTemplate {
    pub fn summary(&self) -> TemplateSummary {
        TemplateSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            description: self.description.clone(),
        }
    }

    pub fn zone(&self, id: &str) -> Option<&CleaningZone> {
        self.cleaning_zones.iter().find(|z| z.id == id)
    }
}

/// Template metadata without any geometry, for menus.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TemplateSummary {
    pub id: String,
    pub name: String,
    pub description: String,
}
