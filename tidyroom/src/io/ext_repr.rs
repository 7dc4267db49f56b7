use serde::{Deserialize, Serialize};

use crate::entities::ItemCategory;

/// External representation of a [`TemplateCatalog`](crate::catalog::TemplateCatalog).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtCatalog {
    /// Templates, in the order they are indexed by the daily seed
    pub templates: Vec<ExtRoomTemplate>,
}

/// External representation of a [`RoomTemplate`](crate::entities::RoomTemplate).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtRoomTemplate {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub furniture: Vec<ExtFurniture>,
    #[serde(default)]
    pub cleaning_zones: Vec<ExtCleaningZone>,
    /// Pool of candidate clutter items
    pub items: Vec<ExtItem>,
}

/// Axis-aligned rectangle, with its top-left corner at (x, y)
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExtRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

/// External representation of a [`Furniture`](crate::entities::Furniture).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtFurniture {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(flatten)]
    pub rect: ExtRect,
}

/// External representation of a [`CleaningZone`](crate::entities::CleaningZone).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtCleaningZone {
    pub id: String,
    #[serde(flatten)]
    pub rect: ExtRect,
    /// Categories of items which can be put away in this zone
    pub accepts: Vec<ItemCategory>,
}

/// External representation of an [`ItemDescriptor`](crate::entities::ItemDescriptor).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtItem {
    #[serde(rename = "type")]
    pub category: ItemCategory,
    pub name: String,
    /// Fill colour as `#RRGGBB`
    pub color: String,
    /// `small`, `medium` or `large`. Unknown sizes are treated as `medium`
    pub size: String,
}

/// External representation of a [`RoomConfiguration`](crate::entities::RoomConfiguration).
/// Selected items and their positions are stored as two parallel lists.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtRoomConfiguration {
    pub id: String,
    pub name: String,
    pub description: String,
    pub seed: i64,
    pub furniture: Vec<ExtFurniture>,
    pub cleaning_zones: Vec<ExtCleaningZone>,
    pub selected_items: Vec<ExtItem>,
    pub item_positions: Vec<ExtItemPosition>,
}

/// Initial position and footprint of a selected item
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtItemPosition {
    #[serde(flatten)]
    pub rect: ExtRect,
    /// Set when the item was put on a fallback slot (possibly overlapping other items)
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub fallback: bool,
}
