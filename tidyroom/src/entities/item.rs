use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Kind of clutter, decides which cleaning zones accept an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemCategory {
    Bedding,
    Clothes,
    /// Miscellaneous personal belongings
    #[serde(rename = "item")]
    General,
    Trash,
    Dishes,
    Food,
    Utensils,
    Books,
    Electronics,
}

impl Display for ItemCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ItemCategory::Bedding => "bedding",
            ItemCategory::Clothes => "clothes",
            ItemCategory::General => "item",
            ItemCategory::Trash => "trash",
            ItemCategory::Dishes => "dishes",
            ItemCategory::Food => "food",
            ItemCategory::Utensils => "utensils",
            ItemCategory::Books => "books",
            ItemCategory::Electronics => "electronics",
        };
        f.write_str(s)
    }
}

/// Coarse size of a clutter item. Every class maps to a fixed square footprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SizeClass {
    Small,
    #[default]
    Medium,
    Large,
}

impl SizeClass {
    pub const ALL: [SizeClass; 3] = [SizeClass::Small, SizeClass::Medium, SizeClass::Large];

    /// Width and height of the item's footprint
    pub const fn dimensions(self) -> (i32, i32) {
        match self {
            SizeClass::Small => (25, 25),
            SizeClass::Medium => (35, 35),
            SizeClass::Large => (50, 50),
        }
    }

    pub fn width(self) -> i32 {
        self.dimensions().0
    }

    pub fn height(self) -> i32 {
        self.dimensions().1
    }

    /// Parses the snake_case name, `None` for anything else.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "small" => Some(SizeClass::Small),
            "medium" => Some(SizeClass::Medium),
            "large" => Some(SizeClass::Large),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SizeClass::Small => "small",
            SizeClass::Medium => "medium",
            SizeClass::Large => "large",
        }
    }
}

/// One candidate clutter item of a room template.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ItemDescriptor {
    pub category: ItemCategory,
    pub name: String,
    /// Fill colour as `#RRGGBB`
    pub color: String,
    pub size: SizeClass,
}

impl ItemDescriptor {
    pub fn new(category: ItemCategory, name: &str, color: &str, size: SizeClass) -> Self {
        Self {
            category,
            name: name.to_string(),
            color: color.to_string(),
            size,
        }
    }

    pub fn dimensions(&self) -> (i32, i32) {
        self.size.dimensions()
    }
}
