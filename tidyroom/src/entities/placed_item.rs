use crate::entities::ItemDescriptor;
use crate::geometry::{Point, Rect};

/// How the position of a [`PlacedItem`] was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlacementOrigin {
    /// Found by the randomized grid search, at the given (zero based) attempt.
    Searched { attempt: usize },
    /// Attempt budget was exhausted, the deterministic fallback slot was used.
    /// These positions are not collision checked and may overlap anything.
    Fallback,
}

/// A selected item together with its initial position in the room.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlacedItem {
    pub item: ItemDescriptor,
    /// Footprint of the item, its top-left corner is the item's position
    pub rect: Rect,
    pub origin: PlacementOrigin,
}

impl PlacedItem {
    pub fn position(&self) -> Point {
        self.rect.origin()
    }

    pub fn width(&self) -> i32 {
        self.rect.width()
    }

    pub fn height(&self) -> i32 {
        self.rect.height()
    }

    pub fn is_fallback(&self) -> bool {
        self.origin == PlacementOrigin::Fallback
    }
}
