use itertools::Itertools;
use log::error;

use crate::entities::{PlacementOrigin, RoomConfiguration};
use crate::geometry::geo_traits::{CollidesWith, Contains};
use crate::util::GeneratorConfig;

//Various checks to verify the correctness of generated rooms

/// Every item comes from the template's pool, and exactly `min(max_items, pool size)` were selected.
pub fn selection_matches_template(room: &RoomConfiguration, config: &GeneratorConfig) -> bool {
    let pool = &room.template.item_pool;
    let expected = usize::min(config.max_items, pool.len());
    if room.n_items() != expected {
        error!("[ASSERT] expected {expected} items, room has {}", room.n_items());
        return false;
    }
    room.selected_items().all(|item| pool.contains(item))
}

/// Items placed by the grid search lie within the canvas, below the top margin.
pub fn searched_items_within_bounds(room: &RoomConfiguration, config: &GeneratorConfig) -> bool {
    let canvas = config.canvas();
    room.placed_items
        .iter()
        .filter(|pi| !pi.is_fallback())
        .all(|pi| canvas.contains(&pi.rect) && pi.rect.y_min >= config.top_margin)
}

/// Items placed by the grid search overlap neither furniture nor each other.
/// Fallback items are exempt.
pub fn searched_items_are_disjoint(room: &RoomConfiguration) -> bool {
    let searched = room
        .placed_items
        .iter()
        .filter(|pi| matches!(pi.origin, PlacementOrigin::Searched { .. }))
        .collect_vec();

    for pi in &searched {
        if let Some(f) = room.furniture().iter().find(|f| pi.rect.collides_with(&f.rect)) {
            error!("[ASSERT] {} at {:?} overlaps furniture {}", pi.item.name, pi.rect, f.kind);
            return false;
        }
    }
    for (a, b) in searched.iter().tuple_combinations() {
        if a.rect.collides_with(&b.rect) {
            error!("[ASSERT] {} and {} overlap", a.item.name, b.item.name);
            return false;
        }
    }
    true
}

pub fn room_is_consistent(room: &RoomConfiguration, config: &GeneratorConfig) -> bool {
    selection_matches_template(room, config)
        && searched_items_within_bounds(room, config)
        && searched_items_are_disjoint(room)
}
