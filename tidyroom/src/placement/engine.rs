use log::{debug, warn};

use crate::entities::{Furniture, ItemDescriptor, PlacementOrigin};
use crate::geometry::{Point, Rect};
use crate::placement::OccupancyGrid;
use crate::random::RandomSource;
use crate::seed::Seed;
use crate::util::GeneratorConfig;

/// Distance between the draw inputs of two consecutive items
const ITEM_DRAW_STRIDE: i64 = 100;
/// Offset between the x and y draw of a single attempt
const Y_DRAW_OFFSET: i64 = 50;

/// Position assigned to a single item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Placement {
    pub rect: Rect,
    pub origin: PlacementOrigin,
}

/// Scatters items over the room canvas without overlapping furniture or each other.
///
/// Every item gets a bounded number of randomized attempts, checked against an [`OccupancyGrid`].
/// When all of them collide, the item is put on a fixed fallback slot instead.
/// Fallback slots are neither checked against nor registered in the grid, so they can overlap.
#[derive(Debug, Clone, Copy)]
pub struct PlacementEngine {
    pub config: GeneratorConfig,
}

impl PlacementEngine {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Places all `items` in order, returns one [`Placement`] per item.
    pub fn place_all(
        &self,
        items: &[ItemDescriptor],
        furniture: &[Furniture],
        seed: Seed,
        source: &impl RandomSource,
    ) -> Vec<Placement> {
        let mut grid = OccupancyGrid::for_canvas(&self.config);
        for f in furniture {
            grid.occupy(&f.rect);
        }
        debug!(
            "[PLACE] {} furniture pieces occupy {}/{} cells",
            furniture.len(),
            grid.n_occupied(),
            grid.n_rows() * grid.n_cols()
        );

        items
            .iter()
            .enumerate()
            .map(|(index, item)| self.place(index, item, &mut grid, seed, source))
            .collect()
    }

    /// Places the item at position `index` of the selection order and registers it in `grid`.
    pub fn place(
        &self,
        index: usize,
        item: &ItemDescriptor,
        grid: &mut OccupancyGrid,
        seed: Seed,
        source: &impl RandomSource,
    ) -> Placement {
        let (width, height) = item.dimensions();
        let x_span = self.config.canvas_width - width;
        let y_span = self.config.canvas_height - height - self.config.top_margin;

        for attempt in 0..self.config.max_attempts {
            let draw = seed.offset(index as i64 * ITEM_DRAW_STRIDE + attempt as i64);
            let x = source.offset(draw, x_span);
            let y = source.offset(draw + Y_DRAW_OFFSET, y_span) + self.config.top_margin;
            let rect = Rect::from_origin(Point(x, y), width, height);

            if grid.is_free(&rect) {
                grid.occupy(&rect);
                debug!(
                    "[PLACE] item {index} ({}) placed at ({x}, {y}) after {} attempt(s)",
                    item.name,
                    attempt + 1
                );
                return Placement {
                    rect,
                    origin: PlacementOrigin::Searched { attempt },
                };
            }
        }

        let slot = self.config.fallback.slot(index);
        warn!(
            "[PLACE] no free position for item {index} ({}) after {} attempts, falling back to ({}, {})",
            item.name,
            self.config.max_attempts,
            slot.x(),
            slot.y()
        );
        Placement {
            rect: Rect::from_origin(slot, width, height),
            origin: PlacementOrigin::Fallback,
        }
    }
}
