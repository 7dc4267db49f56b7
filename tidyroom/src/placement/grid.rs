use std::ops::Range;

use ndarray::{Array2, s};

use crate::geometry::Rect;
use crate::util::GeneratorConfig;

/// Coarse boolean raster over the room canvas, tracking which cells are taken.
///
/// A rectangle covers every cell its extent intersects, partial overlap included.
/// Lives only for the duration of a single generation run.
#[derive(Debug, Clone)]
pub struct OccupancyGrid {
    /// Indexed by `[row, col]`
    cells: Array2<bool>,
    cell_size: i32,
}

/// Rows and columns of the cells covered by a rectangle, clipped to the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellRange {
    pub rows: Range<usize>,
    pub cols: Range<usize>,
}

impl CellRange {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() || self.cols.is_empty()
    }

    pub fn n_cells(&self) -> usize {
        self.rows.len() * self.cols.len()
    }
}

impl OccupancyGrid {
    pub fn new(n_cols: usize, n_rows: usize, cell_size: i32) -> Self {
        assert!(cell_size > 0, "cell size must be positive");
        Self {
            cells: Array2::from_elem((n_rows, n_cols), false),
            cell_size,
        }
    }

    /// Empty grid covering the canvas described by `config`.
    pub fn for_canvas(config: &GeneratorConfig) -> Self {
        let (n_cols, n_rows) = config.grid_shape();
        Self::new(n_cols, n_rows, config.cell_size)
    }

    pub fn n_rows(&self) -> usize {
        self.cells.nrows()
    }

    pub fn n_cols(&self) -> usize {
        self.cells.ncols()
    }

    /// Cells covered by `rect`: from `floor(min / cell_size)` up to (excluding) `ceil(max / cell_size)`.
    pub fn cell_range(&self, rect: &Rect) -> CellRange {
        let to_range = |min: i32, max: i32, n: usize| {
            let start = min.div_euclid(self.cell_size).max(0) as usize;
            let end = max
                .saturating_add(self.cell_size - 1)
                .div_euclid(self.cell_size)
                .max(0) as usize;
            usize::min(start, n)..usize::min(end, n)
        };
        CellRange {
            rows: to_range(rect.y_min, rect.y_max, self.n_rows()),
            cols: to_range(rect.x_min, rect.x_max, self.n_cols()),
        }
    }

    /// True if none of the cells covered by `rect` are occupied.
    pub fn is_free(&self, rect: &Rect) -> bool {
        let range = self.cell_range(rect);
        if range.is_empty() {
            return true;
        }
        !self
            .cells
            .slice(s![range.rows, range.cols])
            .iter()
            .any(|&occupied| occupied)
    }

    /// Marks every cell covered by `rect` as occupied.
    pub fn occupy(&mut self, rect: &Rect) {
        let range = self.cell_range(rect);
        if !range.is_empty() {
            self.cells.slice_mut(s![range.rows, range.cols]).fill(true);
        }
    }

    pub fn is_occupied(&self, row: usize, col: usize) -> bool {
        self.cells[[row, col]]
    }

    pub fn n_occupied(&self) -> usize {
        self.cells.iter().filter(|&&occupied| occupied).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x: i32, y: i32, w: i32, h: i32) -> Rect {
        Rect::try_from_xywh(x, y, w, h).unwrap()
    }

    fn default_grid() -> OccupancyGrid {
        OccupancyGrid::for_canvas(&GeneratorConfig::default())
    }

    #[test]
    fn far_away_rect_does_not_overflow() {
        let mut grid = default_grid();
        let far = Rect::try_new(i32::MAX - 5, 0, i32::MAX, 10).unwrap();
        assert!(grid.cell_range(&far).is_empty());
        assert!(grid.is_free(&far));
        grid.occupy(&far);
        assert_eq!(grid.n_occupied(), 0);
    }

    #[test]
    fn cell_range_includes_partial_cells() {
        let grid = default_grid();
        assert_eq!(grid.n_cols(), 40);
        assert_eq!(grid.n_rows(), 30);

        let bed = grid.cell_range(&rect(50, 300, 200, 100));
        assert_eq!(bed.cols, 2..13);
        assert_eq!(bed.rows, 15..20);

        let aligned = grid.cell_range(&rect(40, 100, 40, 40));
        assert_eq!(aligned.cols, 2..4);
        assert_eq!(aligned.rows, 5..7);

        let unaligned = grid.cell_range(&rect(19, 101, 25, 25));
        assert_eq!(unaligned.cols, 0..3);
        assert_eq!(unaligned.rows, 5..7);
    }

    #[test]
    fn cell_range_is_clipped_to_the_grid() {
        let grid = default_grid();
        let overflowing = grid.cell_range(&rect(790, 590, 50, 50));
        assert_eq!(overflowing.cols, 39..40);
        assert_eq!(overflowing.rows, 29..30);

        let outside = grid.cell_range(&rect(900, 700, 10, 10));
        assert!(outside.is_empty());
        let negative = grid.cell_range(&rect(-30, -30, 20, 20));
        assert!(negative.is_empty());
    }

    #[test]
    fn occupied_cells_block_overlapping_rects() {
        let mut grid = default_grid();
        let bed = rect(50, 300, 200, 100);
        grid.occupy(&bed);
        assert_eq!(grid.n_occupied(), 11 * 5);
        assert!(grid.is_occupied(15, 2));
        assert!(!grid.is_occupied(14, 2));

        // overlaps the bed
        assert!(!grid.is_free(&rect(240, 390, 25, 25)));
        // shares a cell with the bed without touching it
        assert!(!grid.is_free(&rect(251, 300, 25, 25)));
        // starts right after the bed's last cell
        assert!(grid.is_free(&rect(260, 300, 25, 25)));
        assert!(grid.is_free(&rect(0, 100, 50, 50)));
    }
}
