use anyhow::{Result, ensure};
use serde::{Deserialize, Serialize};

use crate::entities::SizeClass;
use crate::geometry::{Point, Rect};

/// Configuration of the daily room generator.
///
/// Changing any of these values changes the content generated for every date.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Width of the logical room canvas
    pub canvas_width: i32,
    /// Height of the logical room canvas
    pub canvas_height: i32,
    /// Height of the band at the top of the canvas reserved for the header, no items are scattered there
    pub top_margin: i32,
    /// Side length of a cell of the occupancy grid
    pub cell_size: i32,
    /// Number of randomized positions tried per item before resorting to the fallback
    pub max_attempts: usize,
    /// Maximum number of items selected from a template's pool
    pub max_items: usize,
    /// Layout of the fallback positions
    #[serde(default)]
    pub fallback: FallbackGrid,
}

impl GeneratorConfig {
    /// Checks whether every size class fits in the area below the top margin.
    pub fn validate(&self) -> Result<()> {
        ensure!(self.cell_size > 0, "cell size must be positive, got {}", self.cell_size);
        ensure!(self.top_margin >= 0, "top margin cannot be negative, got {}", self.top_margin);
        ensure!(self.max_items > 0, "at least one item must be selected");
        ensure!(self.fallback.columns > 0, "the fallback grid requires at least one column");
        for size in SizeClass::ALL {
            let (w, h) = size.dimensions();
            ensure!(
                self.canvas_width > w && self.canvas_height - self.top_margin > h,
                "{} items ({w}x{h}) do not fit in a {}x{} canvas with a top margin of {}",
                size.name(),
                self.canvas_width,
                self.canvas_height,
                self.top_margin
            );
        }
        Ok(())
    }

    pub fn canvas(&self) -> Rect {
        Rect::from_origin(Point(0, 0), self.canvas_width, self.canvas_height)
    }

    /// Number of columns and rows of the occupancy grid covering the canvas
    pub fn grid_shape(&self) -> (usize, usize) {
        let n_cols = (self.canvas_width + self.cell_size - 1) / self.cell_size;
        let n_rows = (self.canvas_height + self.cell_size - 1) / self.cell_size;
        (n_cols as usize, n_rows as usize)
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            canvas_width: 800,
            canvas_height: 600,
            top_margin: 100,
            cell_size: 20,
            max_attempts: 50,
            max_items: 25,
            fallback: FallbackGrid::default(),
        }
    }
}

/// Rows of fixed slots used for items for which no free position was found.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct FallbackGrid {
    /// Number of slots per row
    pub columns: usize,
    pub x_offset: i32,
    pub x_step: i32,
    pub y_offset: i32,
    pub y_step: i32,
}

impl FallbackGrid {
    /// Top-left corner of the slot for the item at `index` in the selection order.
    pub fn slot(&self, index: usize) -> Point {
        let col = (index % self.columns) as i32;
        let row = (index / self.columns) as i32;
        Point(
            col * self.x_step + self.x_offset,
            row * self.y_step + self.y_offset,
        )
    }
}

impl Default for FallbackGrid {
    fn default() -> Self {
        Self {
            columns: 10,
            x_offset: 50,
            x_step: 60,
            y_offset: 150,
            y_step: 40,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = GeneratorConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.grid_shape(), (40, 30));
    }

    #[test]
    fn cramped_canvas_is_rejected() {
        let config = GeneratorConfig {
            canvas_height: 140,
            ..GeneratorConfig::default()
        };
        assert!(config.validate().is_err());

        let config = GeneratorConfig {
            cell_size: 0,
            ..GeneratorConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn fallback_slots() {
        let fb = FallbackGrid::default();
        assert_eq!(fb.slot(0), Point(50, 150));
        assert_eq!(fb.slot(9), Point(590, 150));
        assert_eq!(fb.slot(10), Point(50, 190));
        assert_eq!(fb.slot(24), Point(290, 230));
    }

    #[test]
    fn partial_config_deserializes_with_default_fallback() {
        let json = r#"{
            "canvas_width": 1024,
            "canvas_height": 768,
            "top_margin": 64,
            "cell_size": 16,
            "max_attempts": 20,
            "max_items": 30
        }"#;
        let config: GeneratorConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.fallback, FallbackGrid::default());
        assert_eq!(config.grid_shape(), (64, 48));
    }
}
