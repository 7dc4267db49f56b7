mod engine;
mod grid;

#[doc(inline)]
pub use engine::Placement;
#[doc(inline)]
pub use engine::PlacementEngine;
#[doc(inline)]
pub use grid::CellRange;
#[doc(inline)]
pub use grid::OccupancyGrid;
