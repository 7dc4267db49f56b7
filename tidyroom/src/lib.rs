//! Deterministic daily room generator.
//!
//! Every calendar date maps to a seed, the seed picks a room template and a shuffled selection
//! of clutter items, and a grid based placement engine scatters those items across the room
//! without overlapping furniture or each other.
//! The whole pipeline is a pure function of the date and the [`catalog::TemplateCatalog`].

/// Axis-aligned rectangles and the collision traits between them
pub mod geometry;

/// Pseudo-random sources mapping integers to `[0, 1)`
pub mod random;

/// Derivation of the daily seed from a calendar date
pub mod seed;

/// Room templates, item descriptors and the generated room configuration
pub mod entities;

/// Immutable set of room templates and the built-in catalog
pub mod catalog;

/// Seeded template choice and item shuffle
pub mod selection;

/// Occupancy grid and the placement engine
pub mod placement;

/// Entry point tying seed, selection and placement together
pub mod generator;

/// Importing and exporting catalogs and room configurations
pub mod io;

/// Configuration and debug assertions
pub mod util;
