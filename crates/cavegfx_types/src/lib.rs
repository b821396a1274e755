//! Core data types for the `cave-gfx` project.
//!
//! # Contents
//!
//! - **Colors**: 24-bit role colors, RGBA pixels, the C64 palette and the
//!   six-entry [`ColorTable`](color::ColorTable) that re-colors a sheet
//! - **Surfaces**: the [`Surface`](surface::Surface) contract and its two
//!   backends
//! - **Tiles**: the [`TileId`](tile::TileId) catalog and sprite sheet grid
//! - **Indexed sheets**: the compact palette-index format, its decoder and
//!   encoder, and the built-in graphics
//!
//! # Examples
//!
//! Using the prelude (recommended):
//!
//! ```
//! use cavegfx_types::prelude::*;
//!
//! let source = IndexedSource::builtin();
//! let sheet: ImageSurface = source.decode(&ColorTable::default()).unwrap();
//!
//! assert_eq!(sheet.width(), source.cell_size() * GRID_COLUMNS);
//! assert!(!is_indexed_source(&sheet));
//! ```

pub mod color;
pub mod error;
pub mod geometry;
pub mod indexed;
pub mod surface;
pub mod tile;

/// `use cavegfx_types::prelude::*;` to import commonly used items.
pub mod prelude;
