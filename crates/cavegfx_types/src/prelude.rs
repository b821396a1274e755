//! Prelude module for `cavegfx_types`.
//!
//! This module provides a convenient way to import commonly used types, traits, and constants.
//!
//! # Examples
//!
//! ```
//! use cavegfx_types::prelude::*;
//!
//! let tile = PackedSurface::try_new(16, 16).unwrap();
//! assert_eq!(tile.get_pixel(0, 0), Rgba::TRANSPARENT);
//! ```

#[doc(inline)]
pub use crate::color::{Color, ColorTable, Rgba, c64};

#[doc(inline)]
pub use crate::error::{ColorParseError, IndexedSourceError, SurfaceError};

#[doc(inline)]
pub use crate::geometry::{Interpolation, Rect, Transform};

#[doc(inline)]
pub use crate::indexed::{IndexedSource, encode_pixel, is_indexed_source};

#[doc(inline)]
pub use crate::surface::{ImageSurface, PackedSurface, Surface};

#[doc(inline)]
pub use crate::tile::{
	BASE_TILE_COUNT, DERIVED_TILE_COUNT, GRID_COLUMNS, GRID_ROWS, OUTBOX_BLINK_FRAMES, TILE_COUNT, TileId,
};
