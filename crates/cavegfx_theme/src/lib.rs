//! Tile graphics synthesis for the `cave-gfx` project.
//!
//! [`GraphicsTheme`](theme::GraphicsTheme) owns the master tile table and
//! keeps it consistent with the active sheet and color table:
//!
//! - **Loading**: theme images are checked against the 8 x 32 cell grid and
//!   classified as indexed (re-colorable) or true-color (fixed) artwork
//! - **Synthesis**: base tiles are sliced from the sheet, derived tiles are
//!   produced by the static rule table in [`rules`]
//! - **Re-coloring**: a changed color table regenerates the whole table
//! - **Presentation**: display tiles with highlight variants, bordered
//!   picker icons and whole-region rendering
//!
//! # Examples
//!
//! ```
//! use cavegfx_theme::prelude::*;
//!
//! let mut theme: GraphicsTheme = GraphicsTheme::new(RenderSettings::default()).unwrap();
//! let map = TileGrid::new(2, 2, TileId::SPACE);
//!
//! let image = theme.render_region(&map, Rect::sized(2, 2), |id| id, None).unwrap();
//! assert_eq!((image.width(), image.height()), (36, 36));
//!
//! theme.build_display_tiles_from_settings().unwrap();
//! assert_eq!(theme.display_cell_size(), Some(32));
//! ```

pub mod cache;
pub mod error;
pub mod icons;
pub mod loader;
pub mod region;
pub mod rules;
pub mod settings;
pub mod synth;
pub mod table;
pub mod theme;

/// `use cavegfx_theme::prelude::*;` to import commonly used items.
pub mod prelude;
