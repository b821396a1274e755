#![allow(clippy::single_component_path_imports)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! `cave-gfx` turns the compact indexed sprite sheets of retro cave games into
//! re-colorable, display-ready tile sets.
//!
//! ```
//! use cave_gfx::prelude::*;
//!
//! let mut theme: GraphicsTheme = GraphicsTheme::new(RenderSettings::default()).unwrap();
//! let colors = ColorTable::new([c64::BLUE, c64::ORANGE, c64::GREY, c64::WHITE, c64::RED, c64::GREEN]);
//! theme.select_colors(colors).unwrap();
//!
//! let guard = theme.tile(TileId::GUARD_LEFT).unwrap();
//! assert_eq!(guard.width(), 16);
//! ```
//!
pub use cavegfx_internal::*;

#[cfg(all(feature = "dynamic_linking", not(target_family = "wasm")))]
#[allow(unused_imports)]
use cavegfx_dylib;
