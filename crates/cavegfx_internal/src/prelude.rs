//! Prelude module for `cavegfx_internal`.
//!
//! This module provides a convenient way to import commonly used types and traits.
//!
//! # Examples
//!
//! ```rust
//! use cavegfx_internal::prelude::*;
//!
//! let mut theme: GraphicsTheme<PackedSurface> = GraphicsTheme::new(RenderSettings::default()).unwrap();
//! let icon = theme.bordered_icon(TileId::DIAMOND).unwrap();
//! assert_eq!(icon.width(), 18);
//! ```

// Re-export everything from cavegfx_theme::prelude, which includes cavegfx_types::prelude
#[doc(inline)]
pub use cavegfx_theme::prelude::*;

#[doc(inline)]
pub use cavegfx_theme;

#[doc(inline)]
pub use cavegfx_types;
