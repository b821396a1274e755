//! This module is separated into its own crate to enable simple dynamic linking for `cave-gfx`, and should not be used directly.

/// `use cave_gfx::prelude::*;` to import commonly used items.
pub mod prelude;

// Re-export the member crates for convenience
pub use cavegfx_theme;
pub use cavegfx_types;

// Re-export commonly used types at crate root
pub use cavegfx_theme::{
	error::{ConsistencyFault, GfxError},
	theme::{GraphicsTheme, ThemeMode},
};
