//! Prelude module for `cavegfx_theme`.
//!
//! Re-exports the theme types together with the `cavegfx_types` prelude.

#[doc(inline)]
pub use cavegfx_types::prelude::*;

#[doc(inline)]
pub use crate::cache::{DisplayTile, Effect};

#[doc(inline)]
pub use crate::error::{ConsistencyFault, GfxError};

#[doc(inline)]
pub use crate::region::{TileGrid, TileMap, VisualEffects};

#[doc(inline)]
pub use crate::rules::{COMPOSITE_OPACITY, DerivedRule, RuleTable};

#[doc(inline)]
pub use crate::settings::RenderSettings;

#[doc(inline)]
pub use crate::table::TileTable;

#[doc(inline)]
pub use crate::theme::{GraphicsTheme, ThemeMode};
