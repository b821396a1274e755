//! Integration tests for `cave-gfx` themes

mod codec;
mod loading;
mod rendering;
mod synthesis;

use cave_gfx::prelude::*;

/// Six colors that differ from the defaults in every slot.
pub(crate) fn cave_colors() -> ColorTable {
	ColorTable::new([c64::DARK_GREY, c64::LIGHT_RED, c64::PURPLE, c64::YELLOW, c64::CYAN, c64::LIGHT_GREEN])
}

pub(crate) fn default_theme<S: Surface>() -> GraphicsTheme<S> {
	GraphicsTheme::new(RenderSettings::default()).unwrap()
}
