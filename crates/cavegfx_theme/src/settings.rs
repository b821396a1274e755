//! Render settings.
//!
//! Settings are read with the `config` crate from an optional TOML file,
//! then overridden by `CAVEGFX_*` environment variables:
//!
//! ```toml
//! cell_scale = 3
//! interpolation = "bilinear"
//! tv_emulation = true
//! flash_color = "#ffffff"
//! select_color = "#4080ff"
//! icon_size = 16
//! ```

use std::path::Path;

use cavegfx_types::{color::Color, geometry::Interpolation};
use serde::{Deserialize, Serialize};

use crate::error::GfxError;

/// Prefix of environment variables that override file settings.
pub const ENV_PREFIX: &str = "CAVEGFX";

/// How tiles are prepared for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
	/// Display cell size as a multiple of the theme's cell size
	pub cell_scale: u32,
	/// Resampling used for display tiles
	pub interpolation: Interpolation,
	/// Darken every other row of display tiles
	pub tv_emulation: bool,
	/// Color blended into highlighted tiles
	pub flash_color: Color,
	/// Color blended into selected tiles
	pub select_color: Color,
	/// Edge length of picker icons, without the border
	pub icon_size: u32,
}

impl Default for RenderSettings {
	fn default() -> Self {
		Self {
			cell_scale: 2,
			interpolation: Interpolation::Nearest,
			tv_emulation: false,
			flash_color: Color::from_rgb24(0xFFFFFF),
			select_color: Color::from_rgb24(0x4080FF),
			icon_size: 16,
		}
	}
}

impl RenderSettings {
	/// Loads settings from an optional TOML file and the environment.
	///
	/// A missing file is not an error; every absent key keeps its default.
	pub fn load(path: Option<&Path>) -> Result<Self, GfxError> {
		Self::load_with_env(path, None)
	}

	/// Like [`RenderSettings::load`], reading overrides from `env` instead of
	/// the process environment when it is `Some`.
	///
	/// Keys in `env` are full variable names such as `CAVEGFX_CELL_SCALE`.
	pub fn load_with_env(path: Option<&Path>, env: Option<config::Map<String, String>>) -> Result<Self, GfxError> {
		let mut builder = config::Config::builder();
		if let Some(path) = path {
			builder = builder.add_source(config::File::from(path).required(false));
		}

		let settings = builder
			.add_source(config::Environment::with_prefix(ENV_PREFIX).try_parsing(true).source(env))
			.build()?
			.try_deserialize()?;
		Ok(settings)
	}

	/// Parses settings from a TOML string.
	pub fn from_toml(text: &str) -> Result<Self, GfxError> {
		let settings = config::Config::builder()
			.add_source(config::File::from_str(text, config::FileFormat::Toml))
			.build()?
			.try_deserialize()?;
		Ok(settings)
	}

	/// Display cell size for a theme drawn at `native` pixels per cell.
	pub fn display_cell_size(&self, native: u32) -> u32 {
		native.saturating_mul(self.cell_scale.max(1))
	}
}
