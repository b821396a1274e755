//! The graphics theme: tile table, active colors and derived caches.

use std::{fmt, path::Path};

use cavegfx_types::{
	color::ColorTable,
	geometry::{Interpolation, Rect},
	indexed::IndexedSource,
	surface::{ImageSurface, Surface},
	tile::TileId,
};
use image::RgbaImage;
use log::{debug, info, warn};

use crate::{
	cache::{DisplayCache, DisplayTile, Effect},
	error::GfxError,
	icons::IconCache,
	loader::{self, ThemeImage},
	region::{self, TileMap},
	rules::RuleTable,
	settings::RenderSettings,
	synth::build_tile_table,
	table::TileTable,
};

/// Whether color changes regenerate the tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeMode {
	/// Tiles come from an indexed sheet and follow the color table
	Recolorable,
	/// Tiles come from true-color artwork; color changes are ignored
	Fixed,
}

impl fmt::Display for ThemeMode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Recolorable => write!(f, "recolorable"),
			Self::Fixed => write!(f, "fixed"),
		}
	}
}

/// Cave graphics: the tile table and everything derived from it.
///
/// Every operation that changes the tiles builds a complete new table first
/// and installs it only on success. A failed load or rebuild leaves the
/// previous table, colors and mode in place.
///
/// The surface backend is picked with the type parameter:
///
/// ```
/// use cavegfx_theme::prelude::*;
///
/// let mut theme: GraphicsTheme<PackedSurface> = GraphicsTheme::new(RenderSettings::default()).unwrap();
/// assert_eq!(theme.mode(), ThemeMode::Recolorable);
///
/// let colors = ColorTable::new([c64::BLUE, c64::YELLOW, c64::GREY, c64::WHITE, c64::RED, c64::GREEN]);
/// assert!(theme.select_colors(colors).unwrap());
/// assert!(!theme.select_colors(colors).unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct GraphicsTheme<S = ImageSurface> {
	rules: RuleTable,
	settings: RenderSettings,
	builtin: IndexedSource,
	custom: Option<IndexedSource>,
	mode: ThemeMode,
	colors: ColorTable,
	applied: Option<ColorTable>,
	tiles: TileTable<S>,
	generation: u64,
	icons: IconCache<S>,
	display: DisplayCache<S>,
}

impl<S: Surface> GraphicsTheme<S> {
	/// Creates a theme showing the built-in graphics with the default colors.
	///
	/// The derived sprite rules are validated here, once.
	pub fn new(settings: RenderSettings) -> Result<Self, GfxError> {
		let rules = RuleTable::builtin()?;
		let mut theme = Self {
			rules,
			icons: IconCache::new(settings.icon_size),
			display: DisplayCache::new(settings.flash_color, settings.select_color),
			settings,
			builtin: IndexedSource::builtin(),
			custom: None,
			mode: ThemeMode::Recolorable,
			colors: ColorTable::default(),
			applied: None,
			tiles: TileTable::new(),
			generation: 0,
		};
		theme.load_default()?;
		Ok(theme)
	}

	/// Current mode.
	pub fn mode(&self) -> ThemeMode {
		self.mode
	}

	/// Colors the tiles were last generated with.
	pub fn colors(&self) -> &ColorTable {
		&self.colors
	}

	/// Indexed sheet used for re-coloring: the loaded one, or the built-in one.
	pub fn indexed_source(&self) -> &IndexedSource {
		self.custom.as_ref().unwrap_or(&self.builtin)
	}

	/// Returns `true` if an indexed sheet was loaded from outside.
	pub fn has_custom_source(&self) -> bool {
		self.custom.is_some()
	}

	/// The master tile table.
	pub fn tiles(&self) -> &TileTable<S> {
		&self.tiles
	}

	/// Master tile for `id`.
	pub fn tile(&self, id: TileId) -> Option<&S> {
		self.tiles.get(id)
	}

	/// Edge length of the master tiles.
	pub fn cell_size(&self) -> Option<u32> {
		self.tiles.cell_size()
	}

	/// Number of tile tables installed so far.
	pub fn generation(&self) -> u64 {
		self.generation
	}

	/// Current render settings.
	pub fn settings(&self) -> &RenderSettings {
		&self.settings
	}

	/// Replaces the render settings, dropping caches they affect.
	pub fn set_settings(&mut self, settings: RenderSettings) {
		self.icons.set_size(settings.icon_size);
		self.display.set_colors(settings.flash_color, settings.select_color);
		if settings.cell_scale != self.settings.cell_scale
			|| settings.interpolation != self.settings.interpolation
			|| settings.tv_emulation != self.settings.tv_emulation
		{
			self.display.invalidate();
		}
		self.settings = settings;
	}

	/// Switches back to the built-in sheet and the default colors.
	pub fn load_default(&mut self) -> Result<(), GfxError> {
		let colors = ColorTable::default();
		let table = build_tile_table(&self.builtin.decode(&colors)?, &self.rules)?;

		self.custom = None;
		self.mode = ThemeMode::Recolorable;
		self.install(table, Some(colors));
		info!("Loaded built-in theme with colors {colors}");
		Ok(())
	}

	/// Loads a theme image file.
	///
	/// An indexed image becomes the new re-colorable sheet and is drawn with
	/// the current colors; anything else is sliced as fixed artwork.
	///
	/// # Errors
	///
	/// Fails with [`GfxError::InvalidGeometry`] for images that are not an
	/// 8 x 32 grid of square cells, and with [`GfxError::Image`] or
	/// [`GfxError::Io`] for unreadable files. The theme is unchanged on error.
	pub fn load_from_file(&mut self, path: impl AsRef<Path>) -> Result<(), GfxError> {
		let path = path.as_ref();
		let result = loader::read_theme_file(path).and_then(|image| self.install_image(image));
		match &result {
			Ok(()) => info!("Loaded {} theme from {}", self.mode, path.display()),
			Err(e) => warn!("Rejected theme file {}: {e}", path.display()),
		}
		result
	}

	/// Loads a theme from an in-memory image, like [`Self::load_from_file`].
	pub fn load_from_image(&mut self, image: &RgbaImage) -> Result<(), GfxError> {
		let theme_image = loader::classify(image)?;
		self.install_image(theme_image)?;
		info!("Loaded {} theme from a {}x{} image", self.mode, image.width(), image.height());
		Ok(())
	}

	fn install_image(&mut self, image: ThemeImage<S>) -> Result<(), GfxError> {
		match image {
			ThemeImage::Indexed(source) => {
				let colors = self.colors;
				let table = build_tile_table(&source.decode(&colors)?, &self.rules)?;
				self.custom = Some(source);
				self.mode = ThemeMode::Recolorable;
				self.install(table, Some(colors));
			}
			ThemeImage::TrueColor(sheet) => {
				let table = build_tile_table(&sheet, &self.rules)?;
				self.custom = None;
				self.mode = ThemeMode::Fixed;
				self.install(table, None);
			}
		}
		Ok(())
	}

	/// Re-colors the tiles.
	///
	/// Returns `Ok(false)` without touching anything in fixed mode or when
	/// `colors` equals the table the tiles were last generated with.
	/// Otherwise the whole tile table is regenerated and `Ok(true)` returned.
	pub fn select_colors(&mut self, colors: ColorTable) -> Result<bool, GfxError> {
		if self.mode == ThemeMode::Fixed {
			debug!("Ignoring colors {colors}: theme uses fixed artwork");
			return Ok(false);
		}
		if self.applied == Some(colors) {
			debug!("Colors {colors} already applied");
			return Ok(false);
		}

		let table = build_tile_table(&self.indexed_source().decode(&colors)?, &self.rules)?;
		self.install(table, Some(colors));
		info!("Re-colored tiles with {colors} (generation {})", self.generation);
		Ok(true)
	}

	/// Replaces the tile table, releasing every cache built from the old one.
	fn install(&mut self, table: TileTable<S>, colors: Option<ColorTable>) {
		self.icons.clear();
		self.display.invalidate();
		self.tiles = table;
		if let Some(colors) = colors {
			self.colors = colors;
		}
		self.applied = colors;
		self.generation += 1;
	}

	/// Builds display tiles at `cell_size`.
	///
	/// Returns `Ok(false)` if tiles of that size already exist.
	pub fn build_display_tiles(
		&mut self,
		cell_size: u32,
		interpolation: Interpolation,
		effect: Option<Effect>,
	) -> Result<bool, GfxError> {
		self.display.build(&self.tiles, cell_size, interpolation, effect)
	}

	/// Builds display tiles as the render settings describe.
	pub fn build_display_tiles_from_settings(&mut self) -> Result<bool, GfxError> {
		let native = self.tiles.cell_size().unwrap_or_default();
		let cell_size = self.settings.display_cell_size(native);
		let effect = self.settings.tv_emulation.then_some(Effect::Scanlines);
		self.build_display_tiles(cell_size, self.settings.interpolation, effect)
	}

	/// Drops the display tiles so the next build regenerates them.
	pub fn invalidate_display_tiles(&mut self) {
		self.display.invalidate();
	}

	/// Display tiles for `id`, once built.
	pub fn display_tile(&self, id: TileId) -> Option<&DisplayTile<S>> {
		self.display.get(id)
	}

	/// Cell size of the current display tiles.
	pub fn display_cell_size(&self) -> Option<u32> {
		self.display.cell_size()
	}

	/// Picker icon for `id`: the tile at icon size in a black frame.
	pub fn bordered_icon(&mut self, id: TileId) -> Result<&S, GfxError> {
		self.icons.get_or_render(&self.tiles, id)
	}

	/// Number of icons rendered since the last rebuild.
	pub fn cached_icon_count(&self) -> usize {
		self.icons.len()
	}

	/// Renders the `visible` cells of `map` with the master tiles.
	///
	/// See [`region::render_region`].
	pub fn render_region<M, R>(
		&self,
		map: &M,
		visible: Rect,
		resolve: R,
		fit: Option<(u32, u32)>,
	) -> Result<S, GfxError>
	where
		M: TileMap + ?Sized,
		R: Fn(TileId) -> TileId,
	{
		region::render_region(&self.tiles, map, visible, resolve, fit)
	}
}
