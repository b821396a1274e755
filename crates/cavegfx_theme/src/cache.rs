//! Display-resolution tile copies.
//!
//! Every populated tile gets three copies at the display cell size: the
//! plain scaled tile, a highlighted one blended with the flash color and a
//! selected one blended with the selection color. The whole set is built
//! before the previous one is replaced, so readers never observe a mix of
//! two builds.

use cavegfx_types::{
	color::{Color, Rgba},
	error::SurfaceError,
	geometry::Interpolation,
	surface::Surface,
	tile::{TILE_COUNT, TileId},
};
use log::debug;

use crate::{error::GfxError, table::TileTable};

/// Opacity of the tile when blended over the flash or selection color.
pub const HIGHLIGHT_OPACITY: u8 = 128;

/// Post-processing applied to plain display tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
	/// Darken every even row to 4/5 brightness, like a CRT
	Scanlines,
}

/// The three display variants of one tile.
#[derive(Debug, Clone)]
pub struct DisplayTile<S> {
	/// Scaled tile
	pub normal: S,
	/// Tile blended over the flash color
	pub highlighted: S,
	/// Tile blended over the selection color
	pub selected: S,
}

impl<S: Surface> DisplayTile<S> {
	fn render(
		tile: &S,
		cell_size: u32,
		interpolation: Interpolation,
		effect: Option<Effect>,
		flash: Color,
		select: Color,
	) -> Result<Self, SurfaceError> {
		let mut normal = tile.scaled(cell_size, cell_size, interpolation)?;
		let highlighted = blended_over(&normal, flash)?;
		let selected = blended_over(&normal, select)?;

		if let Some(Effect::Scanlines) = effect {
			darken_scanlines(&mut normal);
		}

		Ok(Self {
			normal,
			highlighted,
			selected,
		})
	}
}

/// Darkens every even row of `surface` to `c / 5 * 4`, keeping alpha.
pub fn darken_scanlines<S: Surface>(surface: &mut S) {
	for y in (0..surface.height()).step_by(2) {
		for x in 0..surface.width() {
			let p = surface.get_pixel(x, y);
			surface.set_pixel(x, y, Rgba::new(p.r / 5 * 4, p.g / 5 * 4, p.b / 5 * 4, p.a));
		}
	}
}

fn blended_over<S: Surface>(tile: &S, color: Color) -> Result<S, SurfaceError> {
	let mut out = S::try_new(tile.width(), tile.height())?;
	out.fill(out.bounds(), color.opaque());
	tile.composite_region(tile.bounds(), &mut out, 0, 0, HIGHLIGHT_OPACITY);
	Ok(out)
}

/// Display tiles for one cell size.
#[derive(Debug, Clone)]
pub struct DisplayCache<S> {
	flash: Color,
	select: Color,
	cell_size: Option<u32>,
	tiles: Vec<Option<DisplayTile<S>>>,
}

impl<S: Surface> DisplayCache<S> {
	/// Creates an empty cache blending with the given colors.
	pub fn new(flash: Color, select: Color) -> Self {
		Self {
			flash,
			select,
			cell_size: None,
			tiles: Vec::new(),
		}
	}

	/// Changes the blend colors and drops the current set.
	pub fn set_colors(&mut self, flash: Color, select: Color) {
		if (flash, select) != (self.flash, self.select) {
			self.flash = flash;
			self.select = select;
			self.invalidate();
		}
	}

	/// Cell size of the current set, if one is built.
	pub fn cell_size(&self) -> Option<u32> {
		self.cell_size
	}

	/// Returns `true` if no set is built.
	pub fn is_empty(&self) -> bool {
		self.cell_size.is_none()
	}

	/// Display tiles for `id`.
	pub fn get(&self, id: TileId) -> Option<&DisplayTile<S>> {
		self.tiles.get(id.index()).and_then(Option::as_ref)
	}

	/// Drops the current set.
	pub fn invalidate(&mut self) {
		if self.cell_size.take().is_some() {
			debug!("Display tiles invalidated");
		}
		self.tiles = Vec::new();
	}

	/// Builds display tiles for every populated slot of `tiles`.
	///
	/// Returns `Ok(false)` without doing anything if a set at `cell_size`
	/// already exists. On error the previous set is kept.
	pub fn build(
		&mut self,
		tiles: &TileTable<S>,
		cell_size: u32,
		interpolation: Interpolation,
		effect: Option<Effect>,
	) -> Result<bool, GfxError> {
		if self.cell_size == Some(cell_size) {
			return Ok(false);
		}

		let mut built = vec![None; TILE_COUNT];
		for (id, tile) in tiles.iter() {
			built[id.index()] =
				Some(DisplayTile::render(tile, cell_size, interpolation, effect, self.flash, self.select)?);
		}

		debug!(
			"Built {} display tiles at {cell_size}px ({interpolation:?}, effect: {effect:?})",
			tiles.populated_count()
		);
		self.tiles = built;
		self.cell_size = Some(cell_size);
		Ok(true)
	}
}

#[cfg(test)]
mod tests {
	use cavegfx_types::{
		geometry::Rect,
		surface::{ImageSurface, PackedSurface},
	};

	use super::*;

	fn table_with<S: Surface>(pixel: Rgba) -> TileTable<S> {
		let mut tile = S::try_new(4, 4).unwrap();
		tile.fill(tile.bounds(), pixel);
		let mut table = TileTable::new();
		table.insert(TileId::STONE, tile).unwrap();
		table
	}

	fn check_variants<S: Surface>() {
		let table = table_with::<S>(Rgba::new(200, 100, 50, 255));
		let mut cache = DisplayCache::new(Color::from_rgb24(0xFFFFFF), Color::from_rgb24(0x000000));

		assert!(cache.build(&table, 8, Interpolation::Nearest, None).unwrap());
		let display = cache.get(TileId::STONE).unwrap();
		assert_eq!(display.normal.width(), 8);
		assert_eq!(display.normal.get_pixel(7, 7), Rgba::new(200, 100, 50, 255));

		let highlighted = display.highlighted.get_pixel(0, 0);
		let selected = display.selected.get_pixel(0, 0);
		assert_eq!(highlighted.a, 255);
		assert!(highlighted.b > 50 && highlighted.b < 255);
		assert!(selected.r > 0 && selected.r < 200);
		assert!(cache.get(TileId::DIRT).is_none());
	}

	#[test]
	fn test_variants_image() {
		check_variants::<ImageSurface>();
	}

	#[test]
	fn test_variants_packed() {
		check_variants::<PackedSurface>();
	}

	#[test]
	fn test_build_is_idempotent_per_size() {
		let table = table_with::<ImageSurface>(Rgba::WHITE);
		let mut cache = DisplayCache::new(Color::from_rgb24(0xFFFFFF), Color::from_rgb24(0x4080FF));

		assert!(cache.build(&table, 8, Interpolation::Nearest, None).unwrap());
		assert!(!cache.build(&table, 8, Interpolation::Bilinear, None).unwrap());
		assert!(cache.build(&table, 12, Interpolation::Nearest, None).unwrap());
		assert_eq!(cache.cell_size(), Some(12));

		cache.invalidate();
		assert!(cache.is_empty());
		assert!(cache.get(TileId::STONE).is_none());
		assert!(cache.build(&table, 12, Interpolation::Nearest, None).unwrap());
	}

	#[test]
	fn test_scanlines_only_on_normal() {
		let table = table_with::<ImageSurface>(Rgba::new(100, 100, 100, 255));
		let mut cache = DisplayCache::new(Color::from_rgb24(0x000000), Color::from_rgb24(0x000000));
		cache.build(&table, 4, Interpolation::Nearest, Some(Effect::Scanlines)).unwrap();

		let display = cache.get(TileId::STONE).unwrap();
		assert_eq!(display.normal.get_pixel(0, 0), Rgba::new(80, 80, 80, 255));
		assert_eq!(display.normal.get_pixel(0, 1), Rgba::new(100, 100, 100, 255));
		// highlighted rows stay uniform
		assert_eq!(display.highlighted.get_pixel(0, 0), display.highlighted.get_pixel(0, 1));
	}

	#[test]
	fn test_failed_build_keeps_previous_set() {
		let table = table_with::<ImageSurface>(Rgba::WHITE);
		let mut cache = DisplayCache::new(Color::from_rgb24(0xFFFFFF), Color::from_rgb24(0x4080FF));
		cache.build(&table, 8, Interpolation::Nearest, None).unwrap();

		let err = cache.build(&table, 0, Interpolation::Nearest, None).unwrap_err();
		assert!(matches!(err, GfxError::Surface(_)));
		assert_eq!(cache.cell_size(), Some(8));
		assert!(cache.get(TileId::STONE).is_some());
	}

	#[test]
	fn test_darken_scanlines_keeps_alpha() {
		let mut surface = ImageSurface::try_new(2, 2).unwrap();
		surface.fill(Rect::sized(2, 2), Rgba::new(255, 10, 4, 128));
		darken_scanlines(&mut surface);
		assert_eq!(surface.get_pixel(1, 0), Rgba::new(204, 8, 0, 128));
		assert_eq!(surface.get_pixel(1, 1), Rgba::new(255, 10, 4, 128));
	}
}
