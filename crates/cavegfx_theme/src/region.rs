//! Assembling a map region into one image.

use cavegfx_types::{
	color::Rgba,
	error::SurfaceError,
	geometry::{Interpolation, Rect},
	surface::Surface,
	tile::TileId,
};

use crate::{
	error::{ConsistencyFault, GfxError},
	table::TileTable,
};

/// Width of the black frame around a rendered region, in pixels.
pub const REGION_BORDER: u32 = 2;

/// A rectangular map of tile identities, in cells.
pub trait TileMap {
	/// Width in cells.
	fn width(&self) -> u32;

	/// Height in cells.
	fn height(&self) -> u32;

	/// Identity at `(x, y)`; callers stay within `width` x `height`.
	fn tile_at(&self, x: u32, y: u32) -> TileId;
}

/// Row-major [`TileMap`] backed by a vector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileGrid {
	width: u32,
	height: u32,
	cells: Vec<TileId>,
}

impl TileGrid {
	/// Creates a grid with every cell set to `fill`.
	pub fn new(width: u32, height: u32, fill: TileId) -> Self {
		Self {
			width,
			height,
			cells: vec![fill; width as usize * height as usize],
		}
	}

	/// Creates a grid from row-major cells.
	///
	/// Returns `None` if `cells` does not hold exactly `width * height` entries.
	pub fn from_cells(width: u32, height: u32, cells: Vec<TileId>) -> Option<Self> {
		(cells.len() == width as usize * height as usize).then_some(Self {
			width,
			height,
			cells,
		})
	}

	/// Sets one cell.
	///
	/// # Panics
	///
	/// Panics if `(x, y)` is outside the grid.
	pub fn set(&mut self, x: u32, y: u32, id: TileId) {
		let index = self.index(x, y);
		self.cells[index] = id;
	}

	fn index(&self, x: u32, y: u32) -> usize {
		assert!(x < self.width && y < self.height, "cell ({x}, {y}) is outside the {}x{} grid", self.width, self.height);
		y as usize * self.width as usize + x as usize
	}
}

impl TileMap for TileGrid {
	fn width(&self) -> u32 {
		self.width
	}

	fn height(&self) -> u32 {
		self.height
	}

	fn tile_at(&self, x: u32, y: u32) -> TileId {
		self.cells[self.index(x, y)]
	}
}

/// Per-cave overrides of how some elements are drawn in game view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisualEffects {
	/// Drawn in place of dirt
	pub dirt_looks_like: TileId,
	/// Drawn in place of any growing wall
	pub expanding_wall_looks_like: TileId,
}

impl Default for VisualEffects {
	fn default() -> Self {
		Self {
			dirt_looks_like: TileId::DIRT,
			expanding_wall_looks_like: TileId::BRICK,
		}
	}
}

impl VisualEffects {
	/// Identity actually drawn for `id`.
	pub fn resolve(&self, id: TileId) -> TileId {
		match id {
			TileId::DIRT => self.dirt_looks_like,
			TileId::GROWING_WALL | TileId::H_GROWING_WALL | TileId::V_GROWING_WALL => self.expanding_wall_looks_like,
			other => other,
		}
	}
}

/// Renders the `visible` cells of `map` with the tiles of `tiles`.
///
/// Each cell is drawn with the tile `resolve` picks for its identity, onto
/// an opaque black canvas with a [`REGION_BORDER`] frame. With `fit` set to
/// a non-zero bounding box, the result is scaled down bilinearly to fit it,
/// keeping the aspect ratio.
pub fn render_region<S, M, R>(
	tiles: &TileTable<S>,
	map: &M,
	visible: Rect,
	resolve: R,
	fit: Option<(u32, u32)>,
) -> Result<S, GfxError>
where
	S: Surface,
	M: TileMap + ?Sized,
	R: Fn(TileId) -> TileId,
{
	let bounds = Rect::sized(map.width(), map.height());
	if visible.is_empty() || !bounds.contains_rect(&visible) {
		return Err(GfxError::RegionOutOfBounds {
			region: visible,
			width: map.width(),
			height: map.height(),
		});
	}

	let cell = tiles.cell_size().ok_or(ConsistencyFault::SourceEmpty(TileId::SPACE))?;
	let (Some(width), Some(height)) = (canvas_extent(visible.width, cell), canvas_extent(visible.height, cell)) else {
		return Err(SurfaceError::Allocation {
			width: visible.width.saturating_mul(cell),
			height: visible.height.saturating_mul(cell),
		}
		.into());
	};
	let mut canvas = S::try_new(width, height)?;
	canvas.fill(canvas.bounds(), Rgba::BLACK);

	for y in 0..visible.height {
		for x in 0..visible.width {
			let id = resolve(map.tile_at(visible.x + x, visible.y + y));
			let tile = tiles.require(id)?;
			tile.copy_region(tile.bounds(), &mut canvas, REGION_BORDER + x * cell, REGION_BORDER + y * cell);
		}
	}

	match fit {
		Some((width, height)) if width > 0 && height > 0 => {
			let (w, h) = fitted_size(canvas.width(), canvas.height(), width, height);
			Ok(canvas.scaled(w, h, Interpolation::Bilinear)?)
		}
		_ => Ok(canvas),
	}
}

/// Canvas edge for `cells` cells of `cell` pixels plus the frame.
fn canvas_extent(cells: u32, cell: u32) -> Option<u32> {
	cells.checked_mul(cell)?.checked_add(2 * REGION_BORDER)
}

/// Largest size with the aspect of `width` x `height` inside the box.
fn fitted_size(width: u32, height: u32, box_width: u32, box_height: u32) -> (u32, u32) {
	let (w, h) = (f64::from(width), f64::from(height));
	let (bw, bh) = (f64::from(box_width), f64::from(box_height));
	let scale = if w / h >= bw / bh {
		bw / w
	} else {
		bh / h
	};
	(((w * scale) as u32).max(1), ((h * scale) as u32).max(1))
}
