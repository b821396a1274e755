//! Small bordered tile icons for pickers.

use cavegfx_types::{
	color::Rgba,
	error::SurfaceError,
	geometry::Interpolation,
	surface::Surface,
	tile::{TILE_COUNT, TileId},
};

use crate::{
	error::{ConsistencyFault, GfxError},
	table::TileTable,
};

/// Scales `tile` to `size` x `size` and frames it with one pixel of opaque black.
pub fn bordered_icon<S: Surface>(tile: &S, size: u32) -> Result<S, SurfaceError> {
	let icon = tile.scaled(size, size, Interpolation::Bilinear)?;
	let mut framed = S::try_new(size + 2, size + 2)?;
	framed.fill(framed.bounds(), Rgba::BLACK);
	icon.copy_region(icon.bounds(), &mut framed, 1, 1);
	Ok(framed)
}

/// Lazily filled icon table, keyed like the tile table.
#[derive(Debug, Clone)]
pub struct IconCache<S> {
	size: u32,
	icons: Vec<Option<S>>,
}

impl<S: Surface> IconCache<S> {
	/// Creates an empty cache of `size` pixel icons.
	pub fn new(size: u32) -> Self {
		Self {
			size,
			icons: vec![None; TILE_COUNT],
		}
	}

	/// Changes the icon size, dropping icons of the old size.
	pub fn set_size(&mut self, size: u32) {
		if size != self.size {
			self.size = size;
			self.clear();
		}
	}

	/// Number of icons rendered so far.
	pub fn len(&self) -> usize {
		self.icons.iter().filter(|icon| icon.is_some()).count()
	}

	/// Returns `true` if no icon has been rendered.
	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Drops every icon.
	pub fn clear(&mut self) {
		self.icons.iter_mut().for_each(|icon| *icon = None);
	}

	/// Returns the icon for `id`, rendering it from `tiles` on first use.
	pub fn get_or_render(&mut self, tiles: &TileTable<S>, id: TileId) -> Result<&S, GfxError> {
		let slot = self.icons.get_mut(id.index()).ok_or(ConsistencyFault::OutOfRange(id))?;
		if slot.is_none() {
			*slot = Some(bordered_icon(tiles.require(id)?, self.size)?);
		}
		slot.as_ref().ok_or_else(|| ConsistencyFault::SourceEmpty(id).into())
	}
}
