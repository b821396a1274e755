//! Tile table: one optional surface per tile identity.

use cavegfx_types::{
	surface::Surface,
	tile::{TILE_COUNT, TileId},
};

use crate::error::ConsistencyFault;

/// Fixed-size table of tile surfaces.
///
/// A slot is either empty or holds a square surface whose edge equals the
/// table's cell size. The cell size is fixed by the first surface stored.
#[derive(Debug, Clone)]
pub struct TileTable<S> {
	slots: Vec<Option<S>>,
	cell_size: Option<u32>,
}

impl<S: Surface> TileTable<S> {
	/// Creates a table with every slot empty.
	pub fn new() -> Self {
		Self {
			slots: vec![None; TILE_COUNT],
			cell_size: None,
		}
	}

	/// Edge length of every stored tile, once a tile has been stored.
	pub fn cell_size(&self) -> Option<u32> {
		self.cell_size
	}

	/// Returns the tile for `id`, or `None` if the slot is empty or out of range.
	pub fn get(&self, id: TileId) -> Option<&S> {
		self.slots.get(id.index()).and_then(Option::as_ref)
	}

	/// Returns the tile for `id`, treating an empty slot as a fault.
	pub fn require(&self, id: TileId) -> Result<&S, ConsistencyFault> {
		if !id.in_catalog() {
			return Err(ConsistencyFault::OutOfRange(id));
		}
		self.get(id).ok_or(ConsistencyFault::SourceEmpty(id))
	}

	/// Returns `true` if the slot holds a tile.
	pub fn is_populated(&self, id: TileId) -> bool {
		self.get(id).is_some()
	}

	/// Stores a tile into an empty slot.
	///
	/// # Errors
	///
	/// Fails without touching the table if `id` is outside the catalog, the
	/// slot is already populated, or the surface is not a square of the
	/// table's cell size.
	pub fn insert(&mut self, id: TileId, tile: S) -> Result<(), ConsistencyFault> {
		let slot = self.slots.get_mut(id.index()).ok_or(ConsistencyFault::OutOfRange(id))?;
		if slot.is_some() {
			return Err(ConsistencyFault::DestinationOccupied(id));
		}

		let cell_size = self.cell_size.unwrap_or(tile.width());
		if tile.width() != cell_size || tile.height() != cell_size {
			return Err(ConsistencyFault::CellSizeMismatch {
				tile: id,
				width: tile.width(),
				height: tile.height(),
				cell_size,
			});
		}

		*slot = Some(tile);
		self.cell_size = Some(cell_size);
		Ok(())
	}

	/// Number of populated slots.
	pub fn populated_count(&self) -> usize {
		self.slots.iter().filter(|slot| slot.is_some()).count()
	}

	/// Returns `true` if no slot is populated.
	pub fn is_empty(&self) -> bool {
		self.cell_size.is_none()
	}

	/// Iterates over populated slots.
	pub fn iter(&self) -> impl Iterator<Item = (TileId, &S)> + '_ {
		self.slots
			.iter()
			.enumerate()
			.filter_map(|(i, slot)| slot.as_ref().map(|tile| (TileId::new(i as u16), tile)))
	}
}

impl<S: Surface> Default for TileTable<S> {
	fn default() -> Self {
		Self::new()
	}
}

#[cfg(test)]
mod tests {
	use cavegfx_types::surface::ImageSurface;

	use super::*;

	fn square(size: u32) -> ImageSurface {
		ImageSurface::try_new(size, size).unwrap()
	}

	#[test]
	fn test_insert_and_get() {
		let mut table = TileTable::new();
		assert!(table.is_empty());

		table.insert(TileId::STEEL, square(16)).unwrap();
		assert_eq!(table.cell_size(), Some(16));
		assert!(table.is_populated(TileId::STEEL));
		assert!(!table.is_populated(TileId::STONE));
		assert_eq!(table.populated_count(), 1);
		assert_eq!(table.iter().map(|(id, _)| id).collect::<Vec<_>>(), vec![TileId::STEEL]);
	}

	#[test]
	fn test_insert_faults() {
		let mut table = TileTable::new();
		table.insert(TileId::STEEL, square(16)).unwrap();

		assert_eq!(
			table.insert(TileId::STEEL, square(16)).unwrap_err(),
			ConsistencyFault::DestinationOccupied(TileId::STEEL)
		);
		assert!(matches!(
			table.insert(TileId::STONE, square(8)).unwrap_err(),
			ConsistencyFault::CellSizeMismatch {
				cell_size: 16,
				..
			}
		));
		let outside = TileId::new(TILE_COUNT as u16);
		assert_eq!(table.insert(outside, square(16)).unwrap_err(), ConsistencyFault::OutOfRange(outside));
		assert!(!table.is_populated(TileId::STONE));
	}

	#[test]
	fn test_require() {
		let mut table = TileTable::new();
		table.insert(TileId::DIRT, square(4)).unwrap();

		assert!(table.require(TileId::DIRT).is_ok());
		assert_eq!(table.require(TileId::BRICK).unwrap_err(), ConsistencyFault::SourceEmpty(TileId::BRICK));
	}

	#[test]
	fn test_non_square_rejected_first() {
		let mut table = TileTable::new();
		let tall = ImageSurface::try_new(4, 8).unwrap();
		assert!(table.insert(TileId::DIRT, tall).is_err());
		assert!(table.is_empty());
	}
}
