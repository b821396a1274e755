//! Benchmark helper utilities for cave-gfx
//!
//! This module provides synthetic indexed sheets and color tables for the
//! benchmarks. The built-in graphics use 16 pixel cells; larger sheets show
//! how decoding and synthesis scale with the cell size.

use cavegfx_types::{
	color::{ColorTable, c64},
	error::IndexedSourceError,
	indexed::{IndexedSource, PALETTE_LEN},
	tile::{GRID_COLUMNS, GRID_ROWS},
};

/// Generates an indexed sheet with `cell_size` pixel cells
///
/// Every cell gets a diagonal pattern that uses all nine palette indices, so
/// decoding touches every palette entry.
pub fn generate_indexed_sheet(cell_size: u8) -> Result<IndexedSource, IndexedSourceError> {
	let width = u32::from(cell_size) * GRID_COLUMNS;
	let height = u32::from(cell_size) * GRID_ROWS;

	let mut data = Vec::with_capacity(1 + (width * height) as usize);
	data.push(cell_size);
	for y in 0..height {
		for x in 0..width {
			data.push(((x + y) % PALETTE_LEN as u32) as u8);
		}
	}

	IndexedSource::from_bytes(data)
}

/// A few cave color schemes to cycle through
pub fn color_schemes() -> [ColorTable; 3] {
	[
		ColorTable::default(),
		ColorTable::new([c64::BLUE, c64::YELLOW, c64::GREY, c64::WHITE, c64::RED, c64::GREEN]),
		ColorTable::new([c64::BROWN, c64::LIGHT_RED, c64::PURPLE, c64::CYAN, c64::LIGHT_BLUE, c64::ORANGE]),
	]
}

/// Common cell sizes for synthetic sheets
pub mod sizes {
	/// Original hardware cells
	pub const RETRO: u8 = 8;
	/// Built-in graphics
	pub const BUILTIN: u8 = 16;
	/// Hand-drawn high resolution themes
	pub const LARGE: u8 = 32;
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_generate_indexed_sheet() {
		let sheet = generate_indexed_sheet(sizes::RETRO).unwrap();
		assert_eq!(sheet.cell_size(), 8);
		assert_eq!(sheet.width(), 64);
		assert_eq!(sheet.height(), 256);
		assert!(sheet.indices().iter().any(|&i| i == 8));
	}

	#[test]
	fn test_color_schemes_differ() {
		let schemes = color_schemes();
		assert_ne!(schemes[0], schemes[1]);
		assert_ne!(schemes[1], schemes[2]);
	}
}
