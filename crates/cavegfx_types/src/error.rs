//! Error types for surfaces, colors and the indexed sprite sheet format.

use thiserror::Error;

/// Errors that can occur when allocating pixel surfaces
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SurfaceError {
	/// Surface could not be allocated
	#[error("Cannot allocate a {width}x{height} surface")]
	Allocation {
		/// Requested width in pixels
		width: u32,
		/// Requested height in pixels
		height: u32,
	},
}

/// Errors that can occur when parsing or producing an indexed sprite sheet
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IndexedSourceError {
	/// Stream is empty, so the cell size byte is missing
	#[error("Indexed source is empty")]
	Empty,

	/// Cell size byte is zero
	#[error("Indexed source declares a cell size of zero")]
	ZeroCellSize,

	/// Stream length does not match the declared cell size
	#[error("Insufficient data: cell size {cell_size} needs {expected} bytes, got {actual} bytes")]
	LengthMismatch {
		/// Declared cell size
		cell_size: u8,
		/// Expected number of bytes (including the cell size byte)
		expected: usize,
		/// Actual number of bytes
		actual: usize,
	},

	/// A pixel refers to a palette entry outside `0..=8`
	#[error("Invalid palette index {value} at pixel {pixel}")]
	InvalidIndex {
		/// Pixel offset (row-major, without the cell size byte)
		pixel: usize,
		/// Offending value
		value: u8,
	},

	/// Surface dimensions do not form a grid of square cells
	#[error("A {width}x{height} surface is not a {columns}x{rows} grid of square cells")]
	InvalidGeometry {
		/// Surface width in pixels
		width: u32,
		/// Surface height in pixels
		height: u32,
		/// Required number of columns
		columns: u32,
		/// Required number of rows
		rows: u32,
	},

	/// Cell size does not fit in the one-byte header
	#[error("Cell size {0} does not fit in one byte")]
	CellTooLarge(u32),

	/// Surface allocation failed while decoding
	#[error(transparent)]
	Surface(#[from] SurfaceError),
}

/// A string that is not a `#rrggbb` color
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Invalid color '{0}', expected #rrggbb")]
pub struct ColorParseError(pub String);
