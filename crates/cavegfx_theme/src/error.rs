//! Error types for theme loading, tile synthesis and rendering.

use cavegfx_types::{
	error::{IndexedSourceError, SurfaceError},
	geometry::Rect,
	tile::TileId,
};
use thiserror::Error;

/// Internal consistency violations.
///
/// These never come from user input: they mean the static rule table, the
/// grid constants or the caller's tile identities are wrong. The operation
/// that hits one is abandoned and its partial results are dropped.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConsistencyFault {
	/// Identity lies outside the tile catalog
	#[error("Tile {0} is outside the catalog")]
	OutOfRange(TileId),

	/// A rule would overwrite a slot that is already populated
	#[error("Destination tile {0} is already populated")]
	DestinationOccupied(TileId),

	/// A rule reads a slot that has not been populated
	#[error("Tile {0} is used before it is populated")]
	SourceEmpty(TileId),

	/// Two rules write the same destination
	#[error("Tile {0} is the destination of more than one rule")]
	DuplicateDestination(TileId),

	/// A rule writes into the base grid
	#[error("Rule destination {0} is a base grid tile")]
	BaseDestination(TileId),

	/// A rule reads a derived tile produced by a later rule
	#[error("Rule for {destination} reads {source_tile}, which no earlier rule produces")]
	ForwardReference {
		/// Destination of the offending rule
		destination: TileId,
		/// Tile that is not yet available
		source_tile: TileId,
	},

	/// A surface does not match the table's cell size
	#[error("Tile {tile} is {width}x{height}, expected {cell_size}x{cell_size}")]
	CellSizeMismatch {
		/// Tile being stored
		tile: TileId,
		/// Width of the offered surface
		width: u32,
		/// Height of the offered surface
		height: u32,
		/// Cell size of the table
		cell_size: u32,
	},
}

/// Errors reported by the graphics theme
#[derive(Debug, Error)]
pub enum GfxError {
	/// Theme image is not a grid of square cells
	#[error("A {width}x{height} image should contain {columns} cells in a row and {rows} in a column")]
	InvalidGeometry {
		/// Image width in pixels
		width: u32,
		/// Image height in pixels
		height: u32,
		/// Required number of columns
		columns: u32,
		/// Required number of rows
		rows: u32,
	},

	/// Indexed sheet could not be parsed or produced
	#[error(transparent)]
	InvalidIndexedSource(#[from] IndexedSourceError),

	/// Visible region does not fit the map
	#[error("Region {region} lies outside the {width}x{height} map")]
	RegionOutOfBounds {
		/// Requested region in cells
		region: Rect,
		/// Map width in cells
		width: u32,
		/// Map height in cells
		height: u32,
	},

	/// Internal consistency fault
	#[error("Internal consistency fault: {0}")]
	Consistency(#[from] ConsistencyFault),

	/// Surface allocation failed
	#[error(transparent)]
	Surface(#[from] SurfaceError),

	/// Image file could not be read or decoded
	#[error(transparent)]
	Image(#[from] image::ImageError),

	/// IO error
	#[error(transparent)]
	Io(#[from] std::io::Error),

	/// Settings could not be loaded
	#[error(transparent)]
	Config(#[from] config::ConfigError),
}

impl GfxError {
	/// Returns `true` for faults caused by a broken rule table or catalog
	/// rather than by bad input.
	pub fn is_consistency_fault(&self) -> bool {
		matches!(self, Self::Consistency(_))
	}
}
