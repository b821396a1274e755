//! Theme image validation and classification.

use std::path::Path;

use cavegfx_types::{
	indexed::{IndexedSource, is_indexed_source},
	surface::Surface,
	tile::{GRID_COLUMNS, GRID_ROWS},
};
use image::RgbaImage;

use crate::error::GfxError;

/// A theme image that passed geometry validation.
#[derive(Debug, Clone)]
pub enum ThemeImage<S> {
	/// Drawn only with on/off colors; re-colorable through its indices
	Indexed(IndexedSource),
	/// True-color artwork, sliced as-is
	TrueColor(S),
}

impl<S: Surface> ThemeImage<S> {
	/// Returns `true` for re-colorable images.
	pub fn is_indexed(&self) -> bool {
		matches!(self, Self::Indexed(_))
	}
}

/// Returns the cell edge length of a `width` x `height` sheet.
///
/// # Errors
///
/// [`GfxError::InvalidGeometry`] unless the image splits into
/// [`GRID_COLUMNS`] x [`GRID_ROWS`] square, non-empty cells.
pub fn check_geometry(width: u32, height: u32) -> Result<u32, GfxError> {
	let cell_size = width / GRID_COLUMNS;
	let square = height / GRID_ROWS == cell_size;
	if width % GRID_COLUMNS != 0 || height % GRID_ROWS != 0 || !square || cell_size == 0 {
		return Err(GfxError::InvalidGeometry {
			width,
			height,
			columns: GRID_COLUMNS,
			rows: GRID_ROWS,
		});
	}
	Ok(cell_size)
}

/// Validates an in-memory image and decides how it is loaded.
pub fn classify<S: Surface>(image: &RgbaImage) -> Result<ThemeImage<S>, GfxError> {
	check_geometry(image.width(), image.height())?;
	let sheet = S::from_rgba_image(image)?;

	if is_indexed_source(&sheet) {
		Ok(ThemeImage::Indexed(IndexedSource::encode(&sheet)?))
	} else {
		Ok(ThemeImage::TrueColor(sheet))
	}
}

/// Reads and classifies a theme image file.
///
/// Only the header is read before the geometry check, so a wrongly sized
/// file is rejected without decoding its pixels.
pub fn read_theme_file<S: Surface>(path: &Path) -> Result<ThemeImage<S>, GfxError> {
	let (width, height) = image::image_dimensions(path)?;
	check_geometry(width, height)?;

	let image = image::open(path)?.to_rgba8();
	classify(&image)
}
