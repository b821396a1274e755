//! Indexed sprite sheet format.
//!
//! This module implements the compact palette-index format the built-in cave
//! graphics are stored in, and its conversion to and from RGBA surfaces.
//!
//! # Format
//!
//! | Offset | Size                 | Description                              |
//! |--------|----------------------|------------------------------------------|
//! | 0x00   | 1                    | Cell edge length `n` in pixels           |
//! | 0x01   | `n * n * 8 * 32`     | One palette index (0-8) per pixel        |
//!
//! Pixels are stored row-major over the whole sheet of
//! [`GRID_COLUMNS`] x [`GRID_ROWS`] cells, so the sheet is `8n` pixels wide
//! and `32n` pixels high.
//!
//! # Palette
//!
//! | Index | Color                                      |
//! |-------|--------------------------------------------|
//! | 0     | Transparent                                |
//! | 1-6   | Role colors 0-5 of a [`ColorTable`], opaque |
//! | 7     | Opaque black                               |
//! | 8     | Opaque white                               |
//!
//! # Encoding
//!
//! An RGBA sheet is turned back into indices by looking only at the high
//! bit of every channel. The resulting `abgr` nibble selects the index from
//! [`ENCODE_TABLE`]; every pattern without the alpha bit is transparent.
//! Cyan (`0bgr = 110`) stands for index 7, so black outlines survive an
//! export/import cycle through [`IndexedSource::to_editable_image`].

mod builtin;

use std::fmt;

use image::RgbaImage;

use crate::{
	color::{Color, ColorTable, Rgba},
	error::IndexedSourceError,
	surface::Surface,
	tile::{GRID_COLUMNS, GRID_ROWS},
};

/// Number of entries in the decode palette.
pub const PALETTE_LEN: usize = 9;

/// Palette index of the transparent entry.
pub const INDEX_TRANSPARENT: u8 = 0;

/// Palette index of opaque black.
pub const INDEX_BLACK: u8 = 7;

/// Palette index of opaque white.
pub const INDEX_WHITE: u8 = 8;

/// Index selected by each `abgr` high-bit pattern.
pub const ENCODE_TABLE: [u8; 16] = [
	// 0000-0111: no alpha bit
	0, 0, 0, 0, 0, 0, 0, 0, //
	// 1000 black, 1001 red, 1010 green, 1011 yellow
	1, 2, 5, 4, //
	// 1100 blue, 1101 purple, 1110 cyan, 1111 white
	6, 3, 7, 8,
];

/// Color written for index 7 by [`IndexedSource::to_editable_image`].
const EDITABLE_BLACK: Color = Color::from_rgb24(0x00FFFF);

/// A validated indexed sprite sheet.
#[derive(Clone, PartialEq, Eq)]
pub struct IndexedSource {
	/// Cell size byte followed by one index per pixel
	raw: Vec<u8>,
}

impl IndexedSource {
	/// Parses and validates an indexed sheet.
	///
	/// # Errors
	///
	/// Returns an error if:
	/// - The data is empty or the cell size is zero
	/// - The length does not match `1 + cell^2 * 256`
	/// - Any pixel index is greater than 8
	pub fn from_bytes(raw: Vec<u8>) -> Result<Self, IndexedSourceError> {
		let Some(&cell_size) = raw.first() else {
			return Err(IndexedSourceError::Empty);
		};
		if cell_size == 0 {
			return Err(IndexedSourceError::ZeroCellSize);
		}

		let expected = 1 + pixel_count(cell_size);
		if raw.len() != expected {
			return Err(IndexedSourceError::LengthMismatch {
				cell_size,
				expected,
				actual: raw.len(),
			});
		}

		if let Some((pixel, &value)) =
			raw[1..].iter().enumerate().find(|(_, v)| **v as usize >= PALETTE_LEN)
		{
			return Err(IndexedSourceError::InvalidIndex {
				pixel,
				value,
			});
		}

		Ok(Self {
			raw,
		})
	}

	/// The built-in cave graphics.
	pub fn builtin() -> Self {
		Self {
			raw: builtin::generate(),
		}
	}

	/// Cell edge length in pixels.
	pub fn cell_size(&self) -> u32 {
		self.raw[0] as u32
	}

	/// Sheet width in pixels.
	pub fn width(&self) -> u32 {
		self.cell_size() * GRID_COLUMNS
	}

	/// Sheet height in pixels.
	pub fn height(&self) -> u32 {
		self.cell_size() * GRID_ROWS
	}

	/// Palette indices, row-major.
	pub fn indices(&self) -> &[u8] {
		&self.raw[1..]
	}

	/// Palette index of one pixel.
	///
	/// # Panics
	///
	/// Panics if `(x, y)` lies outside the sheet.
	pub fn index_at(&self, x: u32, y: u32) -> u8 {
		let (width, height) = (self.width(), self.height());
		assert!(x < width && y < height, "pixel ({x}, {y}) lies outside the {width}x{height} sheet");
		self.raw[1 + y as usize * width as usize + x as usize]
	}

	/// Raw stream, cell size byte included.
	pub fn as_bytes(&self) -> &[u8] {
		&self.raw
	}

	/// Builds the 9-entry RGBA palette for a color table.
	pub fn palette(colors: &ColorTable) -> [Rgba; PALETTE_LEN] {
		let mut palette = [Rgba::TRANSPARENT; PALETTE_LEN];
		for (slot, color) in palette[1..=ColorTable::LEN].iter_mut().zip(colors.colors()) {
			*slot = color.opaque();
		}
		palette[INDEX_BLACK as usize] = Rgba::BLACK;
		palette[INDEX_WHITE as usize] = Rgba::WHITE;
		palette
	}

	/// Renders the sheet with the given role colors.
	pub fn decode<S: Surface>(&self, colors: &ColorTable) -> Result<S, IndexedSourceError> {
		self.decode_with(&Self::palette(colors))
	}

	fn decode_with<S: Surface>(&self, palette: &[Rgba; PALETTE_LEN]) -> Result<S, IndexedSourceError> {
		let width = self.width();
		let mut surface = S::try_new(width, self.height())?;

		for (i, &index) in self.indices().iter().enumerate() {
			let (x, y) = (i as u32 % width, i as u32 / width);
			surface.set_pixel(x, y, palette[index as usize]);
		}
		Ok(surface)
	}

	/// Recovers palette indices from an RGBA sheet.
	///
	/// The sheet must be a [`GRID_COLUMNS`] x [`GRID_ROWS`] grid of square
	/// cells no larger than 255 pixels.
	pub fn encode<S: Surface>(surface: &S) -> Result<Self, IndexedSourceError> {
		let (width, height) = (surface.width(), surface.height());
		let cell_size = width / GRID_COLUMNS;
		if cell_size == 0 || width % GRID_COLUMNS != 0 || height != cell_size * GRID_ROWS {
			return Err(IndexedSourceError::InvalidGeometry {
				width,
				height,
				columns: GRID_COLUMNS,
				rows: GRID_ROWS,
			});
		}
		let cell_byte = u8::try_from(cell_size).map_err(|_| IndexedSourceError::CellTooLarge(cell_size))?;

		let mut raw = Vec::with_capacity(1 + pixel_count(cell_byte));
		raw.push(cell_byte);
		raw.extend(surface.pixels().map(encode_pixel));

		Ok(Self {
			raw,
		})
	}

	/// Renders the sheet with on/off marker colors, index 7 as cyan.
	///
	/// Passing the result through [`IndexedSource::encode`] gives back an
	/// identical source, so the image can be edited in a paint program and
	/// loaded again as a re-colorable theme.
	pub fn to_editable_image(&self) -> Result<RgbaImage, IndexedSourceError> {
		let mut palette = Self::palette(&ColorTable::MARKER);
		palette[INDEX_BLACK as usize] = EDITABLE_BLACK.opaque();

		let surface: crate::surface::ImageSurface = self.decode_with(&palette)?;
		Ok(surface.into_image())
	}
}

impl fmt::Debug for IndexedSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("IndexedSource")
			.field("cell_size", &self.cell_size())
			.field("width", &self.width())
			.field("height", &self.height())
			.finish()
	}
}

impl fmt::Display for IndexedSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"Indexed sheet: {}x{} cells of {}px ({}x{} pixels)",
			GRID_COLUMNS,
			GRID_ROWS,
			self.cell_size(),
			self.width(),
			self.height()
		)
	}
}

/// Returns `true` if every channel of every pixel is either 0 or 255.
///
/// Sheets drawn only with on/off colors can be encoded back into an
/// [`IndexedSource`] and re-colored; anything else is true-color artwork.
pub fn is_indexed_source<S: Surface>(surface: &S) -> bool {
	surface.pixels().all(|p| p.channels().iter().all(|&c| c == 0 || c == 255))
}

/// Maps one RGBA pixel to its palette index.
pub fn encode_pixel(pixel: Rgba) -> u8 {
	let pattern = (pixel.a >> 7) << 3 | (pixel.b >> 7) << 2 | (pixel.g >> 7) << 1 | (pixel.r >> 7);
	ENCODE_TABLE[pattern as usize]
}

fn pixel_count(cell_size: u8) -> usize {
	let cell = cell_size as usize;
	cell * cell * (GRID_COLUMNS * GRID_ROWS) as usize
}
