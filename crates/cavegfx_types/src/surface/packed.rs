//! [`Surface`] stored as packed 32-bit pixels.
//!
//! Pixels are `0xRRGGBBAA` words laid out row by row. Each row occupies
//! `pitch` words, which is the width rounded up to a multiple of
//! [`PackedSurface::ROW_ALIGN`] so rows start on aligned boundaries, the way
//! SDL software surfaces are laid out.

use super::{Surface, assert_within, check_allocation};
use crate::{color::Rgba, error::SurfaceError, geometry::Rect};

/// RGBA surface with packed, pitch-aligned rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackedSurface {
	width: u32,
	height: u32,
	pitch: usize,
	pixels: Vec<u32>,
}

impl PackedSurface {
	/// Row alignment in pixels.
	pub const ROW_ALIGN: usize = 4;

	/// Number of words per row, padding included.
	pub fn pitch(&self) -> usize {
		self.pitch
	}

	/// Raw packed pixel words, padding included.
	pub fn raw(&self) -> &[u32] {
		&self.pixels
	}

	#[inline]
	fn offset(&self, x: u32, y: u32) -> usize {
		assert!(
			x < self.width && y < self.height,
			"pixel ({x}, {y}) lies outside the {}x{} surface",
			self.width,
			self.height
		);
		y as usize * self.pitch + x as usize
	}

	fn row_span(&self, x: u32, y: u32, len: u32) -> std::ops::Range<usize> {
		let start = y as usize * self.pitch + x as usize;
		start..start + len as usize
	}
}

impl Surface for PackedSurface {
	fn try_new(width: u32, height: u32) -> Result<Self, SurfaceError> {
		check_allocation(width, height)?;
		let pitch = (width as usize).div_ceil(Self::ROW_ALIGN) * Self::ROW_ALIGN;
		let len = pitch.checked_mul(height as usize).ok_or(SurfaceError::Allocation {
			width,
			height,
		})?;

		Ok(Self {
			width,
			height,
			pitch,
			pixels: vec![Rgba::TRANSPARENT.to_rgba32(); len],
		})
	}

	#[inline]
	fn width(&self) -> u32 {
		self.width
	}

	#[inline]
	fn height(&self) -> u32 {
		self.height
	}

	#[inline]
	fn get_pixel(&self, x: u32, y: u32) -> Rgba {
		Rgba::from_rgba32(self.pixels[self.offset(x, y)])
	}

	#[inline]
	fn set_pixel(&mut self, x: u32, y: u32, pixel: Rgba) {
		let offset = self.offset(x, y);
		self.pixels[offset] = pixel.to_rgba32();
	}

	fn fill(&mut self, rect: Rect, pixel: Rgba) {
		assert_within(&self.bounds(), &rect, "fill");
		let word = pixel.to_rgba32();
		for y in rect.y..rect.y + rect.height {
			let span = self.row_span(rect.x, y, rect.width);
			self.pixels[span].fill(word);
		}
	}

	fn copy_region(&self, src: Rect, dst: &mut Self, dst_x: u32, dst_y: u32) {
		assert_within(&self.bounds(), &src, "copy source");
		assert_within(&dst.bounds(), &Rect::new(dst_x, dst_y, src.width, src.height), "copy destination");

		for row in 0..src.height {
			let from = self.row_span(src.x, src.y + row, src.width);
			let to = dst.row_span(dst_x, dst_y + row, src.width);
			dst.pixels[to].copy_from_slice(&self.pixels[from]);
		}
	}
}
