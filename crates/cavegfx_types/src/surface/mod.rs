//! RGBA pixel surfaces.
//!
//! [`Surface`] is the contract every tile, display copy and assembled cave
//! image is stored behind. Two backends implement it:
//!
//! - [`ImageSurface`]: wraps an [`image::RgbaImage`] and delegates scaling and
//!   rotation to [`image::imageops`].
//! - [`PackedSurface`]: packed `0xRRGGBBAA` rows addressed through a pitch, in
//!   the layout of an SDL software surface.
//!
//! Callers pick one backend as a type parameter; both are never mixed.
//!
//! # Bounds
//!
//! Coordinates and rectangles outside the surface are programming errors and
//! cause a panic. Tile geometry is validated before any pixel access, so a
//! violation means the grid constants or the rule table are wrong.
//!
//! # Examples
//!
//! ```
//! use cavegfx_types::prelude::*;
//!
//! let mut tile = ImageSurface::try_new(16, 16).unwrap();
//! tile.fill(Rect::sized(16, 16), Rgba::BLACK);
//! tile.set_pixel(0, 0, Rgba::WHITE);
//!
//! let rotated = tile.rotated(Transform::Rotate90Cw).unwrap();
//! assert_eq!(rotated.get_pixel(15, 0), Rgba::WHITE);
//! ```

mod image_surface;
mod packed;

use std::fmt;

use image::RgbaImage;

pub use image_surface::ImageSurface;
pub use packed::PackedSurface;

use crate::{
	color::Rgba,
	error::SurfaceError,
	geometry::{Interpolation, Rect, Transform},
};

/// An owned RGBA image with fixed dimensions and mutable contents.
pub trait Surface: Clone + fmt::Debug + Sized {
	/// Allocates a fully transparent surface.
	///
	/// Fails with [`SurfaceError::Allocation`] for zero-sized or oversized
	/// requests.
	fn try_new(width: u32, height: u32) -> Result<Self, SurfaceError>;

	/// Width in pixels.
	fn width(&self) -> u32;

	/// Height in pixels.
	fn height(&self) -> u32;

	/// Reads one pixel.
	fn get_pixel(&self, x: u32, y: u32) -> Rgba;

	/// Writes one pixel.
	fn set_pixel(&mut self, x: u32, y: u32, pixel: Rgba);

	/// The whole surface as a rectangle.
	fn bounds(&self) -> Rect {
		Rect::sized(self.width(), self.height())
	}

	/// Fills `rect` with `pixel`, replacing what was there.
	fn fill(&mut self, rect: Rect, pixel: Rgba) {
		assert_within(&self.bounds(), &rect, "fill");
		for y in rect.y..rect.y + rect.height {
			for x in rect.x..rect.x + rect.width {
				self.set_pixel(x, y, pixel);
			}
		}
	}

	/// Copies `src` from `self` into `dst` at `(dst_x, dst_y)`, overwriting
	/// the destination pixels including alpha.
	fn copy_region(&self, src: Rect, dst: &mut Self, dst_x: u32, dst_y: u32) {
		assert_within(&self.bounds(), &src, "copy source");
		assert_within(&dst.bounds(), &Rect::new(dst_x, dst_y, src.width, src.height), "copy destination");

		for dy in 0..src.height {
			for dx in 0..src.width {
				let pixel = self.get_pixel(src.x + dx, src.y + dy);
				dst.set_pixel(dst_x + dx, dst_y + dy, pixel);
			}
		}
	}

	/// Alpha-composites `src` from `self` over `dst` at `(dst_x, dst_y)`.
	///
	/// Each source pixel's alpha is scaled by `opacity / 255` before the
	/// "source over" blend.
	fn composite_region(&self, src: Rect, dst: &mut Self, dst_x: u32, dst_y: u32, opacity: u8) {
		assert_within(&self.bounds(), &src, "composite source");
		assert_within(
			&dst.bounds(),
			&Rect::new(dst_x, dst_y, src.width, src.height),
			"composite destination",
		);

		for dy in 0..src.height {
			for dx in 0..src.width {
				let over = self.get_pixel(src.x + dx, src.y + dy);
				let under = dst.get_pixel(dst_x + dx, dst_y + dy);
				dst.set_pixel(dst_x + dx, dst_y + dy, over.blend_over(under, opacity));
			}
		}
	}

	/// Returns a copy of `rect` as a new surface.
	fn sub_surface(&self, rect: Rect) -> Result<Self, SurfaceError> {
		let mut out = Self::try_new(rect.width, rect.height)?;
		self.copy_region(rect, &mut out, 0, 0);
		Ok(out)
	}

	/// Returns a resampled copy of `width` x `height` pixels.
	///
	/// Nearest-neighbour output is identical across backends. Backends may
	/// use their own bilinear filter, so bilinear output can differ between
	/// them by a rounding step per channel.
	fn scaled(&self, width: u32, height: u32, interpolation: Interpolation) -> Result<Self, SurfaceError> {
		let mut out = Self::try_new(width, height)?;
		match interpolation {
			Interpolation::Nearest => {
				for y in 0..height {
					let sy = nearest_source(y, height, self.height());
					for x in 0..width {
						let sx = nearest_source(x, width, self.width());
						out.set_pixel(x, y, self.get_pixel(sx, sy));
					}
				}
			}
			Interpolation::Bilinear => {
				for y in 0..height {
					for x in 0..width {
						out.set_pixel(x, y, bilinear_sample(self, x, y, width, height));
					}
				}
			}
		}
		Ok(out)
	}

	/// Returns a rotated copy.
	fn rotated(&self, transform: Transform) -> Result<Self, SurfaceError> {
		let (width, height) = if transform.swaps_axes() {
			(self.height(), self.width())
		} else {
			(self.width(), self.height())
		};

		let mut out = Self::try_new(width, height)?;
		for y in 0..height {
			for x in 0..width {
				let (sx, sy) = transform.source_of(x, y, self.width(), self.height());
				out.set_pixel(x, y, self.get_pixel(sx, sy));
			}
		}
		Ok(out)
	}

	/// Copies an [`image::RgbaImage`] into a new surface.
	fn from_rgba_image(image: &RgbaImage) -> Result<Self, SurfaceError> {
		let mut out = Self::try_new(image.width(), image.height())?;
		for (x, y, pixel) in image.enumerate_pixels() {
			out.set_pixel(x, y, (*pixel).into());
		}
		Ok(out)
	}

	/// Copies the surface into an [`image::RgbaImage`].
	fn to_rgba_image(&self) -> RgbaImage {
		RgbaImage::from_fn(self.width(), self.height(), |x, y| self.get_pixel(x, y).into())
	}

	/// Iterates over every pixel in row-major order.
	fn pixels(&self) -> impl Iterator<Item = Rgba> + '_ {
		(0..self.height()).flat_map(move |y| (0..self.width()).map(move |x| self.get_pixel(x, y)))
	}
}

/// Rejects allocations no backend can address.
pub(crate) fn check_allocation(width: u32, height: u32) -> Result<usize, SurfaceError> {
	let fault = SurfaceError::Allocation {
		width,
		height,
	};
	if width == 0 || height == 0 {
		return Err(fault);
	}

	(width as usize)
		.checked_mul(height as usize)
		.and_then(|n| n.checked_mul(4))
		.filter(|bytes| *bytes <= isize::MAX as usize)
		.map(|bytes| bytes / 4)
		.ok_or(fault)
}

#[track_caller]
pub(crate) fn assert_within(bounds: &Rect, rect: &Rect, what: &str) {
	assert!(bounds.contains_rect(rect), "{what} rectangle {rect} lies outside the {bounds} surface");
}

fn nearest_source(dst: u32, dst_len: u32, src_len: u32) -> u32 {
	let s = (dst as u64 * src_len as u64) / dst_len as u64;
	(s as u32).min(src_len - 1)
}

fn bilinear_sample<S: Surface>(src: &S, x: u32, y: u32, width: u32, height: u32) -> Rgba {
	let fx = ((x as f32 + 0.5) * src.width() as f32 / width as f32 - 0.5).max(0.0);
	let fy = ((y as f32 + 0.5) * src.height() as f32 / height as f32 - 0.5).max(0.0);

	let x0 = (fx.floor() as u32).min(src.width() - 1);
	let y0 = (fy.floor() as u32).min(src.height() - 1);
	let x1 = (x0 + 1).min(src.width() - 1);
	let y1 = (y0 + 1).min(src.height() - 1);
	let tx = fx - x0 as f32;
	let ty = fy - y0 as f32;

	let p00 = src.get_pixel(x0, y0).channels();
	let p10 = src.get_pixel(x1, y0).channels();
	let p01 = src.get_pixel(x0, y1).channels();
	let p11 = src.get_pixel(x1, y1).channels();

	let mut out = [0u8; 4];
	for (i, channel) in out.iter_mut().enumerate() {
		let top = p00[i] as f32 * (1.0 - tx) + p10[i] as f32 * tx;
		let bottom = p01[i] as f32 * (1.0 - tx) + p11[i] as f32 * tx;
		*channel = (top * (1.0 - ty) + bottom * ty).round().clamp(0.0, 255.0) as u8;
	}
	Rgba::new(out[0], out[1], out[2], out[3])
}

#[cfg(test)]
mod tests {
	use super::*;

	fn checker<S: Surface>() -> S {
		let mut s = S::try_new(4, 2).unwrap();
		for y in 0..2 {
			for x in 0..4 {
				let v = (y * 4 + x) as u8;
				s.set_pixel(x, y, Rgba::new(v, v, v, 255));
			}
		}
		s
	}

	fn exercise_backend<S: Surface>() {
		let src = checker::<S>();
		assert_eq!(src.width(), 4);
		assert_eq!(src.height(), 2);

		// copy and sub-surface
		let sub = src.sub_surface(Rect::new(1, 0, 2, 2)).unwrap();
		assert_eq!(sub.get_pixel(0, 0), Rgba::new(1, 1, 1, 255));
		assert_eq!(sub.get_pixel(1, 1), Rgba::new(6, 6, 6, 255));

		// rotation
		let cw = src.rotated(Transform::Rotate90Cw).unwrap();
		assert_eq!((cw.width(), cw.height()), (2, 4));
		assert_eq!(cw.get_pixel(0, 0), src.get_pixel(0, 1));
		assert_eq!(cw.get_pixel(1, 0), src.get_pixel(0, 0));
		let ccw = src.rotated(Transform::Rotate90Ccw).unwrap();
		assert_eq!(ccw.get_pixel(0, 0), src.get_pixel(3, 0));
		let flip = src.rotated(Transform::Rotate180).unwrap();
		assert_eq!(flip.get_pixel(0, 0), src.get_pixel(3, 1));
		assert_eq!(src.rotated(Transform::None).unwrap().to_rgba_image(), src.to_rgba_image());

		// nearest scaling by an integer factor duplicates pixels
		let big = src.scaled(8, 4, Interpolation::Nearest).unwrap();
		assert_eq!(big.get_pixel(0, 0), src.get_pixel(0, 0));
		assert_eq!(big.get_pixel(1, 1), src.get_pixel(0, 0));
		assert_eq!(big.get_pixel(7, 3), src.get_pixel(3, 1));

		// bilinear scaling of a flat surface stays flat
		let mut flat = S::try_new(4, 4).unwrap();
		flat.fill(flat.bounds(), Rgba::new(50, 100, 150, 255));
		let smooth = flat.scaled(3, 3, Interpolation::Bilinear).unwrap();
		assert!(smooth.pixels().all(|p| p == Rgba::new(50, 100, 150, 255)));

		// fill and composite
		let mut dst = S::try_new(4, 2).unwrap();
		dst.fill(Rect::sized(4, 2), Rgba::BLACK);
		let mut overlay = S::try_new(2, 2).unwrap();
		overlay.set_pixel(0, 0, Rgba::WHITE);
		overlay.composite_region(overlay.bounds(), &mut dst, 2, 0, 255);
		assert_eq!(dst.get_pixel(2, 0), Rgba::WHITE);
		assert_eq!(dst.get_pixel(3, 0), Rgba::BLACK);
		assert_eq!(dst.get_pixel(0, 0), Rgba::BLACK);

		// image round trip
		let image = src.to_rgba_image();
		let back = S::from_rgba_image(&image).unwrap();
		assert_eq!(back.to_rgba_image(), image);
	}

	#[test]
	fn test_image_surface_contract() {
		exercise_backend::<ImageSurface>();
	}

	#[test]
	fn test_packed_surface_contract() {
		exercise_backend::<PackedSurface>();
	}

	#[test]
	fn test_allocation_fault() {
		assert_eq!(
			ImageSurface::try_new(0, 16).unwrap_err(),
			SurfaceError::Allocation {
				width: 0,
				height: 16
			}
		);
		assert!(PackedSurface::try_new(16, 0).is_err());
	}

	#[test]
	#[should_panic(expected = "outside")]
	fn test_copy_out_of_bounds_panics() {
		let src = ImageSurface::try_new(4, 4).unwrap();
		let mut dst = ImageSurface::try_new(2, 2).unwrap();
		src.copy_region(Rect::sized(4, 4), &mut dst, 0, 0);
	}

	#[test]
	#[should_panic(expected = "outside")]
	fn test_fill_out_of_bounds_panics() {
		let mut dst = PackedSurface::try_new(2, 2).unwrap();
		dst.fill(Rect::new(1, 1, 2, 2), Rgba::WHITE);
	}
}
