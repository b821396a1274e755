//! [`Surface`] backed by [`image::RgbaImage`].

use image::{RgbaImage, imageops, imageops::FilterType};

use super::{Surface, assert_within, check_allocation};
use crate::{
	color::Rgba,
	error::SurfaceError,
	geometry::{Interpolation, Rect, Transform},
};

/// RGBA surface stored in an [`image::RgbaImage`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSurface {
	image: RgbaImage,
}

impl ImageSurface {
	/// Wraps an existing image without copying.
	pub fn from_image(image: RgbaImage) -> Result<Self, SurfaceError> {
		check_allocation(image.width(), image.height())?;
		Ok(Self {
			image,
		})
	}

	/// Returns the wrapped image.
	pub fn as_image(&self) -> &RgbaImage {
		&self.image
	}

	/// Consumes the surface and returns the wrapped image.
	pub fn into_image(self) -> RgbaImage {
		self.image
	}
}

impl Surface for ImageSurface {
	fn try_new(width: u32, height: u32) -> Result<Self, SurfaceError> {
		check_allocation(width, height)?;
		Ok(Self {
			image: RgbaImage::new(width, height),
		})
	}

	#[inline]
	fn width(&self) -> u32 {
		self.image.width()
	}

	#[inline]
	fn height(&self) -> u32 {
		self.image.height()
	}

	#[inline]
	fn get_pixel(&self, x: u32, y: u32) -> Rgba {
		(*self.image.get_pixel(x, y)).into()
	}

	#[inline]
	fn set_pixel(&mut self, x: u32, y: u32, pixel: Rgba) {
		self.image.put_pixel(x, y, pixel.into());
	}

	fn fill(&mut self, rect: Rect, pixel: Rgba) {
		assert_within(&self.bounds(), &rect, "fill");
		let pixel: image::Rgba<u8> = pixel.into();
		for y in rect.y..rect.y + rect.height {
			for x in rect.x..rect.x + rect.width {
				*self.image.get_pixel_mut(x, y) = pixel;
			}
		}
	}

	fn copy_region(&self, src: Rect, dst: &mut Self, dst_x: u32, dst_y: u32) {
		assert_within(&self.bounds(), &src, "copy source");
		assert_within(&dst.bounds(), &Rect::new(dst_x, dst_y, src.width, src.height), "copy destination");

		let patch = imageops::crop_imm(&self.image, src.x, src.y, src.width, src.height).to_image();
		imageops::replace(&mut dst.image, &patch, dst_x as i64, dst_y as i64);
	}

	/// Resamples with `imageops::resize`; bilinear uses the triangle filter.
	fn scaled(&self, width: u32, height: u32, interpolation: Interpolation) -> Result<Self, SurfaceError> {
		check_allocation(width, height)?;
		let filter = match interpolation {
			Interpolation::Nearest => FilterType::Nearest,
			Interpolation::Bilinear => FilterType::Triangle,
		};
		Ok(Self {
			image: imageops::resize(&self.image, width, height, filter),
		})
	}

	fn rotated(&self, transform: Transform) -> Result<Self, SurfaceError> {
		let image = match transform {
			Transform::None => self.image.clone(),
			Transform::Rotate90Cw => imageops::rotate90(&self.image),
			Transform::Rotate90Ccw => imageops::rotate270(&self.image),
			Transform::Rotate180 => imageops::rotate180(&self.image),
		};
		Ok(Self {
			image,
		})
	}

	fn from_rgba_image(image: &RgbaImage) -> Result<Self, SurfaceError> {
		Self::from_image(image.clone())
	}

	fn to_rgba_image(&self) -> RgbaImage {
		self.image.clone()
	}
}
