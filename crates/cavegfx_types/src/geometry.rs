//! Rectangles, transforms and interpolation modes.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
	/// Left edge
	pub x: u32,
	/// Top edge
	pub y: u32,
	/// Width
	pub width: u32,
	/// Height
	pub height: u32,
}

impl Rect {
	/// Creates a new rectangle.
	pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
		Self {
			x,
			y,
			width,
			height,
		}
	}

	/// Rectangle anchored at the origin.
	pub const fn sized(width: u32, height: u32) -> Self {
		Self::new(0, 0, width, height)
	}

	/// Square of edge `size` at `(x, y)`.
	pub const fn square(x: u32, y: u32, size: u32) -> Self {
		Self::new(x, y, size, size)
	}

	/// Exclusive right edge.
	pub const fn right(&self) -> u64 {
		self.x as u64 + self.width as u64
	}

	/// Exclusive bottom edge.
	pub const fn bottom(&self) -> u64 {
		self.y as u64 + self.height as u64
	}

	/// Returns `true` if the rectangle covers no pixel.
	pub const fn is_empty(&self) -> bool {
		self.width == 0 || self.height == 0
	}

	/// Returns `true` if `other` lies completely inside `self`.
	pub const fn contains_rect(&self, other: &Rect) -> bool {
		other.x >= self.x
			&& other.y >= self.y
			&& other.right() <= self.right()
			&& other.bottom() <= self.bottom()
	}

	/// Returns `true` if the point lies inside the rectangle.
	pub const fn contains(&self, x: u32, y: u32) -> bool {
		x >= self.x && y >= self.y && (x as u64) < self.right() && (y as u64) < self.bottom()
	}
}

impl fmt::Display for Rect {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}x{}+{}+{}", self.width, self.height, self.x, self.y)
	}
}

/// Geometric transform applied to an overlay before compositing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Transform {
	/// Leave as drawn
	#[default]
	None,
	/// Rotate 90 degrees clockwise
	Rotate90Cw,
	/// Rotate 90 degrees counter-clockwise
	Rotate90Ccw,
	/// Rotate 180 degrees
	Rotate180,
}

impl Transform {
	/// Maps a destination pixel back to the source pixel it comes from.
	///
	/// `width` and `height` are the dimensions of the source.
	pub const fn source_of(self, x: u32, y: u32, width: u32, height: u32) -> (u32, u32) {
		match self {
			Self::None => (x, y),
			Self::Rotate90Cw => (y, height - 1 - x),
			Self::Rotate90Ccw => (width - 1 - y, x),
			Self::Rotate180 => (width - 1 - x, height - 1 - y),
		}
	}

	/// Returns `true` if the transform swaps width and height.
	pub const fn swaps_axes(self) -> bool {
		matches!(self, Self::Rotate90Cw | Self::Rotate90Ccw)
	}
}

impl fmt::Display for Transform {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::None => write!(f, "none"),
			Self::Rotate90Cw => write!(f, "rotate 90 cw"),
			Self::Rotate90Ccw => write!(f, "rotate 90 ccw"),
			Self::Rotate180 => write!(f, "rotate 180"),
		}
	}
}

/// Resampling mode used when scaling surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Interpolation {
	/// Nearest neighbour: keeps hard pixel edges
	#[default]
	Nearest,
	/// Bilinear filtering
	Bilinear,
}

impl fmt::Display for Interpolation {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Nearest => write!(f, "nearest"),
			Self::Bilinear => write!(f, "bilinear"),
		}
	}
}
