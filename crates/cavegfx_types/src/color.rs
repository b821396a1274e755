//! Color types.
//!
//! Two color representations are used throughout the crate:
//!
//! - [`Color`]: a 24-bit RGB value without alpha, used for role colors and
//!   configuration (`0xRRGGBB`).
//! - [`Rgba`]: a single pixel with four 8-bit channels, as stored in a
//!   [`Surface`](crate::surface::Surface).
//!
//! The six *role colors* that re-color an indexed sprite sheet are grouped in
//! a [`ColorTable`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ColorParseError;

/// 24-bit RGB color (`0xRRGGBB`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color(u32);

impl Color {
	/// Opaque black.
	pub const BLACK: Self = Self(0x000000);

	/// Opaque white.
	pub const WHITE: Self = Self(0xFFFFFF);

	/// Creates a color from a `0xRRGGBB` value. Bits above 24 are discarded.
	pub const fn from_rgb24(rgb: u32) -> Self {
		Self(rgb & 0x00FF_FFFF)
	}

	/// Creates a color from its components.
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self(((r as u32) << 16) | ((g as u32) << 8) | (b as u32))
	}

	/// Red component.
	pub const fn r(self) -> u8 {
		(self.0 >> 16) as u8
	}

	/// Green component.
	pub const fn g(self) -> u8 {
		(self.0 >> 8) as u8
	}

	/// Blue component.
	pub const fn b(self) -> u8 {
		self.0 as u8
	}

	/// Converts to a pixel with the given alpha.
	pub const fn with_alpha(self, a: u8) -> Rgba {
		Rgba::new(self.r(), self.g(), self.b(), a)
	}

	/// Converts to a fully opaque pixel.
	pub const fn opaque(self) -> Rgba {
		self.with_alpha(255)
	}
}

impl fmt::Display for Color {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "#{:06x}", self.0)
	}
}

impl FromStr for Color {
	type Err = ColorParseError;

	/// Parses `#rrggbb`, `rrggbb` or `0xrrggbb`.
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let trimmed = s.trim();
		let hex = trimmed
			.strip_prefix('#')
			.or_else(|| trimmed.strip_prefix("0x"))
			.unwrap_or(trimmed);

		if hex.len() != 6 {
			return Err(ColorParseError(s.to_string()));
		}

		u32::from_str_radix(hex, 16).map(Self::from_rgb24).map_err(|_| ColorParseError(s.to_string()))
	}
}

impl TryFrom<String> for Color {
	type Error = ColorParseError;

	fn try_from(value: String) -> Result<Self, Self::Error> {
		value.parse()
	}
}

impl From<Color> for String {
	fn from(color: Color) -> Self {
		color.to_string()
	}
}

/// RGBA pixel value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgba {
	/// Red component (0-255)
	pub r: u8,
	/// Green component (0-255)
	pub g: u8,
	/// Blue component (0-255)
	pub b: u8,
	/// Alpha component (0-255)
	pub a: u8,
}

impl Rgba {
	/// Fully transparent black.
	pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

	/// Opaque black.
	pub const BLACK: Self = Self::new(0, 0, 0, 255);

	/// Opaque white.
	pub const WHITE: Self = Self::new(255, 255, 255, 255);

	/// Creates a new pixel.
	pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
		Self {
			r,
			g,
			b,
			a,
		}
	}

	/// Returns the pixel packed as `0xRRGGBBAA`.
	pub const fn to_rgba32(self) -> u32 {
		((self.r as u32) << 24) | ((self.g as u32) << 16) | ((self.b as u32) << 8) | (self.a as u32)
	}

	/// Unpacks a `0xRRGGBBAA` value.
	pub const fn from_rgba32(rgba: u32) -> Self {
		Self {
			r: (rgba >> 24) as u8,
			g: (rgba >> 16) as u8,
			b: (rgba >> 8) as u8,
			a: rgba as u8,
		}
	}

	/// Channels in `[r, g, b, a]` order.
	pub const fn channels(self) -> [u8; 4] {
		[self.r, self.g, self.b, self.a]
	}

	/// Composites `self` over `dst` ("source over"), with the source alpha
	/// scaled by `opacity / 255`.
	pub fn blend_over(self, dst: Rgba, opacity: u8) -> Rgba {
		let src_alpha = (self.a as f32 / 255.0) * (opacity as f32 / 255.0);
		if src_alpha <= 0.0 {
			return dst;
		}
		if src_alpha >= 1.0 {
			return self;
		}

		let dst_alpha = dst.a as f32 / 255.0;
		let out_alpha = src_alpha + dst_alpha * (1.0 - src_alpha);
		if out_alpha <= 0.0 {
			return Rgba::TRANSPARENT;
		}

		let blend = |s: u8, d: u8| -> u8 {
			let s = s as f32 / 255.0;
			let d = d as f32 / 255.0;
			let out = (s * src_alpha + d * dst_alpha * (1.0 - src_alpha)) / out_alpha;
			(out.clamp(0.0, 1.0) * 255.0).round() as u8
		};

		Rgba::new(
			blend(self.r, dst.r),
			blend(self.g, dst.g),
			blend(self.b, dst.b),
			(out_alpha * 255.0).round() as u8,
		)
	}
}

impl fmt::Display for Rgba {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "RGBA({}, {}, {}, {})", self.r, self.g, self.b, self.a)
	}
}

impl From<image::Rgba<u8>> for Rgba {
	fn from(p: image::Rgba<u8>) -> Self {
		Self::new(p[0], p[1], p[2], p[3])
	}
}

impl From<Rgba> for image::Rgba<u8> {
	fn from(p: Rgba) -> Self {
		image::Rgba(p.channels())
	}
}

/// The 16 fixed colors of the C64 palette.
pub mod c64 {
	use super::Color;

	/// Black
	pub const BLACK: Color = Color::from_rgb24(0x000000);
	/// White
	pub const WHITE: Color = Color::from_rgb24(0xFFFFFF);
	/// Red
	pub const RED: Color = Color::from_rgb24(0x880000);
	/// Cyan
	pub const CYAN: Color = Color::from_rgb24(0xAAFFEE);
	/// Purple
	pub const PURPLE: Color = Color::from_rgb24(0xCC44CC);
	/// Green
	pub const GREEN: Color = Color::from_rgb24(0x00CC55);
	/// Blue
	pub const BLUE: Color = Color::from_rgb24(0x0000AA);
	/// Yellow
	pub const YELLOW: Color = Color::from_rgb24(0xEEEE77);
	/// Orange
	pub const ORANGE: Color = Color::from_rgb24(0xDD8855);
	/// Brown
	pub const BROWN: Color = Color::from_rgb24(0x664400);
	/// Light red
	pub const LIGHT_RED: Color = Color::from_rgb24(0xFF7777);
	/// Dark grey
	pub const DARK_GREY: Color = Color::from_rgb24(0x333333);
	/// Grey
	pub const GREY: Color = Color::from_rgb24(0x777777);
	/// Light green
	pub const LIGHT_GREEN: Color = Color::from_rgb24(0xAAFF66);
	/// Light blue
	pub const LIGHT_BLUE: Color = Color::from_rgb24(0x0088FF);
	/// Light grey
	pub const LIGHT_GREY: Color = Color::from_rgb24(0xBBBBBB);

	/// All sixteen colors in hardware order.
	pub const PALETTE: [Color; 16] = [
		BLACK,
		WHITE,
		RED,
		CYAN,
		PURPLE,
		GREEN,
		BLUE,
		YELLOW,
		ORANGE,
		BROWN,
		LIGHT_RED,
		DARK_GREY,
		GREY,
		LIGHT_GREEN,
		LIGHT_BLUE,
		LIGHT_GREY,
	];
}

/// The six role colors used to re-color an indexed sprite sheet.
///
/// Colors are named by position: index 0 is the background, 1-3 are the
/// foreground tones and 4-5 are the accent tones used by special elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColorTable([Color; ColorTable::LEN]);

impl ColorTable {
	/// Number of role colors.
	pub const LEN: usize = 6;

	/// On/off colors whose channel high bits encode back to indices 1-6.
	///
	/// Decoding with this table gives an image that
	/// [`IndexedSource::encode`](crate::indexed::IndexedSource::encode) maps
	/// back to the same indices.
	pub const MARKER: Self = Self([
		Color::from_rgb24(0x000000),
		Color::from_rgb24(0xFF0000),
		Color::from_rgb24(0xFF00FF),
		Color::from_rgb24(0xFFFF00),
		Color::from_rgb24(0x00FF00),
		Color::from_rgb24(0x0000FF),
	]);

	/// Creates a table from six role colors.
	pub const fn new(colors: [Color; Self::LEN]) -> Self {
		Self(colors)
	}

	/// Returns the role color at `index` (0-5).
	///
	/// # Panics
	///
	/// Panics if `index >= 6`.
	pub const fn get(&self, index: usize) -> Color {
		self.0[index]
	}

	/// Background color (role 0).
	pub const fn background(&self) -> Color {
		self.0[0]
	}

	/// Returns all six colors.
	pub const fn colors(&self) -> &[Color; Self::LEN] {
		&self.0
	}
}

impl Default for ColorTable {
	/// C64 black background, orange / grey / white foregrounds, white accents.
	fn default() -> Self {
		Self([c64::BLACK, c64::ORANGE, c64::GREY, c64::WHITE, c64::WHITE, c64::WHITE])
	}
}

impl From<[Color; ColorTable::LEN]> for ColorTable {
	fn from(colors: [Color; ColorTable::LEN]) -> Self {
		Self(colors)
	}
}

impl fmt::Display for ColorTable {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let parts: Vec<String> = self.0.iter().map(ToString::to_string).collect();
		write!(f, "[{}]", parts.join(", "))
	}
}
