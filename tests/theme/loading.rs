use std::path::PathBuf;

use cave_gfx::prelude::*;
use image::RgbaImage;

use crate::{cave_colors, default_theme};

/// PNG written to the temp directory, removed on drop.
struct TempPng(PathBuf);

impl TempPng {
	fn new(name: &str, image: &RgbaImage) -> Self {
		let path = std::env::temp_dir().join(format!("cavegfx-{}-{name}.png", std::process::id()));
		image.save(&path).unwrap();
		Self(path)
	}
}

impl Drop for TempPng {
	fn drop(&mut self) {
		let _ = std::fs::remove_file(&self.0);
	}
}

#[test_log::test]
fn test_grid_geometry() {
	assert_eq!(cave_gfx::cavegfx_theme::loader::check_geometry(8 * 16, 32 * 16).unwrap(), 16);
	assert!(matches!(
		cave_gfx::cavegfx_theme::loader::check_geometry(7 * 16, 32 * 16),
		Err(GfxError::InvalidGeometry { .. })
	));
}

#[test_log::test]
fn test_bad_file_leaves_theme_intact() {
	let mut theme = default_theme::<ImageSurface>();
	theme.select_colors(cave_colors()).unwrap();
	let generation = theme.generation();
	let stone = theme.tile(TileId::STONE).unwrap().to_rgba_image();

	let file = TempPng::new("seven-columns", &RgbaImage::new(7 * 16, 32 * 16));
	let err = theme.load_from_file(&file.0).unwrap_err();
	assert!(matches!(err, GfxError::InvalidGeometry { .. }));

	assert_eq!(theme.generation(), generation);
	assert_eq!(theme.colors(), &cave_colors());
	assert_eq!(theme.mode(), ThemeMode::Recolorable);
	assert_eq!(theme.tile(TileId::STONE).unwrap().to_rgba_image(), stone);
	assert_eq!(theme.tiles().populated_count(), TILE_COUNT);
}

#[test_log::test]
fn test_missing_file() {
	let mut theme = default_theme::<PackedSurface>();
	let err = theme.load_from_file("definitely/not/here.png").unwrap_err();
	assert!(matches!(err, GfxError::Image(_) | GfxError::Io(_)));
	assert_eq!(theme.generation(), 1);
}

#[test_log::test]
fn test_load_indexed_file() {
	let mut theme = default_theme::<ImageSurface>();
	let file = TempPng::new("indexed", &IndexedSource::builtin().to_editable_image().unwrap());

	theme.load_from_file(&file.0).unwrap();
	assert_eq!(theme.mode(), ThemeMode::Recolorable);
	assert!(theme.has_custom_source());
	assert_eq!(theme.indexed_source(), &IndexedSource::builtin());

	// still follows the colors
	assert!(theme.select_colors(cave_colors()).unwrap());
	assert_eq!(theme.tile(TileId::SPACE).unwrap().get_pixel(3, 3), c64::DARK_GREY.opaque());
}

#[test_log::test]
fn test_load_true_color_file() {
	let mut theme = default_theme::<PackedSurface>();
	let artwork = RgbaImage::from_fn(8 * 8, 32 * 8, |x, y| image::Rgba([(x * 3) as u8, (y % 256) as u8, 77, 255]));
	let file = TempPng::new("true-color", &artwork);

	theme.load_from_file(&file.0).unwrap();
	assert_eq!(theme.mode(), ThemeMode::Fixed);
	assert!(!theme.has_custom_source());
	assert_eq!(theme.cell_size(), Some(8));
	assert_eq!(theme.tiles().populated_count(), TILE_COUNT);

	// base tile at column 1, row 2
	let tile = theme.tile(TileId::new(2 * 8 + 1)).unwrap();
	assert_eq!(tile.get_pixel(0, 0), Rgba::new(24, 16, 77, 255));

	let generation = theme.generation();
	assert!(!theme.select_colors(cave_colors()).unwrap());
	assert_eq!(theme.generation(), generation);
}

#[test_log::test]
fn test_load_default_resets() {
	let mut theme = default_theme::<ImageSurface>();
	theme.load_from_image(&RgbaImage::from_pixel(8 * 2, 32 * 2, image::Rgba([1, 2, 3, 255]))).unwrap();
	assert_eq!(theme.mode(), ThemeMode::Fixed);

	theme.load_default().unwrap();
	assert_eq!(theme.mode(), ThemeMode::Recolorable);
	assert_eq!(theme.colors(), &ColorTable::default());
	assert_eq!(theme.cell_size(), Some(16));
}
