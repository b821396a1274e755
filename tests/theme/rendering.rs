use cave_gfx::prelude::*;

use crate::{cave_colors, default_theme};

fn check_background_region<S: Surface>() {
	let mut theme = default_theme::<S>();
	let map = TileGrid::new(2, 2, TileId::SPACE);
	let background = ColorTable::default().background().opaque();

	let first = theme.render_region(&map, Rect::sized(2, 2), |id| id, None).unwrap();
	assert_eq!((first.width(), first.height()), (36, 36));
	for (i, pixel) in first.pixels().enumerate() {
		let (x, y) = (i as u32 % 36, i as u32 / 36);
		let border = x < 2 || y < 2 || x >= 34 || y >= 34;
		assert_eq!(pixel, if border { Rgba::BLACK } else { background }, "({x}, {y})");
	}

	let second = theme.render_region(&map, Rect::sized(2, 2), |id| id, None).unwrap();
	assert_eq!(first.to_rgba_image(), second.to_rgba_image());

	// a visible background color makes the border stand out
	theme.select_colors(cave_colors()).unwrap();
	let colored = theme.render_region(&map, Rect::sized(2, 2), |id| id, None).unwrap();
	assert_eq!(colored.get_pixel(1, 1), Rgba::BLACK);
	assert_eq!(colored.get_pixel(2, 2), c64::DARK_GREY.opaque());
	assert_eq!(colored.get_pixel(33, 33), c64::DARK_GREY.opaque());
}

#[test]
fn test_background_region_image() {
	check_background_region::<ImageSurface>();
}

#[test]
fn test_background_region_packed() {
	check_background_region::<PackedSurface>();
}

#[test]
fn test_region_visual_effects() {
	let theme = default_theme::<ImageSurface>();
	let mut map = TileGrid::new(3, 1, TileId::DIRT);
	map.set(2, 0, TileId::H_GROWING_WALL);
	let effects = VisualEffects {
		dirt_looks_like: TileId::SPACE,
		expanding_wall_looks_like: TileId::STEEL,
	};

	let image = theme.render_region(&map, Rect::sized(3, 1), |id| effects.resolve(id), None).unwrap();
	let steel = theme.tile(TileId::STEEL).unwrap();
	let space = theme.tile(TileId::SPACE).unwrap();
	assert_eq!(image.get_pixel(2 + 5, 2 + 5), space.get_pixel(5, 5));
	assert_eq!(image.get_pixel(2 + 32 + 7, 2 + 9), steel.get_pixel(7, 9));
}

#[test]
fn test_region_fit_and_bounds() {
	let theme = default_theme::<PackedSurface>();
	let map = TileGrid::new(40, 22, TileId::STONE);

	let fitted = theme.render_region(&map, Rect::new(0, 0, 20, 12), |id| id, Some((162, 400))).unwrap();
	assert_eq!(fitted.width(), 162);
	assert_eq!(fitted.height(), 98);

	let err = theme.render_region(&map, Rect::new(30, 0, 20, 12), |id| id, None).unwrap_err();
	assert!(matches!(err, GfxError::RegionOutOfBounds { .. }));
}

#[test_log::test]
fn test_display_tiles() {
	let mut theme = default_theme::<ImageSurface>();
	assert!(theme.build_display_tiles(48, Interpolation::Bilinear, Some(Effect::Scanlines)).unwrap());
	assert!(!theme.build_display_tiles(48, Interpolation::Nearest, None).unwrap());

	for id in TileId::all() {
		let display = theme.display_tile(id).unwrap();
		assert_eq!(display.normal.width(), 48);
		assert_eq!(display.highlighted.height(), 48);
		assert_eq!(display.selected.get_pixel(0, 0).a, 255);
	}

	theme.invalidate_display_tiles();
	assert!(theme.display_tile(TileId::STONE).is_none());
	assert!(theme.build_display_tiles(16, Interpolation::Nearest, None).unwrap());
}

#[test_log::test]
fn test_bordered_icons() {
	let mut theme = default_theme::<PackedSurface>();
	let icon = theme.bordered_icon(TileId::PLAYER).unwrap().clone();
	assert_eq!((icon.width(), icon.height()), (18, 18));
	assert_eq!(icon.get_pixel(0, 0), Rgba::BLACK);
	assert_eq!(icon.get_pixel(17, 9), Rgba::BLACK);
	assert_eq!(theme.cached_icon_count(), 1);

	theme.select_colors(cave_colors()).unwrap();
	assert_eq!(theme.cached_icon_count(), 0);
	assert!(theme.bordered_icon(TileId::OUTBOX_BLINK.offset(3)).is_ok());
}

#[test]
fn test_display_tiles_agree_across_backends() {
	let mut image_theme = default_theme::<ImageSurface>();
	let mut packed_theme = default_theme::<PackedSurface>();

	for (interpolation, tolerance) in [(Interpolation::Nearest, 0), (Interpolation::Bilinear, 2)] {
		image_theme.invalidate_display_tiles();
		packed_theme.invalidate_display_tiles();
		assert!(image_theme.build_display_tiles(32, interpolation, None).unwrap());
		assert!(packed_theme.build_display_tiles(32, interpolation, None).unwrap());

		for (id, _) in image_theme.tiles().iter() {
			let a = &image_theme.display_tile(id).unwrap().normal;
			let b = &packed_theme.display_tile(id).unwrap().normal;
			for y in 0..32 {
				for x in 0..32 {
					let (pa, pb) = (a.get_pixel(x, y).channels(), b.get_pixel(x, y).channels());
					for (ca, cb) in pa.into_iter().zip(pb) {
						assert!(ca.abs_diff(cb) <= tolerance, "{id:?} at ({x}, {y}): {pa:?} vs {pb:?}");
					}
				}
			}
		}
	}
}
