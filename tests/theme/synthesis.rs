use cave_gfx::prelude::*;

use crate::{cave_colors, default_theme};

fn check_table<S: Surface>() {
	let theme = default_theme::<S>();
	let rules = RuleTable::builtin().unwrap();

	for id in TileId::all() {
		let expected = id.is_base() || rules.produces(id);
		assert_eq!(theme.tiles().is_populated(id), expected, "{id}");
	}
	for (_, tile) in theme.tiles().iter() {
		assert_eq!((tile.width(), tile.height()), (16, 16));
	}
}

#[test]
fn test_derived_population_image() {
	check_table::<ImageSurface>();
}

#[test]
fn test_derived_population_packed() {
	check_table::<PackedSurface>();
}

#[test]
fn test_blink_frames_follow_outbox() {
	let theme = default_theme::<ImageSurface>();
	let open = theme.tile(TileId::OUTBOX_OPEN).unwrap().to_rgba_image();
	let closed = theme.tile(TileId::OUTBOX_CLOSED).unwrap().to_rgba_image();

	for frame in 0..OUTBOX_BLINK_FRAMES {
		let tile = theme.tile(TileId::OUTBOX_BLINK.offset(frame)).unwrap().to_rgba_image();
		if frame < OUTBOX_BLINK_FRAMES / 2 {
			assert_eq!(tile, open, "frame {frame}");
		} else {
			assert_eq!(tile, closed, "frame {frame}");
		}
	}
}

#[test]
fn test_facing_variants_differ() {
	let theme = default_theme::<ImageSurface>();
	let faces: Vec<_> = [TileId::GUARD_LEFT, TileId::GUARD_UP, TileId::GUARD_RIGHT, TileId::GUARD_DOWN]
		.iter()
		.map(|id| theme.tile(*id).unwrap().to_rgba_image())
		.collect();

	for (i, a) in faces.iter().enumerate() {
		for b in &faces[i + 1..] {
			assert_ne!(a, b);
		}
	}
}

#[test_log::test]
fn test_recolor_rebuild_count() {
	let mut theme = default_theme::<ImageSurface>();
	let start = theme.generation();

	assert!(theme.select_colors(cave_colors()).unwrap());
	assert!(!theme.select_colors(cave_colors()).unwrap());
	assert_eq!(theme.generation(), start + 1);

	let mut changed = *cave_colors().colors();
	changed[4] = c64::BLUE;
	assert!(theme.select_colors(ColorTable::new(changed)).unwrap());
	assert_eq!(theme.generation(), start + 2);
	assert_eq!(theme.tiles().populated_count(), TILE_COUNT);
}

#[test_log::test]
fn test_recolor_changes_derived_tiles() {
	let mut theme = default_theme::<PackedSurface>();
	let before = theme.tile(TileId::STEEL_EATABLE).unwrap().to_rgba_image();

	theme.select_colors(cave_colors()).unwrap();
	let after = theme.tile(TileId::STEEL_EATABLE).unwrap().to_rgba_image();
	assert_ne!(before, after);
}
