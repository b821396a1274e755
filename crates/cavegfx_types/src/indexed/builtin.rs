//! Built-in cave graphics.
//!
//! The default sheet is generated from 8x8 glyphs, each pixel doubled to a
//! 16 pixel cell. Glyph characters:
//!
//! - `.`: background (index 1 for tiles, transparent for overlays)
//! - `#`: primary color
//! - `+`: secondary color
//!
//! Overlay glyphs are drawn in white and get a black outline wherever a
//! background pixel touches the glyph, so they stay readable over any tile.

use crate::{
	indexed::{INDEX_BLACK, INDEX_TRANSPARENT, INDEX_WHITE},
	tile::{BASE_TILE_COUNT, GRID_COLUMNS, GRID_ROWS, TileId},
};

/// Cell edge length of the built-in sheet.
pub(super) const CELL_SIZE: u8 = 16;

const GLYPH_SIZE: usize = 8;
const SCALE: usize = CELL_SIZE as usize / GLYPH_SIZE;

/// Role color indices (palette index = role + 1).
const BACKGROUND: u8 = 1;
const FOREGROUND_1: u8 = 2;
const FOREGROUND_2: u8 = 3;
const FOREGROUND_3: u8 = 4;
const ACCENT_1: u8 = 5;
const ACCENT_2: u8 = 6;

type Glyph = [&'static str; GLYPH_SIZE];

const EMPTY: Glyph = ["........"; GLYPH_SIZE];

const SPECKLE: Glyph = [
	"#.#...#.", //
	"...#....", //
	".#....#.", //
	"....#...", //
	"#.....#.", //
	"..#.....", //
	"....#.#.", //
	".#......",
];

const BRICKS: Glyph = [
	"###+####", //
	"###+####", //
	"++++++++", //
	"#######+", //
	"#######+", //
	"++++++++", //
	"###+####", //
	"###+####",
];

const FRAME: Glyph = [
	"########", //
	"#++++++#", //
	"#+####+#", //
	"#+#++#+#", //
	"#+#++#+#", //
	"#+####+#", //
	"#++++++#", //
	"########",
];

const OPEN_FRAME: Glyph = [
	"########", //
	"#......#", //
	"#.++++.#", //
	"#.+..+.#", //
	"#.+..+.#", //
	"#.++++.#", //
	"#......#", //
	"########",
];

const BOULDER: Glyph = [
	"..####..", //
	".#++++#.", //
	"#++++++#", //
	"#++++++#", //
	"##++++##", //
	"###++###", //
	".######.", //
	"..####..",
];

const GEM: Glyph = [
	"...##...", //
	"..####..", //
	".##++##.", //
	"##++++##", //
	"##++++##", //
	".##++##.", //
	"..####..", //
	"...##...",
];

const MINER: Glyph = [
	"..###...", //
	"..#+#...", //
	"...#....", //
	".#####..", //
	"#.###.#.", //
	"..#.#...", //
	".##.##..", //
	"........",
];

const WINGS: Glyph = [
	"#......#", //
	"##....##", //
	"#+#..#+#", //
	"#++##++#", //
	"#++##++#", //
	"#+#..#+#", //
	"##....##", //
	"#......#",
];

const JAWS: Glyph = [
	"..####..", //
	".#....#.", //
	"#.#..#.#", //
	"#......#", //
	"#.++++.#", //
	"#..++..#", //
	".#....#.", //
	"..####..",
];

const BEAST: Glyph = [
	"........", //
	"#......#", //
	".######.", //
	".#+##+#.", //
	".######.", //
	"..####..", //
	"..#..#..", //
	"........",
];

const KEY: Glyph = [
	"..###...", //
	".#...#..", //
	".#...#..", //
	"..###...", //
	"...#....", //
	"...##...", //
	"...#....", //
	"...##...",
];

const BURST: Glyph = [
	"........", //
	".#....#.", //
	"..#..#..", //
	"...++...", //
	"...++...", //
	"..#..#..", //
	".#....#.", //
	"........",
];

const BLOB: Glyph = [
	"##.####.", //
	"####.###", //
	".###.###", //
	"#####.##", //
	"#.######", //
	"###.##.#", //
	"########", //
	".##.###.",
];

const CHECKER: Glyph = [
	"#.#.#.#.", //
	".+.+.+.+", //
	"#.#.#.#.", //
	".+.+.+.+", //
	"#.#.#.#.", //
	".+.+.+.+", //
	"#.#.#.#.", //
	".+.+.+.+",
];

const CROSS: Glyph = [
	"...##...", //
	"...##...", //
	"...++...", //
	"##++++##", //
	"##++++##", //
	"...++...", //
	"...##...", //
	"...##...",
];

const STRIPES: Glyph = [
	"########", //
	"........", //
	"++++++++", //
	"........", //
	"########", //
	"........", //
	"++++++++", //
	"........",
];

const ARROW_DOWN: Glyph = [
	"........", //
	"...##...", //
	"...##...", //
	"...##...", //
	".######.", //
	"..####..", //
	"...##...", //
	"........",
];

const ARROW_LEFTRIGHT: Glyph = [
	"........", //
	"........", //
	"..#..#..", //
	".######.", //
	".######.", //
	"..#..#..", //
	"........", //
	"........",
];

const ARROW_EVERYDIR: Glyph = [
	"........", //
	"...##...", //
	"...##...", //
	".######.", //
	".######.", //
	"...##...", //
	"...##...", //
	"........",
];

const GLUE: Glyph = [
	"........", //
	".#....#.", //
	"........", //
	"...##...", //
	"...##...", //
	"........", //
	".#....#.", //
	"........",
];

const BANG: Glyph = [
	"........", //
	"...##...", //
	"...##...", //
	"...##...", //
	"...##...", //
	"........", //
	"...##...", //
	"........",
];

const RING: Glyph = [
	"........", //
	"..####..", //
	".#....#.", //
	".#....#.", //
	".#....#.", //
	".#....#.", //
	"..####..", //
	"........",
];

/// Shapes cycled through for cells without a dedicated picture.
const FILLERS: [Glyph; 6] = [BOULDER, CHECKER, CROSS, FRAME, STRIPES, GEM];

/// How one cell is painted.
enum Art {
	/// Opaque tile on the background color
	Tile {
		glyph: Glyph,
		primary: u8,
		secondary: u8,
	},
	/// Transparent overlay, white glyph with a black outline
	Overlay(Glyph),
}

const fn tile(glyph: Glyph, primary: u8, secondary: u8) -> Art {
	Art::Tile {
		glyph,
		primary,
		secondary,
	}
}

fn art_for(id: TileId) -> Art {
	match id {
		TileId::SPACE => tile(EMPTY, BACKGROUND, BACKGROUND),
		TileId::DIRT => tile(SPECKLE, FOREGROUND_1, FOREGROUND_1),
		TileId::BRICK | TileId::GROWING_WALL => tile(BRICKS, FOREGROUND_2, FOREGROUND_1),
		TileId::MAGIC_WALL => tile(BRICKS, FOREGROUND_3, FOREGROUND_2),
		TileId::STEEL | TileId::OUTBOX_CLOSED => tile(FRAME, FOREGROUND_3, FOREGROUND_2),
		TileId::OUTBOX_OPEN => tile(OPEN_FRAME, FOREGROUND_3, FOREGROUND_2),
		TileId::STONE => tile(BOULDER, FOREGROUND_2, FOREGROUND_3),
		TileId::DIAMOND => tile(GEM, FOREGROUND_3, FOREGROUND_1),
		TileId::PLAYER => tile(MINER, FOREGROUND_3, FOREGROUND_1),
		TileId::GUARD => tile(FRAME, FOREGROUND_1, FOREGROUND_2),
		TileId::ALT_GUARD => tile(FRAME, ACCENT_1, FOREGROUND_2),
		TileId::BUTTER => tile(WINGS, FOREGROUND_3, FOREGROUND_1),
		TileId::ALT_BUTTER => tile(WINGS, ACCENT_2, FOREGROUND_1),
		TileId::STONEFLY => tile(WINGS, FOREGROUND_2, FOREGROUND_3),
		TileId::BITER => tile(JAWS, FOREGROUND_1, FOREGROUND_3),
		TileId::COW => tile(BEAST, FOREGROUND_3, FOREGROUND_1),
		TileId::KEY_1 => tile(KEY, FOREGROUND_1, FOREGROUND_1),
		TileId::KEY_2 => tile(KEY, FOREGROUND_2, FOREGROUND_2),
		TileId::KEY_3 => tile(KEY, FOREGROUND_3, FOREGROUND_3),
		TileId::EXPLODE_1 => tile(BURST, FOREGROUND_3, FOREGROUND_1),
		TileId::AMOEBA => tile(BLOB, ACCENT_1, ACCENT_1),
		TileId::SLIME => tile(BLOB, ACCENT_2, ACCENT_2),
		TileId::DOWN_ARROW => Art::Overlay(ARROW_DOWN),
		TileId::LEFTRIGHT_ARROW => Art::Overlay(ARROW_LEFTRIGHT),
		TileId::EVERYDIR_ARROW => Art::Overlay(ARROW_EVERYDIR),
		TileId::GLUED => Art::Overlay(GLUE),
		TileId::EXCLAMATION_MARK => Art::Overlay(BANG),
		TileId::OUT => Art::Overlay(RING),
		other => {
			let i = other.index();
			let primary = FOREGROUND_1 + (i % 5) as u8;
			let secondary = FOREGROUND_1 + ((i + 2) % 5) as u8;
			tile(FILLERS[i % FILLERS.len()], primary, secondary)
		}
	}
}

/// Resolves one glyph pixel to a palette index.
fn glyph_index(art: &Art, gx: usize, gy: usize) -> u8 {
	match art {
		Art::Tile {
			glyph,
			primary,
			secondary,
		} => match glyph[gy].as_bytes()[gx] {
			b'#' => *primary,
			b'+' => *secondary,
			_ => BACKGROUND,
		},
		Art::Overlay(glyph) => {
			let is_ink = |x: isize, y: isize| {
				(0..GLYPH_SIZE as isize).contains(&x)
					&& (0..GLYPH_SIZE as isize).contains(&y)
					&& glyph[y as usize].as_bytes()[x as usize] == b'#'
			};
			let (x, y) = (gx as isize, gy as isize);
			if is_ink(x, y) {
				INDEX_WHITE
			} else if (-1..=1).any(|dy| (-1..=1).any(|dx| is_ink(x + dx, y + dy))) {
				INDEX_BLACK
			} else {
				INDEX_TRANSPARENT
			}
		}
	}
}

/// Generates the raw built-in sheet, cell size byte included.
pub(super) fn generate() -> Vec<u8> {
	let cell = CELL_SIZE as usize;
	let width = cell * GRID_COLUMNS as usize;
	let height = cell * GRID_ROWS as usize;

	let mut raw = vec![BACKGROUND; 1 + width * height];
	raw[0] = CELL_SIZE;
	let pixels = &mut raw[1..];

	for id in TileId::base() {
		let Some((column, row)) = id.grid_position() else {
			continue;
		};
		let art = art_for(id);
		let (left, top) = (column as usize * cell, row as usize * cell);

		for y in 0..cell {
			for x in 0..cell {
				let index = glyph_index(&art, x / SCALE, y / SCALE);
				pixels[(top + y) * width + left + x] = index;
			}
		}
	}

	debug_assert_eq!(TileId::base().count(), BASE_TILE_COUNT);
	raw
}
