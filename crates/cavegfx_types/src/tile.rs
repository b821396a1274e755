//! Tile identities.
//!
//! Every distinct appearance of a cave element has a [`TileId`]. The first
//! [`BASE_TILE_COUNT`] identities form the *base grid*: identity `i` is the
//! cell at column `i % GRID_COLUMNS`, row `i / GRID_COLUMNS` of a sprite
//! sheet. The remaining identities up to [`TILE_COUNT`] are *derived* slots,
//! synthesized from base tiles at load time.

use std::fmt;

/// Number of cell columns in a sprite sheet.
pub const GRID_COLUMNS: u32 = 8;

/// Number of cell rows in a sprite sheet.
pub const GRID_ROWS: u32 = 32;

/// Number of identities backed by a sprite sheet cell.
pub const BASE_TILE_COUNT: usize = (GRID_COLUMNS * GRID_ROWS) as usize;

/// Total number of identities, base and derived.
pub const TILE_COUNT: usize = BASE_TILE_COUNT + DERIVED_TILE_COUNT;

/// Number of derived identities.
pub const DERIVED_TILE_COUNT: usize = 62;

/// Number of frames in the blinking outbox sequence.
pub const OUTBOX_BLINK_FRAMES: u16 = 8;

/// Index of one tile in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileId(u16);

macro_rules! tile_ids {
	($($(#[$doc:meta])* $name:ident = $value:expr;)+) => {
		impl TileId {
			$(
				$(#[$doc])*
				pub const $name: TileId = TileId($value);
			)+
		}

		const NAMED: &[(TileId, &str)] = &[$((TileId::$name, stringify!($name)),)+];
	};
}

tile_ids! {
	/// Empty cave space
	SPACE = 0;
	/// Dirt
	DIRT = 1;
	/// Brick wall
	BRICK = 2;
	/// Magic wall
	MAGIC_WALL = 3;
	/// Steel wall
	STEEL = 4;
	/// Stone
	STONE = 5;
	/// Diamond
	DIAMOND = 6;
	/// Closed exit as drawn in game
	OUTBOX_CLOSED = 7;
	/// Open exit as drawn in game
	OUTBOX_OPEN = 8;
	/// Player standing still
	PLAYER = 9;
	/// Guard (firefly), first animation frame
	GUARD = 10;
	/// Alternative guard, first animation frame
	ALT_GUARD = 11;
	/// Butterfly, first animation frame
	BUTTER = 12;
	/// Alternative butterfly, first animation frame
	ALT_BUTTER = 13;
	/// Stonefly, first animation frame
	STONEFLY = 14;
	/// Biter, first animation frame
	BITER = 15;
	/// Cow, first animation frame
	COW = 16;
	/// Expanding wall as drawn in game
	GROWING_WALL = 17;
	/// Key 1
	KEY_1 = 18;
	/// Key 2
	KEY_2 = 19;
	/// Key 3
	KEY_3 = 20;
	/// First explosion frame
	EXPLODE_1 = 21;
	/// Amoeba
	AMOEBA = 22;
	/// Slime
	SLIME = 23;
	/// Overlay: arrow pointing down
	DOWN_ARROW = 24;
	/// Overlay: horizontal double arrow
	LEFTRIGHT_ARROW = 25;
	/// Overlay: four-way arrow
	EVERYDIR_ARROW = 26;
	/// Overlay: glue marker
	GLUED = 27;
	/// Overlay: exclamation mark
	EXCLAMATION_MARK = 28;
	/// Overlay: exit marker
	OUT = 29;

	/// Steel wall that can be blown up
	STEEL_EXPLODABLE = 256;
	/// Steel wall that can be dug
	STEEL_EATABLE = 257;
	/// Brick wall that can be dug
	BRICK_EATABLE = 258;
	/// Key 1 inside a wall
	WALLED_KEY_1 = 259;
	/// Key 2 inside a wall
	WALLED_KEY_2 = 260;
	/// Key 3 inside a wall
	WALLED_KEY_3 = 261;
	/// Diamond inside a wall
	WALLED_DIAMOND = 262;
	/// Guard facing left
	GUARD_LEFT = 263;
	/// Guard facing up
	GUARD_UP = 264;
	/// Guard facing right
	GUARD_RIGHT = 265;
	/// Guard facing down
	GUARD_DOWN = 266;
	/// Alternative guard facing left
	ALT_GUARD_LEFT = 267;
	/// Alternative guard facing up
	ALT_GUARD_UP = 268;
	/// Alternative guard facing right
	ALT_GUARD_RIGHT = 269;
	/// Alternative guard facing down
	ALT_GUARD_DOWN = 270;
	/// Horizontally expanding wall
	H_GROWING_WALL = 271;
	/// Vertically expanding wall
	V_GROWING_WALL = 272;
	/// Expanding wall growing in every direction
	GROWING_WALL_EVERYDIR = 273;
	/// Butterfly facing left
	BUTTER_LEFT = 274;
	/// Butterfly facing up
	BUTTER_UP = 275;
	/// Butterfly facing right
	BUTTER_RIGHT = 276;
	/// Butterfly facing down
	BUTTER_DOWN = 277;
	/// Cow facing left
	COW_LEFT = 278;
	/// Cow facing up
	COW_UP = 279;
	/// Cow facing right
	COW_RIGHT = 280;
	/// Cow facing down
	COW_DOWN = 281;
	/// Enclosed cow
	COW_ENCLOSED = 282;
	/// Alternative butterfly facing left
	ALT_BUTTER_LEFT = 283;
	/// Alternative butterfly facing up
	ALT_BUTTER_UP = 284;
	/// Alternative butterfly facing right
	ALT_BUTTER_RIGHT = 285;
	/// Alternative butterfly facing down
	ALT_BUTTER_DOWN = 286;
	/// Player stuck in glue
	PLAYER_GLUED = 287;
	/// Player start position
	PLAYER_START = 288;
	/// Stone stuck in glue
	STONE_GLUED = 289;
	/// Diamond stuck in glue
	DIAMOND_GLUED = 290;
	/// Dirt stuck in glue
	DIRT_GLUED = 291;
	/// Falling stone
	STONE_FALLING = 292;
	/// Falling diamond
	DIAMOND_FALLING = 293;
	/// Wall that starts falling
	FALLING_WALL = 294;
	/// Wall that is falling
	FALLING_WALL_FALLING = 295;
	/// Stonefly facing left
	STONEFLY_LEFT = 296;
	/// Stonefly facing up
	STONEFLY_UP = 297;
	/// Stonefly facing right
	STONEFLY_RIGHT = 298;
	/// Stonefly facing down
	STONEFLY_DOWN = 299;
	/// Biter facing up
	BITER_UP = 300;
	/// Biter facing right
	BITER_RIGHT = 301;
	/// Biter facing down
	BITER_DOWN = 302;
	/// Biter facing left
	BITER_LEFT = 303;
	/// Invisible exit before it opens
	PRE_INVIS_OUTBOX = 304;
	/// Exit before it opens
	PRE_OUTBOX = 305;
	/// Invisible exit
	INVIS_OUTBOX = 306;
	/// Exit
	OUTBOX = 307;
	/// Element without a picture of its own
	UNKNOWN = 308;
	/// Stone waiting to be pushed
	WAITING_STONE = 309;
	/// First frame of the blinking exit sequence; frames follow consecutively
	OUTBOX_BLINK = 310;
}

impl TileId {
	/// Creates an identity from a raw index.
	pub const fn new(index: u16) -> Self {
		Self(index)
	}

	/// Returns the identity at `index` if it is part of the catalog.
	pub const fn checked(index: usize) -> Option<Self> {
		if index < TILE_COUNT {
			Some(Self(index as u16))
		} else {
			None
		}
	}

	/// Raw index as a `usize`, for slot addressing.
	pub const fn index(self) -> usize {
		self.0 as usize
	}

	/// Returns the identity `n` places after `self`.
	pub const fn offset(self, n: u16) -> Self {
		Self(self.0 + n)
	}

	/// Returns `true` for identities backed by a sprite sheet cell.
	pub const fn is_base(self) -> bool {
		self.index() < BASE_TILE_COUNT
	}

	/// Returns `true` for identities inside the catalog.
	pub const fn in_catalog(self) -> bool {
		self.index() < TILE_COUNT
	}

	/// Cell column and row of a base identity.
	pub const fn grid_position(self) -> Option<(u32, u32)> {
		if self.is_base() {
			Some((self.0 as u32 % GRID_COLUMNS, self.0 as u32 / GRID_COLUMNS))
		} else {
			None
		}
	}

	/// Constant name of the identity, if it has one.
	pub fn name(self) -> Option<&'static str> {
		NAMED.iter().find(|(id, _)| *id == self).map(|(_, name)| *name)
	}

	/// Iterates over every identity in the catalog.
	pub fn all() -> impl Iterator<Item = TileId> {
		(0..TILE_COUNT as u16).map(TileId)
	}

	/// Iterates over the base grid identities.
	pub fn base() -> impl Iterator<Item = TileId> {
		(0..BASE_TILE_COUNT as u16).map(TileId)
	}
}

impl fmt::Display for TileId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self.name() {
			Some(name) => write!(f, "{name}"),
			None => {
				let offset = self.0.wrapping_sub(Self::OUTBOX_BLINK.0);
				if offset < OUTBOX_BLINK_FRAMES {
					write!(f, "OUTBOX_BLINK+{offset}")
				} else {
					write!(f, "#{}", self.0)
				}
			}
		}
	}
}
