//! Derived sprite rules.
//!
//! Tiles that are not drawn in the sprite sheet are described by a static
//! table of [`DerivedRule`]s. Each rule copies a source tile into an empty
//! destination slot and optionally composites an overlay tile on top:
//!
//! | Kind      | Overlay | Transform | Opacity               | Used for                     |
//! |-----------|---------|-----------|-----------------------|------------------------------|
//! | Arrow     | yes     | any       | 255                   | facing directions, markers   |
//! | Composite | yes     | none      | [`COMPOSITE_OPACITY`] | elements embedded in terrain |
//! | Copy      | no      | none      | -                     | blinking frame sequences     |
//!
//! Rules run in table order. A rule may read base tiles and destinations of
//! earlier rules; [`RuleTable::new`] checks this once so synthesis never has
//! to re-validate the table.

use std::collections::HashSet;

use cavegfx_types::{
	geometry::Transform,
	tile::{OUTBOX_BLINK_FRAMES, TileId},
};

use crate::error::ConsistencyFault;

/// Opacity of the overlay in composite rules.
pub const COMPOSITE_OPACITY: u8 = 75;

/// Opacity of the overlay in arrow rules.
pub const ARROW_OPACITY: u8 = 255;

/// One derived tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DerivedRule {
	/// Slot written by the rule
	pub destination: TileId,
	/// Tile copied into the destination
	pub source: TileId,
	/// Tile composited on top of the copy
	pub overlay: Option<TileId>,
	/// Transform applied to the overlay before compositing
	pub transform: Transform,
	/// Overlay opacity (0-255)
	pub opacity: u8,
}

impl DerivedRule {
	/// Source tile with a transformed overlay at full opacity.
	pub const fn arrow(destination: TileId, source: TileId, overlay: TileId, transform: Transform) -> Self {
		Self {
			destination,
			source,
			overlay: Some(overlay),
			transform,
			opacity: ARROW_OPACITY,
		}
	}

	/// Source tile with the overlay ghosted on top.
	pub const fn composite(destination: TileId, source: TileId, overlay: TileId) -> Self {
		Self {
			destination,
			source,
			overlay: Some(overlay),
			transform: Transform::None,
			opacity: COMPOSITE_OPACITY,
		}
	}

	/// Plain duplicate of the source tile.
	pub const fn copy(destination: TileId, source: TileId) -> Self {
		Self {
			destination,
			source,
			overlay: None,
			transform: Transform::None,
			opacity: ARROW_OPACITY,
		}
	}

	/// Tiles the rule reads.
	pub fn inputs(&self) -> impl Iterator<Item = TileId> {
		std::iter::once(self.source).chain(self.overlay)
	}
}

/// Four facing variants of a creature: the drawn tile with the down arrow
/// rotated to point left, up, right and down.
const fn facing(
	destinations: [TileId; 4],
	source: TileId,
	turns: [Transform; 4],
) -> [DerivedRule; 4] {
	[
		DerivedRule::arrow(destinations[0], source, TileId::DOWN_ARROW, turns[0]),
		DerivedRule::arrow(destinations[1], source, TileId::DOWN_ARROW, turns[1]),
		DerivedRule::arrow(destinations[2], source, TileId::DOWN_ARROW, turns[2]),
		DerivedRule::arrow(destinations[3], source, TileId::DOWN_ARROW, turns[3]),
	]
}

/// Arrow turns for left / up / right / down facing.
const LEFT_UP_RIGHT_DOWN: [Transform; 4] =
	[Transform::Rotate90Cw, Transform::Rotate180, Transform::Rotate90Ccw, Transform::None];

const GUARD: [DerivedRule; 4] = facing(
	[TileId::GUARD_LEFT, TileId::GUARD_UP, TileId::GUARD_RIGHT, TileId::GUARD_DOWN],
	TileId::GUARD,
	LEFT_UP_RIGHT_DOWN,
);
const ALT_GUARD: [DerivedRule; 4] = facing(
	[TileId::ALT_GUARD_LEFT, TileId::ALT_GUARD_UP, TileId::ALT_GUARD_RIGHT, TileId::ALT_GUARD_DOWN],
	TileId::ALT_GUARD,
	LEFT_UP_RIGHT_DOWN,
);
const BUTTER: [DerivedRule; 4] = facing(
	[TileId::BUTTER_LEFT, TileId::BUTTER_UP, TileId::BUTTER_RIGHT, TileId::BUTTER_DOWN],
	TileId::BUTTER,
	LEFT_UP_RIGHT_DOWN,
);
const COW: [DerivedRule; 4] = facing(
	[TileId::COW_LEFT, TileId::COW_UP, TileId::COW_RIGHT, TileId::COW_DOWN],
	TileId::COW,
	LEFT_UP_RIGHT_DOWN,
);
const ALT_BUTTER: [DerivedRule; 4] = facing(
	[TileId::ALT_BUTTER_LEFT, TileId::ALT_BUTTER_UP, TileId::ALT_BUTTER_RIGHT, TileId::ALT_BUTTER_DOWN],
	TileId::ALT_BUTTER,
	LEFT_UP_RIGHT_DOWN,
);
const STONEFLY: [DerivedRule; 4] = facing(
	[TileId::STONEFLY_LEFT, TileId::STONEFLY_UP, TileId::STONEFLY_RIGHT, TileId::STONEFLY_DOWN],
	TileId::STONEFLY,
	LEFT_UP_RIGHT_DOWN,
);
// biters start facing up
const BITER: [DerivedRule; 4] = facing(
	[TileId::BITER_UP, TileId::BITER_RIGHT, TileId::BITER_DOWN, TileId::BITER_LEFT],
	TileId::BITER,
	[Transform::Rotate180, Transform::Rotate90Ccw, Transform::None, Transform::Rotate90Cw],
);

const fn blink_frames() -> [DerivedRule; OUTBOX_BLINK_FRAMES as usize] {
	let mut rules = [DerivedRule::copy(TileId::OUTBOX_BLINK, TileId::OUTBOX_OPEN); OUTBOX_BLINK_FRAMES as usize];
	let mut i = 0;
	while i < rules.len() {
		// first half open, second half closed
		let source = if i < rules.len() / 2 {
			TileId::OUTBOX_OPEN
		} else {
			TileId::OUTBOX_CLOSED
		};
		rules[i] = DerivedRule::copy(TileId::OUTBOX_BLINK.offset(i as u16), source);
		i += 1;
	}
	rules
}

const BLINK: [DerivedRule; OUTBOX_BLINK_FRAMES as usize] = blink_frames();

const SINGLE: [DerivedRule; 26] = [
	DerivedRule::composite(TileId::STEEL_EXPLODABLE, TileId::STEEL, TileId::EXPLODE_1),
	DerivedRule::composite(TileId::STEEL_EATABLE, TileId::STEEL, TileId::DIRT),
	DerivedRule::composite(TileId::BRICK_EATABLE, TileId::BRICK, TileId::DIRT),
	DerivedRule::composite(TileId::WALLED_KEY_1, TileId::KEY_1, TileId::BRICK),
	DerivedRule::composite(TileId::WALLED_KEY_2, TileId::KEY_2, TileId::BRICK),
	DerivedRule::composite(TileId::WALLED_KEY_3, TileId::KEY_3, TileId::BRICK),
	DerivedRule::composite(TileId::WALLED_DIAMOND, TileId::DIAMOND, TileId::BRICK),
	DerivedRule::arrow(TileId::H_GROWING_WALL, TileId::GROWING_WALL, TileId::LEFTRIGHT_ARROW, Transform::None),
	DerivedRule::arrow(
		TileId::V_GROWING_WALL,
		TileId::GROWING_WALL,
		TileId::LEFTRIGHT_ARROW,
		Transform::Rotate90Cw,
	),
	DerivedRule::arrow(
		TileId::GROWING_WALL_EVERYDIR,
		TileId::GROWING_WALL,
		TileId::EVERYDIR_ARROW,
		Transform::None,
	),
	DerivedRule::arrow(TileId::COW_ENCLOSED, TileId::COW, TileId::GLUED, Transform::None),
	DerivedRule::arrow(TileId::PLAYER_GLUED, TileId::PLAYER, TileId::GLUED, Transform::None),
	DerivedRule::arrow(TileId::PLAYER_START, TileId::PLAYER, TileId::EXCLAMATION_MARK, Transform::None),
	DerivedRule::arrow(TileId::STONE_GLUED, TileId::STONE, TileId::GLUED, Transform::None),
	DerivedRule::arrow(TileId::DIAMOND_GLUED, TileId::DIAMOND, TileId::GLUED, Transform::None),
	DerivedRule::arrow(TileId::DIRT_GLUED, TileId::DIRT, TileId::GLUED, Transform::None),
	DerivedRule::arrow(TileId::STONE_FALLING, TileId::STONE, TileId::DOWN_ARROW, Transform::None),
	DerivedRule::arrow(TileId::DIAMOND_FALLING, TileId::DIAMOND, TileId::DOWN_ARROW, Transform::None),
	DerivedRule::arrow(TileId::FALLING_WALL, TileId::BRICK, TileId::EXCLAMATION_MARK, Transform::None),
	DerivedRule::arrow(TileId::FALLING_WALL_FALLING, TileId::BRICK, TileId::DOWN_ARROW, Transform::None),
	DerivedRule::arrow(TileId::PRE_INVIS_OUTBOX, TileId::OUTBOX_CLOSED, TileId::GLUED, Transform::None),
	DerivedRule::arrow(TileId::PRE_OUTBOX, TileId::OUTBOX_OPEN, TileId::GLUED, Transform::None),
	DerivedRule::arrow(TileId::INVIS_OUTBOX, TileId::OUTBOX_CLOSED, TileId::OUT, Transform::None),
	DerivedRule::arrow(TileId::OUTBOX, TileId::OUTBOX_OPEN, TileId::OUT, Transform::None),
	DerivedRule::arrow(TileId::UNKNOWN, TileId::STEEL, TileId::EXCLAMATION_MARK, Transform::None),
	DerivedRule::arrow(TileId::WAITING_STONE, TileId::STONE, TileId::EXCLAMATION_MARK, Transform::None),
];

const fn concat_rules() -> [DerivedRule; DERIVED_RULE_COUNT] {
	let groups: [&[DerivedRule]; 9] = [&SINGLE, &GUARD, &ALT_GUARD, &BUTTER, &COW, &ALT_BUTTER, &STONEFLY, &BITER, &BLINK];
	let mut out = [DerivedRule::copy(TileId::SPACE, TileId::SPACE); DERIVED_RULE_COUNT];
	let mut n = 0;
	let mut g = 0;
	while g < groups.len() {
		let group = groups[g];
		let mut i = 0;
		while i < group.len() {
			out[n] = group[i];
			n += 1;
			i += 1;
		}
		g += 1;
	}
	out
}

const DERIVED_RULE_COUNT: usize = 62;

/// Every derived tile of the catalog, in execution order.
pub static DERIVED_RULES: [DerivedRule; DERIVED_RULE_COUNT] = concat_rules();

/// A rule table that passed validation.
#[derive(Debug, Clone, Copy)]
pub struct RuleTable {
	rules: &'static [DerivedRule],
}

impl RuleTable {
	/// Validates a rule table.
	///
	/// # Errors
	///
	/// Returns the first fault found:
	/// - a destination outside the catalog or inside the base grid
	/// - a destination written by two rules
	/// - an input that is neither a base tile nor an earlier destination
	pub fn new(rules: &'static [DerivedRule]) -> Result<Self, ConsistencyFault> {
		let mut produced = HashSet::with_capacity(rules.len());

		for rule in rules {
			let destination = rule.destination;
			if !destination.in_catalog() {
				return Err(ConsistencyFault::OutOfRange(destination));
			}
			if destination.is_base() {
				return Err(ConsistencyFault::BaseDestination(destination));
			}

			for input in rule.inputs() {
				if !input.in_catalog() {
					return Err(ConsistencyFault::OutOfRange(input));
				}
				if !input.is_base() && !produced.contains(&input) {
					return Err(ConsistencyFault::ForwardReference {
						destination,
						source_tile: input,
					});
				}
			}

			if !produced.insert(destination) {
				return Err(ConsistencyFault::DuplicateDestination(destination));
			}
		}

		Ok(Self {
			rules,
		})
	}

	/// The built-in rule table.
	pub fn builtin() -> Result<Self, ConsistencyFault> {
		Self::new(&DERIVED_RULES)
	}

	/// Rules in execution order.
	pub fn rules(&self) -> &'static [DerivedRule] {
		self.rules
	}

	/// Returns `true` if some rule writes `id`.
	pub fn produces(&self, id: TileId) -> bool {
		self.rules.iter().any(|rule| rule.destination == id)
	}
}
