//! Tile table population.
//!
//! A table is filled in two passes: [`populate_base_tiles`] slices a sprite
//! sheet cell by cell, then [`populate_derived_tiles`] runs the rule table
//! over the result. [`build_tile_table`] does both into a fresh table, so a
//! failed pass never leaves a half-filled table behind.

use cavegfx_types::{geometry::Rect, surface::Surface, tile::TileId};

use crate::{
	error::{ConsistencyFault, GfxError},
	loader::check_geometry,
	rules::{DerivedRule, RuleTable},
	table::TileTable,
};

/// Slices `sheet` into the base grid slots of `table`.
pub fn populate_base_tiles<S: Surface>(table: &mut TileTable<S>, sheet: &S) -> Result<(), GfxError> {
	let cell_size = check_geometry(sheet.width(), sheet.height())?;

	for id in TileId::base() {
		let (column, row) = id.grid_position().ok_or(ConsistencyFault::OutOfRange(id))?;
		let tile = sheet.sub_surface(Rect::square(column * cell_size, row * cell_size, cell_size))?;
		table.insert(id, tile)?;
	}
	Ok(())
}

/// Runs every rule of `rules` against `table`, in order.
///
/// # Errors
///
/// Stops at the first rule whose destination is already populated or whose
/// inputs are empty, returning [`GfxError::Consistency`].
pub fn populate_derived_tiles<S: Surface>(table: &mut TileTable<S>, rules: &RuleTable) -> Result<(), GfxError> {
	for rule in rules.rules() {
		let tile = synthesize(table, rule)?;
		table.insert(rule.destination, tile)?;
	}
	Ok(())
}

fn synthesize<S: Surface>(table: &TileTable<S>, rule: &DerivedRule) -> Result<S, GfxError> {
	if table.is_populated(rule.destination) {
		return Err(ConsistencyFault::DestinationOccupied(rule.destination).into());
	}

	let mut tile = table.require(rule.source)?.clone();
	if let Some(overlay) = rule.overlay {
		let overlay = table.require(overlay)?.rotated(rule.transform)?;
		overlay.composite_region(overlay.bounds(), &mut tile, 0, 0, rule.opacity);
	}
	Ok(tile)
}

/// Builds a complete tile table from a sheet.
pub fn build_tile_table<S: Surface>(sheet: &S, rules: &RuleTable) -> Result<TileTable<S>, GfxError> {
	let mut table = TileTable::new();
	populate_base_tiles(&mut table, sheet)?;
	populate_derived_tiles(&mut table, rules)?;
	Ok(table)
}
