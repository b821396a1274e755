//! Cave Graphics Theme CLI Utility
//!
//! A command-line tool for inspecting, rendering and validating theme images.
//!
//! # Features
//!
//! - **info**: Show the theme mode, cell size, colors and tile counts
//! - **sheet**: Render every tile, derived ones included, into one PNG
//! - **export**: Write the indexed sheet as an editable PNG
//! - **check**: Validate theme files
//!
//! # Usage
//!
//! ```bash
//! # Inspect the built-in theme as JSON
//! cargo run --example theme_utils info --format json
//!
//! # Render all tiles of a theme with custom colors, twice the size
//! cargo run --example theme_utils sheet tiles.png --theme my_theme.png \
//!     --colors '#000000,#dd8855,#777777,#ffffff,#ff7777,#aaff66' --scale 2
//!
//! # Export the built-in graphics for editing
//! cargo run --example theme_utils export editable.png
//!
//! # Check several theme files
//! cargo run --example theme_utils check a.png b.png
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use cave_gfx::prelude::*;
use clap::{Parser, Subcommand, ValueEnum};
use log::{info, warn};
use serde::Serialize;

#[derive(Parser)]
#[command(name = "theme_utils")]
#[command(author = "cave-gfx project")]
#[command(version = "1.0")]
#[command(about = "Cave graphics theme utility - inspect, render, export and check themes", long_about = None)]
struct Cli {
	/// Render settings file (TOML); `CAVEGFX_*` variables override it
	#[arg(long, global = true, value_name = "SETTINGS_TOML")]
	settings: Option<PathBuf>,

	#[command(subcommand)]
	command: Command,
}

#[derive(Subcommand)]
enum Command {
	/// Show information about a theme
	Info {
		/// Theme image; the built-in graphics when omitted
		#[arg(short, long, value_name = "THEME_PNG")]
		theme: Option<PathBuf>,

		/// Output format
		#[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
		format: OutputFormat,
	},

	/// Render every tile into one PNG sheet
	Sheet {
		/// Output PNG path
		#[arg(value_name = "OUTPUT_PNG")]
		output: PathBuf,

		/// Theme image; the built-in graphics when omitted
		#[arg(short, long, value_name = "THEME_PNG")]
		theme: Option<PathBuf>,

		/// Six role colors, comma separated
		#[arg(short, long, value_delimiter = ',')]
		colors: Option<Vec<Color>>,

		/// Tile scale factor; defaults to the settings' cell scale
		#[arg(short, long)]
		scale: Option<u32>,

		/// Tiles per row
		#[arg(long, default_value_t = GRID_COLUMNS)]
		columns: u32,
	},

	/// Write the indexed sheet as an editable PNG
	Export {
		/// Output PNG path
		#[arg(value_name = "OUTPUT_PNG")]
		output: PathBuf,

		/// Indexed theme image; the built-in graphics when omitted
		#[arg(short, long, value_name = "THEME_PNG")]
		theme: Option<PathBuf>,
	},

	/// Validate theme files
	Check {
		/// Theme images to check
		#[arg(value_name = "THEME_PNG", required = true)]
		files: Vec<PathBuf>,
	},
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
	Text,
	Json,
}

#[derive(Serialize)]
struct ThemeInfo {
	source: String,
	mode: String,
	cell_size: u32,
	custom_indexed_source: bool,
	colors: ColorTable,
	populated_tiles: usize,
	base_tiles: usize,
	derived_tiles: usize,
	display_cell_size: u32,
}

fn main() -> Result<()> {
	env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

	let cli = Cli::parse();
	let settings = RenderSettings::load(cli.settings.as_deref()).context("Failed to load render settings")?;

	match cli.command {
		Command::Info {
			theme,
			format,
		} => run_info(settings, theme.as_deref(), format),
		Command::Sheet {
			output,
			theme,
			colors,
			scale,
			columns,
		} => run_sheet(settings, &output, theme.as_deref(), colors, scale, columns),
		Command::Export {
			output,
			theme,
		} => run_export(settings, &output, theme.as_deref()),
		Command::Check {
			files,
		} => run_check(settings, &files),
	}
}

/// Creates a theme, loading `path` if given
fn open_theme(settings: RenderSettings, path: Option<&Path>) -> Result<GraphicsTheme> {
	let mut theme = GraphicsTheme::new(settings).context("Failed to create theme")?;
	if let Some(path) = path {
		theme.load_from_file(path).with_context(|| format!("Failed to load theme {}", path.display()))?;
	}
	Ok(theme)
}

fn run_info(settings: RenderSettings, path: Option<&Path>, format: OutputFormat) -> Result<()> {
	let theme = open_theme(settings, path)?;
	let cell_size = theme.cell_size().unwrap_or_default();

	let info = ThemeInfo {
		source: path.map_or_else(|| "built-in".to_string(), |p| p.display().to_string()),
		mode: theme.mode().to_string(),
		cell_size,
		custom_indexed_source: theme.has_custom_source(),
		colors: *theme.colors(),
		populated_tiles: theme.tiles().populated_count(),
		base_tiles: theme.tiles().iter().filter(|(id, _)| id.is_base()).count(),
		derived_tiles: theme.tiles().iter().filter(|(id, _)| !id.is_base()).count(),
		display_cell_size: theme.settings().display_cell_size(cell_size),
	};

	match format {
		OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&info)?),
		OutputFormat::Text => {
			println!("Theme:          {}", info.source);
			println!("Mode:           {}", info.mode);
			println!("Cell size:      {}px (display {}px)", info.cell_size, info.display_cell_size);
			println!("Custom sheet:   {}", info.custom_indexed_source);
			println!("Colors:         {}", info.colors);
			println!(
				"Tiles:          {} ({} base, {} derived)",
				info.populated_tiles, info.base_tiles, info.derived_tiles
			);
		}
	}
	Ok(())
}

fn run_sheet(
	settings: RenderSettings,
	output: &Path,
	path: Option<&Path>,
	colors: Option<Vec<Color>>,
	scale: Option<u32>,
	columns: u32,
) -> Result<()> {
	let scale = scale.unwrap_or(settings.cell_scale).max(1);
	let mut theme = open_theme(settings, path)?;

	if let Some(colors) = colors {
		let Ok(colors) = <[Color; ColorTable::LEN]>::try_from(colors) else {
			bail!("Expected exactly {} colors", ColorTable::LEN);
		};
		if !theme.select_colors(ColorTable::new(colors))? {
			warn!("Colors not applied: theme is {} or already uses them", theme.mode());
		}
	}

	let cell = theme.cell_size().context("Theme has no tiles")? * scale;
	let columns = columns.max(1);
	let rows = (TILE_COUNT as u32).div_ceil(columns);

	let mut sheet = ImageSurface::try_new(columns * cell, rows * cell)?;
	for (id, tile) in theme.tiles().iter() {
		let index = id.index() as u32;
		let scaled = tile.scaled(cell, cell, theme.settings().interpolation)?;
		scaled.copy_region(scaled.bounds(), &mut sheet, index % columns * cell, index / columns * cell);
	}

	sheet.as_image().save(output).with_context(|| format!("Failed to write {}", output.display()))?;
	info!("Wrote {}x{} tile sheet to {}", sheet.width(), sheet.height(), output.display());
	Ok(())
}

fn run_export(settings: RenderSettings, output: &Path, path: Option<&Path>) -> Result<()> {
	let theme = open_theme(settings, path)?;
	if theme.mode() == ThemeMode::Fixed {
		bail!("Theme uses fixed artwork and has no indexed sheet to export");
	}

	let source = theme.indexed_source();
	source.to_editable_image()?.save(output).with_context(|| format!("Failed to write {}", output.display()))?;
	info!("Exported {source} to {}", output.display());
	Ok(())
}

fn run_check(settings: RenderSettings, files: &[PathBuf]) -> Result<()> {
	let mut theme: GraphicsTheme = GraphicsTheme::new(settings)?;
	let mut failed = 0;

	for file in files {
		match theme.load_from_file(file) {
			Ok(()) => println!("OK    {} ({}, {}px cells)", file.display(), theme.mode(), theme.cell_size().unwrap_or_default()),
			Err(e) => {
				println!("FAIL  {}: {e}", file.display());
				failed += 1;
			}
		}
	}

	if failed > 0 {
		bail!("{failed} of {} theme files failed", files.len());
	}
	Ok(())
}
