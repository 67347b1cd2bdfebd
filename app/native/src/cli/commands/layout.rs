//! Layout CLI commands.
//!
//! Compute tile rectangles for a container without a renderer, mostly for
//! inspecting how a given stream count will be arranged.

use colored::Colorize;
use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use super::types::{CliRowPolicy, CliViewMode, ContainerArgs};
use crate::cli::output;
use crate::config::{self, FocusHeight, ViewMode};
use crate::error::MultiviewError;
use crate::mosaic::layout::grid;
use crate::mosaic::{
    LayoutRequest, MosaicSurface, NoopListeners, PlacedTile, Rect, Size, SurfaceOptions, Tile,
    auto_fit_focus_height,
};

/// Arguments of `multiview layout`.
#[derive(Debug, clap::Args)]
#[command(after_long_help = r#"Examples:
  multiview layout --count 5 --mode grid               # Five placeholder tiles
  multiview layout shroud abc123:youtube xqc:kick      # Named streams
  multiview layout --count 4 --focus 60 --json         # Fixed focus height, JSON output
  multiview layout --count 3 --percent                 # Rectangles in percent units"#)]
pub struct LayoutArgs {
    /// Streams to lay out, as `id` or `id:platform`.
    ///
    /// Defaults to the streams in the configuration file.
    #[arg(value_name = "STREAM")]
    pub streams: Vec<Tile>,

    /// Lay out this many placeholder tiles instead of named streams.
    #[arg(long, short = 'n', conflicts_with = "streams")]
    pub count: Option<usize>,

    #[command(flatten)]
    pub container: ContainerArgs,

    /// View mode. Defaults to the configured mode.
    #[arg(long, short, value_enum)]
    pub mode: Option<CliViewMode>,

    /// Focus height: a percentage (0-100) or `auto`. Defaults to the configured value.
    #[arg(long, short)]
    pub focus: Option<FocusHeight>,

    /// Print rectangles as percentages of the container.
    #[arg(long, short)]
    pub percent: bool,

    /// Output in JSON format instead of table format.
    #[arg(long, short)]
    pub json: bool,
}

/// Arguments of `multiview pack`.
#[derive(Debug, clap::Args)]
#[command(after_long_help = r#"Examples:
  multiview pack --count 5                   # Short row first
  multiview pack --count 5 --policy bottom   # Short row last"#)]
pub struct PackArgs {
    /// Number of tiles.
    #[arg(long, short = 'n')]
    pub count: usize,

    #[command(flatten)]
    pub container: ContainerArgs,

    /// Where the short row goes.
    #[arg(long, value_enum, default_value_t = CliRowPolicy::Top)]
    pub policy: CliRowPolicy,

    /// Output in JSON format instead of table format.
    #[arg(long, short)]
    pub json: bool,
}

/// Arguments of `multiview autofit`.
#[derive(Debug, clap::Args)]
pub struct AutofitArgs {
    /// Number of tiles, including the focused one.
    #[arg(long, short = 'n')]
    pub count: usize,

    #[command(flatten)]
    pub container: ContainerArgs,

    /// Focus band assumed while measuring. Defaults to the configured value.
    #[arg(long, short)]
    pub base: Option<f64>,

    /// Output in JSON format.
    #[arg(long, short)]
    pub json: bool,
}

#[derive(Tabled)]
struct RectRow {
    #[tabled(rename = "Slot")]
    slot: usize,
    #[tabled(rename = "Stream")]
    id: String,
    #[tabled(rename = "X")]
    x: String,
    #[tabled(rename = "Y")]
    y: String,
    #[tabled(rename = "Width")]
    width: String,
    #[tabled(rename = "Height")]
    height: String,
}

impl RectRow {
    fn new(slot: usize, id: &str, rect: &Rect, percent: bool) -> Self {
        Self {
            slot,
            id: output::truncate(id, 24),
            x: output::format_length(rect.x, percent),
            y: output::format_length(rect.y, percent),
            width: output::format_length(rect.width, percent),
            height: output::format_length(rect.height, percent),
        }
    }
}

fn print_rect_table(title: &str, rows: Vec<RectRow>) {
    let count = rows.len();
    let table = Table::new(rows)
        .with(Style::rounded())
        .with(Modify::new(Columns::first()).with(Alignment::right()))
        .with(Modify::new(Columns::new(2..6)).with(Alignment::right()))
        .to_string();
    println!("{}", format!("{title} ({count})").bold());
    println!("{table}");
}

/// Execute `multiview layout`.
///
/// # Errors
///
/// Returns an error if the container dimensions are invalid or there is
/// nothing to lay out.
pub fn execute_layout(args: &LayoutArgs) -> Result<(), MultiviewError> {
    let config = config::get_config();
    let view_mode = args.mode.map_or(config.view_mode, ViewMode::from);
    let focus_height = args.focus.unwrap_or(config.focus_height);

    // Validates the dimensions before they reach the engine
    let request = LayoutRequest::checked(0, args.container.width, args.container.height, view_mode, 0.0)?;

    let tiles: Vec<Tile> = match args.count {
        Some(count) => (1..=count).map(|i| Tile::twitch(format!("tile-{i}"))).collect(),
        None if !args.streams.is_empty() => args.streams.clone(),
        None => config.tiles(),
    };
    if tiles.is_empty() {
        return Err(MultiviewError::InvalidArguments(
            "Nothing to lay out. Pass streams, --count, or configure streams.".to_string(),
        ));
    }

    let options = SurfaceOptions { view_mode, focus_height, ..SurfaceOptions::from(config) };
    let mut surface = MosaicSurface::new(NoopListeners, options);
    surface.resize(Size::new(request.container_width, request.container_height));
    surface.set_streams(tiles);

    let size = surface.size();
    let placed: Vec<PlacedTile> = surface
        .layout()
        .into_iter()
        .map(|mut p| {
            if args.percent {
                p.rect = p.rect.to_percent_of(size);
            }
            p
        })
        .collect();

    if args.json {
        let value = serde_json::json!({
            "viewMode": surface.view_mode(),
            "focusHeightPercent": surface.focus_height_percent(),
            "units": if args.percent { "percent" } else { "pixels" },
            "path": surface.route_path(),
            "tiles": placed,
        });
        output::print_highlighted_json(&value);
        return Ok(());
    }

    let rows = placed.iter().map(|p| RectRow::new(p.slot, &p.tile.id, &p.rect, args.percent)).collect();
    print_rect_table(&format!("Layout, {view_mode}"), rows);
    if view_mode == ViewMode::Focused {
        println!("Focus height: {:.2}%", surface.focus_height_percent());
    }
    Ok(())
}

/// Execute `multiview pack`.
///
/// # Errors
///
/// Returns an error if the container dimensions are invalid.
pub fn execute_pack(args: &PackArgs) -> Result<(), MultiviewError> {
    let request = LayoutRequest::checked(
        args.count,
        args.container.width,
        args.container.height,
        ViewMode::Grid,
        0.0,
    )?;
    let packing = grid::pack(args.count, &request.container(), args.policy.into());

    if args.json {
        let value = serde_json::json!({
            "cols": packing.cols,
            "rows": packing.rows,
            "tileWidth": packing.tile_width,
            "tileHeight": packing.tile_height,
            "ragged": packing.is_ragged(),
            "bounds": packing.bounds,
            "cells": packing.cells.to_vec(),
        });
        output::print_highlighted_json(&value);
        return Ok(());
    }

    let rows = packing
        .cells
        .iter()
        .enumerate()
        .map(|(i, rect)| RectRow::new(i, &format!("#{}", i + 1), rect, false))
        .collect();
    print_rect_table("Cells", rows);
    println!(
        "Grid: {} x {}, tile {:.1} x {:.1}, ragged {}",
        packing.cols,
        packing.rows,
        packing.tile_width,
        packing.tile_height,
        output::format_bool(packing.is_ragged())
    );
    Ok(())
}

/// Execute `multiview autofit`.
///
/// # Errors
///
/// Returns an error if the container dimensions are invalid.
pub fn execute_autofit(args: &AutofitArgs) -> Result<(), MultiviewError> {
    let base = args.base.unwrap_or(config::get_config().auto_fit_base_focus);
    let request = LayoutRequest::checked(
        args.count,
        args.container.width,
        args.container.height,
        ViewMode::Focused,
        base,
    )?;
    let size = Size::new(request.container_width, request.container_height);
    let solved = auto_fit_focus_height(args.count, size, request.focus_height_percent);

    if args.json {
        output::print_highlighted_json(&serde_json::json!({ "focusHeightPercent": solved }));
        return Ok(());
    }

    match solved {
        Some(percent) => println!("{percent:.2}"),
        None => println!("{}", "Auto-fit needs at least two secondary tiles and a usable container.".dimmed()),
    }
    Ok(())
}
