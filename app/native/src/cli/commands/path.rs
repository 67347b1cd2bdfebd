//! Path CLI commands.
//!
//! Convert between stream lists and the shareable path form.

use clap::Subcommand;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::cli::output;
use crate::error::MultiviewError;
use crate::mosaic::{Tile, decode_path, encode_path};

/// Path subcommands.
#[derive(Subcommand, Debug)]
#[command(next_display_order = None)]
pub enum PathCommands {
    /// Encode streams as a path.
    #[command(after_long_help = r#"Examples:
  multiview path encode shroud abc123:youtube xqc:kick   # /shroud/abc123~yt/xqc~kick"#)]
    Encode {
        /// Streams as `id` or `id:platform`, in order.
        #[arg(required = true, value_name = "STREAM")]
        streams: Vec<Tile>,
    },

    /// Decode a path into streams.
    #[command(after_long_help = r#"Examples:
  multiview path decode /shroud/abc123~yt          # Table of streams
  multiview path decode /shroud/abc123~yt --json   # JSON output"#)]
    Decode {
        /// The path to decode.
        path: String,

        /// Output in JSON format instead of table format.
        #[arg(long, short)]
        json: bool,
    },
}

/// Execute path subcommands.
///
/// # Errors
///
/// Returns an error if a path segment cannot be decoded.
pub fn execute(cmd: &PathCommands) -> Result<(), MultiviewError> {
    match cmd {
        PathCommands::Encode { streams } => {
            println!("{}", encode_path(streams));
            Ok(())
        }
        PathCommands::Decode { path, json } => {
            let tiles = decode_path(path)?;
            if *json {
                output::print_highlighted_json(&serde_json::to_value(&tiles)?);
            } else {
                print_tiles(&tiles);
            }
            Ok(())
        }
    }
}

fn print_tiles(tiles: &[Tile]) {
    #[derive(Tabled)]
    struct TileRow {
        #[tabled(rename = "Slot")]
        slot: usize,
        #[tabled(rename = "Stream")]
        id: String,
        #[tabled(rename = "Platform")]
        platform: String,
    }

    let rows: Vec<TileRow> = tiles
        .iter()
        .enumerate()
        .map(|(slot, tile)| TileRow {
            slot,
            id: output::truncate(&tile.id, 32),
            platform: tile.platform.to_string(),
        })
        .collect();
    println!("{}", Table::new(rows).with(Style::rounded()));
}
