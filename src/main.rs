use std::path::PathBuf;

use clap::Parser;
use rexpaint_xp::{Layer, Tile, TileField};
use tracing_subscriber::EnvFilter;

/// Print the structure of a REXPaint .xp image
#[derive(Parser)]
#[command(name = "xp-info")]
#[command(version)]
struct Cli {
    /// Path to the .xp file
    path: PathBuf,

    /// Only report this layer (0-based)
    #[arg(long)]
    layer: Option<usize>,

    /// Print each reported layer's glyphs as a text grid
    #[arg(long)]
    dump: bool,

    /// Print each reported layer's values for one tile field (glyph, fg_r, ..., bg_b) in hex
    #[arg(long)]
    field: Option<TileField>,

    /// Log decoder progress (overridden by RUST_LOG)
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    println!("Reading XP file: {}", cli.path.display());
    println!("{}", "=".repeat(60));

    let image = match rexpaint_xp::load_image(&cli.path) {
        Ok(image) => image,
        Err(e) => {
            if e.is_storage_error() {
                eprintln!("\nERROR: Failed to read {}", cli.path.display());
            } else {
                eprintln!("\nERROR: Failed to decode XP file");
            }
            eprintln!("  {}", e);
            std::process::exit(1);
        }
    };

    println!("  Version: {}", image.version);
    println!("  Layers: {}", image.layers.len());
    if image.trailing_bytes > 0 {
        println!("  Trailing bytes: {}", image.trailing_bytes);
    }

    let selected: Vec<(usize, &Layer)> = match cli.layer {
        Some(index) => match image.layer(index) {
            Some(layer) => vec![(index, layer)],
            None => {
                eprintln!(
                    "ERROR: Layer {} does not exist (file has {} layers)",
                    index,
                    image.layers.len()
                );
                std::process::exit(1);
            }
        },
        None => image.layers.iter().enumerate().collect(),
    };

    for (index, layer) in selected {
        println!("\nLayer {}: {}x{} ({} tiles)", index, layer.width(), layer.height(), layer.len());
        if cli.dump {
            print_grid(layer, "", |tile| printable_glyph(tile).to_string());
        }
        if let Some(field) = cli.field {
            print_grid(layer, " ", |tile| field_hex(tile, field));
        }
    }
}

/// Prints a layer row by row, converting from the file's column-major order.
fn print_grid(layer: &Layer, separator: &str, cell: impl Fn(&Tile) -> String) {
    for y in 0..layer.height() {
        let row: Vec<String> = (0..layer.width())
            .filter_map(|x| layer.tile(x, y))
            .map(&cell)
            .collect();
        println!("  {}", row.join(separator));
    }
}

/// Printable ASCII glyphs as-is, everything else as '.'.
fn printable_glyph(tile: &Tile) -> char {
    match tile.glyph_code() {
        code @ 0x20..=0x7E => char::from(code as u8),
        _ => '.',
    }
}

fn field_hex(tile: &Tile, field: TileField) -> String {
    match field {
        TileField::Glyph => format!("{:08x}", tile.glyph_code()),
        TileField::FgR => format!("{:02x}", tile.fg.r),
        TileField::FgG => format!("{:02x}", tile.fg.g),
        TileField::FgB => format!("{:02x}", tile.fg.b),
        TileField::BgR => format!("{:02x}", tile.bg.r),
        TileField::BgG => format!("{:02x}", tile.bg.g),
        TileField::BgB => format!("{:02x}", tile.bg.b),
    }
}
