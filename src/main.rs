use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tilecut::sink::CsvAreaSink;
use tilecut::tiling::partition;
use tilecut::traits::AreaSink;
use tilecut::utils::status::print_tile_summary;
use tilecut::{AreaUnit, BboxEngine, Config, Extent};

#[derive(Parser)]
#[command(name = "tilecut", version, about = "Split projected bounding boxes into area-bounded tiles")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the area of an extent
    Area {
        /// Extent as minx,miny,maxx,maxy (engine default when omitted)
        extent: Option<Extent>,
        /// Output unit: m2, ha or km2 (config default when omitted)
        #[arg(long)]
        unit: Option<AreaUnit>,
    },
    /// Bisect an extent along its longer axis
    Split {
        /// Extent as minx,miny,maxx,maxy (engine default when omitted)
        extent: Option<Extent>,
        /// Emit JSON instead of plain coordinates
        #[arg(long)]
        json: bool,
    },
    /// Recursively split until every tile is at or below a target area
    Partition {
        /// Extent as minx,miny,maxx,maxy (engine default when omitted)
        extent: Option<Extent>,
        /// Target tile area, in --unit (config default when omitted)
        #[arg(long)]
        max_area: Option<f64>,
        /// Unit for --max-area and the summary: m2, ha or km2
        /// (config default when omitted)
        #[arg(long)]
        unit: Option<AreaUnit>,
        /// Write per-tile statistics to this CSV file
        #[arg(long)]
        csv: Option<PathBuf>,
        /// Emit the tile list as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::default();
    let engine = BboxEngine::new(config.default_extent);

    match cli.command {
        Command::Area { extent, unit } => {
            let extent = extent.unwrap_or_else(|| engine.default_extent());
            let unit = unit.unwrap_or(config.unit);
            println!("{:.2} {}", engine.area(extent, unit), unit.code());
        }
        Command::Split { extent, json } => {
            let extent = extent.unwrap_or_else(|| engine.default_extent());
            let (first, second) = engine.split(extent);
            if json {
                println!("{}", serde_json::to_string_pretty(&[first, second])?);
            } else {
                println!("{}", first);
                println!("{}", second);
            }
        }
        Command::Partition {
            extent,
            max_area,
            unit,
            csv,
            json,
        } => {
            let extent = extent.unwrap_or_else(|| engine.default_extent());
            let unit = unit.unwrap_or(config.unit);
            let max_area_m2 = max_area
                .map(|a| a * unit.square_meters())
                .unwrap_or(config.max_tile_area_m2);
            let tiles = partition(&engine, extent, max_area_m2)?;

            if let Some(path) = csv.or(config.csv_out) {
                let mut sink = CsvAreaSink::create(&path)?;
                for tile in &tiles {
                    sink.record(tile)?;
                }
                sink.flush()?;
                eprintln!("💾 Wrote {} tile rows to {}", tiles.len(), path.display());
            }

            if json {
                println!("{}", serde_json::to_string_pretty(&tiles)?);
            } else {
                print_tile_summary(&tiles, unit);
            }
        }
    }

    Ok(())
}
