use crate::models::{AreaUnit, Extent};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    /// Extent used when a command is run without one.
    pub default_extent: Extent,
    /// Partition stops once a tile's area is at or below this, in m².
    pub max_tile_area_m2: f64,
    pub unit: AreaUnit,
    /// Optional statistics file for partition runs.
    pub csv_out: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            // National coverage in ETRS89 / UTM zone 32N (EPSG:25832)
            default_extent: Extent {
                minx: 430_000.0,
                miny: 6_040_000.0,
                maxx: 900_000.0,
                maxy: 6_405_000.0,
            },
            max_tile_area_m2: 100_000_000.0,
            unit: AreaUnit::SquareMeters,
            csv_out: None,
        }
    }
}
