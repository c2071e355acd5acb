use crate::models::Extent;
use serde::Serialize;

/// One tile produced by partitioning, with its areas precomputed in every
/// unit so sinks and summaries never redo the rounding.
#[derive(Debug, Clone, Serialize)]
pub struct Tile {
    /// Sequential position in depth-first traversal order.
    pub id: usize,
    /// Number of splits between the root extent and this tile.
    pub depth: u32,
    pub extent: Extent,
    pub area_m2: f64,
    pub area_ha: f64,
    pub area_km2: f64,
}
