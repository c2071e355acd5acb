use crate::engine::BboxEngine;
use crate::models::{AreaUnit, Extent, Tile};

/// Recursively split an extent until every tile's area (rounded m²) is at or
/// below `max_area_m2`, depth-first with the first half before the second, so
/// the output order is stable run to run.
///
/// Degenerate extents round to 0 m² and come back as a single tile.
pub fn partition(engine: &BboxEngine, extent: Extent, max_area_m2: f64) -> anyhow::Result<Vec<Tile>> {
    if !max_area_m2.is_finite() || max_area_m2 <= 0.0 {
        anyhow::bail!("max tile area must be a positive number, got {}", max_area_m2);
    }

    let mut tiles = Vec::new();
    collect(engine, extent, max_area_m2, 0, &mut tiles);
    Ok(tiles)
}

fn collect(engine: &BboxEngine, extent: Extent, max_area_m2: f64, depth: u32, out: &mut Vec<Tile>) {
    if engine.area(extent, AreaUnit::SquareMeters) <= max_area_m2 {
        out.push(Tile {
            id: out.len(),
            depth,
            extent,
            area_m2: engine.area(extent, AreaUnit::SquareMeters),
            area_ha: engine.area(extent, AreaUnit::Hectares),
            area_km2: engine.area(extent, AreaUnit::SquareKilometers),
        });
        return;
    }

    let (first, second) = engine.split(extent);
    collect(engine, first, max_area_m2, depth + 1, out);
    collect(engine, second, max_area_m2, depth + 1, out);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> BboxEngine {
        BboxEngine::new(Extent::new(0.0, 0.0, 1000.0, 500.0).unwrap())
    }

    #[test]
    fn test_partition_respects_threshold() {
        let engine = engine();
        let tiles = partition(&engine, engine.default_extent(), 100_000.0).unwrap();
        assert!(!tiles.is_empty());
        for tile in &tiles {
            assert!(tile.area_m2 <= 100_000.0);
        }
        let total: f64 = tiles.iter().map(|t| t.area_m2).sum();
        assert!((total - 500_000.0).abs() < 1.0);
    }

    #[test]
    fn test_partition_below_threshold_is_single_tile() {
        let engine = engine();
        let tiles = partition(&engine, engine.default_extent(), 1_000_000.0).unwrap();
        assert_eq!(tiles.len(), 1);
        assert_eq!(tiles[0].id, 0);
        assert_eq!(tiles[0].depth, 0);
        assert_eq!(tiles[0].extent, engine.default_extent());
    }

    #[test]
    fn test_partition_order_is_deterministic_depth_first() {
        let engine = engine();
        // 1000x500 → two 500x500 squares → each splits vertically into
        // 250x500 halves. Depth-first: all of the left square's tiles first.
        let tiles = partition(&engine, engine.default_extent(), 200_000.0).unwrap();
        let extents: Vec<_> = tiles.iter().map(|t| t.extent).collect();
        assert_eq!(
            extents,
            vec![
                Extent::new(0.0, 0.0, 250.0, 500.0).unwrap(),
                Extent::new(250.0, 0.0, 500.0, 500.0).unwrap(),
                Extent::new(500.0, 0.0, 750.0, 500.0).unwrap(),
                Extent::new(750.0, 0.0, 1000.0, 500.0).unwrap(),
            ]
        );
        let ids: Vec<_> = tiles.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![0, 1, 2, 3]);
        assert!(tiles.iter().all(|t| t.depth == 2));
    }

    #[test]
    fn test_partition_degenerate_extent_is_single_zero_tile() {
        let engine = engine();
        let point = Extent::new(5.0, 5.0, 5.0, 5.0).unwrap();
        let tiles = partition(&engine, point, 1.0).unwrap();
        assert_eq!(tiles.len(), 1);
        assert_eq!(tiles[0].area_m2, 0.0);
        assert_eq!(tiles[0].area_ha, 0.0);
        assert_eq!(tiles[0].area_km2, 0.0);
    }

    #[test]
    fn test_partition_rejects_non_positive_threshold() {
        let engine = engine();
        assert!(partition(&engine, engine.default_extent(), 0.0).is_err());
        assert!(partition(&engine, engine.default_extent(), -5.0).is_err());
        assert!(partition(&engine, engine.default_extent(), f64::NAN).is_err());
    }
}
