use crate::models::Tile;
use crate::traits::AreaSink;
use serde::Serialize;
use std::io::Write;
use std::path::Path;

/// Flat row shape for the statistics file. `Tile` nests its extent, which
/// csv cannot serialize, so the coordinates are spread out here.
#[derive(Serialize)]
struct TileRow {
    id: usize,
    depth: u32,
    minx: f64,
    miny: f64,
    maxx: f64,
    maxy: f64,
    area_m2: f64,
    area_ha: f64,
    area_km2: f64,
}

/// Tile statistics sink writing one CSV row per tile.
pub struct CsvAreaSink<W: Write> {
    writer: csv::Writer<W>,
}

impl CsvAreaSink<std::fs::File> {
    pub fn create(path: &Path) -> anyhow::Result<Self> {
        let writer = csv::Writer::from_path(path)?;
        Ok(Self { writer })
    }
}

impl<W: Write> CsvAreaSink<W> {
    pub fn from_writer(inner: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(inner),
        }
    }
}

impl<W: Write> AreaSink for CsvAreaSink<W> {
    fn record(&mut self, tile: &Tile) -> anyhow::Result<()> {
        self.writer.serialize(TileRow {
            id: tile.id,
            depth: tile.depth,
            minx: tile.extent.minx,
            miny: tile.extent.miny,
            maxx: tile.extent.maxx,
            maxy: tile.extent.maxy,
            area_m2: tile.area_m2,
            area_ha: tile.area_ha,
            area_km2: tile.area_km2,
        })?;
        Ok(())
    }

    fn flush(&mut self) -> anyhow::Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::BboxEngine;
    use crate::models::Extent;
    use crate::tiling::partition;

    #[test]
    fn test_csv_sink_round_trips_tiles() {
        let engine = BboxEngine::new(Extent::new(0.0, 0.0, 1000.0, 500.0).unwrap());
        let tiles = partition(&engine, engine.default_extent(), 200_000.0).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tiles.csv");
        {
            let mut sink = CsvAreaSink::create(&path).unwrap();
            for tile in &tiles {
                sink.record(tile).unwrap();
            }
            sink.flush().unwrap();
        }

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let headers = reader.headers().unwrap().clone();
        assert_eq!(
            headers,
            csv::StringRecord::from(vec![
                "id", "depth", "minx", "miny", "maxx", "maxy", "area_m2", "area_ha", "area_km2",
            ])
        );

        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), tiles.len());
        assert_eq!(&rows[0][0], "0");
        assert_eq!(&rows[0][2], "0.0");
        assert_eq!(&rows[0][4], "250.0");
        assert_eq!(&rows[0][6], "125000.0");
    }

    #[test]
    fn test_csv_sink_writes_through_any_writer() {
        let engine = BboxEngine::new(Extent::new(0.0, 0.0, 100.0, 100.0).unwrap());
        let tiles = partition(&engine, engine.default_extent(), 1_000_000.0).unwrap();

        let mut buf = Vec::new();
        {
            let mut sink = CsvAreaSink::from_writer(&mut buf);
            for tile in &tiles {
                sink.record(tile).unwrap();
            }
            sink.flush().unwrap();
        }
        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with("id,depth,minx"));
        assert!(text.contains("10000.0"));
    }
}
