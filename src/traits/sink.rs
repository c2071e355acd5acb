use crate::models::Tile;

/// Destination for tile statistics. The partition pipeline pushes every tile
/// it produces through one of these; what happens on the far side (CSV file,
/// database table, message queue) is the sink's business.
pub trait AreaSink {
    fn record(&mut self, tile: &Tile) -> anyhow::Result<()>;

    /// Called once after the last `record`. Default is a no-op for sinks
    /// that write through immediately.
    fn flush(&mut self) -> anyhow::Result<()> {
        Ok(())
    }
}
