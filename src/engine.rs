use crate::models::{AreaUnit, Extent};

/// Bounding-box engine: holds one configured default extent and bisects or
/// measures any extent handed to it. All operations are pure, nothing is
/// mutated, so a shared reference is safe across threads.
#[derive(Debug, Clone)]
pub struct BboxEngine {
    default_extent: Extent,
}

impl BboxEngine {
    pub fn new(default_extent: Extent) -> Self {
        Self { default_extent }
    }

    /// The extent the engine was configured with, unchanged.
    pub fn default_extent(&self) -> Extent {
        self.default_extent
    }

    /// Bisect an extent along its longer axis into two edge-sharing halves.
    ///
    /// A box strictly taller than wide splits horizontally into (lower,
    /// upper); everything else, ties included, splits vertically into (left,
    /// right). The comparison is a strict `width < height` and the return
    /// order is fixed: recursive tilers traverse the halves in this order and
    /// depend on it being deterministic.
    pub fn split(&self, extent: Extent) -> (Extent, Extent) {
        if extent.width() < extent.height() {
            let mid = extent.miny + extent.height() / 2.0;
            (
                Extent { maxy: mid, ..extent },
                Extent { miny: mid, ..extent },
            )
        } else {
            let mid = extent.minx + extent.width() / 2.0;
            (
                Extent { maxx: mid, ..extent },
                Extent { minx: mid, ..extent },
            )
        }
    }

    /// Planar area of an extent in the requested unit.
    ///
    /// The square-meter value is rounded to 2 decimals first and hectares /
    /// square kilometers are derived from that rounded figure, then rounded
    /// again. Downstream statistics were produced this way historically, so
    /// the two-stage rounding is kept for output parity.
    pub fn area(&self, extent: Extent, unit: AreaUnit) -> f64 {
        let area_m2 = round2(extent.width() * extent.height());
        match unit {
            AreaUnit::SquareMeters => area_m2,
            AreaUnit::Hectares => round2(area_m2 / AreaUnit::Hectares.square_meters()),
            AreaUnit::SquareKilometers => {
                round2(area_m2 / AreaUnit::SquareKilometers.square_meters())
            }
        }
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
