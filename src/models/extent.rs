use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Why an extent failed validation.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum InvalidExtent {
    #[error("minx {0} is greater than maxx {1}")]
    XOrdering(f64, f64),
    #[error("miny {0} is greater than maxy {1}")]
    YOrdering(f64, f64),
    #[error("coordinate {0} is not finite")]
    NonFinite(f64),
}

/// Axis-aligned rectangle in a projected (planar, metric) coordinate system.
///
/// Coordinates are ordered (`minx <= maxx`, `miny <= maxy`) and finite;
/// `Extent::new` rejects anything else. A zero-width or zero-height extent is
/// degenerate but valid. Values never mutate after construction, every
/// operation on them hands back a fresh `Extent`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Extent {
    pub minx: f64,
    pub miny: f64,
    pub maxx: f64,
    pub maxy: f64,
}

impl Extent {
    pub fn new(minx: f64, miny: f64, maxx: f64, maxy: f64) -> Result<Self, InvalidExtent> {
        for v in [minx, miny, maxx, maxy] {
            if !v.is_finite() {
                return Err(InvalidExtent::NonFinite(v));
            }
        }
        if minx > maxx {
            return Err(InvalidExtent::XOrdering(minx, maxx));
        }
        if miny > maxy {
            return Err(InvalidExtent::YOrdering(miny, maxy));
        }
        Ok(Extent {
            minx,
            miny,
            maxx,
            maxy,
        })
    }

    pub fn width(&self) -> f64 {
        self.maxx - self.minx
    }

    pub fn height(&self) -> f64 {
        self.maxy - self.miny
    }

    /// Zero area: a line or a point.
    pub fn is_degenerate(&self) -> bool {
        self.width() == 0.0 || self.height() == 0.0
    }
}

impl TryFrom<(f64, f64, f64, f64)> for Extent {
    type Error = InvalidExtent;

    fn try_from(extent: (f64, f64, f64, f64)) -> Result<Self, Self::Error> {
        Extent::new(extent.0, extent.1, extent.2, extent.3)
    }
}

impl fmt::Display for Extent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}, {}, {}, {}]",
            self.minx, self.miny, self.maxx, self.maxy
        )
    }
}

/// Parse `minx,miny,maxx,maxy` (the usual BBOX query-string shape).
impl FromStr for Extent {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        if parts.len() != 4 {
            anyhow::bail!("expected 4 comma-separated coordinates, got {}", parts.len());
        }
        let mut coords = [0.0f64; 4];
        for (slot, part) in coords.iter_mut().zip(&parts) {
            *slot = part
                .parse()
                .map_err(|e| anyhow::anyhow!("bad coordinate '{}': {}", part, e))?;
        }
        Ok(Extent::new(coords[0], coords[1], coords[2], coords[3])?)
    }
}
