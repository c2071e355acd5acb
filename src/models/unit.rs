use serde::Serialize;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Area unit for extent measurements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum AreaUnit {
    #[default]
    SquareMeters,
    Hectares,
    SquareKilometers,
}

impl AreaUnit {
    /// Map the wire codes (`m2` / `ha` / `km2`) to a unit. Anything
    /// unrecognized falls back to square meters rather than erroring, which
    /// matches how downstream jobs have always treated the unit field.
    pub fn from_code(code: &str) -> Self {
        match code {
            "km2" => AreaUnit::SquareKilometers,
            "ha" => AreaUnit::Hectares,
            _ => AreaUnit::SquareMeters,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            AreaUnit::SquareMeters => "m2",
            AreaUnit::Hectares => "ha",
            AreaUnit::SquareKilometers => "km2",
        }
    }

    /// Square meters per one of this unit.
    pub fn square_meters(&self) -> f64 {
        match self {
            AreaUnit::SquareMeters => 1.0,
            AreaUnit::Hectares => 10_000.0,
            AreaUnit::SquareKilometers => 1_000_000.0,
        }
    }
}

impl fmt::Display for AreaUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for AreaUnit {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(AreaUnit::from_code(s))
    }
}
