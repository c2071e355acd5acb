pub mod extent;
pub mod tile;
pub mod unit;

pub use extent::{Extent, InvalidExtent};
pub use tile::Tile;
pub use unit::AreaUnit;
