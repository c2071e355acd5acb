pub mod config;
pub mod engine;
pub mod models;
pub mod sink;
pub mod tiling;
pub mod traits;
pub mod utils;

pub use config::Config;
pub use engine::BboxEngine;
pub use models::{AreaUnit, Extent, InvalidExtent, Tile};
