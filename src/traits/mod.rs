pub mod sink;

pub use sink::AreaSink;
