pub mod csv;

pub use csv::CsvAreaSink;
