//! Readers that turn store tables into Arrow batches

pub mod table_reader;

pub use table_reader::read_table;
