//! Export des Hindernisrasters als C-Quelltext für das A*-Modul.
//!
//! Trennt die sortierten Records (`collect_records`) von der reinen
//! Textformatierung (`format_barrier_source`).

pub mod c_writer;

pub use c_writer::{
    collect_records, export_barrier_source, format_barrier_source, write_barrier_file,
    ExportError, ExportRecord, RECORDS_PER_LINE,
};
