//! Writers persisting normalized track records.
//!
//! Both writers skip empty input without touching the file system and report
//! how many records they wrote. The whole file is rendered in memory and
//! handed to `async_fs::write`; a crash mid-write leaves a partial file behind.

mod csv_writer;
mod text_writer;

pub use csv_writer::{CSV_HEADER, write_csv};
pub use text_writer::{TEXT_BANNER, write_text};
