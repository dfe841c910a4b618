//! One linear sweep over a log export:
//!
//! read
//! tokenize_lines
//! filter_records
//! write_intermediate / read_intermediate
//! aggregate
//! format_report
//! write_workbook

mod run;
mod summary;


pub use run::{read_log, run, run_with};
pub use summary::RunSummary;
