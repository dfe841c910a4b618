//! Report formatting and spreadsheet export.

mod format;
mod workbook;


pub use format::*;
pub use workbook::{WorkbookOptions, write_workbook};
