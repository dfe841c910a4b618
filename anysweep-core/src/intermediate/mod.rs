//! The `;`-delimited intermediate table written between filtering and
//! aggregation.
//!
//! Header is exactly `srcintf;dstintf;srcip;dstip;service`, followed by one
//! row per record that passed the filter. Other fields of the record are
//! ignored and missing ones are written as empty cells.

mod guard;
mod table;
mod row;


pub use guard::IntermediateGuard;
pub use table::{DELIMITER, read_intermediate, write_intermediate};
pub use row::FlowRow;
