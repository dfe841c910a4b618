//! Aggregation of filtered flows.
//!
//! Three group-by passes run in a fixed order. Each pass keys on four of the
//! five flow columns and collapses the fifth into a `", "`-joined string:
//!
//! 1. source IPs, keyed by interfaces + destination IP + service (deduplicated)
//! 2. services, keyed by interfaces + source IPs + destination IP
//! 3. destination IPs, keyed by interfaces + source IPs + services
//!
//! Only the first pass removes duplicates. Groups come out in ascending
//! order of the pass's key columns and values keep their input order within
//! a group.

mod column;
mod pass;


pub use column::Column;
pub use pass::*;
