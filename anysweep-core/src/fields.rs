//! Field names consumed from a FortiGate / FortiAnalyzer traffic log line.

pub const SRCINTF: &str = "srcintf";
pub const DSTINTF: &str = "dstintf";
pub const SRCIP: &str = "srcip";
pub const DSTIP: &str = "dstip";
pub const SERVICE: &str = "service";
pub const DSTPORT: &str = "dstport";
pub const RCVDBYTE: &str = "rcvdbyte";

/// Columns carried into the intermediate artifact, in header order.
pub const FLOW_COLUMNS: [&str; 5] = [SRCINTF, DSTINTF, SRCIP, DSTIP, SERVICE];
