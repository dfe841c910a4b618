use crate::fields::{DSTINTF, DSTIP, SERVICE, SRCINTF, SRCIP};
use crate::tokenize::Record;
use serde::{Deserialize, Serialize};

/// One connection as seen by the aggregator.
///
/// Field order matches the intermediate header.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(default)]
pub struct FlowRow {
    pub srcintf: String,
    pub dstintf: String,
    pub srcip: String,
    pub dstip: String,
    pub service: String,
}

impl FlowRow {
    pub fn new(
        srcintf: impl Into<String>,
        dstintf: impl Into<String>,
        srcip: impl Into<String>,
        dstip: impl Into<String>,
        service: impl Into<String>,
    ) -> Self {
        Self {
            srcintf: srcintf.into(),
            dstintf: dstintf.into(),
            srcip: srcip.into(),
            dstip: dstip.into(),
            service: service.into(),
        }
    }
}

impl From<&Record> for FlowRow {
    fn from(record: &Record) -> Self {
        let field = |key: &str| record.get(key).unwrap_or_default().to_string();

        Self {
            srcintf: field(SRCINTF),
            dstintf: field(DSTINTF),
            srcip: field(SRCIP),
            dstip: field(DSTIP),
            service: field(SERVICE),
        }
    }
}
