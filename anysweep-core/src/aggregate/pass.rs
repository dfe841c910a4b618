use crate::aggregate::Column;
use crate::intermediate::FlowRow;
use std::collections::{BTreeMap, HashSet};
use tracing::debug;

pub const SEPARATOR: &str = ", ";

/// One group-by step: rows agreeing on every `keys` column are merged and
/// their `collapse` values joined with [`SEPARATOR`].
#[derive(Debug, Clone, Copy)]
pub struct AggregationPass {
    pub keys: [Column; 4],
    pub collapse: Column,
    pub dedup: bool,
}

pub const SOURCE_IP_PASS: AggregationPass = AggregationPass {
    keys: [
        Column::SrcIntf,
        Column::DstIntf,
        Column::DstIp,
        Column::Service,
    ],
    collapse: Column::SrcIp,
    dedup: true,
};

pub const SERVICE_PASS: AggregationPass = AggregationPass {
    keys: [Column::SrcIntf, Column::DstIntf, Column::SrcIp, Column::DstIp],
    collapse: Column::Service,
    dedup: false,
};

pub const DESTINATION_IP_PASS: AggregationPass = AggregationPass {
    keys: [
        Column::SrcIntf,
        Column::DstIntf,
        Column::SrcIp,
        Column::Service,
    ],
    collapse: Column::DstIp,
    dedup: false,
};

pub const PASSES: [AggregationPass; 3] = [SOURCE_IP_PASS, SERVICE_PASS, DESTINATION_IP_PASS];

/// Run a single pass. Output holds one row per distinct key combination.
pub fn collapse(rows: &[FlowRow], pass: &AggregationPass) -> Vec<FlowRow> {
    let mut groups: BTreeMap<[&str; 4], Vec<&str>> = BTreeMap::new();

    for row in rows {
        let key = pass.keys.map(|c| row.column(c));
        groups.entry(key).or_default().push(row.column(pass.collapse));
    }

    groups
        .into_iter()
        .map(|(key, values)| {
            let mut out = FlowRow::default();
            for (column, value) in pass.keys.iter().zip(key) {
                *out.column_mut(*column) = value.to_string();
            }
            *out.column_mut(pass.collapse) = join_values(&values, pass.dedup);
            out
        })
        .collect()
}

/// Run all three passes in order.
pub fn aggregate(rows: &[FlowRow]) -> Vec<FlowRow> {
    let mut current = rows.to_vec();

    for pass in &PASSES {
        let before = current.len();
        current = collapse(&current, pass);
        debug!(
            collapsed = pass.collapse.name(),
            rows_in = before,
            rows_out = current.len(),
            "aggregation pass done"
        );
    }

    current
}

fn join_values(values: &[&str], dedup: bool) -> String {
    if !dedup {
        return values.join(SEPARATOR);
    }

    // Already-joined values are split first so a re-run stays stable.
    let mut seen = HashSet::new();
    values
        .iter()
        .flat_map(|v| v.split(SEPARATOR))
        .filter(|v| seen.insert(*v))
        .collect::<Vec<_>>()
        .join(SEPARATOR)
}
