use crate::fields::{DSTPORT, RCVDBYTE};
use crate::tokenize::Record;
use tracing::debug;

/// Why a record was left out of the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropReason {
    MissingDestinationPort,
    MissingReceivedBytes,
    ZeroReceivedBytes,
}

/// Decide whether a record is relevant for review.
///
/// Connections that received zero bytes are treated as denied / unanswered
/// noise. Records lacking either field are dropped.
pub fn check(record: &Record) -> Result<(), DropReason> {
    if !record.contains(DSTPORT) {
        return Err(DropReason::MissingDestinationPort);
    }

    match record.get(RCVDBYTE) {
        None => Err(DropReason::MissingReceivedBytes),
        Some("0") => Err(DropReason::ZeroReceivedBytes),
        Some(_) => Ok(()),
    }
}

pub fn is_relevant(record: &Record) -> bool {
    check(record).is_ok()
}

#[derive(Debug, Default)]
pub struct FilterOutcome {
    pub kept: Vec<Record>,
    pub missing_destination_port: usize,
    pub missing_received_bytes: usize,
    pub zero_received_bytes: usize,
}

impl FilterOutcome {
    pub fn dropped(&self) -> usize {
        self.missing_destination_port + self.missing_received_bytes + self.zero_received_bytes
    }

    fn tally(&mut self, reason: DropReason) {
        match reason {
            DropReason::MissingDestinationPort => self.missing_destination_port += 1,
            DropReason::MissingReceivedBytes => self.missing_received_bytes += 1,
            DropReason::ZeroReceivedBytes => self.zero_received_bytes += 1,
        }
    }
}

pub fn filter_records(records: Vec<Record>) -> FilterOutcome {
    let mut outcome = FilterOutcome::default();

    for record in records {
        match check(&record) {
            Ok(()) => outcome.kept.push(record),
            Err(reason) => outcome.tally(reason),
        }
    }

    debug!(
        kept = outcome.kept.len(),
        missing_dstport = outcome.missing_destination_port,
        missing_rcvdbyte = outcome.missing_received_bytes,
        zero_rcvdbyte = outcome.zero_received_bytes,
        "records filtered"
    );

    outcome
}
