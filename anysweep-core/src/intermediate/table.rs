use crate::error::PipelineError;
use crate::fields::FLOW_COLUMNS;
use crate::intermediate::FlowRow;
use crate::tokenize::Record;
use std::path::Path;

pub const DELIMITER: u8 = b';';

/// Write the filtered records to `path`, returning the number of data rows.
pub fn write_intermediate(path: &Path, records: &[Record]) -> Result<usize, PipelineError> {
    let err = |source: csv::Error| PipelineError::IntermediateWrite {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = csv::WriterBuilder::new()
        .delimiter(DELIMITER)
        .has_headers(false)
        .from_path(path)
        .map_err(err)?;

    // Written by hand so an empty record set still gets its header.
    writer.write_record(FLOW_COLUMNS).map_err(err)?;

    for record in records {
        writer.serialize(FlowRow::from(record)).map_err(err)?;
    }

    writer.flush().map_err(|e| err(e.into()))?;

    Ok(records.len())
}

pub fn read_intermediate(path: &Path) -> Result<Vec<FlowRow>, PipelineError> {
    let err = |source: csv::Error| PipelineError::IntermediateRead {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(DELIMITER)
        .from_path(path)
        .map_err(err)?;

    reader
        .deserialize::<FlowRow>()
        .collect::<Result<Vec<_>, _>>()
        .map_err(err)
}
