use crate::aggregate::aggregate;
use crate::artifacts::ArtifactNames;
use crate::config::SweepConfig;
use crate::error::PipelineError;
use crate::filter::filter_records;
use crate::intermediate::{IntermediateGuard, read_intermediate, write_intermediate};
use crate::pipeline::RunSummary;
use crate::report::{format_report, write_workbook};
use crate::tokenize::{KeyValueTokenizer, LineTokenizer, tokenize_lines};
use chrono::NaiveDateTime;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Read the whole export into memory.
///
/// Bytes that are not valid UTF-8 are replaced rather than rejected, so an
/// export in a legacy encoding still tokenizes on its ASCII fields.
pub fn read_log(path: &Path) -> Result<String, PipelineError> {
    let bytes = fs::read(path).map_err(|e| PipelineError::input_open(path, e))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

pub fn run(
    input: &Path,
    config: &SweepConfig,
    started: NaiveDateTime,
) -> Result<RunSummary, PipelineError> {
    run_with(&KeyValueTokenizer, input, config, started)
}

pub fn run_with<T>(
    tokenizer: &T,
    input: &Path,
    config: &SweepConfig,
    started: NaiveDateTime,
) -> Result<RunSummary, PipelineError>
where
    T: LineTokenizer + ?Sized,
{
    let log = read_log(input)?;

    info!(path = %input.display(), "parsing log file");
    let records = tokenize_lines(tokenizer, log.lines());
    let lines = records.len();
    let outcome = filter_records(records);

    let output_dir = config.output_dir();
    fs::create_dir_all(output_dir).map_err(|e| PipelineError::Io {
        path: output_dir.to_path_buf(),
        source: e,
    })?;
    let names = ArtifactNames::new(input, output_dir, started);

    //--------------------------------------------------------------------------
    // Intermediate table: removed when the guard drops, on every path out
    //--------------------------------------------------------------------------
    let guard = IntermediateGuard::new(&names.intermediate, config.output.keep_intermediate);

    info!(path = %guard.path().display(), "writing intermediate CSV");
    write_intermediate(guard.path(), &outcome.kept)?;

    info!("aggregating flows");
    let flows = read_intermediate(guard.path())?;
    let aggregated = aggregate(&flows);
    debug!(flows = flows.len(), groups = aggregated.len(), "flows aggregated");

    let rows = format_report(&aggregated, &config.report.name);
    write_workbook(&names.report, &rows, &config.workbook_options())?;

    drop(guard);

    Ok(RunSummary {
        input: input.to_path_buf(),
        lines,
        kept: outcome.kept.len(),
        missing_destination_port: outcome.missing_destination_port,
        missing_received_bytes: outcome.missing_received_bytes,
        zero_received_bytes: outcome.zero_received_bytes,
        report_path: names.report,
        intermediate_path: config
            .output
            .keep_intermediate
            .then_some(names.intermediate),
        rows,
    })
}
