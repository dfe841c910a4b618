use crate::error::PipelineError;
use crate::report::{REPORT_HEADERS, ReportRow};
use rust_xlsxwriter::{Format, FormatAlign, FormatBorder, Workbook, XlsxError};
use std::path::Path;
use tracing::info;

#[derive(Debug, Clone)]
pub struct WorkbookOptions {
    pub sheet_name: String,
    /// Leading unlabeled column of 0-based row numbers.
    pub index_column: bool,
}

impl Default for WorkbookOptions {
    fn default() -> Self {
        Self {
            sheet_name: "Sheet1".to_string(),
            index_column: true,
        }
    }
}

pub fn write_workbook(
    path: &Path,
    rows: &[ReportRow],
    options: &WorkbookOptions,
) -> Result<(), PipelineError> {
    info!(path = %path.display(), rows = rows.len(), "writing report workbook");

    let mut workbook = build_workbook(rows, options).map_err(|e| PipelineError::report(path, e))?;
    workbook.save(path).map_err(|e| PipelineError::report(path, e))
}

fn build_workbook(rows: &[ReportRow], options: &WorkbookOptions) -> Result<Workbook, XlsxError> {
    let header = Format::new()
        .set_bold()
        .set_border(FormatBorder::Thin)
        .set_align(FormatAlign::Center);

    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(&options.sheet_name)?;

    let offset: u16 = if options.index_column { 1 } else { 0 };

    for (col, title) in (offset..).zip(REPORT_HEADERS) {
        sheet.write_string_with_format(0, col, title, &header)?;
    }

    for (i, row) in rows.iter().enumerate() {
        let r = u32::try_from(i + 1).map_err(|_| XlsxError::RowColumnLimitError)?;

        if options.index_column {
            sheet.write_number_with_format(r, 0, i as f64, &header)?;
        }

        for (col, value) in (offset..).zip(row.cells()) {
            sheet.write_string(r, col, value)?;
        }
    }

    Ok(workbook)
}
