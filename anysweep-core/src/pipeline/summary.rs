use crate::report::ReportRow;
use owo_colors::OwoColorize;
use serde::Serialize;
use std::path::PathBuf;

/// What one sweep read, dropped and wrote.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub input: PathBuf,
    pub lines: usize,
    pub kept: usize,
    pub missing_destination_port: usize,
    pub missing_received_bytes: usize,
    pub zero_received_bytes: usize,
    pub report_path: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intermediate_path: Option<PathBuf>,
    pub rows: Vec<ReportRow>,
}

impl RunSummary {
    pub fn dropped(&self) -> usize {
        self.missing_destination_port + self.missing_received_bytes + self.zero_received_bytes
    }

    pub fn render_plain(&self) -> String {
        let tick = "✔".green().to_string();
        let mut out = String::new();

        out.push_str(&format!("{tick} {} líneas leídas\n", self.lines));
        out.push_str(&format!(
            "{tick} {} registros conservados ({} descartados: {} sin dstport, {} sin rcvdbyte, {} con rcvdbyte=0)\n",
            self.kept,
            self.dropped(),
            self.missing_destination_port,
            self.missing_received_bytes,
            self.zero_received_bytes
        ));
        out.push_str(&format!("{tick} {} filas en el informe\n", self.rows.len()));
        out.push_str(&format!(
            "{tick} Generando fichero EXCEL definitivo: {}\n",
            self.report_path.display()
        ));
        let intermediate = match &self.intermediate_path {
            Some(path) => format!("Fichero CSV intermedio conservado: {}", path.display()),
            None => "Eliminando fichero CSV intermedio...".to_string(),
        };
        out.push_str(&format!("{tick} {intermediate}\n"));

        out
    }

    pub fn render_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
