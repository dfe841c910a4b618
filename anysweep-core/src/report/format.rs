use crate::intermediate::FlowRow;
use serde::Serialize;

pub const DEFAULT_NAME: &str = "LIMPIEZA_ANY_";

pub const REPORT_HEADERS: [&str; 8] = [
    "NAME",
    "SOURCE-INTERFACE",
    "DESTINATION-INTERFACE",
    "SOURCE-IP",
    "DESTINATION-IP",
    "SERVICE-PORT",
    "AUTORIZACION-CYBER",
    "COMENTARIOS",
];

/// A row of the review report. The last two columns are left blank for the
/// reviewer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING-KEBAB-CASE")]
pub struct ReportRow {
    pub name: String,
    pub source_interface: String,
    pub destination_interface: String,
    pub source_ip: String,
    pub destination_ip: String,
    pub service_port: String,
    pub autorizacion_cyber: String,
    pub comentarios: String,
}

impl ReportRow {
    pub fn from_flow(name: &str, flow: &FlowRow) -> Self {
        Self {
            name: name.to_string(),
            source_interface: flow.srcintf.clone(),
            destination_interface: flow.dstintf.clone(),
            source_ip: flow.srcip.clone(),
            destination_ip: flow.dstip.clone(),
            service_port: flow.service.clone(),
            autorizacion_cyber: String::new(),
            comentarios: String::new(),
        }
    }

    /// Cell values in [`REPORT_HEADERS`] order.
    pub fn cells(&self) -> [&str; 8] {
        [
            self.name.as_str(),
            self.source_interface.as_str(),
            self.destination_interface.as_str(),
            self.source_ip.as_str(),
            self.destination_ip.as_str(),
            self.service_port.as_str(),
            self.autorizacion_cyber.as_str(),
            self.comentarios.as_str(),
        ]
    }
}

/// Rename and reorder aggregated rows. Row order is kept as given.
pub fn format_report(rows: &[FlowRow], name: &str) -> Vec<ReportRow> {
    rows.iter().map(|r| ReportRow::from_flow(name, r)).collect()
}
