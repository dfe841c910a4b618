use anysweep_core::pipeline;
use integration_tests::harness::{Workspace, fixed_clock};
use pretty_assertions::assert_eq;
use std::collections::HashSet;

const TWO_SOURCES: &str = "\
srcintf=port1 dstintf=port2 srcip=10.0.0.1 dstip=20.0.0.1 service=HTTP dstport=80 rcvdbyte=500
srcintf=port1 dstintf=port2 srcip=10.0.0.2 dstip=20.0.0.1 service=HTTP dstport=80 rcvdbyte=300
";

#[test]
fn two_sources_collapse_into_one_report_row() {
    // Arrange
    let ws = Workspace::with_contents("two.log", TWO_SOURCES);

    // Act
    let summary = pipeline::run(&ws.log, &ws.config, fixed_clock()).unwrap();

    // Assert
    assert_eq!(summary.rows.len(), 1);
    let row = &summary.rows[0];
    let sources: HashSet<&str> = row.source_ip.split(", ").collect();
    assert_eq!(sources, HashSet::from(["10.0.0.1", "10.0.0.2"]));
    assert_eq!(row.destination_ip, "20.0.0.1");
    assert_eq!(row.service_port, "HTTP");
    assert_eq!(row.source_interface, "port1");
    assert_eq!(row.destination_interface, "port2");
}

#[test]
fn zero_byte_duplicate_is_absent_from_the_report() {
    // Arrange
    let log = format!(
        "{TWO_SOURCES}srcintf=port1 dstintf=port2 srcip=10.0.0.7 dstip=20.0.0.9 service=HTTP dstport=80 rcvdbyte=0\n"
    );
    let ws = Workspace::with_contents("zero.log", &log);

    // Act
    let summary = pipeline::run(&ws.log, &ws.config, fixed_clock()).unwrap();

    // Assert
    assert_eq!(summary.rows.len(), 1);
    assert!(summary.rows.iter().all(|r| !r.source_ip.contains("10.0.0.7")));
    assert!(summary.rows.iter().all(|r| !r.destination_ip.contains("20.0.0.9")));
}

#[test]
fn fortigate_export_is_grouped_per_interface_pair() {
    // Arrange
    let ws = Workspace::with_fixture("fortigate_traffic.log");

    // Act
    let summary = pipeline::run(&ws.log, &ws.config, fixed_clock()).unwrap();

    // Assert
    assert_eq!(summary.lines, 7);
    assert_eq!(summary.kept, 4);
    assert_eq!(summary.zero_received_bytes, 1);
    assert_eq!(summary.missing_destination_port, 2);
    assert_eq!(summary.missing_received_bytes, 0);

    let pairs: Vec<(&str, &str)> = summary
        .rows
        .iter()
        .map(|r| (r.source_interface.as_str(), r.destination_interface.as_str()))
        .collect();
    assert_eq!(pairs, vec![("port3", "port1"), ("port4", "port1")]);

    let web = &summary.rows[0];
    let sources: HashSet<&str> = web.source_ip.split(", ").collect();
    assert_eq!(sources, HashSet::from(["10.10.1.15", "10.10.1.16"]));
    assert_eq!(web.source_ip.split(", ").count(), 2);
    assert_eq!(web.destination_ip, "172.16.5.20");
    assert_eq!(web.service_port, "HTTPS");

    let dns = &summary.rows[1];
    assert_eq!(dns.source_ip, "10.20.0.5");
    assert_eq!(dns.destination_ip, "8.8.8.8");
    assert_eq!(dns.service_port, "DNS");

    for row in &summary.rows {
        assert_eq!(row.name, "LIMPIEZA_ANY_");
        assert_eq!(row.autorizacion_cyber, "");
        assert_eq!(row.comentarios, "");
    }
}

#[test]
fn only_the_report_is_left_behind() {
    // Arrange
    let ws = Workspace::with_fixture("fortigate_traffic.log");

    // Act
    pipeline::run(&ws.log, &ws.config, fixed_clock()).unwrap();

    // Assert
    assert_eq!(
        ws.files(),
        vec![
            "filtrado_20240301-123000_fortigate_traffic.log.csv.xlsx".to_string(),
            "fortigate_traffic.log".to_string(),
        ]
    );
}

#[test]
fn interface_pairs_are_unique_in_the_report() {
    // Arrange
    let log = "\
srcintf=a dstintf=b srcip=1.1.1.1 dstip=2.2.2.2 service=HTTP dstport=80 rcvdbyte=1
srcintf=a dstintf=b srcip=1.1.1.1 dstip=2.2.2.3 service=HTTP dstport=80 rcvdbyte=1
srcintf=a dstintf=b srcip=1.1.1.1 dstip=2.2.2.2 service=SSH dstport=22 rcvdbyte=1
srcintf=a dstintf=b srcip=1.1.1.1 dstip=2.2.2.3 service=SSH dstport=22 rcvdbyte=1
";
    let ws = Workspace::with_contents("pairs.log", log);

    // Act
    let summary = pipeline::run(&ws.log, &ws.config, fixed_clock()).unwrap();

    // Assert
    assert_eq!(summary.rows.len(), 1);
    assert_eq!(summary.rows[0].destination_ip, "2.2.2.2, 2.2.2.3");
    assert_eq!(summary.rows[0].service_port, "HTTP, SSH");
}

#[test]
fn shipped_sample_config_loads() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("../config/anysweep.toml");

    let cfg = anysweep_core::config::SweepConfig::from_file(&path).unwrap();

    assert_eq!(cfg.report.name, "LIMPIEZA_ANY_");
    assert!(cfg.report.index_column);
}
