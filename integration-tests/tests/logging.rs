use anysweep_core::pipeline;
use integration_tests::harness::{Workspace, capture_events, fixed_clock};
use tracing::Level;

#[test]
fn each_stage_logs_progress() {
    // Arrange
    let ws = Workspace::with_fixture("fortigate_traffic.log");

    // Act
    let (result, events) = capture_events(|| pipeline::run(&ws.log, &ws.config, fixed_clock()));

    // Assert
    assert!(result.is_ok());
    let messages: Vec<&str> = events.iter().filter_map(|e| e.message()).collect();
    for expected in [
        "parsing log file",
        "writing intermediate CSV",
        "aggregating flows",
        "writing report workbook",
        "removing intermediate CSV",
    ] {
        assert!(messages.contains(&expected), "missing {expected:?} in {messages:?}");
    }
}

#[test]
fn filter_counts_are_recorded_at_debug_level() {
    // Arrange
    let ws = Workspace::with_fixture("fortigate_traffic.log");

    // Act
    let (_, events) = capture_events(|| pipeline::run(&ws.log, &ws.config, fixed_clock()));

    // Assert
    let filtered = events
        .iter()
        .find(|e| e.message() == Some("records filtered"))
        .expect("filter event");
    assert_eq!(filtered.level, Level::DEBUG);
    assert_eq!(filtered.field("kept"), Some("4"));
    assert_eq!(filtered.field("zero_rcvdbyte"), Some("1"));
}
