pub mod fixtures;
pub mod tracing;

pub use self::fixtures::{Workspace, fixed_clock, fixture_path};
pub use self::tracing::{CapturedEvent, capture_events};
