pub mod fixtures;
pub mod tracing;

pub use fixtures::{fixture_path, open_fixture};
pub use self::tracing::{CapturedEvent, capture_events};
