pub mod tracing;
pub mod workspace;

pub use tracing::{CapturedEvent, capture_events};
pub use workspace::{TestWorkspace, access_line};
