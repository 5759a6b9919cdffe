//! Bill listing use-cases: retrieval, display formatting and ordering.

pub mod attachment;
pub mod format;
pub mod loader;
pub mod ordering;


pub use attachment::{is_supported_justification, validate_justification};
pub use format::{format_date, format_status};
pub use loader::{get_bills, with_display_dates};
pub use ordering::bills_in_display_order;
