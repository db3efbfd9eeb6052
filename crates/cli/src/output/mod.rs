//! Output formatting for CLI results.

pub mod detail;
pub mod report;

pub use detail::format_report_detail;
pub use report::{Report, Verification};
