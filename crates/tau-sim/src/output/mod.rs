//! Output Systems
//!
//! Console reporting of a finished run.

pub mod report;

pub use report::{report, write_json_report, write_report, ReportFormat};
