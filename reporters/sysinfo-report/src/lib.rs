//! System Info Report Library
//!
//! Collects local host telemetry (hostname, user, IP address, memory, OS,
//! CPU model and load, per-device disk I/O) and writes it as a plain-text
//! report named after the hostname.
//!
//! # Usage as Library
//!
//! ```rust,ignore
//! use sysinfo_report::{collect_snapshot, format_report};
//!
//! let snapshot = collect_snapshot();
//! println!("{}", format_report(&snapshot));
//! ```
//!
//! # Usage as Binary
//!
//! Run directly: `sysinfo-report`
//!
//! Writes `system_info_<hostname>.txt` into the current directory.

pub mod info;
pub mod report;
pub mod types;
pub mod writer;

use std::path::Path;

pub use info::collect_snapshot;
pub use report::format_report;
pub use writer::{report_file_name, write_report, ReportError};

/// Collect, format and write a report into `output_dir`
///
/// Returns the file name that was written.
pub fn run(output_dir: &Path) -> Result<String, ReportError> {
    let snapshot = collect_snapshot();

    match serde_json::to_string(&snapshot) {
        Ok(json) => tracing::debug!(snapshot = %json, "collected system snapshot"),
        Err(e) => tracing::debug!(error = %e, "snapshot not serializable"),
    }

    let file_name = report_file_name(&snapshot.host.hostname);
    let report = format_report(&snapshot);
    write_report(&output_dir.join(&file_name), &report)?;

    Ok(file_name)
}
