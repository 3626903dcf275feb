//! System Info Report
//!
//! Collects host telemetry once and writes `system_info_<hostname>.txt`
//! into the current directory.
//!
//! # Usage
//!
//! Run directly: `sysinfo-report`
//!
//! Diagnostics go to stderr (`RUST_LOG`, `LOG_FORMAT=json`); stdout carries
//! a single status line.

use std::path::Path;
use std::process::ExitCode;

fn main() -> anyhow::Result<ExitCode> {
    report_common::init_tracing("sysinfo_report")?;

    tracing::info!("Collecting system information");

    match sysinfo_report::run(Path::new(".")) {
        Ok(file_name) => {
            tracing::info!(file = %file_name, "Report written");
            println!("Информация успешно записана в файл '{}'", file_name);
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            tracing::error!(path = %e.path().display(), error = ?e, "Report not written");
            println!("{}", e);
            Ok(ExitCode::FAILURE)
        }
    }
}
