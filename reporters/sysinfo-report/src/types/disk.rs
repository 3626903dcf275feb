//! Disk I/O counter types

use serde::Serialize;
use std::collections::BTreeMap;

/// Cumulative I/O counters for one block device
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DiskIoCounters {
    /// Completed read operations
    pub read_count: u64,
    /// Completed write operations
    pub write_count: u64,
    /// Bytes read
    pub read_bytes: u64,
    /// Bytes written
    pub write_bytes: u64,
}

/// Counters keyed by device name
pub type DiskIoStats = BTreeMap<String, DiskIoCounters>;

/// Disk I/O section of a report
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DiskIoSection {
    /// Counters were read (possibly for zero devices)
    Devices { devices: DiskIoStats },
    /// Counters could not be read
    Failed { error: String },
}
