//! Memory information types

use serde::Serialize;

/// Physical memory totals
#[derive(Debug, Clone, Default, Serialize)]
pub struct MemoryInfo {
    /// Total physical memory in bytes
    pub total_bytes: u64,
    /// Used physical memory in bytes
    pub used_bytes: u64,
}
