//! Memory information collection

use sysinfo::System;

use crate::types::MemoryInfo;

/// Get total and used RAM from a memory-refreshed `System`
pub fn get_memory_info(sys: &System) -> MemoryInfo {
    MemoryInfo {
        total_bytes: sys.total_memory(),
        used_bytes: sys.used_memory(),
    }
}
