//! OS information collection

use sysinfo::System;

use crate::types::OsInfo;

/// Get the platform identifier and its version
pub fn get_os_info() -> OsInfo {
    OsInfo {
        platform: System::distribution_id(),
        version: System::os_version().unwrap_or_default(),
    }
}
