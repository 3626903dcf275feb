//! OS information types

use serde::Serialize;

/// Operating system platform and version
#[derive(Debug, Clone, Default, Serialize)]
pub struct OsInfo {
    /// Platform identifier (e.g., "ubuntu", "macos", "windows")
    pub platform: String,
    /// Platform version (empty when unknown)
    pub version: String,
}
