//! CPU information types

use serde::Serialize;

/// CPU hardware information
#[derive(Debug, Clone, Serialize)]
pub struct CpuInfo {
    /// CPU brand/model name
    pub brand: String,
    /// Number of physical CPU cores
    pub physical_cores: Option<usize>,
    /// Number of logical CPU cores (including hyperthreading)
    pub logical_cores: usize,
}

impl CpuInfo {
    /// Core count for display: physical when known, logical otherwise
    pub fn cores(&self) -> usize {
        self.physical_cores.unwrap_or(self.logical_cores)
    }
}

/// CPU usage sampled over a fixed window
#[derive(Debug, Clone, Default, Serialize)]
pub struct CpuUsage {
    /// Global CPU usage percentage (0-100)
    pub global_usage_percent: f32,
}
