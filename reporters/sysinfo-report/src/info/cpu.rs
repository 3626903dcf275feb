//! CPU information collection

use std::time::Duration;

use sysinfo::System;

use crate::types::{CpuInfo, CpuUsage};

/// How long utilization is measured for
pub const CPU_SAMPLE_WINDOW: Duration = Duration::from_secs(1);

/// Get CPU model and core counts, or `None` if no CPU was reported
pub fn get_cpu_info(sys: &System) -> Option<CpuInfo> {
    let cpus = sys.cpus();
    let first_cpu = cpus.first()?;

    Some(CpuInfo {
        brand: first_cpu.brand().trim().to_string(),
        physical_cores: sys.physical_core_count(),
        logical_cores: cpus.len(),
    })
}

/// Get global CPU usage from the last two refreshes
pub fn get_cpu_usage(sys: &System) -> CpuUsage {
    CpuUsage {
        global_usage_percent: sys.global_cpu_usage(),
    }
}

/// Measure global CPU usage over `window`, blocking the calling thread
///
/// The window is never shorter than sysinfo's minimum update interval,
/// below which the usage delta is meaningless.
pub fn sample_cpu_usage(sys: &mut System, window: Duration) -> CpuUsage {
    sys.refresh_cpu_usage();
    std::thread::sleep(window.max(sysinfo::MINIMUM_CPU_UPDATE_INTERVAL));
    sys.refresh_cpu_usage();
    get_cpu_usage(sys)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cores_prefers_physical() {
        let info = CpuInfo {
            brand: "Test CPU".to_string(),
            physical_cores: Some(4),
            logical_cores: 8,
        };
        assert_eq!(info.cores(), 4);

        let info = CpuInfo {
            physical_cores: None,
            ..info
        };
        assert_eq!(info.cores(), 8);
    }

    #[test]
    fn test_sample_cpu_usage_in_range() {
        let mut sys = System::new();
        sys.refresh_cpu_all();
        let usage = sample_cpu_usage(&mut sys, Duration::ZERO);
        assert!((0.0..=100.0).contains(&usage.global_usage_percent));
    }
}
