//! Full snapshot combining all collected info

use serde::Serialize;

use super::{CpuInfo, CpuUsage, DiskIoSection, HostIdentity, MemoryInfo, NetworkAddress, OsInfo};

/// Everything a host report is built from
#[derive(Debug, Clone, Serialize)]
pub struct SystemSnapshot {
    /// Hostname and current user
    pub host: HostIdentity,
    /// Local IPv4 address lookup result
    pub address: NetworkAddress,
    /// Memory totals
    pub memory: MemoryInfo,
    /// OS platform and version
    pub os: OsInfo,
    /// CPU hardware information, if any CPU was reported
    pub cpu: Option<CpuInfo>,
    /// CPU usage over the sample window
    pub cpu_usage: CpuUsage,
    /// Per-device disk I/O counters
    pub disk_io: DiskIoSection,
}
