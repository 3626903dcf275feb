//! System information collection modules

pub mod cpu;
pub mod disk;
pub mod host;
pub mod memory;
pub mod network;
pub mod os;

use sysinfo::{CpuRefreshKind, MemoryRefreshKind, RefreshKind, System};

use crate::types::{HostIdentity, SystemSnapshot};

/// Collect every field of the report, one query at a time
///
/// Each query fails independently and is replaced by its fallback.
/// Blocks for [`cpu::CPU_SAMPLE_WINDOW`] while CPU usage is measured.
pub fn collect_snapshot() -> SystemSnapshot {
    let hostname = host::get_hostname();
    let address = network::get_local_ip();
    let username = host::get_username();
    let os = os::get_os_info();

    let mut sys = System::new_with_specifics(
        RefreshKind::new()
            .with_memory(MemoryRefreshKind::everything())
            .with_cpu(CpuRefreshKind::everything()),
    );
    let memory = memory::get_memory_info(&sys);
    let cpu = cpu::get_cpu_info(&sys);
    if cpu.is_none() {
        tracing::warn!("no CPU reported by the system");
    }
    let cpu_usage = cpu::sample_cpu_usage(&mut sys, cpu::CPU_SAMPLE_WINDOW);

    let disk_io = disk::get_disk_io_section();

    SystemSnapshot {
        host: HostIdentity { hostname, username },
        address,
        memory,
        os,
        cpu,
        cpu_usage,
        disk_io,
    }
}
