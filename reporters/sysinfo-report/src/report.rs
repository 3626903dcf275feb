//! Report formatting
//!
//! Renders a [`SystemSnapshot`] into the fixed plain-text template. Every
//! section header is written even when its data is missing.

use crate::info::disk::format_disk_io;
use crate::types::{bytes_to_gb, SystemSnapshot};

/// Shown on the CPU line when no CPU was reported
pub const CPU_UNAVAILABLE: &str = "информация недоступна";

/// Render the snapshot as report text
pub fn format_report(snapshot: &SystemSnapshot) -> String {
    let mut out = String::new();

    out.push_str(&format!("Имя пользователя: {}\n", snapshot.host.username));
    out.push_str(&format!("Имя компьютера: {}\n", snapshot.host.hostname));
    out.push_str(&format!("IP-адрес: {}\n", snapshot.address));
    out.push_str(&format!(
        "Общее количество ОЗУ: {:.2} GB\n",
        bytes_to_gb(snapshot.memory.total_bytes)
    ));
    out.push_str(&format!(
        "Используемое ОЗУ: {:.2} GB\n",
        bytes_to_gb(snapshot.memory.used_bytes)
    ));
    out.push_str(&format!(
        "Версия ОС: {}-{}\n",
        snapshot.os.platform, snapshot.os.version
    ));

    match &snapshot.cpu {
        Some(cpu) => out.push_str(&format!("CPU: {}, Ядер: {}\n", cpu.brand, cpu.cores())),
        None => out.push_str(&format!("CPU: {}\n", CPU_UNAVAILABLE)),
    }
    out.push_str(&format!(
        "Использование CPU: {:.2}%\n",
        snapshot.cpu_usage.global_usage_percent
    ));

    out.push_str("Информация о дисковом вводе/выводе:\n");
    out.push_str(&format_disk_io(&snapshot.disk_io));
    out.push('\n');

    out
}
