//! Disk I/O counter collection and the disk section of the report

use report_common::TolerateExt;
use thiserror::Error;

use crate::types::{bytes_to_gb, DiskIoCounters, DiskIoSection, DiskIoStats};

/// Shown when counters were read but no device reported any
pub const DISK_IO_UNAVAILABLE: &str = "Информация о вводе/выводе диска недоступна";

/// Prefix for the section text when counters could not be read
pub const DISK_IO_ERROR_PREFIX: &str = "Ошибка при получении данных о вводе/выводе диска";

/// Kernel counter source on Linux
pub const DISKSTATS_PATH: &str = "/proc/diskstats";

/// `/proc/diskstats` counts sectors in fixed 512-byte units
const SECTOR_SIZE: u64 = 512;

/// Lines shorter than this predate the modern diskstats layout
const MIN_DISKSTATS_FIELDS: usize = 14;

#[derive(Debug, Error)]
pub enum DiskIoError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid {field} counter for device {device}: {value:?}")]
    Parse {
        device: String,
        field: &'static str,
        value: String,
    },

    #[error("disk I/O counters are not supported on {0}")]
    Unsupported(&'static str),
}

/// Read cumulative per-device I/O counters
#[cfg(target_os = "linux")]
pub fn read_io_counters() -> Result<DiskIoStats, DiskIoError> {
    let content = std::fs::read_to_string(DISKSTATS_PATH).map_err(|source| DiskIoError::Read {
        path: DISKSTATS_PATH,
        source,
    })?;
    parse_diskstats(&content)
}

/// Read cumulative per-device I/O counters
#[cfg(not(target_os = "linux"))]
pub fn read_io_counters() -> Result<DiskIoStats, DiskIoError> {
    Err(DiskIoError::Unsupported(std::env::consts::OS))
}

/// Parse `/proc/diskstats` text
///
/// Field layout (0-based): 2 device, 3 reads completed, 5 sectors read,
/// 7 writes completed, 9 sectors written.
pub fn parse_diskstats(content: &str) -> Result<DiskIoStats, DiskIoError> {
    let mut stats = DiskIoStats::new();

    for line in content.lines() {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() < MIN_DISKSTATS_FIELDS {
            continue;
        }

        let device = fields[2];
        let counter = |index: usize, field: &'static str| {
            fields[index].parse::<u64>().map_err(|_| DiskIoError::Parse {
                device: device.to_string(),
                field,
                value: fields[index].to_string(),
            })
        };

        let counters = DiskIoCounters {
            read_count: counter(3, "reads completed")?,
            read_bytes: counter(5, "sectors read")?.saturating_mul(SECTOR_SIZE),
            write_count: counter(7, "writes completed")?,
            write_bytes: counter(9, "sectors written")?.saturating_mul(SECTOR_SIZE),
        };
        stats.insert(device.to_string(), counters);
    }

    Ok(stats)
}

/// Collect the disk section, keeping a read failure as its message
pub fn get_disk_io_section() -> DiskIoSection {
    disk_io_section(read_io_counters())
}

/// Turn a counter read result into the disk section
pub fn disk_io_section(counters: Result<DiskIoStats, DiskIoError>) -> DiskIoSection {
    counters
        .map(|devices| DiskIoSection::Devices { devices })
        .tolerate_with("disk I/O counters", |error| DiskIoSection::Failed { error })
}

/// Render the disk section: one line per device, or a fallback message
pub fn format_disk_io(section: &DiskIoSection) -> String {
    match section {
        DiskIoSection::Failed { error } => format!("{}: {}", DISK_IO_ERROR_PREFIX, error),
        DiskIoSection::Devices { devices } if devices.is_empty() => DISK_IO_UNAVAILABLE.to_string(),
        DiskIoSection::Devices { devices } => devices
            .iter()
            .map(|(device, io)| format_device_line(device, io))
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

fn format_device_line(device: &str, io: &DiskIoCounters) -> String {
    format!(
        "Устройство: {}, Чтение: {} операций ({} GB), Запись: {} операций ({} GB)",
        device,
        io.read_count,
        format_gb(bytes_to_gb(io.read_bytes)),
        io.write_count,
        format_gb(bytes_to_gb(io.write_bytes)),
    )
}

/// Shortest float text, switching to exponent form below 1e-4 and from 1e6
///
/// Exponents carry a sign and at least two digits (`4.76837158203125e-05`).
fn format_gb(value: f64) -> String {
    let scientific = format!("{:e}", value);
    let Some((mantissa, exp)) = scientific.split_once('e') else {
        return value.to_string();
    };
    let Ok(exp) = exp.parse::<i32>() else {
        return value.to_string();
    };

    if (-4..6).contains(&exp) {
        value.to_string()
    } else {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", mantissa, sign, exp.abs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
   8       0 sda 2048 10 4194304 900 1024 5 2097152 400 0 1200 1300 0 0 0 0
   8       1 sda1 100 0 800 10 0 0 0 0 0 10 10 0 0 0 0
   7       0 loop0 12 0 24
";

    #[test]
    fn test_parse_diskstats() {
        let stats = parse_diskstats(SAMPLE).unwrap();
        assert_eq!(stats.len(), 2);

        let sda = stats["sda"];
        assert_eq!(sda.read_count, 2048);
        assert_eq!(sda.read_bytes, 4194304 * 512);
        assert_eq!(sda.write_count, 1024);
        assert_eq!(sda.write_bytes, 2097152 * 512);

        assert_eq!(stats["sda1"].read_bytes, 800 * 512);
        assert!(!stats.contains_key("loop0"));
    }

    #[test]
    fn test_parse_diskstats_rejects_garbage_counter() {
        let line = "8 0 sda x 0 0 0 0 0 0 0 0 0 0 0\n";
        let err = parse_diskstats(line).unwrap_err();
        assert!(matches!(err, DiskIoError::Parse { ref device, .. } if device == "sda"));
        assert!(err.to_string().contains("reads completed"));
    }

    #[test]
    fn test_empty_devices_is_unavailable() {
        let section = DiskIoSection::Devices {
            devices: DiskIoStats::new(),
        };
        assert_eq!(format_disk_io(&section), DISK_IO_UNAVAILABLE);
    }

    #[test]
    fn test_device_line_converts_bytes_to_gb() {
        let mut devices = DiskIoStats::new();
        devices.insert(
            "nvme0n1".to_string(),
            DiskIoCounters {
                read_count: 42,
                write_count: 7,
                read_bytes: 2 * 1024 * 1024 * 1024,
                write_bytes: 512 * 1024 * 1024,
            },
        );

        let text = format_disk_io(&DiskIoSection::Devices { devices });
        assert_eq!(
            text,
            "Устройство: nvme0n1, Чтение: 42 операций (2 GB), Запись: 7 операций (0.5 GB)"
        );
    }

    #[test]
    fn test_one_line_per_device() {
        let stats = parse_diskstats(SAMPLE).unwrap();
        let text = format_disk_io(&DiskIoSection::Devices { devices: stats });
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Устройство: sda,"));
        assert!(lines[1].starts_with("Устройство: sda1,"));
    }

    #[test]
    fn test_format_gb_switches_to_exponent() {
        assert_eq!(format_gb(0.0), "0");
        assert_eq!(format_gb(0.5), "0.5");
        assert_eq!(format_gb(0.0001), "0.0001");
        assert_eq!(format_gb(123456.0), "123456");
        assert_eq!(format_gb(bytes_to_gb(51200)), "4.76837158203125e-05");
        assert_eq!(format_gb(bytes_to_gb(1 << 50)), "1.048576e+06");
        assert_eq!(format_gb(1.5e-120), "1.5e-120");
    }

    #[test]
    fn test_small_transfer_line_uses_exponent() {
        let mut devices = DiskIoStats::new();
        devices.insert(
            "sdb".to_string(),
            DiskIoCounters {
                read_count: 1,
                write_count: 0,
                read_bytes: 51200,
                write_bytes: 0,
            },
        );

        let text = format_disk_io(&DiskIoSection::Devices { devices });
        assert_eq!(
            text,
            "Устройство: sdb, Чтение: 1 операций (4.76837158203125e-05 GB), Запись: 0 операций (0 GB)"
        );
    }

    #[test]
    fn test_read_failure_becomes_failed_section() {
        let section = disk_io_section(Err(DiskIoError::Unsupported("plan9")));
        assert!(matches!(
            section,
            DiskIoSection::Failed { ref error } if error == "disk I/O counters are not supported on plan9"
        ));
    }

    #[test]
    fn test_read_success_keeps_devices() {
        let section = disk_io_section(parse_diskstats(SAMPLE));
        match section {
            DiskIoSection::Devices { devices } => assert_eq!(devices.len(), 2),
            other => panic!("unexpected section: {:?}", other),
        }
    }

    #[test]
    fn test_failure_embeds_error() {
        let section = DiskIoSection::Failed {
            error: DiskIoError::Unsupported("plan9").to_string(),
        };
        assert_eq!(
            format_disk_io(&section),
            "Ошибка при получении данных о вводе/выводе диска: disk I/O counters are not supported on plan9"
        );
    }
}
