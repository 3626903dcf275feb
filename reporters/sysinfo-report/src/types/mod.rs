//! Data types for a host report

mod cpu;
mod disk;
mod host;
mod memory;
mod network;
mod os;
mod summary;

pub use cpu::*;
pub use disk::*;
pub use host::*;
pub use memory::*;
pub use network::*;
pub use os::*;
pub use summary::*;

/// Bytes in one gigabyte (binary, 1024³)
pub const BYTES_PER_GB: f64 = 1024.0 * 1024.0 * 1024.0;

/// Convert a byte count to gigabytes
pub fn bytes_to_gb(bytes: u64) -> f64 {
    bytes as f64 / BYTES_PER_GB
}
