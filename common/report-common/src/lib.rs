//! Report Common - Shared utilities for host reporters
//!
//! This crate provides common functionality used by the reporter binaries:
//!
//! - **Initialization**: [`init_tracing`] for stderr logging with `RUST_LOG` filtering
//! - **Fallbacks**: [`TolerateExt`] for turning a failed query into a logged default
//!
//! # Example
//!
//! ```rust,ignore
//! use report_common::{init_tracing, TolerateExt};
//!
//! init_tracing("my_reporter")?;
//! let hostname = hostname::get()
//!     .map(|h| h.to_string_lossy().into_owned())
//!     .tolerate("hostname");
//! ```

pub mod fallback;
pub mod init;

// Re-export commonly used items at crate root
pub use fallback::TolerateExt;
pub use init::init_tracing;
