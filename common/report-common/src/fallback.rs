//! Fallback handling for independently fallible queries
//!
//! Every field of a host report is collected on its own. A failure is logged
//! and replaced by a fallback value so the rest of the collection proceeds.

use std::fmt::Display;

/// Extension trait for Result types that should never abort collection
///
/// # Example
///
/// ```rust,ignore
/// use report_common::TolerateExt;
///
/// let user = whoami::fallible::username().tolerate("username");
/// let counters = std::fs::read_to_string("/proc/diskstats")
///     .tolerate_with("disk I/O counters", |error| format!("unavailable: {}", error));
/// ```
pub trait TolerateExt<T> {
    /// Return the value, or `T::default()` after logging the error
    fn tolerate(self, field: &str) -> T
    where
        T: Default;

    /// Return the value, or the fallback built from the error message
    fn tolerate_with<F>(self, field: &str, fallback: F) -> T
    where
        F: FnOnce(String) -> T;
}

impl<T, E: Display> TolerateExt<T> for Result<T, E> {
    fn tolerate(self, field: &str) -> T
    where
        T: Default,
    {
        self.tolerate_with(field, |_| T::default())
    }

    fn tolerate_with<F>(self, field: &str, fallback: F) -> T
    where
        F: FnOnce(String) -> T,
    {
        match self {
            Ok(value) => value,
            Err(e) => {
                let message = e.to_string();
                tracing::warn!(field, error = %message, "query failed, using fallback");
                fallback(message)
            }
        }
    }
}
