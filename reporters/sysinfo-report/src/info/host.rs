//! Hostname and current user lookup

use report_common::TolerateExt;

/// Get the hostname, or an empty string when it cannot be read
pub fn get_hostname() -> String {
    hostname::get()
        .map(|name| name.to_string_lossy().into_owned())
        .tolerate("hostname")
}

/// Get the current user's login name, or an empty string
pub fn get_username() -> String {
    whoami::fallible::username().tolerate("username")
}
