//! Host identity types

use serde::Serialize;

/// Who and where the report was taken
#[derive(Debug, Clone, Default, Serialize)]
pub struct HostIdentity {
    /// Hostname (empty when the lookup failed)
    pub hostname: String,
    /// Current OS user name (empty when the lookup failed)
    pub username: String,
}
