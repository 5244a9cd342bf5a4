use serde::Deserialize;

// ── Server types ─────────────────────────────────────────────────────

/// Wrapper object the Robot webservice puts around every server.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerEnvelope {
    pub server: RobotServer,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RobotServer {
    pub server_number: i64,
    pub server_name: String,
    /// Primary public IPv4 of the server.
    pub server_ip: String,
    pub product: String,
    /// Datacenter, e.g. `"FSN1-DC8"`.
    pub dc: String,
    /// `"ready"` or `"in process"`.
    pub status: String,
    pub cancelled: bool,
    pub paid_until: Option<String>,
}
