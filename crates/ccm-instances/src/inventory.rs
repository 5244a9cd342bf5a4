use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use crate::{Error, Result};

/// Static hostname-to-variables inventory, maintained outside the
/// cluster (typically exported from Ansible). Read-only after load.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Inventory {
    pub hosts: HashMap<String, Host>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Host {
    pub vars: HashMap<String, String>,
}

impl Inventory {
    /// Load an inventory from a JSON file of the shape
    /// `{"hosts": {"node-1": {"vars": {"private_ip": "10.0.0.9"}}}}`.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| Error::Inventory(format!("read {}: {e}", path.display())))?;
        serde_json::from_str(&raw)
            .map_err(|e| Error::Inventory(format!("parse {}: {e}", path.display())))
    }

    /// Variable value for a host, if both exist.
    pub fn var(&self, hostname: &str, var_name: &str) -> Option<&str> {
        self.hosts
            .get(hostname)
            .and_then(|host| host.vars.get(var_name))
            .map(String::as_str)
    }
}
