//! Ordered backend lookup.
//!
//! Backends are tried in registration order until one yields a server;
//! a clean miss from every backend is `Ok(None)`. Adding another
//! backend later is one more entry in the vec, nothing else.

use std::sync::Arc;

use tracing::debug;

use crate::types::ServerRecord;
use crate::{Result, ServerLookup};

pub struct LookupChain {
    backends: Vec<Arc<dyn ServerLookup>>,
}

impl LookupChain {
    pub fn new(backends: Vec<Arc<dyn ServerLookup>>) -> Self {
        Self { backends }
    }

    /// Resolve a server by numeric id, first hit wins.
    ///
    /// Transport or auth errors propagate immediately; a later backend
    /// is only consulted after an earlier one cleanly missed.
    pub async fn by_id(&self, id: i64) -> Result<Option<ServerRecord>> {
        for backend in &self.backends {
            if let Some(server) = backend.server_by_id(id).await? {
                debug!(backend = backend.name(), server_id = id, "server resolved");
                return Ok(Some(server));
            }
        }
        debug!(server_id = id, "server not found in any backend");
        Ok(None)
    }

    /// Resolve a server by name, first hit wins.
    pub async fn by_name(&self, name: &str) -> Result<Option<ServerRecord>> {
        for backend in &self.backends {
            if let Some(server) = backend.server_by_name(name).await? {
                debug!(backend = backend.name(), server_name = name, "server resolved");
                return Ok(Some(server));
            }
        }
        debug!(server_name = name, "server not found in any backend");
        Ok(None)
    }
}
