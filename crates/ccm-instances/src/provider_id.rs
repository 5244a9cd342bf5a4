//! Provider-id codec.
//!
//! Kubernetes hands us an opaque `hcloud://<id>` string; everything
//! past the scheme is either a positive server id or the literal
//! `exclude` marker for nodes outside Hetzner management.

use crate::types::ServerKey;
use crate::{Error, Result};

const PROVIDER_PREFIX: &str = "hcloud://";
const EXCLUDED_MARKER: &str = "exclude";

/// Parse a provider id into a typed server key.
pub fn decode(provider_id: &str) -> Result<ServerKey> {
    let suffix = provider_id
        .strip_prefix(PROVIDER_PREFIX)
        .ok_or_else(|| Error::MalformedProviderId(provider_id.to_string()))?;

    if suffix == EXCLUDED_MARKER {
        return Ok(ServerKey::Excluded);
    }

    suffix
        .parse::<i64>()
        .ok()
        .filter(|id| *id > 0)
        .map(ServerKey::Server)
        .ok_or_else(|| Error::MalformedProviderId(provider_id.to_string()))
}

/// Build the provider id for a key; inverse of [`decode`].
pub fn encode(key: &ServerKey) -> String {
    match key {
        ServerKey::Excluded => format!("{PROVIDER_PREFIX}{EXCLUDED_MARKER}"),
        ServerKey::Server(id) => format!("{PROVIDER_PREFIX}{id}"),
    }
}
