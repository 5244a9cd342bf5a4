use serde::{Deserialize, Serialize};

/// Identity a provider id decodes to: either a real cloud/robot server
/// or the sentinel for nodes provisioned outside Hetzner entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServerKey {
    /// Node is intentionally outside cloud management (bare metal,
    /// manually added). Never corresponds to a backend id.
    Excluded,
    Server(i64),
}

/// Canonical server representation shared by both backends.
///
/// Built fresh on every resolution; nothing here is cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerRecord {
    pub id: i64,
    pub name: String,
    pub server_type: String,
    pub power: PowerState,
    pub public_ipv4: Option<String>,
    pub private_net: Vec<PrivateNet>,
}

/// A private-network attachment of a server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrivateNet {
    pub network_id: i64,
    pub ip: String,
}

/// Provider-reported power state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerState {
    On,
    Off,
    Unknown,
}

/// A cloud private network, as far as address aggregation cares.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Network {
    pub id: i64,
    pub name: String,
}

/// The slice of a Kubernetes node object the facade consumes.
#[derive(Debug, Clone)]
pub struct Node {
    pub name: String,
    pub provider_id: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum AddressType {
    Hostname,
    #[serde(rename = "ExternalIP")]
    ExternalIp,
    #[serde(rename = "InternalIP")]
    InternalIp,
}

/// One typed node address. The order addresses appear in is part of
/// the contract consumers rely on, not an implementation detail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeAddress {
    #[serde(rename = "type")]
    pub kind: AddressType,
    pub address: String,
}

impl NodeAddress {
    pub fn hostname(address: impl Into<String>) -> Self {
        Self {
            kind: AddressType::Hostname,
            address: address.into(),
        }
    }

    pub fn external_ip(address: impl Into<String>) -> Self {
        Self {
            kind: AddressType::ExternalIp,
            address: address.into(),
        }
    }

    pub fn internal_ip(address: impl Into<String>) -> Self {
        Self {
            kind: AddressType::InternalIp,
            address: address.into(),
        }
    }
}
