pub mod addresses;
pub mod cloud;
pub mod instances;
pub mod inventory;
pub mod lookup;
pub mod provider_id;
pub mod robot;
pub mod types;

#[cfg(test)]
pub(crate) mod testutil;

use async_trait::async_trait;

pub use addresses::AddressAggregator;
pub use instances::Instances;
pub use inventory::Inventory;
pub use lookup::LookupChain;
pub use types::{
    AddressType, Network, Node, NodeAddress, PowerState, PrivateNet, ServerKey, ServerRecord,
};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("malformed provider id: {0:?}")]
    MalformedProviderId(String),

    #[error("instance not found: {0}")]
    InstanceNotFound(String),

    #[error("hcloud api error: {0}")]
    HcloudApi(String),

    #[error("robot api error: {0}")]
    Robot(#[from] hrobot_api::Error),

    #[error("inventory error: {0}")]
    Inventory(String),

    #[error("missing env var: {0}")]
    MissingEnv(String),

    #[error("not implemented")]
    NotImplemented,
}

pub type Result<T> = std::result::Result<T, Error>;

/// Backend-agnostic server lookup.
///
/// `Ok(None)` is the one and only "no such server" signal: both
/// backends map their native 404/empty-list responses onto it, so the
/// chain never has to guess whether an error means absence.
#[async_trait]
pub trait ServerLookup: Send + Sync + 'static {
    /// Resolve a server by its numeric id.
    async fn server_by_id(&self, id: i64) -> Result<Option<ServerRecord>>;

    /// Resolve a server by its name. Backends without name lookup
    /// answer with a clean miss.
    async fn server_by_name(&self, name: &str) -> Result<Option<ServerRecord>>;

    /// Backend identifier, used in log output.
    fn name(&self) -> &'static str;
}

/// Private-network resolution, needed only for address aggregation.
#[async_trait]
pub trait NetworkLookup: Send + Sync + 'static {
    async fn network_by_name(&self, name: &str) -> Result<Option<Network>>;
}
