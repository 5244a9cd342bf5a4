//! Public instance queries, composing the codec, the lookup chain and
//! the address aggregator.

use std::env;
use std::sync::Arc;

use tracing::{debug, info};

use crate::addresses::AddressAggregator;
use crate::cloud::CloudBackend;
use crate::inventory::Inventory;
use crate::lookup::LookupChain;
use crate::provider_id;
use crate::robot::RobotBackend;
use crate::types::{Node, NodeAddress, PowerState, ServerKey, ServerRecord};
use crate::{Error, Result, ServerLookup};

pub struct Instances {
    chain: LookupChain,
    aggregator: AddressAggregator,
}

impl Instances {
    pub fn new(chain: LookupChain, aggregator: AddressAggregator) -> Self {
        Self { chain, aggregator }
    }

    /// Wire up the real backends from env vars.
    ///
    /// The cloud backend is required; the robot fallback is registered
    /// only when its credentials are present. Optional address
    /// enrichment comes from `HCLOUD_NETWORK`, `INVENTORY_PATH` and
    /// `INVENTORY_ADDRESS_VARS`.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let cloud = Arc::new(CloudBackend::from_env()?);

        let mut backends: Vec<Arc<dyn ServerLookup>> = vec![cloud.clone() as Arc<dyn ServerLookup>];
        match RobotBackend::from_env() {
            Ok(robot) => {
                info!("registered robot fallback backend");
                backends.push(Arc::new(robot));
            }
            Err(e) => debug!("skipping robot backend: {e}"),
        }

        let network_name = env::var("HCLOUD_NETWORK").ok().filter(|s| !s.is_empty());

        let inventory = match env::var("INVENTORY_PATH") {
            Ok(path) => Some(Inventory::from_path(&path)?),
            Err(_) => None,
        };
        let inventory_vars =
            parse_inventory_vars(&env::var("INVENTORY_ADDRESS_VARS").unwrap_or_default());

        let aggregator = AddressAggregator::new(cloud, network_name, inventory, inventory_vars);
        Ok(Self::new(LookupChain::new(backends), aggregator))
    }

    /// Resolve a provider id to a record; the excluded sentinel and a
    /// clean backend miss both come back as `None`.
    async fn resolve_provider_id(&self, provider_id: &str) -> Result<Option<ServerRecord>> {
        match provider_id::decode(provider_id)? {
            ServerKey::Excluded => Ok(None),
            ServerKey::Server(id) => self.chain.by_id(id).await,
        }
    }

    pub async fn node_addresses_by_provider_id(
        &self,
        provider_id: &str,
    ) -> Result<Vec<NodeAddress>> {
        let server = self
            .resolve_provider_id(provider_id)
            .await?
            .ok_or_else(|| Error::InstanceNotFound(provider_id.to_string()))?;
        Ok(self.aggregator.node_addresses(&server).await)
    }

    pub async fn node_addresses(&self, node_name: &str) -> Result<Vec<NodeAddress>> {
        let server = self
            .chain
            .by_name(node_name)
            .await?
            .ok_or_else(|| Error::InstanceNotFound(node_name.to_string()))?;
        Ok(self.aggregator.node_addresses(&server).await)
    }

    /// Textual numeric id of the server backing a node.
    pub async fn instance_id(&self, node_name: &str) -> Result<String> {
        let server = self
            .chain
            .by_name(node_name)
            .await?
            .ok_or_else(|| Error::InstanceNotFound(node_name.to_string()))?;
        Ok(server.id.to_string())
    }

    pub async fn instance_type(&self, node_name: &str) -> Result<String> {
        let server = self
            .chain
            .by_name(node_name)
            .await?
            .ok_or_else(|| Error::InstanceNotFound(node_name.to_string()))?;
        Ok(server.server_type)
    }

    pub async fn instance_type_by_provider_id(&self, provider_id: &str) -> Result<String> {
        let server = self
            .resolve_provider_id(provider_id)
            .await?
            .ok_or_else(|| Error::InstanceNotFound(provider_id.to_string()))?;
        Ok(server.server_type)
    }

    /// Whether the backing server still exists. Excluded nodes are
    /// managed out of band and always count as existing.
    pub async fn instance_exists_by_provider_id(&self, provider_id: &str) -> Result<bool> {
        match provider_id::decode(provider_id)? {
            ServerKey::Excluded => Ok(true),
            ServerKey::Server(id) => Ok(self.chain.by_id(id).await?.is_some()),
        }
    }

    pub async fn instance_exists(&self, node: &Node) -> Result<bool> {
        self.instance_exists_by_provider_id(&node.provider_id).await
    }

    /// Whether the backing server is powered off. Excluded nodes are
    /// never reported shut down; neither is a server no backend knows.
    pub async fn instance_shutdown_by_provider_id(&self, provider_id: &str) -> Result<bool> {
        match provider_id::decode(provider_id)? {
            ServerKey::Excluded => Ok(false),
            ServerKey::Server(id) => Ok(self
                .chain
                .by_id(id)
                .await?
                .is_some_and(|server| server.power == PowerState::Off)),
        }
    }

    pub async fn instance_shutdown(&self, node: &Node) -> Result<bool> {
        self.instance_shutdown_by_provider_id(&node.provider_id)
            .await
    }

    /// The node name for a kubelet hostname is the hostname itself.
    pub fn current_node_name(&self, hostname: &str) -> Result<String> {
        Ok(hostname.to_string())
    }

    /// Bulk SSH key injection is deliberately unsupported.
    pub fn add_ssh_key_to_all_instances(&self, _user: &str, _key_data: &[u8]) -> Result<()> {
        Err(Error::NotImplemented)
    }
}

fn parse_inventory_vars(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
