//! Node address aggregation.
//!
//! A resolved server expands into an ordered address list: hostname,
//! public IPv4, then internal IPs from the configured private network
//! and the static inventory. The two enrichment stages are independent
//! and degrade to nothing on any failure; only their concatenation
//! order is fixed.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::inventory::Inventory;
use crate::types::{NodeAddress, ServerRecord};
use crate::NetworkLookup;

pub struct AddressAggregator {
    networks: Arc<dyn NetworkLookup>,
    network_name: Option<String>,
    inventory: Option<Inventory>,
    inventory_vars: Vec<String>,
}

impl AddressAggregator {
    pub fn new(
        networks: Arc<dyn NetworkLookup>,
        network_name: Option<String>,
        inventory: Option<Inventory>,
        inventory_vars: Vec<String>,
    ) -> Self {
        Self {
            networks,
            network_name,
            inventory,
            inventory_vars,
        }
    }

    /// Expand a server record into its ordered address list.
    pub async fn node_addresses(&self, server: &ServerRecord) -> Vec<NodeAddress> {
        let mut addresses = vec![NodeAddress::hostname(&server.name)];
        if let Some(ip) = &server.public_ipv4 {
            addresses.push(NodeAddress::external_ip(ip));
        }
        addresses.extend(self.network_addresses(server).await);
        addresses.extend(self.inventory_addresses(&server.name));
        addresses
    }

    /// Private IPs on the configured cloud network, in attachment order.
    async fn network_addresses(&self, server: &ServerRecord) -> Vec<NodeAddress> {
        let Some(name) = self.network_name.as_deref() else {
            return Vec::new();
        };

        let network = match self.networks.network_by_name(name).await {
            Ok(Some(network)) => network,
            Ok(None) => {
                debug!(network = name, "configured network not found, skipping");
                return Vec::new();
            }
            Err(e) => {
                warn!(network = name, error = %e, "network resolution failed, skipping");
                return Vec::new();
            }
        };

        server
            .private_net
            .iter()
            .filter(|net| net.network_id == network.id)
            .map(|net| NodeAddress::internal_ip(&net.ip))
            .collect()
    }

    /// Inventory-supplied IPs for the host, in configured var order.
    fn inventory_addresses(&self, hostname: &str) -> Vec<NodeAddress> {
        let Some(inventory) = &self.inventory else {
            return Vec::new();
        };

        self.inventory_vars
            .iter()
            .filter_map(|var_name| inventory.var(hostname, var_name))
            .map(NodeAddress::internal_ip)
            .collect()
    }
}
