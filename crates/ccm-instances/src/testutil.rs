//! Shared mock collaborators for unit tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::inventory::{Host, Inventory};
use crate::types::{Network, PowerState, PrivateNet, ServerRecord};
use crate::{Error, NetworkLookup, Result, ServerLookup};

pub(crate) fn sample_server(id: i64) -> ServerRecord {
    ServerRecord {
        id,
        name: format!("node-{id}"),
        server_type: "cpx21".into(),
        power: PowerState::On,
        public_ipv4: Some("203.0.113.5".into()),
        private_net: Vec::new(),
    }
}

pub(crate) fn sample_server_with_net(
    name: &str,
    public_ipv4: &str,
    network_id: i64,
    private_ip: &str,
) -> ServerRecord {
    ServerRecord {
        id: 1,
        name: name.into(),
        server_type: "cpx21".into(),
        power: PowerState::On,
        public_ipv4: Some(public_ipv4.into()),
        private_net: vec![PrivateNet {
            network_id,
            ip: private_ip.into(),
        }],
    }
}

pub(crate) fn inventory_with(hostname: &str, vars: &[(&str, &str)]) -> Inventory {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    Inventory {
        hosts: HashMap::from([(hostname.to_string(), Host { vars })]),
    }
}

/// `ServerLookup` double with canned answers and call counting.
pub(crate) struct MockBackend {
    name: &'static str,
    server: Option<ServerRecord>,
    fail: bool,
    id_calls: AtomicUsize,
    name_calls: AtomicUsize,
}

impl MockBackend {
    pub(crate) fn found(name: &'static str, server: ServerRecord) -> Self {
        Self {
            name,
            server: Some(server),
            fail: false,
            id_calls: AtomicUsize::new(0),
            name_calls: AtomicUsize::new(0),
        }
    }

    pub(crate) fn missing(name: &'static str) -> Self {
        Self {
            name,
            server: None,
            fail: false,
            id_calls: AtomicUsize::new(0),
            name_calls: AtomicUsize::new(0),
        }
    }

    pub(crate) fn failing(name: &'static str) -> Self {
        Self {
            name,
            server: None,
            fail: true,
            id_calls: AtomicUsize::new(0),
            name_calls: AtomicUsize::new(0),
        }
    }

    pub(crate) fn id_calls(&self) -> usize {
        self.id_calls.load(Ordering::SeqCst)
    }

    pub(crate) fn name_calls(&self) -> usize {
        self.name_calls.load(Ordering::SeqCst)
    }

    fn answer(&self) -> Result<Option<ServerRecord>> {
        if self.fail {
            return Err(Error::HcloudApi("backend unavailable".into()));
        }
        Ok(self.server.clone())
    }
}

#[async_trait]
impl ServerLookup for MockBackend {
    async fn server_by_id(&self, _id: i64) -> Result<Option<ServerRecord>> {
        self.id_calls.fetch_add(1, Ordering::SeqCst);
        self.answer()
    }

    async fn server_by_name(&self, _name: &str) -> Result<Option<ServerRecord>> {
        self.name_calls.fetch_add(1, Ordering::SeqCst);
        self.answer()
    }

    fn name(&self) -> &'static str {
        self.name
    }
}

/// `NetworkLookup` double with canned answers and call counting.
pub(crate) struct MockNetworks {
    network: Option<Network>,
    fail: bool,
    calls: AtomicUsize,
}

impl MockNetworks {
    pub(crate) fn found(network: Network) -> Self {
        Self {
            network: Some(network),
            fail: false,
            calls: AtomicUsize::new(0),
        }
    }

    pub(crate) fn missing() -> Self {
        Self {
            network: None,
            fail: false,
            calls: AtomicUsize::new(0),
        }
    }

    pub(crate) fn failing() -> Self {
        Self {
            network: None,
            fail: true,
            calls: AtomicUsize::new(0),
        }
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl NetworkLookup for MockNetworks {
    async fn network_by_name(&self, _name: &str) -> Result<Option<Network>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(Error::HcloudApi("network lookup unavailable".into()));
        }
        Ok(self.network.clone())
    }
}
