use async_trait::async_trait;
use hcloud::apis::configuration::Configuration;
use hcloud::apis::{networks_api, servers_api};
use hcloud::models;

use crate::types::{Network, PowerState, PrivateNet, ServerRecord};
use crate::{Error, NetworkLookup, Result, ServerLookup};

/// Primary backend: the Hetzner Cloud API via the `hcloud` crate.
///
/// All configuration is loaded from environment variables via `from_env()`.
pub struct CloudBackend {
    config: Configuration,
}

impl CloudBackend {
    /// Create from env vars: `HCLOUD_TOKEN` (required).
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let token =
            std::env::var("HCLOUD_TOKEN").map_err(|_| Error::MissingEnv("HCLOUD_TOKEN".into()))?;

        let mut config = Configuration::new();
        config.bearer_access_token = Some(token);

        Ok(Self { config })
    }

    pub fn new(config: Configuration) -> Self {
        Self { config }
    }

    fn parse_power(status: &models::server::Status) -> PowerState {
        match status {
            models::server::Status::Running
            | models::server::Status::Initializing
            | models::server::Status::Starting => PowerState::On,
            models::server::Status::Off => PowerState::Off,
            _ => PowerState::Unknown,
        }
    }

    fn to_record(server: models::Server) -> ServerRecord {
        let power = Self::parse_power(&server.status);
        let public_ipv4 = server.public_net.ipv4.map(|v4| v4.ip);
        let private_net = server
            .private_net
            .into_iter()
            .filter_map(|net| match (net.network, net.ip) {
                (Some(network_id), Some(ip)) => Some(PrivateNet { network_id, ip }),
                _ => None,
            })
            .collect();

        ServerRecord {
            id: server.id,
            name: server.name,
            server_type: server.server_type.name,
            power,
            public_ipv4,
            private_net,
        }
    }

    fn is_not_found<T>(err: &hcloud::apis::Error<T>) -> bool {
        matches!(
            err,
            hcloud::apis::Error::ResponseError(resp) if resp.status.as_u16() == 404
        )
    }
}

#[async_trait]
impl ServerLookup for CloudBackend {
    async fn server_by_id(&self, id: i64) -> Result<Option<ServerRecord>> {
        match servers_api::get_server(&self.config, servers_api::GetServerParams { id }).await {
            Ok(resp) => Ok(resp.server.map(|server| Self::to_record(*server))),
            Err(ref e) if Self::is_not_found(e) => Ok(None),
            Err(e) => Err(Error::HcloudApi(format!("get server: {e}"))),
        }
    }

    async fn server_by_name(&self, name: &str) -> Result<Option<ServerRecord>> {
        let resp = servers_api::list_servers(
            &self.config,
            servers_api::ListServersParams {
                name: Some(name.to_string()),
                ..Default::default()
            },
        )
        .await
        .map_err(|e| Error::HcloudApi(format!("list servers: {e}")))?;

        Ok(resp.servers.into_iter().next().map(Self::to_record))
    }

    fn name(&self) -> &'static str {
        "hcloud"
    }
}

#[async_trait]
impl NetworkLookup for CloudBackend {
    async fn network_by_name(&self, name: &str) -> Result<Option<Network>> {
        let resp = networks_api::list_networks(
            &self.config,
            networks_api::ListNetworksParams {
                name: Some(name.to_string()),
                ..Default::default()
            },
        )
        .await
        .map_err(|e| Error::HcloudApi(format!("list networks: {e}")))?;

        Ok(resp.networks.into_iter().next().map(|net| Network {
            id: net.id,
            name: net.name,
        }))
    }
}
