use async_trait::async_trait;
use hrobot_api::{RobotClient, RobotServer};

use crate::types::{PowerState, ServerRecord};
use crate::{Error, Result, ServerLookup};

/// Secondary backend: the Hetzner Robot webservice for dedicated
/// servers not visible to the Cloud API.
///
/// Delegates to `hrobot_api::RobotClient` for all HTTP calls.
pub struct RobotBackend {
    client: RobotClient,
}

impl RobotBackend {
    /// Create from env vars: `HROBOT_USER` and `HROBOT_PASSWORD`
    /// (both required).
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let user =
            std::env::var("HROBOT_USER").map_err(|_| Error::MissingEnv("HROBOT_USER".into()))?;
        let password = std::env::var("HROBOT_PASSWORD")
            .map_err(|_| Error::MissingEnv("HROBOT_PASSWORD".into()))?;

        Ok(Self {
            client: RobotClient::new(user, password),
        })
    }

    pub fn new(client: RobotClient) -> Self {
        Self { client }
    }

    fn to_record(server: RobotServer) -> ServerRecord {
        // Robot has no power reporting; "ready" is the closest thing to
        // running, anything else is indeterminate. Dedicated servers
        // are therefore never reported as shut down.
        let power = if server.status == "ready" {
            PowerState::On
        } else {
            PowerState::Unknown
        };

        ServerRecord {
            id: server.server_number,
            name: server.server_name,
            server_type: server.product,
            power,
            public_ipv4: Some(server.server_ip),
            private_net: Vec::new(),
        }
    }
}

#[async_trait]
impl ServerLookup for RobotBackend {
    async fn server_by_id(&self, id: i64) -> Result<Option<ServerRecord>> {
        let server = self.client.get_server(id).await?;
        Ok(server.map(Self::to_record))
    }

    async fn server_by_name(&self, _name: &str) -> Result<Option<ServerRecord>> {
        // The Robot webservice cannot look servers up by name; answer
        // with a clean miss so the chain moves on.
        Ok(None)
    }

    fn name(&self) -> &'static str {
        "robot"
    }
}
