//! The `InvokeModel` client binding.
//!
//! [`ModelInvoker`] is the seam between the gateway and the network. The
//! production implementation, [`BedrockInvoker`], holds a runtime client
//! bound to one region and the static key pair it was built from. Changing
//! the region rebuilds the client from those same keys; the credential file
//! is never consulted again.

use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_bedrockruntime::Client;
use aws_sdk_bedrockruntime::config::retry::RetryConfig;
use aws_smithy_types::Blob;
use tokio::sync::RwLock;
use tracing::info;

use parley_core::credentials::Credentials;

use crate::error::BedrockError;

const PROVIDER_NAME: &str = "parley-credentials-file";

/// Transport for a single model call.
#[async_trait]
pub trait ModelInvoker: Send + Sync {
    /// Send a JSON request body to `model_id` and return the raw response body.
    async fn invoke_model(&self, model_id: &str, body: Vec<u8>) -> Result<Vec<u8>, BedrockError>;

    /// Rebind to `region`, keeping the current credentials.
    async fn rebind_region(&self, region: &str);

    /// The region calls currently go to.
    async fn region(&self) -> String;
}

struct RegionBinding {
    region: String,
    client: Client,
}

/// [`ModelInvoker`] backed by `aws-sdk-bedrockruntime`.
pub struct BedrockInvoker {
    credentials: Credentials,
    binding: RwLock<RegionBinding>,
}

impl BedrockInvoker {
    pub fn new(credentials: Credentials, region: &str) -> Self {
        let client = build_client(&credentials, region);
        info!(region, credentials = ?credentials, "bedrock client initialised");
        Self {
            credentials,
            binding: RwLock::new(RegionBinding {
                region: region.to_string(),
                client,
            }),
        }
    }
}

/// Build a runtime client from static keys.
///
/// SDK retries are disabled: one request is one attempt.
fn build_client(credentials: &Credentials, region: &str) -> Client {
    let config = aws_sdk_bedrockruntime::Config::builder()
        .behavior_version(BehaviorVersion::latest())
        .region(Region::new(region.to_string()))
        .credentials_provider(aws_sdk_bedrockruntime::config::Credentials::new(
            &credentials.access_key_id,
            &credentials.secret_access_key,
            None,
            None,
            PROVIDER_NAME,
        ))
        .retry_config(RetryConfig::disabled())
        .build();

    Client::from_conf(config)
}

#[async_trait]
impl ModelInvoker for BedrockInvoker {
    async fn invoke_model(&self, model_id: &str, body: Vec<u8>) -> Result<Vec<u8>, BedrockError> {
        // Client is a cheap handle; clone it so a rebind is not blocked for
        // the length of the round trip.
        let client = self.binding.read().await.client.clone();

        let response = client
            .invoke_model()
            .model_id(model_id)
            .content_type("application/json")
            .accept("application/json")
            .body(Blob::new(body))
            .send()
            .await?;

        Ok(response.body.into_inner())
    }

    async fn rebind_region(&self, region: &str) {
        let client = build_client(&self.credentials, region);
        let mut binding = self.binding.write().await;
        info!(from = %binding.region, to = region, "rebinding bedrock client region");
        binding.region = region.to_string();
        binding.client = client;
    }

    async fn region(&self) -> String {
        self.binding.read().await.region.clone()
    }
}
