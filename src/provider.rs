use anyhow::Context;
use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region, SdkConfig};
use aws_credential_types::provider::ProvideCredentials;
use aws_sdk_bedrockruntime::{Client, error::DisplayErrorContext, primitives::Blob};
use bytes::Bytes;

pub const DEFAULT_REGION: &str = "us-east-1";
pub const DEFAULT_MODEL_ID: &str = "anthropic.claude-3-haiku-20240307-v1:0";
pub const PAYLOAD_CONTENT_TYPE: &str = "application/json";

/// A hosted model endpoint that accepts a serialized request body and returns
/// the raw reply body.
#[async_trait]
pub trait ModelInvoker: Send + Sync {
    async fn invoke_model(
        &self,
        model_id: &str,
        content_type: &str,
        body: Vec<u8>,
    ) -> anyhow::Result<Bytes>;
}

/// `InvokeModel` on the Bedrock runtime API.
#[derive(Debug, Clone)]
pub struct BedrockInvoker {
    client: Client,
}

impl BedrockInvoker {
    /// Resolves region and credentials through the AWS default provider chain.
    pub async fn from_env(region: &str) -> anyhow::Result<Self> {
        let sdk_config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(region.to_string()))
            .load()
            .await;
        Self::from_sdk_config(&sdk_config).await
    }

    /// Fails unless the configured provider yields credentials right now.
    pub async fn from_sdk_config(sdk_config: &SdkConfig) -> anyhow::Result<Self> {
        let provider = sdk_config
            .credentials_provider()
            .context("no AWS credentials provider configured")?;
        provider
            .provide_credentials()
            .await
            .map_err(|e| {
                anyhow::anyhow!("unable to resolve AWS credentials: {}", DisplayErrorContext(e))
            })?;
        log::debug!("Loaded AWS config for region {:?}", sdk_config.region());
        Ok(Self {
            client: Client::new(sdk_config),
        })
    }
}

#[async_trait]
impl ModelInvoker for BedrockInvoker {
    async fn invoke_model(
        &self,
        model_id: &str,
        content_type: &str,
        body: Vec<u8>,
    ) -> anyhow::Result<Bytes> {
        let output = self
            .client
            .invoke_model()
            .model_id(model_id)
            .content_type(content_type)
            .accept(PAYLOAD_CONTENT_TYPE)
            .body(Blob::new(body))
            .send()
            .await
            .map_err(|e| anyhow::anyhow!("{}", DisplayErrorContext(e)))?;
        Ok(Bytes::from(output.body.into_inner()))
    }
}
