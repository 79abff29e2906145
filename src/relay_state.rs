use crate::error::{RelayError, RelayResult};
use crate::io_struct::{
    ChatRequest, ChatResponse, GenerationParams, InferenceRequest, InferenceResponse,
};
use crate::provider::{ModelInvoker, PAYLOAD_CONTENT_TYPE};
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct RelayConfig {
    pub host: String,
    pub port: u16,
    pub region: String,
    pub model_id: String,
    pub generation: GenerationParams,
    /// Upper bound on an inbound `/chat` body, in bytes.
    pub max_payload_size: usize,
}

/// Shared by every worker. Nothing in here is mutated after startup.
#[derive(Clone)]
pub struct RelayState {
    pub invoker: Arc<dyn ModelInvoker>,
    pub model_id: String,
    pub generation: GenerationParams,
}

impl RelayState {
    pub fn new(config: &RelayConfig, invoker: Arc<dyn ModelInvoker>) -> Self {
        Self {
            invoker,
            model_id: config.model_id.clone(),
            generation: config.generation.clone(),
        }
    }

    pub async fn chat(&self, req: ChatRequest) -> RelayResult<ChatResponse> {
        let payload = InferenceRequest::single_turn(&req.message, &self.generation).to_payload()?;
        let body = self.invoke(payload).await?;
        let response = InferenceResponse::from_slice(&body)?.into_first_text()?;
        Ok(ChatResponse { response })
    }

    /// The call is spawned so it runs to completion even if the client hangs up
    /// and the handler future is dropped.
    async fn invoke(&self, payload: Vec<u8>) -> RelayResult<bytes::Bytes> {
        let invoker = self.invoker.clone();
        let model_id = self.model_id.clone();
        let task = tokio::spawn(async move {
            invoker
                .invoke_model(&model_id, PAYLOAD_CONTENT_TYPE, payload)
                .await
        });
        let result = match task.await {
            Ok(result) => result,
            Err(e) => Err(anyhow::Error::new(e).context("model invocation task failed")),
        };
        result.map_err(|e| {
            log::error!("Bedrock API error: {:#}", e);
            RelayError::Provider(e)
        })
    }
}

impl std::fmt::Debug for RelayState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RelayState")
            .field("model_id", &self.model_id)
            .field("generation", &self.generation)
            .finish_non_exhaustive()
    }
}
