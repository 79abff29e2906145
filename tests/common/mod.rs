// Shared by the integration tests
#![allow(dead_code)]

pub mod mock_invoker;

use actix_web::{App, dev::ServiceResponse, test, web};
use bedrock_chat_relay::config::DEFAULT_MAX_PAYLOAD_SIZE;
use bedrock_chat_relay::io_struct::GenerationParams;
use bedrock_chat_relay::server::configure;
use bedrock_chat_relay::{RelayConfig, RelayState};
use mock_invoker::MockInvoker;
use std::sync::Arc;

pub const TEST_MODEL_ID: &str = "anthropic.claude-3-haiku-20240307-v1:0";

pub fn test_config() -> RelayConfig {
    RelayConfig {
        host: "127.0.0.1".to_string(),
        port: 8080,
        region: "us-east-1".to_string(),
        model_id: TEST_MODEL_ID.to_string(),
        generation: GenerationParams::default(),
        max_payload_size: DEFAULT_MAX_PAYLOAD_SIZE,
    }
}

/// Sends one request through the real route table backed by `invoker`.
pub async fn send(invoker: Arc<MockInvoker>, req: test::TestRequest) -> ServiceResponse {
    send_with(test_config(), invoker, req).await
}

pub async fn send_with(
    config: RelayConfig,
    invoker: Arc<MockInvoker>,
    req: test::TestRequest,
) -> ServiceResponse {
    let state = RelayState::new(&config, invoker);
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .configure(|cfg| configure(cfg, config.max_payload_size)),
    )
    .await;
    test::call_service(&app, req.to_request()).await
}
