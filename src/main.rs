use bedrock_chat_relay::config;
use bedrock_chat_relay::io_struct::{
    DEFAULT_MAX_TOKENS, DEFAULT_TEMPERATURE, DEFAULT_TOP_P, GenerationParams,
};
use bedrock_chat_relay::logging::init_logging;
use bedrock_chat_relay::provider::{BedrockInvoker, DEFAULT_MODEL_ID, DEFAULT_REGION};
use bedrock_chat_relay::server::startup;
use bedrock_chat_relay::{RelayConfig, RelayState};
use clap::Parser;
use std::sync::Arc;

#[derive(Parser, Debug)]
#[command(name = "bedrock-chat-relay")]
#[command(about = "Relays chat messages to a Claude model hosted on AWS Bedrock")]
struct CliArgs {
    /// Host address to bind the server
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Port to bind; falls back to $PORT, then 8080
    #[arg(long)]
    port: Option<u16>,

    /// AWS region of the Bedrock runtime endpoint
    #[arg(long, env = "BEDROCK_REGION", default_value = DEFAULT_REGION)]
    region: String,

    /// Bedrock model identifier
    #[arg(long, env = "BEDROCK_MODEL_ID", default_value = DEFAULT_MODEL_ID)]
    model_id: String,

    /// Maximum number of tokens the model may generate per reply
    #[arg(long, default_value_t = DEFAULT_MAX_TOKENS)]
    max_tokens: u32,

    /// Sampling temperature (0.0-1.0)
    #[arg(long, default_value_t = DEFAULT_TEMPERATURE)]
    temperature: f64,

    /// Nucleus-sampling threshold (0.0-1.0)
    #[arg(long, default_value_t = DEFAULT_TOP_P)]
    top_p: f64,

    /// Maximum /chat request body size in bytes
    #[arg(long, default_value_t = config::DEFAULT_MAX_PAYLOAD_SIZE)]
    max_payload_size: usize,

    /// Log level, overridden by RUST_LOG
    #[arg(long, default_value = "info", value_parser = ["trace", "debug", "info", "warn", "error"])]
    log_level: String,
}

impl CliArgs {
    fn to_relay_config(&self) -> config::ConfigResult<RelayConfig> {
        let relay_config = RelayConfig {
            host: self.host.clone(),
            port: config::resolve_port(self.port)?,
            region: self.region.clone(),
            model_id: self.model_id.clone(),
            generation: GenerationParams {
                max_tokens: self.max_tokens,
                temperature: self.temperature,
                top_p: self.top_p,
                stop_sequences: Vec::new(),
            },
            max_payload_size: self.max_payload_size,
        };
        config::validate(&relay_config)?;
        Ok(relay_config)
    }
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let cli_args = CliArgs::parse();
    init_logging(&cli_args.log_level);

    let relay_config = cli_args.to_relay_config().inspect_err(|e| {
        log::error!("Invalid configuration: {}", e);
    })?;

    let invoker = BedrockInvoker::from_env(&relay_config.region)
        .await
        .inspect_err(|e| log::error!("Unable to load AWS config: {:#}", e))?;
    log::info!(
        "Using model {} in {}",
        relay_config.model_id,
        relay_config.region
    );

    let relay_state = RelayState::new(&relay_config, Arc::new(invoker));
    startup(relay_config, relay_state).await?;
    Ok(())
}
