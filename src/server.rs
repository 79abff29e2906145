use crate::error::RelayError;
use crate::io_struct::ChatRequest;
use crate::relay_state::{RelayConfig, RelayState};
use actix_web::{HttpRequest, HttpResponse, HttpServer, error, get, post, web};

#[get("/health")]
pub async fn health(_req: HttpRequest) -> HttpResponse {
    HttpResponse::Ok().body("Ok")
}

#[post("/chat")]
pub async fn chat(
    req: web::Json<ChatRequest>,
    app_state: web::Data<RelayState>,
) -> Result<HttpResponse, RelayError> {
    let resp = app_state.chat(req.into_inner()).await?;
    Ok(HttpResponse::Ok().json(resp))
}

// Every body that does not decode into a ChatRequest gets the same 400.
fn json_error_handler(err: error::JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    log::debug!("Rejected chat payload: {}", err);
    RelayError::InvalidRequest(err.to_string()).into()
}

/// Body decoding for `/chat`. The content type is not checked.
pub fn json_config(max_payload_size: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(max_payload_size)
        .content_type_required(false)
        .error_handler(json_error_handler)
}

pub fn configure(cfg: &mut web::ServiceConfig, max_payload_size: usize) {
    cfg.app_data(json_config(max_payload_size))
        .app_data(web::PayloadConfig::default().limit(max_payload_size))
        .service(health)
        .service(chat);
}

pub async fn startup(relay_config: RelayConfig, relay_state: RelayState) -> std::io::Result<()> {
    let app_state = web::Data::new(relay_state);
    let max_payload_size = relay_config.max_payload_size;

    log::info!(
        "Server listening on {}:{}",
        relay_config.host,
        relay_config.port
    );

    HttpServer::new(move || {
        actix_web::App::new()
            .wrap(actix_web::middleware::Logger::default())
            .app_data(app_state.clone())
            .configure(|cfg| configure(cfg, max_payload_size))
    })
    .bind((relay_config.host, relay_config.port))?
    .run()
    .await
}
