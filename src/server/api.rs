use crate::cli::Args;
use crate::gateway::{ ChatGateway, GatewayError };
use crate::models::chat::{ ChatRequest, ChatResponse, ErrorResponse };
use std::error::Error;
use std::net::SocketAddr;
use std::sync::Arc;
use axum::{
    routing::{get, post},
    Router,
    extract::State,
    response::IntoResponse,
    http::StatusCode,
    Json,
};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use log::{info, error, debug};
use uuid::Uuid;

#[derive(Serialize)]
struct StatusResponse {
    status: &'static str,
}

#[derive(Clone)]
pub struct AppState {
    pub gateway: Arc<ChatGateway>,
}

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(status_handler))
        .route("/chat", post(chat_handler))
        .layer(cors)
        .with_state(state)
}

pub async fn start_http_server(
    addr_str: &str,
    gateway: Arc<ChatGateway>,
    args: &Args,
) -> Result<(), Box<dyn Error + Send + Sync>> {
    let addr = addr_str.parse::<SocketAddr>()?;
    let app = router(AppState { gateway });

    if args.enable_tls {
        if let (Some(cert_path), Some(key_path)) = (&args.tls_cert_path, &args.tls_key_path) {
            let tls_config = axum_server::tls_rustls::RustlsConfig::from_pem_file(
                cert_path,
                key_path
            ).await?;

            info!("Starting HTTPS server on: https://{}", addr);
            axum_server::bind_rustls(addr, tls_config)
                .serve(app.into_make_service())
                .await?;
            return Ok(());
        }
        error!("TLS enabled but --tls-cert-path/--tls-key-path missing, falling back to HTTP");
    }

    info!("Starting HTTP server on: http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}

async fn chat_handler(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> impl IntoResponse {
    let request_id = Uuid::new_v4();
    debug!("[{}] /chat with {} message(s)", request_id, request.messages.len());

    match state.gateway.handle(request).await {
        Ok(reply) => (StatusCode::OK, Json(ChatResponse { reply: reply.text })).into_response(),
        Err(err @ GatewayError::Validation(_)) => {
            debug!("[{}] rejected: {}", request_id, err);
            (StatusCode::BAD_REQUEST, Json(ErrorResponse {
                detail: err.to_string(),
            })).into_response()
        }
        Err(err @ GatewayError::Backend(_)) => {
            error!("[{}] backend failure: {}", request_id, err);
            (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorResponse {
                detail: err.to_string(),
            })).into_response()
        }
    }
}

async fn status_handler() -> impl IntoResponse {
    Json(StatusResponse { status: "ok" })
}
