pub mod cli;
pub mod gateway;
pub mod llm;
pub mod models;
pub mod server;

use cli::Args;
use gateway::ChatGateway;
use llm::{ BackendConfig, BackendType, GenerationDefaults };
use llm::chat::new_backend;
use log::info;
use server::Server;
use std::error::Error;
use std::sync::Arc;

pub async fn run(args: Args) -> Result<(), Box<dyn Error + Send + Sync>> {
    info!("--- Core Configuration ---");
    info!("Server Address: {}", args.server_addr);
    info!("Chat Backend Type: {}", args.chat_backend);
    if let Some(url) = &args.chat_base_url {
        info!("Chat Backend Base URL: {}", url);
    }
    info!("Default Model: {}", args.chat_model);
    info!("Default Temperature: {}", args.chat_temperature);
    info!("TLS Enabled: {}", args.enable_tls);
    info!("-------------------------");

    let backend_type = args.chat_backend.parse::<BackendType>()?;
    let api_key = if args.chat_api_key.is_empty() {
        None
    } else {
        Some(args.chat_api_key.clone())
    };
    let backend = new_backend(&BackendConfig {
        backend_type,
        api_key,
        base_url: args.chat_base_url.clone(),
    });

    let defaults = GenerationDefaults {
        model: args.chat_model.clone(),
        temperature: args.chat_temperature,
    };
    let gateway = Arc::new(ChatGateway::new(backend, defaults));

    let addr = args.server_addr.clone();
    info!("Starting server on: {}", addr);
    let server = Server::new(addr, gateway, args);
    server.run().await?;

    Ok(())
}
