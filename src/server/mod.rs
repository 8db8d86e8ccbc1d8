pub mod api;

use crate::cli::Args;
use crate::gateway::ChatGateway;
use std::error::Error;
use std::sync::Arc;

pub struct Server {
    addr: String,
    gateway: Arc<ChatGateway>,
    args: Args,
}

impl Server {
    pub fn new(addr: String, gateway: Arc<ChatGateway>, args: Args) -> Self {
        Self {
            addr,
            gateway,
            args,
        }
    }

    pub async fn run(&self) -> Result<(), Box<dyn Error + Send + Sync>> {
        api::start_http_server(&self.addr, self.gateway.clone(), &self.args).await
    }
}
