use std::{env, net::SocketAddr};

use hrpc::BoxError;
use tracing_subscriber::{prelude::*, EnvFilter};

/// Address the server listens on when `SERVER_ADDR` is not set.
const DEFAULT_ADDR: &str = "127.0.0.1:8080";

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(filter)
        .init();

    let addr: SocketAddr = env::var("SERVER_ADDR")
        .unwrap_or_else(|_| DEFAULT_ADDR.to_string())
        .parse()?;

    greet_native::serve(addr).await
}
