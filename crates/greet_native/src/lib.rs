//! Native plumbing shared by the `server` and `client` binaries.

use std::{cell::RefCell, net::SocketAddr};

use greet_common::{
    controller,
    greet::v1::{greet_service_client::GreetServiceClient, greet_service_server::GreetServiceServer},
    server::GreeterService,
    GreetController, TransportConfig,
};
use hrpc::{
    client::transport::http::Hyper as HyperClient,
    server::{prelude::*, transport::http::Hyper as HyperServer},
    BoxError,
};
use tower_http::cors::CorsLayer;

/// Serve the greet service over hRPC HTTP on `addr`.
///
/// Every response carries permissive CORS headers so the browser front-end
/// can call in from any origin.
pub async fn serve(addr: SocketAddr) -> Result<(), BoxError> {
    let service = GreetServiceServer::new(GreeterService);
    let transport = HyperServer::new(addr)?.layer(CorsLayer::permissive());

    tracing::info!(%addr, "serving greet service");
    transport.serve(service).await?;

    Ok(())
}

/// Build a controller that calls the service described by `config` with the
/// hyper transport.
pub fn controller(config: &TransportConfig) -> Result<GreetController, BoxError> {
    let transport = HyperClient::new(config.base_url().clone())?;
    let client = RefCell::new(GreetServiceClient::new_transport(transport));

    Ok(GreetController::new(controller::caller(move |request| {
        client.borrow_mut().greet(request)
    })))
}
