use hrpc::server::prelude::*;

use crate::greet::v1::{greet_service_server::GreetService, GreetRequest, GreetResponse};

/// Greets every caller by name.
pub struct GreeterService;

impl GreetService for GreeterService {
    #[handler]
    async fn greet(&self, request: Request<GreetRequest>) -> ServerResult<Response<GreetResponse>> {
        let message = request.into_message().await?;
        tracing::debug!(name = %message.name, "greeting");

        let response_message = GreetResponse {
            greeting: format!("Hello, {}!", message.name),
        };

        Ok(response_message.into_response())
    }
}
