use std::env;

use greet_common::TransportConfig;
use hrpc::BoxError;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    let name = env::args().nth(1).unwrap_or_else(|| "World".to_string());

    let config = TransportConfig::from_env()?;
    let controller = greet_native::controller(&config)?;

    match controller.on_click(&name) {
        Some(outcome) => println!("{}", outcome.await.text()),
        None => eprintln!("no name given, not calling the server"),
    }

    Ok(())
}
