//! Code shared by the greet web front-end and the native binaries.
#![deny(missing_docs)]

/// `greet` package protobuf definitions and service.
pub mod greet {
    /// Version 1 of the greet protocol.
    pub mod v1 {
        #![allow(missing_docs)]
        hrpc::include_proto!("greet.v1");
    }
}

/// Transport configuration.
pub mod config;
/// Click handling and output rendering.
pub mod controller;
/// Call failure type.
pub mod error;
/// Greet service implementation.
pub mod server;

#[doc(inline)]
pub use config::TransportConfig;
#[doc(inline)]
pub use controller::{GreetController, Outcome, OutputElement};
#[doc(inline)]
pub use error::CallFailure;

/// A boxed error.
pub type BoxError = Box<dyn std::error::Error>;
