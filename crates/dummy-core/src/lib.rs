//! dummy-core: fixed-payload HTTP responder with simulated latency
//!
//! Every request on every path is answered with the same Lorem ipsum body
//! after a jittered delay of roughly 100ms. Meant as a stand-in backend for
//! load generators and proxies under test.

#![forbid(unsafe_code)]
#![warn(clippy::all)]

pub mod error;
pub mod jitter;
pub mod payload;
pub mod responder;
pub mod server;

// Re-exports
pub use error::{Error, Result};
pub use jitter::Jitter;
pub use payload::{payload_body, PAYLOAD};
pub use responder::{fixed_response, handle_request, Responder};
pub use server::{create_listener_socket, Server, ServerConfig, DEFAULT_PORT};
