//! Typed client for the Poke backend REST API.
//!
//! # Overview
//! Nine operations (users, connections, messages, memory, conversations and
//! health) each map to one HTTP request. A 2xx response yields its JSON body
//! unchanged; anything else yields `ApiError::Request` with a message such as
//! `Failed to get user: Not Found`.
//!
//! # Design
//! - `PokeClient` is sans-IO: `build_*` produces an `HttpRequest`, `parse_*`
//!   consumes an `HttpResponse`.
//! - `ApiClient` executes those requests over `reqwest` and exposes one async
//!   method per operation.
//! - [`default_client`] is a lazily built, immutable process-wide instance.
//! - No retries, caching or timeouts unless configured through `ClientConfig`.

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod operation;
pub mod transport;
pub mod types;

pub use client::{parse_response, PokeClient};
pub use config::{ClientConfig, API_URL_ENV, DEFAULT_BASE_URL};
pub use error::{ApiError, Result};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use operation::Operation;
pub use transport::{default_client, ApiClient};
pub use types::{CreateUser, InitiateConnection, SendMessage};
