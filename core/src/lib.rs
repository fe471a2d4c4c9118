//! Async JSON client core for the user/post and product/catalog APIs.
//!
//! # Overview
//! One executor performs every request: it builds an `HttpRequest`, sends
//! it through a pluggable `Transport`, and classifies the `HttpResponse`
//! into an `Outcome`. `ApiClient` binds the executor to a base URL, and
//! `UserService` / `ProductService` bind it to fixed endpoint paths.
//!
//! # Design
//! - Request building (`http`) and classification (`outcome`) are pure and
//!   never touch the network; only the transport does I/O.
//! - Every call yields exactly one `Outcome`: the lenient-parsed payload, an
//!   HTTP failure with status and body, or a network failure.
//! - Services are constructed explicitly with an injected base URL; there are
//!   no global instances.
//! - `MockTransport` makes the whole stack testable without a server.

pub mod client;
pub mod error;
pub mod executor;
pub mod http;
pub mod mock;
pub mod outcome;
pub mod services;
pub mod transport;

pub use client::ApiClient;
pub use error::{RequestError, TransportError};
pub use executor::Executor;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use mock::MockTransport;
pub use outcome::{classify, parse_body, Outcome};
pub use services::{ProductService, UserService, DEFAULT_PRODUCTS_BASE_URL, DEFAULT_USERS_BASE_URL};
pub use transport::{Transport, UreqTransport};
