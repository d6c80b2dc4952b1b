//! User records service: a JSON-file backed user store behind a small JSON
//! API.
//!
//! Layout follows a ports-and-adapters split:
//! - [`domain`]: record model, validation rules and use cases.
//! - [`inbound`]: actix-web handlers.
//! - [`outbound`]: the JSON document store.
//! - [`server`] and [`settings`]: process wiring and configuration.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod server;
pub mod settings;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
