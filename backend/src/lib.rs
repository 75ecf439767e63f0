//! In-memory user service: create, read, update, and delete users over HTTP.
//!
//! The crate is laid out as a small hexagon:
//! - [`domain`]: the `User` model, validation, errors, and `UserService`.
//! - [`outbound`]: the process-memory store implementing the domain port.
//! - [`inbound`]: actix-web handlers, body parsing, and error rendering.
//! - [`middleware`]: request tracing.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
