//! Domain primitives, ports, and use-cases.
//!
//! Public surface:
//! - `Error` / `ErrorCode`: transport-agnostic failures.
//! - `User`, `UserId`, `UserDraft`: the single resource and its validation.
//! - `UserService`: create, fetch, update, and delete over a `UserRepository`.
//! - `TraceId`: request correlation identifier.

pub mod error;
pub mod ports;
pub mod trace_id;
pub mod user;
pub mod user_service;

pub use self::error::{Error, ErrorCode};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{User, UserDraft, UserId, UserValidationError, is_valid_field, trim_field};
pub use self::user_service::{REQUIRED_FIELDS_MESSAGE, USER_NOT_FOUND_MESSAGE, UserService};
