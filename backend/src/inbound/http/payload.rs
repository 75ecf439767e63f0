//! Lenient JSON body parsing for user requests.
//!
//! Handlers receive the raw body so that an absent body, a non-JSON content
//! type, or a JSON value that is not an object all reduce to an empty
//! [`UserRequest`]. Only a body that claims to be JSON and fails to parse is
//! rejected outright.

use actix_web::{HttpMessage, HttpRequest};
use serde_json::{Map, Value};
use utoipa::ToSchema;

use crate::domain::{Error, REQUIRED_FIELDS_MESSAGE, UserDraft, UserValidationError};

/// Message returned when a JSON body cannot be parsed.
pub const MALFORMED_JSON_MESSAGE: &str = "request body must be valid JSON";

/// Request body for `POST /users` and `PUT /users/{id}`.
///
/// Fields keep their raw JSON value so non-string input can be reported as a
/// validation failure rather than a deserialisation error.
///
/// Example JSON: `{"name":"Ann","email":"a@x.com"}`
#[derive(Debug, Default, Clone, PartialEq, ToSchema)]
pub struct UserRequest {
    /// Display name; must be a non-blank string.
    #[schema(value_type = Option<String>, example = "Ann")]
    pub name: Option<Value>,
    /// Contact email; must be a non-blank string.
    #[schema(value_type = Option<String>, example = "a@x.com")]
    pub email: Option<Value>,
}

impl UserRequest {
    fn from_object(mut object: Map<String, Value>) -> Self {
        Self {
            name: object.remove("name"),
            email: object.remove("email"),
        }
    }
}

impl TryFrom<UserRequest> for UserDraft {
    type Error = UserValidationError;

    fn try_from(value: UserRequest) -> Result<Self, Self::Error> {
        Self::try_from_parts(
            value.name.as_ref().and_then(Value::as_str),
            value.email.as_ref().and_then(Value::as_str),
        )
    }
}

fn is_json_content_type(req: &HttpRequest) -> bool {
    let essence = req.content_type().trim().to_ascii_lowercase();
    essence == "application/json"
        || (essence.starts_with("application/") && essence.ends_with("+json"))
}

/// Decode a raw request body into a [`UserRequest`].
///
/// # Errors
/// Returns an invalid-request error when a JSON body fails to parse.
pub fn parse_user_request(req: &HttpRequest, body: &[u8]) -> Result<UserRequest, Error> {
    if body.is_empty() || !is_json_content_type(req) {
        return Ok(UserRequest::default());
    }
    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(object)) => Ok(UserRequest::from_object(object)),
        Ok(_) => Ok(UserRequest::default()),
        Err(_) => Err(Error::invalid_request(MALFORMED_JSON_MESSAGE)),
    }
}

/// Decode and validate a request body in one step.
///
/// # Errors
/// Returns an invalid-request error for malformed JSON or missing fields.
pub fn parse_user_draft(req: &HttpRequest, body: &[u8]) -> Result<UserDraft, Error> {
    let request = parse_user_request(req, body)?;
    UserDraft::try_from(request).map_err(|_| Error::invalid_request(REQUIRED_FIELDS_MESSAGE))
}
