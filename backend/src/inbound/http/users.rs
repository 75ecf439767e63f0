//! Users API handlers.
//!
//! ```text
//! POST   /users       {"name":"Ann","email":"a@x.com"}
//! GET    /users/{id}
//! PUT    /users/{id}  {"name":"Ann B","email":"ab@x.com"}
//! DELETE /users/{id}
//! ```
//!
//! Bodies are validated before the store is consulted, so an invalid body
//! against an unknown identifier yields 400 rather than 404.

use actix_web::{HttpRequest, HttpResponse, delete, get, post, put, web};

use crate::domain::User;
use crate::inbound::http::ApiResult;
use crate::inbound::http::payload::{UserRequest, parse_user_draft};
use crate::inbound::http::schemas::{ErrorSchema, UserSchema};
use crate::inbound::http::state::HttpState;

/// Create a user.
#[utoipa::path(
    post,
    path = "/users",
    request_body = UserRequest,
    responses(
        (status = 201, description = "User created", body = UserSchema),
        (status = 400, description = "Missing or blank name/email", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/users")]
pub async fn create_user(
    state: web::Data<HttpState>,
    req: HttpRequest,
    body: web::Bytes,
) -> ApiResult<HttpResponse> {
    let draft = parse_user_draft(&req, &body)?;
    let user = state.users.create(draft).await?;
    Ok(HttpResponse::Created().json(user))
}

/// Fetch a user by identifier.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use user_service::inbound::http::users::get_user;
///
/// let app = App::new().service(get_user);
/// ```
#[utoipa::path(
    get,
    path = "/users/{id}",
    params(("id" = String, Path, description = "User identifier")),
    responses(
        (status = 200, description = "User", body = UserSchema),
        (status = 404, description = "User not found", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "getUser"
)]
#[get("/users/{id}")]
pub async fn get_user(
    state: web::Data<HttpState>,
    id: web::Path<String>,
) -> ApiResult<web::Json<User>> {
    let user = state.users.fetch(&id).await?;
    Ok(web::Json(user))
}

/// Replace a user's name and email.
#[utoipa::path(
    put,
    path = "/users/{id}",
    params(("id" = String, Path, description = "User identifier")),
    request_body = UserRequest,
    responses(
        (status = 200, description = "User updated", body = UserSchema),
        (status = 400, description = "Missing or blank name/email", body = ErrorSchema),
        (status = 404, description = "User not found", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "updateUser"
)]
#[put("/users/{id}")]
pub async fn update_user(
    state: web::Data<HttpState>,
    id: web::Path<String>,
    req: HttpRequest,
    body: web::Bytes,
) -> ApiResult<web::Json<User>> {
    let draft = parse_user_draft(&req, &body)?;
    let user = state.users.update(&id, draft).await?;
    Ok(web::Json(user))
}

/// Delete a user.
#[utoipa::path(
    delete,
    path = "/users/{id}",
    params(("id" = String, Path, description = "User identifier")),
    responses(
        (status = 204, description = "User deleted"),
        (status = 404, description = "User not found", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "deleteUser"
)]
#[delete("/users/{id}")]
pub async fn delete_user(
    state: web::Data<HttpState>,
    id: web::Path<String>,
) -> ApiResult<HttpResponse> {
    state.users.delete(&id).await?;
    Ok(HttpResponse::NoContent().finish())
}
