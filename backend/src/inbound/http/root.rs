//! Service root greeting.

use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, get};

/// Static body served at `/`.
pub const GREETING: &str = "Hello World!";

/// Respond with a plain-text greeting; touches no state.
#[utoipa::path(
    get,
    path = "/",
    tags = ["root"],
    responses((status = 200, description = "Greeting", body = String, content_type = "text/plain"))
)]
#[get("/")]
pub async fn greeting() -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::plaintext())
        .body(GREETING)
}
