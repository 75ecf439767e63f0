//! HTTP inbound adapter exposing REST endpoints.

pub mod error;
pub mod health;
pub mod payload;
pub mod root;
pub mod schemas;
pub mod state;
pub mod users;

use actix_web::web;

pub use error::ApiResult;

/// Register the user resource routes and the root greeting.
///
/// Callers provide [`state::HttpState`] (and, for probes, a
/// [`health::HealthState`]) as app data.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use actix_web::{App, web};
/// use user_service::inbound::http::{configure, state::HttpState};
/// use user_service::outbound::memory::InMemoryUserRepository;
///
/// let state = web::Data::new(HttpState::new(Arc::new(InMemoryUserRepository::new())));
/// let app = App::new().app_data(state).configure(configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(users::create_user)
        .service(users::get_user)
        .service(users::update_user)
        .service(users::delete_user)
        .service(root::greeting);
}
