//! Liveness and readiness probes.
//!
//! Both probes read one lifecycle [`Phase`]. Readiness holds only while the
//! listener is serving; liveness fails once shutdown starts draining, so
//! orchestrators stop routing traffic before workers exit.

use std::sync::atomic::{AtomicU8, Ordering};

use actix_web::{HttpResponse, get, http::header, web};
use tracing::debug;

/// Lifecycle phase of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Phase {
    /// Settings loaded, listener not yet bound.
    Starting = 0,
    /// Listener bound and accepting requests.
    Serving = 1,
    /// Shutdown requested; in-flight requests are finishing.
    Draining = 2,
}

impl Phase {
    const fn from_u8(raw: u8) -> Self {
        match raw {
            0 => Self::Starting,
            1 => Self::Serving,
            _ => Self::Draining,
        }
    }
}

/// Shared lifecycle flag behind the probe endpoints.
#[derive(Debug)]
pub struct HealthState {
    phase: AtomicU8,
}

impl Default for HealthState {
    fn default() -> Self {
        Self {
            phase: AtomicU8::new(Phase::Starting as u8),
        }
    }
}

impl HealthState {
    /// Fresh state in [`Phase::Starting`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        Phase::from_u8(self.phase.load(Ordering::Acquire))
    }

    /// Move to [`Phase::Serving`] unless draining already began.
    pub fn mark_ready(&self) {
        let promoted = self
            .phase
            .compare_exchange(
                Phase::Starting as u8,
                Phase::Serving as u8,
                Ordering::AcqRel,
                Ordering::Acquire,
            )
            .is_ok();
        if !promoted {
            debug!(phase = ?self.phase(), "readiness ignored outside starting phase");
        }
    }

    /// Move to [`Phase::Draining`]. Irreversible.
    pub fn begin_draining(&self) {
        self.phase.store(Phase::Draining as u8, Ordering::Release);
    }

    /// Whether readiness probes succeed.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.phase() == Phase::Serving
    }

    /// Whether liveness probes succeed.
    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.phase() != Phase::Draining
    }
}

fn status_response(healthy: bool) -> HttpResponse {
    let mut builder = if healthy {
        HttpResponse::Ok()
    } else {
        HttpResponse::ServiceUnavailable()
    };
    builder
        .insert_header((header::CACHE_CONTROL, "no-store"))
        .finish()
}

/// Readiness probe: 200 while serving, 503 while starting or draining.
#[utoipa::path(
    get,
    path = "/health/ready",
    tags = ["health"],
    responses(
        (status = 200, description = "Accepting traffic"),
        (status = 503, description = "Starting up or draining")
    )
)]
#[get("/health/ready")]
pub async fn ready(state: web::Data<HealthState>) -> HttpResponse {
    status_response(state.is_ready())
}

/// Liveness probe: 200 until shutdown begins, then 503.
#[utoipa::path(
    get,
    path = "/health/live",
    tags = ["health"],
    responses(
        (status = 200, description = "Process is running"),
        (status = 503, description = "Draining for shutdown")
    )
)]
#[get("/health/live")]
pub async fn live(state: web::Data<HealthState>) -> HttpResponse {
    status_response(state.is_alive())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::App;
    use actix_web::test as actix_test;
    use rstest::rstest;

    async fn status_of(state: &web::Data<HealthState>, uri: &str) -> StatusCode {
        let app = actix_test::init_service(
            App::new()
                .app_data(state.clone())
                .service(ready)
                .service(live),
        )
        .await;
        let res = actix_test::call_service(&app, actix_test::TestRequest::get().uri(uri).to_request()).await;
        assert_eq!(
            res.headers()
                .get(header::CACHE_CONTROL)
                .and_then(|value| value.to_str().ok()),
            Some("no-store")
        );
        res.status()
    }

    #[rstest]
    #[case::starting("", StatusCode::SERVICE_UNAVAILABLE, StatusCode::OK)]
    #[case::serving("ready", StatusCode::OK, StatusCode::OK)]
    #[case::draining("ready drain", StatusCode::SERVICE_UNAVAILABLE, StatusCode::SERVICE_UNAVAILABLE)]
    #[case::drained_before_ready("drain ready", StatusCode::SERVICE_UNAVAILABLE, StatusCode::SERVICE_UNAVAILABLE)]
    #[actix_web::test]
    async fn health_endpoints_follow_phase(
        #[case] steps: &str,
        #[case] expected_ready: StatusCode,
        #[case] expected_live: StatusCode,
    ) {
        let state = web::Data::new(HealthState::new());
        for step in steps.split_whitespace() {
            match step {
                "ready" => state.mark_ready(),
                _ => state.begin_draining(),
            }
        }

        assert_eq!(status_of(&state, "/health/ready").await, expected_ready);
        assert_eq!(status_of(&state, "/health/live").await, expected_live);
    }

    #[rstest]
    fn phase_starts_in_starting() {
        assert_eq!(HealthState::new().phase(), Phase::Starting);
    }
}
