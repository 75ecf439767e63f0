//! End-to-end behaviour of the users API through the full middleware stack.

use std::collections::HashSet;
use std::sync::Arc;

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::http::header::CONTENT_TYPE;
use actix_web::{App, test, web};
use rstest::{fixture, rstest};
use serde_json::{Value, json};
use user_service::Trace;
use user_service::domain::TRACE_ID_HEADER;
use user_service::domain::ports::UserRepository;
use user_service::inbound::http::configure;
use user_service::inbound::http::state::HttpState;
use user_service::outbound::memory::InMemoryUserRepository;

#[fixture]
fn store() -> Arc<InMemoryUserRepository> {
    Arc::new(InMemoryUserRepository::new())
}

fn app(
    store: Arc<InMemoryUserRepository>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let repository: Arc<dyn UserRepository> = store;
    let state = web::Data::new(HttpState::new(repository));
    App::new().app_data(state).wrap(Trace).configure(configure)
}

async fn json_of<B: MessageBody>(response: ServiceResponse<B>) -> Value {
    let body = test::read_body(response).await;
    if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).expect("JSON body")
    }
}

fn ids(store: &InMemoryUserRepository) -> Vec<String> {
    store
        .snapshot()
        .expect("snapshot")
        .iter()
        .map(|user| user.id().to_string())
        .collect()
}

#[rstest]
#[actix_web::test]
async fn create_update_delete_lifecycle(store: Arc<InMemoryUserRepository>) {
    let app = test::init_service(app(Arc::clone(&store))).await;

    let created = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/users")
            .set_json(json!({ "name": "Ann", "email": "a@x.com" }))
            .to_request(),
    )
    .await;
    assert_eq!(created.status(), StatusCode::CREATED);
    let created = json_of(created).await;
    let id = created
        .get("id")
        .and_then(Value::as_str)
        .expect("id")
        .to_owned();
    assert!(uuid::Uuid::parse_str(&id).is_ok());
    assert_eq!(created, json!({ "id": id, "name": "Ann", "email": "a@x.com" }));

    let updated = test::call_service(
        &app,
        test::TestRequest::put()
            .uri(&format!("/users/{id}"))
            .set_json(json!({ "name": "Ann B", "email": "ab@x.com" }))
            .to_request(),
    )
    .await;
    assert_eq!(updated.status(), StatusCode::OK);
    assert_eq!(
        json_of(updated).await,
        json!({ "id": id, "name": "Ann B", "email": "ab@x.com" })
    );

    let fetched = test::call_service(
        &app,
        test::TestRequest::get()
            .uri(&format!("/users/{id}"))
            .to_request(),
    )
    .await;
    assert_eq!(fetched.status(), StatusCode::OK);
    assert_eq!(json_of(fetched).await.get("name"), Some(&json!("Ann B")));

    let deleted = test::call_service(
        &app,
        test::TestRequest::delete()
            .uri(&format!("/users/{id}"))
            .to_request(),
    )
    .await;
    assert_eq!(deleted.status(), StatusCode::NO_CONTENT);
    assert!(test::read_body(deleted).await.is_empty());

    let deleted_again = test::call_service(
        &app,
        test::TestRequest::delete()
            .uri(&format!("/users/{id}"))
            .to_request(),
    )
    .await;
    assert_eq!(deleted_again.status(), StatusCode::NOT_FOUND);

    let missing = test::call_service(
        &app,
        test::TestRequest::get()
            .uri(&format!("/users/{id}"))
            .to_request(),
    )
    .await;
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
    assert_eq!(json_of(missing).await, json!({ "error": "User not found" }));
}

#[rstest]
#[actix_web::test]
async fn created_records_round_trip_and_have_unique_ids(store: Arc<InMemoryUserRepository>) {
    let app = test::init_service(app(Arc::clone(&store))).await;
    let mut seen = HashSet::new();

    for n in 0..10 {
        let created = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/users")
                .set_json(json!({ "name": format!(" user {n} "), "email": format!("u{n}@x.com") }))
                .to_request(),
        )
        .await;
        let record = json_of(created).await;
        let id = record.get("id").and_then(Value::as_str).expect("id").to_owned();
        assert_eq!(record.get("name"), Some(&json!(format!("user {n}"))));

        let fetched = test::call_service(
            &app,
            test::TestRequest::get()
                .uri(&format!("/users/{id}"))
                .to_request(),
        )
        .await;
        assert_eq!(json_of(fetched).await, record);
        assert!(seen.insert(id), "identifiers must be unique");
    }

    assert_eq!(store.snapshot().expect("snapshot").len(), 10);
}

#[rstest]
#[case(json!({}))]
#[case(json!({ "email": "a@x.com" }))]
#[case(json!({ "name": "Ann" }))]
#[case(json!({ "name": "", "email": "a@x.com" }))]
#[case(json!({ "name": "Ann", "email": " \t " }))]
#[actix_web::test]
async fn invalid_bodies_leave_store_unchanged(
    store: Arc<InMemoryUserRepository>,
    #[case] payload: Value,
) {
    let app = test::init_service(app(Arc::clone(&store))).await;
    let seeded = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/users")
            .set_json(json!({ "name": "Ann", "email": "a@x.com" }))
            .to_request(),
    )
    .await;
    let id = json_of(seeded)
        .await
        .get("id")
        .and_then(Value::as_str)
        .expect("id")
        .to_owned();
    let before = store.snapshot().expect("snapshot");

    for request in [
        test::TestRequest::post().uri("/users"),
        test::TestRequest::put().uri(&format!("/users/{id}")),
    ] {
        let response = test::call_service(&app, request.set_json(payload.clone()).to_request()).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            json_of(response).await,
            json!({ "error": "name and email are required" })
        );
    }

    assert_eq!(store.snapshot().expect("snapshot"), before);
}

#[rstest]
#[actix_web::test]
async fn invalid_update_of_unknown_user_is_bad_request(store: Arc<InMemoryUserRepository>) {
    let app = test::init_service(app(Arc::clone(&store))).await;
    let response = test::call_service(
        &app,
        test::TestRequest::put()
            .uri("/users/does-not-exist")
            .set_json(json!({}))
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[rstest]
#[actix_web::test]
async fn malformed_json_is_bad_request(store: Arc<InMemoryUserRepository>) {
    let app = test::init_service(app(Arc::clone(&store))).await;
    let response = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/users")
            .insert_header((CONTENT_TYPE, "application/json"))
            .set_payload("{\"name\": ")
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        json_of(response).await,
        json!({ "error": "request body must be valid JSON" })
    );
    assert!(ids(&store).is_empty());
}

#[rstest]
#[actix_web::test]
async fn delete_keeps_other_records_in_order(store: Arc<InMemoryUserRepository>) {
    let app = test::init_service(app(Arc::clone(&store))).await;
    for name in ["a", "b", "c"] {
        let response = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/users")
                .set_json(json!({ "name": name, "email": format!("{name}@x.com") }))
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }
    let before = ids(&store);

    let response = test::call_service(
        &app,
        test::TestRequest::delete()
            .uri(&format!("/users/{}", before[1]))
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    assert_eq!(ids(&store), vec![before[0].clone(), before[2].clone()]);
}

#[rstest]
#[actix_web::test]
async fn responses_carry_trace_identifier(store: Arc<InMemoryUserRepository>) {
    let app = test::init_service(app(Arc::clone(&store))).await;
    let response = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/users/does-not-exist")
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(response.headers().contains_key(TRACE_ID_HEADER));
}

#[rstest]
#[actix_web::test]
async fn root_greets_in_plain_text(store: Arc<InMemoryUserRepository>) {
    let app = test::init_service(app(Arc::clone(&store))).await;
    let response = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(test::read_body(response).await, "Hello World!".as_bytes());
    assert!(ids(&store).is_empty());
}
