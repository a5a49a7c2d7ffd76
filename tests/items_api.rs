//! End-to-end endpoint tests covering the route table and status mapping.

// The shared harness also carries fields used by other suites.
#[allow(dead_code)]
mod support;

use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use catalog::server;
use rstest::rstest;
use serde_json::{Value, json};

use support::{basic_auth_header, bootstrap_context};

fn shirt_body() -> Value {
    json!({
        "name": "Shirt",
        "price": 19.99,
        "size": "M",
        "weight": 0.3,
        "color": "blue"
    })
}

macro_rules! spawn_app {
    ($ctx:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($ctx.state.clone()))
                .configure(server::configure),
        )
        .await
    };
}

#[actix_web::test]
async fn listing_starts_empty() {
    let ctx = bootstrap_context().await;
    let app = spawn_app!(ctx);

    let response = test::call_service(&app, test::TestRequest::get().uri("/items").to_request()).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = test::read_body_json(response).await;
    assert_eq!(body, json!([]));
}

#[actix_web::test]
async fn creating_an_item_round_trips() {
    let ctx = bootstrap_context().await;
    let app = spawn_app!(ctx);

    let request = test::TestRequest::post()
        .uri("/items")
        .insert_header(basic_auth_header("admin", "password"))
        .set_json(shirt_body())
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(response).await;
    assert_eq!(body, json!({"message": "Товар створено", "id": 1}));

    // Public read returns the stored record with its assigned id.
    let response =
        test::call_service(&app, test::TestRequest::get().uri("/items/1").to_request()).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = test::read_body_json(response).await;
    assert_eq!(
        body,
        json!({
            "id": 1,
            "name": "Shirt",
            "price": 19.99,
            "size": "M",
            "weight": 0.3,
            "color": "blue"
        })
    );

    let response =
        test::call_service(&app, test::TestRequest::get().uri("/items").to_request()).await;
    let body: Value = test::read_body_json(response).await;
    assert_eq!(body.as_array().map(Vec::len), Some(1));
}

#[actix_web::test]
async fn create_lists_the_missing_fields() {
    let ctx = bootstrap_context().await;
    let app = spawn_app!(ctx);

    let request = test::TestRequest::post()
        .uri("/items")
        .insert_header(basic_auth_header("admin", "password"))
        .set_json(json!({"name": "Shirt", "size": "M"}))
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(response).await;
    assert_eq!(
        body,
        json!({"message": "Пропущені поля: price, weight, color"})
    );
}

#[rstest]
#[case::no_credentials(None)]
#[case::wrong_password(Some(("admin", "letmein")))]
#[case::unknown_user(Some(("root", "password")))]
#[actix_web::test]
async fn mutating_without_valid_credentials_is_unauthorized(
    #[case] credentials: Option<(&str, &str)>,
) {
    let ctx = bootstrap_context().await;
    let app = spawn_app!(ctx);

    let mut request = test::TestRequest::post().uri("/items").set_json(shirt_body());
    if let Some((username, password)) = credentials {
        request = request.insert_header(basic_auth_header(username, password));
    }
    let response = test::call_service(&app, request.to_request()).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(response).await;
    assert_eq!(body, json!({"message": "Unauthorized Access"}));
}

#[actix_web::test]
async fn update_and_delete_also_require_credentials() {
    let ctx = bootstrap_context().await;
    let app = spawn_app!(ctx);

    let request = test::TestRequest::put()
        .uri("/items/1")
        .set_json(json!({"price": 1.0}))
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let request = test::TestRequest::delete().uri("/items/1").to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn getting_an_unknown_id_is_not_found() {
    let ctx = bootstrap_context().await;
    let app = spawn_app!(ctx);

    let response =
        test::call_service(&app, test::TestRequest::get().uri("/items/42").to_request()).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(response).await;
    assert_eq!(body, json!({"message": "Товар не знайдено"}));
}

#[actix_web::test]
async fn partial_update_changes_only_the_given_field() {
    let ctx = bootstrap_context().await;
    let app = spawn_app!(ctx);

    let request = test::TestRequest::post()
        .uri("/items")
        .insert_header(basic_auth_header("admin", "password"))
        .set_json(shirt_body())
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let request = test::TestRequest::put()
        .uri("/items/1")
        .insert_header(basic_auth_header("admin", "password"))
        .set_json(json!({"price": 10.0}))
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = test::read_body_json(response).await;
    assert_eq!(body, json!({"message": "Товар оновлено"}));

    let response =
        test::call_service(&app, test::TestRequest::get().uri("/items/1").to_request()).await;
    let body: Value = test::read_body_json(response).await;
    assert_eq!(
        body,
        json!({
            "id": 1,
            "name": "Shirt",
            "price": 10.0,
            "size": "M",
            "weight": 0.3,
            "color": "blue"
        })
    );
}

#[actix_web::test]
async fn update_ignores_unknown_keys() {
    let ctx = bootstrap_context().await;
    let app = spawn_app!(ctx);

    let request = test::TestRequest::post()
        .uri("/items")
        .insert_header(basic_auth_header("admin", "password"))
        .set_json(shirt_body())
        .to_request();
    test::call_service(&app, request).await;

    // Unknown keys are dropped; the update degenerates to a no-op.
    let request = test::TestRequest::put()
        .uri("/items/1")
        .insert_header(basic_auth_header("admin", "password"))
        .set_json(json!({"sku": "X-1", "warehouse": 7}))
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response =
        test::call_service(&app, test::TestRequest::get().uri("/items/1").to_request()).await;
    let body: Value = test::read_body_json(response).await;
    assert_eq!(body["name"], "Shirt");
    assert_eq!(body["price"], 19.99);
}

#[actix_web::test]
async fn updating_an_unknown_id_is_not_found() {
    let ctx = bootstrap_context().await;
    let app = spawn_app!(ctx);

    let request = test::TestRequest::put()
        .uri("/items/42")
        .insert_header(basic_auth_header("admin", "password"))
        .set_json(json!({"price": 10.0}))
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn delete_then_get_is_not_found() {
    let ctx = bootstrap_context().await;
    let app = spawn_app!(ctx);

    let request = test::TestRequest::post()
        .uri("/items")
        .insert_header(basic_auth_header("admin", "password"))
        .set_json(shirt_body())
        .to_request();
    test::call_service(&app, request).await;

    let request = test::TestRequest::delete()
        .uri("/items/1")
        .insert_header(basic_auth_header("admin", "password"))
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = test::read_body_json(response).await;
    assert_eq!(body, json!({"message": "Товар видалено"}));

    let response =
        test::call_service(&app, test::TestRequest::get().uri("/items/1").to_request()).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // Deleting again reports the same absence.
    let request = test::TestRequest::delete()
        .uri("/items/1")
        .insert_header(basic_auth_header("admin", "password"))
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
