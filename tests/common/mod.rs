#![allow(dead_code, unused_macros)]

use sqlx::SqlitePool;

use project_manager_backend::db::connect_in_memory;

pub async fn test_pool() -> SqlitePool {
    connect_in_memory().await.expect("in-memory database")
}

/// Builds the full `/api` service over a fresh in-memory database.
macro_rules! init_app {
    () => {{
        let pool = common::test_pool().await;
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data(actix_web::web::Data::new(pool))
                .configure(project_manager_backend::routes::routes::api_configure),
        )
        .await
    }};
}

/// Sends a JSON request and returns the status plus the parsed body
/// (`Value::Null` when the body is empty).
macro_rules! send {
    ($app:expr, $method:ident, $uri:expr) => {{
        let req = actix_web::test::TestRequest::$method().uri(&$uri).to_request();
        common::into_parts(actix_web::test::call_service(&$app, req).await).await
    }};
    ($app:expr, $method:ident, $uri:expr, $body:expr) => {{
        let req = actix_web::test::TestRequest::$method()
            .uri(&$uri)
            .set_json($body)
            .to_request();
        common::into_parts(actix_web::test::call_service(&$app, req).await).await
    }};
}

pub async fn into_parts<B>(
    resp: actix_web::dev::ServiceResponse<B>,
) -> (actix_web::http::StatusCode, serde_json::Value)
where
    B: actix_web::body::MessageBody,
{
    let status = resp.status();
    let body = actix_web::test::read_body(resp).await;
    let json = if body.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&body).expect("JSON body")
    };
    (status, json)
}
