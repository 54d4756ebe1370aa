mod common;

use axum::http::StatusCode;
use serde_json::{Value, json};
use sqlx::SqlitePool;
use std::sync::Arc;
use std::sync::atomic::Ordering;
use url_alias::domain::errors::AuthzError;

use common::{BASIC_AUTH, StaticAuthorizer};

#[sqlx::test]
async fn test_delete_success(pool: SqlitePool) {
    common::create_test_url(&pool, "doomed", "https://example.com/").await;
    let server = common::test_server(common::create_test_state(
        pool.clone(),
        StaticAuthorizer::allow(),
    ));

    let response = server.delete("/url/doomed").authorization(BASIC_AUTH).await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert!(response.text().is_empty());
    assert_eq!(common::count_urls(&pool).await, 0);
}

#[sqlx::test]
async fn test_delete_not_found(pool: SqlitePool) {
    let server = common::test_server(common::create_test_state(pool, StaticAuthorizer::allow()));

    let response = server.delete("/url/missing").authorization(BASIC_AUTH).await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>(), json!({"error": "not found"}));
}

#[sqlx::test]
async fn test_delete_empty_alias_makes_no_calls(pool: SqlitePool) {
    let (repository, store_calls) = common::CountingRepository::new(pool);
    let authorizer = StaticAuthorizer::allow();
    let state = common::create_state_with(Arc::new(repository), Arc::new(authorizer.clone()));
    let server = common::test_server(state);

    for path in ["/url", "/url/"] {
        let response = server.delete(path).authorization(BASIC_AUTH).await;

        assert_eq!(response.status_code(), StatusCode::OK);
        assert_eq!(response.json::<Value>(), json!({"error": "empty alias"}));
    }

    assert_eq!(store_calls.load(Ordering::SeqCst), 0);
    assert_eq!(authorizer.calls(), 0);
}

#[sqlx::test]
async fn test_delete_malformed_alias(pool: SqlitePool) {
    let authorizer = StaticAuthorizer::allow();
    let server = common::test_server(common::create_test_state(pool, authorizer.clone()));

    let response = server
        .delete("/url/bad%20alias")
        .authorization(BASIC_AUTH)
        .await;

    assert_eq!(
        response.json::<Value>(),
        json!({"error": "field ALIAS is not a valid alias"})
    );
    assert_eq!(authorizer.calls(), 0);
}

#[sqlx::test]
async fn test_delete_requires_credentials(pool: SqlitePool) {
    common::create_test_url(&pool, "kept", "https://example.com/").await;
    let server = common::test_server(common::create_test_state(
        pool.clone(),
        StaticAuthorizer::allow(),
    ));

    let response = server.delete("/url/kept").await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    assert_eq!(common::count_urls(&pool).await, 1);
}

#[sqlx::test]
async fn test_delete_not_privileged(pool: SqlitePool) {
    common::create_test_url(&pool, "kept", "https://example.com/").await;
    let server = common::test_server(common::create_test_state(
        pool.clone(),
        StaticAuthorizer::deny(),
    ));

    let response = server.delete("/url/kept").authorization(BASIC_AUTH).await;

    assert_eq!(response.status_code(), StatusCode::FORBIDDEN);
    assert_eq!(response.json::<Value>(), json!({"error": "forbidden"}));
    assert_eq!(common::count_urls(&pool).await, 1);
}

#[sqlx::test]
async fn test_delete_authorization_failed(pool: SqlitePool) {
    common::create_test_url(&pool, "kept", "https://example.com/").await;
    let authorizer = StaticAuthorizer::new(Err(AuthzError::Failed {
        code: "InvalidArgument".to_string(),
        message: "user_id is required".to_string(),
    }));
    let server = common::test_server(common::create_test_state(pool.clone(), authorizer));

    let response = server.delete("/url/kept").authorization(BASIC_AUTH).await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(common::count_urls(&pool).await, 1);
}
