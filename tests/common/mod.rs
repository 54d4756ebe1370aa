#![allow(dead_code)]

use async_trait::async_trait;
use axum::ServiceExt;
use axum::extract::Request;
use axum_test::TestServer;
use sqlx::SqlitePool;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use url_alias::api::middleware::basic_auth::BasicCredentials;
use url_alias::application::services::UrlService;
use url_alias::domain::authorization::PrivilegeChecker;
use url_alias::domain::errors::{AuthzError, StoreError};
use url_alias::domain::repositories::UrlRepository;
use url_alias::infrastructure::persistence::SqliteUrlRepository;
use url_alias::routes::app_router;
use url_alias::state::AppState;
use url_alias::utils::alias_generator::RandomAliasGenerator;

pub const TEST_USER: &str = "user";
pub const TEST_PASSWORD: &str = "user";
pub const TEST_SUBJECT_ID: i64 = 1;

/// `Authorization` value for `user:user`.
pub const BASIC_AUTH: &str = "Basic dXNlcjp1c2Vy";

/// `Authorization` value for `user:wrong`.
pub const BAD_BASIC_AUTH: &str = "Basic dXNlcjp3cm9uZw==";

/// Privilege checker answering every call with a fixed outcome.
#[derive(Clone)]
pub struct StaticAuthorizer {
    outcome: Result<bool, AuthzError>,
    calls: Arc<AtomicUsize>,
}

impl StaticAuthorizer {
    pub fn new(outcome: Result<bool, AuthzError>) -> Self {
        Self {
            outcome,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn allow() -> Self {
        Self::new(Ok(true))
    }

    pub fn deny() -> Self {
        Self::new(Ok(false))
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PrivilegeChecker for StaticAuthorizer {
    async fn check_privilege(&self, _subject_id: i64) -> Result<bool, AuthzError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.outcome.clone()
    }
}

/// Repository wrapper that counts every store call.
pub struct CountingRepository {
    inner: SqliteUrlRepository,
    calls: Arc<AtomicUsize>,
}

impl CountingRepository {
    pub fn new(pool: SqlitePool) -> (Self, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let repo = Self {
            inner: SqliteUrlRepository::new(Arc::new(pool)),
            calls: calls.clone(),
        };
        (repo, calls)
    }
}

#[async_trait]
impl UrlRepository for CountingRepository {
    async fn save(&self, alias: &str, target: &str) -> Result<i64, StoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.save(alias, target).await
    }

    async fn resolve(&self, alias: &str) -> Result<String, StoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.resolve(alias).await
    }

    async fn delete(&self, alias: &str) -> Result<(), StoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.delete(alias).await
    }
}

pub fn create_state_with(
    repository: Arc<dyn UrlRepository>,
    authorizer: Arc<dyn PrivilegeChecker>,
) -> AppState {
    let url_service = UrlService::new(repository, Arc::new(RandomAliasGenerator), 5);

    AppState::new(
        Arc::new(url_service),
        authorizer,
        BasicCredentials::new(TEST_USER, TEST_PASSWORD, TEST_SUBJECT_ID),
    )
}

pub fn create_test_state(pool: SqlitePool, authorizer: StaticAuthorizer) -> AppState {
    let repository = Arc::new(SqliteUrlRepository::new(Arc::new(pool)));
    create_state_with(repository, Arc::new(authorizer))
}

/// Serves the full application router, middleware included.
pub fn test_server(state: AppState) -> TestServer {
    let app = app_router(state, Duration::from_secs(4));
    TestServer::new(ServiceExt::<Request>::into_make_service(app)).unwrap()
}

pub async fn create_test_url(pool: &SqlitePool, alias: &str, target: &str) {
    sqlx::query("INSERT INTO urls (alias, target) VALUES (?, ?)")
        .bind(alias)
        .bind(target)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn count_urls(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM urls")
        .fetch_one(pool)
        .await
        .unwrap()
}
