//! Shared state handed to every request handler.

use std::sync::Arc;

use crate::api::middleware::basic_auth::BasicCredentials;
use crate::application::services::UrlService;
use crate::domain::authorization::PrivilegeChecker;

#[derive(Clone)]
pub struct AppState {
    pub url_service: Arc<UrlService>,
    pub authorizer: Arc<dyn PrivilegeChecker>,
    pub credentials: Arc<BasicCredentials>,
}

impl AppState {
    pub fn new(
        url_service: Arc<UrlService>,
        authorizer: Arc<dyn PrivilegeChecker>,
        credentials: BasicCredentials,
    ) -> Self {
        Self {
            url_service,
            authorizer,
            credentials: Arc::new(credentials),
        }
    }
}
