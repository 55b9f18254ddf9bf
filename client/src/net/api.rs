//! REST API client for the portal backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, each carrying the
//! stored access token as a bearer header.
//! Server-side (SSR): stubs returning a transport error since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call yields `Result<_, ApiError>` instead of panicking so pages can
//! turn failures into inline messages without crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use portal::api::{join_url, paths};
use portal::types::{
    ActivityLog, AiInsights, Company, CompanyUpdate, Credentials, DashboardMetrics, Employee, NewEmployee,
    RoleUpdate, SignupRequest, TokenPair, User,
};
use portal::{ApiError, PortalApi};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Same-origin prefix proxied to the backend by the host server.
pub const DEFAULT_API_BASE: &str = "/api";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Method {
    Get,
    Post,
    Put,
    Delete,
}

fn encode<B: Serialize>(body: &B) -> Result<serde_json::Value, ApiError> {
    serde_json::to_value(body).map_err(|e| ApiError::Decode(format!("encode request body: {e}")))
}

/// `PortalApi` over the browser fetch API.
#[derive(Clone, Debug)]
pub struct BrowserApi {
    base: String,
}

impl Default for BrowserApi {
    fn default() -> Self {
        Self::new()
    }
}

impl BrowserApi {
    #[must_use]
    pub fn new() -> Self {
        Self::with_base(DEFAULT_API_BASE)
    }

    #[must_use]
    pub fn with_base(base: &str) -> Self {
        Self { base: base.to_owned() }
    }

    fn url(&self, path: &str) -> String {
        join_url(&self.base, path)
    }

    async fn fetch<T: DeserializeOwned>(&self, method: Method, path: &str, body: Option<serde_json::Value>) -> Result<T, ApiError> {
        let url = self.url(path);
        transport::fetch(method, &url, body).await
    }

    async fn send(&self, method: Method, path: &str, body: Option<serde_json::Value>) -> Result<(), ApiError> {
        let url = self.url(path);
        transport::send(method, &url, body).await
    }
}

impl PortalApi for BrowserApi {
    async fn login(&self, credentials: &Credentials) -> Result<TokenPair, ApiError> {
        self.fetch(Method::Post, paths::LOGIN, Some(encode(credentials)?)).await
    }

    async fn signup(&self, request: &SignupRequest) -> Result<(), ApiError> {
        self.send(Method::Post, paths::SIGNUP, Some(encode(request)?)).await
    }

    async fn current_user(&self) -> Result<User, ApiError> {
        self.fetch(Method::Get, paths::ME, None).await
    }

    async fn company(&self) -> Result<Company, ApiError> {
        self.fetch(Method::Get, paths::COMPANY, None).await
    }

    async fn update_company(&self, update: &CompanyUpdate) -> Result<Company, ApiError> {
        self.fetch(Method::Put, paths::COMPANY, Some(encode(update)?)).await
    }

    async fn employees(&self) -> Result<Vec<Employee>, ApiError> {
        self.fetch(Method::Get, paths::USERS, None).await
    }

    async fn create_employee(&self, employee: &NewEmployee) -> Result<(), ApiError> {
        self.send(Method::Post, paths::USERS, Some(encode(employee)?)).await
    }

    async fn update_employee_role(&self, id: i64, update: &RoleUpdate) -> Result<(), ApiError> {
        self.send(Method::Put, &paths::user(id), Some(encode(update)?)).await
    }

    async fn delete_employee(&self, id: i64) -> Result<(), ApiError> {
        self.send(Method::Delete, &paths::user(id), None).await
    }

    async fn activities(&self) -> Result<Vec<ActivityLog>, ApiError> {
        self.fetch(Method::Get, paths::ACTIVITIES, None).await
    }

    async fn ai_insights(&self) -> Result<AiInsights, ApiError> {
        self.fetch(Method::Get, paths::AI_INSIGHTS, None).await
    }

    async fn dashboard_metrics(&self) -> Result<DashboardMetrics, ApiError> {
        self.fetch(Method::Get, paths::DASHBOARD_METRICS, None).await
    }
}

#[cfg(feature = "hydrate")]
mod transport {
    use gloo_net::http::{Request, RequestBuilder, Response};
    use portal::ApiError;
    use portal::tokens::bearer_header;
    use serde::de::DeserializeOwned;

    use super::Method;
    use crate::util::storage::BrowserStorage;

    fn transport_error(e: gloo_net::Error) -> ApiError {
        ApiError::Transport(e.to_string())
    }

    fn builder(method: Method, url: &str) -> RequestBuilder {
        let builder = match method {
            Method::Get => Request::get(url),
            Method::Post => Request::post(url),
            Method::Put => Request::put(url),
            Method::Delete => Request::delete(url),
        };
        match bearer_header(&BrowserStorage) {
            Some(value) => builder.header("Authorization", &value),
            None => builder,
        }
    }

    async fn execute(method: Method, url: &str, body: Option<serde_json::Value>) -> Result<Response, ApiError> {
        let builder = builder(method, url);
        let request = match body {
            Some(body) => builder.json(&body),
            None => builder.build(),
        }
        .map_err(transport_error)?;
        let resp = request.send().await.map_err(transport_error)?;
        if resp.ok() {
            return Ok(resp);
        }
        let status = resp.status();
        let text = resp.text().await.unwrap_or_default();
        log::warn!("{method:?} {url} failed with status {status}");
        Err(ApiError::from_status(status, &text))
    }

    pub(super) async fn fetch<T: DeserializeOwned>(
        method: Method,
        url: &str,
        body: Option<serde_json::Value>,
    ) -> Result<T, ApiError> {
        let resp = execute(method, url, body).await?;
        resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }

    pub(super) async fn send(method: Method, url: &str, body: Option<serde_json::Value>) -> Result<(), ApiError> {
        execute(method, url, body).await.map(|_| ())
    }
}

#[cfg(not(feature = "hydrate"))]
mod transport {
    use portal::ApiError;
    use serde::de::DeserializeOwned;

    use super::Method;

    fn unavailable() -> ApiError {
        ApiError::Transport("not available on server".to_owned())
    }

    pub(super) async fn fetch<T: DeserializeOwned>(
        method: Method,
        url: &str,
        body: Option<serde_json::Value>,
    ) -> Result<T, ApiError> {
        let _ = (method, url, body);
        Err(unavailable())
    }

    pub(super) async fn send(method: Method, url: &str, body: Option<serde_json::Value>) -> Result<(), ApiError> {
        let _ = (method, url, body);
        Err(unavailable())
    }
}
