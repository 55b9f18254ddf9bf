//! `PortalApi` over `reqwest`.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use std::time::Duration;

use portal::api::{join_url, paths};
use portal::tokens::bearer_header;
use portal::types::{
    ActivityLog, AiInsights, Company, CompanyUpdate, Credentials, DashboardMetrics, Employee, NewEmployee,
    RoleUpdate, SignupRequest, TokenPair, User,
};
use portal::{ApiError, PortalApi, TokenStorage};
use reqwest::header::AUTHORIZATION;
use reqwest::{Method, RequestBuilder};
use serde::Serialize;
use serde::de::DeserializeOwned;

const REQUEST_TIMEOUT_SECS: u64 = 30;
const CONNECT_TIMEOUT_SECS: u64 = 10;

pub struct HttpApi<S> {
    http: reqwest::Client,
    base: String,
    storage: S,
}

impl<S: TokenStorage> HttpApi<S> {
    /// # Errors
    ///
    /// Returns the client build error if the TLS backend cannot initialize.
    pub fn new(base: &str, storage: S) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .build()?;
        Ok(Self { http, base: base.trim_end_matches('/').to_owned(), storage })
    }

    /// Request builder for `path` carrying the stored bearer token, if any.
    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.http.request(method, join_url(&self.base, path));
        match bearer_header(&self.storage) {
            Some(value) => builder.header(AUTHORIZATION, value),
            None => builder,
        }
    }

    async fn execute(&self, builder: RequestBuilder) -> Result<reqwest::Response, ApiError> {
        let response = builder.send().await.map_err(|e| ApiError::Transport(e.to_string()))?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        tracing::debug!(status = status.as_u16(), %body, "backend rejected request");
        Err(ApiError::from_status(status.as_u16(), &body))
    }

    async fn fetch<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T, ApiError> {
        let response = self.execute(builder).await?;
        response.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn send(&self, builder: RequestBuilder) -> Result<(), ApiError> {
        self.execute(builder).await.map(|_| ())
    }

    fn with_json<B: Serialize>(&self, method: Method, path: &str, body: &B) -> RequestBuilder {
        self.request(method, path).json(body)
    }
}

impl<S: TokenStorage> PortalApi for HttpApi<S> {
    async fn login(&self, credentials: &Credentials) -> Result<TokenPair, ApiError> {
        self.fetch(self.with_json(Method::POST, paths::LOGIN, credentials)).await
    }

    async fn signup(&self, request: &SignupRequest) -> Result<(), ApiError> {
        self.send(self.with_json(Method::POST, paths::SIGNUP, request)).await
    }

    async fn current_user(&self) -> Result<User, ApiError> {
        self.fetch(self.request(Method::GET, paths::ME)).await
    }

    async fn company(&self) -> Result<Company, ApiError> {
        self.fetch(self.request(Method::GET, paths::COMPANY)).await
    }

    async fn update_company(&self, update: &CompanyUpdate) -> Result<Company, ApiError> {
        self.fetch(self.with_json(Method::PUT, paths::COMPANY, update)).await
    }

    async fn employees(&self) -> Result<Vec<Employee>, ApiError> {
        self.fetch(self.request(Method::GET, paths::USERS)).await
    }

    async fn create_employee(&self, employee: &NewEmployee) -> Result<(), ApiError> {
        self.send(self.with_json(Method::POST, paths::USERS, employee)).await
    }

    async fn update_employee_role(&self, id: i64, update: &RoleUpdate) -> Result<(), ApiError> {
        self.send(self.with_json(Method::PUT, &paths::user(id), update)).await
    }

    async fn delete_employee(&self, id: i64) -> Result<(), ApiError> {
        self.send(self.request(Method::DELETE, &paths::user(id))).await
    }

    async fn activities(&self) -> Result<Vec<ActivityLog>, ApiError> {
        self.fetch(self.request(Method::GET, paths::ACTIVITIES)).await
    }

    async fn ai_insights(&self) -> Result<AiInsights, ApiError> {
        self.fetch(self.request(Method::GET, paths::AI_INSIGHTS)).await
    }

    async fn dashboard_metrics(&self) -> Result<DashboardMetrics, ApiError> {
        self.fetch(self.request(Method::GET, paths::DASHBOARD_METRICS)).await
    }
}
