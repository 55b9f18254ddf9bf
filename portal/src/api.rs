//! Backend API seam.
//!
//! ARCHITECTURE
//! ============
//! [`PortalApi`] names one async method per consumed endpoint. The browser
//! build implements it over `gloo-net`, the CLI over `reqwest`, and tests
//! over an in-memory fake. Implementations attach the stored access token
//! to every request.

#![allow(async_fn_in_trait)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use crate::error::ApiError;
use crate::types::{
    ActivityLog, AiInsights, Company, CompanyUpdate, Credentials, DashboardMetrics, Employee, NewEmployee,
    RoleUpdate, SignupRequest, TokenPair, User,
};

/// Endpoint paths relative to the backend root.
pub mod paths {
    pub const LOGIN: &str = "/auth/login";
    pub const SIGNUP: &str = "/auth/signup";
    pub const ME: &str = "/auth/me";
    pub const COMPANY: &str = "/companies/me";
    pub const USERS: &str = "/users/";
    pub const ACTIVITIES: &str = "/activities/";
    pub const AI_INSIGHTS: &str = "/ai/insights";
    pub const DASHBOARD_METRICS: &str = "/dashboard/metrics";

    /// `/users/{id}` for role updates and removal.
    #[must_use]
    pub fn user(id: i64) -> String {
        format!("/users/{id}")
    }
}

/// Join a base URL and an endpoint path without doubling or dropping `/`.
#[must_use]
pub fn join_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    if path.starts_with('/') { format!("{base}{path}") } else { format!("{base}/{path}") }
}

/// Typed access to every backend endpoint the portal consumes.
pub trait PortalApi {
    /// `POST /auth/login`: exchange credentials for tokens.
    async fn login(&self, credentials: &Credentials) -> Result<TokenPair, ApiError>;

    /// `POST /auth/signup`: register a company and its first admin.
    async fn signup(&self, request: &SignupRequest) -> Result<(), ApiError>;

    /// `GET /auth/me`: resolve the stored token into an identity.
    async fn current_user(&self) -> Result<User, ApiError>;

    /// `GET /companies/me`.
    async fn company(&self) -> Result<Company, ApiError>;

    /// `PUT /companies/me`.
    async fn update_company(&self, update: &CompanyUpdate) -> Result<Company, ApiError>;

    /// `GET /users/`.
    async fn employees(&self) -> Result<Vec<Employee>, ApiError>;

    /// `POST /users/`.
    async fn create_employee(&self, employee: &NewEmployee) -> Result<(), ApiError>;

    /// `PUT /users/{id}`.
    async fn update_employee_role(&self, id: i64, update: &RoleUpdate) -> Result<(), ApiError>;

    /// `DELETE /users/{id}`.
    async fn delete_employee(&self, id: i64) -> Result<(), ApiError>;

    /// `GET /activities/`.
    async fn activities(&self) -> Result<Vec<ActivityLog>, ApiError>;

    /// `GET /ai/insights`.
    async fn ai_insights(&self) -> Result<AiInsights, ApiError>;

    /// `GET /dashboard/metrics`.
    async fn dashboard_metrics(&self) -> Result<DashboardMetrics, ApiError>;
}
