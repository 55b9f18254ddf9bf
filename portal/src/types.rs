//! Backend wire DTOs.
//!
//! DESIGN
//! ======
//! Shapes mirror what the REST backend returns and only the consumed fields
//! are modelled. Optional response fields default instead of failing so a
//! backend that omits them still renders.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

// =============================================================================
// IDENTITY
// =============================================================================

/// Tenant-scoped role carried by every user.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    CompanyAdmin,
    #[default]
    Employee,
    /// Any role string the client does not know about.
    #[serde(other)]
    Unknown,
}

impl Role {
    /// Wire representation (`COMPANY_ADMIN`, `EMPLOYEE`).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::CompanyAdmin => "COMPANY_ADMIN",
            Self::Employee => "EMPLOYEE",
            Self::Unknown => "UNKNOWN",
        }
    }

    /// Parse a wire role string; unrecognized values map to [`Role::Unknown`].
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw {
            "COMPANY_ADMIN" => Self::CompanyAdmin,
            "EMPLOYEE" => Self::Employee,
            _ => Self::Unknown,
        }
    }

    #[must_use]
    pub fn is_admin(self) -> bool {
        matches!(self, Self::CompanyAdmin)
    }
}

/// The authenticated identity as returned by `GET /auth/me`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub role: Role,
    pub company_id: i64,
}

/// Login request body for `POST /auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Token pair returned by a successful login.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

/// Company self-registration body for `POST /auth/signup`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupRequest {
    pub company_name: String,
    pub email: String,
    pub password: String,
}

// =============================================================================
// COMPANY
// =============================================================================

/// Account status of the tenant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CompanyStatus {
    Active,
    Inactive,
    Suspended,
    #[serde(other)]
    Unknown,
}

impl CompanyStatus {
    /// Statuses an admin may pick in the settings form.
    pub const SELECTABLE: [Self; 3] = [Self::Active, Self::Inactive, Self::Suspended];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::Inactive => "INACTIVE",
            Self::Suspended => "SUSPENDED",
            Self::Unknown => "UNKNOWN",
        }
    }

    /// Human label used by the settings select box.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
            Self::Suspended => "Suspended",
            Self::Unknown => "Unknown",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw {
            "ACTIVE" => Self::Active,
            "INACTIVE" => Self::Inactive,
            "SUSPENDED" => Self::Suspended,
            _ => Self::Unknown,
        }
    }
}

/// Tenant profile from `GET /companies/me`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub id: i64,
    pub name: String,
    pub status: CompanyStatus,
    pub created_at: String,
}

/// Partial update body for `PUT /companies/me`. Absent fields are left as-is.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<CompanyStatus>,
}

impl CompanyUpdate {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.status.is_none()
    }
}

// =============================================================================
// EMPLOYEES
// =============================================================================

/// A tenant member row from `GET /users/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: i64,
    pub email: String,
    pub role: Role,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Body for `POST /users/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEmployee {
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// Body for `PUT /users/{id}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleUpdate {
    pub role: Role,
}

// =============================================================================
// AUDIT, INSIGHTS, METRICS
// =============================================================================

/// One audit event from `GET /activities/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityLog {
    pub id: i64,
    pub action: String,
    #[serde(default)]
    pub details: Option<String>,
    pub timestamp: String,
    pub user_id: i64,
}

/// Productivity summary from `GET /ai/insights`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AiInsights {
    pub company_id: i64,
    #[serde(default)]
    pub insights: Vec<String>,
    #[serde(default)]
    pub productivity_score: Option<f64>,
    #[serde(default)]
    pub generated_at: Option<String>,
    #[serde(default)]
    pub generated_by: Option<String>,
}

/// Summary counters from `GET /dashboard/metrics`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardMetrics {
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub total_users: u64,
    #[serde(default)]
    pub company_status: Option<String>,
    #[serde(default)]
    pub active_features: Vec<String>,
}
