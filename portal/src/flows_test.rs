use std::cell::{Cell, RefCell};

use futures::executor::block_on;

use super::*;
use crate::tokens::{ACCESS_TOKEN_KEY, MemoryStorage, REFRESH_TOKEN_KEY, bearer_header};
use crate::types::{
    ActivityLog, AiInsights, Company, CompanyUpdate, DashboardMetrics, Employee, NewEmployee, Role, RoleUpdate,
    SignupRequest, TokenPair,
};

// =============================================================
// Fake backend
// =============================================================

/// In-memory backend: accepts one credential pair and answers `/auth/me`
/// only when the shared storage holds the token it issued.
struct FakeApi<'a> {
    storage: &'a MemoryStorage,
    identity_calls: Cell<usize>,
    login_calls: Cell<usize>,
    identity_failure: RefCell<Option<ApiError>>,
}

impl<'a> FakeApi<'a> {
    fn new(storage: &'a MemoryStorage) -> Self {
        Self {
            storage,
            identity_calls: Cell::new(0),
            login_calls: Cell::new(0),
            identity_failure: RefCell::new(None),
        }
    }

    fn failing_identity(storage: &'a MemoryStorage, error: ApiError) -> Self {
        let api = Self::new(storage);
        *api.identity_failure.borrow_mut() = Some(error);
        api
    }
}

fn user() -> User {
    User { id: 1, email: "a@b.com".to_owned(), role: Role::CompanyAdmin, company_id: 7 }
}

fn unsupported<T>() -> Result<T, ApiError> {
    Err(ApiError::Transport("not used by these tests".to_owned()))
}

impl PortalApi for FakeApi<'_> {
    async fn login(&self, credentials: &Credentials) -> Result<TokenPair, ApiError> {
        self.login_calls.set(self.login_calls.get() + 1);
        if credentials.email == "a@b.com" && credentials.password == "x" {
            Ok(TokenPair { access_token: "acc".to_owned(), refresh_token: "ref".to_owned() })
        } else {
            Err(ApiError::Rejected { status: 400, detail: Some("Invalid credentials".to_owned()) })
        }
    }

    async fn signup(&self, _request: &SignupRequest) -> Result<(), ApiError> {
        unsupported()
    }

    async fn current_user(&self) -> Result<User, ApiError> {
        self.identity_calls.set(self.identity_calls.get() + 1);
        if let Some(error) = self.identity_failure.borrow().clone() {
            return Err(error);
        }
        match bearer_header(self.storage).as_deref() {
            Some("Bearer acc") => Ok(user()),
            _ => Err(ApiError::Unauthorized),
        }
    }

    async fn company(&self) -> Result<Company, ApiError> {
        unsupported()
    }

    async fn update_company(&self, _update: &CompanyUpdate) -> Result<Company, ApiError> {
        unsupported()
    }

    async fn employees(&self) -> Result<Vec<Employee>, ApiError> {
        unsupported()
    }

    async fn create_employee(&self, _employee: &NewEmployee) -> Result<(), ApiError> {
        unsupported()
    }

    async fn update_employee_role(&self, _id: i64, _update: &RoleUpdate) -> Result<(), ApiError> {
        unsupported()
    }

    async fn delete_employee(&self, _id: i64) -> Result<(), ApiError> {
        unsupported()
    }

    async fn activities(&self) -> Result<Vec<ActivityLog>, ApiError> {
        unsupported()
    }

    async fn ai_insights(&self) -> Result<AiInsights, ApiError> {
        unsupported()
    }

    async fn dashboard_metrics(&self) -> Result<DashboardMetrics, ApiError> {
        unsupported()
    }
}

fn credentials(password: &str) -> Credentials {
    Credentials { email: "a@b.com".to_owned(), password: password.to_owned() }
}

// =============================================================
// sign_in
// =============================================================

#[test]
fn login_stores_tokens_fetches_identity_and_guard_authorizes() {
    let storage = MemoryStorage::new();
    let api = FakeApi::new(&storage);
    let mut store = SessionStore::new();

    let signed_in = block_on(sign_in(&api, &storage, &credentials("x"))).unwrap();
    assert_eq!(storage.get(ACCESS_TOKEN_KEY).as_deref(), Some("acc"));
    assert_eq!(storage.get(REFRESH_TOKEN_KEY).as_deref(), Some("ref"));
    assert_eq!(api.identity_calls.get(), 1);

    store.set_user(Some(signed_in));
    let state = block_on(authorize(&api, &mut store));
    assert_eq!(state, GuardState::Authorized);
    assert_eq!(store.user(), Some(&user()));
}

#[test]
fn bad_credentials_write_no_tokens() {
    let storage = MemoryStorage::new();
    let api = FakeApi::new(&storage);
    let err = block_on(sign_in(&api, &storage, &credentials("wrong"))).unwrap_err();
    assert_eq!(err.user_message("Failed to login. Please check your credentials."), "Invalid credentials");
    assert!(storage.is_empty());
    assert_eq!(api.identity_calls.get(), 0);
}

#[test]
fn identity_failure_after_login_surfaces_error() {
    let storage = MemoryStorage::new();
    let api = FakeApi::failing_identity(&storage, ApiError::Transport("offline".to_owned()));
    let err = block_on(sign_in(&api, &storage, &credentials("x"))).unwrap_err();
    assert_eq!(err, ApiError::Transport("offline".to_owned()));
    assert_eq!(api.login_calls.get(), 1);
}

// =============================================================
// authorize
// =============================================================

#[test]
fn populated_session_never_fetches_identity() {
    let storage = MemoryStorage::new();
    let api = FakeApi::new(&storage);
    let mut store = SessionStore::with_user(user());
    assert_eq!(block_on(authorize(&api, &mut store)), GuardState::Authorized);
    assert_eq!(api.identity_calls.get(), 0);
}

#[test]
fn stored_token_without_session_resolves_identity() {
    let storage = MemoryStorage::new();
    storage.set(ACCESS_TOKEN_KEY, "acc");
    let api = FakeApi::new(&storage);
    let mut store = SessionStore::new();
    assert_eq!(block_on(authorize(&api, &mut store)), GuardState::Authorized);
    assert_eq!(api.identity_calls.get(), 1);
    assert!(store.is_authenticated());
}

#[test]
fn unauthorized_identity_redirects_with_empty_store() {
    let storage = MemoryStorage::new();
    let api = FakeApi::new(&storage);
    let mut store = SessionStore::new();
    assert_eq!(block_on(authorize(&api, &mut store)), GuardState::Redirecting);
    assert!(!store.is_authenticated());
    assert_eq!(api.identity_calls.get(), 1);
}

#[test]
fn failing_identity_fetch_is_not_retried() {
    let storage = MemoryStorage::new();
    let api = FakeApi::failing_identity(&storage, ApiError::Transport("timeout".to_owned()));
    let mut store = SessionStore::new();
    assert_eq!(block_on(authorize(&api, &mut store)), GuardState::Redirecting);
    assert_eq!(api.identity_calls.get(), 1);
}

// =============================================================
// sign_out
// =============================================================

#[test]
fn sign_out_clears_session_and_tokens() {
    let storage = MemoryStorage::new();
    let api = FakeApi::new(&storage);
    let mut store = SessionStore::new();
    let signed_in = block_on(sign_in(&api, &storage, &credentials("x"))).unwrap();
    store.set_user(Some(signed_in));

    sign_out(&storage, &mut store);
    assert!(!store.is_authenticated());
    assert!(storage.is_empty());

    assert_eq!(block_on(authorize(&api, &mut store)), GuardState::Redirecting);
}
