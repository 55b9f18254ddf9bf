use portal::MemoryStorage;
use portal::tokens::store_tokens;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use super::*;

/// Serve exactly one canned response and hand back the raw request text.
async fn one_shot(status_line: &str, body: &str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());
    let response = format!(
        "HTTP/1.1 {status_line}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
        body.len()
    );
    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let raw = read_request(&mut socket).await;
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();
        raw
    });
    (base, handle)
}

/// Read headers plus `content-length` bytes of body.
async fn read_request(socket: &mut tokio::net::TcpStream) -> String {
    let mut raw = Vec::new();
    let mut chunk = [0_u8; 1024];
    loop {
        let n = socket.read(&mut chunk).await.unwrap();
        raw.extend_from_slice(&chunk[..n]);
        let text = String::from_utf8_lossy(&raw).into_owned();
        if let Some(split) = text.find("\r\n\r\n") {
            let length = text[..split]
                .lines()
                .find_map(|line| line.to_ascii_lowercase().strip_prefix("content-length:").map(|v| v.trim().parse::<usize>().unwrap()))
                .unwrap_or(0);
            if n == 0 || raw.len() >= split + 4 + length {
                return text;
            }
        } else if n == 0 {
            return text;
        }
    }
}

// =============================================================================
// Request shaping
// =============================================================================

#[test]
fn request_carries_bearer_when_token_stored() {
    let storage = MemoryStorage::new();
    store_tokens(&storage, &TokenPair { access_token: "tok".to_owned(), refresh_token: "r".to_owned() });
    let api = HttpApi::new("http://backend:8000/", &storage).unwrap();

    let request = api.request(Method::GET, paths::ME).build().unwrap();
    assert_eq!(request.url().as_str(), "http://backend:8000/auth/me");
    assert_eq!(request.headers().get(AUTHORIZATION).unwrap(), "Bearer tok");
}

#[test]
fn request_omits_authorization_without_token() {
    let storage = MemoryStorage::new();
    let api = HttpApi::new("http://backend:8000", &storage).unwrap();

    let request = api.request(Method::DELETE, &paths::user(4)).build().unwrap();
    assert_eq!(request.url().path(), "/users/4");
    assert!(request.headers().get(AUTHORIZATION).is_none());
}

// =============================================================================
// Responses
// =============================================================================

#[tokio::test]
async fn current_user_decodes_identity() {
    let (base, server) =
        one_shot("200 OK", r#"{"id":3,"email":"a@acme.test","role":"COMPANY_ADMIN","company_id":1}"#).await;
    let storage = MemoryStorage::new();
    let api = HttpApi::new(&base, &storage).unwrap();

    let user = api.current_user().await.unwrap();
    assert_eq!(user.id, 3);
    assert!(user.role.is_admin());

    let raw = server.await.unwrap();
    assert!(raw.starts_with("GET /auth/me "));
}

#[tokio::test]
async fn unauthorized_status_maps_to_unauthorized() {
    let (base, _server) = one_shot("401 Unauthorized", r#"{"detail":"Not authenticated"}"#).await;
    let storage = MemoryStorage::new();
    let api = HttpApi::new(&base, &storage).unwrap();

    assert!(api.current_user().await.unwrap_err().is_unauthorized());
}

#[tokio::test]
async fn rejected_status_keeps_backend_detail() {
    let (base, server) = one_shot("400 Bad Request", r#"{"detail":"Email already registered"}"#).await;
    let storage = MemoryStorage::new();
    let api = HttpApi::new(&base, &storage).unwrap();

    let new_employee = NewEmployee { email: "dup@acme.test".to_owned(), password: "pw".to_owned(), role: portal::Role::Employee };
    let err = api.create_employee(&new_employee).await.unwrap_err();
    assert_eq!(err.detail(), Some("Email already registered"));

    let raw = server.await.unwrap();
    assert!(raw.starts_with("POST /users/ "));
    assert!(raw.contains(r#""email":"dup@acme.test""#));
}

#[tokio::test]
async fn malformed_body_is_a_decode_error() {
    let (base, _server) = one_shot("200 OK", "{not json").await;
    let storage = MemoryStorage::new();
    let api = HttpApi::new(&base, &storage).unwrap();

    assert!(matches!(api.dashboard_metrics().await, Err(ApiError::Decode(_))));
}

#[tokio::test]
async fn unreachable_backend_is_a_transport_error() {
    let closed = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base = format!("http://{}", closed.local_addr().unwrap());
    drop(closed);
    let storage = MemoryStorage::new();
    let api = HttpApi::new(&base, &storage).unwrap();

    assert!(matches!(api.activities().await, Err(ApiError::Transport(_))));
}
