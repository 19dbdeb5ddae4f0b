//! Routing and middleware tests
//!
//! None of these requests reach the database, so they run without
//! PostgreSQL.

mod common;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
};
use pretty_assertions::assert_eq;

use snippetbox::shared::ServerConfig;

use common::{test_app, test_app_with_config, TestClient};

#[tokio::test]
async fn test_anonymous_snippet_form_redirects_to_login() {
    let mut client = TestClient::new(test_app());

    let response = client.get("/snippet/new").await;

    assert_eq!(response.status, StatusCode::FOUND);
    assert_eq!(response.location(), Some("/user/login"));
}

#[tokio::test]
async fn test_anonymous_logout_redirects_to_login() {
    let mut client = TestClient::new(test_app());
    let token = client.csrf_token("/user/login").await;

    let response = client.post_form("/user/logout", &[("csrf_token", &token)]).await;

    assert_eq!(response.status, StatusCode::FOUND);
    assert_eq!(response.location(), Some("/user/login"));
}

#[tokio::test]
async fn test_bad_snippet_ids_are_not_found() {
    let mut client = TestClient::new(test_app());

    for id in ["abc", "0", "-5", "1.5"] {
        let response = client.get(&format!("/snippet/{}", id)).await;
        assert_eq!(response.status, StatusCode::NOT_FOUND, "id {:?}", id);
    }
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let mut client = TestClient::new(test_app());

    let response = client.get("/no/such/page").await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body, "Not Found");
}

#[tokio::test]
async fn test_security_headers_on_every_response() {
    let mut client = TestClient::new(test_app());

    for uri in ["/user/login", "/no/such/page", "/static/css/main.css", "/snippet/new"] {
        let response = client.get(uri).await;
        assert_eq!(response.header("x-content-type-options"), Some("nosniff"), "{}", uri);
        assert_eq!(response.header("x-frame-options"), Some("deny"), "{}", uri);
        assert_eq!(response.header("x-xss-protection"), Some("1; mode=block"), "{}", uri);
    }
}

#[tokio::test]
async fn test_login_page_issues_session_cookie_and_token() {
    let mut client = TestClient::new(test_app());

    let response = client.get("/user/login").await;

    assert_eq!(response.status, StatusCode::OK);
    let set_cookie = response.header("set-cookie").expect("session cookie");
    assert!(set_cookie.starts_with("snippetbox.sid="));
    assert!(set_cookie.contains("HttpOnly"));
    assert!(set_cookie.contains("SameSite=Lax"));

    let token = common::extract_csrf_token(&response.body).expect("csrf token in form");
    assert_eq!(token.len(), 64);
}

#[tokio::test]
async fn test_plain_http_cookie_is_not_secure() {
    let mut client = TestClient::new(test_app());

    let response = client.get("/user/login").await;

    let set_cookie = response.header("set-cookie").expect("session cookie");
    assert!(!set_cookie.contains("Secure"));
}

#[tokio::test]
async fn test_tls_config_marks_cookie_secure() {
    let config = ServerConfig::from_lookup(|key| match key {
        "HTML_DIR" => Some(format!("{}/ui/html", env!("CARGO_MANIFEST_DIR"))),
        "STATIC_DIR" => Some(format!("{}/ui/static", env!("CARGO_MANIFEST_DIR"))),
        "TLS_CERT" => Some("./tls/cert.pem".to_string()),
        "TLS_KEY" => Some("./tls/key.pem".to_string()),
        _ => None,
    })
    .unwrap();
    let mut client = TestClient::new(test_app_with_config(&config));

    let response = client.get("/user/login").await;

    assert_eq!(response.status, StatusCode::OK);
    let set_cookie = response.header("set-cookie").expect("session cookie");
    assert!(set_cookie.contains("Secure"));
}

#[tokio::test]
async fn test_csrf_token_is_stable_within_a_session() {
    let mut client = TestClient::new(test_app());

    let first = client.csrf_token("/user/login").await;
    let second = client.csrf_token("/user/signup").await;

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_post_without_csrf_token_is_rejected() {
    let mut client = TestClient::new(test_app());

    let response = client
        .post_form("/user/login", &[("email", "a@example.com"), ("password", "secret123")])
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_post_with_wrong_csrf_token_is_rejected() {
    let mut client = TestClient::new(test_app());
    let token = client.csrf_token("/user/login").await;
    let wrong = "0".repeat(token.len());

    let response = client
        .post_form("/user/login", &[("csrf_token", &wrong), ("email", "a@example.com")])
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_empty_login_shows_field_errors() {
    let mut client = TestClient::new(test_app());
    let token = client.csrf_token("/user/login").await;

    let response = client
        .post_form(
            "/user/login",
            &[("csrf_token", &token), ("email", ""), ("password", "")],
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("This field is required"));
}

#[tokio::test]
async fn test_invalid_signup_keeps_values_but_not_password() {
    let mut client = TestClient::new(test_app());
    let token = client.csrf_token("/user/signup").await;

    let response = client
        .post_form(
            "/user/signup",
            &[
                ("csrf_token", &token),
                ("name", "Alice"),
                ("email", "alice-at-example"),
                ("password", "pw12"),
            ],
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains(r#"value="Alice""#));
    assert!(response.body.contains(r#"value="alice-at-example""#));
    assert!(response.body.contains("This field is invalid"));
    assert!(response.body.contains("This field is too short (minimum is 8 characters)"));
    assert!(!response.body.contains("pw12"));
}

#[tokio::test]
async fn test_nul_in_login_field_is_a_form_error() {
    let mut client = TestClient::new(test_app());
    let token = client.csrf_token("/user/login").await;

    let response = client
        .post_form(
            "/user/login",
            &[("csrf_token", &token), ("email", "a\0@example.com"), ("password", "secret123")],
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("This field is invalid"));
}

#[tokio::test]
async fn test_nul_in_signup_field_is_a_form_error() {
    let mut client = TestClient::new(test_app());
    let token = client.csrf_token("/user/signup").await;

    let response = client
        .post_form(
            "/user/signup",
            &[
                ("csrf_token", &token),
                ("name", "N\0"),
                ("email", "n@example.com"),
                ("password", "long enough"),
            ],
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("This field is invalid"));
    assert!(response.body.contains(r#"value="n@example.com""#));
}

#[tokio::test]
async fn test_large_form_body_reaches_validation() {
    let mut client = TestClient::new(test_app());
    let token = client.csrf_token("/user/signup").await;
    let long_name = "n".repeat(100 * 1024);

    let response = client
        .post_form(
            "/user/signup",
            &[
                ("csrf_token", &token),
                ("name", &long_name),
                ("email", "n@example.com"),
                ("password", "long enough"),
            ],
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("This field is too long (maximum is 255 characters)"));
}

#[tokio::test]
async fn test_non_form_body_is_bad_request() {
    let mut client = TestClient::new(test_app());
    let token = client.csrf_token("/user/login").await;

    let request = Request::builder()
        .method(Method::POST)
        .uri("/user/login")
        .header(header::CONTENT_TYPE, "application/json")
        .header("x-csrf-token", token)
        .body(Body::from(r#"{"email":"a@example.com","password":"secret123"}"#))
        .unwrap();
    let response = client.send(request).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_static_files_are_served() {
    let mut client = TestClient::new(test_app());

    let response = client.get("/static/css/main.css").await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.header("content-type").unwrap_or_default().starts_with("text/css"));
    assert!(response.body.contains("div.flash"));
}

#[tokio::test]
async fn test_anonymous_navigation_links() {
    let mut client = TestClient::new(test_app());

    let response = client.get("/user/signup").await;

    assert!(response.body.contains(r#"href="/user/login""#));
    assert!(!response.body.contains("Logout"));
}
