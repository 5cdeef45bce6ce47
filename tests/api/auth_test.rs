//! Authentication API integration tests
//!
//! Sign-up, sign-in, the current-user endpoints and bearer-token handling.

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::common::{signup, TestApp, ADMIN_EMAIL, PASSWORD};
use crate::{assert_error, assert_status};

#[tokio::test]
async fn test_signup_returns_token_and_unverified_user() {
    let app = TestApp::new().await;

    let response = app
        .post(
            "/api/auth/signup",
            None,
            json!({ "email": "Ada@Example.com", "password": PASSWORD, "name": "Ada Lovelace" }),
        )
        .await;
    assert_status!(response, StatusCode::OK);
    assert!(response.body["token"].is_string());

    let user = &response.body["user"];
    assert_eq!(user["email"], "ada@example.com");
    assert_eq!(user["slug"], "ada-lovelace");
    assert_eq!(user["role"], "user");
    assert_eq!(user["email_verified"], false);
    assert!(user.get("password_hash").is_none());
    assert!(user.get("verification_token").is_none());

    let email = app.email_to("ada@example.com").await;
    assert!(email.html.contains("http://quotable.test/verify-email?token="));
}

#[tokio::test]
async fn test_signup_validation_and_duplicates() {
    let app = TestApp::new().await;

    let short = app
        .post(
            "/api/auth/signup",
            None,
            json!({ "email": "ada@example.com", "password": "short", "name": "Ada" }),
        )
        .await;
    assert_status!(short, StatusCode::BAD_REQUEST);

    let no_at = app
        .post(
            "/api/auth/signup",
            None,
            json!({ "email": "not-an-email", "password": PASSWORD, "name": "Ada" }),
        )
        .await;
    assert_status!(no_at, StatusCode::BAD_REQUEST);

    signup(&app, "ada@example.com", "Ada").await;
    let duplicate = app
        .post(
            "/api/auth/signup",
            None,
            json!({ "email": "ADA@example.com", "password": PASSWORD, "name": "Other Ada" }),
        )
        .await;
    assert_error!(duplicate, StatusCode::CONFLICT, "Email already registered");
}

#[tokio::test]
async fn test_login_failures_are_indistinguishable() {
    let app = TestApp::new().await;
    signup(&app, "ada@example.com", "Ada").await;

    let wrong_password = app
        .post(
            "/api/auth/login",
            None,
            json!({ "email": "ada@example.com", "password": "wrong-password" }),
        )
        .await;
    let unknown = app
        .post(
            "/api/auth/login",
            None,
            json!({ "email": "nobody@example.com", "password": PASSWORD }),
        )
        .await;

    assert_error!(wrong_password, StatusCode::UNAUTHORIZED, "Invalid email or password");
    assert_eq!(wrong_password.body, unknown.body);

    let ok = app
        .post(
            "/api/auth/login",
            None,
            json!({ "email": "ada@example.com", "password": PASSWORD }),
        )
        .await;
    assert_status!(ok, StatusCode::OK);
    assert!(ok.body["token"].is_string());
}

#[tokio::test]
async fn test_me_requires_bearer_token() {
    let app = TestApp::new().await;
    let user = signup(&app, "ada@example.com", "Ada").await;

    let anonymous = app.get("/api/auth/me", None).await;
    assert_error!(anonymous, StatusCode::UNAUTHORIZED, "Not authenticated");

    let garbage = app.get("/api/auth/me", Some("not-a-jwt")).await;
    assert_status!(garbage, StatusCode::UNAUTHORIZED);

    let me = app.get("/api/auth/me", Some(&user.token)).await;
    assert_status!(me, StatusCode::OK);
    assert_eq!(me.body["id"], user.id.as_str());

    let renamed = app
        .patch("/api/auth/me", Some(&user.token), json!({ "name": "Countess Lovelace" }))
        .await;
    assert_status!(renamed, StatusCode::OK);
    assert_eq!(renamed.body["name"], "Countess Lovelace");
}

#[tokio::test]
async fn test_configured_admin_email_is_promoted() {
    let app = TestApp::new().await;
    signup(&app, ADMIN_EMAIL, "Admin").await;

    let me = app
        .post(
            "/api/auth/login",
            None,
            json!({ "email": ADMIN_EMAIL, "password": PASSWORD }),
        )
        .await;
    assert_eq!(me.body["user"]["role"], "admin");
}
