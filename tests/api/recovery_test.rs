//! Email verification and password reset integration tests

use axum::http::StatusCode;
use chrono::{Duration, Utc};
use serde_json::json;

use crate::common::{signup, token_from_email, token_with_subject, TestApp, PASSWORD};
use crate::{assert_contains, assert_status};
use so_quotable::backend::auth::users::get_user_by_email;
use so_quotable::backend::email::templates::{token_from_body, PASSWORD_RESET_SUBJECT};

#[tokio::test]
async fn test_verify_email_flow() {
    let app = TestApp::new().await;
    let user = signup(&app, "ada@example.com", "Ada").await;
    let token = token_from_email(&app, "ada@example.com").await;
    assert_eq!(token.len(), 64);

    let verified = app
        .post("/api/auth/verify-email", None, json!({ "token": token }))
        .await;
    assert_status!(verified, StatusCode::OK);
    assert_eq!(verified.body["success"], true);
    assert_eq!(verified.body["message"], "Email verified successfully");
    assert!(verified.body.get("error").is_none());

    let me = app.get("/api/auth/me", Some(&user.token)).await;
    assert_eq!(me.body["email_verified"], true);

    // The token is consumed
    let again = app
        .post("/api/auth/verify-email", None, json!({ "token": token }))
        .await;
    assert_status!(again, StatusCode::OK);
    assert_eq!(again.body["success"], false);
    assert_contains!(again.body["error"].as_str().unwrap(), "Invalid");

    let resend = app
        .post("/api/auth/resend-verification", Some(&user.token), json!({}))
        .await;
    assert_eq!(resend.body["message"], "Email already verified");
}

#[tokio::test]
async fn test_expired_verification_token() {
    let app = TestApp::new().await;
    signup(&app, "ada@example.com", "Ada").await;
    let token = token_from_email(&app, "ada@example.com").await;

    sqlx::query("UPDATE users SET verification_token_expires_at = ?1 WHERE email = ?2")
        .bind(Utc::now() - Duration::minutes(1))
        .bind("ada@example.com")
        .execute(&app.state.db_pool)
        .await
        .unwrap();

    let response = app
        .post("/api/auth/verify-email", None, json!({ "token": token }))
        .await;
    assert_status!(response, StatusCode::OK);
    assert_eq!(response.body["success"], false);
    assert_contains!(response.body["error"].as_str().unwrap(), "expired");
}

#[tokio::test]
async fn test_request_verification_is_uniform() {
    let app = TestApp::new().await;
    signup(&app, "ada@example.com", "Ada").await;
    let first = token_from_email(&app, "ada@example.com").await;

    let known = app
        .post("/api/auth/request-verification", None, json!({ "email": "ada@example.com" }))
        .await;
    let unknown = app
        .post("/api/auth/request-verification", None, json!({ "email": "ghost@example.com" }))
        .await;
    assert_status!(known, StatusCode::OK);
    assert_eq!(known.body, unknown.body);

    // A new token replaces the one from sign-up
    let sent = app.emails_to("ada@example.com", 2).await;
    let second = token_from_body(&sent[1].html).unwrap().to_string();
    assert_ne!(first, second);
    let stale = app
        .post("/api/auth/verify-email", None, json!({ "token": first }))
        .await;
    assert_eq!(stale.body["success"], false);
}

#[tokio::test]
async fn test_password_reset_flow() {
    let app = TestApp::new().await;
    signup(&app, "ada@example.com", "Ada").await;

    let requested = app
        .post("/api/auth/forgot-password", None, json!({ "email": "ada@example.com" }))
        .await;
    assert_status!(requested, StatusCode::OK);
    assert_eq!(requested.body["success"], true);

    let reset_token = token_with_subject(&app, "ada@example.com", PASSWORD_RESET_SUBJECT).await;

    let weak = app
        .post(
            "/api/auth/reset-password",
            None,
            json!({ "token": reset_token, "password": "short" }),
        )
        .await;
    assert_eq!(weak.body["success"], false);

    let reset = app
        .post(
            "/api/auth/reset-password",
            None,
            json!({ "token": reset_token, "password": "a-brand-new-password" }),
        )
        .await;
    assert_eq!(reset.body["success"], true);

    let reused = app
        .post(
            "/api/auth/reset-password",
            None,
            json!({ "token": reset_token, "password": "yet-another-password" }),
        )
        .await;
    assert_eq!(reused.body["success"], false);
    assert_contains!(reused.body["error"].as_str().unwrap(), "Invalid");

    let old = app
        .post("/api/auth/login", None, json!({ "email": "ada@example.com", "password": PASSWORD }))
        .await;
    assert_status!(old, StatusCode::UNAUTHORIZED);
    let new = app
        .post(
            "/api/auth/login",
            None,
            json!({ "email": "ada@example.com", "password": "a-brand-new-password" }),
        )
        .await;
    assert_status!(new, StatusCode::OK);
    assert_eq!(new.body["user"]["email_verified"], true);
}

#[tokio::test]
async fn test_reset_then_verification_link_reports_already_verified() {
    let app = TestApp::new().await;
    signup(&app, "ada@example.com", "Ada").await;
    let verification_token = token_from_email(&app, "ada@example.com").await;

    app.post("/api/auth/forgot-password", None, json!({ "email": "ada@example.com" }))
        .await;
    let reset_token = token_with_subject(&app, "ada@example.com", PASSWORD_RESET_SUBJECT).await;
    assert_ne!(reset_token, verification_token);

    let reset = app
        .post(
            "/api/auth/reset-password",
            None,
            json!({ "token": reset_token, "password": "a-brand-new-password" }),
        )
        .await;
    assert_eq!(reset.body["success"], true);

    let verified = app
        .post("/api/auth/verify-email", None, json!({ "token": verification_token }))
        .await;
    assert_eq!(verified.body["success"], true);
    assert_contains!(verified.body["message"].as_str().unwrap(), "already verified");
}

#[tokio::test]
async fn test_reset_requests_are_capped_per_hour() {
    let app = TestApp::new().await;
    signup(&app, "ada@example.com", "Ada").await;

    for _ in 0..3 {
        let response = app
            .post("/api/auth/forgot-password", None, json!({ "email": "ada@example.com" }))
            .await;
        assert_status!(response, StatusCode::OK);
    }
    let capped = get_user_by_email(&app.state.db_pool, "ada@example.com")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(capped.password_reset_request_count, 3);

    let fourth = app
        .post("/api/auth/forgot-password", None, json!({ "email": "ada@example.com" }))
        .await;
    assert_status!(fourth, StatusCode::OK);

    let after = get_user_by_email(&app.state.db_pool, "ada@example.com")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(after.password_reset_request_count, 3);
    assert_eq!(after.password_reset_token, capped.password_reset_token);

    let unknown = app
        .post("/api/auth/forgot-password", None, json!({ "email": "ghost@example.com" }))
        .await;
    assert_eq!(unknown.body, fourth.body);
}
