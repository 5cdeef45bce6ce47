//! Authentication test helpers
//!
//! Sign up through the API, pull tokens out of the emails the console
//! mailer recorded, and build people and quotes for authorization tests.

use axum::http::StatusCode;
use serde_json::json;

use super::app::{TestApp, PASSWORD};
use so_quotable::backend::email::templates::token_from_body;

/// A signed-up account
pub struct TestUser {
    pub id: String,
    pub email: String,
    pub token: String,
}

/// Sign up with the shared test password
pub async fn signup(app: &TestApp, email: &str, name: &str) -> TestUser {
    let response = app
        .post(
            "/api/auth/signup",
            None,
            json!({ "email": email, "password": PASSWORD, "name": name }),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK, "signup failed: {}", response.body);

    TestUser {
        id: response.body["user"]["id"].as_str().unwrap().to_string(),
        email: email.to_string(),
        token: response.body["token"].as_str().unwrap().to_string(),
    }
}

/// Token embedded in the most recent email sent to `to`
pub async fn token_from_email(app: &TestApp, to: &str) -> String {
    let email = app.email_to(to).await;
    token_from_body(&email.html)
        .expect("email contains a token link")
        .to_string()
}

/// Token from the most recent email to `to` with the given subject
pub async fn token_with_subject(app: &TestApp, to: &str, subject: &str) -> String {
    for _ in 0..100 {
        let found = app
            .mailer
            .sent()
            .into_iter()
            .rev()
            .find(|e| e.to == to && e.subject == subject);
        if let Some(email) = found {
            return token_from_body(&email.html)
                .expect("email contains a token link")
                .to_string();
        }
        tokio::time::sleep(std::time::Duration::from_millis(10)).await;
    }
    panic!("no '{}' email sent to {}", subject, to);
}

pub async fn create_person(app: &TestApp, user: &TestUser, name: &str) -> String {
    let response = app
        .post("/api/people", Some(&user.token), json!({ "name": name }))
        .await;
    assert_eq!(response.status, StatusCode::CREATED, "{}", response.body);
    response.body["id"].as_str().unwrap().to_string()
}

pub async fn create_quote(app: &TestApp, user: &TestUser, person_id: &str, text: &str) -> String {
    let response = app
        .post(
            "/api/quotes",
            Some(&user.token),
            json!({ "person_id": person_id, "text": text }),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED, "{}", response.body);
    response.body["id"].as_str().unwrap().to_string()
}
