//! Admin endpoint integration tests

use axum::http::StatusCode;
use chrono::{Duration, Utc};
use serde_json::json;
use uuid::Uuid;

use crate::common::{create_person, create_quote, signup, TestApp, ADMIN_EMAIL};
use crate::{assert_error, assert_status};
use so_quotable::backend::images::db::{create_generated_image, NewGeneratedImage};

#[tokio::test]
async fn test_admin_endpoints_reject_regular_users() {
    let app = TestApp::new().await;
    let user = signup(&app, "user@example.com", "User").await;

    let listed = app.get("/api/admin/users", Some(&user.token)).await;
    assert_error!(listed, StatusCode::FORBIDDEN, "Admin access required");

    let purge = app
        .post("/api/admin/generated-images/purge", Some(&user.token), json!({}))
        .await;
    assert_status!(purge, StatusCode::FORBIDDEN);

    let own_delete = app.delete(&format!("/api/admin/users/{}", user.id), Some(&user.token)).await;
    assert_error!(own_delete, StatusCode::FORBIDDEN, "Admin access required");

    let own_role = app
        .patch(
            &format!("/api/admin/users/{}/role", user.id),
            Some(&user.token),
            json!({ "role": "user" }),
        )
        .await;
    assert_error!(own_role, StatusCode::FORBIDDEN, "Admin access required");

    let anonymous = app.get("/api/admin/users", None).await;
    assert_status!(anonymous, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_role_changes_take_effect_immediately() {
    let app = TestApp::new().await;
    let admin = signup(&app, ADMIN_EMAIL, "Admin").await;
    let user = signup(&app, "user@example.com", "User").await;

    let listed = app.get("/api/admin/users", Some(&admin.token)).await;
    assert_status!(listed, StatusCode::OK);
    assert_eq!(listed.body.as_array().unwrap().len(), 2);

    let promoted = app
        .patch(
            &format!("/api/admin/users/{}/role", user.id),
            Some(&admin.token),
            json!({ "role": "admin" }),
        )
        .await;
    assert_status!(promoted, StatusCode::OK);
    assert_eq!(promoted.body["role"], "admin");

    // The role is read from the database, so the old session token now has admin rights
    let as_admin = app.get("/api/admin/users", Some(&user.token)).await;
    assert_status!(as_admin, StatusCode::OK);

    let demoted = app
        .patch(
            &format!("/api/admin/users/{}/role", user.id),
            Some(&admin.token),
            json!({ "role": "user" }),
        )
        .await;
    assert_status!(demoted, StatusCode::OK);
    let revoked = app.get("/api/admin/users", Some(&user.token)).await;
    assert_status!(revoked, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_delete_user() {
    let app = TestApp::new().await;
    let admin = signup(&app, ADMIN_EMAIL, "Admin").await;
    let user = signup(&app, "user@example.com", "User").await;
    let person = create_person(&app, &user, "Mark Twain").await;

    let self_delete = app.delete(&format!("/api/admin/users/{}", admin.id), Some(&admin.token)).await;
    assert_status!(self_delete, StatusCode::BAD_REQUEST);

    let deleted = app.delete(&format!("/api/admin/users/{}", user.id), Some(&admin.token)).await;
    assert_status!(deleted, StatusCode::NO_CONTENT);

    // Content survives without an owner
    let kept = app.get(&format!("/api/people/{}", person), None).await;
    assert_status!(kept, StatusCode::OK);
    assert!(kept.body["created_by"].is_null());

    // The deleted account's session no longer authenticates
    let stale = app.get("/api/auth/me", Some(&user.token)).await;
    assert_status!(stale, StatusCode::UNAUTHORIZED);

    let missing = app
        .delete(&format!("/api/admin/users/{}", Uuid::new_v4()), Some(&admin.token))
        .await;
    assert_error!(missing, StatusCode::NOT_FOUND, "User not found");
}

#[tokio::test]
async fn test_purge_expired_generated_images() {
    let app = TestApp::new().await;
    let admin = signup(&app, ADMIN_EMAIL, "Admin").await;
    let person = create_person(&app, &admin, "Oscar Wilde").await;
    let quote = create_quote(&app, &admin, &person, "Be yourself.").await;
    let quote_id = Uuid::parse_str(&quote).unwrap();

    for offset in [-3600, 3600] {
        create_generated_image(
            &app.state.db_pool,
            NewGeneratedImage {
                quote_id,
                cloudinary_id: "cards/wilde".to_string(),
                url: "https://res.cloudinary.com/demo/cards/wilde.png".to_string(),
                width: 1200,
                height: 630,
                expires_at: Some(Utc::now() + Duration::seconds(offset)),
                created_by: None,
            },
            Utc::now(),
        )
        .await
        .unwrap();
    }

    let visible = app.get(&format!("/api/quotes/{}/generated-images", quote), None).await;
    assert_eq!(visible.body.as_array().unwrap().len(), 1);

    let purged = app
        .post("/api/admin/generated-images/purge", Some(&admin.token), json!({}))
        .await;
    assert_status!(purged, StatusCode::OK);
    assert_eq!(purged.body["deleted"], 1);

    let again = app
        .post("/api/admin/generated-images/purge", Some(&admin.token), json!({}))
        .await;
    assert_eq!(again.body["deleted"], 0);
}
