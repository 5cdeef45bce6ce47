//! People, quotes and image integration tests
//!
//! Focus on the owner-or-admin rules and on cascades.

use axum::http::StatusCode;
use serde_json::json;

use crate::common::{create_person, create_quote, signup, TestApp, ADMIN_EMAIL};
use crate::{assert_error, assert_status};

#[tokio::test]
async fn test_people_crud_and_slugs() {
    let app = TestApp::new().await;
    let owner = signup(&app, "owner@example.com", "Owner").await;

    let anonymous = app.post("/api/people", None, json!({ "name": "Mark Twain" })).await;
    assert_error!(anonymous, StatusCode::UNAUTHORIZED, "Not authenticated");

    let first = create_person(&app, &owner, "Mark Twain").await;
    create_person(&app, &owner, "Mark Twain").await;

    let by_slug = app.get("/api/people/mark-twain", None).await;
    assert_status!(by_slug, StatusCode::OK);
    assert_eq!(by_slug.body["id"], first.as_str());

    let second = app.get("/api/people/mark-twain-2", None).await;
    assert_status!(second, StatusCode::OK);

    let listed = app.get("/api/people?limit=1", None).await;
    assert_eq!(listed.body.as_array().unwrap().len(), 1);

    let bad_dates = app
        .post(
            "/api/people",
            Some(&owner.token),
            json!({ "name": "Backwards", "birth_date": "1900-01-01", "death_date": "1800-01-01" }),
        )
        .await;
    assert_status!(bad_dates, StatusCode::BAD_REQUEST);

    let missing = app.get("/api/people/nobody", None).await;
    assert_error!(missing, StatusCode::NOT_FOUND, "Person not found");
}

#[tokio::test]
async fn test_owner_or_admin_on_people_and_quotes() {
    let app = TestApp::new().await;
    let owner = signup(&app, "owner@example.com", "Owner").await;
    let other = signup(&app, "other@example.com", "Other").await;
    let admin = signup(&app, ADMIN_EMAIL, "Admin").await;

    let person = create_person(&app, &owner, "Oscar Wilde").await;
    let quote = create_quote(&app, &owner, &person, "I can resist everything except temptation.").await;

    let denied = app
        .patch(&format!("/api/people/{}", person), Some(&other.token), json!({ "bio": "Hijacked" }))
        .await;
    assert_error!(denied, StatusCode::FORBIDDEN, "Not authorized to modify this resource");

    let denied = app
        .patch(&format!("/api/quotes/{}", quote), Some(&other.token), json!({ "text": "Hijacked" }))
        .await;
    assert_status!(denied, StatusCode::FORBIDDEN);

    let by_owner = app
        .patch(&format!("/api/quotes/{}", quote), Some(&owner.token), json!({ "source": "Lady Windermere's Fan" }))
        .await;
    assert_status!(by_owner, StatusCode::OK);
    assert_eq!(by_owner.body["source"], "Lady Windermere's Fan");

    let by_admin = app
        .patch(&format!("/api/people/{}", person), Some(&admin.token), json!({ "bio": "Irish poet" }))
        .await;
    assert_status!(by_admin, StatusCode::OK);
    assert_eq!(by_admin.body["bio"], "Irish poet");

    let verify_denied = app
        .post(&format!("/api/quotes/{}/verify", quote), Some(&owner.token), json!({ "verified": true }))
        .await;
    assert_error!(verify_denied, StatusCode::FORBIDDEN, "Admin access required");

    let verified = app
        .post(&format!("/api/quotes/{}/verify", quote), Some(&admin.token), json!({ "verified": true }))
        .await;
    assert_status!(verified, StatusCode::OK);
    assert_eq!(verified.body["verified"], true);
}

#[tokio::test]
async fn test_quote_listing_and_validation() {
    let app = TestApp::new().await;
    let user = signup(&app, "ada@example.com", "Ada").await;
    let twain = create_person(&app, &user, "Mark Twain").await;
    let wilde = create_person(&app, &user, "Oscar Wilde").await;
    create_quote(&app, &user, &twain, "Twain one").await;
    create_quote(&app, &user, &twain, "Twain two").await;
    create_quote(&app, &user, &wilde, "Wilde one").await;

    let all = app.get("/api/quotes", None).await;
    assert_eq!(all.body.as_array().unwrap().len(), 3);

    let twain_only = app.get(&format!("/api/quotes?person_id={}", twain), None).await;
    assert_eq!(twain_only.body.as_array().unwrap().len(), 2);

    let blank = app
        .post("/api/quotes", Some(&user.token), json!({ "person_id": twain, "text": "   " }))
        .await;
    assert_error!(blank, StatusCode::BAD_REQUEST, "Quote text is required");

    let orphan = app
        .post(
            "/api/quotes",
            Some(&user.token),
            json!({ "person_id": "00000000-0000-0000-0000-000000000000", "text": "Who said this?" }),
        )
        .await;
    assert_error!(orphan, StatusCode::NOT_FOUND, "Person not found");
}

#[tokio::test]
async fn test_person_delete_cascades() {
    let app = TestApp::new().await;
    let user = signup(&app, "ada@example.com", "Ada").await;
    let person = create_person(&app, &user, "Mark Twain").await;
    let quote = create_quote(&app, &user, &person, "Twain").await;

    let image = app
        .post(
            "/api/images",
            Some(&user.token),
            json!({
                "person_id": person,
                "cloudinary_id": "people/twain",
                "url": "https://res.cloudinary.com/demo/people/twain.jpg",
                "width": 800,
                "height": 600
            }),
        )
        .await;
    assert_status!(image, StatusCode::CREATED);

    let card = app
        .post(
            "/api/generated-images",
            Some(&user.token),
            json!({
                "quote_id": quote,
                "cloudinary_id": "cards/twain",
                "url": "https://res.cloudinary.com/demo/cards/twain.png",
                "width": 1200,
                "height": 630,
                "ttl_secs": 3600
            }),
        )
        .await;
    assert_status!(card, StatusCode::CREATED);
    assert!(card.body["expires_at"].is_string());

    let images = app.get(&format!("/api/people/{}/images", person), None).await;
    assert_eq!(images.body.as_array().unwrap().len(), 1);
    let cards = app.get(&format!("/api/quotes/{}/generated-images", quote), None).await;
    assert_eq!(cards.body.as_array().unwrap().len(), 1);

    let deleted = app.delete(&format!("/api/people/{}", person), Some(&user.token)).await;
    assert_status!(deleted, StatusCode::NO_CONTENT);

    let quote_gone = app.get(&format!("/api/quotes/{}", quote), None).await;
    assert_status!(quote_gone, StatusCode::NOT_FOUND);
    let images_gone = app.get(&format!("/api/people/{}/images", person), None).await;
    assert_status!(images_gone, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_image_rules() {
    let app = TestApp::new().await;
    let owner = signup(&app, "owner@example.com", "Owner").await;
    let other = signup(&app, "other@example.com", "Other").await;
    let person = create_person(&app, &owner, "Ada Lovelace").await;

    let insecure = app
        .post(
            "/api/images",
            Some(&owner.token),
            json!({
                "person_id": person,
                "cloudinary_id": "people/ada",
                "url": "http://res.cloudinary.com/demo/people/ada.jpg",
                "width": 10,
                "height": 10
            }),
        )
        .await;
    assert_error!(insecure, StatusCode::BAD_REQUEST, "URL must use https");

    let image = app
        .post(
            "/api/images",
            Some(&owner.token),
            json!({
                "person_id": person,
                "cloudinary_id": "people/ada",
                "url": "https://res.cloudinary.com/demo/people/ada.jpg",
                "width": 10,
                "height": 10
            }),
        )
        .await;
    let image_id = image.body["id"].as_str().unwrap().to_string();

    let denied = app.delete(&format!("/api/images/{}", image_id), Some(&other.token)).await;
    assert_status!(denied, StatusCode::FORBIDDEN);

    let deleted = app.delete(&format!("/api/images/{}", image_id), Some(&owner.token)).await;
    assert_status!(deleted, StatusCode::NO_CONTENT);
}
