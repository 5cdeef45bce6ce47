/**
 * API Route Handlers
 *
 * This module wires the JSON API onto the router:
 * - Authentication and account recovery
 * - People, quotes, images and generated images
 * - Admin maintenance
 *
 * # Routes
 *
 * ## Authentication
 * - `POST /api/auth/signup` - User registration
 * - `POST /api/auth/login` - User login
 * - `GET /api/auth/me` - Get current user info
 * - `PATCH /api/auth/me` - Update display name
 *
 * ## Recovery
 * - `POST /api/auth/verify-email` - Redeem a verification token
 * - `POST /api/auth/request-verification` - Email a verification link
 * - `POST /api/auth/resend-verification` - Email a new link to the signed-in user
 * - `POST /api/auth/forgot-password` - Email a password reset link
 * - `POST /api/auth/reset-password` - Redeem a reset token
 *
 * ## Content
 * - `GET|POST /api/people`, `GET|PATCH|DELETE /api/people/{id}`
 * - `GET /api/people/{id}/images`
 * - `GET|POST /api/quotes`, `GET|PATCH|DELETE /api/quotes/{id}`
 * - `POST /api/quotes/{id}/verify`
 * - `GET /api/quotes/{id}/generated-images`
 * - `POST /api/images`, `DELETE /api/images/{id}`
 * - `POST /api/generated-images`, `DELETE /api/generated-images/{id}`
 *
 * ## Admin
 * - `GET /api/admin/users`
 * - `PATCH /api/admin/users/{id}/role`
 * - `DELETE /api/admin/users/{id}`
 * - `POST /api/admin/generated-images/purge`
 */

use axum::{
    routing::{delete, get, patch, post},
    Router,
};

use crate::backend::admin::{delete_user_handler, list_users_handler, purge_generated_images_handler, set_role_handler};
use crate::backend::auth::{get_me, login, signup, update_me};
use crate::backend::images::handlers::{
    create_generated_image_handler, create_image_handler, delete_generated_image_handler, delete_image_handler,
    list_person_images_handler, list_quote_generated_images_handler,
};
use crate::backend::people::handlers::{
    create_person_handler, delete_person_handler, get_person_handler, list_people_handler, update_person_handler,
};
use crate::backend::quotes::handlers::{
    create_quote_handler, delete_quote_handler, get_quote_handler, list_quotes_handler, update_quote_handler,
    verify_quote_handler,
};
use crate::backend::recovery::handlers::{
    forgot_password_handler, request_verification_handler, resend_verification_handler, reset_password_handler,
    verify_email_handler,
};
use crate::backend::server::state::AppState;

/// Configure API routes
///
/// Authentication is checked inside handlers through the `AuthUser`
/// extractor; routes without it are public.
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        // Authentication endpoints
        .route("/api/auth/signup", post(signup))
        .route("/api/auth/login", post(login))
        .route("/api/auth/me", get(get_me).patch(update_me))
        // Verification and password reset
        .route("/api/auth/verify-email", post(verify_email_handler))
        .route("/api/auth/request-verification", post(request_verification_handler))
        .route("/api/auth/resend-verification", post(resend_verification_handler))
        .route("/api/auth/forgot-password", post(forgot_password_handler))
        .route("/api/auth/reset-password", post(reset_password_handler))
        // People
        .route("/api/people", get(list_people_handler).post(create_person_handler))
        .route(
            "/api/people/{id}",
            get(get_person_handler)
                .patch(update_person_handler)
                .delete(delete_person_handler),
        )
        .route("/api/people/{id}/images", get(list_person_images_handler))
        // Quotes
        .route("/api/quotes", get(list_quotes_handler).post(create_quote_handler))
        .route(
            "/api/quotes/{id}",
            get(get_quote_handler)
                .patch(update_quote_handler)
                .delete(delete_quote_handler),
        )
        .route("/api/quotes/{id}/verify", post(verify_quote_handler))
        .route("/api/quotes/{id}/generated-images", get(list_quote_generated_images_handler))
        // Images
        .route("/api/images", post(create_image_handler))
        .route("/api/images/{id}", delete(delete_image_handler))
        .route("/api/generated-images", post(create_generated_image_handler))
        .route("/api/generated-images/{id}", delete(delete_generated_image_handler))
        // Admin
        .route("/api/admin/users", get(list_users_handler))
        .route("/api/admin/users/{id}/role", patch(set_role_handler))
        .route("/api/admin/users/{id}", delete(delete_user_handler))
        .route("/api/admin/generated-images/purge", post(purge_generated_images_handler))
}
