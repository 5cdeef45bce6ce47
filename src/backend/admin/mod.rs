//! Admin Module
//!
//! Account maintenance for admins: listing users, changing roles, deleting
//! accounts and purging expired generated images on demand.

pub mod handlers;

pub use handlers::{
    delete_user_handler, list_users_handler, purge_generated_images_handler, set_role_handler, SetRoleRequest,
};
