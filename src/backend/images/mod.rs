//! Images Module
//!
//! Metadata for CDN-hosted photos of people and for rendered quote cards
//! ("generated images"). Generated images may carry an expiry; expired
//! rows are hidden from listings and removed by [`db::purge_expired_generated_images`].

pub mod types;
pub mod db;
pub mod handlers;

pub use db::purge_expired_generated_images;
pub use types::{CreateGeneratedImageRequest, CreateImageRequest, GeneratedImage, Image, PurgeResponse};
