pub mod client;
pub mod models;

pub use client::{DocumentClient, firestore_base_url};
pub use models::Document;
