//! Custom Axum extractors.
//!
//! Extractors for authenticating devices and users, and for request data
//! (JSON bodies, path parameters, query strings) with JSON error rejections.

pub mod api_key;
pub mod json;
pub mod path;
pub mod query;
pub mod user_auth;

pub use api_key::{IotApiKey, IOT_API_KEY_HEADER};
pub use json::JsonBody;
pub use path::PathParam;
pub use query::QueryParams;
