//! HTTP adapter: routes, extractors, and error mapping.

pub mod auth;
pub mod error;
pub mod items;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::HttpState;
