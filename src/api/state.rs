//! Shared HTTP adapter state.
//!
//! Handlers receive this via `actix_web::web::Data`, so they depend only
//! on the domain ports and stay testable without real I/O. Built once at
//! startup; no ambient global state.

use std::sync::Arc;

use crate::domain::ports::{ItemRepository, UserRepository};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Catalog item store.
    pub items: Arc<dyn ItemRepository>,
    /// User account store consulted by the authentication gate.
    pub users: Arc<dyn UserRepository>,
}
