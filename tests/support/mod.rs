//! Shared harness for integration tests: a bootstrapped state backed by a
//! temporary SQLite file that lives as long as the context.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use catalog::api::state::HttpState;
use catalog::server::{self, config::ServerConfig};
use tempfile::TempDir;

pub struct TestContext {
    pub state: HttpState,
    pub config: ServerConfig,
    _dir: TempDir,
}

/// Run the full startup sequence (migrations + admin seeding) against a
/// fresh database file.
pub async fn bootstrap_context() -> TestContext {
    let dir = tempfile::tempdir().expect("create temp dir");
    let db_path = dir.path().join("catalog.db");
    let config = ServerConfig::with_database_url(db_path.to_string_lossy());
    let state = server::bootstrap(&config)
        .await
        .expect("bootstrap test database");
    TestContext {
        state,
        config,
        _dir: dir,
    }
}

/// Build an `Authorization: Basic` header pair.
pub fn basic_auth_header(username: &str, password: &str) -> (&'static str, String) {
    let token = BASE64_STANDARD.encode(format!("{username}:{password}"));
    ("Authorization", format!("Basic {token}"))
}
