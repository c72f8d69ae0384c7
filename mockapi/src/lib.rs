//! In-process Bookstore API
//!
//! Implements the contract the harness exercises: CRUD over
//! `/api/v1/Authors` and `/api/v1/Books` with in-memory storage. Used by the
//! integration tests to run suites hermetically, without the public API.

pub mod routes;
pub mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

pub use state::ApiState;

/// Build the router over the given state.
pub fn router(state: Arc<ApiState>) -> Router {
    Router::new()
        .route(
            "/api/v1/Authors",
            get(routes::list_authors).post(routes::create_author),
        )
        .route(
            "/api/v1/Authors/:id",
            get(routes::get_author)
                .put(routes::update_author)
                .delete(routes::delete_author),
        )
        .route(
            "/api/v1/Books",
            get(routes::list_books).post(routes::create_book),
        )
        .route(
            "/api/v1/Books/:id",
            get(routes::get_book)
                .put(routes::update_book)
                .delete(routes::delete_book),
        )
        .with_state(state)
}

/// Running mock server bound to an ephemeral local port. The server task is
/// aborted when this handle drops.
pub struct MockApi {
    addr: SocketAddr,
    handle: JoinHandle<()>,
}

impl MockApi {
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }
}

impl Drop for MockApi {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Serve a freshly seeded API on an ephemeral port.
pub async fn spawn() -> std::io::Result<MockApi> {
    let state = Arc::new(ApiState::seeded());
    let app = router(state);

    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;

    let handle = tokio::spawn(async move {
        if let Err(error) = axum::serve(listener, app).await {
            tracing::error!("mock api stopped: {}", error);
        }
    });

    tracing::debug!("mock api listening on {}", addr);
    Ok(MockApi { addr, handle })
}
