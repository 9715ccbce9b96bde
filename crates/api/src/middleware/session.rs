//! Per-request datastore session middleware.

use std::sync::Arc;

use ad_store::Session;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use tokio::sync::{Mutex, MutexGuard};

use crate::state::AppState;

/// Shared handle to the request's session, stored in request extensions.
#[derive(Clone)]
pub struct SessionHandle(Arc<Mutex<Session>>);

impl SessionHandle {
    pub fn new(session: Session) -> Self {
        Self(Arc::new(Mutex::new(session)))
    }

    pub async fn lock(&self) -> MutexGuard<'_, Session> {
        self.0.lock().await
    }

    /// Release the session. Uncommitted work is rolled back.
    pub async fn close(&self) {
        self.0.lock().await.close().await;
    }
}

/// Opens one session for the request and closes it once the response is
/// produced. If the handler panics, dropping the last handle rolls the
/// transaction back and returns the connection to the pool.
pub async fn session_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let handle = SessionHandle::new(state.store.session());
    request.extensions_mut().insert(handle.clone());

    let response = next.run(request).await;

    handle.close().await;
    response
}
