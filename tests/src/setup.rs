//! Common test setup functions.

use ad_store::{health::init_schema, AdStore, StoreConfig};
use api::{router, state::AppState};
use axum::Router;
use axum_test::TestServer;

/// Test context backed by a private in-memory SQLite database.
///
/// Uses the real router with all middleware, so every request goes
/// through the same session handling as production.
pub struct TestContext {
    pub store: AdStore,
    pub router: Router,
}

impl TestContext {
    /// Create a new test context with a fresh, empty schema.
    pub async fn new() -> Self {
        let store = AdStore::connect(StoreConfig::in_memory())
            .await
            .expect("Failed to open in-memory datastore");

        init_schema(&store)
            .await
            .expect("Failed to initialize schema");

        let router = router(AppState::new(store.clone()));

        Self { store, router }
    }

    /// Wrap the router in an in-process test server.
    pub fn server(&self) -> TestServer {
        TestServer::new(self.router.clone()).expect("Failed to create test server")
    }

    /// Serve the router on an ephemeral local port and return its base URL.
    pub async fn spawn(&self) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Listener has no address");

        let app = self.router.clone();
        tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        format!("http://{}", addr)
    }
}
