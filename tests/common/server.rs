//! Test server startup.
//!
//! Each test serves its own fixture file on an ephemeral port.

use std::net::SocketAddr;
use std::path::Path;

use climate_api::{create_router, AppState, Config, Dataset};

/// Open `path` and serve it on 127.0.0.1 with a port picked by the OS.
pub async fn start_test_server(path: &Path) -> SocketAddr {
    let config = Config::default();
    let dataset = Dataset::open(path, 2)
        .await
        .expect("Failed to open test dataset");
    dataset
        .verify_schema()
        .await
        .expect("Test dataset does not match schema");

    let app = create_router(AppState::new_shared(config, dataset));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test port");
    let addr = listener.local_addr().expect("No local address");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server error");
    });

    addr
}
