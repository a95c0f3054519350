//! Spawns a real Synapse server on an ephemeral port, backed by a scripted
//! completion backend and an unreachable search endpoint.

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use synapse::gateway::{AppState, create_router};
use synapse::provider::MockBackend;
use synapse::scoring::VerdictThresholds;
use synapse::search::SearchClient;

pub struct TestServer {
    addr: SocketAddr,
    pub backend: Arc<MockBackend>,
}

impl TestServer {
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }
}

pub async fn spawn_test_server(backend: MockBackend) -> TestServer {
    let backend = Arc::new(backend);

    // Port 1 never listens, so every search degrades to an empty snippet.
    let search = SearchClient::new(reqwest::Client::new(), "http://127.0.0.1:1/");
    let state = AppState::new(
        search,
        Arc::clone(&backend),
        VerdictThresholds::default(),
        true,
    );
    let app = create_router(state);

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test listener");
    let addr = listener.local_addr().expect("local addr");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("test server");
    });

    TestServer { addr, backend }
}
