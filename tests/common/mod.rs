//! Shared utilities for integration tests.

use std::net::SocketAddr;
use std::time::Duration;

use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use urlshort::config::ShortenerConfig;
use urlshort::lifecycle::{build_redirects, Shutdown};
use urlshort::HttpServer;

/// A redirect server running on an ephemeral port.
pub struct TestServer {
    pub addr: SocketAddr,
    pub shutdown: Shutdown,
    pub handle: JoinHandle<Result<(), std::io::Error>>,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// Trigger shutdown and wait for the server task to finish.
    pub async fn stop(self) {
        self.shutdown.trigger();
        let result = tokio::time::timeout(Duration::from_secs(5), self.handle)
            .await
            .expect("server did not stop in time")
            .expect("server task panicked");
        assert!(result.is_ok());
    }
}

/// Build the redirect chain from `config` and serve it on 127.0.0.1:0.
pub async fn start_server(config: ShortenerConfig) -> TestServer {
    let redirects = build_redirects(&config).unwrap();
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config, redirects);
    let server_shutdown = shutdown.subscribe();
    let handle = tokio::spawn(async move { server.run(listener, server_shutdown).await });

    TestServer { addr, shutdown, handle }
}

/// HTTP client that reports redirects instead of following them.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .no_proxy()
        .build()
        .unwrap()
}

/// Write `content` to a uniquely named temp file with `extension`.
#[allow(dead_code)]
pub fn temp_document(name: &str, extension: &str, content: &str) -> std::path::PathBuf {
    let path = std::env::temp_dir().join(format!(
        "urlshort-{}-{}.{}",
        name,
        std::process::id(),
        extension
    ));
    std::fs::write(&path, content).unwrap();
    path
}
