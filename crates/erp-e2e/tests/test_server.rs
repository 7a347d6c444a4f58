// Test Server - Local mock of the ERP for integration tests
//
// Serves a single-page ERP imitation whose markup matches the selectors the
// actions use (DevExpress-style ids, toolbar titles, toast container).
// Data lives in the page's sessionStorage, so every browser context starts
// from the same seed records:
// - Document Type: "Passport" (DT-001), "Civil ID" (DT-002)
// - Stock Adjustment Reason: "Damaged Goods" (SAR-001)

// Note: Functions appear "unused" because each test binary compiles separately,
// but they ARE used across multiple test files. Suppress false-positive warnings.
#![allow(dead_code)]

use axum::{
    Router,
    body::Body,
    http::{Response, StatusCode},
    routing::get,
};
use std::net::SocketAddr;
use tokio::task::JoinHandle;

const MOCK_ERP: &str = include_str!("assets/mock_erp.html");
const DOCUMENT_PAGE: &str = include_str!("assets/document.html");

/// Test server handle
pub struct TestServer {
    addr: SocketAddr,
    handle: JoinHandle<()>,
}

impl TestServer {
    /// Start the test server on a random available port
    pub async fn start() -> Self {
        let app = Router::new()
            .route("/document.html", get(document_page))
            .fallback(get(erp_page));

        // Bind to port 0 to get any available port
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test server");

        let addr = listener.local_addr().expect("Failed to get local address");

        let handle = tokio::spawn(async move {
            axum::serve(listener, app)
                .await
                .expect("Test server failed");
        });

        TestServer { addr, handle }
    }

    /// Get the base URL of the test server
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Shutdown the test server
    pub fn shutdown(self) {
        self.handle.abort();
    }
}

async fn erp_page() -> Response<Body> {
    html(MOCK_ERP)
}

async fn document_page() -> Response<Body> {
    html(DOCUMENT_PAGE)
}

fn html(body: &'static str) -> Response<Body> {
    Response::builder()
        .status(StatusCode::OK)
        .header("Content-Type", "text/html; charset=utf-8")
        .body(Body::from(body))
        .unwrap()
}
