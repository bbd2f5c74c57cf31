//! Shared utilities for integration testing.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use fake_store_facade::config::FacadeConfig;
use fake_store_facade::{HttpCatalog, HttpServer, Product, Shutdown};
use tokio::net::TcpListener;

/// Log of `METHOD /path` lines received by a mock upstream.
pub type CallLog = Arc<Mutex<Vec<String>>>;

#[derive(Clone)]
struct UpstreamState {
    products: Arc<Vec<Product>>,
    calls: CallLog,
}

/// An in-process stand-in for the upstream products API.
pub struct MockUpstream {
    pub base_url: String,
    pub calls: CallLog,
}

impl MockUpstream {
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

pub fn product(id: u64, title: &str, category: &str, price: f64) -> Product {
    Product {
        id: Some(id),
        title: title.into(),
        price,
        description: format!("{title} description"),
        category: category.into(),
        image: format!("https://img.example/{id}.jpg"),
    }
}

pub fn sample_products() -> Vec<Product> {
    vec![
        product(1, "Fjallraven Backpack", "men's clothing", 109.95),
        product(2, "Slim Fit T-Shirt", "men's clothing", 22.3),
        product(3, "Cotton Jacket", "men's clothing", 55.99),
        product(4, "Gold Ring", "jewelery", 10.0),
        product(5, "Silver Ring", "jewelery", 20.0),
        product(6, "Portable SSD", "electronics", 15.0),
        product(7, "Rain Jacket", "women's clothing", 39.99),
    ]
}

/// Start a mock upstream behaving like the public fake store API:
/// a missing item is a 200 with an empty body, delete of a missing item is a 404,
/// create assigns id 21, and POST to an item URL echoes the body with that id.
pub async fn start_mock_upstream(products: Vec<Product>) -> MockUpstream {
    let calls: CallLog = Arc::default();
    let state = UpstreamState {
        products: Arc::new(products),
        calls: calls.clone(),
    };

    let app = Router::new()
        .route("/products", get(list).post(create))
        .route("/products/{id}", get(fetch).delete(remove).post(update))
        .with_state(state);

    let addr = serve(app).await;
    MockUpstream {
        base_url: format!("http://{}/products", addr),
        calls,
    }
}

/// Start a mock upstream whose every endpoint answers with `status` and `body`.
pub async fn start_fixed_upstream(status: u16, body: &'static str) -> MockUpstream {
    let status = StatusCode::from_u16(status).unwrap();
    let app = Router::new().fallback(move || async move { (status, body) });
    let addr = serve(app).await;
    MockUpstream {
        base_url: format!("http://{}/products", addr),
        calls: Arc::default(),
    }
}

/// A base URL nothing is listening on.
pub async fn unreachable_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/products", addr)
}

async fn serve(app: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    addr
}

async fn list(State(state): State<UpstreamState>) -> Json<Vec<Product>> {
    state.calls.lock().unwrap().push("GET /products".into());
    Json(state.products.as_ref().clone())
}

async fn fetch(State(state): State<UpstreamState>, Path(id): Path<u64>) -> impl IntoResponse {
    state.calls.lock().unwrap().push(format!("GET /products/{id}"));
    match state.products.iter().find(|p| p.id == Some(id)) {
        Some(product) => Json(product.clone()).into_response(),
        None => StatusCode::OK.into_response(),
    }
}

async fn remove(State(state): State<UpstreamState>, Path(id): Path<u64>) -> impl IntoResponse {
    state.calls.lock().unwrap().push(format!("DELETE /products/{id}"));
    match state.products.iter().find(|p| p.id == Some(id)) {
        Some(product) => Json(product.clone()).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn create(State(state): State<UpstreamState>, Json(product): Json<Product>) -> Json<Product> {
    state.calls.lock().unwrap().push("POST /products".into());
    Json(Product { id: Some(21), ..product })
}

async fn update(
    State(state): State<UpstreamState>,
    Path(id): Path<u64>,
    Json(product): Json<Product>,
) -> Json<Product> {
    state.calls.lock().unwrap().push(format!("POST /products/{id}"));
    Json(Product { id: Some(id), ..product })
}

/// A running facade. Dropping it stops the server.
pub struct TestFacade {
    /// Base URL including the API prefix, e.g. `http://127.0.0.1:1234/api/v1`.
    pub url: String,
    _shutdown: Shutdown,
}

/// Start the facade on an ephemeral port, forwarding to `upstream_base_url`.
pub async fn start_facade(upstream_base_url: &str) -> TestFacade {
    let mut config = FacadeConfig::default();
    config.listener.bind_address = "127.0.0.1:0".into();
    config.upstream.base_url = upstream_base_url.to_string();
    config.upstream.system_proxy = false;

    let catalog = HttpCatalog::new(&config.upstream).unwrap();
    let prefix = config.api.prefix.clone();
    let server = HttpServer::new(config, catalog);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.signal();
    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    TestFacade {
        url: format!("http://{}{}", addr, prefix),
        _shutdown: shutdown,
    }
}
