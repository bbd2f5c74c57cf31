//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all product handlers
//! - Mount routes under the configured prefix
//! - Wire up middleware (request ID, tracing, body limit, metrics)
//! - Serve until the shutdown signal fires

use std::future::Future;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    limit::RequestBodyLimitLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::catalog::{CatalogError, HttpCatalog, ProductCatalog};
use crate::config::FacadeConfig;
use crate::http::handlers::{
    add_product, delete_product, filter_products, get_product, list_products, update_product,
};
use crate::http::request::{request_span, X_REQUEST_ID};
use crate::observability::metrics;
use crate::products::ProductService;

/// Application state injected into handlers.
#[derive(Debug, Clone)]
pub struct AppState<C> {
    pub service: ProductService<C>,
}

/// HTTP server for the product facade.
pub struct HttpServer {
    router: Router,
    config: FacadeConfig,
}

impl HttpServer {
    /// Create a server forwarding to the given catalog.
    pub fn new<C: ProductCatalog>(config: FacadeConfig, catalog: C) -> Self {
        let state = AppState {
            service: ProductService::new(catalog),
        };
        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Create a server forwarding to the configured upstream over HTTP.
    pub fn from_config(config: FacadeConfig) -> Result<Self, CatalogError> {
        let catalog = HttpCatalog::new(&config.upstream)?;
        Ok(Self::new(config, catalog))
    }

    /// Build the Axum router with all middleware layers.
    fn build_router<C: ProductCatalog>(config: &FacadeConfig, state: AppState<C>) -> Router {
        let products = Router::new()
            .route("/products/all", get(list_products::<C>))
            .route("/products/filter", get(filter_products::<C>))
            .route("/products/add", post(add_product::<C>))
            .route("/products/update/{id}", post(update_product::<C>))
            .route(
                "/products/{id}",
                get(get_product::<C>).delete(delete_product::<C>),
            )
            .with_state(state);

        let app = if config.api.prefix.is_empty() {
            products
        } else {
            Router::new().nest(&config.api.prefix, products)
        };

        app.layer(middleware::from_fn(metrics::track_requests))
            .layer(
                ServiceBuilder::new()
                    .layer(SetRequestIdLayer::new(X_REQUEST_ID, MakeRequestUuid))
                    .layer(TraceLayer::new_for_http().make_span_with(request_span))
                    .layer(PropagateRequestIdLayer::new(X_REQUEST_ID))
                    .layer(RequestBodyLimitLayer::new(config.security.max_body_size)),
            )
    }

    /// The router, for serving it some other way.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server, accepting connections on the given listener until shutdown.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown: impl Future<Output = ()> + Send + 'static,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            prefix = %self.config.api.prefix,
            upstream = %self.config.upstream.base_url,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown)
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &FacadeConfig {
        &self.config
    }
}
