//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware)
//!     → request.rs (request ID span, query parameters)
//!     → handlers.rs (one ProductService call)
//!     → response.rs (envelope, failure → status)
//!     → Send to client
//! ```

pub mod handlers;
pub mod request;
pub mod response;
pub mod server;

pub use request::X_REQUEST_ID;
pub use response::{ApiResponse, Failure};
pub use server::{AppState, HttpServer};
