//! Product request handling.
//!
//! # Data Flow
//! ```text
//! http handlers
//!     → service.rs (one catalog call per operation)
//!     → filter.rs (field predicate, filter endpoint only)
//!     → window.rs (offset/limit)
//!     → back to the handler for wrapping in the envelope
//! ```

pub mod filter;
pub mod service;
pub mod window;

pub use filter::{FilterError, ProductFilter};
pub use service::{ProductService, ServiceError};
pub use window::Window;
