//! Service Error Module
//!
//! This module defines the error types used by HTTP handlers and their
//! conversion to HTTP responses.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error type definitions
//! └── conversion.rs - IntoResponse implementation
//! ```
//!
//! # Response Shapes
//!
//! Field-level errors (validation failures, credential errors) are rendered
//! as a flat JSON map of field name to message, matching the API contract.
//! All other errors use a `{"error": ..., "status": ...}` body.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::ApiError;
