//! Utility functions for code generation, sanitization, and request handling.
//!
//! - [`code_generator`] - Short code generation and the timestamp fallback
//! - [`sanitize`] - Control character stripping for stored prompts
//! - [`url_encode`] - Query-component percent-encoding for redirect targets
//! - [`client_ip`] - Client identifier extraction from request headers

pub mod client_ip;
pub mod code_generator;
pub mod sanitize;
pub mod url_encode;
