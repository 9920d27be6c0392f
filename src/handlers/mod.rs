//! # HTTP Handlers
//!
//! This module contains all the HTTP endpoint handlers for the Customer
//! Directory service.

pub mod customers;

/// Root handler that returns a plain greeting.
pub async fn root() -> &'static str {
    "Hello, World!"
}
