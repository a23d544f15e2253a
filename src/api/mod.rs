//! API module for the HTTP binding
//!
//! The store is shape-agnostic; this module is the reference HTTP binding
//! used by external callers.

pub mod http;
pub mod rest;

pub use http::create_router;
