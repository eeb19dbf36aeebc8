//! Infrastructure layer providing external service integrations.
//!
//! This module contains the HTTP access to the remote quote source and the
//! background dispatch that keeps the UI loop from blocking on the network.

pub mod http;

pub use http::*;
