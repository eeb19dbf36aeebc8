//! TQEX - Terminal Quote Explorer Library
//!
//! A terminal application for browsing quotes fetched from a remote HTTP
//! endpoint, built in Rust.

pub mod domain;
pub mod application;
pub mod infrastructure;
pub mod presentation;

pub use domain::*;
pub use application::*;
