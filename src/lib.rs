//! dbcurl: CURL-like HTTP calls for database hosts
//!
//! A library of blocking GET, POST and PUT operations that a database
//! engine can expose to its callers, with a compact header syntax and a
//! fixed-delay retry variant for uploads.

pub mod config;
pub mod curl;
pub mod header;
pub mod retry;
pub mod sink;
pub mod time;
pub mod transport;
