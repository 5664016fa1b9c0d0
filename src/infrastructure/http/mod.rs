//! HTTP configuration source
//!
//! Fetches network configuration documents over HTTP(S) with reqwest.

pub mod source;

pub use source::HttpConfigSource;
