//! Outer surfaces: CSV replay and the HTTP API.

pub mod csv;
pub mod http;
