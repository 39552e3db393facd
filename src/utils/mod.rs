//! Utility modules supporting API operations.

mod http;

pub use http::HttpClient;
