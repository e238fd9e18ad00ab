//! Transport layer for the Postman SDK.

pub mod http;

pub use http::HttpTransport;
