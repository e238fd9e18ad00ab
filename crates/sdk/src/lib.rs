//! # Postman SDK
//!
//! Thin async client for the parts of the Postman API that deal with
//! collections and environments.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use postman_sdk::{PostmanClient, PostmanResult};
//!
//! #[tokio::main]
//! async fn main() -> PostmanResult<()> {
//!     let client = PostmanClient::builder()
//!         .api_key("PMAK-your-api-key")
//!         .build()?;
//!
//!     for collection in client.collections().list().await? {
//!         println!("{} ({})", collection.name, collection.uid);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod transport;

pub use api::CollectionSummary;
pub use client::{PostmanApi, PostmanClient, PostmanClientBuilder};
pub use config::{ClientConfig, DEFAULT_BASE_URL};
pub use error::{PostmanError, PostmanResult};
