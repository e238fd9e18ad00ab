//! API endpoint groups.

pub mod collections;
pub mod environments;

pub use collections::{CollectionSummary, CollectionsApi};
pub use environments::EnvironmentsApi;
