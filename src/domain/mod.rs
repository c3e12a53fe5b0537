//! Core domain abstractions.

pub mod store;

pub use store::{KeyValueStore, StoreError, StoreResult};
