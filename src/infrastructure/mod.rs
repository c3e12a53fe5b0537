//! External integrations.

pub mod store;
