pub mod capability;
pub mod catalog_model;
pub mod error;
pub mod loader;
pub mod snapshot;
