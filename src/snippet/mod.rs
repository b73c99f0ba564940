pub mod catalog_set;
pub mod compiler;
pub mod snippet_model;
pub mod token;
