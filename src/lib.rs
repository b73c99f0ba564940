//! Snippet composition and cursor-context disambiguation for an
//! action-based test-scripting language.
//!
//! The catalog of action descriptors is compiled into insertable templates
//! (`snippet`), and the text around the cursor decides whether full actions
//! or per-action parameter flags are offered (`context`, `engine`).

pub mod catalog;
pub mod cli;
pub mod context;
pub mod engine;
pub mod output;
pub mod snippet;
