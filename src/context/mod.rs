pub mod classifier;
pub mod flag_filter;
pub mod position;
pub mod resolver;
