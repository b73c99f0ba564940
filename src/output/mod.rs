pub mod console;
pub mod snippet_file;
