//! Storage adapters behind the repository traits.

pub mod json_file;
pub mod memory;
pub mod questions_json;
pub mod roster_json;
