pub mod api;
pub mod ast;
pub mod codegen;
pub mod error;
pub mod parser;

pub use api::{convert_forms, parse, parse_files};
