//! Serializes a virtual DOM document back to HTML markup.

mod compiler;


pub use compiler::{compile_fragment, compile_to_html, CompileOptions};
