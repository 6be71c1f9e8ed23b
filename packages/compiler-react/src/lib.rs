//! # Framecraft React Compiler
//!
//! Turns a page tree into a React function component styled with Tailwind
//! utility classes. Compilation is a pure function of the page and the
//! options; it never touches the editor session.

mod compiler;
mod config;
mod context;
pub mod tailwind;

pub use compiler::{compile_page, compile_project, component_name, CompiledPage};
pub use config::{CompileOptions, DEFAULT_CONFIG_NAME};
pub use context::CompilerContext;

#[cfg(test)]
mod tests;
