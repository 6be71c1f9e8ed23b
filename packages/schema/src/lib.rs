//! # Framecraft Schema
//!
//! The document model edited by the designer and read by the compilers.
//!
//! ```text
//! Project ── Page ── root: TplNode ── children: [TplNode, ...]
//! ```
//!
//! The schema is the source of truth: generated code is always derived from
//! it. Tree edits go through [`tree`], which returns new roots and leaves the
//! previous version intact.

mod id_generator;
mod model;
pub mod tree;

pub use id_generator::{seed_for, IdGenerator};
pub use model::{
    default_root, AlignItems, Content, Display, FlexDirection, FontWeight, JustifyContent, Layout,
    LayoutPatch, NodeKind, NodePatch, Page, Project, Styles, TplNode,
};
