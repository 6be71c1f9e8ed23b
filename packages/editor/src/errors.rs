//! Error types for the editor
//!
//! Every command is total: a rejected command leaves the session untouched
//! and reports one of these values instead of panicking.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EditorError {
    #[error("No project is open")]
    NoProject,

    #[error("No current page")]
    NoCurrentPage,

    #[error("Page not found: {0}")]
    PageNotFound(String),

    #[error("Node not found: {0}")]
    NodeNotFound(String),

    #[error("Cannot delete the last page of a project")]
    LastPage,

    #[error("Cannot delete the root node: {0}")]
    RootNode(String),

    #[error("Node id already exists on this page: {0}")]
    DuplicateNodeId(String),

    #[error("Zoom must be a number")]
    InvalidZoom,
}

/// Broad category of a rejection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// An id lookup missed
    NotFound,
    /// The command would break a document invariant
    InvariantGuard,
    /// The command needs a project or page that isn't there
    UnsetState,
}

impl EditorError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            EditorError::PageNotFound(_) | EditorError::NodeNotFound(_) => ErrorKind::NotFound,
            EditorError::LastPage
            | EditorError::RootNode(_)
            | EditorError::DuplicateNodeId(_)
            | EditorError::InvalidZoom => ErrorKind::InvariantGuard,
            EditorError::NoProject | EditorError::NoCurrentPage => ErrorKind::UnsetState,
        }
    }
}
