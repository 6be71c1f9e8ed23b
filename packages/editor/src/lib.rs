//! # Framecraft Editor
//!
//! Editing sessions over the framecraft document model.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ editor surface (canvas, panels, shortcuts)  │
//! └─────────────────────────────────────────────┘
//!                     ↓ Command
//! ┌─────────────────────────────────────────────┐
//! │ editor: EditSession                         │
//! │  - Apply commands atomically                │
//! │  - Guard document invariants                │
//! │  - Notify subscribers on commit             │
//! └─────────────────────────────────────────────┘
//!                     ↓ tree::{update, delete, insert_child}
//! ┌─────────────────────────────────────────────┐
//! │ schema: Project → Page → TplNode tree       │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! Code generation reads page snapshots from the session; the editor never
//! depends on a compiler.
//!
//! ## Usage
//!
//! ```rust
//! use framecraft_editor::EditSession;
//! use framecraft_schema::{Content, TplNode};
//!
//! let mut session = EditSession::new("designer");
//! session.create_project("Portfolio");
//!
//! let id = session.next_id();
//! session.add_node(TplNode::text(id.clone(), "Title").with_content(Content::text("Hi")), None);
//!
//! assert_eq!(session.selected_node().map(|n| n.id.as_str()), Some(id.as_str()));
//! ```

mod errors;
mod mutations;
mod observer;
mod session;
mod state;

pub use errors::{EditorError, ErrorKind};
pub use mutations::{Command, FIRST_PAGE_NAME};
pub use observer::{Listener, SubscriptionId};
pub use session::EditSession;
pub use state::{EditorState, Tool, MAX_ZOOM, MIN_ZOOM};
