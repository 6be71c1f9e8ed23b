//! # Edit Session
//!
//! An `EditSession` is the single writer of one editing session's state:
//! the open project, the current page, the selection, the active tool and the
//! zoom level. Sessions are plain values; create one per editing session and
//! pass it by reference to whatever drives the editor.
//!
//! All commands run synchronously. Each one is either committed, after which
//! listeners are notified, or rejected with no visible effect.

use crate::mutations::Command;
use crate::observer::{Listener, Listeners, SubscriptionId};
use crate::state::{EditorState, Tool};
use crate::EditorError;
use framecraft_schema::{IdGenerator, LayoutPatch, NodePatch, Page, Project, Styles, TplNode};
use tracing::{debug, instrument};

#[derive(Debug)]
pub struct EditSession {
    /// Session label, also the seed for generated ids
    pub id: String,

    state: EditorState,
    ids: IdGenerator,
    listeners: Listeners,
}

impl EditSession {
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        let ids = IdGenerator::new(&id);

        Self {
            id,
            state: EditorState::default(),
            ids,
            listeners: Listeners::new(),
        }
    }

    /// Apply a command and notify listeners if it was committed
    #[instrument(skip(self, command), fields(session = %self.id, command = command.name()))]
    pub fn dispatch(&mut self, command: Command) -> Result<(), EditorError> {
        match command.apply(&mut self.state, &mut self.ids) {
            Ok(()) => {
                debug!("command committed");
                self.listeners.notify(&self.state);
                Ok(())
            }
            Err(err) => {
                debug!(reason = %err, kind = ?err.kind(), "command ignored");
                Err(err)
            }
        }
    }

    /// Mint a fresh id for a node the caller is about to add
    pub fn next_id(&mut self) -> String {
        self.ids.new_id()
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&EditorState) + 'static) -> SubscriptionId {
        let listener: Listener = Box::new(listener);
        self.listeners.add(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.listeners.remove(id)
    }

    // Commands. Rejections are logged by `dispatch` and otherwise ignored; use
    // `dispatch` directly to observe them.

    pub fn create_project(&mut self, name: impl Into<String>) {
        let _ = self.dispatch(Command::CreateProject { name: name.into() });
    }

    pub fn add_page(&mut self, name: impl Into<String>) {
        let _ = self.dispatch(Command::AddPage { name: name.into() });
    }

    pub fn delete_page(&mut self, page_id: &str) {
        let _ = self.dispatch(Command::DeletePage {
            page_id: page_id.to_string(),
        });
    }

    pub fn rename_page(&mut self, page_id: &str, name: impl Into<String>) {
        let _ = self.dispatch(Command::RenamePage {
            page_id: page_id.to_string(),
            name: name.into(),
        });
    }

    pub fn set_current_page(&mut self, page_id: &str) {
        let _ = self.dispatch(Command::SetCurrentPage {
            page_id: page_id.to_string(),
        });
    }

    pub fn add_node(&mut self, node: TplNode, parent_id: Option<&str>) {
        let _ = self.dispatch(Command::AddNode {
            node,
            parent_id: parent_id.map(str::to_string),
        });
    }

    pub fn update_node(&mut self, node_id: &str, patch: NodePatch) {
        let _ = self.dispatch(Command::UpdateNode {
            node_id: node_id.to_string(),
            patch,
        });
    }

    pub fn update_node_layout(&mut self, node_id: &str, layout: LayoutPatch) {
        let _ = self.dispatch(Command::UpdateNodeLayout {
            node_id: node_id.to_string(),
            layout,
        });
    }

    pub fn update_node_styles(&mut self, node_id: &str, styles: Styles) {
        let _ = self.dispatch(Command::UpdateNodeStyles {
            node_id: node_id.to_string(),
            styles,
        });
    }

    pub fn delete_node(&mut self, node_id: &str) {
        let _ = self.dispatch(Command::DeleteNode {
            node_id: node_id.to_string(),
        });
    }

    pub fn select_node(&mut self, node_id: Option<&str>) {
        let _ = self.dispatch(Command::SelectNode {
            node_id: node_id.map(str::to_string),
        });
    }

    pub fn set_tool(&mut self, tool: Tool) {
        let _ = self.dispatch(Command::SetTool { tool });
    }

    pub fn set_zoom(&mut self, zoom: f64) {
        let _ = self.dispatch(Command::SetZoom { zoom });
    }

    // Queries

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn project(&self) -> Option<&Project> {
        self.state.project.as_ref()
    }

    pub fn current_page(&self) -> Option<&Page> {
        self.state.current_page()
    }

    pub fn selected_node(&self) -> Option<&TplNode> {
        self.state.selected_node()
    }

    pub fn tool(&self) -> Tool {
        self.state.tool
    }

    pub fn zoom(&self) -> f64 {
        self.state.zoom
    }

    /// Number of live subscriptions
    pub fn subscriber_count(&self) -> usize {
        self.listeners.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::collections::HashSet;
    use std::rc::Rc;

    #[test]
    fn test_session_creation() {
        let session = EditSession::new("client-1");

        assert_eq!(session.id, "client-1");
        assert!(session.project().is_none());
        assert!(session.current_page().is_none());
        assert_eq!(session.tool(), Tool::Select);
        assert_eq!(session.zoom(), 1.0);
    }

    #[test]
    fn test_next_id_never_repeats() {
        let mut session = EditSession::new("client-1");
        session.create_project("Site");

        let a = session.next_id();
        let b = session.next_id();
        assert_ne!(a, b);

        let page = session.current_page().unwrap();
        assert_ne!(page.id, a);
        assert_ne!(page.root.id, a);
    }

    #[test]
    fn test_ids_unique_across_projects() {
        let mut session = EditSession::new("client-1");
        let mut seen = HashSet::new();

        for name in ["First", "Second", "Third"] {
            session.create_project(name);
            let project = session.project().unwrap();
            let page = session.current_page().unwrap();

            assert!(seen.insert(project.id.clone()));
            assert!(seen.insert(page.id.clone()));
            assert!(seen.insert(page.root.id.clone()));
        }
        assert_eq!(seen.len(), 9);
    }

    #[test]
    fn test_listeners_fire_on_commit_only() {
        let mut session = EditSession::new("client-1");
        let calls = Rc::new(Cell::new(0));

        let counter = Rc::clone(&calls);
        let subscription = session.subscribe(move |_| counter.set(counter.get() + 1));

        // Rejected: no project yet
        session.add_page("About");
        assert_eq!(calls.get(), 0);

        session.create_project("Site");
        session.set_zoom(1.5);
        assert_eq!(calls.get(), 2);

        assert_eq!(session.subscriber_count(), 1);
        assert!(session.unsubscribe(subscription));
        assert_eq!(session.subscriber_count(), 0);
        session.set_tool(Tool::Frame);
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_listener_sees_committed_state() {
        let mut session = EditSession::new("client-1");
        let seen = Rc::new(Cell::new(0.0));

        let zoom = Rc::clone(&seen);
        session.subscribe(move |state| zoom.set(state.zoom));

        session.set_zoom(7.0);
        assert_eq!(seen.get(), 2.0);
    }
}
