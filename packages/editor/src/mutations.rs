//! # Editor Commands
//!
//! Every change to an [`EditorState`] is a [`Command`].
//!
//! ## Command Semantics
//!
//! - Commands are atomic: either the whole transition is applied or the
//!   state is left exactly as it was and an [`EditorError`] explains why.
//! - Tree edits go through `framecraft_schema::tree`, so the previous page
//!   tree is never mutated in place.
//! - Selection is scoped to a page. Switching, adding or deleting the current
//!   page clears it.
//!
//! ### Guards
//! - The last page of a project cannot be deleted
//! - The root of a page cannot be deleted
//! - A node cannot be added under an id that already exists on the page

use crate::state::{clamp_zoom, EditorState, Tool};
use crate::EditorError;
use framecraft_schema::{
    tree, IdGenerator, LayoutPatch, NodePatch, Page, Project, Styles, TplNode,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Name given to the first page of a new project
pub const FIRST_PAGE_NAME: &str = "Home";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Command {
    /// Replace the open project with a fresh single-page one
    CreateProject { name: String },

    /// Append a page with a default root and make it current
    AddPage { name: String },

    DeletePage { page_id: String },

    RenamePage { page_id: String, name: String },

    SetCurrentPage { page_id: String },

    /// Append `node` under `parent_id` (or the page root) and select it
    AddNode {
        node: TplNode,
        parent_id: Option<String>,
    },

    UpdateNode { node_id: String, patch: NodePatch },

    UpdateNodeLayout { node_id: String, layout: LayoutPatch },

    UpdateNodeStyles { node_id: String, styles: Styles },

    DeleteNode { node_id: String },

    SelectNode { node_id: Option<String> },

    SetTool { tool: Tool },

    /// Values outside the zoom range are clamped
    SetZoom { zoom: f64 },
}

impl Command {
    /// Debug name for logging
    pub fn name(&self) -> &'static str {
        match self {
            Command::CreateProject { .. } => "create_project",
            Command::AddPage { .. } => "add_page",
            Command::DeletePage { .. } => "delete_page",
            Command::RenamePage { .. } => "rename_page",
            Command::SetCurrentPage { .. } => "set_current_page",
            Command::AddNode { .. } => "add_node",
            Command::UpdateNode { .. } => "update_node",
            Command::UpdateNodeLayout { .. } => "update_node_layout",
            Command::UpdateNodeStyles { .. } => "update_node_styles",
            Command::DeleteNode { .. } => "delete_node",
            Command::SelectNode { .. } => "select_node",
            Command::SetTool { .. } => "set_tool",
            Command::SetZoom { .. } => "set_zoom",
        }
    }

    /// Apply the command, or leave `state` untouched and return why not
    pub fn apply(self, state: &mut EditorState, ids: &mut IdGenerator) -> Result<(), EditorError> {
        match self {
            Command::CreateProject { name } => {
                Self::apply_create_project(state, ids, name);
                Ok(())
            }
            Command::AddPage { name } => Self::apply_add_page(state, ids, name),
            Command::DeletePage { page_id } => Self::apply_delete_page(state, &page_id),
            Command::RenamePage { page_id, name } => Self::apply_rename_page(state, &page_id, name),
            Command::SetCurrentPage { page_id } => Self::apply_set_current_page(state, page_id),
            Command::AddNode { node, parent_id } => {
                Self::apply_add_node(state, node, parent_id.as_deref())
            }
            Command::UpdateNode { node_id, patch } => {
                Self::edit_tree(state, &node_id, |root| tree::update(root, &node_id, &patch))
            }
            Command::UpdateNodeLayout { node_id, layout } => {
                Self::edit_tree(state, &node_id, |root| {
                    tree::update_layout(root, &node_id, &layout)
                })
            }
            Command::UpdateNodeStyles { node_id, styles } => {
                Self::edit_tree(state, &node_id, |root| {
                    tree::update_styles(root, &node_id, &styles)
                })
            }
            Command::DeleteNode { node_id } => Self::apply_delete_node(state, &node_id),
            Command::SelectNode { node_id } => {
                state.selected_node_id = node_id;
                Ok(())
            }
            Command::SetTool { tool } => {
                state.tool = tool;
                Ok(())
            }
            Command::SetZoom { zoom } => {
                if zoom.is_nan() {
                    return Err(EditorError::InvalidZoom);
                }
                state.zoom = clamp_zoom(zoom);
                Ok(())
            }
        }
    }

    fn new_page(ids: &mut IdGenerator, name: String) -> Page {
        let page_id = ids.new_id();
        let root_id = ids.new_id();
        Page::new(page_id, name, root_id)
    }

    fn apply_create_project(state: &mut EditorState, ids: &mut IdGenerator, name: String) {
        let project_id = ids.new_id();
        let page = Self::new_page(ids, FIRST_PAGE_NAME.to_string());

        state.current_page_id = Some(page.id.clone());
        state.selected_node_id = None;
        state.project = Some(Project::new(project_id, name, page));
    }

    fn apply_add_page(
        state: &mut EditorState,
        ids: &mut IdGenerator,
        name: String,
    ) -> Result<(), EditorError> {
        let project = state.project.as_mut().ok_or(EditorError::NoProject)?;
        let page = Self::new_page(ids, name);

        state.current_page_id = Some(page.id.clone());
        state.selected_node_id = None;
        project.pages.push(page);
        Ok(())
    }

    fn apply_delete_page(state: &mut EditorState, page_id: &str) -> Result<(), EditorError> {
        let project = state.project.as_mut().ok_or(EditorError::NoProject)?;
        let index = project
            .pages
            .iter()
            .position(|p| p.id == page_id)
            .ok_or_else(|| EditorError::PageNotFound(page_id.to_string()))?;

        if project.pages.len() <= 1 {
            return Err(EditorError::LastPage);
        }

        project.pages.remove(index);

        if state.current_page_id.as_deref() == Some(page_id) {
            state.current_page_id = project.pages.first().map(|p| p.id.clone());
            state.selected_node_id = None;
        }
        Ok(())
    }

    fn apply_rename_page(
        state: &mut EditorState,
        page_id: &str,
        name: String,
    ) -> Result<(), EditorError> {
        let project = state.project.as_mut().ok_or(EditorError::NoProject)?;
        let page = project
            .page_mut(page_id)
            .ok_or_else(|| EditorError::PageNotFound(page_id.to_string()))?;

        page.name = name;
        Ok(())
    }

    fn apply_set_current_page(state: &mut EditorState, page_id: String) -> Result<(), EditorError> {
        let project = state.project.as_ref().ok_or(EditorError::NoProject)?;
        if project.page(&page_id).is_none() {
            return Err(EditorError::PageNotFound(page_id));
        }

        state.current_page_id = Some(page_id);
        state.selected_node_id = None;
        Ok(())
    }

    fn apply_add_node(
        state: &mut EditorState,
        node: TplNode,
        parent_id: Option<&str>,
    ) -> Result<(), EditorError> {
        let page = state.current_page_mut().ok_or(EditorError::NoCurrentPage)?;
        let parent_id = parent_id.unwrap_or(page.root.id.as_str()).to_string();

        if !tree::contains(&page.root, &parent_id) {
            return Err(EditorError::NodeNotFound(parent_id));
        }
        if tree::contains(&page.root, &node.id) {
            return Err(EditorError::DuplicateNodeId(node.id));
        }

        let node_id = node.id.clone();
        page.root = tree::insert_child(&page.root, &parent_id, node);
        state.selected_node_id = Some(node_id);
        Ok(())
    }

    fn apply_delete_node(state: &mut EditorState, node_id: &str) -> Result<(), EditorError> {
        let page = state.current_page().ok_or(EditorError::NoCurrentPage)?;

        if page.root.id == node_id {
            return Err(EditorError::RootNode(node_id.to_string()));
        }
        let Some(removed) = tree::find(&page.root, node_id) else {
            return Err(EditorError::NodeNotFound(node_id.to_string()));
        };

        // Drop the selection only if it pointed into the removed subtree
        let selection_gone = state
            .selected_node_id
            .as_deref()
            .is_some_and(|selected| tree::contains(removed, selected));
        let root = tree::delete(&page.root, node_id);

        let page = state.current_page_mut().ok_or(EditorError::NoCurrentPage)?;
        page.root = root;
        if selection_gone {
            state.selected_node_id = None;
        }
        Ok(())
    }

    /// Replace the current page's root with `edit(root)` once `node_id` is
    /// known to exist there
    fn edit_tree(
        state: &mut EditorState,
        node_id: &str,
        edit: impl FnOnce(&Arc<TplNode>) -> Arc<TplNode>,
    ) -> Result<(), EditorError> {
        let page = state.current_page_mut().ok_or(EditorError::NoCurrentPage)?;

        if !tree::contains(&page.root, node_id) {
            return Err(EditorError::NodeNotFound(node_id.to_string()));
        }

        page.root = edit(&page.root);
        Ok(())
    }
}
