//! # Editor State
//!
//! Plain data snapshot of an editing session. Commands in
//! [`crate::mutations`] are the only writers.

use framecraft_schema::{tree, Page, Project, TplNode};
use serde::{Deserialize, Serialize};

pub const MIN_ZOOM: f64 = 0.25;
pub const MAX_ZOOM: f64 = 2.0;

/// Active canvas tool
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    #[default]
    Select,
    Frame,
    Text,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EditorState {
    pub project: Option<Project>,
    pub current_page_id: Option<String>,
    pub selected_node_id: Option<String>,
    pub tool: Tool,
    /// Always within `MIN_ZOOM..=MAX_ZOOM`
    pub zoom: f64,
}

impl Default for EditorState {
    fn default() -> Self {
        Self {
            project: None,
            current_page_id: None,
            selected_node_id: None,
            tool: Tool::default(),
            zoom: 1.0,
        }
    }
}

impl EditorState {
    /// Resolve `current_page_id` against the project's pages
    pub fn current_page(&self) -> Option<&Page> {
        let project = self.project.as_ref()?;
        let page_id = self.current_page_id.as_deref()?;
        project.page(page_id)
    }

    pub(crate) fn current_page_mut(&mut self) -> Option<&mut Page> {
        let page_id = self.current_page_id.as_deref()?;
        self.project.as_mut()?.page_mut(page_id)
    }

    /// Resolve the selection by searching the current page's tree
    pub fn selected_node(&self) -> Option<&TplNode> {
        let page = self.current_page()?;
        let node_id = self.selected_node_id.as_deref()?;
        tree::find(&page.root, node_id)
    }
}

pub(crate) fn clamp_zoom(zoom: f64) -> f64 {
    zoom.clamp(MIN_ZOOM, MAX_ZOOM)
}
