//! # Tree Operations
//!
//! Pure functions over a page tree. None of them mutate their input: each
//! structural change returns a new root in which only the path from the
//! changed node up to the root is copied. All other subtrees are shared with
//! the previous root through `Arc`.
//!
//! When nothing matches, the input `Arc` is returned, so callers can use
//! `Arc::ptr_eq` to tell whether a change happened.

use crate::model::{LayoutPatch, NodePatch, Styles, TplNode};
use std::sync::Arc;

/// Depth-first pre-order search
pub fn find<'a>(root: &'a TplNode, id: &str) -> Option<&'a TplNode> {
    walk(root).find(|node| node.id == id)
}

pub fn contains(root: &TplNode, id: &str) -> bool {
    find(root, id).is_some()
}

/// Number of nodes carrying `id`. More than one means the tree breaks the
/// unique-id invariant.
pub fn count(root: &TplNode, id: &str) -> usize {
    walk(root).filter(|node| node.id == id).count()
}

/// Pre-order iterator over a tree
pub fn walk(root: &TplNode) -> Walk<'_> {
    Walk { stack: vec![root] }
}

pub struct Walk<'a> {
    stack: Vec<&'a TplNode>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = &'a TplNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack
            .extend(node.children.iter().rev().map(|child| child.as_ref()));
        Some(node)
    }
}

/// Shallow-merge `patch` into the node matching `id`
pub fn update(root: &Arc<TplNode>, id: &str, patch: &NodePatch) -> Arc<TplNode> {
    rebuild_path(root, id, &|node| node.patched(patch)).unwrap_or_else(|| Arc::clone(root))
}

/// Merge a partial layout into the node's current layout
pub fn update_layout(root: &Arc<TplNode>, id: &str, patch: &LayoutPatch) -> Arc<TplNode> {
    let Some(node) = find(root, id) else {
        return Arc::clone(root);
    };

    let layout = node.layout.merge(patch);
    update(
        root,
        id,
        &NodePatch {
            layout: Some(layout),
            ..Default::default()
        },
    )
}

/// Merge partial styles into the node's current styles
pub fn update_styles(root: &Arc<TplNode>, id: &str, patch: &Styles) -> Arc<TplNode> {
    let Some(node) = find(root, id) else {
        return Arc::clone(root);
    };

    let styles = node.styles.merge(patch);
    update(
        root,
        id,
        &NodePatch {
            styles: Some(styles),
            ..Default::default()
        },
    )
}

/// Append `child` as the last child of the node matching `parent_id`
pub fn insert_child(root: &Arc<TplNode>, parent_id: &str, child: TplNode) -> Arc<TplNode> {
    let child = Arc::new(child);
    rebuild_path(root, parent_id, &|parent| {
        let mut parent = parent.clone();
        parent.children.push(Arc::clone(&child));
        parent
    })
    .unwrap_or_else(|| Arc::clone(root))
}

/// Remove every node matching `id`, at any depth, together with its subtree.
///
/// The root itself is never removed, even when its id matches.
pub fn delete(root: &Arc<TplNode>, id: &str) -> Arc<TplNode> {
    filter_children(root, id).unwrap_or_else(|| Arc::clone(root))
}

/// Rebuild the path down to the first node matching `id`, replacing that node
/// with `f(node)`. Returns `None` if no node matched.
fn rebuild_path(
    node: &Arc<TplNode>,
    id: &str,
    f: &dyn Fn(&TplNode) -> TplNode,
) -> Option<Arc<TplNode>> {
    if node.id == id {
        return Some(Arc::new(f(node)));
    }

    for (index, child) in node.children.iter().enumerate() {
        if let Some(new_child) = rebuild_path(child, id, f) {
            let mut copy = TplNode::clone(node);
            copy.children[index] = new_child;
            return Some(Arc::new(copy));
        }
    }

    None
}

fn filter_children(node: &Arc<TplNode>, id: &str) -> Option<Arc<TplNode>> {
    let mut changed = false;
    let mut children = Vec::with_capacity(node.children.len());

    for child in &node.children {
        if child.id == id {
            changed = true;
            continue;
        }

        match filter_children(child, id) {
            Some(new_child) => {
                changed = true;
                children.push(new_child);
            }
            None => children.push(Arc::clone(child)),
        }
    }

    if !changed {
        return None;
    }

    let mut copy = TplNode::clone(node);
    copy.children = children;
    Some(Arc::new(copy))
}
