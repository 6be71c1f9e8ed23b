//! # Document Model
//!
//! Every element on the canvas is a [`TplNode`]. A [`Page`] owns one rooted
//! tree of nodes and a [`Project`] owns an ordered list of pages.
//!
//! Children are held behind `Arc` so that tree updates (see [`crate::tree`])
//! can rebuild only the path from a changed node to the root and share every
//! untouched subtree with the previous version.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Node type, fixed at creation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Frame,
    Text,
    Image,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Display {
    Block,
    Flex,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlexDirection {
    Row,
    Column,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JustifyContent {
    FlexStart,
    Center,
    FlexEnd,
    SpaceBetween,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AlignItems {
    FlexStart,
    Center,
    FlexEnd,
    Stretch,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    Normal,
    Medium,
    Semibold,
    Bold,
}

impl FontWeight {
    pub fn as_str(&self) -> &'static str {
        match self {
            FontWeight::Normal => "normal",
            FontWeight::Medium => "medium",
            FontWeight::Semibold => "semibold",
            FontWeight::Bold => "bold",
        }
    }
}

/// Position, size and optional flex parameters.
///
/// `None` means "unset", which is not the same as zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Layout {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display: Option<Display>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flex_direction: Option<FlexDirection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub justify_content: Option<JustifyContent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub align_items: Option<AlignItems>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gap: Option<f64>,
}

impl Layout {
    /// Merge a partial layout, keeping every field the patch leaves unset
    pub fn merge(&self, patch: &LayoutPatch) -> Layout {
        Layout {
            x: patch.x.unwrap_or(self.x),
            y: patch.y.unwrap_or(self.y),
            width: patch.width.unwrap_or(self.width),
            height: patch.height.unwrap_or(self.height),
            display: patch.display.or(self.display),
            flex_direction: patch.flex_direction.or(self.flex_direction),
            justify_content: patch.justify_content.or(self.justify_content),
            align_items: patch.align_items.or(self.align_items),
            gap: patch.gap.or(self.gap),
        }
    }
}

/// Partial [`Layout`] used by layout updates
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LayoutPatch {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub display: Option<Display>,
    pub flex_direction: Option<FlexDirection>,
    pub justify_content: Option<JustifyContent>,
    pub align_items: Option<AlignItems>,
    pub gap: Option<f64>,
}

/// Visual attributes. Unset fields are omitted from generated output.
///
/// Since every field is optional, `Styles` doubles as its own partial type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Styles {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<FontWeight>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
}

impl Styles {
    /// Field-by-field merge; fields set in `patch` win.
    ///
    /// An unset field in `patch` keeps the current value, so a merge can never
    /// remove a style. To clear one, replace the whole `styles` through
    /// [`NodePatch`] instead.
    pub fn merge(&self, patch: &Styles) -> Styles {
        Styles {
            background_color: patch
                .background_color
                .clone()
                .or_else(|| self.background_color.clone()),
            color: patch.color.clone().or_else(|| self.color.clone()),
            font_size: patch.font_size.or(self.font_size),
            font_weight: patch.font_weight.or(self.font_weight),
            padding: patch.padding.or(self.padding),
            border_radius: patch.border_radius.or(self.border_radius),
            border_width: patch.border_width.or(self.border_width),
            border_color: patch
                .border_color
                .clone()
                .or_else(|| self.border_color.clone()),
            opacity: patch.opacity.or(self.opacity),
        }
    }
}

/// Content for text and image nodes
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
}

impl Content {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Default::default()
        }
    }

    pub fn image(src: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            src: Some(src.into()),
            alt: Some(alt.into()),
            ..Default::default()
        }
    }
}

/// A single node in a page tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TplNode {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    pub name: String,
    pub layout: Layout,
    #[serde(default)]
    pub styles: Styles,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<Content>,
    #[serde(default)]
    pub children: Vec<Arc<TplNode>>,
}

impl TplNode {
    pub fn new(id: impl Into<String>, kind: NodeKind, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind,
            name: name.into(),
            layout: Layout::default(),
            styles: Styles::default(),
            content: None,
            children: Vec::new(),
        }
    }

    pub fn frame(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(id, NodeKind::Frame, name)
    }

    pub fn text(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(id, NodeKind::Text, name)
    }

    pub fn image(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(id, NodeKind::Image, name)
    }

    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_styles(mut self, styles: Styles) -> Self {
        self.styles = styles;
        self
    }

    pub fn with_content(mut self, content: Content) -> Self {
        self.content = Some(content);
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = TplNode>) -> Self {
        self.children = children.into_iter().map(Arc::new).collect();
        self
    }

    /// Copy of this node with the present patch fields applied
    pub fn patched(&self, patch: &NodePatch) -> TplNode {
        let mut node = self.clone();
        if let Some(name) = &patch.name {
            node.name = name.clone();
        }
        if let Some(layout) = &patch.layout {
            node.layout = layout.clone();
        }
        if let Some(styles) = &patch.styles {
            node.styles = styles.clone();
        }
        if let Some(content) = &patch.content {
            node.content = Some(content.clone());
        }
        node
    }
}

/// Shallow partial of a [`TplNode`].
///
/// `id` and `kind` are immutable and therefore not patchable; children change
/// only through insert/delete.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NodePatch {
    pub name: Option<String>,
    pub layout: Option<Layout>,
    pub styles: Option<Styles>,
    pub content: Option<Content>,
}

/// A page of the project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub id: String,
    pub name: String,
    pub root: Arc<TplNode>,
}

impl Page {
    /// Page with the default root frame
    pub fn new(id: impl Into<String>, name: impl Into<String>, root_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            root: Arc::new(default_root(root_id)),
        }
    }
}

/// 800x600 vertical flex frame, 16px gap, white background, 24px padding
pub fn default_root(id: impl Into<String>) -> TplNode {
    TplNode::frame(id, "Root")
        .with_layout(Layout {
            width: 800.0,
            height: 600.0,
            display: Some(Display::Flex),
            flex_direction: Some(FlexDirection::Column),
            gap: Some(16.0),
            ..Default::default()
        })
        .with_styles(Styles {
            background_color: Some("#ffffff".to_string()),
            padding: Some(24.0),
            ..Default::default()
        })
}

/// The whole project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub pages: Vec<Page>,
}

impl Project {
    pub fn new(id: impl Into<String>, name: impl Into<String>, first_page: Page) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            pages: vec![first_page],
        }
    }

    pub fn page(&self, id: &str) -> Option<&Page> {
        self.pages.iter().find(|p| p.id == id)
    }

    pub fn page_mut(&mut self, id: &str) -> Option<&mut Page> {
        self.pages.iter_mut().find(|p| p.id == id)
    }
}
