//! # Tailwind Class Translation
//!
//! Maps a node's layout and styles to Tailwind utility classes. Each present
//! field yields one class (borders may yield two); absent fields yield none.
//! Values with a named Tailwind equivalent use it, everything else falls back
//! to an arbitrary-value class such as `p-[7px]` or `bg-[#123456]`.

use framecraft_schema::{AlignItems, Display, FlexDirection, JustifyContent, TplNode};

/// Space-separated class list for a node
pub fn class_names(node: &TplNode) -> String {
    classes(node).join(" ")
}

pub fn classes(node: &TplNode) -> Vec<String> {
    let mut classes = Vec::new();
    let layout = &node.layout;
    let styles = &node.styles;

    // Layout
    if layout.width != 0.0 {
        classes.push(format!("w-[{}px]", layout.width));
    }
    if layout.height != 0.0 {
        classes.push(format!("h-[{}px]", layout.height));
    }

    if layout.display == Some(Display::Flex) {
        classes.push("flex".to_string());
        if layout.flex_direction == Some(FlexDirection::Column) {
            classes.push("flex-col".to_string());
        }
        if let Some(justify) = layout.justify_content {
            classes.push(justify_class(justify).to_string());
        }
        if let Some(align) = layout.align_items {
            classes.push(align_class(align).to_string());
        }
        if let Some(gap) = layout.gap {
            classes.push(format!("gap-[{}px]", gap));
        }
    }

    // Styles
    if let Some(background) = &styles.background_color {
        classes.push(color_class("bg", background));
    }
    if let Some(color) = &styles.color {
        classes.push(color_class("text", color));
    }
    if let Some(size) = styles.font_size {
        classes.push(font_size_class(size));
    }
    if let Some(weight) = styles.font_weight {
        classes.push(format!("font-{}", weight.as_str()));
    }
    if let Some(padding) = styles.padding {
        classes.push(spacing_class("p", padding));
    }
    if let Some(radius) = styles.border_radius {
        classes.push(border_radius_class(radius));
    }
    if let Some(width) = styles.border_width {
        classes.push(format!("border-[{}px]", width));
        if let Some(color) = &styles.border_color {
            classes.push(color_class("border", color));
        }
    }
    if let Some(opacity) = styles.opacity {
        if opacity != 1.0 {
            classes.push(format!("opacity-[{}]", opacity));
        }
    }

    classes
}

fn justify_class(justify: JustifyContent) -> &'static str {
    match justify {
        JustifyContent::FlexStart => "justify-start",
        JustifyContent::Center => "justify-center",
        JustifyContent::FlexEnd => "justify-end",
        JustifyContent::SpaceBetween => "justify-between",
    }
}

fn align_class(align: AlignItems) -> &'static str {
    match align {
        AlignItems::FlexStart => "items-start",
        AlignItems::Center => "items-center",
        AlignItems::FlexEnd => "items-end",
        AlignItems::Stretch => "items-stretch",
    }
}

/// Palette name for a hex colour, if it is one of the common ones
pub fn palette_name(hex: &str) -> Option<&'static str> {
    let name = match hex.to_ascii_lowercase().as_str() {
        "#ffffff" => "white",
        "#000000" => "black",
        "#f8fafc" => "slate-50",
        "#e2e8f0" => "slate-200",
        "#64748b" => "slate-500",
        "#0f172a" => "slate-900",
        "#3b82f6" => "blue-500",
        "#ef4444" => "red-500",
        "#22c55e" => "green-500",
        _ => return None,
    };
    Some(name)
}

pub fn color_class(prefix: &str, color: &str) -> String {
    match palette_name(color) {
        Some(name) => format!("{}-{}", prefix, name),
        None => format!("{}-[{}]", prefix, color),
    }
}

pub fn font_size_class(size: f64) -> String {
    let named = match whole_pixels(size) {
        Some(12) => "text-xs",
        Some(14) => "text-sm",
        Some(16) => "text-base",
        Some(18) => "text-lg",
        Some(20) => "text-xl",
        Some(24) => "text-2xl",
        Some(30) => "text-3xl",
        Some(36) => "text-4xl",
        Some(48) => "text-5xl",
        _ => return format!("text-[{}px]", size),
    };
    named.to_string()
}

pub fn spacing_class(prefix: &str, value: f64) -> String {
    let step = match whole_pixels(value) {
        Some(0) => "0",
        Some(4) => "1",
        Some(8) => "2",
        Some(12) => "3",
        Some(16) => "4",
        Some(20) => "5",
        Some(24) => "6",
        Some(32) => "8",
        Some(40) => "10",
        Some(48) => "12",
        _ => return format!("{}-[{}px]", prefix, value),
    };
    format!("{}-{}", prefix, step)
}

pub fn border_radius_class(radius: f64) -> String {
    let named = match whole_pixels(radius) {
        Some(0) => "rounded-none",
        Some(4) => "rounded",
        Some(8) => "rounded-lg",
        Some(12) => "rounded-xl",
        Some(16) => "rounded-2xl",
        Some(9999) => "rounded-full",
        _ => return format!("rounded-[{}px]", radius),
    };
    named.to_string()
}

/// Scale tables are keyed by whole, non-negative pixel values
fn whole_pixels(value: f64) -> Option<u32> {
    if value.fract() == 0.0 && (0.0..=u32::MAX as f64).contains(&value) {
        Some(value as u32)
    } else {
        None
    }
}
