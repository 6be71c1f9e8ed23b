use crate::config::CompileOptions;
use crate::context::CompilerContext;
use crate::tailwind::class_names;
use framecraft_schema::{NodeKind, Page, Project, TplNode};
use tracing::{debug, instrument};

/// Output for a single page of a project
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledPage {
    pub page_id: String,
    pub component_name: String,
    pub source: String,
}

/// Compile a page tree to a default-exported React component.
///
/// Pure and deterministic: the same page and options always produce the
/// same string.
#[instrument(skip_all, fields(page = %page.name))]
pub fn compile_page(page: &Page, options: &CompileOptions) -> String {
    let mut ctx = CompilerContext::new(options);
    let component_name = component_name(&page.name, &options.component_suffix);

    ctx.add_line(&format!("export default function {}() {{", component_name));
    ctx.indent();
    ctx.add_line("return (");
    ctx.indent();
    compile_node(&page.root, &mut ctx);
    ctx.dedent();
    ctx.add_line(");");
    ctx.dedent();
    ctx.add_line("}");

    let output = ctx.finish();
    debug!(component = %component_name, lines = output.lines().count(), "Compiled page");
    output
}

/// Compile every page of a project, one module per page, in page order
#[instrument(skip_all, fields(project = %project.name, pages = project.pages.len()))]
pub fn compile_project(project: &Project, options: &CompileOptions) -> Vec<CompiledPage> {
    project
        .pages
        .iter()
        .map(|page| CompiledPage {
            page_id: page.id.clone(),
            component_name: component_name(&page.name, &options.component_suffix),
            source: compile_page(page, options),
        })
        .collect()
}

fn compile_node(node: &TplNode, ctx: &mut CompilerContext) {
    let options = ctx.options;
    let class_name = escape_attribute(&class_names(node));

    match node.kind {
        NodeKind::Text => {
            let text = node
                .content
                .as_ref()
                .and_then(|c| c.text.as_deref())
                .filter(|t| !t.is_empty())
                .unwrap_or(options.default_text.as_str());
            ctx.add_line(&format!(
                "<p className=\"{}\">{}</p>",
                class_name,
                escape_text(text)
            ));
        }

        // Images never render children
        NodeKind::Image => {
            let content = node.content.as_ref();
            let src = content
                .and_then(|c| c.src.as_deref())
                .filter(|s| !s.is_empty())
                .unwrap_or(options.placeholder_src.as_str());
            let alt = content.and_then(|c| c.alt.as_deref()).unwrap_or("");
            ctx.add_line(&format!(
                "<img src=\"{}\" alt=\"{}\" className=\"{}\" />",
                escape_attribute(src),
                escape_attribute(alt),
                class_name
            ));
        }

        NodeKind::Frame if node.children.is_empty() => {
            ctx.add_line(&format!("<div className=\"{}\" />", class_name));
        }

        NodeKind::Frame => {
            ctx.add_line(&format!("<div className=\"{}\">", class_name));
            ctx.indent();
            for child in &node.children {
                compile_node(child, ctx);
            }
            ctx.dedent();
            ctx.add_line("</div>");
        }
    }
}

/// Page name to a component identifier: split on anything that is not a
/// letter or digit, capitalise each word, then append `suffix` unless the
/// name already ends with it. "home page" becomes "HomePage", "Home" becomes
/// "HomePage" too.
pub fn component_name(page_name: &str, suffix: &str) -> String {
    let mut name: String = page_name
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(capitalize)
        .collect();

    if !name.ends_with(suffix) {
        name.push_str(suffix);
    }
    if name.starts_with(|c: char| c.is_ascii_digit()) {
        name.insert(0, '_');
    }
    name
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '{' => out.push_str("&#123;"),
            '}' => out.push_str("&#125;"),
            _ => out.push(c),
        }
    }
    out
}

fn escape_attribute(value: &str) -> String {
    value.replace('&', "&amp;").replace('"', "&quot;")
}
