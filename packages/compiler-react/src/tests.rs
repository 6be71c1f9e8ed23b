use crate::{compile_page, compile_project, CompileOptions};
use framecraft_schema::{
    Content, Display, FlexDirection, Layout, Page, Project, Styles, TplNode,
};
use std::sync::Arc;

fn normalize_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn page_with_root(name: &str, root: TplNode) -> Page {
    Page {
        id: "page-1".to_string(),
        name: name.to_string(),
        root: Arc::new(root),
    }
}

fn column(id: &str) -> TplNode {
    TplNode::frame(id, "Root").with_layout(Layout {
        display: Some(Display::Flex),
        flex_direction: Some(FlexDirection::Column),
        gap: Some(16.0),
        ..Default::default()
    })
}

#[test]
fn test_column_with_text() {
    let root = column("root").with_children([TplNode::text("t1", "Greeting")
        .with_content(Content::text("Hi"))
        .with_styles(Styles {
            font_size: Some(16.0),
            ..Default::default()
        })]);
    let page = page_with_root("Home", root);

    let result = compile_page(&page, &CompileOptions::default());
    println!("Generated code:\n{}", result);

    assert_eq!(
        result,
        "export default function HomePage() {\n\
         \x20 return (\n\
         \x20   <div className=\"flex flex-col gap-[16px]\">\n\
         \x20     <p className=\"text-base\">Hi</p>\n\
         \x20   </div>\n\
         \x20 );\n\
         }\n"
    );
}

#[test]
fn test_default_page_root() {
    let page = Page::new("p1", "home page", "r1");
    let result = compile_page(&page, &CompileOptions::default());

    assert!(result.starts_with("export default function HomePage() {"));
    assert!(result.contains(
        "<div className=\"w-[800px] h-[600px] flex flex-col gap-[16px] bg-white p-6\" />"
    ));
}

#[test]
fn test_text_defaults() {
    let root = column("root").with_children([
        TplNode::text("t1", "Empty"),
        TplNode::text("t2", "Blank").with_content(Content::text("")),
    ]);
    let result = compile_page(&page_with_root("Home", root), &CompileOptions::default());

    assert_eq!(result.matches("<p className=\"\">Text</p>").count(), 2);
}

#[test]
fn test_image_defaults_and_no_children() {
    let image = TplNode::image("img", "Photo").with_children([TplNode::text("t1", "Hidden")]);
    let root = column("root").with_children([image]);
    let result = compile_page(&page_with_root("Home", root), &CompileOptions::default());

    assert!(result.contains("<img src=\"/placeholder.jpg\" alt=\"\" className=\"\" />"));
    assert!(!result.contains("Hidden"));
}

#[test]
fn test_image_content() {
    let image = TplNode::image("img", "Photo")
        .with_content(Content::image("/finflow.jpg", "FinFlow"))
        .with_styles(Styles {
            border_radius: Some(8.0),
            ..Default::default()
        });
    let root = column("root").with_children([image]);
    let result = compile_page(&page_with_root("Home", root), &CompileOptions::default());

    assert!(result.contains("<img src=\"/finflow.jpg\" alt=\"FinFlow\" className=\"rounded-lg\" />"));
}

#[test]
fn test_nested_frames_indent() {
    let root = TplNode::frame("root", "Root").with_children([TplNode::frame("outer", "Outer")
        .with_children([TplNode::frame("inner", "Inner")
            .with_children([TplNode::text("t1", "Leaf").with_content(Content::text("Deep"))])])]);
    let result = compile_page(&page_with_root("Nested", root), &CompileOptions::default());
    println!("Generated code:\n{}", result);

    let lines: Vec<&str> = result.lines().collect();
    assert_eq!(lines[2], "    <div className=\"\">");
    assert_eq!(lines[3], "      <div className=\"\">");
    assert_eq!(lines[4], "        <div className=\"\">");
    assert_eq!(lines[5], "          <p className=\"\">Deep</p>");
    assert_eq!(lines[6], "        </div>");
}

#[test]
fn test_children_in_order() {
    let root = column("root").with_children([
        TplNode::text("a", "A").with_content(Content::text("first")),
        TplNode::text("b", "B").with_content(Content::text("second")),
        TplNode::text("c", "C").with_content(Content::text("third")),
    ]);
    let result = compile_page(&page_with_root("Home", root), &CompileOptions::default());

    let first = result.find("first").unwrap();
    let second = result.find("second").unwrap();
    let third = result.find("third").unwrap();
    assert!(first < second && second < third);
}

#[test]
fn test_text_is_escaped() {
    let root = column("root")
        .with_children([TplNode::text("t1", "Code").with_content(Content::text("a <b> {c}"))]);
    let result = compile_page(&page_with_root("Home", root), &CompileOptions::default());

    assert!(result.contains(">a &lt;b&gt; &#123;c&#125;</p>"));
}

#[test]
fn test_deterministic_output() {
    let root = column("root").with_children([
        TplNode::text("t1", "Title").with_content(Content::text("Hello")),
        TplNode::image("i1", "Image"),
        TplNode::frame("f1", "Box").with_styles(Styles {
            background_color: Some("#123456".to_string()),
            padding: Some(7.0),
            ..Default::default()
        }),
    ]);
    let page = page_with_root("Home", root);
    let options = CompileOptions::default();

    assert_eq!(compile_page(&page, &options), compile_page(&page, &options));
}

#[test]
fn test_custom_options() {
    let options = CompileOptions {
        indent_width: 4,
        component_suffix: "View".to_string(),
        placeholder_src: "/empty.png".to_string(),
        default_text: "Lorem".to_string(),
    };
    let root = column("root").with_children([TplNode::text("t1", "T"), TplNode::image("i1", "I")]);
    let result = compile_page(&page_with_root("landing", root), &options);
    println!("Generated code:\n{}", result);

    assert!(result.starts_with("export default function LandingView() {\n    return (\n"));
    assert!(result.contains("            <p className=\"\">Lorem</p>"));
    assert!(result.contains("src=\"/empty.png\""));
}

#[test]
fn test_compile_project_one_module_per_page() {
    let mut project = Project::new("proj", "Site", Page::new("p1", "Home", "r1"));
    project.pages.push(Page::new("p2", "about us", "r2"));

    let compiled = compile_project(&project, &CompileOptions::default());

    assert_eq!(compiled.len(), 2);
    assert_eq!(compiled[0].page_id, "p1");
    assert_eq!(compiled[0].component_name, "HomePage");
    assert_eq!(compiled[1].component_name, "AboutUsPage");
    assert_eq!(
        normalize_whitespace(&compiled[1].source),
        normalize_whitespace(
            r#"export default function AboutUsPage() {
                return (
                    <div className="w-[800px] h-[600px] flex flex-col gap-[16px] bg-white p-6" />
                );
            }"#
        )
    );
}
