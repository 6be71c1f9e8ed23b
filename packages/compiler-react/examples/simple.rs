use framecraft_compiler_react::{compile_page, CompileOptions};
use framecraft_editor::EditSession;
use framecraft_schema::{
    AlignItems, Content, Display, FontWeight, JustifyContent, Layout, Styles, TplNode,
};

fn main() {
    let mut session = EditSession::new("simple-example");
    session.create_project("Portfolio");

    let card_id = session.next_id();
    session.add_node(
        TplNode::frame(card_id.clone(), "Card")
            .with_layout(Layout {
                width: 500.0,
                height: 420.0,
                display: Some(Display::Flex),
                ..Default::default()
            })
            .with_styles(Styles {
                background_color: Some("#EBE9E4".to_string()),
                border_radius: Some(16.0),
                padding: Some(12.0),
                ..Default::default()
            }),
        None,
    );

    let cover_id = session.next_id();
    session.add_node(
        TplNode::image(cover_id, "Cover")
            .with_content(Content::image("/finflow.jpg", "FinFlow"))
            .with_styles(Styles {
                border_radius: Some(8.0),
                ..Default::default()
            }),
        Some(&card_id),
    );

    let footer_id = session.next_id();
    session.add_node(
        TplNode::frame(footer_id.clone(), "Footer").with_layout(Layout {
            display: Some(Display::Flex),
            justify_content: Some(JustifyContent::SpaceBetween),
            align_items: Some(AlignItems::Center),
            ..Default::default()
        }),
        Some(&card_id),
    );

    let title_id = session.next_id();
    session.add_node(
        TplNode::text(title_id, "Title")
            .with_content(Content::text("FinFlow"))
            .with_styles(Styles {
                font_size: Some(18.0),
                font_weight: Some(FontWeight::Semibold),
                color: Some("#2A3132".to_string()),
                ..Default::default()
            }),
        Some(&footer_id),
    );

    let Some(page) = session.current_page() else {
        eprintln!("No page to compile");
        std::process::exit(1);
    };

    println!("Generated React code:");
    println!("{}", "=".repeat(80));
    println!("{}", compile_page(page, &CompileOptions::default()));
    println!("{}", "=".repeat(80));
}
