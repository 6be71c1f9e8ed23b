use criterion::{black_box, criterion_group, criterion_main, Criterion};
use framecraft_compiler_react::{compile_page, tailwind, CompileOptions};
use framecraft_schema::{Content, Display, FontWeight, Layout, Page, Styles, TplNode};
use std::sync::Arc;

fn card(index: usize) -> TplNode {
    TplNode::frame(format!("card-{index}"), "Card")
        .with_layout(Layout {
            width: 320.0,
            height: 240.0,
            display: Some(Display::Flex),
            gap: Some(8.0),
            ..Default::default()
        })
        .with_styles(Styles {
            background_color: Some("#f8fafc".to_string()),
            padding: Some(12.0),
            border_radius: Some(16.0),
            ..Default::default()
        })
        .with_children([
            TplNode::image(format!("cover-{index}"), "Cover")
                .with_content(Content::image("/cover.jpg", "Cover")),
            TplNode::text(format!("title-{index}"), "Title")
                .with_content(Content::text("Project"))
                .with_styles(Styles {
                    font_size: Some(18.0),
                    font_weight: Some(FontWeight::Semibold),
                    color: Some("#2A3132".to_string()),
                    ..Default::default()
                }),
        ])
}

fn gallery_page(cards: usize) -> Page {
    let root = TplNode::frame("root", "Root").with_children((0..cards).map(card));
    Page {
        id: "page".to_string(),
        name: "Gallery".to_string(),
        root: Arc::new(root),
    }
}

fn compile_small_page(c: &mut Criterion) {
    let page = gallery_page(3);
    let options = CompileOptions::default();

    c.bench_function("compile_small_page", |b| {
        b.iter(|| compile_page(black_box(&page), &options))
    });
}

fn compile_large_page(c: &mut Criterion) {
    let page = gallery_page(200);
    let options = CompileOptions::default();

    c.bench_function("compile_large_page", |b| {
        b.iter(|| compile_page(black_box(&page), &options))
    });
}

fn translate_classes(c: &mut Criterion) {
    let node = card(0);

    c.bench_function("translate_classes", |b| {
        b.iter(|| tailwind::class_names(black_box(&node)))
    });
}

criterion_group!(benches, compile_small_page, compile_large_page, translate_classes);
criterion_main!(benches);
