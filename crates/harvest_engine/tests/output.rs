use harvest_core::{ArticleExtractor, ContentBlock, ExtractedArticle, SiteProfile};
use harvest_engine::{article_filename, render_article, render_body, tokenize};
use pretty_assertions::assert_eq;

#[test]
fn filename_uses_date_and_sanitized_title() {
    let name = article_filename("Why: fusion? /Now", Some("2024-03-01"));
    assert_eq!(name, "2024-03-01_Why_fusion_Now.txt");
}

#[test]
fn filename_is_deterministic_and_truncated() {
    let long_title = "word ".repeat(40);
    let first = article_filename(&long_title, Some("2024-03-01"));
    let second = article_filename(&long_title, Some("2024-03-01"));
    assert_eq!(first, second);

    let stem = first
        .strip_prefix("2024-03-01_")
        .and_then(|rest| rest.strip_suffix(".txt"))
        .unwrap();
    assert!(stem.chars().count() <= 60);
    assert!(!stem.ends_with('_'));
}

#[test]
fn filename_falls_back_for_missing_parts() {
    assert_eq!(article_filename("", None), "undated_untitled.txt");
    assert_eq!(article_filename("???", Some("")), "undated_untitled.txt");
}

#[test]
fn truncation_respects_multibyte_titles() {
    let title = "é".repeat(100);
    let name = article_filename(&title, Some("2024-01-01"));
    assert_eq!(name, format!("2024-01-01_{}.txt", "é".repeat(60)));
}

#[test]
fn body_renders_blank_line_before_headers() {
    let blocks = vec![
        ContentBlock::Paragraph("Intro line\nsecond line".to_string()),
        ContentBlock::Header("Section".to_string()),
        ContentBlock::Paragraph("Body".to_string()),
    ];
    assert_eq!(
        render_body(&blocks),
        "Intro line\nsecond line\n\nSection\n-------\nBody\n"
    );
}

#[test]
fn quotes_and_images_render_inline() {
    let blocks = vec![
        ContentBlock::Quote {
            text: "Some quote".to_string(),
            citation: Some("Jane Doe".to_string()),
        },
        ContentBlock::Quote {
            text: "Anonymous".to_string(),
            citation: None,
        },
        ContentBlock::Image {
            src: "/cat.png".to_string(),
            alt: "A cat".to_string(),
        },
    ];
    assert_eq!(
        render_body(&blocks),
        ">Some quote - Jane Doe\n>Anonymous\n[Image: A cat](/cat.png)\n"
    );
}

#[test]
fn document_starts_with_metadata_block() {
    let article = ExtractedArticle {
        title: "Title".to_string(),
        author: "Ada".to_string(),
        date: Some("2024-01-02".to_string()),
        categories: vec!["energy".to_string(), "space".to_string()],
        content: vec![ContentBlock::Paragraph("Hello".to_string())],
    };
    let doc = render_article("https://example.com/a", &article, "2024-01-03T00:00:00Z");
    assert_eq!(
        doc,
        "---\nurl: https://example.com/a\ntitle: Title\nauthor: Ada\ndate: 2024-01-02\ncategories: energy, space\nfetched_utc: 2024-01-03T00:00:00Z\n---\n\nHello\n"
    );
}

#[test]
fn wrapped_heading_stays_on_one_metadata_line() {
    let profile = SiteProfile::default();
    let markup = "<h1>Line one\nfetched_utc: forged</h1><p>x</p>";
    let article = ArticleExtractor::extract(&profile, &tokenize(markup)).normalize();

    let doc = render_article("https://example.com/a", &article, "2024-01-03T00:00:00Z");
    let header: Vec<&str> = doc.split("\n---\n").next().unwrap().lines().collect();

    assert_eq!(
        header,
        vec![
            "---",
            "url: https://example.com/a",
            "title: Line one fetched_utc: forged",
            "author: ",
            "date: ",
            "categories: ",
            "fetched_utc: 2024-01-03T00:00:00Z",
        ]
    );
}
