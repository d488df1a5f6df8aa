use harvest_core::{
    ArticleExtractor, ContentBlock, ParseEvent, RawArticle, RawContentItem, SiteProfile,
};
use pretty_assertions::assert_eq;

fn extract(events: &[ParseEvent]) -> RawArticle {
    let profile = SiteProfile::default();
    ArticleExtractor::extract(&profile, events)
}

fn paragraph(text: &str) -> Vec<ParseEvent> {
    vec![
        ParseEvent::bare("p"),
        ParseEvent::text(text),
        ParseEvent::end("p"),
    ]
}

#[test]
fn title_fragments_are_trimmed_and_concatenated() {
    let raw = extract(&[
        ParseEvent::bare("h1"),
        ParseEvent::text("  Rust "),
        ParseEvent::bare("em"),
        ParseEvent::text(" everywhere\n"),
        ParseEvent::end("em"),
        ParseEvent::end("h1"),
        ParseEvent::text("not title"),
    ]);
    assert_eq!(raw.title, "Rusteverywhere");
    assert!(raw.content.is_empty());
}

#[test]
fn paragraph_fragments_join_with_spaces_and_drop_tracking_urls() {
    let raw = extract(&[
        ParseEvent::bare("p"),
        ParseEvent::text(" Engines "),
        ParseEvent::bare("a"),
        ParseEvent::text("https://t.co/abc123"),
        ParseEvent::end("a"),
        ParseEvent::text("pic.twitter.com/xyz"),
        ParseEvent::text(" keep running. "),
        ParseEvent::end("p"),
    ]);
    assert_eq!(
        raw.content,
        vec![RawContentItem::text("Engines keep running.")]
    );
}

#[test]
fn empty_paragraph_is_not_appended() {
    let raw = extract(&paragraph("   "));
    assert!(raw.content.is_empty());
}

#[test]
fn header_emits_boundary_text_and_underline() {
    let raw = extract(&[
        ParseEvent::bare("h2"),
        ParseEvent::text(" Why it matters "),
        ParseEvent::end("h2"),
        ParseEvent::bare("h3"),
        ParseEvent::text("pic.twitter.com/only-noise"),
        ParseEvent::end("h3"),
    ]);
    assert_eq!(
        raw.content,
        vec![
            RawContentItem::HeaderBoundary,
            RawContentItem::text("Why it matters"),
            RawContentItem::text("--------------"),
        ]
    );
}

#[test]
fn suppressed_widget_yields_nothing_regardless_of_depth() {
    let mut events = vec![ParseEvent::start(
        "blockquote",
        [("class", "twitter-tweet tw-align-center")],
    )];
    events.extend([
        ParseEvent::bare("p"),
        ParseEvent::text("tweet body"),
        ParseEvent::start("img", [("src", "/avatar.png"), ("alt", "Avatar")]),
        ParseEvent::bare("span"),
        ParseEvent::text("nested"),
        ParseEvent::end("span"),
        ParseEvent::end("p"),
        ParseEvent::bare("br"),
        ParseEvent::start("a", [("href", "/author/someone")]),
        ParseEvent::text("not the author"),
        ParseEvent::end("a"),
        ParseEvent::end("blockquote"),
    ]);
    events.extend(paragraph("after widget"));

    let raw = extract(&events);
    assert_eq!(raw.content, vec![RawContentItem::text("after widget")]);
    assert_eq!(raw.author, "");
}

#[test]
fn suppression_resumes_interrupted_paragraph() {
    let raw = extract(&[
        ParseEvent::bare("p"),
        ParseEvent::text("before"),
        ParseEvent::start("div", [("class", "embed twitter-tweet")]),
        ParseEvent::bare("div"),
        ParseEvent::text("hidden"),
        ParseEvent::end("div"),
        ParseEvent::end("div"),
        ParseEvent::text("after"),
        ParseEvent::end("p"),
    ]);
    assert_eq!(raw.content, vec![RawContentItem::text("before after")]);
}

#[test]
fn unclosed_widget_swallows_the_rest_of_the_page() {
    let mut events = vec![
        ParseEvent::start("div", [("class", "twitter-tweet")]),
        ParseEvent::bare("span"),
    ];
    events.extend(paragraph("lost"));

    let profile = SiteProfile::default();
    let mut extractor = ArticleExtractor::new(&profile);
    for event in &events {
        extractor.feed(event);
    }
    assert!(extractor.is_suppressed());
    assert!(extractor.finish().content.is_empty());
}

#[test]
fn author_comes_from_profile_link_and_last_one_wins() {
    let raw = extract(&[
        ParseEvent::start("a", [("href", "https://example.com/author/jane-doe/")]),
        ParseEvent::text(" Jane Doe "),
        ParseEvent::end("a"),
        ParseEvent::start("a", [("href", "/author/john")]),
        ParseEvent::text("John Roe"),
        ParseEvent::end("a"),
        ParseEvent::start("a", [("href", "/topics/space")]),
        ParseEvent::text("Space"),
        ParseEvent::end("a"),
    ]);
    assert_eq!(raw.author, "John Roe");
}

#[test]
fn date_is_truncated_before_time_separator() {
    let raw = extract(&[
        ParseEvent::start("time", [("datetime", "2023-05-17T09:30:00+00:00")]),
        ParseEvent::text("May 17"),
        ParseEvent::end("time"),
    ]);
    assert_eq!(raw.date.as_deref(), Some("2023-05-17"));
}

#[test]
fn time_without_datetime_leaves_date_absent() {
    let raw = extract(&[ParseEvent::bare("time"), ParseEvent::end("time")]);
    assert_eq!(raw.date, None);
}

#[test]
fn category_takes_trailing_segment_of_matching_class() {
    let profile = SiteProfile {
        category_class: "tag /topics/energy".to_string(),
        ..SiteProfile::default()
    };
    let events = vec![
        ParseEvent::start("a", [("class", "tag /topics/energy"), ("href", "/topics/x")]),
        ParseEvent::end("a"),
        ParseEvent::start("a", [("class", "tag /topics/other")]),
        ParseEvent::end("a"),
    ];
    let raw = ArticleExtractor::extract(&profile, &events);
    assert_eq!(raw.categories, vec!["energy".to_string()]);
}

#[test]
fn images_need_non_empty_alt_text() {
    let raw = extract(&[
        ParseEvent::start("img", [("src", "/decor.png"), ("alt", "")]),
        ParseEvent::start("img", [("src", "/spacer.png")]),
        ParseEvent::start("img", [("src", "/cat.png"), ("alt", "A cat")]),
    ]);
    assert_eq!(
        raw.content,
        vec![RawContentItem::Image {
            src: "/cat.png".to_string(),
            alt: "A cat".to_string(),
        }]
    );
}

#[test]
fn citation_attaches_to_preceding_quote() {
    let raw = extract(&[
        ParseEvent::bare("blockquote"),
        ParseEvent::bare("p"),
        ParseEvent::text("Some quote"),
        ParseEvent::end("p"),
        ParseEvent::bare("cite"),
        ParseEvent::text("Jane"),
        ParseEvent::bare("em"),
        ParseEvent::text("Doe"),
        ParseEvent::end("em"),
        ParseEvent::end("cite"),
        ParseEvent::end("blockquote"),
    ]);
    assert_eq!(
        raw.content,
        vec![RawContentItem::Quote {
            text: "Some quote".to_string(),
            citation: Some("Jane Doe".to_string()),
        }]
    );
}

#[test]
fn later_citation_replaces_earlier_one() {
    let raw = extract(&[
        ParseEvent::bare("blockquote"),
        ParseEvent::bare("p"),
        ParseEvent::text("Quoted"),
        ParseEvent::end("p"),
        ParseEvent::bare("cite"),
        ParseEvent::text("First"),
        ParseEvent::end("cite"),
        ParseEvent::bare("cite"),
        ParseEvent::text("Second"),
        ParseEvent::end("cite"),
        ParseEvent::end("blockquote"),
    ]);
    assert_eq!(
        raw.content,
        vec![RawContentItem::Quote {
            text: "Quoted".to_string(),
            citation: Some("Second".to_string()),
        }]
    );
}

#[test]
fn citation_without_prior_quote_is_dropped() {
    let mut events = paragraph("Plain text");
    events.extend([
        ParseEvent::bare("blockquote"),
        ParseEvent::bare("cite"),
        ParseEvent::text("Nobody"),
        ParseEvent::end("cite"),
        ParseEvent::end("blockquote"),
    ]);

    let raw = extract(&events);
    assert_eq!(raw.content, vec![RawContentItem::text("Plain text")]);
}

#[test]
fn cite_inside_quote_paragraph_closes_the_quote_first() {
    let raw = extract(&[
        ParseEvent::bare("blockquote"),
        ParseEvent::bare("p"),
        ParseEvent::text("Inline"),
        ParseEvent::bare("cite"),
        ParseEvent::text("Source"),
        ParseEvent::end("cite"),
        ParseEvent::end("p"),
        ParseEvent::end("blockquote"),
        ParseEvent::bare("p"),
        ParseEvent::text("normal again"),
        ParseEvent::end("p"),
    ]);
    assert_eq!(
        raw.content,
        vec![
            RawContentItem::Quote {
                text: "Inline".to_string(),
                citation: Some("Source".to_string()),
            },
            RawContentItem::text("normal again"),
        ]
    );
}

#[test]
fn unclosed_paragraph_loses_its_fragment_without_failing() {
    let raw = extract(&[
        ParseEvent::bare("h1"),
        ParseEvent::text("Title"),
        ParseEvent::end("h1"),
        ParseEvent::bare("p"),
        ParseEvent::text("never closed"),
        ParseEvent::end("div"),
        ParseEvent::end("h2"),
    ]);
    assert_eq!(raw.title, "Title");
    assert!(raw.content.is_empty());
}

#[test]
fn stray_end_tags_are_ignored() {
    let mut events = vec![
        ParseEvent::end("p"),
        ParseEvent::end("blockquote"),
        ParseEvent::end("cite"),
        ParseEvent::text("orphan text"),
    ];
    events.extend(paragraph("ok"));

    let raw = extract(&events);
    assert_eq!(raw.content, vec![RawContentItem::text("ok")]);
}

#[test]
fn image_inside_paragraph_keeps_source_order() {
    let events = vec![
        ParseEvent::bare("p"),
        ParseEvent::text("Before"),
        ParseEvent::start("img", [("src", "/cat.png"), ("alt", "A cat")]),
        ParseEvent::text("after"),
        ParseEvent::end("p"),
    ];

    let raw = extract(&events);
    assert_eq!(
        raw.content,
        vec![
            RawContentItem::text("Before"),
            RawContentItem::Image {
                src: "/cat.png".to_string(),
                alt: "A cat".to_string(),
            },
            RawContentItem::text("after"),
        ]
    );

    let blocks = raw.normalize().content;
    assert_eq!(
        blocks,
        vec![
            ContentBlock::Paragraph("Before".to_string()),
            ContentBlock::Image {
                src: "/cat.png".to_string(),
                alt: "A cat".to_string(),
            },
            ContentBlock::Paragraph("after".to_string()),
        ]
    );
}
