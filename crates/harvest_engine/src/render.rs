use std::fmt::Write;

use harvest_core::{ContentBlock, ExtractedArticle};

/// Plain-text document: a `---` metadata block followed by the body.
pub fn render_article(source_url: &str, article: &ExtractedArticle, fetched_utc: &str) -> String {
    let mut doc = String::new();
    let _ = write!(
        doc,
        "---\nurl: {url}\ntitle: {title}\nauthor: {author}\ndate: {date}\ncategories: {categories}\nfetched_utc: {fetched_utc}\n---\n\n",
        url = single_line(source_url),
        title = single_line(&article.title),
        author = single_line(&article.author),
        date = single_line(article.date.as_deref().unwrap_or("")),
        categories = single_line(&article.categories.join(", ")),
    );
    doc.push_str(&render_body(&article.content));
    doc
}

/// Renders blocks in order; each header gets a blank line before it and a dash underline.
pub fn render_body(blocks: &[ContentBlock]) -> String {
    let mut body = String::new();
    for block in blocks {
        match block {
            ContentBlock::Paragraph(text) => {
                body.push_str(text);
                body.push('\n');
            }
            ContentBlock::Header(text) => {
                let underline = "-".repeat(text.chars().count());
                let _ = write!(body, "\n{text}\n{underline}\n");
            }
            ContentBlock::Image { src, alt } => {
                let _ = writeln!(body, "[Image: {alt}]({src})");
            }
            ContentBlock::Quote { text, citation } => match citation {
                Some(citation) => {
                    let _ = writeln!(body, ">{text} - {citation}");
                }
                None => {
                    let _ = writeln!(body, ">{text}");
                }
            },
        }
    }
    body
}

/// Metadata values are one line each; any whitespace run becomes a single space.
fn single_line(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}
