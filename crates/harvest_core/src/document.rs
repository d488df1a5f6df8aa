/// One normalized unit of article body, in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentBlock {
    /// Buffered lines joined with `\n`.
    Paragraph(String),
    /// Sub-heading; rendered with a blank separator before it.
    Header(String),
    Image { src: String, alt: String },
    Quote {
        text: String,
        citation: Option<String>,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedArticle {
    pub title: String,
    pub author: String,
    /// `YYYY-MM-DD` portion of the page's `datetime` attribute.
    pub date: Option<String>,
    pub categories: Vec<String>,
    pub content: Vec<ContentBlock>,
}
