use crate::normalize::normalize;
use crate::{is_void_element, Attributes, ExtractedArticle, ParseEvent, SiteProfile};

/// Unnormalized content entry, in the order the extractor met it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawContentItem {
    Text(String),
    /// Marks where a sub-heading starts; the header text and its underline follow.
    HeaderBoundary,
    Image {
        src: String,
        alt: String,
    },
    Quote {
        text: String,
        citation: Option<String>,
    },
}

impl RawContentItem {
    pub fn text(line: impl Into<String>) -> Self {
        RawContentItem::Text(line.into())
    }
}

/// Output of one extractor pass, before paragraph normalization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawArticle {
    pub title: String,
    pub author: String,
    pub date: Option<String>,
    pub categories: Vec<String>,
    pub content: Vec<RawContentItem>,
}

impl RawArticle {
    pub fn normalize(self) -> ExtractedArticle {
        let content = normalize(&self.content);
        ExtractedArticle {
            title: self.title,
            author: self.author,
            date: self.date,
            categories: self.categories,
            content,
        }
    }
}

/// Which consumer currently receives text. The schema never nests these.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum Region {
    #[default]
    Idle,
    Title,
    Header,
    Paragraph,
    Author,
    Quote(QuotePart),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum QuotePart {
    Body,
    Paragraph,
    Citation,
}

/// Single-pass tracker over one article page's events.
///
/// Suppression is held apart from [`Region`]: a widget may open anywhere, and
/// once it closes the interrupted region carries on.
#[derive(Debug)]
pub struct ArticleExtractor<'p> {
    profile: &'p SiteProfile,
    region: Region,
    suppress_depth: usize,
    fragments: Vec<String>,
    article: RawArticle,
}

impl<'p> ArticleExtractor<'p> {
    pub fn new(profile: &'p SiteProfile) -> Self {
        Self {
            profile,
            region: Region::Idle,
            suppress_depth: 0,
            fragments: Vec::new(),
            article: RawArticle::default(),
        }
    }

    /// Runs a fresh extractor over `events` and returns its raw output.
    pub fn extract<'e>(
        profile: &'p SiteProfile,
        events: impl IntoIterator<Item = &'e ParseEvent>,
    ) -> RawArticle {
        let mut extractor = Self::new(profile);
        for event in events {
            extractor.feed(event);
        }
        extractor.finish()
    }

    pub fn is_suppressed(&self) -> bool {
        self.suppress_depth > 0
    }

    pub fn feed(&mut self, event: &ParseEvent) {
        if self.is_suppressed() {
            self.track_suppressed(event);
            return;
        }
        match event {
            ParseEvent::StartTag { name, attributes } => self.start_tag(name, attributes),
            ParseEvent::EndTag { name } => self.end_tag(name),
            ParseEvent::Text { data } => self.text(data),
        }
    }

    /// Returns what was collected. Buffers of regions that never closed are dropped.
    pub fn finish(self) -> RawArticle {
        self.article
    }

    fn track_suppressed(&mut self, event: &ParseEvent) {
        match event {
            ParseEvent::StartTag { name, .. } if !is_void_element(name) => {
                self.suppress_depth += 1;
            }
            ParseEvent::EndTag { name } if !is_void_element(name) => {
                self.suppress_depth = self.suppress_depth.saturating_sub(1);
            }
            _ => {}
        }
    }

    fn opens_suppression(&self, name: &str, attributes: &Attributes) -> bool {
        !is_void_element(name)
            && attributes
                .get("class")
                .is_some_and(|class| class.contains(self.profile.suppress_class_marker.as_str()))
    }

    fn start_tag(&mut self, name: &str, attributes: &Attributes) {
        if self.opens_suppression(name, attributes) {
            self.suppress_depth = 1;
            return;
        }

        if name == "time" {
            if let Some(datetime) = attributes.get("datetime") {
                self.record_date(datetime);
            }
        }
        if let Some(class) = attributes.get("class") {
            if class == self.profile.category_class {
                self.record_category(class);
            }
        }
        if name == "img" {
            self.record_image(attributes);
            return;
        }

        match (self.region, name) {
            (Region::Idle, "h1") => self.enter(Region::Title),
            (Region::Idle, "h2" | "h3") => self.enter(Region::Header),
            (Region::Idle, "p") => self.enter(Region::Paragraph),
            (Region::Idle, "blockquote") => self.enter(Region::Quote(QuotePart::Body)),
            (Region::Idle, "a") if self.is_author_link(attributes) => self.enter(Region::Author),
            (Region::Quote(QuotePart::Body), "p") => {
                self.enter(Region::Quote(QuotePart::Paragraph));
            }
            (Region::Quote(QuotePart::Body), "cite") => {
                self.enter(Region::Quote(QuotePart::Citation));
            }
            (Region::Quote(QuotePart::Paragraph), "cite") => {
                self.flush_quote_paragraph();
                self.enter(Region::Quote(QuotePart::Citation));
            }
            _ => {}
        }
    }

    fn end_tag(&mut self, name: &str) {
        match (self.region, name) {
            (Region::Title, "h1") => self.region = Region::Idle,
            (Region::Header, "h2" | "h3") => {
                self.flush_header();
                self.region = Region::Idle;
            }
            (Region::Paragraph, "p") => {
                self.flush_paragraph();
                self.region = Region::Idle;
            }
            (Region::Author, "a") => {
                self.flush_author();
                self.region = Region::Idle;
            }
            (Region::Quote(QuotePart::Paragraph), "p") => {
                self.flush_quote_paragraph();
                self.region = Region::Quote(QuotePart::Body);
            }
            (Region::Quote(QuotePart::Citation), "cite") => {
                self.apply_citation();
                self.region = Region::Quote(QuotePart::Body);
            }
            (Region::Quote(part), "blockquote") => {
                match part {
                    QuotePart::Paragraph => self.flush_quote_paragraph(),
                    QuotePart::Citation => self.apply_citation(),
                    QuotePart::Body => {}
                }
                self.fragments.clear();
                self.region = Region::Idle;
            }
            _ => {}
        }
    }

    fn text(&mut self, data: &str) {
        match self.region {
            Region::Idle | Region::Quote(QuotePart::Body) => {}
            Region::Title => self.article.title.push_str(data.trim()),
            Region::Header | Region::Paragraph | Region::Quote(QuotePart::Paragraph) => {
                let fragment = data.trim();
                if !fragment.is_empty() && !self.profile.is_noise(fragment) {
                    self.fragments.push(fragment.to_string());
                }
            }
            Region::Author | Region::Quote(QuotePart::Citation) => {
                let fragment = data.trim();
                if !fragment.is_empty() {
                    self.fragments.push(fragment.to_string());
                }
            }
        }
    }

    fn enter(&mut self, region: Region) {
        self.fragments.clear();
        self.region = region;
    }

    fn take_joined(&mut self) -> String {
        let joined = self.fragments.join(" ");
        self.fragments.clear();
        joined
    }

    fn is_author_link(&self, attributes: &Attributes) -> bool {
        attributes
            .get("href")
            .is_some_and(|href| href.contains(self.profile.author_path.as_str()))
    }

    fn record_date(&mut self, datetime: &str) {
        let day = datetime.split('T').next().unwrap_or_default().trim();
        if !day.is_empty() {
            self.article.date = Some(day.to_string());
        }
    }

    fn record_category(&mut self, class: &str) {
        // Reads the class value itself, not an href.
        if let Some(segment) = class.rsplit('/').next().filter(|s| !s.is_empty()) {
            self.article.categories.push(segment.to_string());
        }
    }

    fn record_image(&mut self, attributes: &Attributes) {
        let src = attributes.get("src").map(str::trim).filter(|s| !s.is_empty());
        let alt = attributes.get("alt").map(str::trim).filter(|s| !s.is_empty());
        if let (Some(src), Some(alt)) = (src, alt) {
            // Text read so far in the paragraph precedes the image.
            if self.region == Region::Paragraph {
                self.flush_paragraph();
            }
            self.article.content.push(RawContentItem::Image {
                src: src.to_string(),
                alt: alt.to_string(),
            });
        }
    }

    fn flush_header(&mut self) {
        let header = self.take_joined();
        if header.is_empty() {
            return;
        }
        let underline = "-".repeat(header.chars().count());
        self.article.content.push(RawContentItem::HeaderBoundary);
        self.article.content.push(RawContentItem::Text(header));
        self.article.content.push(RawContentItem::Text(underline));
    }

    fn flush_paragraph(&mut self) {
        let paragraph = self.take_joined();
        if !paragraph.is_empty() {
            self.article.content.push(RawContentItem::Text(paragraph));
        }
    }

    fn flush_author(&mut self) {
        let author = self.take_joined();
        if !author.is_empty() {
            self.article.author = author;
        }
    }

    fn flush_quote_paragraph(&mut self) {
        let text = self.take_joined();
        if !text.is_empty() {
            self.article.content.push(RawContentItem::Quote {
                text,
                citation: None,
            });
        }
    }

    fn apply_citation(&mut self) {
        let citation = self.take_joined();
        if citation.is_empty() {
            return;
        }
        // Without a preceding quote there is nothing to attribute.
        if let Some(RawContentItem::Quote { citation: slot, .. }) = self.article.content.last_mut() {
            *slot = Some(citation);
        }
    }
}
