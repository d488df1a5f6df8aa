use crate::{ParseEvent, SiteProfile};

pub const DEFAULT_MAX_LINKS: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedLink {
    pub href: String,
}

/// Collects article anchors from a listing page, first `max_links` in document order.
#[derive(Debug, Clone)]
pub struct LinkExtractor {
    class_signature: String,
    max_links: usize,
    links: Vec<ExtractedLink>,
}

impl LinkExtractor {
    pub fn new(profile: &SiteProfile) -> Self {
        Self::with_max_links(profile, DEFAULT_MAX_LINKS)
    }

    pub fn with_max_links(profile: &SiteProfile, max_links: usize) -> Self {
        Self {
            class_signature: profile.link_class.clone(),
            max_links,
            links: Vec::new(),
        }
    }

    pub fn feed(&mut self, event: &ParseEvent) {
        let ParseEvent::StartTag { name, attributes } = event else {
            return;
        };
        if name != "a" || self.links.len() >= self.max_links {
            return;
        }
        let is_article_anchor = attributes
            .iter()
            .any(|(key, value)| key == "class" && value == self.class_signature);
        if !is_article_anchor {
            return;
        }
        if let Some(href) = attributes.get("href").filter(|href| !href.is_empty()) {
            self.links.push(ExtractedLink {
                href: href.to_string(),
            });
        }
    }

    pub fn is_full(&self) -> bool {
        self.links.len() >= self.max_links
    }

    pub fn finish(self) -> Vec<ExtractedLink> {
        self.links
    }
}

/// Runs a fresh [`LinkExtractor`] over `events`.
pub fn extract_links<'a>(
    events: impl IntoIterator<Item = &'a ParseEvent>,
    profile: &SiteProfile,
    max_links: usize,
) -> Vec<ExtractedLink> {
    let mut extractor = LinkExtractor::with_max_links(profile, max_links);
    for event in events {
        if extractor.is_full() {
            break;
        }
        extractor.feed(event);
    }
    extractor.finish()
}
