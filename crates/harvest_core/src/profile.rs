/// Class signature of article-title anchors on the listing page.
pub const LISTING_LINK_CLASS: &str = "block mb-4 text-2xl text-black loop-item__title font-happy hover:text-black focus:text-black hover:underline focus:underline";

/// Markup conventions of the one site schema the extractors understand.
///
/// Every string here is matched literally; the extractors never guess at
/// alternative class names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteProfile {
    /// Exact `class` value of anchors that point at articles.
    pub link_class: String,
    /// Substring of a container's `class` that marks an embedded widget.
    pub suppress_class_marker: String,
    /// Path fragment of `href` values that point at author profiles.
    pub author_path: String,
    /// Exact `class` value of category tags.
    pub category_class: String,
    /// Text fragments starting with any of these are dropped from paragraphs and headers.
    pub noise_prefixes: Vec<String>,
}

impl Default for SiteProfile {
    fn default() -> Self {
        Self {
            link_class: LISTING_LINK_CLASS.to_string(),
            suppress_class_marker: "twitter-tweet".to_string(),
            author_path: "/author/".to_string(),
            category_class: "text-sm uppercase font-bold tracking-wider text-orange hover:underline"
                .to_string(),
            noise_prefixes: vec!["https://t.co/".to_string(), "pic.twitter.com".to_string()],
        }
    }
}

impl SiteProfile {
    pub(crate) fn is_noise(&self, fragment: &str) -> bool {
        self.noise_prefixes
            .iter()
            .any(|prefix| fragment.starts_with(prefix.as_str()))
    }
}
