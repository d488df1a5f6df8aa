//! Harvest core: pure extraction state machines over tag events.
mod article;
mod document;
mod event;
mod links;
mod normalize;
mod profile;

pub use article::{ArticleExtractor, RawArticle, RawContentItem};
pub use document::{ContentBlock, ExtractedArticle};
pub use event::{is_void_element, Attributes, ParseEvent};
pub use links::{extract_links, ExtractedLink, LinkExtractor, DEFAULT_MAX_LINKS};
pub use normalize::normalize;
pub use profile::SiteProfile;
