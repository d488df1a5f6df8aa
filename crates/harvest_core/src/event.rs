/// Elements that never receive a matching end tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "iframe", "img", "input", "link", "meta",
    "param", "source", "track", "wbr",
];

/// Returns true for tag names that are treated as self-closing.
///
/// `iframe` is not void in HTML, but widget embeds rely on it being skipped
/// without depth bookkeeping, so it is listed here too.
pub fn is_void_element(name: &str) -> bool {
    VOID_ELEMENTS.iter().any(|void| void.eq_ignore_ascii_case(name))
}

/// Ordered attribute list of a start tag, in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    entries: Vec<(String, String)>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// First value stored under `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries.push((name.into(), value.into()));
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Attributes
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

/// One tokenizer notification, consumed once in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseEvent {
    StartTag { name: String, attributes: Attributes },
    EndTag { name: String },
    Text { data: String },
}

impl ParseEvent {
    pub fn start<K, V>(name: &str, attributes: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        ParseEvent::StartTag {
            name: name.to_ascii_lowercase(),
            attributes: attributes.into_iter().collect(),
        }
    }

    /// Start tag without attributes.
    pub fn bare(name: &str) -> Self {
        Self::start(name, std::iter::empty::<(String, String)>())
    }

    pub fn end(name: &str) -> Self {
        ParseEvent::EndTag {
            name: name.to_ascii_lowercase(),
        }
    }

    pub fn text(data: impl Into<String>) -> Self {
        ParseEvent::Text { data: data.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::{is_void_element, Attributes, ParseEvent};

    #[test]
    fn void_lookup_ignores_case() {
        assert!(is_void_element("BR"));
        assert!(is_void_element("iframe"));
        assert!(!is_void_element("span"));
    }

    #[test]
    fn attributes_keep_source_order() {
        let attrs: Attributes = [("href", "/a"), ("class", "x"), ("href", "/b")]
            .into_iter()
            .collect();
        let names: Vec<_> = attrs.iter().map(|(k, _)| k).collect();
        assert_eq!(names, vec!["href", "class", "href"]);
        assert_eq!(attrs.get("href"), Some("/a"));
        assert_eq!(attrs.get("id"), None);
    }

    #[test]
    fn constructors_lowercase_tag_names() {
        assert_eq!(
            ParseEvent::end("P"),
            ParseEvent::EndTag {
                name: "p".to_string()
            }
        );
    }
}
