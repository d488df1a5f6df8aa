const MAX_TITLE_CHARS: usize = 60;

/// Windows-safe output name: `{date}_{truncated_title}.txt`.
///
/// Two articles with the same date and title prefix share a name; the later
/// write replaces the earlier one.
pub fn article_filename(title: &str, date: Option<&str>) -> String {
    let date = date
        .map(sanitize)
        .filter(|d| !d.is_empty())
        .unwrap_or_else(|| "undated".to_string());
    let mut title = sanitize(title);
    if title.is_empty() {
        title = "untitled".to_string();
    }
    format!("{date}_{title}.txt")
}

fn sanitize(input: &str) -> String {
    let mut compacted = String::with_capacity(input.len());
    let mut prev_underscore = false;
    for c in input.chars() {
        let c = if is_forbidden(c) || c.is_whitespace() { '_' } else { c };
        if c == '_' {
            if !prev_underscore {
                compacted.push(c);
            }
            prev_underscore = true;
        } else {
            compacted.push(c);
            prev_underscore = false;
        }
    }
    let truncated: String = compacted
        .trim_matches(&['_', '.'][..])
        .chars()
        .take(MAX_TITLE_CHARS)
        .collect();
    truncated.trim_end_matches(&['_', '.'][..]).to_string()
}

fn is_forbidden(c: char) -> bool {
    matches!(c,
        '\\' | '/' | ':' | '*' | '?' | '"' | '<' | '>' | '|' | '\0'..='\u{1F}'
    )
}
