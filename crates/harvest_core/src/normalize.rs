use crate::{ContentBlock, RawContentItem};

const CONTINUATION_MARKS: &[char] = &['.', ',', ';', ':', ')', '!', '?'];

/// Merges raw extractor lines into paragraph blocks and resolves header markers.
///
/// Block order always matches item order.
pub fn normalize(items: &[RawContentItem]) -> Vec<ContentBlock> {
    let mut state = Normalizer::default();
    for item in items {
        state.push(item);
    }
    state.finish()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum Pending {
    #[default]
    Nothing,
    /// A boundary was seen; the next line is header text.
    HeaderText,
    /// Header emitted; a dash line of this many chars is its underline.
    Underline(usize),
}

#[derive(Debug, Default)]
struct Normalizer {
    lines: Vec<String>,
    blocks: Vec<ContentBlock>,
    pending: Pending,
}

impl Normalizer {
    fn push(&mut self, item: &RawContentItem) {
        match item {
            RawContentItem::HeaderBoundary => {
                self.flush();
                self.pending = Pending::HeaderText;
            }
            RawContentItem::Text(line) => self.push_line(line),
            RawContentItem::Image { src, alt } => {
                self.flush();
                self.pending = Pending::Nothing;
                self.blocks.push(ContentBlock::Image {
                    src: src.clone(),
                    alt: alt.clone(),
                });
            }
            RawContentItem::Quote { text, citation } => {
                self.flush();
                self.pending = Pending::Nothing;
                self.blocks.push(ContentBlock::Quote {
                    text: text.clone(),
                    citation: citation.clone(),
                });
            }
        }
    }

    fn push_line(&mut self, line: &str) {
        if line.trim().is_empty() {
            return;
        }
        match std::mem::take(&mut self.pending) {
            Pending::HeaderText => {
                self.pending = Pending::Underline(line.chars().count());
                self.blocks.push(ContentBlock::Header(line.to_string()));
                return;
            }
            Pending::Underline(width) if is_underline(line, width) => return,
            Pending::Underline(_) | Pending::Nothing => {}
        }

        let continues = line.starts_with(CONTINUATION_MARKS);
        match self.lines.last_mut() {
            Some(last) if continues => last.push_str(line),
            _ => self.lines.push(line.to_string()),
        }
    }

    fn flush(&mut self) {
        if self.lines.is_empty() {
            return;
        }
        let paragraph = self.lines.join("\n");
        self.lines.clear();
        self.blocks.push(ContentBlock::Paragraph(paragraph));
    }

    fn finish(mut self) -> Vec<ContentBlock> {
        self.flush();
        self.blocks
    }
}

fn is_underline(line: &str, width: usize) -> bool {
    line.chars().count() == width && line.chars().all(|c| c == '-')
}

#[cfg(test)]
mod tests {
    use super::is_underline;

    #[test]
    fn underline_must_match_header_width() {
        assert!(is_underline("-----", 5));
        assert!(!is_underline("----", 5));
        assert!(!is_underline("--=--", 5));
    }
}
