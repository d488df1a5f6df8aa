use ego_tree::iter::Edge;
use ego_tree::NodeRef;
use harvest_core::{is_void_element, ParseEvent};
use scraper::node::Node;
use scraper::Html;

/// Flattens markup into start/end/text events in document order.
///
/// The html5ever tree builder repairs malformed markup first, so end tags are
/// always balanced. Void elements get no end tag and their fallback text is
/// dropped; comments and doctypes produce nothing.
pub fn tokenize(markup: &str) -> Vec<ParseEvent> {
    let document = Html::parse_document(markup);
    let mut events = Vec::new();

    for edge in document.tree.root().traverse() {
        match edge {
            Edge::Open(node) => match node.value() {
                Node::Element(element) => events.push(ParseEvent::StartTag {
                    name: element.name().to_ascii_lowercase(),
                    attributes: element.attrs().collect(),
                }),
                Node::Text(text) if !inside_void(node) => {
                    let data: &str = text;
                    events.push(ParseEvent::text(data));
                }
                _ => {}
            },
            Edge::Close(node) => {
                if let Node::Element(element) = node.value() {
                    if !is_void_element(element.name()) {
                        events.push(ParseEvent::end(element.name()));
                    }
                }
            }
        }
    }

    events
}

fn inside_void(node: NodeRef<'_, Node>) -> bool {
    node.parent()
        .and_then(|parent| parent.value().as_element())
        .is_some_and(|element| is_void_element(element.name()))
}
