//! HTML5 Parser implementation
//!
//! Uses html5ever's RcDom and converts it into a `fos_dom::Document`.

use fos_dom::{Document, DomTree, Node, NodeId};
use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Handle, NodeData as RcNodeData, RcDom};

/// HTML5 parser
#[derive(Debug, Clone, Default)]
pub struct HtmlParser {
    /// Drop text nodes that contain only whitespace
    pub drop_whitespace: bool,
}

impl HtmlParser {
    /// Create a parser that keeps every text node as written
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser that drops whitespace-only text nodes. Text content
    /// of mixed inline markup loses its separators, e.g.
    /// `<b>A</b> <i>B</i>` reads as `AB`.
    pub fn dropping_whitespace() -> Self {
        Self {
            drop_whitespace: true,
        }
    }

    /// Parse an HTML string into a Document
    ///
    /// Fragments are wrapped in `html`/`head`/`body` as the HTML5 tree
    /// construction rules require.
    pub fn parse(&self, html: &str) -> Document {
        tracing::debug!("Parsing HTML document ({} bytes)", html.len());

        let dom = parse_document(RcDom::default(), Default::default()).one(html);

        let document = Document::empty();
        {
            let mut tree = document.tree_mut();
            self.convert_node(&dom.document, &mut tree, NodeId::ROOT);
        }

        tracing::debug!("Parsed {} nodes", document.tree().len());
        document
    }

    /// Convert an RcDom node and its subtree, appending it under `parent`
    fn convert_node(&self, handle: &Handle, tree: &mut DomTree, parent: NodeId) {
        let id = match &handle.data {
            RcNodeData::Document => {
                for child in handle.children.borrow().iter() {
                    self.convert_node(child, tree, parent);
                }
                return;
            }
            RcNodeData::Text { contents } => {
                let text = contents.borrow();
                if self.drop_whitespace && text.trim().is_empty() {
                    return;
                }
                tree.create_text(&text)
            }
            RcNodeData::Comment { contents } => tree.create_comment(contents),
            RcNodeData::Element { name, attrs, .. } => {
                let id = tree.create_element(&name.local);
                if let Some(elem) = tree.get_mut(id).and_then(Node::as_element_mut) {
                    for attr in attrs.borrow().iter() {
                        elem.attrs.set(&attr.name.local, &attr.value);
                    }
                    // The content attribute sets the default checkedness.
                    if elem.supports_checked() && elem.attrs.contains("checked") {
                        elem.checked = true;
                    }
                }
                id
            }
            RcNodeData::Doctype { .. } | RcNodeData::ProcessingInstruction { .. } => return,
        };

        if let Err(err) = tree.append_child(parent, id) {
            tracing::warn!("Dropping node {:?}: {}", id, err);
            return;
        }

        for child in handle.children.borrow().iter() {
            self.convert_node(child, tree, id);
        }
    }
}
