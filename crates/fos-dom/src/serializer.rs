//! HTML Serialization (outerHTML)
//!
//! Used to render nodes in diagnostics, so the output is compact and
//! never pretty-printed.

use crate::{DomTree, NodeData, NodeId};

/// Void elements (no end tag)
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

/// Raw text elements (content not escaped)
const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style"];

/// Serialize a node including itself and all descendants
pub fn serialize_outer(tree: &DomTree, node_id: NodeId) -> String {
    let mut output = String::new();
    serialize_node(tree, node_id, &mut output, false);
    output
}

fn serialize_node(tree: &DomTree, node_id: NodeId, output: &mut String, raw: bool) {
    let Some(node) = tree.get(node_id) else {
        return;
    };

    match &node.data {
        NodeData::Document => serialize_children(tree, node_id, output, false),
        NodeData::Element(elem) => {
            let tag = elem.local_name.as_str();

            output.push('<');
            output.push_str(tag);
            for attr in elem.attrs.iter() {
                output.push(' ');
                output.push_str(&attr.name);
                output.push_str("=\"");
                escape_attribute(&attr.value, output);
                output.push('"');
            }
            output.push('>');

            if VOID_ELEMENTS.contains(&tag) {
                return;
            }
            serialize_children(tree, node_id, output, RAW_TEXT_ELEMENTS.contains(&tag));
            output.push_str("</");
            output.push_str(tag);
            output.push('>');
        }
        NodeData::Text(text) if raw => output.push_str(text),
        NodeData::Text(text) => escape_text(text, output),
        NodeData::Comment(text) => {
            output.push_str("<!--");
            output.push_str(text);
            output.push_str("-->");
        }
    }
}

fn serialize_children(tree: &DomTree, node_id: NodeId, output: &mut String, raw: bool) {
    for (child, _) in tree.children(node_id) {
        serialize_node(tree, child, output, raw);
    }
}

fn escape_text(text: &str, output: &mut String) {
    for c in text.chars() {
        match c {
            '&' => output.push_str("&amp;"),
            '<' => output.push_str("&lt;"),
            '>' => output.push_str("&gt;"),
            '\u{a0}' => output.push_str("&nbsp;"),
            _ => output.push(c),
        }
    }
}

fn escape_attribute(value: &str, output: &mut String) {
    for c in value.chars() {
        match c {
            '&' => output.push_str("&amp;"),
            '"' => output.push_str("&quot;"),
            '\u{a0}' => output.push_str("&nbsp;"),
            _ => output.push(c),
        }
    }
}
