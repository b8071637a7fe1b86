//! fOS HTML Parser
//!
//! HTML5 parsing built on html5ever, producing `fos_dom` documents.
//! Mostly used to build fixtures from markup in tests.

mod parser;

pub use fos_dom::Document;
pub use parser::HtmlParser;

/// Parse an HTML string into a document with the default parser
pub fn parse(html: &str) -> Document {
    HtmlParser::new().parse(html)
}
