//! Document serialization

use super::{Document, NodeId, NodeKind};
use crate::helpers::html_escape;

/// Elements that never have a closing tag
pub const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// Elements whose text content is written without escaping
const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style"];

pub fn serialize_children(doc: &Document, node: NodeId) -> String {
    let mut out = String::new();
    for &child in doc.children(node) {
        write_node(doc, child, &mut out);
    }
    out
}

pub fn serialize_node(doc: &Document, node: NodeId) -> String {
    let mut out = String::new();
    write_node(doc, node, &mut out);
    out
}

fn write_node(doc: &Document, node: NodeId, out: &mut String) {
    match doc.kind(node) {
        Some(NodeKind::Document) => {
            for &child in doc.children(node) {
                write_node(doc, child, out);
            }
        }
        Some(NodeKind::Doctype(name)) => {
            out.push_str("<!DOCTYPE ");
            out.push_str(name);
            out.push_str(">\n");
        }
        Some(NodeKind::Element(el)) => {
            out.push('<');
            out.push_str(&el.tag);
            for (name, value) in &el.attrs {
                out.push(' ');
                out.push_str(name);
                out.push_str("=\"");
                out.push_str(&html_escape(value));
                out.push('"');
            }
            out.push('>');

            if VOID_ELEMENTS.contains(&el.tag.as_str()) {
                return;
            }

            let raw_text = RAW_TEXT_ELEMENTS.contains(&el.tag.as_str());
            for &child in doc.children(node) {
                match doc.kind(child) {
                    Some(NodeKind::Text(t)) if raw_text => out.push_str(t),
                    _ => write_node(doc, child, out),
                }
            }

            out.push_str("</");
            out.push_str(&el.tag);
            out.push('>');
        }
        Some(NodeKind::Text(text)) => out.push_str(&html_escape(text)),
        Some(NodeKind::Comment(text)) => {
            out.push_str("<!--");
            out.push_str(text);
            out.push_str("-->");
        }
        Some(NodeKind::Raw(html)) => out.push_str(html),
        None => {}
    }
}
