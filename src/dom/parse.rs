//! HTML parsing into the arena document

use scraper::{ElementRef, Html, Node as HtmlNode};

use super::{Document, Element, NodeId, NodeKind};

/// Parse a full HTML page
pub fn parse_document(html: &str) -> Document {
    let parsed = Html::parse_document(html);
    let mut doc = Document::new();

    for child in parsed.tree.root().children() {
        if let HtmlNode::Doctype(doctype) = child.value() {
            doc.append(Document::ROOT, NodeKind::Doctype(doctype.name().to_string()));
        }
    }

    copy_element(&mut doc, Document::ROOT, parsed.root_element());
    doc
}

fn copy_element(doc: &mut Document, parent: NodeId, source: ElementRef<'_>) {
    let value = source.value();
    let mut element = Element::new(value.name());
    for (name, attr) in value.attrs() {
        element.attrs.push((name.to_string(), attr.to_string()));
    }
    let id = doc.append(parent, NodeKind::Element(element));

    for child in source.children() {
        match child.value() {
            HtmlNode::Element(_) => {
                if let Some(child_el) = ElementRef::wrap(child) {
                    copy_element(doc, id, child_el);
                }
            }
            HtmlNode::Text(text) => {
                doc.append(id, NodeKind::Text(String::from(&**text)));
            }
            HtmlNode::Comment(comment) => {
                doc.append(id, NodeKind::Comment(String::from(&**comment)));
            }
            _ => {}
        }
    }
}
