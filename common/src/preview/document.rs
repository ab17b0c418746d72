//! Rendered document tree.
//!
//! Builders produce a small element tree instead of markup so that tests can
//! inspect sections and text, and so that escaping happens in one place.

use std::fmt::Write as _;

use super::TemplateKind;

/// Elements written without a closing tag.
const VOID_TAGS: &[&str] = &["img", "br"];

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub tag: &'static str,
    pub attrs: Vec<(&'static str, String)>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((name, value.into()));
        self
    }

    pub fn class(self, class: impl Into<String>) -> Self {
        self.attr("class", class)
    }

    pub fn style(self, style: impl Into<String>) -> Self {
        self.attr("style", style)
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn children<I, N>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Node::Text(text.into()))
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.get_attr("class")
            .is_some_and(|classes| classes.split_whitespace().any(|c| c == class))
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl Node {
    pub fn text(text: impl Into<String>) -> Self {
        Node::Text(text.into())
    }

    /// Concatenated text of this node and its descendants, one space between
    /// text runs.
    pub fn text_content(&self) -> String {
        let mut runs = Vec::new();
        self.collect_text(&mut runs);
        runs.join(" ")
    }

    fn collect_text<'a>(&'a self, runs: &mut Vec<&'a str>) {
        match self {
            Node::Text(text) if !text.trim().is_empty() => runs.push(text.trim()),
            Node::Text(_) => {}
            Node::Element(element) => {
                for child in &element.children {
                    child.collect_text(runs);
                }
            }
        }
    }

    /// Depth-first list of every element in the subtree, self included.
    pub fn elements(&self) -> Vec<&Element> {
        let mut out = Vec::new();
        self.collect_elements(&mut out);
        out
    }

    fn collect_elements<'a>(&'a self, out: &mut Vec<&'a Element>) {
        if let Node::Element(element) = self {
            out.push(element);
            for child in &element.children {
                child.collect_elements(out);
            }
        }
    }

    pub fn write_html(&self, out: &mut String) {
        match self {
            Node::Text(text) => out.push_str(&escape_html(text)),
            Node::Element(element) => {
                out.push('<');
                out.push_str(element.tag);
                for (name, value) in &element.attrs {
                    let _ = write!(out, " {}=\"{}\"", name, escape_html(value));
                }
                out.push('>');
                if VOID_TAGS.contains(&element.tag) {
                    return;
                }
                for child in &element.children {
                    child.write_html(out);
                }
                let _ = write!(out, "</{}>", element.tag);
            }
        }
    }
}

/// A CV laid out with one template.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub template: TemplateKind,
    pub root: Node,
}

impl Document {
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.root.write_html(&mut out);
        out
    }

    /// Section identifiers (`data-section`) in document order.
    pub fn sections(&self) -> Vec<&str> {
        self.root
            .elements()
            .into_iter()
            .filter_map(|e| e.get_attr("data-section"))
            .collect()
    }

    pub fn section(&self, id: &str) -> Option<&Element> {
        self.root
            .elements()
            .into_iter()
            .find(|e| e.get_attr("data-section") == Some(id))
    }

    pub fn text_content(&self) -> String {
        self.root.text_content()
    }
}

/// Escapes the characters that are significant in HTML text and attributes.
pub fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
