//! A minimal HTML tree.
//!
//! Components render into [`Element`]s. Children may be text, plain
//! elements, or further components, which are rendered lazily against the
//! registry passed to [`render_html`]. Attribute values and text are
//! HTML-escaped on output.

use std::fmt::{self, Write};
use std::rc::Rc;

use minijinja::HtmlEscape;
use swatch_variants::VariantRegistry;
use tracing::debug;

use crate::error::RenderError;

/// Elements that never have children or a closing tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// Returns true if `name` can be written as an HTML attribute name.
///
/// Names are written unescaped, so whitespace, quotes, `>`, `/`, `=` and
/// control characters are rejected.
pub fn is_valid_attr_name(name: &str) -> bool {
    !name.is_empty()
        && !name.chars().any(|c| {
            c.is_whitespace() || c.is_control() || matches!(c, '"' | '\'' | '>' | '/' | '=' | '<')
        })
}

/// Something that renders to an element given the active style registry.
pub trait Component: fmt::Debug {
    /// Builds this component's element, resolving its class string from `styles`.
    fn render(&self, styles: &VariantRegistry) -> Result<Element, RenderError>;
}

/// A child in the markup tree.
#[derive(Debug, Clone)]
pub enum Node {
    /// Escaped text.
    Text(String),
    /// A plain element.
    Element(Element),
    /// A component rendered at output time.
    Component(Rc<dyn Component>),
}

impl Node {
    /// Wraps a component.
    pub fn component<C: Component + 'static>(component: C) -> Self {
        Node::Component(Rc::new(component))
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::Text(text.to_string())
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Node::Text(text)
    }
}

/// An HTML element with ordered attributes.
///
/// Attributes with no value (`disabled`) render as bare names. Setting an
/// attribute that already exists replaces its value in place. Attributes
/// whose name fails [`is_valid_attr_name`] are dropped.
#[derive(Debug, Clone)]
pub struct Element {
    tag: String,
    attrs: Vec<(String, Option<String>)>,
    children: Vec<Node>,
}

impl Element {
    /// Creates an element with no attributes or children.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Sets a valued attribute.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(name.into(), Some(value.into()));
        self
    }

    /// Sets a boolean attribute such as `disabled`.
    pub fn flag(mut self, name: impl Into<String>) -> Self {
        self.set_attr(name.into(), None);
        self
    }

    /// Sets the class attribute; an empty class string is omitted.
    pub fn class(self, class: impl Into<String>) -> Self {
        let class = class.into();
        if class.is_empty() {
            self
        } else {
            self.attr("class", class)
        }
    }

    /// Appends a child.
    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Appends several children.
    pub fn children<I, N>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    /// Appends a text child.
    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Node::Text(text.into()))
    }

    pub(crate) fn set_attr(&mut self, name: String, value: Option<String>) {
        if !is_valid_attr_name(&name) {
            debug!(name = %name, tag = %self.tag, "dropping invalid attribute name");
            return;
        }
        match self.attrs.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.attrs.push((name, value)),
        }
    }

    pub(crate) fn attrs(&self) -> &[(String, Option<String>)] {
        &self.attrs
    }

    /// The tag name.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// The value of an attribute; boolean attributes yield `Some("")`.
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, value)| value.as_deref().unwrap_or(""))
    }

    /// Returns true if the attribute is present.
    pub fn has_attr(&self, name: &str) -> bool {
        self.attrs.iter().any(|(n, _)| n == name)
    }

    /// Child nodes in order.
    pub fn child_nodes(&self) -> &[Node] {
        &self.children
    }

    /// Returns true for elements written without a closing tag.
    pub fn is_void(&self) -> bool {
        VOID_ELEMENTS.contains(&self.tag.as_str())
    }

    /// Renders this element and its subtree to HTML.
    pub fn to_html(&self, styles: &VariantRegistry) -> Result<String, RenderError> {
        let mut out = String::new();
        write_element(self, styles, &mut out)?;
        Ok(out)
    }
}

/// Renders a node and its subtree to HTML.
pub fn render_html(node: &Node, styles: &VariantRegistry) -> Result<String, RenderError> {
    let mut out = String::new();
    write_node(node, styles, &mut out)?;
    Ok(out)
}

fn write_node(node: &Node, styles: &VariantRegistry, out: &mut String) -> Result<(), RenderError> {
    match node {
        Node::Text(text) => push_fmt(out, format_args!("{}", HtmlEscape(text))),
        Node::Element(element) => write_element(element, styles, out)?,
        Node::Component(component) => write_element(&component.render(styles)?, styles, out)?,
    }
    Ok(())
}

fn write_element(
    element: &Element,
    styles: &VariantRegistry,
    out: &mut String,
) -> Result<(), RenderError> {
    out.push('<');
    out.push_str(&element.tag);
    for (name, value) in &element.attrs {
        out.push(' ');
        out.push_str(name);
        if let Some(value) = value {
            push_fmt(out, format_args!("=\"{}\"", HtmlEscape(value)));
        }
    }
    out.push('>');

    if element.is_void() {
        return Ok(());
    }

    for child in &element.children {
        write_node(child, styles, out)?;
    }
    out.push_str("</");
    out.push_str(&element.tag);
    out.push('>');
    Ok(())
}

fn push_fmt(out: &mut String, args: fmt::Arguments<'_>) {
    // Writing into a String cannot fail.
    let _ = out.write_fmt(args);
}
