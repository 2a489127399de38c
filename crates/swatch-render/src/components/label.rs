//! Form label.

use swatch_variants::{Selection, VariantRegistry};

use crate::attrs::Attributes;
use crate::error::RenderError;
use crate::markup::{Component, Element, Node};

/// A `<label>`, usually pointing at an input with [`html_for`](Label::html_for).
#[derive(Debug, Clone, Default)]
pub struct Label {
    class: Option<String>,
    attrs: Attributes,
    children: Vec<Node>,
}

impl Label {
    /// A label with `text` as its first child.
    pub fn new(text: impl Into<String>) -> Self {
        Self::default().child(Node::Text(text.into()))
    }

    /// The id of the control this label names.
    pub fn html_for(mut self, id: impl Into<String>) -> Self {
        self.attrs = self.attrs.html_for(id);
        self
    }

    /// Extra classes appended after the base classes.
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Merges `attrs` into the attribute bag. Fields it sets win over earlier
    /// ones, including those set by the shorthands; see [`Attributes::merge`].
    pub fn attrs(mut self, attrs: Attributes) -> Self {
        self.attrs = self.attrs.merge(attrs);
        self
    }

    /// Appends a child node.
    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }
}

impl Component for Label {
    fn render(&self, styles: &VariantRegistry) -> Result<Element, RenderError> {
        let class = styles.resolve("label", &Selection::new(), self.class.as_deref().unwrap_or(""))?;
        let label = Element::new("label").attr("data-slot", "label").class(class);
        Ok(self.attrs.apply(label).children(self.children.iter().cloned()))
    }
}
