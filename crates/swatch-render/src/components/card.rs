//! Card containers.
//!
//! Each part is a `<div>` that slots its children and merges a caller class
//! over its base classes. None of them has variant axes.

use swatch_variants::{Selection, VariantRegistry};

use crate::attrs::Attributes;
use crate::error::RenderError;
use crate::markup::{Component, Element, Node};

/// Which card region a [`Container`] renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardSlot {
    Card,
    Header,
    Title,
    Description,
    Action,
    Content,
    Footer,
}

impl CardSlot {
    /// The `data-slot` value, also used as the style table name.
    pub fn name(&self) -> &'static str {
        match self {
            CardSlot::Card => "card",
            CardSlot::Header => "card-header",
            CardSlot::Title => "card-title",
            CardSlot::Description => "card-description",
            CardSlot::Action => "card-action",
            CardSlot::Content => "card-content",
            CardSlot::Footer => "card-footer",
        }
    }
}

/// A structural wrapper for one card region.
#[derive(Debug, Clone)]
pub struct Container {
    slot: CardSlot,
    class: Option<String>,
    attrs: Attributes,
    children: Vec<Node>,
}

impl Container {
    /// An empty container for `slot`.
    pub fn new(slot: CardSlot) -> Self {
        Self {
            slot,
            class: None,
            attrs: Attributes::default(),
            children: Vec::new(),
        }
    }

    /// The region this container renders.
    pub fn slot(&self) -> CardSlot {
        self.slot
    }

    /// Extra classes appended after the base classes.
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Merges `attrs` into the attribute bag; see [`Attributes::merge`].
    pub fn attrs(mut self, attrs: Attributes) -> Self {
        self.attrs = self.attrs.merge(attrs);
        self
    }

    /// Appends a child node.
    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Appends a text child.
    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Node::Text(text.into()))
    }
}

impl Component for Container {
    fn render(&self, styles: &VariantRegistry) -> Result<Element, RenderError> {
        let name = self.slot.name();
        let class = styles.resolve(name, &Selection::new(), self.class.as_deref().unwrap_or(""))?;
        let div = Element::new("div").attr("data-slot", name).class(class);
        Ok(self.attrs.apply(div).children(self.children.iter().cloned()))
    }
}

/// The card root.
pub fn card() -> Container {
    Container::new(CardSlot::Card)
}

/// Title, description and action area.
pub fn card_header() -> Container {
    Container::new(CardSlot::Header)
}

/// The heading line.
pub fn card_title(text: impl Into<String>) -> Container {
    Container::new(CardSlot::Title).text(text)
}

/// Muted text under the title.
pub fn card_description(text: impl Into<String>) -> Container {
    Container::new(CardSlot::Description).text(text)
}

/// Top-right slot of the header.
pub fn card_action() -> Container {
    Container::new(CardSlot::Action)
}

/// The main body.
pub fn card_content() -> Container {
    Container::new(CardSlot::Content)
}

/// The bottom row.
pub fn card_footer() -> Container {
    Container::new(CardSlot::Footer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use swatch_variants::VariantTable;

    fn styles() -> VariantRegistry {
        VariantRegistry::new()
            .with("card", VariantTable::new("rounded-xl border"))
            .with("card-header", VariantTable::new("grid px-6"))
            .with("card-title", VariantTable::new("font-semibold"))
            .with("card-footer", VariantTable::new("flex px-6"))
    }

    #[test]
    fn test_nested_card() {
        let styles = styles();
        let tree = card()
            .child(card_header().class("border-b").child(card_title("Simple Card")))
            .child(card_footer().class("border-t justify-between"));
        let html = tree.render(&styles).unwrap().to_html(&styles).unwrap();
        assert_eq!(
            html,
            "<div data-slot=\"card\" class=\"rounded-xl border\">\
             <div data-slot=\"card-header\" class=\"grid px-6 border-b\">\
             <div data-slot=\"card-title\" class=\"font-semibold\">Simple Card</div></div>\
             <div data-slot=\"card-footer\" class=\"flex px-6 border-t justify-between\"></div>\
             </div>"
        );
    }

    #[test]
    fn test_override_repeating_base_token() {
        let styles = styles();
        let el = card().class("border shadow-lg").render(&styles).unwrap();
        assert_eq!(el.get_attr("class"), Some("rounded-xl border shadow-lg"));
    }

    #[test]
    fn test_attributes_forwarded() {
        let styles = styles();
        let el = card()
            .attrs(Attributes::new().id("profile").extra("data-state", "open"))
            .render(&styles)
            .unwrap();
        assert_eq!(el.get_attr("id"), Some("profile"));
        assert_eq!(el.get_attr("data-state"), Some("open"));
    }
}
