//! Button with `variant` and `size` axes.

use swatch_variants::{merge_tokens, Selection, VariantRegistry, VariantValue};

use crate::attrs::Attributes;
use crate::error::RenderError;
use crate::markup::{Component, Element, Node};

/// Visual style of a [`Button`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Default,
    Primary,
    Secondary,
    Outline,
    Ghost,
    Text,
    Link,
    Destructive,
}

impl ButtonVariant {
    /// Every variant, in declaration order.
    pub const ALL: [ButtonVariant; 8] = [
        ButtonVariant::Default,
        ButtonVariant::Primary,
        ButtonVariant::Secondary,
        ButtonVariant::Outline,
        ButtonVariant::Ghost,
        ButtonVariant::Text,
        ButtonVariant::Link,
        ButtonVariant::Destructive,
    ];
}

impl VariantValue for ButtonVariant {
    const AXIS: &'static str = "variant";

    fn as_str(&self) -> &'static str {
        match self {
            ButtonVariant::Default => "default",
            ButtonVariant::Primary => "primary",
            ButtonVariant::Secondary => "secondary",
            ButtonVariant::Outline => "outline",
            ButtonVariant::Ghost => "ghost",
            ButtonVariant::Text => "text",
            ButtonVariant::Link => "link",
            ButtonVariant::Destructive => "destructive",
        }
    }
}

/// Dimensions of a [`Button`]; the `Icon*` sizes are square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonSize {
    #[default]
    Default,
    Sm,
    Lg,
    Icon,
    IconSm,
    IconLg,
}

impl ButtonSize {
    /// Every size, in declaration order.
    pub const ALL: [ButtonSize; 6] = [
        ButtonSize::Default,
        ButtonSize::Sm,
        ButtonSize::Lg,
        ButtonSize::Icon,
        ButtonSize::IconSm,
        ButtonSize::IconLg,
    ];
}

impl VariantValue for ButtonSize {
    const AXIS: &'static str = "size";

    fn as_str(&self) -> &'static str {
        match self {
            ButtonSize::Default => "default",
            ButtonSize::Sm => "sm",
            ButtonSize::Lg => "lg",
            ButtonSize::Icon => "icon",
            ButtonSize::IconSm => "icon-sm",
            ButtonSize::IconLg => "icon-lg",
        }
    }
}

/// A `<button>`, or with [`as_child`](Button::as_child) any element that
/// should look like one.
///
/// # Example
///
/// ```rust
/// use swatch_render::{builtin_styles, Button, ButtonSize, ButtonVariant, Component};
///
/// let save = Button::new()
///     .variant(ButtonVariant::Outline)
///     .size(ButtonSize::Sm)
///     .text("Edit");
/// let element = save.render(builtin_styles()).unwrap();
/// assert_eq!(element.get_attr("data-slot"), Some("button"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Button {
    selection: Selection,
    class: Option<String>,
    attrs: Attributes,
    children: Vec<Node>,
    slot: Option<Element>,
}

impl Button {
    /// A default-variant, default-size button.
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects the visual style.
    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.selection = self.selection.set(variant);
        self
    }

    /// Selects the dimensions.
    pub fn size(mut self, size: ButtonSize) -> Self {
        self.selection = self.selection.set(size);
        self
    }

    /// Selects an axis value by name. Values the table does not declare
    /// contribute no classes.
    pub fn select(mut self, axis: impl Into<String>, value: impl Into<String>) -> Self {
        self.selection = self.selection.with(axis, value);
        self
    }

    /// Extra classes appended after the variant classes.
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

    /// Shorthand for the `disabled` attribute.
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.attrs = self.attrs.disabled(disabled);
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

    /// Renders `element` in place of the `<button>`.
    ///
    /// The button's classes come first in the merged class string, followed
    /// by the element's own. Attributes the element already carries are kept;
    /// the button's children are not rendered.
    pub fn as_child(mut self, element: Element) -> Self {
        self.slot = Some(element);
        self
    }
}

impl Component for Button {
    fn render(&self, styles: &VariantRegistry) -> Result<Element, RenderError> {
        let class = styles.resolve(
            "button",
            &self.selection,
            self.class.as_deref().unwrap_or(""),
        )?;

        let Some(child) = &self.slot else {
            let button = Element::new("button").attr("data-slot", "button").class(class);
            return Ok(self.attrs.apply(button).children(self.children.iter().cloned()));
        };

        let merged = merge_tokens([class.as_str(), child.get_attr("class").unwrap_or("")]);
        let mut element = child.clone().class(merged);
        if !element.has_attr("data-slot") {
            element = element.attr("data-slot", "button");
        }
        Ok(self.attrs.apply_missing(element))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::styles::builtin_styles;
    use swatch_variants::VariantTable;
    use swatch_variants::VariantAxis;

    fn styles() -> VariantRegistry {
        VariantRegistry::new().with(
            "button",
            VariantTable::new("btn")
                .axis(
                    VariantAxis::new("variant")
                        .value("default", "bg-a")
                        .value("outline", "border")
                        .default_value("default"),
                )
                .axis(
                    VariantAxis::new("size")
                        .value("default", "h-9")
                        .value("sm", "h-8")
                        .default_value("default"),
                ),
        )
    }

    fn html(button: Button) -> String {
        let styles = styles();
        button.render(&styles).unwrap().to_html(&styles).unwrap()
    }

    #[test]
    fn test_default_button() {
        assert_eq!(
            html(Button::new().text("Save")),
            r#"<button data-slot="button" class="btn bg-a h-9">Save</button>"#
        );
    }

    #[test]
    fn test_variant_size_and_override() {
        let button = Button::new()
            .variant(ButtonVariant::Outline)
            .size(ButtonSize::Sm)
            .class("w-full")
            .text("Edit");
        assert_eq!(
            html(button),
            r#"<button data-slot="button" class="btn border h-8 w-full">Edit</button>"#
        );
    }

    #[test]
    fn test_disabled_passes_through() {
        assert_eq!(
            html(Button::new().disabled(true).text("Off")),
            r#"<button data-slot="button" class="btn bg-a h-9" disabled>Off</button>"#
        );
    }

    #[test]
    fn test_attrs_keep_earlier_shorthands() {
        let button = Button::new()
            .disabled(true)
            .attrs(Attributes::new().id("go"))
            .text("Go");
        assert_eq!(
            html(button),
            r#"<button data-slot="button" class="btn bg-a h-9" id="go" disabled>Go</button>"#
        );
    }

    #[test]
    fn test_unknown_named_value_drops_fragment() {
        let button = Button::new().select("variant", "sparkly").text("?");
        assert_eq!(
            html(button),
            r#"<button data-slot="button" class="btn h-9">?</button>"#
        );
    }

    #[test]
    fn test_as_child_merges_into_element() {
        let link = Element::new("a")
            .attr("href", "#docs")
            .attr("id", "docs-link")
            .class("underline")
            .text("Docs");
        let button = Button::new()
            .variant(ButtonVariant::Outline)
            .attrs(Attributes::new().id("ignored").extra("aria-label", "Docs"))
            .text("not rendered")
            .as_child(link);
        assert_eq!(
            html(button),
            "<a href=\"#docs\" id=\"docs-link\" class=\"btn border h-9 underline\" \
             data-slot=\"button\" aria-label=\"Docs\">Docs</a>"
        );
    }

    #[test]
    fn test_every_builtin_pair_resolves() {
        let styles = builtin_styles();
        for variant in ButtonVariant::ALL {
            for size in ButtonSize::ALL {
                let element = Button::new().variant(variant).size(size).render(styles).unwrap();
                let class = element.get_attr("class").unwrap_or_default();
                let table = styles.get("button").unwrap();
                for (axis, value) in [("variant", variant.as_str()), ("size", size.as_str())] {
                    let fragment = table.get_axis(axis).and_then(|a| a.fragment(value)).unwrap();
                    for token in fragment {
                        assert!(class.split(' ').any(|t| t == token), "{token} missing");
                    }
                }
            }
        }
    }

    #[test]
    fn test_missing_table_is_an_error() {
        let err = Button::new().render(&VariantRegistry::new()).unwrap_err();
        assert!(matches!(err, RenderError::Styles(_)));
    }
}
