//! Text-like form input.

use swatch_variants::{Selection, VariantRegistry};

use crate::attrs::{Attributes, InputType};
use crate::error::RenderError;
use crate::markup::{Component, Element};

/// An `<input>` element. Disabled and invalid looks come from the native
/// `disabled` and `aria-invalid` attributes.
#[derive(Debug, Clone, Default)]
pub struct Input {
    class: Option<String>,
    attrs: Attributes,
}

impl Input {
    /// An untyped input with no attributes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Shorthand for [`Attributes::id`].
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.attrs = self.attrs.id(id);
        self
    }

    /// Shorthand for [`Attributes::input_type`].
    pub fn input_type(mut self, input_type: InputType) -> Self {
        self.attrs = self.attrs.input_type(input_type);
        self
    }

    /// Shorthand for [`Attributes::placeholder`].
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.attrs = self.attrs.placeholder(placeholder);
        self
    }

    /// Shorthand for [`Attributes::disabled`].
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.attrs = self.attrs.disabled(disabled);
        self
    }

    /// Shorthand for [`Attributes::invalid`].
    pub fn invalid(mut self, invalid: bool) -> Self {
        self.attrs = self.attrs.invalid(invalid);
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
}

impl Component for Input {
    fn render(&self, styles: &VariantRegistry) -> Result<Element, RenderError> {
        let class = styles.resolve("input", &Selection::new(), self.class.as_deref().unwrap_or(""))?;
        let input = Element::new("input").attr("data-slot", "input").class(class);
        Ok(self.attrs.apply(input))
    }
}
