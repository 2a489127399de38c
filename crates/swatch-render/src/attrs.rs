//! Pass-through native attributes.

use tracing::debug;

use crate::markup::{is_valid_attr_name, Element};

/// The `type` of an `<input>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputType {
    Text,
    Email,
    Password,
    File,
    Date,
    Tel,
    Number,
    Search,
    Url,
    Hidden,
}

impl InputType {
    /// The value written to the `type` attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            InputType::Text => "text",
            InputType::Email => "email",
            InputType::Password => "password",
            InputType::File => "file",
            InputType::Date => "date",
            InputType::Tel => "tel",
            InputType::Number => "number",
            InputType::Search => "search",
            InputType::Url => "url",
            InputType::Hidden => "hidden",
        }
    }
}

/// The `type` of a `<button>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonType {
    Button,
    Submit,
    Reset,
}

impl ButtonType {
    /// The value written to the `type` attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            ButtonType::Button => "button",
            ButtonType::Submit => "submit",
            ButtonType::Reset => "reset",
        }
    }
}

/// Native attributes forwarded to a component's element.
///
/// The common keys are typed fields; anything else goes through
/// [`extra`](Self::extra) and is written verbatim after them. Classes are not
/// attributes here: every component takes its own class override, so an
/// `extra("class", ..)` entry is dropped.
///
/// # Example
///
/// ```rust
/// use swatch_render::{Attributes, InputType};
///
/// let attrs = Attributes::new()
///     .id("email")
///     .input_type(InputType::Email)
///     .placeholder("Enter your email")
///     .extra("autocomplete", "email");
/// assert!(!attrs.is_disabled());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    id: Option<String>,
    name: Option<String>,
    input_type: Option<InputType>,
    button_type: Option<ButtonType>,
    placeholder: Option<String>,
    value: Option<String>,
    html_for: Option<String>,
    disabled: bool,
    invalid: bool,
    extra: Vec<(String, String)>,
}

impl Attributes {
    /// Creates an empty bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// The element `id`.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// The form control `name`.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// The `type` of an input. Takes precedence over a button type.
    pub fn input_type(mut self, input_type: InputType) -> Self {
        self.input_type = Some(input_type);
        self
    }

    /// The `type` of a button.
    pub fn button_type(mut self, button_type: ButtonType) -> Self {
        self.button_type = Some(button_type);
        self
    }

    /// Placeholder text of an input.
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// The initial `value` of a form control.
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// The `for` attribute of a label.
    pub fn html_for(mut self, id: impl Into<String>) -> Self {
        self.html_for = Some(id.into());
        self
    }

    /// Writes the boolean `disabled` attribute when true.
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Marks the element `aria-invalid`, which the input styles pick up.
    pub fn invalid(mut self, invalid: bool) -> Self {
        self.invalid = invalid;
        self
    }

    /// Forwards an arbitrary attribute, e.g. `data-*` or `aria-*`.
    ///
    /// Names that are not valid HTML attribute names are dropped when the
    /// bag is applied.
    pub fn extra(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.push((name.into(), value.into()));
        self
    }

    /// Layers `other` over this bag.
    ///
    /// Fields set in `other` win, the `disabled` and `invalid` flags are
    /// kept if either side sets them, and `other`'s extras come after ours.
    pub fn merge(mut self, other: Attributes) -> Self {
        self.id = other.id.or(self.id);
        self.name = other.name.or(self.name);
        self.input_type = other.input_type.or(self.input_type);
        self.button_type = other.button_type.or(self.button_type);
        self.placeholder = other.placeholder.or(self.placeholder);
        self.value = other.value.or(self.value);
        self.html_for = other.html_for.or(self.html_for);
        self.disabled |= other.disabled;
        self.invalid |= other.invalid;
        self.extra.extend(other.extra);
        self
    }

    /// The `id`, if set.
    pub fn get_id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Returns true if `disabled` is set.
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Writes only the attributes `element` does not already carry.
    ///
    /// Components use this so that the attributes they set themselves
    /// (`role`, generated ids, `aria-*`, `data-slot`) cannot be overridden.
    pub fn apply_missing(&self, mut element: Element) -> Element {
        let staged = self.apply(Element::new(element.tag()));
        for (name, value) in staged.attrs() {
            if !element.has_attr(name) {
                element.set_attr(name.clone(), value.clone());
            }
        }
        element
    }

    /// Writes the attributes onto `element`, replacing same-named ones.
    pub fn apply(&self, mut element: Element) -> Element {
        let typed = [
            ("id", self.id.as_deref()),
            ("name", self.name.as_deref()),
            (
                "type",
                self.input_type
                    .map(|t| t.as_str())
                    .or(self.button_type.map(|t| t.as_str())),
            ),
            ("placeholder", self.placeholder.as_deref()),
            ("value", self.value.as_deref()),
            ("for", self.html_for.as_deref()),
        ];
        for (name, value) in typed {
            if let Some(value) = value {
                element = element.attr(name, value);
            }
        }

        if self.disabled {
            element = element.flag("disabled");
        }
        if self.invalid {
            element = element.attr("aria-invalid", "true");
        }

        for (name, value) in &self.extra {
            if name == "class" {
                debug!(value = %value, "ignoring class passed as an extra attribute");
                continue;
            }
            if !is_valid_attr_name(name) {
                debug!(name = %name, "ignoring extra attribute with an invalid name");
                continue;
            }
            element = element.attr(name.as_str(), value.as_str());
        }
        element
    }
}
