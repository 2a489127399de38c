//! Variant tables and class resolution.

use tracing::trace;

use crate::axis::VariantAxis;
use crate::error::VariantError;
use crate::selection::Selection;
use crate::tokens::{merge_tokens, split_tokens};

/// Base tokens plus an ordered list of variant axes for one component.
///
/// Tables are built with an infallible fluent API and checked with
/// [`validate`](Self::validate), mirroring how a stylesheet is assembled and
/// then verified before rendering.
///
/// # Example
///
/// ```rust
/// use swatch_variants::{Selection, VariantAxis, VariantTable};
///
/// let button = VariantTable::new("btn")
///     .axis(
///         VariantAxis::new("variant")
///             .value("default", "bg-a")
///             .value("destructive", "bg-b")
///             .default_value("default"),
///     );
///
/// let selection = Selection::new().with("variant", "destructive");
/// assert_eq!(button.resolve(&selection, ""), "btn bg-b");
/// assert_eq!(button.resolve(&Selection::new(), "w-full"), "btn bg-a w-full");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariantTable {
    base: Vec<String>,
    axes: Vec<VariantAxis>,
}

impl VariantTable {
    /// Creates a table whose base tokens are always included.
    pub fn new(base: &str) -> Self {
        Self {
            base: split_tokens(base),
            axes: Vec::new(),
        }
    }

    /// Creates a table from an already-split base token list.
    pub fn from_tokens<I, S>(base: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            base: base.into_iter().map(Into::into).collect(),
            axes: Vec::new(),
        }
    }

    /// Appends an axis. An axis with the same name is replaced in place,
    /// keeping its original position in the resolution order.
    pub fn axis(mut self, axis: VariantAxis) -> Self {
        match self.axes.iter_mut().find(|a| a.name() == axis.name()) {
            Some(slot) => *slot = axis,
            None => self.axes.push(axis),
        }
        self
    }

    /// Base tokens in declaration order.
    pub fn base(&self) -> &[String] {
        &self.base
    }

    /// Axes in resolution order.
    pub fn axes(&self) -> &[VariantAxis] {
        &self.axes
    }

    /// Looks up an axis by name.
    pub fn get_axis(&self, name: &str) -> Option<&VariantAxis> {
        self.axes.iter().find(|a| a.name() == name)
    }

    /// Validates every axis.
    pub fn validate(&self) -> Result<(), VariantError> {
        self.axes.iter().try_for_each(VariantAxis::validate)
    }

    /// Resolves a selection and caller override into the final class string.
    ///
    /// Tokens are taken from the base, then from each axis in declaration
    /// order, then from `class_override`, and merged so the last occurrence
    /// of a repeated token wins. An axis whose selected value it does not
    /// declare contributes nothing.
    pub fn resolve(&self, selection: &Selection, class_override: &str) -> String {
        let mut parts: Vec<&str> = self.base.iter().map(String::as_str).collect();

        for axis in &self.axes {
            let Some(value) = selection.get(axis.name()).or(axis.default()) else {
                continue;
            };
            match axis.fragment(value) {
                Some(tokens) => parts.extend(tokens.iter().map(String::as_str)),
                None => trace!(axis = axis.name(), value, "unknown variant value, no fragment"),
            }
        }

        parts.push(class_override);
        merge_tokens(parts)
    }

    /// Resolves with every axis at its default.
    pub fn resolve_default(&self, class_override: &str) -> String {
        self.resolve(&Selection::new(), class_override)
    }
}
