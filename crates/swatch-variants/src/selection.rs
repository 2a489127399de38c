//! Caller-chosen axis values for one render.

/// An enumerated value on a known axis.
///
/// Implemented by the typed enums of each component so that callers can only
/// build selections from legal values.
pub trait VariantValue {
    /// The axis this value belongs to.
    const AXIS: &'static str;

    /// The value's name in the variant table.
    fn as_str(&self) -> &'static str;
}

/// A partial map from axis name to selected value.
///
/// Axes left unset resolve to their declared default. Entries naming axes
/// the table does not declare are ignored at resolution time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    values: Vec<(String, String)>,
}

impl Selection {
    /// Creates an empty selection (every axis at its default).
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects `value` on `axis`, replacing any earlier choice.
    pub fn with(mut self, axis: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(axis.into(), value.into());
        self
    }

    /// Selects a typed value on its own axis.
    pub fn set<V: VariantValue>(self, value: V) -> Self {
        self.with(V::AXIS, value.as_str())
    }

    /// Selects a typed value when present, leaving the axis at its default otherwise.
    pub fn set_opt<V: VariantValue>(self, value: Option<V>) -> Self {
        match value {
            Some(value) => self.set(value),
            None => self,
        }
    }

    /// In-place form of [`with`](Self::with).
    pub fn insert(&mut self, axis: String, value: String) {
        match self.values.iter_mut().find(|(name, _)| *name == axis) {
            Some(slot) => slot.1 = value,
            None => self.values.push((axis, value)),
        }
    }

    /// The selected value for `axis`, if set.
    pub fn get(&self, axis: &str) -> Option<&str> {
        self.values
            .iter()
            .find(|(name, _)| name == axis)
            .map(|(_, value)| value.as_str())
    }

    /// Returns true if no axis is set.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<A, V> FromIterator<(A, V)> for Selection
where
    A: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (A, V)>>(iter: T) -> Self {
        let mut selection = Selection::new();
        for (axis, value) in iter {
            selection.insert(axis.into(), value.into());
        }
        selection
    }
}
