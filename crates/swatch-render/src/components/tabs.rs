//! Tabs: a trigger list plus one visible panel.
//!
//! Selection state lives in [`TabsState`]. Rendering emits every trigger
//! and only the panel whose value matches the current selection; the other
//! panels are left out of the markup entirely.

use std::sync::atomic::{AtomicUsize, Ordering};

use swatch_variants::{Selection, VariantRegistry};
use tracing::debug;

use crate::attrs::Attributes;
use crate::error::RenderError;
use crate::markup::{Component, Element, Node};

/// The currently selected tab value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabsState {
    value: String,
}

impl TabsState {
    /// Starts with `initial` selected.
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            value: initial.into(),
        }
    }

    /// The selected value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns true if `value` is selected.
    pub fn is_active(&self, value: &str) -> bool {
        self.value == value
    }

    /// Selects `value`. Returns true if the selection changed.
    pub fn select(&mut self, value: &str) -> bool {
        if self.value == value {
            return false;
        }
        debug!(from = %self.value, to = value, "tab selected");
        self.value = value.to_string();
        true
    }
}

/// A tab button inside a [`TabsList`].
#[derive(Debug, Clone)]
pub struct TabsTrigger {
    value: String,
    class: Option<String>,
    attrs: Attributes,
    children: Vec<Node>,
}

impl TabsTrigger {
    /// A trigger for the panel with `value`, labelled `label`.
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            class: None,
            attrs: Attributes::default(),
            children: vec![Node::Text(label.into())],
        }
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

    /// Disabled triggers render `disabled` and cannot be selected.
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.attrs = self.attrs.disabled(disabled);
        self
    }

    /// Appends a child after the label, e.g. an icon or a badge.
    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// The panel value this trigger selects.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns true if the trigger is disabled.
    pub fn is_disabled(&self) -> bool {
        self.attrs.is_disabled()
    }

    fn render(
        &self,
        ids: &TabIds<'_>,
        state: &TabsState,
        styles: &VariantRegistry,
    ) -> Result<Element, RenderError> {
        let class = styles.resolve(
            "tabs-trigger",
            &Selection::new(),
            self.class.as_deref().unwrap_or(""),
        )?;
        let active = state.is_active(&self.value);

        let trigger = Element::new("button")
            .attr("type", "button")
            .attr("role", "tab")
            .attr("id", ids.trigger(&self.value))
            .attr("aria-selected", active.to_string())
            .attr("aria-controls", ids.panel(&self.value))
            .attr("data-state", data_state(active))
            .attr("data-slot", "tabs-trigger")
            .class(class);
        Ok(self
            .attrs
            .apply_missing(trigger)
            .children(self.children.iter().cloned()))
    }
}

/// The row of triggers.
#[derive(Debug, Clone, Default)]
pub struct TabsList {
    class: Option<String>,
    attrs: Attributes,
    triggers: Vec<TabsTrigger>,
}

impl TabsList {
    /// An empty trigger row.
    pub fn new() -> Self {
        Self::default()
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

    /// Appends a trigger.
    pub fn trigger(mut self, trigger: TabsTrigger) -> Self {
        self.triggers.push(trigger);
        self
    }

    fn render(
        &self,
        ids: &TabIds<'_>,
        state: &TabsState,
        styles: &VariantRegistry,
    ) -> Result<Element, RenderError> {
        let class = styles.resolve("tabs-list", &Selection::new(), self.class.as_deref().unwrap_or(""))?;
        let triggers = self
            .triggers
            .iter()
            .map(|trigger| trigger.render(ids, state, styles))
            .collect::<Result<Vec<_>, _>>()?;
        let list = Element::new("div")
            .attr("role", "tablist")
            .attr("aria-orientation", "horizontal")
            .attr("data-slot", "tabs-list")
            .class(class);
        Ok(self.attrs.apply_missing(list).children(triggers))
    }
}

/// The panel shown while its value is selected.
#[derive(Debug, Clone)]
pub struct TabsContent {
    value: String,
    class: Option<String>,
    attrs: Attributes,
    children: Vec<Node>,
}

impl TabsContent {
    /// An empty panel for `value`.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            class: None,
            attrs: Attributes::default(),
            children: Vec::new(),
        }
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

    /// The value that shows this panel.
    pub fn value(&self) -> &str {
        &self.value
    }

    fn render(&self, ids: &TabIds<'_>, styles: &VariantRegistry) -> Result<Element, RenderError> {
        let class = styles.resolve(
            "tabs-content",
            &Selection::new(),
            self.class.as_deref().unwrap_or(""),
        )?;
        let panel = Element::new("div")
            .attr("role", "tabpanel")
            .attr("id", ids.panel(&self.value))
            .attr("aria-labelledby", ids.trigger(&self.value))
            .attr("data-state", data_state(true))
            .attr("data-slot", "tabs-content")
            .class(class);
        Ok(self
            .attrs
            .apply_missing(panel)
            .children(self.children.iter().cloned()))
    }
}

/// A tab group.
///
/// Trigger and panel ids are `{prefix}-trigger-{value}` and
/// `{prefix}-content-{value}`, with whitespace in either part replaced by
/// `-`. Attributes the group and its parts generate (`role`, ids, `aria-*`,
/// `data-state`, `data-slot`) take precedence over same-named entries in
/// their [`Attributes`] bags.
///
/// # Example
///
/// ```rust
/// use swatch_render::{builtin_styles, render_html, Node, Tabs, TabsContent, TabsList, TabsTrigger};
///
/// let mut tabs = Tabs::new("account")
///     .list(
///         TabsList::new()
///             .trigger(TabsTrigger::new("account", "Account"))
///             .trigger(TabsTrigger::new("password", "Password")),
///     )
///     .panel(TabsContent::new("account").child("Account settings"))
///     .panel(TabsContent::new("password").child("Change password"));
///
/// assert!(tabs.select("password"));
/// let html = render_html(&Node::from(tabs), builtin_styles()).unwrap();
/// assert!(html.contains("Change password"));
/// assert!(!html.contains("Account settings"));
/// ```
#[derive(Debug, Clone)]
pub struct Tabs {
    id: String,
    state: TabsState,
    class: Option<String>,
    attrs: Attributes,
    list: TabsList,
    panels: Vec<TabsContent>,
}

static NEXT_GROUP: AtomicUsize = AtomicUsize::new(0);

impl Tabs {
    /// Creates a tab group with `default_value` selected.
    ///
    /// Each group gets its own id prefix (`tabs-0`, `tabs-1`, ...) so
    /// groups on one page never share ids. Use [`id`](Self::id) for ids that
    /// do not depend on construction order.
    pub fn new(default_value: impl Into<String>) -> Self {
        let group = NEXT_GROUP.fetch_add(1, Ordering::Relaxed);
        Self {
            id: format!("tabs-{group}"),
            state: TabsState::new(default_value),
            class: None,
            attrs: Attributes::default(),
            list: TabsList::default(),
            panels: Vec::new(),
        }
    }

    /// Prefix for the generated trigger and panel ids.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Extra classes appended after the base classes.
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Merges `attrs` into the root's attribute bag; see [`Attributes::merge`].
    pub fn attrs(mut self, attrs: Attributes) -> Self {
        self.attrs = self.attrs.merge(attrs);
        self
    }

    /// Sets the trigger row.
    pub fn list(mut self, list: TabsList) -> Self {
        self.list = list;
        self
    }

    /// Appends a panel.
    pub fn panel(mut self, panel: TabsContent) -> Self {
        self.panels.push(panel);
        self
    }

    /// The selection state.
    pub fn state(&self) -> &TabsState {
        &self.state
    }

    /// The selected value.
    pub fn value(&self) -> &str {
        self.state.value()
    }

    /// Selects the tab with `value`. Values belonging to a disabled trigger
    /// are ignored. Returns true if the selection changed.
    pub fn select(&mut self, value: &str) -> bool {
        let disabled = self
            .list
            .triggers
            .iter()
            .any(|t| t.value == value && t.is_disabled());
        if disabled {
            debug!(value, "ignoring selection of disabled tab");
            return false;
        }
        self.state.select(value)
    }

    /// Builder form of [`select`](Self::select).
    pub fn selected(mut self, value: &str) -> Self {
        self.select(value);
        self
    }
}

impl Component for Tabs {
    fn render(&self, styles: &VariantRegistry) -> Result<Element, RenderError> {
        let ids = TabIds { prefix: &self.id };
        let class = styles.resolve("tabs", &Selection::new(), self.class.as_deref().unwrap_or(""))?;

        let root = Element::new("div")
            .attr("data-slot", "tabs")
            .attr("data-orientation", "horizontal")
            .class(class);
        let mut root = self
            .attrs
            .apply_missing(root)
            .child(self.list.render(&ids, &self.state, styles)?);

        if let Some(panel) = self.panels.iter().find(|p| self.state.is_active(&p.value)) {
            root = root.child(panel.render(&ids, styles)?);
        }
        Ok(root)
    }
}

struct TabIds<'a> {
    prefix: &'a str,
}

impl TabIds<'_> {
    fn trigger(&self, value: &str) -> String {
        format!("{}-trigger-{}", id_part(self.prefix), id_part(value))
    }

    fn panel(&self, value: &str) -> String {
        format!("{}-content-{}", id_part(self.prefix), id_part(value))
    }
}

// Ids may not contain whitespace.
fn id_part(value: &str) -> String {
    value
        .chars()
        .map(|c| if c.is_whitespace() { '-' } else { c })
        .collect()
}

fn data_state(active: bool) -> &'static str {
    if active {
        "active"
    } else {
        "inactive"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::render_html;
    use swatch_variants::VariantTable;

    fn styles() -> VariantRegistry {
        VariantRegistry::new()
            .with("tabs", VariantTable::new("flex"))
            .with("tabs-list", VariantTable::new("inline-flex"))
            .with("tabs-trigger", VariantTable::new("tab"))
            .with("tabs-content", VariantTable::new("panel"))
    }

    fn account_tabs() -> Tabs {
        Tabs::new("account")
            .id("settings")
            .list(
                TabsList::new()
                    .trigger(TabsTrigger::new("account", "Account"))
                    .trigger(TabsTrigger::new("password", "Password"))
                    .trigger(TabsTrigger::new("billing", "Billing").disabled(true)),
            )
            .panel(TabsContent::new("account").class("mt-4").child("account panel"))
            .panel(TabsContent::new("password").class("mt-4").child("password panel"))
    }

    fn html(tabs: &Tabs) -> String {
        render_html(&Node::from(tabs.clone()), &styles()).unwrap()
    }

    #[test]
    fn test_state_select() {
        let mut state = TabsState::new("a");
        assert!(state.is_active("a"));
        assert!(!state.select("a"));
        assert!(state.select("b"));
        assert_eq!(state.value(), "b");
    }

    #[test]
    fn test_initial_value_renders_only_its_panel() {
        let html = html(&account_tabs());
        assert!(html.contains("account panel"));
        assert!(!html.contains("password panel"));
        assert_eq!(html.matches("role=\"tabpanel\"").count(), 1);
    }

    #[test]
    fn test_select_switches_panel() {
        let mut tabs = account_tabs();
        assert!(tabs.select("password"));

        let html = html(&tabs);
        assert!(html.contains("password panel"));
        assert!(!html.contains("account panel"));
        assert!(html.contains(
            r#"id="settings-trigger-password" aria-selected="true" aria-controls="settings-content-password" data-state="active""#
        ));
        assert!(html.contains(
            r#"id="settings-trigger-account" aria-selected="false" aria-controls="settings-content-account" data-state="inactive""#
        ));
    }

    #[test]
    fn test_disabled_trigger_cannot_be_selected() {
        let mut tabs = account_tabs();
        assert!(!tabs.select("billing"));
        assert_eq!(tabs.value(), "account");
    }

    #[test]
    fn test_unmatched_value_renders_no_panel() {
        let tabs = account_tabs().selected("missing");
        let html = html(&tabs);
        assert!(!html.contains("role=\"tabpanel\""));
        assert_eq!(html.matches("role=\"tab\"").count(), 3);
    }

    #[test]
    fn test_default_groups_get_distinct_ids() {
        let group = || {
            Tabs::new("a")
                .list(TabsList::new().trigger(TabsTrigger::new("a", "A")))
                .panel(TabsContent::new("a").child("panel"))
        };
        let page = Element::new("div").child(group()).child(group());
        let html = render_html(&Node::from(page), &styles()).unwrap();

        let ids: Vec<&str> = html
            .split("id=\"")
            .skip(1)
            .filter_map(|rest| rest.split('"').next())
            .collect();
        assert_eq!(ids.len(), 4);
        let mut unique = ids.clone();
        unique.sort_unstable();
        unique.dedup();
        assert_eq!(unique.len(), 4, "{ids:?}");
    }

    #[test]
    fn test_whitespace_in_values_kept_out_of_ids() {
        let tabs = Tabs::new("two words")
            .id("my tabs")
            .list(TabsList::new().trigger(TabsTrigger::new("two words", "Two")))
            .panel(TabsContent::new("two words").child("panel"));
        let html = html(&tabs);
        assert!(html.contains(r#"id="my-tabs-trigger-two-words""#));
        assert!(html.contains(r#"aria-labelledby="my-tabs-trigger-two-words""#));
        assert!(html.contains("panel"));
    }

    #[test]
    fn test_parts_forward_attributes() {
        let tabs = Tabs::new("a")
            .id("t")
            .attrs(Attributes::new().extra("data-part", "root"))
            .list(
                TabsList::new()
                    .attrs(Attributes::new().extra("data-part", "list").extra("role", "menu"))
                    .trigger(
                        TabsTrigger::new("a", "A")
                            .attrs(
                                Attributes::new()
                                    .id("custom")
                                    .extra("data-part", "trigger"),
                            )
                            .child(Element::new("span").text("3")),
                    ),
            )
            .panel(
                TabsContent::new("a")
                    .attrs(Attributes::new().extra("data-part", "panel"))
                    .child("body"),
            );
        let html = html(&tabs);

        for part in ["root", "list", "trigger", "panel"] {
            assert!(html.contains(&format!("data-part=\"{part}\"")), "{part}");
        }
        assert!(html.contains(r#"role="tablist""#));
        assert!(!html.contains(r#"role="menu""#));
        assert!(html.contains(r#"id="t-trigger-a""#));
        assert!(!html.contains(r#"id="custom""#));
        assert!(html.contains(r#"data-part="trigger">A<span>3</span></button>"#));
    }

    #[test]
    fn test_disabled_via_attrs_cannot_be_selected() {
        let mut tabs = Tabs::new("a").list(
            TabsList::new()
                .trigger(TabsTrigger::new("a", "A"))
                .trigger(TabsTrigger::new("b", "B").attrs(Attributes::new().disabled(true))),
        );
        assert!(!tabs.select("b"));
        assert!(html(&tabs).contains("disabled"));
    }

    #[test]
    fn test_panel_markup() {
        let html = html(&account_tabs());
        assert!(html.contains(
            "<div role=\"tabpanel\" id=\"settings-content-account\" \
             aria-labelledby=\"settings-trigger-account\" data-state=\"active\" \
             data-slot=\"tabs-content\" class=\"panel mt-4\">account panel</div>"
        ));
    }
}
