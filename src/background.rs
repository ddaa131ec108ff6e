//! Background-click classification.
//!
//! A click on empty chart space clears the selection; a click on a point,
//! bar or selection overlay must not. Charts report the clicked element
//! through the [`ElementLike`] contract and this module decides which of
//! the two it is.
//!
//! The classifier is a narrow allow-list. An unlisted custom primitive is
//! treated as background, but plain background is never mistaken for data.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::config::ClassifierConfig;
use crate::modifiers::{extract_modifiers, ModifierSource, PointerFlags};

/// The capabilities the classifier needs from a rendered element.
pub trait ElementLike {
    fn has_class(&self, name: &str) -> bool;
    fn tag_name(&self) -> &str;
    fn has_attribute(&self, name: &str) -> bool;
    fn parent(&self) -> Option<&Self>;
    /// Whether this element alone matches a simple CSS selector.
    fn matches_selector(&self, selector: &str) -> bool;

    /// This element, then each parent up to the root.
    fn ancestors(&self) -> impl Iterator<Item = &Self> + '_ {
        std::iter::successors(Some(self), |node| node.parent())
    }

    /// Nearest element (self included) matching any of `selectors`.
    fn closest_matching(&self, selectors: &[String]) -> Option<&Self> {
        self.ancestors()
            .find(|node| selectors.iter().any(|s| node.matches_selector(s)))
    }
}

/// A plain element tree node, owning its parent chain.
///
/// Useful for charts that describe hit-test results without a DOM, and for
/// tests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElementNode {
    pub tag: String,
    pub classes: Vec<String>,
    pub attributes: HashMap<String, String>,
    pub parent: Option<Box<ElementNode>>,
}

impl ElementNode {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Default::default()
        }
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn with_parent(mut self, parent: ElementNode) -> Self {
        self.parent = Some(Box::new(parent));
        self
    }
}

impl ElementLike for ElementNode {
    fn has_class(&self, name: &str) -> bool {
        self.classes.iter().any(|c| c == name)
    }

    fn tag_name(&self) -> &str {
        &self.tag
    }

    fn has_attribute(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }

    fn parent(&self) -> Option<&Self> {
        self.parent.as_deref()
    }

    /// Supports `tag`, `.class`, `tag.class`, `.a.b` and a trailing `[attr]`.
    fn matches_selector(&self, selector: &str) -> bool {
        let selector = selector.trim();
        if selector.is_empty() {
            return false;
        }

        let (compound, attr) = match selector.find('[') {
            Some(pos) if selector.ends_with(']') => {
                (&selector[..pos], Some(&selector[pos + 1..selector.len() - 1]))
            }
            _ => (selector, None),
        };

        if let Some(attr) = attr {
            if !self.has_attribute(attr.trim()) {
                return false;
            }
        }

        let mut parts = compound.split('.');
        let tag = parts.next().unwrap_or_default();
        if !tag.is_empty() && tag != "*" && !self.tag.eq_ignore_ascii_case(tag) {
            return false;
        }
        parts.filter(|c| !c.is_empty()).all(|c| self.has_class(c))
    }
}

fn has_any_class<E: ElementLike>(element: &E, classes: &[String]) -> bool {
    classes.iter().any(|c| element.has_class(c))
}

fn matches_any<E: ElementLike>(element: &E, selectors: &[String]) -> bool {
    selectors.iter().any(|s| element.matches_selector(s))
}

/// Classifies `target` with the default allow-lists.
///
/// `None` is background: an unknown target cannot be a data element.
pub fn is_background_element<E: ElementLike>(target: Option<&E>) -> bool {
    is_background_element_with(ClassifierConfig::shared_default(), target)
}

/// Classifies `target` with custom allow-lists.
pub fn is_background_element_with<E: ElementLike>(config: &ClassifierConfig, target: Option<&E>) -> bool {
    let Some(element) = target else {
        trace!("no click target, treating as background");
        return true;
    };

    if has_any_class(element, &config.data_classes) {
        trace!(tag = element.tag_name(), "data element class");
        return false;
    }

    let is_primitive = config
        .svg_primitives
        .iter()
        .any(|t| element.tag_name().eq_ignore_ascii_case(t));
    if is_primitive {
        let has_sample_attr = config
            .sample_attributes
            .iter()
            .any(|a| element.has_attribute(a));
        let parent_is_data = element
            .parent()
            .is_some_and(|p| has_any_class(p, &config.data_classes));
        if has_sample_attr || parent_is_data {
            trace!(tag = element.tag_name(), "svg primitive bound to a sample");
            return false;
        }
    }

    // Nested inside a series group, below a symbol or bar wrapper.
    if let Some(group) = element.closest_matching(&config.data_group_selectors) {
        if !std::ptr::eq(group, element)
            && element
                .ancestors()
                .take_while(|node| !std::ptr::eq(*node, group))
                .any(|node| matches_any(node, &config.symbol_selectors))
        {
            trace!(tag = element.tag_name(), "inside a data group symbol");
            return false;
        }
    }

    trace!(tag = element.tag_name(), "background element");
    true
}

/// Interaction tool active on a chart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolMode {
    #[default]
    Click,
    Box,
    Lasso,
}

/// A click on a chart container: the modifier flags plus whatever element
/// ended up under the pointer.
pub trait ContainerClick: ModifierSource {
    type Element: ElementLike;

    fn target(&self) -> Option<&Self::Element>;
}

/// Owned [`ContainerClick`] for callers that hit-test themselves.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChartClick<E = ElementNode> {
    pub flags: PointerFlags,
    pub target: Option<E>,
}

impl<E> ChartClick<E> {
    pub fn new(flags: PointerFlags, target: Option<E>) -> Self {
        Self { flags, target }
    }
}

impl<E> ModifierSource for ChartClick<E> {
    fn shift_key(&self) -> bool {
        self.flags.shift_key
    }

    fn ctrl_key(&self) -> bool {
        self.flags.ctrl_key
    }

    fn meta_key(&self) -> bool {
        self.flags.meta_key
    }
}

impl<E: ElementLike> ContainerClick for ChartClick<E> {
    type Element = E;

    fn target(&self) -> Option<&E> {
        self.target.as_ref()
    }
}

/// Whether a container click should clear the selection.
///
/// Only plain clicks in [`ToolMode::Click`] on background qualify. Box and
/// lasso tools commit their own way, and modifier clicks on background are
/// kept free so they never wipe a selection.
pub fn should_clear_on_background_click<C: ContainerClick + ?Sized>(event: &C, tool_mode: ToolMode) -> bool {
    should_clear_on_background_click_with(ClassifierConfig::shared_default(), event, tool_mode)
}

pub fn should_clear_on_background_click_with<C: ContainerClick + ?Sized>(
    config: &ClassifierConfig,
    event: &C,
    tool_mode: ToolMode,
) -> bool {
    if tool_mode != ToolMode::Click {
        return false;
    }
    if extract_modifiers(event).any() {
        return false;
    }
    is_background_element_with(config, event.target())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn svg_root() -> ElementNode {
        ElementNode::new("svg").with_class("recharts-surface")
    }

    #[test]
    fn selector_matcher_handles_compound_forms() {
        let el = ElementNode::new("g")
            .with_class("recharts-layer")
            .with_class("recharts-bar")
            .with_attribute("data-index", "3");
        assert!(el.matches_selector(".recharts-bar"));
        assert!(el.matches_selector("g.recharts-bar"));
        assert!(el.matches_selector(".recharts-layer.recharts-bar"));
        assert!(el.matches_selector("G"));
        assert!(el.matches_selector("[data-index]"));
        assert!(el.matches_selector("g[data-index]"));
        assert!(!el.matches_selector("rect.recharts-bar"));
        assert!(!el.matches_selector(".recharts-line"));
        assert!(!el.matches_selector("[data-sample]"));
        assert!(!el.matches_selector(""));
    }

    #[test]
    fn closest_includes_self_then_walks_up() {
        let el = ElementNode::new("path")
            .with_parent(ElementNode::new("g").with_class("recharts-bar").with_parent(svg_root()));
        let group = el.closest_matching(&[".recharts-bar".to_string()]).unwrap();
        assert_eq!(group.tag, "g");
        assert!(el.closest_matching(&["path".to_string()]).is_some_and(|n| n.tag == "path"));
        assert!(el.closest_matching(&[".nope".to_string()]).is_none());
    }

    #[test]
    fn primitive_under_data_class_parent_is_data() {
        let el = ElementNode::new("path").with_parent(ElementNode::new("g").with_class("recharts-symbols"));
        assert!(!is_background_element(Some(&el)));
    }

    #[test]
    fn non_primitive_under_data_class_parent_is_background() {
        let el = ElementNode::new("text").with_parent(ElementNode::new("g").with_class("recharts-symbols"));
        assert!(is_background_element(Some(&el)));
    }

    #[test]
    fn group_itself_is_background() {
        let group = ElementNode::new("g")
            .with_class("recharts-scatter")
            .with_parent(svg_root());
        assert!(is_background_element(Some(&group)));
    }

    #[test]
    fn custom_config_extends_allow_list() {
        let cfg = ClassifierConfig::default().with_data_class("heatmap-cell");
        let cell = ElementNode::new("div").with_class("heatmap-cell");
        assert!(is_background_element(Some(&cell)));
        assert!(!is_background_element_with(&cfg, Some(&cell)));
    }
}
