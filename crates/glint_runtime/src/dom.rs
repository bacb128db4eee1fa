//! Lightweight page model
//!
//! The engine needs two things from a document: startup queries (which
//! elements carry which classes, what inline styles they declare) and a
//! place to apply presentation effects. `PageDom` provides both as a plain
//! in-memory structure: the host mirrors its real document into it at
//! startup, and tests use it directly as a recording double.
//!
//! Insertion order is preserved so class queries are deterministic.

use glint_core::{Effect, NodeId, NodeIdGenerator, Theme, TimerToken, WatchOptions};
use indexmap::IndexMap;
use rustc_hash::FxHashMap;
use std::time::Duration;

/// One mirrored page element
#[derive(Debug, Default, Clone)]
pub struct PageNode {
    pub classes: Vec<String>,
    pub inline_styles: FxHashMap<&'static str, String>,
    pub attributes: FxHashMap<&'static str, String>,
    pub text: String,
}

/// In-memory document mirror and effect sink
#[derive(Debug)]
pub struct PageDom {
    nodes: IndexMap<NodeId, PageNode>,
    generator: NodeIdGenerator,
    /// Document root, target of `data-theme`
    root: NodeId,
    /// Globally injected style rules, in injection order
    style_rules: Vec<String>,
    /// Nodes the host's visibility primitive is currently armed for
    observed: FxHashMap<NodeId, WatchOptions>,
    /// Timers requested through effects (recorded when applied directly)
    scheduled: Vec<(TimerToken, Duration)>,
    /// Last persisted theme (recorded when applied directly)
    persisted_theme: Option<Theme>,
}

impl PageDom {
    /// An empty document with just a root element
    pub fn new() -> Self {
        let mut generator = NodeIdGenerator::new();
        let root = generator.next();
        let mut nodes = IndexMap::new();
        nodes.insert(root, PageNode::default());
        Self {
            nodes,
            generator,
            root,
            style_rules: Vec::new(),
            observed: FxHashMap::default(),
            scheduled: Vec::new(),
            persisted_theme: None,
        }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Add an element carrying the given classes
    pub fn add_element(&mut self, classes: &[&str]) -> NodeId {
        let id = self.generator.next();
        self.nodes.insert(
            id,
            PageNode {
                classes: classes.iter().map(|c| c.to_string()).collect(),
                ..PageNode::default()
            },
        );
        id
    }

    /// Add an element with one declared inline style (e.g. a bar width)
    pub fn add_element_with_style(
        &mut self,
        classes: &[&str],
        property: &'static str,
        value: &str,
    ) -> NodeId {
        let id = self.add_element(classes);
        self.set_inline_style(id, property, value);
        id
    }

    pub fn set_inline_style(&mut self, node: NodeId, property: &'static str, value: &str) {
        if let Some(entry) = self.nodes.get_mut(&node) {
            entry.inline_styles.insert(property, value.to_string());
        }
    }

    /// All nodes carrying `class`, in document order
    pub fn query_class(&self, class: &str) -> Vec<NodeId> {
        self.nodes
            .iter()
            .filter(|(_, node)| node.classes.iter().any(|c| c == class))
            .map(|(&id, _)| id)
            .collect()
    }

    /// First node carrying `class`, if any
    pub fn first_with_class(&self, class: &str) -> Option<NodeId> {
        self.query_class(class).into_iter().next()
    }

    pub fn inline_style(&self, node: NodeId, property: &str) -> Option<&str> {
        self.nodes
            .get(&node)?
            .inline_styles
            .get(property)
            .map(String::as_str)
    }

    pub fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.nodes
            .get(&node)
            .is_some_and(|n| n.classes.iter().any(|c| c == class))
    }

    pub fn text(&self, node: NodeId) -> Option<&str> {
        self.nodes.get(&node).map(|n| n.text.as_str())
    }

    pub fn attribute(&self, node: NodeId, name: &str) -> Option<&str> {
        self.nodes.get(&node)?.attributes.get(name).map(String::as_str)
    }

    pub fn style_rules(&self) -> &[String] {
        &self.style_rules
    }

    pub fn is_observed(&self, node: NodeId) -> bool {
        self.observed.contains_key(&node)
    }

    pub fn scheduled_timers(&self) -> &[(TimerToken, Duration)] {
        &self.scheduled
    }

    pub fn persisted_theme(&self) -> Option<Theme> {
        self.persisted_theme
    }

    /// Apply one effect to the mirror
    ///
    /// Unknown nodes are tolerated (the real document may have dropped an
    /// element); the effect is simply lost.
    pub fn apply(&mut self, effect: &Effect) {
        match effect {
            Effect::SetStyle {
                node,
                property,
                value,
            } => {
                if let Some(entry) = self.nodes.get_mut(node) {
                    entry.inline_styles.insert(property, value.clone());
                }
            }
            Effect::ClearStyle { node, property } => {
                if let Some(entry) = self.nodes.get_mut(node) {
                    entry.inline_styles.remove(property);
                }
            }
            Effect::AddClass { node, class } => {
                if let Some(entry) = self.nodes.get_mut(node) {
                    if !entry.classes.iter().any(|c| c == class) {
                        entry.classes.push(class.clone());
                    }
                }
            }
            Effect::RemoveClass { node, class } => {
                if let Some(entry) = self.nodes.get_mut(node) {
                    entry.classes.retain(|c| c != class);
                }
            }
            Effect::SetText { node, text } => {
                if let Some(entry) = self.nodes.get_mut(node) {
                    entry.text = text.clone();
                }
            }
            Effect::SetAttribute { node, name, value } => {
                if let Some(entry) = self.nodes.get_mut(node) {
                    entry.attributes.insert(name, value.clone());
                }
            }
            Effect::InjectStyleRule { css } => {
                self.style_rules.push(css.clone());
            }
            Effect::Observe { node, options } => {
                self.observed.insert(*node, *options);
            }
            Effect::Unobserve { node } => {
                self.observed.remove(node);
            }
            Effect::ScheduleTimer { token, delay } => {
                self.scheduled.push((*token, *delay));
            }
            Effect::PersistTheme { theme } => {
                self.persisted_theme = Some(*theme);
            }
        }
    }

    /// Apply a batch of effects in order
    pub fn apply_all<'a>(&mut self, effects: impl IntoIterator<Item = &'a Effect>) {
        for effect in effects {
            self.apply(effect);
        }
    }
}

impl Default for PageDom {
    fn default() -> Self {
        Self::new()
    }
}
