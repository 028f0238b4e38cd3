//! Tree-matching grammar rules for node classification.
//!
//! A [`Rule`] is a small boolean expression over a node's tag and its
//! ancestor chain. A [`Grammar`] combines a container rule and a leaf rule
//! into the structural/basic classification every document type uses:
//!
//! ```text
//! structural = container
//! basic      = leaf
//!              and not(ancestor matches leaf)     (unless nested leaves are allowed)
//!              and ancestor matches structural
//! ```

use roxmltree::Node;

use crate::namespace::QName;
use crate::xml::{has_ancestor, has_tag, is_element};

/// Composable boolean condition evaluated in node context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rule {
    /// The node is an element with this name.
    Tag(QName),
    /// At least one sub-rule holds.
    Any(Vec<Rule>),
    /// Every sub-rule holds.
    All(Vec<Rule>),
    /// The sub-rule does not hold.
    Not(Box<Rule>),
    /// Some element ancestor satisfies the sub-rule.
    HasAncestor(Box<Rule>),
}

impl Rule {
    #[must_use]
    pub fn tag(name: QName) -> Self {
        Self::Tag(name)
    }

    /// Match any of the given element names.
    #[must_use]
    pub fn any_tag(names: impl IntoIterator<Item = QName>) -> Self {
        Self::Any(names.into_iter().map(Self::Tag).collect())
    }

    #[must_use]
    pub fn has_ancestor(rule: Rule) -> Self {
        Self::HasAncestor(Box::new(rule))
    }

    #[must_use]
    pub fn negate(self) -> Self {
        Self::Not(Box::new(self))
    }

    /// Require this rule to hold under an ancestor matching `context`.
    #[must_use]
    pub fn within(self, context: Rule) -> Self {
        Self::All(vec![self, Self::has_ancestor(context)])
    }

    /// Evaluate the rule against a node.
    #[must_use]
    pub fn matches(&self, node: Node<'_, '_>) -> bool {
        match self {
            Self::Tag(name) => has_tag(node, *name),
            Self::Any(rules) => rules.iter().any(|r| r.matches(node)),
            Self::All(rules) => rules.iter().all(|r| r.matches(node)),
            Self::Not(rule) => !rule.matches(node),
            Self::HasAncestor(rule) => has_ancestor(node, |anc| rule.matches(anc)),
        }
    }
}

/// Check whether a rule holds for a node.
#[must_use]
pub fn exists(node: Node<'_, '_>, rule: &Rule) -> bool {
    rule.matches(node)
}

/// Structural/basic classification grammar of one document type.
#[derive(Debug, Clone)]
pub struct Grammar {
    structural: Rule,
    leaf: Rule,
    exclusive_leaves: bool,
}

impl Grammar {
    /// Create a grammar from a container rule and a leaf rule.
    ///
    /// Leaves nested in other leaves are not basic nodes by default.
    #[must_use]
    pub fn new(structural: Rule, leaf: Rule) -> Self {
        Self {
            structural,
            leaf,
            exclusive_leaves: true,
        }
    }

    /// Classify leaves as basic even when nested in another leaf.
    #[must_use]
    pub fn with_nested_leaves(mut self) -> Self {
        self.exclusive_leaves = false;
        self
    }

    /// Check whether a node is a structural container.
    #[must_use]
    pub fn is_structural(&self, node: Node<'_, '_>) -> bool {
        is_element(node) && exists(node, &self.structural)
    }

    /// Check whether a node is a basic content unit.
    #[must_use]
    pub fn is_basic(&self, node: Node<'_, '_>) -> bool {
        if !is_element(node) || !exists(node, &self.leaf) {
            return false;
        }
        if self.exclusive_leaves && has_ancestor(node, |anc| self.leaf.matches(anc)) {
            return false;
        }
        has_ancestor(node, |anc| self.structural.matches(anc))
    }
}
