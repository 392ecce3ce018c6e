// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sibling identifiers and the paths composed from them.
//!
//! An [`ElementIdentifier`] names a child within its parent's ordered child
//! list: the element's type, an optional caller-supplied key, and how many
//! earlier siblings shared that type and key. An [`ElementPath`] is the
//! sequence of identifiers from a resolution root down to a render node.
//!
//! Resolve only ever *prepends* to paths as results propagate upward, so a
//! path starts out [`EMPTY`](ElementPath::EMPTY) ("self") at the render node
//! and grows by one identifier per ancestor level. Components live in a
//! [`VecDeque`], so each prepend is O(1) no matter how deep the path is.
//!
//! Sibling uniqueness is a precondition supplied by the layout collaborator
//! (usually by way of [`IdentifierFactory`]); it is not verified here.

use alloc::collections::{BTreeMap, VecDeque, vec_deque};
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;

use crate::element::Element;

/// Stable identity of a child within its parent's ordered child list.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ElementIdentifier {
    element_type: &'static str,
    key: Option<Arc<str>>,
    count: u32,
}

impl ElementIdentifier {
    /// Creates an identifier from its parts.
    #[must_use]
    pub fn new(element_type: &'static str, key: Option<Arc<str>>, count: u32) -> Self {
        Self {
            element_type,
            key,
            count,
        }
    }

    /// Creates the identifier of the first unkeyed child of `element`'s type.
    #[must_use]
    pub fn first_of(element: &dyn Element) -> Self {
        Self::new(element.type_name(), None, 0)
    }

    /// The element type name.
    #[must_use]
    pub fn element_type(&self) -> &'static str {
        self.element_type
    }

    /// The caller-supplied key, if any.
    #[must_use]
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    /// How many earlier siblings had the same type and key.
    #[must_use]
    pub fn count(&self) -> u32 {
        self.count
    }
}

impl fmt::Display for ElementIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.element_type)?;
        if let Some(key) = &self.key {
            write!(f, ".{key}")?;
        }
        if self.count != 0 {
            write!(f, "#{}", self.count)?;
        }
        Ok(())
    }
}

/// Hands out identifiers for one ordered sibling list.
///
/// Repeated `(type, key)` pairs get increasing counts, so identifiers from a
/// single factory are unique among those siblings.
#[derive(Debug, Default)]
pub struct IdentifierFactory {
    seen: BTreeMap<(&'static str, Option<Arc<str>>), u32>,
}

impl IdentifierFactory {
    /// Creates a factory with no siblings seen yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the identifier for the next sibling of the given type and key.
    pub fn next(&mut self, element_type: &'static str, key: Option<Arc<str>>) -> ElementIdentifier {
        let slot = self.seen.entry((element_type, key.clone())).or_insert(0);
        let count = *slot;
        *slot += 1;
        ElementIdentifier::new(element_type, key, count)
    }

    /// Returns the identifier for the next unkeyed sibling `element`.
    pub fn next_for(&mut self, element: &dyn Element) -> ElementIdentifier {
        self.next(element.type_name(), None)
    }
}

/// Ordered identifiers from a resolution root to a descendant render node.
///
/// Equality, ordering, and hashing are structural.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ElementPath {
    components: VecDeque<ElementIdentifier>,
}

impl ElementPath {
    /// The path that denotes "self".
    pub const EMPTY: Self = Self {
        components: VecDeque::new(),
    };

    /// Returns the empty path.
    #[must_use]
    pub const fn empty() -> Self {
        Self::EMPTY
    }

    /// Creates a path from its components, root first.
    #[must_use]
    pub fn from_components(components: Vec<ElementIdentifier>) -> Self {
        Self {
            components: components.into(),
        }
    }

    /// The identifiers in this path, root first.
    pub fn components(&self) -> vec_deque::Iter<'_, ElementIdentifier> {
        self.components.iter()
    }

    /// Number of identifiers in the path.
    #[must_use]
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Whether this is the empty ("self") path.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Inserts `identifier` in front of the path.
    pub fn prepend(&mut self, identifier: ElementIdentifier) {
        self.components.push_front(identifier);
    }

    /// Returns a copy with `identifier` in front.
    #[must_use]
    pub fn prepending(&self, identifier: ElementIdentifier) -> Self {
        let mut path = self.clone();
        path.prepend(identifier);
        path
    }

    /// Returns a copy with `identifier` at the end.
    #[must_use]
    pub fn appending(&self, identifier: ElementIdentifier) -> Self {
        let mut path = self.clone();
        path.components.push_back(identifier);
        path
    }

    /// Returns `self` followed by every component of `suffix`.
    #[must_use]
    pub fn joined(&self, suffix: &Self) -> Self {
        let mut components = VecDeque::with_capacity(self.len() + suffix.len());
        components.extend(self.components.iter().cloned());
        components.extend(suffix.components.iter().cloned());
        Self { components }
    }
}

impl fmt::Display for ElementPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.components.is_empty() {
            return f.write_str(".");
        }
        for (i, component) in self.components.iter().enumerate() {
            if i > 0 {
                f.write_str("/")?;
            }
            write!(f, "{component}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use alloc::vec;

    fn id(element_type: &'static str, count: u32) -> ElementIdentifier {
        ElementIdentifier::new(element_type, None, count)
    }

    #[test]
    fn factory_counts_repeated_type_and_key() {
        let mut factory = IdentifierFactory::new();
        let a0 = factory.next("Spacer", None);
        let b0 = factory.next("Box", None);
        let a1 = factory.next("Spacer", None);
        let keyed = factory.next("Spacer", Some(Arc::from("header")));

        assert_eq!(a0, id("Spacer", 0));
        assert_eq!(b0, id("Box", 0));
        assert_eq!(a1, id("Spacer", 1));
        assert_eq!(keyed.count(), 0, "keyed siblings count separately");
        assert_eq!(keyed.key(), Some("header"));
        assert_ne!(a0, a1);
    }

    #[test]
    fn identifier_display() {
        assert_eq!(id("Spacer", 0).to_string(), "Spacer");
        assert_eq!(id("Spacer", 2).to_string(), "Spacer#2");
        let keyed = ElementIdentifier::new("Row", Some(Arc::from("footer")), 1);
        assert_eq!(keyed.to_string(), "Row.footer#1");
    }

    #[test]
    fn prepending_builds_root_first() {
        let path = ElementPath::EMPTY
            .prepending(id("Leaf", 0))
            .prepending(id("Middle", 0))
            .prepending(id("Root", 1));
        assert_eq!(path.len(), 3);
        assert_eq!(path.components().next(), Some(&id("Root", 1)));
        assert_eq!(path.to_string(), "Root#1/Middle/Leaf");
        assert_eq!(ElementPath::empty().to_string(), ".");
    }

    #[test]
    fn prepend_keeps_deep_paths_root_first() {
        let mut path = ElementPath::EMPTY;
        for count in 0..1_000 {
            path.prepend(id("Level", count));
        }
        assert_eq!(path.len(), 1_000);
        assert_eq!(path.components().next(), Some(&id("Level", 999)));
        assert_eq!(path.components().next_back(), Some(&id("Level", 0)));
    }

    #[test]
    fn joined_and_appending_agree() {
        let head = ElementPath::from_components(vec![id("A", 0)]);
        let tail = ElementPath::from_components(vec![id("B", 0), id("C", 0)]);
        let joined = head.joined(&tail);
        let appended = head.appending(id("B", 0)).appending(id("C", 0));
        assert_eq!(joined, appended);
        assert_eq!(head.joined(&ElementPath::EMPTY), head);
    }

    #[test]
    fn paths_order_structurally() {
        let a = ElementPath::from_components(vec![id("A", 0)]);
        let a1 = ElementPath::from_components(vec![id("A", 1)]);
        let ab = a.appending(id("B", 0));
        assert!(ElementPath::EMPTY < a);
        assert!(a < ab);
        assert!(a < a1);
        assert!(ElementPath::EMPTY.is_empty());
    }
}
