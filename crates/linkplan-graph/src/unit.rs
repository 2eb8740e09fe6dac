//! Library unit declarations.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::UnitId;

/// Kind of a declared dependency edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DependencyKind {
    /// Archive copied into the dependent at link time.
    Static,
    /// Library resolved by the dynamic loader.
    Shared,
}

impl fmt::Display for DependencyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DependencyKind::Static => f.write_str("static"),
            DependencyKind::Shared => f.write_str("shared"),
        }
    }
}

/// A buildable native library or binary together with its declared
/// dependency lists.
///
/// Both lists keep their authored order. `static_deps` may contain
/// duplicates; the resolver collapses them. Static and shared lists are
/// expected to be disjoint but nothing here enforces it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LibraryUnit {
    pub id: UnitId,
    #[serde(default, rename = "static")]
    pub static_deps: Vec<UnitId>,
    #[serde(default, rename = "shared")]
    pub shared_deps: Vec<UnitId>,
}

impl LibraryUnit {
    /// Create a unit with no dependencies.
    pub fn new(id: UnitId) -> Self {
        Self {
            id,
            static_deps: Vec::new(),
            shared_deps: Vec::new(),
        }
    }

    pub fn builder(id: UnitId) -> LibraryUnitBuilder {
        LibraryUnitBuilder {
            unit: Self::new(id),
        }
    }

    /// Every dependency reference, static entries first.
    pub fn all_deps(&self) -> impl Iterator<Item = &UnitId> {
        self.static_deps.iter().chain(self.shared_deps.iter())
    }

    /// Every dependency reference paired with its edge kind.
    pub fn edges(&self) -> impl Iterator<Item = (DependencyKind, &UnitId)> {
        self.static_deps
            .iter()
            .map(|dep| (DependencyKind::Static, dep))
            .chain(self.shared_deps.iter().map(|dep| (DependencyKind::Shared, dep)))
    }

    /// True when the unit declares no dependencies of either kind.
    pub fn is_leaf(&self) -> bool {
        self.static_deps.is_empty() && self.shared_deps.is_empty()
    }
}

/// Builder for [`LibraryUnit`].
#[derive(Debug, Clone)]
pub struct LibraryUnitBuilder {
    unit: LibraryUnit,
}

impl LibraryUnitBuilder {
    pub fn static_dep(mut self, dep: UnitId) -> Self {
        self.unit.static_deps.push(dep);
        self
    }

    pub fn static_deps<I>(mut self, deps: I) -> Self
    where
        I: IntoIterator<Item = UnitId>,
    {
        self.unit.static_deps.extend(deps);
        self
    }

    pub fn shared_dep(mut self, dep: UnitId) -> Self {
        self.unit.shared_deps.push(dep);
        self
    }

    pub fn shared_deps<I>(mut self, deps: I) -> Self
    where
        I: IntoIterator<Item = UnitId>,
    {
        self.unit.shared_deps.extend(deps);
        self
    }

    pub fn build(self) -> LibraryUnit {
        self.unit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(name: &str) -> UnitId {
        UnitId::new(name).unwrap()
    }

    #[test]
    fn builder_preserves_declaration_order_and_duplicates() {
        let unit = LibraryUnit::builder(id("a"))
            .static_dep(id("b"))
            .static_dep(id("c"))
            .static_dep(id("b"))
            .shared_dep(id("d"))
            .build();

        assert_eq!(unit.static_deps, vec![id("b"), id("c"), id("b")]);
        assert_eq!(unit.shared_deps, vec![id("d")]);
        assert!(!unit.is_leaf());

        let all: Vec<_> = unit.all_deps().cloned().collect();
        assert_eq!(all, vec![id("b"), id("c"), id("b"), id("d")]);
    }

    #[test]
    fn new_unit_is_leaf() {
        assert!(LibraryUnit::new(id("leaf")).is_leaf());
    }
}
