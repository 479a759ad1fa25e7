use std::collections::HashMap;
use std::hash::Hash;

/// Union-find over payload identity, used by Kruskal's algorithm to detect
/// cycles while accepting edges.
///
/// Elements are keyed by the payload itself rather than by arena index so the
/// structure survives the rebuild into a fresh MST graph.
pub(crate) struct DisjointSet<T> {
    parent: HashMap<T, T>,
}

impl<T> DisjointSet<T>
where
    T: Clone + Eq + Hash,
{
    pub(crate) fn new(elements: impl IntoIterator<Item = T>) -> Self {
        Self {
            parent: elements.into_iter().map(|e| (e.clone(), e)).collect(),
        }
    }

    /// Representative of `element`'s set, compressing the walked path.
    ///
    /// Returns [`None`] for an element never inserted.
    pub(crate) fn find(&mut self, element: &T) -> Option<T> {
        self.parent.get(element)?;

        let mut root = element.clone();
        loop {
            let parent = self.parent.get(&root).unwrap();
            if *parent == root {
                break;
            }
            root = parent.clone();
        }

        // path compression
        let mut current = element.clone();
        while current != root {
            let next = self.parent.insert(current, root.clone()).unwrap();
            current = next;
        }

        Some(root)
    }

    /// Merge the sets holding `a` and `b` by attaching one root to the other.
    /// A no-op when they already share a root or either is unknown.
    pub(crate) fn union(&mut self, a: &T, b: &T) {
        let (Some(root_a), Some(root_b)) = (self.find(a), self.find(b)) else {
            return;
        };

        if root_a != root_b {
            self.parent.insert(root_a, root_b);
        }
    }
}
