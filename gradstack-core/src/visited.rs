use crate::node::NodeId;
use std::collections::HashSet;

/// Identity-keyed membership set used by a single backward traversal.
///
/// Keys are `NodeId` handles, so two nodes holding the same scalar are still
/// distinct entries.
#[derive(Debug, Default)]
pub struct VisitedSet {
    seen: HashSet<NodeId>,
}

impl VisitedSet {
    /// `hint` is the expected number of reachable nodes.
    pub fn with_capacity(hint: usize) -> Self {
        VisitedSet {
            seen: HashSet::with_capacity(hint),
        }
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.seen.contains(&id)
    }

    /// Marks `id` as visited. Returns `true` on the first insertion only.
    pub fn insert(&mut self, id: NodeId) -> bool {
        self.seen.insert(id)
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::Region;

    #[test]
    fn test_insert_reports_first_visit_only() {
        let mut visited = VisitedSet::with_capacity(4);
        let id = NodeId::new(Region::Pass, 0, 3);
        assert!(!visited.contains(id));
        assert!(visited.insert(id));
        assert!(!visited.insert(id));
        assert!(visited.contains(id));
        assert_eq!(visited.len(), 1);
    }

    #[test]
    fn test_identity_includes_region_and_generation() {
        let mut visited = VisitedSet::default();
        visited.insert(NodeId::new(Region::Pass, 0, 0));
        assert!(!visited.contains(NodeId::new(Region::Parameters, 0, 0)));
        assert!(!visited.contains(NodeId::new(Region::Pass, 1, 0)));
    }
}
