use crate::error::AutogradError;
use crate::node::{Node, NodeId, Region};
use log::{trace, warn};

/// Bulk-ownership stack for the nodes of one region.
///
/// The arena is the sole owner of node storage. Ancestor links between nodes
/// are plain `NodeId` handles, so releasing the arena is a single `Vec::clear`
/// and no node is ever freed on its own. Each release bumps `generation`,
/// which turns every handle issued before it into a `StaleNode` error instead
/// of a dangling read.
#[derive(Debug)]
pub struct Arena {
    region: Region,
    generation: u32,
    nodes: Vec<Node>,
}

impl Arena {
    pub fn new(region: Region) -> Self {
        Arena::with_capacity(region, 0)
    }

    pub fn with_capacity(region: Region, capacity: usize) -> Self {
        Arena {
            region,
            generation: 0,
            nodes: Vec::with_capacity(capacity),
        }
    }

    pub fn region(&self) -> Region {
        self.region
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Takes ownership of `node` and returns its handle. O(1) amortized.
    pub fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId::new(self.region, self.generation, self.nodes.len());
        self.nodes.push(node);
        id
    }

    /// Drops every owned node and invalidates all outstanding handles.
    ///
    /// Returns the number of nodes released. The arena stays usable.
    pub fn release(&mut self) -> usize {
        let released = self.nodes.len();
        self.nodes.clear();
        self.generation = self.generation.wrapping_add(1);
        trace!(
            "Arena({:?}): released {} nodes, now at generation {}",
            self.region,
            released,
            self.generation
        );
        released
    }

    /// Resets the gradient of every owned node to zero.
    pub fn zero_grad(&mut self) {
        for node in self.nodes.iter_mut() {
            node.grad = 0.0;
        }
    }

    fn check(&self, id: NodeId) -> Result<usize, AutogradError> {
        if id.region != self.region {
            return Err(AutogradError::RegionMismatch {
                node: id,
                expected: self.region,
            });
        }
        if id.generation != self.generation {
            warn!(
                "Arena({:?}): handle {} resolved after release (generation {})",
                self.region, id, self.generation
            );
            return Err(AutogradError::StaleNode {
                node: id,
                current_generation: self.generation,
            });
        }
        let index = id.index();
        if index >= self.nodes.len() {
            return Err(AutogradError::NodeOutOfBounds {
                node: id,
                len: self.nodes.len(),
            });
        }
        Ok(index)
    }

    pub fn get(&self, id: NodeId) -> Result<&Node, AutogradError> {
        let index = self.check(id)?;
        Ok(&self.nodes[index])
    }

    pub fn get_mut(&mut self, id: NodeId) -> Result<&mut Node, AutogradError> {
        let index = self.check(id)?;
        Ok(&mut self.nodes[index])
    }

    /// Handles of every owned node, in creation order.
    pub fn ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.nodes.len()).map(move |index| NodeId::new(self.region, self.generation, index))
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node)> + '_ {
        self.ids().zip(self.nodes.iter())
    }
}

#[cfg(test)]
#[path = "arena_test.rs"]
mod tests;
