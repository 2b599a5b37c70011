use crate::error::AutogradError;
use crate::graph::Graph;
use crate::node::NodeId;
use crate::visited::VisitedSet;

/// Builds a post-order of every node reachable from `root` through ancestor edges.
///
/// The walk is a depth-first search that visits ancestors in operand order and
/// marks each node visited on first encounter, before descending into it. A node
/// is appended only after all of its ancestors have been appended, so in the
/// returned sequence every node comes after its ancestors and before all of its
/// consumers. Shared ancestors (diamonds) appear exactly once.
///
/// An explicit work stack replaces recursion so deep graphs cannot overflow
/// the call stack; the output is the same as the recursive formulation.
pub fn topological_order(graph: &Graph, root: NodeId) -> Result<Vec<NodeId>, AutogradError> {
    graph.node(root)?;

    let mut visited = VisitedSet::with_capacity(graph.config().visited_capacity_hint);
    let mut sorted = Vec::new();
    // (node, index of the next ancestor to look at)
    let mut stack: Vec<(NodeId, usize)> = vec![(root, 0)];
    visited.insert(root);

    while let Some(frame) = stack.last_mut() {
        let (id, next) = *frame;
        let ancestors = graph.node(id)?.ancestors();
        match ancestors.get(next) {
            Some(&ancestor) => {
                frame.1 += 1;
                if visited.insert(ancestor) {
                    stack.push((ancestor, 0));
                }
            }
            None => {
                sorted.push(id);
                stack.pop();
            }
        }
    }

    Ok(sorted)
}

#[cfg(test)]
#[path = "graph_test.rs"]
mod tests;
