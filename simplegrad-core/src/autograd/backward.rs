//! Reverse-mode gradient propagation over the graph arena.

use crate::autograd::graph::{stale, Graph, Input, NodeData, NodeId, Op};
use crate::autograd::value::Value;
use crate::ops;
use std::collections::HashSet;

enum Visit {
    Enter(usize),
    Exit(usize),
}

/// Result of a depth-first walk from a root.
struct PostOrder {
    /// Reachable nodes, operands before their consumers, each exactly once.
    order: Vec<usize>,
    /// Nodes discovered by the walk; sized by the reachable graph, not the
    /// arena.
    visited: HashSet<usize>,
}

/// Iterative DFS with an explicit stack; long expression chains do not grow
/// the call stack.
fn post_order(nodes: &[NodeData], root: usize) -> PostOrder {
    let mut visited = HashSet::new();
    let mut order = Vec::new();
    let mut stack = vec![Visit::Enter(root)];

    while let Some(step) = stack.pop() {
        match step {
            Visit::Exit(index) => order.push(index),
            Visit::Enter(index) => {
                if !visited.insert(index) {
                    continue;
                }
                stack.push(Visit::Exit(index));
                // Reversed so the first operand is explored first.
                for input in nodes[index].inputs.iter().rev() {
                    if let Input::Node(child) = *input {
                        if !visited.contains(&child) {
                            stack.push(Visit::Enter(child));
                        }
                    }
                }
            }
        }
    }
    PostOrder { order, visited }
}

/// Nodes reachable from `root` in processing order: root first, every node
/// before its operands.
///
/// # Panics
/// Panics if `root` was dropped by [`Graph::release`].
pub fn topological_order(root: Value<'_>) -> Vec<NodeId> {
    if !root.is_live() {
        stale(root.id());
    }
    let nodes = root.graph().nodes();
    let mut order = post_order(&nodes, root.id().index).order;
    order.reverse();
    order
        .into_iter()
        .map(|index| NodeId {
            index,
            epoch: nodes[index].epoch,
        })
        .collect()
}

/// Seeds `root.grad = 1.0` and pushes gradients down to every ancestor.
pub(crate) fn backward(root: Value<'_>) {
    let graph: &Graph = root.graph();
    let root_id = root.id();
    graph.update(root_id, |node| node.grad = 1.0);

    let config = *graph.config();
    let mut nodes = graph.nodes_mut();
    let walk = post_order(&nodes, root_id.index);
    log::trace!(
        "backward: {} nodes reachable from #{}",
        walk.visited.len(),
        root_id.index
    );

    for &index in walk.order.iter().rev() {
        let node = nodes[index];
        if node.op == Op::Leaf {
            continue;
        }
        let a = NodeData::input_value(&nodes, node.inputs[0]);
        let b = NodeData::input_value(&nodes, node.inputs[1]);
        let local = ops::local_grads(node.op, a, b, &config);
        for (input, derivative) in node.inputs.iter().zip(local) {
            if let Input::Node(child) = *input {
                nodes[child].grad += derivative * node.grad;
            }
        }
    }
}

#[cfg(test)]
#[path = "backward_test.rs"]
mod tests;
