use crate::autograd::value::Value;
use crate::config::GraphConfig;
use crate::error::SimplegradError;
use std::cell::{Cell, Ref, RefCell, RefMut};
use std::fmt;
use std::ptr;

/// The operation that produced a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    Leaf,
    Add,
    Sub,
    Mul,
    Div,
    Pow,
    Neg,
    Relu,
}

impl Op {
    /// Number of operand slots the operation reads (constants included).
    pub fn arity(self) -> usize {
        match self {
            Op::Leaf => 0,
            Op::Neg | Op::Relu => 1,
            Op::Add | Op::Sub | Op::Mul | Op::Div | Op::Pow => 2,
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Op::Leaf => "leaf",
            Op::Add => "add",
            Op::Sub => "sub",
            Op::Mul => "mul",
            Op::Div => "div",
            Op::Pow => "pow",
            Op::Neg => "neg",
            Op::Relu => "relu",
        };
        f.write_str(name)
    }
}

/// Stable identity of a node inside a [`Graph`].
///
/// `index` addresses the arena slot. `epoch` is the graph epoch at creation
/// time; a handle whose epoch no longer matches its slot refers to a node that
/// was dropped by [`Graph::release`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId {
    pub(crate) index: usize,
    pub(crate) epoch: u32,
}

impl NodeId {
    pub fn index(&self) -> usize {
        self.index
    }
}

/// One operand slot of a node. Constants have no gradient slot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Input {
    Empty,
    Node(usize),
    Const(f64),
}

/// Arena record for a single scalar.
#[derive(Debug, Clone, Copy)]
pub(crate) struct NodeData {
    pub(crate) value: f64,
    pub(crate) grad: f64,
    pub(crate) op: Op,
    pub(crate) inputs: [Input; 2],
    pub(crate) epoch: u32,
}

impl NodeData {
    pub(crate) fn input_value(nodes: &[NodeData], input: Input) -> f64 {
        match input {
            Input::Node(index) => nodes[index].value,
            Input::Const(c) => c,
            Input::Empty => 0.0,
        }
    }
}

/// Marker returned by [`Graph::checkpoint`], valid only for that graph.
#[derive(Debug, Clone, Copy)]
pub struct Checkpoint<'g> {
    graph: &'g Graph,
    len: usize,
}

/// Arena owning every node of a computation graph.
///
/// Nodes are appended in creation order and only ever reference earlier
/// slots, so the operand relation is acyclic by construction. Handles
/// ([`Value`]) borrow the graph and cannot outlive it.
///
/// Parameters are created once, before the first forward pass. Everything a
/// forward pass builds afterwards is transient: take a [`Checkpoint`] after
/// creating the parameters and [`release`](Graph::release) it once the
/// backward pass and update are done.
pub struct Graph {
    nodes: RefCell<Vec<NodeData>>,
    epoch: Cell<u32>,
    config: GraphConfig,
}

impl Graph {
    pub fn new() -> Self {
        Graph {
            nodes: RefCell::new(Vec::new()),
            epoch: Cell::new(0),
            config: GraphConfig::default(),
        }
    }

    /// Creates an empty graph using `config`.
    pub fn with_config(config: GraphConfig) -> Result<Self, SimplegradError> {
        config.validate()?;
        Ok(Graph {
            config,
            ..Graph::new()
        })
    }

    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    /// Creates a leaf node holding `data` with a zero gradient.
    pub fn value(&self, data: f64) -> Value<'_> {
        let id = self.push(data, Op::Leaf, [Input::Empty, Input::Empty]);
        Value::from_parts(self, id)
    }

    /// Alias of [`Graph::value`].
    pub fn leaf(&self, data: f64) -> Value<'_> {
        self.value(data)
    }

    /// Number of live nodes.
    pub fn len(&self) -> usize {
        self.nodes.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Records the current size of the arena.
    pub fn checkpoint(&self) -> Checkpoint<'_> {
        Checkpoint {
            graph: self,
            len: self.len(),
        }
    }

    /// Drops every node created after `checkpoint`.
    ///
    /// Handles to dropped nodes become stale; using one panics. Nodes created
    /// before the checkpoint keep their values and gradients.
    ///
    /// # Panics
    ///
    /// Panics if `checkpoint` was taken on a different graph.
    pub fn release(&self, checkpoint: Checkpoint<'_>) {
        assert!(
            ptr::eq(checkpoint.graph, self),
            "checkpoint belongs to a different Graph"
        );
        let mut nodes = self.nodes.borrow_mut();
        if checkpoint.len >= nodes.len() {
            return;
        }
        let dropped = nodes.len() - checkpoint.len;
        nodes.truncate(checkpoint.len);
        self.epoch.set(self.epoch.get().wrapping_add(1));
        log::debug!(
            "Graph: released {} transient nodes, {} remain",
            dropped,
            checkpoint.len
        );
    }

    pub(crate) fn push(&self, value: f64, op: Op, inputs: [Input; 2]) -> NodeId {
        let mut nodes = self.nodes.borrow_mut();
        let epoch = self.epoch.get();
        let index = nodes.len();
        nodes.push(NodeData {
            value,
            grad: 0.0,
            op,
            inputs,
            epoch,
        });
        NodeId { index, epoch }
    }

    /// Reads the node behind `id`.
    ///
    /// # Panics
    /// Panics if `id` refers to a node dropped by [`Graph::release`].
    pub(crate) fn node(&self, id: NodeId) -> NodeData {
        let nodes = self.nodes.borrow();
        match nodes.get(id.index) {
            Some(node) if node.epoch == id.epoch => *node,
            _ => stale(id),
        }
    }

    /// Runs `f` on the node behind `id` with write access.
    ///
    /// # Panics
    /// Panics if `id` refers to a node dropped by [`Graph::release`].
    pub(crate) fn update<R>(&self, id: NodeId, f: impl FnOnce(&mut NodeData) -> R) -> R {
        let mut nodes = self.nodes.borrow_mut();
        match nodes.get_mut(id.index) {
            Some(node) if node.epoch == id.epoch => f(node),
            _ => stale(id),
        }
    }

    /// Epoch of a slot known to be live (an operand of a live node).
    pub(crate) fn node_epoch(&self, index: usize) -> u32 {
        self.nodes.borrow()[index].epoch
    }

    pub(crate) fn nodes(&self) -> Ref<'_, Vec<NodeData>> {
        self.nodes.borrow()
    }

    pub(crate) fn nodes_mut(&self) -> RefMut<'_, Vec<NodeData>> {
        self.nodes.borrow_mut()
    }

    pub(crate) fn is_live(&self, id: NodeId) -> bool {
        self.nodes
            .borrow()
            .get(id.index)
            .map_or(false, |node| node.epoch == id.epoch)
    }
}

impl Default for Graph {
    fn default() -> Self {
        Graph::new()
    }
}

impl fmt::Debug for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Graph")
            .field("nodes", &self.len())
            .field("epoch", &self.epoch.get())
            .field("config", &self.config)
            .finish()
    }
}

pub(crate) fn stale(id: NodeId) -> ! {
    panic!(
        "stale node handle #{} (epoch {}): the node was dropped by Graph::release",
        id.index, id.epoch
    )
}

#[cfg(test)]
#[path = "graph_test.rs"]
mod tests;
