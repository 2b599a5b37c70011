// src/node.rs
use std::fmt;

/// Which arena owns a node.
///
/// Parameters survive across forward passes, everything else lives in the
/// per-pass arena and is dropped by `Graph::release_pass`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Parameters,
    Pass,
}

/// Handle to a node owned by an [`Arena`](crate::arena::Arena).
///
/// Handles are compared and hashed by identity (region, generation, slot),
/// never by the scalar the node carries. The generation ties a handle to one
/// lifetime of its arena: once the arena is released, every handle it gave
/// out resolves to `AutogradError::StaleNode`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId {
    pub(crate) region: Region,
    pub(crate) generation: u32,
    pub(crate) index: u32,
}

impl NodeId {
    pub(crate) fn new(region: Region, generation: u32, index: usize) -> Self {
        NodeId {
            region,
            generation,
            index: index as u32,
        }
    }

    /// Returns the arena region this handle points into.
    pub fn region(&self) -> Region {
        self.region
    }

    /// Returns the slot of the node inside its arena (creation order).
    pub fn index(&self) -> usize {
        self.index as usize
    }

    /// Returns the arena generation the handle was issued under.
    pub fn generation(&self) -> u32 {
        self.generation
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = match self.region {
            Region::Parameters => "p",
            Region::Pass => "n",
        };
        write!(f, "{}{}@{}", prefix, self.index, self.generation)
    }
}

/// The operation that produced a node, with its operands.
///
/// Operands are stored inline in fixed-size arrays so the arity of each
/// derivative rule is part of the type. Order matters: slot 0 is the first
/// factor, the minuend or the dividend.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Op {
    Leaf,
    Add([NodeId; 2]),
    Sub([NodeId; 2]),
    Mul([NodeId; 2]),
    Div([NodeId; 2]),
    Relu([NodeId; 1]),
    Exp([NodeId; 1]),
}

impl Op {
    /// Operands of the operation, in the order they were passed.
    pub fn ancestors(&self) -> &[NodeId] {
        match self {
            Op::Leaf => &[],
            Op::Add(operands) | Op::Sub(operands) | Op::Mul(operands) | Op::Div(operands) => {
                &operands[..]
            }
            Op::Relu(operand) | Op::Exp(operand) => &operand[..],
        }
    }

    /// Short label used in logs and `Debug` output.
    pub fn name(&self) -> &'static str {
        match self {
            Op::Leaf => "leaf",
            Op::Add(_) => "add",
            Op::Sub(_) => "sub",
            Op::Mul(_) => "mul",
            Op::Div(_) => "div",
            Op::Relu(_) => "relu",
            Op::Exp(_) => "exp",
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Op::Leaf)
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One scalar of the computation graph.
///
/// Nodes carry no behaviour: the derivative rule is selected from `op` by
/// `ops::apply_backward`.
#[derive(Debug, Clone)]
pub struct Node {
    pub(crate) value: f64,
    pub(crate) grad: f64,
    pub(crate) op: Op,
}

impl Node {
    pub(crate) fn new(value: f64, op: Op) -> Self {
        Node {
            value,
            grad: 0.0,
            op,
        }
    }

    pub(crate) fn leaf(value: f64) -> Self {
        Node::new(value, Op::Leaf)
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn grad(&self) -> f64 {
        self.grad
    }

    pub fn op(&self) -> &Op {
        &self.op
    }

    pub fn ancestors(&self) -> &[NodeId] {
        self.op.ancestors()
    }
}
