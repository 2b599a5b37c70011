//! # Reverse-mode differentiation driver
//!
//! [`topological_order`] produces a post-order over the nodes reachable from a
//! root, and [`backward`] walks it in reverse, applying each node's derivative
//! rule once every consumer has contributed to its gradient.
//! [`grad_check`] compares the result against central finite differences.

pub mod backward;
pub mod grad_check;
pub mod graph;

pub use backward::backward;
pub use graph::topological_order;
