// src/ops/reduction/mod.rs
// Reductions over a list of nodes, composed from binary primitives

pub mod sum;

pub use sum::sum_op;
