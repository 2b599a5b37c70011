// src/ops/activation/mod.rs

//! # Activation Functions
//!
//! - [`relu_op`]: Rectified Linear Unit, a primitive with its own rule.
//! - [`softmax_op`]: composite, built from `exp`, `sub`, `add` and `div`.

pub mod relu;
pub mod softmax;

// Re-export key functions
pub use relu::relu_op;
pub use softmax::softmax_op;
