// Déclare les modules principaux de la crate
pub mod arena;
pub mod autograd;
pub mod config;
pub mod graph;
pub mod node;
pub mod ops;
pub mod visited;

pub mod utils;

// Ré-exporte les types principaux pour qu'ils soient accessibles directement via `gradstack_core::Graph`
pub use arena::Arena;
pub use config::GraphConfig;
pub use graph::Graph;
pub use node::{Node, NodeId, Op, Region};
pub use visited::VisitedSet;

pub mod error;
pub use error::AutogradError;
