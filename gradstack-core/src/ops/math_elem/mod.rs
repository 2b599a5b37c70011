// Element-wise math functions with their own derivative rule
pub mod exp;

// Re-export the public function
pub use exp::exp_op;
