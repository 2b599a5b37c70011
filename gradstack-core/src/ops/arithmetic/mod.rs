// Export foundational arithmetic operations directly
pub mod add;
pub mod sub;
pub mod mul;
pub mod div;

pub use add::add_op;
pub use sub::sub_op;
pub use mul::mul_op;
pub use div::div_op;
