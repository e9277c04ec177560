// Dense square matrix type and operations

pub mod algorithms;
pub mod arithmetic;
pub mod conversion;
pub mod square;

pub use arithmetic::ensure_same_order;
pub use square::SquareMatrix;
