mod grid;
mod plan;
mod types;
mod week;

pub use grid::*;
pub use plan::*;
pub use types::*;
pub use week::*;
