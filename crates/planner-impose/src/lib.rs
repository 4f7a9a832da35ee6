mod impose;
mod types;

pub use impose::*;
pub use types::*;
