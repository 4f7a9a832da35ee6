mod constants;
mod convert;
mod generate;
mod options;
mod pages;
mod sheets;
mod stats;
mod templates;
mod types;

pub use convert::*;
pub use generate::*;
pub use options::*;
pub use pages::*;
pub use sheets::*;
pub use stats::*;
pub use templates::*;
pub use types::*;
