mod error;
mod parse;
mod types;

pub use error::*;
pub use parse::*;
pub use types::*;
