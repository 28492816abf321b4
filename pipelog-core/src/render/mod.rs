mod json;
mod table;

pub use json::*;
pub use table::*;
