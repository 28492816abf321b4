mod analyze;
mod args;

pub use analyze::*;
pub use args::*;
