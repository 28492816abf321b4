mod parser;
#[cfg(test)]
mod tests;
mod types;

pub use types::*;
