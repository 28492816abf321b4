pub mod cli;
pub mod conf;
pub mod extract;
pub mod logging;
pub mod normalize;
pub mod record;
pub mod render;
pub mod scan;
pub mod stats;
