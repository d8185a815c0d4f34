pub mod analysis;
pub mod cli;
pub mod conf;
pub mod discover;
pub mod logging;
pub mod pipeline;
pub mod report;
