mod error;
mod latest;

#[cfg(test)]
mod tests;

pub use error::DiscoverError;
pub use latest::{LOG_GLOB, LatestLog, find_latest_log, parse_log_date, resolve_glob};
