mod select_tests;
mod stats_tests;
mod test_helpers;
