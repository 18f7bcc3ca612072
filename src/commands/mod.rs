//! Command implementations

pub mod simple;

pub use simple::{Command, feed_line, run_simple};
