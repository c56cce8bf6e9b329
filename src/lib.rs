//! Character n-gram frequency report.
//!
//! Reads a text corpus line by line, counts every 1-, 2- and 3-character
//! window of each lowercased, trimmed line and prints the 20 most frequent
//! entries per width.

pub mod config;
pub mod corpus;
pub mod counter;
pub mod error;
pub mod reports;
pub mod runner;
