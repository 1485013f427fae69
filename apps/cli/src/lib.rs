//! Command-line front end of the `serious` spaced-repetition reviewer.

pub mod config;
pub mod console;
pub mod db;
pub mod import;
pub mod review;
