pub mod checker;
pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod scanner;

pub use error::{Result, VibeLintError};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_VIOLATIONS_FOUND: i32 = 1;
pub const EXIT_RUNTIME_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
