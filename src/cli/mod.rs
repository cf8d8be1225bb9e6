//! Command driver: menu, operand parsing, and the interactive loop.

pub mod commands;
pub mod input;
pub mod repl;

pub use repl::Session;
