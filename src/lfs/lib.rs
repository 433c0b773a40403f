#[macro_use]
extern crate log;

pub mod common;
pub mod env;
pub mod eval;
pub mod printer;
pub mod reader;
pub mod readline;
pub mod repl;
