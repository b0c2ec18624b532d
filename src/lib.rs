pub mod cmdline;
pub mod environment;
pub mod evaluator;
pub mod interpreter;
pub mod printer;
pub mod reader;
pub mod special_forms;
pub mod tokens;
pub mod types;

#[macro_use]
extern crate lazy_static;

mod atoms;
mod core;

pub use environment::{make_root_environment, Environment};
pub use evaluator::eval;
pub use reader::read;
pub use tokens::tokenize;
pub use types::Value;
