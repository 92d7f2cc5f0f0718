//! Problem model split into submodules for clarity

mod ast;
pub mod constants;
mod display;
mod errors;
mod eval;

pub use ast::{Answer, BlankPosition, Operator, Problem};
pub use errors::ProblemError;
pub use eval::evaluate_chain;
