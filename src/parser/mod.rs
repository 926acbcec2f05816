pub mod ast;
pub mod builder;
pub mod errors;

pub use ast::*;
pub use builder::*;
pub use errors::*;
