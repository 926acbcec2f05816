//! rqc
//!
//! Front end for a bracket-delimited, s-expression style language: the
//! parser turns source text into a tree of nodes and words, and the lowering
//! engine walks that tree and drives a code-generation backend.

pub mod codegen;
pub mod lexer;
pub mod parser;
pub mod source;

pub use codegen::*;
pub use lexer::*;
pub use parser::*;
pub use source::*;

use thiserror::Error;

/// Any error that aborts a compilation
#[derive(Error, Debug)]
pub enum CompileError {
    #[error("Source error: {0}")]
    Source(#[from] SourceError),

    #[error("Parser error: {0}")]
    Parser(#[from] ParserError),

    #[error("Codegen error: {0}")]
    Codegen(#[from] CodegenError),
}

/// Result of a successful compilation: the parsed tree and the module it was lowered into
pub struct Compilation<M> {
    pub tree: Tree,
    pub module: M,
}

/// Parse `source` and lower it into a fresh module named `module_name`
/// # Errors
/// Returns the first structural, grammar, literal or backend error
pub fn compile<B: Backend>(
    source: &str,
    module_name: &str,
    backend: &mut B,
) -> Result<Compilation<B::Module>, CompileError> {
    let tree = parse(source)?;
    let module = backend.create_module(module_name);
    lower(&tree, backend, &module)?;
    Ok(Compilation { tree, module })
}
