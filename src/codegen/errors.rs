use thiserror::Error;

/// Grammar violations found while lowering the tree
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoweringError {
    #[error("First argument of statement must be an opcode")]
    MissingOpcode,

    #[error("Invalid opcode '{0}'")]
    InvalidOpcode(String),

    #[error("Invalid argument count in return statement: expected 0 or 1, got {0}")]
    ReturnArity(usize),

    #[error("Function '{0}' defined inside another function")]
    NestedFunction(String),

    #[error("Missing function name")]
    MissingFunctionName,

    #[error("Function name must be a word, found '{0}'")]
    InvalidFunctionName(String),

    #[error("Unexpected word '{0}' in function '{1}'")]
    UnexpectedWord(String, String),

    #[error("Function arguments not supported (yet) in function '{0}'")]
    UnsupportedArguments(String),

    #[error("Invalid return_type clause in function '{0}': expected 1 type, got {1}")]
    ReturnTypeArity(String, usize),

    #[error("Expected a type in return_type clause of function '{0}', found '{1}'")]
    ExpectedType(String, String),

    #[error("Multiple return_type clauses in function '{0}'")]
    DuplicateReturnType(String),

    #[error("Multiple body clauses in function '{0}'")]
    DuplicateBody(String),

    #[error("Missing body in function '{0}'")]
    MissingBody(String),

    #[error("Unknown clause '{0}' in function '{1}'")]
    UnknownClause(String, String),

    #[error("Invalid word '{0}' in function body")]
    WordInBody(String),

    #[error("Invalid type '{0}'")]
    InvalidType(String),
}

/// Code generation error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodegenError {
    #[error(transparent)]
    Lowering(#[from] LoweringError),

    #[error("Invalid integer literal '{text}' for a {bits}-bit integer")]
    NumericFormat { text: String, bits: u32 },

    #[error("Backend error: {0}")]
    Backend(String),
}
