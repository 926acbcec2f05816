use std::fmt;

/// Statement opcodes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Opcode {
    Return,
    Function,
    Unknown,
}

impl Opcode {
    pub fn from_str(s: &str) -> Self {
        match s {
            "return" => Opcode::Return,
            "function" => Opcode::Function,
            _ => Opcode::Unknown,
        }
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match self {
            Opcode::Return => "return",
            Opcode::Function => "function",
            Opcode::Unknown => "<unknown>",
        };
        write!(f, "{}", s)
    }
}

/// Clause kinds of a `function` statement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Clause {
    Arguments,
    ReturnType,
    Body,
    Unknown,
}

impl Clause {
    pub fn from_str(s: &str) -> Self {
        match s {
            "arguments" => Clause::Arguments,
            "return_type" => Clause::ReturnType,
            "body" => Clause::Body,
            _ => Clause::Unknown,
        }
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match self {
            Clause::Arguments => "arguments",
            Clause::ReturnType => "return_type",
            Clause::Body => "body",
            Clause::Unknown => "<unknown>",
        };
        write!(f, "{}", s)
    }
}
