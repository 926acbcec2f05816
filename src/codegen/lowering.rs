use crate::codegen::{parse_type, Backend, Clause, CodegenError, LoweringError, Opcode, ValueType};
use crate::parser::{Argument, Node, Tree, Word};

/// Type of every integer literal.
const INTEGER_TYPE: ValueType = ValueType::I32;

/// Validated shape of a `function` statement.
#[derive(Debug)]
struct FunctionSignature<'t> {
    name: &'t Word,
    return_type: ValueType,
    body: &'t Node,
}

/// Walks a [`Tree`] and issues the matching requests to a [`Backend`].
pub struct Lowerer<'a, B: Backend> {
    backend: &'a mut B,
    module: &'a B::Module,

    // Set while a function body is being lowered
    in_body: bool,
}

impl<'a, B: Backend> Lowerer<'a, B> {
    pub fn new(backend: &'a mut B, module: &'a B::Module) -> Self {
        Self {
            backend,
            module,
            in_body: false,
        }
    }

    /// Lower every top-level statement in order
    /// # Errors
    /// Returns the first grammar, literal or backend error encountered
    pub fn lower(&mut self, tree: &Tree) -> Result<(), CodegenError> {
        for node in &tree.nodes {
            self.lower_statement(node)?;
        }
        Ok(())
    }

    fn lower_statement(&mut self, node: &Node) -> Result<(), CodegenError> {
        let opcode = opcode_of(node)?;
        let kind = Opcode::from_str(opcode.as_str());
        log::debug!("lowering {kind} statement {node}");

        match kind {
            Opcode::Return => self.lower_return(node),
            Opcode::Function => self.lower_function(node),
            Opcode::Unknown => Err(LoweringError::InvalidOpcode(opcode.to_string()).into()),
        }
    }

    fn lower_return(&mut self, node: &Node) -> Result<(), CodegenError> {
        match node.operands() {
            [] => self.backend.emit_return(None),
            [operand] => {
                let value = self.lower_expression(operand)?;
                self.backend.emit_return(Some(value))
            }
            operands => Err(LoweringError::ReturnArity(operands.len()).into()),
        }
    }

    fn lower_function(&mut self, node: &Node) -> Result<(), CodegenError> {
        let signature = parse_signature(node)?;
        if self.in_body {
            return Err(LoweringError::NestedFunction(signature.name.to_string()).into());
        }

        log::debug!(
            "lowering function '{}' returning {}",
            signature.name,
            signature.return_type
        );

        let function = self.backend.create_function(
            self.module,
            signature.name.as_str(),
            signature.return_type,
        )?;
        // The insertion point stays on this function until the next one.
        self.backend.set_insertion_point(function)?;

        self.in_body = true;
        let result = self.lower_body(signature.body);
        self.in_body = false;

        result
    }

    fn lower_body(&mut self, body: &Node) -> Result<(), CodegenError> {
        for statement in body.operands() {
            match statement {
                Argument::Node(node) => self.lower_statement(node)?,
                Argument::Word(word) => {
                    return Err(LoweringError::WordInBody(word.to_string()).into());
                }
            }
        }
        Ok(())
    }

    fn lower_expression(&mut self, argument: &Argument) -> Result<B::Value, CodegenError> {
        match argument {
            Argument::Word(literal) => self
                .backend
                .emit_integer_constant(INTEGER_TYPE, literal.as_str()),
            Argument::Node(node) => match node.arguments.as_slice() {
                // Grouping: `[5]` is the same expression as `5`.
                [inner] => self.lower_expression(inner),
                _ => {
                    let opcode = opcode_of(node)?;
                    Err(LoweringError::InvalidOpcode(opcode.to_string()).into())
                }
            },
        }
    }
}

/// Lower `tree` into `module`
/// # Errors
/// Returns the first grammar, literal or backend error encountered
pub fn lower<B: Backend>(tree: &Tree, backend: &mut B, module: &B::Module) -> Result<(), CodegenError> {
    Lowerer::new(backend, module).lower(tree)
}

fn opcode_of(node: &Node) -> Result<&Word, LoweringError> {
    match node.arguments.first() {
        Some(Argument::Word(word)) => Ok(word),
        _ => Err(LoweringError::MissingOpcode),
    }
}

/// Check every clause of a `function` statement before anything is emitted.
fn parse_signature(node: &Node) -> Result<FunctionSignature<'_>, LoweringError> {
    let name = match node.operands().first() {
        Some(Argument::Word(name)) => name,
        Some(Argument::Node(other)) => {
            return Err(LoweringError::InvalidFunctionName(other.to_string()));
        }
        None => return Err(LoweringError::MissingFunctionName),
    };

    let mut return_type = None;
    let mut body = None;

    for argument in &node.operands()[1..] {
        let clause = match argument {
            Argument::Node(clause) => clause,
            Argument::Word(word) => {
                return Err(LoweringError::UnexpectedWord(word.to_string(), name.to_string()));
            }
        };
        let keyword = opcode_of(clause)?;
        let kind = Clause::from_str(keyword.as_str());
        log::trace!("function '{name}': {kind} clause");

        match kind {
            Clause::Arguments => {
                return Err(LoweringError::UnsupportedArguments(name.to_string()));
            }
            Clause::ReturnType => {
                if return_type.is_some() {
                    return Err(LoweringError::DuplicateReturnType(name.to_string()));
                }
                let ty = match clause.operands() {
                    [Argument::Node(ty)] => parse_type(ty)?,
                    [Argument::Word(word)] => {
                        return Err(LoweringError::ExpectedType(name.to_string(), word.to_string()));
                    }
                    operands => {
                        return Err(LoweringError::ReturnTypeArity(name.to_string(), operands.len()));
                    }
                };
                return_type = Some(ty);
            }
            Clause::Body => {
                if body.is_some() {
                    return Err(LoweringError::DuplicateBody(name.to_string()));
                }
                body = Some(clause);
            }
            Clause::Unknown => {
                return Err(LoweringError::UnknownClause(keyword.to_string(), name.to_string()));
            }
        }
    }

    let body = body.ok_or_else(|| LoweringError::MissingBody(name.to_string()))?;

    Ok(FunctionSignature {
        name,
        return_type: return_type.unwrap_or(ValueType::I32),
        body,
    })
}
