use crate::lexer::{tokenize, Position, Token, TokenKind};
use crate::parser::{Argument, Node, ParserError, Tree, Word};

/// Deepest bracket nesting accepted. Printing, dropping and lowering a tree
/// recurse once per level.
pub const MAX_NESTING_DEPTH: usize = 256;

/// Node whose closing bracket has not been seen yet.
#[derive(Debug)]
struct PendingNode {
    arguments: Vec<Argument>,
    opened_at: Position,
}

/// Builds a [`Tree`] from a token stream.
///
/// Open nodes are kept on an explicit stack; a node is finished and moved
/// into its parent (or the top level) when its closing bracket arrives.
pub struct TreeBuilder {
    tokens: Vec<Token>,
    nodes: Vec<Node>,
    open: Vec<PendingNode>,
}

impl TreeBuilder {
    #[must_use]
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            nodes: Vec::new(),
            open: Vec::new(),
        }
    }

    /// Consume the tokens and assemble the tree
    /// # Errors
    /// Returns a `ParserError` on unbalanced or too deeply nested brackets, or a word outside of any node
    pub fn build(mut self) -> Result<Tree, ParserError> {
        let tokens = std::mem::take(&mut self.tokens);

        for token in tokens {
            match token.kind {
                TokenKind::OpenBracket => self.open_node(token.pos)?,
                TokenKind::CloseBracket => self.close_node(token.pos)?,
                TokenKind::Word(text) => self.push_word(text, token.pos)?,
                TokenKind::Eof => break,
            }
        }

        if let Some(innermost) = self.open.last() {
            return Err(ParserError::UnclosedBracket(innermost.opened_at));
        }

        Ok(Tree::new(self.nodes))
    }

    fn open_node(&mut self, pos: Position) -> Result<(), ParserError> {
        if self.open.len() >= MAX_NESTING_DEPTH {
            return Err(ParserError::NestingTooDeep(MAX_NESTING_DEPTH, pos));
        }
        self.open.push(PendingNode {
            arguments: Vec::new(),
            opened_at: pos,
        });
        Ok(())
    }

    fn close_node(&mut self, pos: Position) -> Result<(), ParserError> {
        let finished = self
            .open
            .pop()
            .ok_or(ParserError::UnmatchedClosingBracket(pos))?;
        let node = Node::new(finished.arguments);

        match self.open.last_mut() {
            Some(parent) => parent.arguments.push(Argument::Node(node)),
            None => self.nodes.push(node),
        }
        Ok(())
    }

    fn push_word(&mut self, text: String, pos: Position) -> Result<(), ParserError> {
        let Some(innermost) = self.open.last_mut() else {
            return Err(ParserError::WordOutsideNode(text, pos));
        };
        // The scanner never produces empty words.
        if let Some(word) = Word::new(text) {
            innermost.arguments.push(Argument::Word(word));
        }
        Ok(())
    }
}

/// Convenience function: tokenize and build in one step
/// # Errors
/// Returns a `ParserError` if the brackets of `source` are unbalanced or nested too deeply
pub fn parse(source: &str) -> Result<Tree, ParserError> {
    let tree = TreeBuilder::new(tokenize(source)).build()?;
    log::debug!("parsed {} top-level nodes", tree.nodes.len());
    Ok(tree)
}
