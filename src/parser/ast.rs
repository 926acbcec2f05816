use std::fmt;

/// A non-empty run of source characters without whitespace or brackets.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word(String);

impl Word {
    /// Returns `None` for empty text.
    pub fn new(text: impl Into<String>) -> Option<Self> {
        let text = text.into();
        if text.is_empty() {
            None
        } else {
            Some(Self(text))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for Word {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Word {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Argument of a node
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Argument {
    Word(Word),
    Node(Node),
}

impl Argument {
    pub fn as_word(&self) -> Option<&Word> {
        match self {
            Argument::Word(word) => Some(word),
            Argument::Node(_) => None,
        }
    }

    pub fn as_node(&self) -> Option<&Node> {
        match self {
            Argument::Node(node) => Some(node),
            Argument::Word(_) => None,
        }
    }
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Argument::Word(word) => word.fmt(f),
            Argument::Node(node) => node.fmt(f),
        }
    }
}

/// Bracketed sequence of arguments.
///
/// By convention the first argument of a statement or clause is the opcode
/// word, but nothing here enforces that.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Node {
    pub arguments: Vec<Argument>,
}

impl Node {
    pub fn new(arguments: Vec<Argument>) -> Self {
        Self { arguments }
    }

    /// Arguments following the opcode position.
    pub fn operands(&self) -> &[Argument] {
        self.arguments.get(1..).unwrap_or(&[])
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[")?;
        for (i, argument) in self.arguments.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{argument}")?;
        }
        write!(f, "]")
    }
}

/// Top-level statements of a program, in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tree {
    pub nodes: Vec<Node>,
}

impl Tree {
    pub fn new(nodes: Vec<Node>) -> Self {
        Self { nodes }
    }
}

impl fmt::Display for Tree {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, node) in self.nodes.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{node}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Argument {
        Argument::Word(Word::new(text).unwrap())
    }

    #[test]
    fn test_word_is_never_empty() {
        assert!(Word::new("").is_none());
        assert_eq!(Word::new("i32").unwrap(), "i32");
    }

    #[test]
    fn test_canonical_text() {
        let tree = Tree::new(vec![
            Node::new(vec![
                word("a"),
                Argument::Node(Node::new(vec![word("b"), word("c")])),
                word("d"),
            ]),
            Node::default(),
        ]);
        assert_eq!(tree.to_string(), "[a [b c] d] []");
    }

    #[test]
    fn test_operands_skip_opcode() {
        let node = Node::new(vec![word("return"), word("1")]);
        assert_eq!(node.operands(), &[word("1")]);
        assert!(Node::default().operands().is_empty());
    }
}
