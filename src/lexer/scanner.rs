use crate::lexer::{is_bracket, is_separator, Position, Token, TokenKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    /// Between words.
    Default,
    /// Inside a word starting at the given byte offset.
    Word { start: usize, pos: Position },
}

pub struct Scanner<'src> {
    input: &'src str,
    line: usize,
    column: usize,
    state: ScanState,
    tokens: Vec<Token>,
}

impl<'src> Scanner<'src> {
    pub fn new(input: &'src str) -> Self {
        Self {
            input,
            line: 1,
            column: 1,
            state: ScanState::Default,
            tokens: Vec::new(),
        }
    }

    pub fn scan_all(&mut self) -> Vec<Token> {
        let mut chars = self.input.char_indices().peekable();

        while let Some(&(idx, ch)) = chars.peek() {
            match self.state {
                ScanState::Default => {
                    let pos = self.current_position();
                    match ch {
                        '[' => self.push(TokenKind::OpenBracket, pos),
                        ']' => self.push(TokenKind::CloseBracket, pos),
                        ch if is_separator(ch) => {}
                        _ => self.state = ScanState::Word { start: idx, pos },
                    }
                }
                ScanState::Word { start, pos } => {
                    if is_separator(ch) || is_bracket(ch) {
                        self.finish_word(start, idx, pos);
                        // The terminator is scanned again in the default state.
                        continue;
                    }
                }
            }

            chars.next();
            self.advance(ch);
        }

        // A word running up to the end of input is still a word.
        if let ScanState::Word { start, pos } = self.state {
            self.finish_word(start, self.input.len(), pos);
        }

        let eof = self.current_position();
        self.push(TokenKind::Eof, eof);

        std::mem::take(&mut self.tokens)
    }

    fn current_position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    fn advance(&mut self, ch: char) {
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
    }

    fn push(&mut self, kind: TokenKind, pos: Position) {
        log::trace!("token '{kind}' at {pos}");
        self.tokens.push(Token::new(kind, pos));
    }

    fn finish_word(&mut self, start: usize, end: usize, pos: Position) {
        let text = self.input[start..end].to_string();
        self.state = ScanState::Default;
        self.push(TokenKind::Word(text), pos);
    }
}

// Convenience function for tokenizing input
pub fn tokenize(input: &str) -> Vec<Token> {
    Scanner::new(input).scan_all()
}
