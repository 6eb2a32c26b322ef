use std::iter::Peekable;
use std::str::Chars;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    // Keywords
    Function,
    Return,
    Const,
    Let,
    Var,
    If,

    // Symbols
    LParen,    // (
    RParen,    // )
    LBrace,    // {
    RBrace,    // }
    Semicolon, // ;
    Comma,     // ,
    Eq,        // =
    DoubleEq,  // ==
    Greater,   // >
    GreaterEq, // >=
    Less,      // <
    LessEq,    // <=
    Plus,      // +
    Minus,     // -
    Star,      // *
    Slash,     // /
    Percent,   // %

    // Literals
    Ident,
    String,
    Number,
    Comment,

    // Special
    Eof,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

impl Token {
    pub fn eof() -> Self {
        Token { kind: TokenKind::Eof, text: String::new() }
    }
}

/// Single left-to-right scanner over the full source text.
///
/// Whitespace and unrecognized characters produce no token at all; malformed
/// input never fails the scan. The emitted sequence always ends with exactly
/// one [`TokenKind::Eof`] token.
pub struct Lexer<'a> {
    source: &'a str,
    chars: Peekable<Chars<'a>>,
    cursor: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            chars: source.chars().peekable(),
            cursor: 0,
        }
    }

    /// Consume the entire input and return the complete token sequence.
    pub fn tokenize(mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token();
            let done = token.kind == TokenKind::Eof;
            tokens.push(token);
            if done {
                return tokens;
            }
        }
    }

    fn next_token(&mut self) -> Token {
        loop {
            let start = self.cursor;

            let Some(c) = self.advance() else {
                return Token::eof();
            };

            let kind = match c {
                c if c.is_whitespace() => {
                    self.consume_while(|c| c.is_whitespace());
                    continue;
                }

                // Line comment, kept as a token through end of line
                '/' if self.peek() == Some('/') => {
                    self.consume_while(|c| c != '\n');
                    TokenKind::Comment
                }

                // Identifiers and the six reserved words
                c if c.is_ascii_alphabetic() || c == '_' => {
                    self.consume_while(|c| c.is_ascii_alphanumeric() || c == '_');
                    match &self.source[start..self.cursor] {
                        "function" => TokenKind::Function,
                        "return" => TokenKind::Return,
                        "const" => TokenKind::Const,
                        "let" => TokenKind::Let,
                        "var" => TokenKind::Var,
                        "if" => TokenKind::If,
                        _ => TokenKind::Ident,
                    }
                }

                // Strings terminate on the same quote character; no escape
                // handling. An unterminated string runs to end of input.
                quote @ ('"' | '\'') => {
                    while let Some(c) = self.advance() {
                        if c == quote {
                            break;
                        }
                    }
                    TokenKind::String
                }

                // Digits, then at most one '.' and a decimal part
                c if c.is_ascii_digit() => {
                    self.consume_while(|c| c.is_ascii_digit());
                    if self.peek() == Some('.') {
                        self.advance();
                        self.consume_while(|c| c.is_ascii_digit());
                    }
                    TokenKind::Number
                }

                '(' => TokenKind::LParen,
                ')' => TokenKind::RParen,
                '{' => TokenKind::LBrace,
                '}' => TokenKind::RBrace,
                ';' => TokenKind::Semicolon,
                ',' => TokenKind::Comma,
                '+' => TokenKind::Plus,
                '-' => TokenKind::Minus,
                '*' => TokenKind::Star,
                '/' => TokenKind::Slash,
                '%' => TokenKind::Percent,
                '=' => {
                    if self.peek() == Some('=') {
                        self.advance();
                        TokenKind::DoubleEq
                    } else {
                        TokenKind::Eq
                    }
                }
                '>' => {
                    if self.peek() == Some('=') {
                        self.advance();
                        TokenKind::GreaterEq
                    } else {
                        TokenKind::Greater
                    }
                }
                '<' => {
                    if self.peek() == Some('=') {
                        self.advance();
                        TokenKind::LessEq
                    } else {
                        TokenKind::Less
                    }
                }

                // Anything else is discarded without a token
                _ => continue,
            };

            return Token {
                kind,
                text: self.source[start..self.cursor].to_string(),
            };
        }
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().copied()
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.chars.next();
        if let Some(c) = c {
            self.cursor += c.len_utf8();
        }
        c
    }

    fn consume_while<F>(&mut self, mut f: F)
    where
        F: FnMut(char) -> bool,
    {
        while let Some(c) = self.peek() {
            if f(c) {
                self.advance();
            } else {
                break;
            }
        }
    }
}
