use crate::lexer::{Token, TokenKind};
use mjs_ast::*;

/// Recursive-descent parser over a finished token sequence.
///
/// Holds a single read cursor with one-token lookahead; no token is ever
/// reconsumed. Malformed input never fails a parse: unrecognized tokens are
/// skipped and missing sub-expressions become absent (`None`) children, so
/// the worst outcome is a truncated tree.
pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    eof: Token,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, pos: 0, eof: Token::eof() }
    }

    fn current(&self) -> &Token {
        self.tokens.get(self.pos).unwrap_or(&self.eof)
    }

    fn advance(&mut self) {
        self.pos += 1;
    }

    fn consume(&mut self, kind: TokenKind) -> bool {
        if self.current().kind == kind {
            self.advance();
            true
        } else {
            false
        }
    }

    // --- Statements ---

    pub fn parse_program(&mut self) -> Program {
        let mut body = Vec::new();

        while self.current().kind != TokenKind::Eof {
            if let Some(stmt) = self.parse_statement() {
                body.push(stmt);
            }
        }

        Program { body }
    }

    /// Dispatch on the current token kind. Lone semicolons and tokens with
    /// no statement production are consumed and dropped.
    fn parse_statement(&mut self) -> Option<Stmt> {
        match self.current().kind {
            TokenKind::Comment => Some(Stmt::Comment(self.parse_comment())),
            TokenKind::Function => Some(Stmt::Function(self.parse_function())),
            TokenKind::Return => Some(Stmt::Return(self.parse_return())),
            TokenKind::Const | TokenKind::Let | TokenKind::Var => {
                Some(Stmt::Variable(self.parse_variable()))
            }
            TokenKind::If => Some(Stmt::If(self.parse_if())),
            TokenKind::Semicolon => {
                // Stray semicolon: consume, no node
                self.advance();
                None
            }
            _ => {
                self.advance();
                None
            }
        }
    }

    fn parse_comment(&mut self) -> Comment {
        let text = self.current().text.clone();
        self.advance();
        Comment { text }
    }

    fn parse_function(&mut self) -> FunctionDecl {
        self.advance(); // function keyword

        // The next token is taken verbatim as the name, whatever it is
        let name = self.current().text.clone();
        self.advance();

        let mut params = Vec::new();
        if self.consume(TokenKind::LParen) {
            while self.current().kind != TokenKind::RParen
                && self.current().kind != TokenKind::Eof
            {
                if self.current().kind == TokenKind::Ident {
                    let param_name = self.current().text.clone();
                    self.advance();

                    let mut default = None;
                    if self.consume(TokenKind::Eq) {
                        default = self.parse_expression();
                    }

                    params.push(Param { name: param_name, default });
                    self.consume(TokenKind::Comma);
                } else {
                    // Not a parameter; skip it
                    self.advance();
                }
            }
            self.consume(TokenKind::RParen);
        }

        let mut body = Vec::new();
        if self.consume(TokenKind::LBrace) {
            while self.current().kind != TokenKind::RBrace
                && self.current().kind != TokenKind::Eof
            {
                if let Some(stmt) = self.parse_statement() {
                    body.push(stmt);
                }
            }
            self.consume(TokenKind::RBrace);
        }

        FunctionDecl { name, params, body }
    }

    fn parse_if(&mut self) -> IfStmt {
        self.advance(); // if keyword

        let mut test = None;
        if self.consume(TokenKind::LParen) {
            test = self.parse_expression();
            self.consume(TokenKind::RParen);
        }

        let mut consequent = Vec::new();
        if self.consume(TokenKind::LBrace) {
            while self.current().kind != TokenKind::RBrace
                && self.current().kind != TokenKind::Eof
            {
                if let Some(stmt) = self.parse_statement() {
                    consequent.push(stmt);
                }
            }
            self.consume(TokenKind::RBrace);
        }

        IfStmt { test, consequent }
    }

    fn parse_return(&mut self) -> ReturnStmt {
        self.advance(); // return keyword

        let mut argument = None;
        if self.current().kind != TokenKind::Semicolon
            && self.current().kind != TokenKind::Eof
        {
            argument = self.parse_expression();
        }

        self.consume(TokenKind::Semicolon);
        ReturnStmt { argument }
    }

    fn parse_variable(&mut self) -> VariableDecl {
        // Keyword text is captured as-is (const/let/var)
        let kind = self.current().text.clone();
        self.advance();

        let name = self.current().text.clone();
        self.advance();

        self.consume(TokenKind::Eq);
        let value = self.parse_expression();
        self.consume(TokenKind::Semicolon);

        VariableDecl { kind, name, value }
    }

    // --- Expressions ---

    /// One primary operand, optionally combined once with a following
    /// operator and a second primary. Chains like `a + b + c` stop after
    /// the first combination; the rest is left for the caller's context.
    fn parse_expression(&mut self) -> Option<Expr> {
        let left = self.parse_primary();

        if is_binary_operator(self.current().kind) {
            let op = self.current().text.clone();
            self.advance();
            let right = self.parse_primary();

            return Some(Expr::Binary(BinaryExpr {
                left: left.map(Box::new),
                op,
                right: right.map(Box::new),
            }));
        }

        left
    }

    fn parse_primary(&mut self) -> Option<Expr> {
        let expr = match self.current().kind {
            TokenKind::Ident => Some(Expr::Identifier(Identifier {
                name: self.current().text.clone(),
            })),
            TokenKind::Number => Some(Expr::Number(NumberLit {
                value: self.current().text.clone(),
            })),
            TokenKind::String => {
                // Trim-character-set semantics: either quote kind is
                // stripped from either end
                let value = self
                    .current()
                    .text
                    .trim_matches(|c| c == '"' || c == '\'')
                    .to_string();
                Some(Expr::String(StringLit { value }))
            }
            _ => None,
        };

        // The token is consumed even when it yields no node
        self.advance();
        expr
    }
}

fn is_binary_operator(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::DoubleEq
            | TokenKind::Eq
            | TokenKind::Plus
            | TokenKind::Minus
            | TokenKind::Star
            | TokenKind::Slash
            | TokenKind::Percent
            | TokenKind::Greater
            | TokenKind::Less
            | TokenKind::GreaterEq
            | TokenKind::LessEq
    )
}
