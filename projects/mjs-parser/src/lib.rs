pub mod lexer;
pub mod parser;

pub use lexer::{Lexer, Token, TokenKind};
pub use parser::Parser;

use mjs_ast::Program;

/// Run the full pipeline over one source text: text → tokens → tree.
pub fn parse(source: &str) -> Program {
    let tokens = Lexer::new(source).tokenize();
    Parser::new(tokens).parse_program()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pipeline_basic() {
        let source = "
            // greeting
            const message = 'hello';
            function shout(text) { return text; }
        ";
        let program = parse(source);

        assert_eq!(program.body.len(), 3);
    }

    #[test]
    fn test_pipeline_is_stateless() {
        let source = "let n = 1 + 2;";
        assert_eq!(parse(source), parse(source));
    }
}
