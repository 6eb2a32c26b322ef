use clap::Args;
use mjs_parser::{Lexer, TokenKind};
use mjs_types::Result;
use std::path::PathBuf;

#[derive(Args)]
pub struct TokensArgs {
    /// The JavaScript file to tokenize
    #[arg(short, long, default_value = "./script.js")]
    pub file: PathBuf,
}

impl TokensArgs {
    pub async fn run(&self) -> Result<()> {
        let source = super::read_source(&self.file).await?;

        for token in Lexer::new(&source).tokenize() {
            if token.kind != TokenKind::Eof {
                println!("{:?}: {}", token.kind, token.text);
            }
        }

        Ok(())
    }
}
