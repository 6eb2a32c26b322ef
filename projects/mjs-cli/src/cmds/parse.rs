use clap::Args;
use mjs_parser::{Lexer, TokenKind};
use mjs_types::{MjsError, Result};
use std::path::PathBuf;

#[derive(Args)]
pub struct ParseArgs {
    /// The JavaScript file to parse
    #[arg(short, long, default_value = "./script.js")]
    pub file: PathBuf,
    /// Output the syntax tree as JSON
    #[arg(short, long)]
    pub json: bool,
    /// Also print the token stream before the tree
    #[arg(short, long)]
    pub tokens: bool,
}

impl ParseArgs {
    pub async fn run(&self) -> Result<()> {
        let source = super::read_source(&self.file).await?;

        if self.tokens {
            println!("Tokens:");
            for token in Lexer::new(&source).tokenize() {
                if token.kind != TokenKind::Eof {
                    println!("  {:?}: {}", token.kind, token.text);
                }
            }
            println!();
        }

        let program = mjs_parser::parse(&source);

        if self.json {
            let json_output = serde_json::to_string_pretty(&program)
                .map_err(|e| MjsError::internal(e.to_string()))?;
            println!("{}", json_output);
        } else {
            mjs_printer::print(&program);
        }

        Ok(())
    }
}
