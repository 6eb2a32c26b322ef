use clap::Args;
use mjs_types::Result;
use std::path::PathBuf;

#[derive(Args)]
pub struct CheckArgs {
    /// The JavaScript file to check
    #[arg(short, long, default_value = "./script.js")]
    pub file: PathBuf,
}

impl CheckArgs {
    pub async fn run(&self) -> Result<()> {
        let source = super::read_source(&self.file).await?;
        let program = mjs_parser::parse(&source);

        println!("Check successful!");
        println!("Top-level statements: {}", program.body.len());

        Ok(())
    }
}
