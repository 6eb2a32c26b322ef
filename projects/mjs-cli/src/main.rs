use clap::Parser;
use mjs_cli::{MjsApplication, MjsCommands};

#[tokio::main]
async fn main() -> mjs_types::Result<()> {
    let cli = MjsApplication::parse();

    match cli.command {
        MjsCommands::Parse(args) => args.run().await?,
        MjsCommands::Tokens(args) => args.run().await?,
        MjsCommands::Check(args) => args.run().await?,
    }

    Ok(())
}
