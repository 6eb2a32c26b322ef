use clap::{Parser, Subcommand};

mod cmds;

pub use cmds::{CheckArgs, ParseArgs, TokensArgs};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct MjsApplication {
    #[command(subcommand)]
    pub command: MjsCommands,
}

#[derive(Subcommand)]
pub enum MjsCommands {
    /// Parse a JavaScript file and print its syntax tree
    Parse(ParseArgs),
    /// Print the token stream of a JavaScript file
    Tokens(TokensArgs),
    /// Parse a JavaScript file and report a summary
    Check(CheckArgs),
}
