use clap::Parser;
use license_admin::cli::{self, Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Serve => cli::serve::run().await,
        Command::Decode(args) => cli::decode::run(&args),
        Command::HashToken { token } => {
            cli::print_token_hash(&token);
            Ok(())
        }
    }
}
