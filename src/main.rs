// BoardCom - Memory Bus Debug Tool
use boardcom::cli::args::Args;
use boardcom::cli::commands::execute_command;
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if let Err(e) = execute_command(args).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}
