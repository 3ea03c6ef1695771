// Cloudbit - Cloud platform command line interface
use clap::Parser;
use cloudbit::cli::{execute_command, Args, Console};

#[tokio::main]
async fn main() {
    let args = Args::parse();

    if let Err(e) = execute_command(args).await {
        let mut console = Console::stderr(true);
        let _ = console.error(&format!("Error: {:#}", e));
        std::process::exit(1);
    }
}
