use clap::Parser;
use contacts::cli::{self, args::Cli};
use contacts::client::http::HttpClient;
use contacts::error::Result;

fn main() {
    env_logger::init();
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Cli::parse();

    let base_url = args
        .server
        .or_else(|| std::env::var("CONTACTS_SERVER").ok())
        .unwrap_or_else(|| "http://localhost:8080".to_string());

    let client = HttpClient::new(base_url);
    let output = cli::run(&client, args.command)?;
    println!("{output}");
    Ok(())
}
