use clap::Parser;
use contacts::audit::AuditLog;
use contacts::fixtures;
use contacts::server::{self, AppState};
use contacts::store::memory::MemoryDatabase;
use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "contacts-server")]
#[command(about = "HTTP API for the contacts directory", version)]
struct Args {
    /// Address to listen on (falls back to CONTACTS_HTTP_BIND, then
    /// 127.0.0.1:8080)
    #[arg(long)]
    bind: Option<String>,

    /// Audit log file (append-only, one JSON line per operation)
    #[arg(long, default_value = "./audit.log")]
    audit_log: PathBuf,

    /// Start with an empty store instead of the built-in fixtures
    #[arg(long)]
    no_seed: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let bind = args
        .bind
        .or_else(|| std::env::var("CONTACTS_HTTP_BIND").ok())
        .unwrap_or_else(|| "127.0.0.1:8080".to_string());
    let addr: SocketAddr = bind.parse()?;

    let mut db = MemoryDatabase::new();
    if !args.no_seed {
        db.seed(fixtures::seed_contacts());
    }

    let audit = AuditLog::open(&args.audit_log)?;
    let state = AppState::shared(Box::new(db), audit);

    server::serve(addr, state).await?;
    Ok(())
}
