use clap::Parser;
use receipt_points::store::MemoryStore;
use receipt_points::{init_logging, serve, CliArgs, ReceiptService, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliArgs::parse();
    let config = ServerConfig::from_args(cli)?;

    init_logging(config.log_format)?;

    let service = ReceiptService::new(MemoryStore::new());
    serve(config, service).await
}
