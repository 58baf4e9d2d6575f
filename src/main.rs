use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use kbbi_api::api::router::build_router;
use kbbi_api::dataset::loader::load_dictionary;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let mut bind_addr: SocketAddr = match std::env::var("KBBI_BIND") {
        Ok(value) => value.parse()?,
        Err(_) => "127.0.0.1:8080".parse()?,
    };
    let mut data_dir: PathBuf = std::env::var("KBBI_DATA_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("data"));

    let args: Vec<String> = std::env::args().collect();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--bind" => {
                bind_addr = args[i + 1].parse()?;
                i += 2;
            }
            "--data-dir" => {
                data_dir = PathBuf::from(&args[i + 1]);
                i += 2;
            }
            "--help" | "-h" => {
                eprintln!("Usage: {} [--bind <addr:port>] [--data-dir <path>]", args[0]);
                eprintln!("Example: {} --bind 127.0.0.1:8080 --data-dir data", args[0]);

                std::process::exit(0);
            }
            _ => {
                i += 1;
            }
        }
    }

    tracing::info!("Starting KBBI dictionary service");
    tracing::info!("Data directory: {}", data_dir.display());

    // 1. Load the dataset before accepting any traffic:
    let dictionary = Arc::new(load_dictionary(&data_dir)?);
    if dictionary.is_empty() {
        tracing::warn!("Word index is empty; search and suggestions will answer 500");
    }

    // 2. HTTP Router:
    let app = build_router(dictionary);

    // 3. Start HTTP server:
    tracing::info!("HTTP server listening on {}", bind_addr);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
