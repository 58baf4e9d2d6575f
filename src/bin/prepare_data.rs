use std::path::PathBuf;

use kbbi_api::dataset::builder::build_dataset;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let mut input_dir = PathBuf::from("raw");
    let mut output_dir = PathBuf::from("data");

    let args: Vec<String> = std::env::args().collect();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--input" => {
                input_dir = PathBuf::from(&args[i + 1]);
                i += 2;
            }
            "--output" => {
                output_dir = PathBuf::from(&args[i + 1]);
                i += 2;
            }
            "--help" | "-h" => {
                eprintln!("Usage: {} [--input <dir>] [--output <dir>]", args[0]);
                eprintln!("Example: {} --input raw --output data", args[0]);

                std::process::exit(0);
            }
            _ => {
                i += 1;
            }
        }
    }

    tracing::info!("Preparing dataset from {}", input_dir.display());

    let summary = build_dataset(&input_dir, &output_dir)?;
    if summary.words == 0 {
        tracing::warn!(
            "No headwords found; is {} the raw dump directory?",
            input_dir.display()
        );
    }

    tracing::info!("Dataset written to {}", output_dir.display());

    Ok(())
}
