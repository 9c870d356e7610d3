//! Docintel CLI - host server for the document upload widget
//!
//! # Commands
//!
//! ```bash
//! docintel serve                          # Start HTTP server (port 8000)
//! docintel serve --static-dir frontend/dist
//! docintel extract invoice.pdf            # Send one file to the extraction service
//! ```

use clap::{Parser, Subcommand};
use docintel::{ExtractionClient, ServerConfig, UploadResponse, UploadedFile};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "docintel")]
#[command(about = "Host server for the document upload widget", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start HTTP server
    Serve {
        /// Port to listen on (default: $PORT or 8000)
        #[arg(short, long)]
        port: Option<u16>,

        /// Extraction service endpoint (default: $EXTRACTION_SERVICE_URL)
        #[arg(long)]
        extraction_url: Option<String>,

        /// Built widget to serve under /static (default: $DOCINTEL_STATIC_DIR)
        #[arg(long)]
        static_dir: Option<PathBuf>,
    },

    /// Send one document to the extraction service and print the response
    Extract {
        /// Input document (PDF, JPG, PNG)
        input: PathBuf,

        /// Extraction service endpoint (default: $EXTRACTION_SERVICE_URL)
        #[arg(long)]
        extraction_url: Option<String>,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() {
    // Load .env file (if present)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Serve {
            port,
            extraction_url,
            static_dir,
        } => cmd_serve(port, extraction_url, static_dir).await,

        Commands::Extract {
            input,
            extraction_url,
            output,
        } => cmd_extract(&input, extraction_url, output.as_deref()).await,
    };

    if let Err(e) = result {
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }
}

async fn cmd_serve(
    port: Option<u16>,
    extraction_url: Option<String>,
    static_dir: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig::from_env().with_overrides(port, extraction_url, static_dir);
    docintel::server::start_server(config).await
}

async fn cmd_extract(
    input: &Path,
    extraction_url: Option<String>,
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    eprintln!("📄 Reading: {}", input.display());

    let file = UploadedFile::from_path(input).await?;
    file.validate()?;
    eprintln!("   Type: {}", file.content_type);
    eprintln!("   Size: {} bytes", file.bytes.len());

    let client = match extraction_url {
        Some(url) => ExtractionClient::new(url),
        None => ExtractionClient::from_env()?,
    };
    eprintln!("📡 Sending to {}", client.endpoint());

    let file_name = file.file_name.clone();
    let output_data = client.extract(file).await?;
    eprintln!("✅ Extracted {} fields", output_data.extracted_data.len());

    let response = UploadResponse::new(file_name, output_data);
    let json = serde_json::to_string_pretty(&response)?;
    write_output(&json, output)?;

    Ok(())
}

fn write_output(content: &str, path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    match path {
        Some(p) => {
            fs::write(p, content)?;
            eprintln!("💾 Output written to: {}", p.display());
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
