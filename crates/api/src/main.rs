//! Users API - HTTP server for the user directory.

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;

use api_lib::config::ApiConfig;
use api_lib::openapi::ApiDoc;

#[derive(Parser)]
#[command(name = "users-api")]
#[command(author, version, about = "CRUD API over an in-memory user directory")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server (default)
    Serve(ServeArgs),
    /// Print the OpenAPI document as JSON
    Openapi,
}

#[derive(Args, Default)]
struct ServeArgs {
    /// Host to bind to [env: HOST, default: 0.0.0.0]
    #[arg(short = 'H', long)]
    host: Option<String>,
    /// Port to listen on [env: PORT, default: 3000]
    #[arg(short, long)]
    port: Option<u16>,
    /// Start with an empty directory instead of the seed records
    #[arg(long)]
    no_seed: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let mut config = ApiConfig::from_env();

    // Initialize tracing (verbose mode sets debug level)
    let default_filter = if cli.verbose {
        "debug".to_string()
    } else {
        format!("{},tower_http=debug", config.service.log_level)
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    match cli.command.unwrap_or(Commands::Serve(ServeArgs::default())) {
        Commands::Serve(args) => {
            if let Some(host) = args.host {
                config.service.host = host;
            }
            if let Some(port) = args.port {
                config.service.port = port;
            }
            if args.no_seed {
                config.users.seed = false;
            }
            tracing::debug!(?config, "Configuration loaded");

            api_lib::run_server(config).await?;
        }
        Commands::Openapi => {
            println!("{}", ApiDoc::openapi().to_pretty_json()?);
        }
    }

    Ok(())
}
