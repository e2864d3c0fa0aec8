//! CLI entry point for finsite

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use finsite::commands;
use finsite::Site;

#[derive(Parser)]
#[command(name = "finsite")]
#[command(version)]
#[command(about = "Static marketing site generator backed by a headless CMS", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate static files
    #[command(alias = "g")]
    Generate {
        /// Build from draft content and mark pages noindex
        #[arg(long)]
        preview: bool,

        /// Watch for file changes
        #[arg(short, long)]
        watch: bool,

        /// Read content from a local JSON export instead of the CMS
        #[arg(long)]
        content: Option<String>,
    },

    /// Start a local server
    #[command(alias = "s")]
    Server {
        /// Port to listen on
        #[arg(short, long, default_value = "4000")]
        port: u16,

        /// IP address to bind to
        #[arg(short, long, default_value = "localhost")]
        ip: String,

        /// Build from draft content
        #[arg(long)]
        preview: bool,

        /// Rebuild on file changes
        #[arg(short, long)]
        watch: bool,
    },

    /// Create or update the CMS content model
    Provision {
        /// Only check that the expected content types exist
        #[arg(long, conflicts_with_all = ["webhooks", "with_webhooks"])]
        validate: bool,

        /// Only register the rebuild webhook
        #[arg(long, conflicts_with = "with_webhooks")]
        webhooks: bool,

        /// Full setup plus webhook registration
        #[arg(long)]
        with_webhooks: bool,

        /// Content model file (json, yml or toml) instead of the built-in one
        #[arg(long)]
        schema: Option<PathBuf>,
    },

    /// List site routes
    List {
        /// What to list (routes, products, corporate)
        #[arg(default_value = "routes")]
        r#type: String,

        /// List draft content
        #[arg(long)]
        preview: bool,
    },

    /// Clean the public folder
    Clean,

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.debug {
        "finsite=debug,info"
    } else {
        "finsite=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::Generate {
            preview,
            watch,
            content,
        } => {
            let mut site = Site::new(&base_dir)?;
            if let Some(content) = content {
                site = site.with_content_file(content);
            }
            tracing::info!("Generating static files...");
            site.generate(preview).await?;
            println!("Generated successfully!");

            if watch {
                commands::generate::watch(&site, preview).await?;
            }
        }

        Commands::Server {
            port,
            ip,
            preview,
            watch,
        } => {
            let site = Site::new(&base_dir)?;
            tracing::info!("Generating static files...");
            site.generate(preview).await?;
            finsite::server::start(&site, &ip, port, preview, watch).await?;
        }

        Commands::Provision {
            validate,
            webhooks,
            with_webhooks,
            schema,
        } => {
            let site = Site::new(&base_dir)?;
            let mode = commands::provision::mode_from_flags(validate, webhooks, with_webhooks);
            commands::provision::run(&site, mode, schema.as_deref()).await?;
        }

        Commands::List { r#type, preview } => {
            let site = Site::new(&base_dir)?;
            commands::list::run(&site, &r#type, preview).await?;
        }

        Commands::Clean => {
            let site = Site::new(&base_dir)?;
            tracing::info!("Cleaning public folder...");
            site.clean()?;
            println!("Cleaned successfully!");
        }

        Commands::Version => {
            println!("finsite version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
