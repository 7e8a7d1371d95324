//! Today I Learned CLI
//!
//! Command-line front end for the fact feed:
//! - Browse the most interesting facts, optionally by category
//! - Share a new fact
//! - List categories
//! - Generate a config file

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use til::config::{generate_default_config, Config, LoggingConfig};
use til::{
    view, Category, CategorySelection, FactApp, FactStore, MemoryFactStore, NoticeKind,
    SubmitError, SupabaseClient,
};

#[derive(Parser)]
#[command(name = "til")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Today I Learned - browse and share short facts")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: searched in the usual locations)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Use built-in sample facts instead of Supabase
    #[arg(long, global = true)]
    pub demo: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the fact feed
    List {
        /// Category name, or "all"
        #[arg(short, long, default_value = "all")]
        category: String,
        /// Maximum number of facts (1-1000)
        #[arg(short, long)]
        limit: Option<usize>,
        /// Least interesting first
        #[arg(long)]
        ascending: bool,
        /// Output format (table, json)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Share a new fact
    Share {
        /// The fact, at most 200 characters
        text: String,
        /// Trustworthy source (http or https URL)
        #[arg(short, long)]
        source: String,
        /// Category name
        #[arg(short, long)]
        category: String,
    },

    /// List categories and their colors
    Categories,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    init_logging(&config.logging);

    match cli.command {
        Commands::Categories => {
            for category in Category::all() {
                println!("{:<15} {}", category.name(), category.color());
            }
            Ok(())
        }

        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    if let Some(parent) = path.parent() {
                        std::fs::create_dir_all(parent)?;
                    }
                    std::fs::write(&path, &content)?;
                    println!("Config written to {:?}", path);
                }
                None => print!("{}", content),
            }
            Ok(())
        }

        command => {
            let mut feed_config = config.feed.clone();
            if let Commands::List {
                limit, ascending, ..
            } = &command
            {
                if let Some(limit) = limit {
                    feed_config.limit = *limit;
                }
                feed_config.ascending |= *ascending;
            }
            let query = feed_config.query();

            if cli.demo {
                tracing::info!("Running against sample facts");
                run(FactApp::new(MemoryFactStore::with_samples(), query), command).await
            } else {
                config.validate()?;
                let store = SupabaseClient::new(config.supabase.client_config())
                    .context("Failed to create HTTP client")?;
                run(FactApp::new(store, query), command).await
            }
        }
    }
}

/// Run a feed command against any store
async fn run<S: FactStore>(mut app: FactApp<S>, command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::List {
            category, format, ..
        } => {
            let selection: CategorySelection = category.parse()?;
            match selection {
                // Already the feed's selection, so nothing would reload
                CategorySelection::All => app.load().await,
                only => app.select_category(only).await,
            }
            report_notice(&mut app);

            match format.as_str() {
                "json" => println!(
                    "{}",
                    serde_json::to_string_pretty(app.feed().facts().as_slice())?
                ),
                _ => println!("{}", view::page(app.feed(), app.is_form_open())),
            }
        }

        Commands::Share {
            text,
            source,
            category,
        } => {
            app.toggle_form();
            let form = app.form_mut();
            form.set_text(text);
            form.set_source(source);
            form.set_category(category);

            match app.submit().await {
                Ok(fact) => {
                    report_notice(&mut app);
                    println!("{}", view::fact_item(&fact));
                }
                Err(SubmitError::Invalid(errors)) => {
                    eprintln!("Fact not shared:");
                    eprintln!("{}", view::form_errors(&errors));
                    std::process::exit(1);
                }
                Err(SubmitError::Store(e)) => {
                    tracing::error!(error = %e, "Insert failed");
                    report_notice(&mut app);
                    std::process::exit(1);
                }
            }
        }

        Commands::Categories | Commands::Config { .. } => {}
    }

    Ok(())
}

/// Print the feed's pending notice; errors exit non-zero
fn report_notice<S: FactStore>(app: &mut FactApp<S>) {
    if let Some(notice) = app.take_notice() {
        match notice.kind {
            NoticeKind::Success => println!("{}", notice.message),
            NoticeKind::Error => {
                eprintln!("{}", notice.message);
                std::process::exit(1);
            }
        }
    }
}

fn init_logging(config: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("til={}", config.level).into());

    let registry = tracing_subscriber::registry().with(filter);
    if config.format == "json" {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
