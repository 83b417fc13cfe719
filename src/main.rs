use std::path::PathBuf;
use std::sync::Arc;

use authsync::config::Config;
use authsync::logging::init_tracing;
use authsync::{ActionDispatcher, CollectionState, CollectionStore, ResourceRecord};
use chrono::Utc;
use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "authsync", version, about = "Manage server authorizations on a matching adapter")]
struct Cli {
    /// Config file (defaults to the user config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Load and print the server authorizations
    List,
    /// Create a server authorization, then print the refreshed list
    Create(CreateArgs),
}

#[derive(Debug, Args)]
struct CreateArgs {
    #[arg(long)]
    server_url: String,
    #[arg(long, default_value = "")]
    title: String,
    #[arg(long, default_value = "")]
    description: String,
    #[arg(long, default_value = "")]
    scope: String,
    /// Submit as a form body instead of JSON
    #[arg(long)]
    form: bool,
}

impl CreateArgs {
    fn to_record(&self) -> ResourceRecord {
        ResourceRecord::draft(self.server_url.as_str())
            .with_title(self.title.as_str())
            .with_description(self.description.as_str())
            .with_scope(self.scope.as_str())
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let store = Arc::new(CollectionStore::new());
    let dispatcher = ActionDispatcher::from_config(&config, store.clone())?;

    match &cli.command {
        Command::List => {
            dispatcher.load_if_needed().await?;
        }
        Command::Create(args) => {
            let record = args.to_record();
            record.validate()?;
            if args.form {
                dispatcher.create_via_form(&record).await?;
            } else {
                dispatcher.create(&record).await?;
            }
        }
    }

    print_collection(&store.state());
    Ok(())
}

fn print_collection(state: &CollectionState) {
    let now = Utc::now();
    for record in state.records() {
        let id = record.id.as_ref().map(ToString::to_string).unwrap_or_default();
        println!(
            "{:<12} {:<9} {:<30} {}",
            id,
            record.status(now),
            record.title,
            record.server_url
        );
    }
}
