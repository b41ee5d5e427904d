use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use inkpost_store::WritingStore;

mod cli;
mod commands;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("inkpost_store=warn,warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    match run(cli) {
        Ok(()) => {}
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let mut store = match &cli.data_dir {
        Some(dir) => {
            tracing::debug!(path = %dir.display(), "using explicit data directory");
            WritingStore::open_at(dir)?
        }
        None => WritingStore::open()?,
    };

    match cli.command {
        Commands::Publish {
            title,
            kind,
            content,
            file,
        } => commands::publish::run(&mut store, &title, &kind, content, file),
        Commands::List { kind, search } => {
            commands::browse::list(&store, kind.as_deref(), search.as_deref())
        }
        Commands::Show { id } => commands::browse::show(&store, &id),
        Commands::Rate { id, stars } => commands::feedback::rate(&mut store, &id, stars),
        Commands::Comment { id, text } => commands::feedback::comment(&mut store, &id, &text),
        Commands::Mine => commands::browse::mine(&store),
        Commands::Whoami => commands::identity::whoami(&store),
    }
}
