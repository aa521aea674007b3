//! Lugat command line interface.
//!
//! # Usage
//!
//! ```bash
//! # Interactive: type to filter, `:tdk` to ask TDK, `:q` to quit
//! lugat
//!
//! # One-shot search, escalating to TDK when nothing matches
//! lugat search tekemmül --tdk
//!
//! # Definition straight from TDK
//! lugat define olgunlaşma --format json
//! ```
//!
//! Logs go to stderr and are filtered by `RUST_LOG` (default `warn`).

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use lugat::{Dictionary, Flow, JsonPresenter, LugatConfig, ResultPresenter, Session, TextPresenter};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "lugat")]
#[command(version)]
#[command(about = "Search an Ottoman Turkish glossary and look words up in the TDK dictionary")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// YAML configuration file
    #[arg(long, short, global = true)]
    config: Option<PathBuf>,

    /// Glossary JSON file (overrides the config and the bundled glossary)
    #[arg(long, short, global = true)]
    data: Option<PathBuf>,

    /// Never contact the external dictionary
    #[arg(long, global = true)]
    offline: bool,

    /// Output format
    #[arg(long, short = 'o', global = true, default_value = "text", value_enum)]
    format: OutputFormat,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    log_json: bool,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Filter the glossary once and print the matches
    Search {
        /// Query words, joined with spaces
        #[arg(required = true)]
        query: Vec<String>,

        /// Ask TDK when the glossary has no match
        #[arg(long)]
        tdk: bool,
    },

    /// Look a word up in the TDK dictionary
    Define {
        /// Term words, joined with spaces
        #[arg(required = true)]
        term: Vec<String>,
    },

    /// Interactive session (the default)
    Repl,
}

enum Presenter {
    Text(TextPresenter<io::Stdout>),
    Json(JsonPresenter<io::Stdout>),
}

impl Presenter {
    fn new(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => Presenter::Text(TextPresenter::new(io::stdout())),
            OutputFormat::Json => Presenter::Json(JsonPresenter::new(io::stdout())),
        }
    }

    fn as_dyn(&mut self) -> &mut dyn ResultPresenter<Error = io::Error> {
        match self {
            Presenter::Text(p) => p,
            Presenter::Json(p) => p,
        }
    }
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn load_config(cli: &Cli) -> Result<LugatConfig> {
    let mut cfg = match &cli.config {
        Some(path) => LugatConfig::from_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => LugatConfig::default(),
    };
    if let Some(data) = &cli.data {
        cfg.store.path = Some(data.clone());
    }
    if cli.offline {
        cfg.lookup.enabled = false;
    }
    Ok(cfg)
}

async fn repl(session: &mut Session<'_>, presenter: &mut Presenter) -> Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    let presenter = presenter.as_dyn();
    presenter.present_no_query()?;
    loop {
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        if session.handle_line(&line, presenter).await? == Flow::Quit {
            break;
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_json);

    let cfg = load_config(&cli)?;
    let dictionary = Dictionary::from_config(&cfg).context("building dictionary")?;
    let mut presenter = Presenter::new(cli.format);
    let mut session = Session::new(&dictionary);

    match cli.command.unwrap_or(Commands::Repl) {
        Commands::Search { query, tdk } => {
            session
                .search(&query.join(" "), tdk, presenter.as_dyn())
                .await?;
        }
        Commands::Define { term } => {
            session.define(&term.join(" "), presenter.as_dyn()).await?;
        }
        Commands::Repl => repl(&mut session, &mut presenter).await?,
    }

    Ok(())
}
