//! Linkmark CLI
//!
//! Thin boundary over linkmark-core: parses arguments, resolves the
//! session token, and maps the core's typed results to messages and exit
//! codes. All bookmark commands run as the user the token verifies to;
//! the core itself has no notion of a current user.

use anyhow::Result;
use clap::{Parser, Subcommand};

use linkmark_core::{Config, Database};

mod commands;
mod output;
mod session;

use output::{Output, OutputFormat};

#[derive(Parser)]
#[command(name = "linkmark")]
#[command(about = "Linkmark - personal bookmark manager")]
#[command(version)]
#[command(propagate_version = true)]
struct Cli {
    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Quiet mode - minimal output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Session token for bookmark commands
    #[arg(long, global = true, env = "LINKMARK_TOKEN", hide_env_values = true)]
    token: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check that the database can be opened (liveness probe)
    Health,
    /// Register a new account
    Register {
        /// Login email
        email: String,
        /// Password (prompted interactively if omitted)
        #[arg(long)]
        password: Option<String>,
    },
    /// Log in and print a session token
    Login {
        /// Login email
        email: String,
        /// Password (prompted interactively if omitted)
        #[arg(long)]
        password: Option<String>,
    },
    /// Save a bookmark
    Add {
        /// URL to save
        url: String,
        /// Display title
        #[arg(short, long)]
        title: Option<String>,
        /// Favicon URL
        #[arg(long)]
        favicon: Option<String>,
        /// Short summary
        #[arg(short, long)]
        summary: Option<String>,
        /// Comma-separated tags
        #[arg(long)]
        tags: Option<String>,
    },
    /// List your bookmarks, newest first
    #[command(alias = "ls")]
    List {
        /// Only bookmarks whose tags contain this substring
        #[arg(short, long)]
        tag: Option<String>,
    },
    /// Show a single bookmark
    Show {
        /// Bookmark ID
        id: i64,
    },
    /// Update a bookmark's title, summary, or tags
    #[command(alias = "edit")]
    Update {
        /// Bookmark ID
        id: i64,
        /// New title
        #[arg(short, long)]
        title: Option<String>,
        /// New summary
        #[arg(short, long)]
        summary: Option<String>,
        /// New comma-separated tags
        #[arg(long)]
        tags: Option<String>,
    },
    /// Delete a bookmark
    #[command(alias = "rm")]
    Delete {
        /// Bookmark ID
        id: i64,
    },
    /// Show current configuration
    Config,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let output = Output::new(OutputFormat::from_flags(cli.json, cli.quiet));
    let config = Config::load()?;

    match cli.command {
        Commands::Health => commands::health::check(&config, &output),
        Commands::Config => commands::config::show(&config, &output),
        Commands::Register { email, password } => {
            commands::auth::register(&config, email, password, &output)
        }
        Commands::Login { email, password } => {
            commands::auth::login(&config, email, password, &output)
        }
        command => {
            // Everything below reads or writes the caller's own bookmarks
            let user_id = session::authenticate(&config, cli.token.as_deref())?;
            let mut db = Database::open(&config)?;

            match command {
                Commands::Add {
                    url,
                    title,
                    favicon,
                    summary,
                    tags,
                } => commands::bookmark::add(
                    &mut db, user_id, url, title, favicon, summary, tags, &output,
                ),
                Commands::List { tag } => commands::bookmark::list(&db, user_id, tag, &output),
                Commands::Show { id } => commands::bookmark::show(&db, user_id, id, &output),
                Commands::Update {
                    id,
                    title,
                    summary,
                    tags,
                } => commands::bookmark::update(&mut db, user_id, id, title, summary, tags, &output),
                Commands::Delete { id } => commands::bookmark::delete(&mut db, user_id, id, &output),
                _ => unreachable!(), // Handled above
            }
        }
    }
}
