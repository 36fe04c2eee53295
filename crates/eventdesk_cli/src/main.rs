//! EventDesk CLI
//!
//! Command-line front end for the EventDesk record store.
//!
//! # Commands
//!
//! - `login` - Check a username and password
//! - `list` / `show` - Browse events
//! - `add` / `update` / `remove` - Manage events
//! - `register` - Add a participant to an event
//! - `conflicts` - Check whether a venue is free on a day
//! - `stats` - Dashboard figures
//! - `export` - Write all events as CSV
//! - `backup` - Snapshot the data files

mod commands;

use clap::{Parser, Subcommand, ValueEnum};
use commands::events::EventFields;
use eventdesk_core::{Config, EventId, EventStatus, ParticipantKind, RecordStore};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Manage university events from the command line.
#[derive(Parser)]
#[command(name = "eventdesk")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory holding events.txt and users.txt
    #[arg(global = true, short, long)]
    data_dir: Option<PathBuf>,

    /// Enable verbose output
    #[arg(global = true, short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a username and password
    Login {
        /// Account name
        #[arg(short, long)]
        username: String,

        /// Account password
        #[arg(short, long)]
        password: String,
    },

    /// List events
    List {
        /// Only events whose name, venue or organizer contains this text
        #[arg(short, long)]
        search: Option<String>,

        /// Only events with this status
        #[arg(long, value_enum, default_value_t = StatusArg::All)]
        status: StatusArg,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Show one event with its participants
    Show {
        /// Event id
        id: EventId,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Add an event
    Add {
        /// Event name
        #[arg(short, long)]
        name: String,

        /// Date (DD/MM/YYYY)
        #[arg(long)]
        date: String,

        /// Venue
        #[arg(long)]
        venue: String,

        /// Organizer
        #[arg(short, long)]
        organizer: String,

        /// Add even if the venue is already booked that day
        #[arg(long)]
        force: bool,
    },

    /// Change an event's details
    Update {
        /// Event id
        id: EventId,

        /// New name
        #[arg(short, long)]
        name: Option<String>,

        /// New date (DD/MM/YYYY)
        #[arg(long)]
        date: Option<String>,

        /// New venue
        #[arg(long)]
        venue: Option<String>,

        /// New organizer
        #[arg(short, long)]
        organizer: Option<String>,
    },

    /// Remove an event
    Remove {
        /// Event id
        id: EventId,
    },

    /// Register a participant for an event
    Register {
        /// Event id
        id: EventId,

        /// Participant name
        #[arg(short, long)]
        name: String,

        /// Participant type
        #[arg(short, long, value_enum, default_value_t = KindArg::Student)]
        kind: KindArg,
    },

    /// Check for events at a venue on a day
    Conflicts {
        /// Date (DD/MM/YYYY)
        #[arg(long)]
        date: String,

        /// Venue
        #[arg(long)]
        venue: String,
    },

    /// Show event statistics
    Stats {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Export all events as CSV
    Export {
        /// Output file
        output: PathBuf,
    },

    /// Snapshot the data files into the backups directory
    Backup {
        /// List existing snapshots instead of creating one
        #[arg(short, long)]
        list: bool,
    },

    /// Show version information
    Version,
}

/// How query results are printed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// Pretty-printed JSON
    Json,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum StatusArg {
    All,
    Upcoming,
    Today,
    Completed,
}

impl StatusArg {
    fn status(self) -> Option<EventStatus> {
        match self {
            Self::All => None,
            Self::Upcoming => Some(EventStatus::Upcoming),
            Self::Today => Some(EventStatus::Today),
            Self::Completed => Some(EventStatus::Completed),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum KindArg {
    Student,
    Staff,
}

impl From<KindArg> for ParticipantKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Student => Self::Student,
            KindArg::Staff => Self::Staff,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    // stdout carries command output, which may be JSON
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Commands::Version = cli.command {
        println!("EventDesk CLI v{}", env!("CARGO_PKG_VERSION"));
        println!("EventDesk Core v{}", eventdesk_core::VERSION);
        return Ok(());
    }

    let mut config = Config::new();
    if let Some(dir) = cli.data_dir {
        config = config.data_dir(dir);
    }
    let mut store = RecordStore::open(config);

    match cli.command {
        Commands::Login { username, password } => {
            commands::login::run(&store, &username, &password)?;
        }
        Commands::List {
            search,
            status,
            format,
        } => {
            commands::events::list(&store, search.as_deref(), status.status(), format)?;
        }
        Commands::Show { id, format } => {
            commands::events::show(&store, id, format)?;
        }
        Commands::Add {
            name,
            date,
            venue,
            organizer,
            force,
        } => {
            let fields = EventFields {
                name: Some(name),
                date: Some(date),
                venue: Some(venue),
                organizer: Some(organizer),
            };
            commands::events::add(&mut store, fields, force)?;
        }
        Commands::Update {
            id,
            name,
            date,
            venue,
            organizer,
        } => {
            let fields = EventFields {
                name,
                date,
                venue,
                organizer,
            };
            commands::events::update(&mut store, id, fields)?;
        }
        Commands::Remove { id } => {
            commands::events::remove(&mut store, id)?;
        }
        Commands::Register { id, name, kind } => {
            commands::events::register(&mut store, id, &name, kind.into())?;
        }
        Commands::Conflicts { date, venue } => {
            commands::events::conflicts(&store, &date, &venue)?;
        }
        Commands::Stats { format } => {
            commands::stats::run(&store, format)?;
        }
        Commands::Export { output } => {
            commands::export::run(&store, &output)?;
        }
        Commands::Backup { list } => {
            if list {
                commands::backup::list(&store)?;
            } else {
                commands::backup::create(&store)?;
            }
        }
        Commands::Version => {}
    }

    Ok(())
}
