mod menu;

use clap::{Parser, Subcommand};
use hotel_core::{Config, ReservationStore, Result, RoomNumber};
use menu::{ListFormat, Session};
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "hotel")]
#[command(about = "In-memory hotel reservation manager", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Read configuration from this file instead of the default location
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Override the number of rooms
    #[arg(long, global = true)]
    max_rooms: Option<RoomNumber>,

    /// Override the maximum number of stored reservations
    #[arg(long, global = true)]
    max_customers: Option<usize>,

    /// Output format for the bookings listing
    #[arg(long, global = true, value_enum, default_value_t = ListFormat::Text)]
    format: ListFormat,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the interactive reservation menu (default)
    Session,

    /// Print hotel information and services
    Info,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    hotel_core::logging::init_with_level(if cli.verbose { "debug" } else { "warn" });

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(max_rooms) = cli.max_rooms {
        config.limits.max_rooms = max_rooms;
    }
    if let Some(max_customers) = cli.max_customers {
        config.limits.max_customers = max_customers;
    }
    config.validate()?;

    match cli.command {
        Some(Commands::Info) => cmd_info(&config),
        Some(Commands::Session) | None => cmd_session(&config, cli.format),
    }
}

fn cmd_session(config: &Config, format: ListFormat) -> Result<()> {
    let mut store = ReservationStore::with_limits(config.store_limits());
    tracing::debug!("Starting session with limits {:?}", store.limits());

    let stdin = io::stdin();
    let stdout = io::stdout();
    Session::new(&mut store, config, format, stdin.lock(), stdout.lock()).run()?;

    tracing::debug!("Session ended with {} reservations", store.len());
    Ok(())
}

fn cmd_info(config: &Config) -> Result<()> {
    let mut out = io::stdout().lock();
    menu::write_hotel_info(&mut out, config)?;

    writeln!(out)?;
    writeln!(out, "Services:")?;
    for service in &config.hotel.services {
        writeln!(out, "  - {}", service)?;
    }
    Ok(())
}
