//! CLI frontend for the Heldenbuch character creator.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use hb_core::{CreatorConfig, UnknownClassPolicy};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "hb",
    about = "Heldenbuch: create, save, and level up RPG characters",
    version,
    propagate_version = true
)]
struct Cli {
    /// Stats for classes without a formula: zero, reject
    #[arg(long, global = true, default_value = "zero")]
    unknown_class: UnknownClassPolicy,

    /// Gold for newly created characters
    #[arg(long, global = true, default_value = "100", allow_negative_numbers = true)]
    starting_gold: i64,

    /// Write saves in place instead of via a temporary file
    #[arg(long, global = true)]
    no_atomic: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create Aria the Mage, save, reload, and level her up
    Demo {
        /// Where to save the sample character
        #[arg(short, long, default_value = commands::demo::DEFAULT_FILE)]
        file: PathBuf,
    },

    /// Create a new level 1 character and save it
    Create {
        /// Character name
        name: String,

        /// Class: warrior, mage, rogue, or cleric
        class: String,

        /// Output file (default: `<name>.txt`)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Display a saved character sheet
    Show {
        /// Character file
        file: PathBuf,

        /// Print the character as JSON
        #[arg(long)]
        json: bool,
    },

    /// Level up a saved character and write it back
    LevelUp {
        /// Character file
        file: PathBuf,

        /// Number of levels to gain
        #[arg(short = 'n', long, default_value = "1")]
        times: u32,
    },

    /// Check that a saved character's stats match its class and level
    Check {
        /// Character file
        file: PathBuf,
    },

    /// List the classes and their stat formulas
    Classes {
        /// Level to compute example stats for
        #[arg(short, long, default_value = "1")]
        level: u32,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = CreatorConfig::default()
        .with_unknown_class(cli.unknown_class)
        .with_starting_gold(cli.starting_gold)
        .with_atomic_saves(!cli.no_atomic);
    tracing::debug!(?config, "starting");

    let command = cli.command.unwrap_or_else(|| Commands::Demo {
        file: PathBuf::from(commands::demo::DEFAULT_FILE),
    });

    let result = match command {
        Commands::Demo { file } => commands::demo::run(&file, &config),
        Commands::Create {
            name,
            class,
            output,
        } => commands::create::run(&name, &class, output.as_deref(), &config),
        Commands::Show { file, json } => commands::show::run(&file, json),
        Commands::LevelUp { file, times } => commands::level_up::run(&file, times, &config),
        Commands::Check { file } => commands::check::run(&file, config.unknown_class),
        Commands::Classes { level } => commands::classes::run(level),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
