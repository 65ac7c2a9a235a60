use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use foyer::cli::{
    handle_categories_command, handle_config_command, handle_init_command,
    handle_members_command, handle_report_command, handle_validate_command, CliContext,
    ReportArgs,
};
use foyer::config::{FoyerPaths, Settings};

#[derive(Parser)]
#[command(
    name = "foyer",
    version,
    about = "Household budget splitting from the command line",
    long_about = "Foyer splits a household's fixed charges, savings reserves, wishlist \
                  goals and expenses between its members, equally, in proportion to \
                  their salaries or by custom percentages, and shows what everyone \
                  has left to spend each month."
)]
struct Cli {
    /// Household snapshot file (overrides the configured location)
    #[arg(long, global = true, env = "FOYER_SNAPSHOT")]
    snapshot: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the configuration directory, settings and an empty snapshot
    Init,

    /// Show current configuration and paths
    Config,

    /// Disposable income of the household or of one member
    Report(ReportArgs),

    /// Household spending by category
    #[command(alias = "cat")]
    Categories {
        /// Month to report on (YYYY-MM)
        #[arg(short, long)]
        month: Option<String>,

        /// Show top N categories only
        #[arg(long)]
        top: Option<usize>,
    },

    /// Members with their salary and share of the household income
    Members {
        /// Month whose salaries to show (YYYY-MM)
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Check the snapshot for likely mistakes
    Validate,
}

fn main() -> Result<()> {
    foyer::logging::init_tracing();

    let cli = Cli::parse();

    let paths = FoyerPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let ctx = CliContext::new(paths, settings, cli.snapshot);

    match cli.command {
        Some(Commands::Init) => handle_init_command(&ctx)?,
        Some(Commands::Config) => handle_config_command(&ctx),
        Some(Commands::Report(args)) => handle_report_command(&ctx, args)?,
        Some(Commands::Categories { month, top }) => handle_categories_command(&ctx, month, top)?,
        Some(Commands::Members { month }) => handle_members_command(&ctx, month)?,
        Some(Commands::Validate) => handle_validate_command(&ctx)?,
        None => {
            println!("Foyer - household budget splitting");
            println!();
            println!("Run 'foyer --help' for usage information.");
            println!("Run 'foyer init' to get started.");
        }
    }

    Ok(())
}
