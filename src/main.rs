use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use groupsplit::cli::{
    handle_balances, handle_expense_command, handle_export, handle_group_command, handle_history,
    handle_settle, handle_settle_file, handle_split, ExportFormat, OutputFormat,
};
use groupsplit::config::{paths::GroupSplitPaths, settings::Settings};
use groupsplit::storage::Storage;

#[derive(Parser)]
#[command(
    name = "groupsplit",
    version,
    about = "Split group expenses and settle up",
    long_about = "GroupSplit records who paid for shared expenses and how each \
                  cost is divided, then works out every member's balance and \
                  the payments that settle the group."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize the data directory
    Init,

    /// Show current configuration and paths
    Config,

    /// Group management commands
    #[command(subcommand)]
    Group(groupsplit::cli::GroupCommands),

    /// Expense management commands
    #[command(subcommand, alias = "exp")]
    Expense(groupsplit::cli::ExpenseCommands),

    /// Show each member's net balance in a group
    Balances {
        /// Group name or ID
        group: String,
    },

    /// Show the payments that settle a group
    Settle {
        /// Group name or ID
        group: String,
        /// Output format
        #[arg(short, long, value_enum, default_value = "table")]
        format: OutputFormat,
    },

    /// Split an amount equally among members
    Split {
        /// Amount to split (e.g., "100.00")
        amount: String,
        /// Members, in order; earlier members absorb the remainder
        #[arg(required = true)]
        members: Vec<String>,
    },

    /// Settle a JSON file of expense records without storing anything
    SettleFile {
        /// Path to a JSON array of expense records
        path: PathBuf,
        /// Roster for records without splits (repeat or separate with commas)
        #[arg(short, long = "member", value_delimiter = ',')]
        members: Vec<String>,
        /// Output format
        #[arg(short, long, value_enum, default_value = "json")]
        format: OutputFormat,
    },

    /// Export a group to a file
    Export {
        /// Group name or ID
        group: String,
        /// Output file path
        output: PathBuf,
        /// Export format
        #[arg(short, long, value_enum, default_value = "json")]
        format: ExportFormat,
        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Show recent changes from the audit log
    History {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = GroupSplitPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    // Logs go to stderr so JSON and CSV output on stdout stays clean
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&settings.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let open_storage = || -> Result<Storage> {
        let mut storage = Storage::new(paths.clone())?;
        if !storage.is_initialized() {
            tracing::warn!("data directory is not initialized; run 'groupsplit init'");
        }
        storage.load_all()?;
        Ok(storage)
    };

    match cli.command {
        Some(Commands::Init) => {
            println!("Initializing GroupSplit at: {}", paths.base_dir().display());
            groupsplit::storage::init::initialize_storage(&paths)?;
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Run 'groupsplit group create <name> --creator <you>' to get started.");
        }
        Some(Commands::Config) => {
            println!("GroupSplit Configuration");
            println!("========================");
            println!("Config directory: {}", paths.config_dir().display());
            println!("Data directory:   {}", paths.data_dir().display());
            println!("Audit log:        {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:      {}", settings.currency_symbol);
            println!("  Strict custom splits: {}", settings.strict_custom_splits);
            println!("  Log level:            {}", settings.log_level);
            println!(
                "  Default member:       {}",
                settings.default_member.as_deref().unwrap_or("(none)")
            );
        }
        Some(Commands::Group(cmd)) => {
            handle_group_command(&open_storage()?, &settings, cmd)?;
        }
        Some(Commands::Expense(cmd)) => {
            handle_expense_command(&open_storage()?, &settings, cmd)?;
        }
        Some(Commands::Balances { group }) => {
            handle_balances(&open_storage()?, &settings, &group)?;
        }
        Some(Commands::Settle { group, format }) => {
            handle_settle(&open_storage()?, &settings, &group, format)?;
        }
        Some(Commands::Split { amount, members }) => {
            handle_split(&settings, &amount, &members)?;
        }
        Some(Commands::SettleFile {
            path,
            members,
            format,
        }) => {
            handle_settle_file(&settings, &path, &members, format)?;
        }
        Some(Commands::Export {
            group,
            output,
            format,
            pretty,
        }) => {
            handle_export(&open_storage()?, &group, &output, format, pretty)?;
        }
        Some(Commands::History { limit }) => {
            handle_history(&open_storage()?, limit)?;
        }
        None => {
            println!("GroupSplit - split group expenses and settle up");
            println!();
            println!("Run 'groupsplit --help' for usage information.");
        }
    }

    Ok(())
}
