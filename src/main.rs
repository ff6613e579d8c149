use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use coinguard::core::log::init_logging;
use coinguard::core::{TransactionDraft, TransactionType, TypeFilter};

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Kind {
    Income,
    Expense,
}

impl From<Kind> for TransactionType {
    fn from(kind: Kind) -> Self {
        match kind {
            Kind::Income => TransactionType::Income,
            Kind::Expense => TransactionType::Expense,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum Filter {
    All,
    Income,
    Expense,
}

impl From<Filter> for TypeFilter {
    fn from(filter: Filter) -> Self {
        match filter {
            Filter::All => TypeFilter::All,
            Filter::Income => TypeFilter::Income,
            Filter::Expense => TypeFilter::Expense,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// Display balance, monthly totals and recent transactions
    Summary,
    /// Display the most recent transactions
    Recent {
        /// Number of transactions to show
        #[arg(short = 'n', long)]
        count: Option<usize>,
    },
    /// List all transactions, optionally filtered
    List {
        /// Only show this type of transaction
        #[arg(short = 't', long = "type", value_enum, default_value = "all")]
        kind: Filter,
        /// Case-insensitive text to look for in title or category
        #[arg(short, long, default_value = "")]
        search: String,
    },
    /// Record an income or expense
    Add {
        #[arg(value_enum)]
        kind: Kind,
        title: String,
        #[arg(long)]
        category: String,
        #[arg(long)]
        amount: f64,
        /// Date as YYYY-MM-DD, defaults to today
        #[arg(long, default_value = "")]
        date: String,
    },
    /// Delete a transaction by id
    Delete { id: String },
    /// Delete ALL transactions
    Clear {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

impl From<Commands> for coinguard::AppCommand {
    fn from(cmd: Commands) -> coinguard::AppCommand {
        match cmd {
            Commands::Summary => coinguard::AppCommand::Summary,
            Commands::Recent { count } => coinguard::AppCommand::Recent { count },
            Commands::List { kind, search } => coinguard::AppCommand::List {
                type_filter: kind.into(),
                query: search,
            },
            Commands::Add {
                kind,
                title,
                category,
                amount,
                date,
            } => coinguard::AppCommand::Add(TransactionDraft::new(
                kind.into(),
                title,
                category,
                amount,
                date,
            )),
            Commands::Delete { id } => coinguard::AppCommand::Delete { id },
            Commands::Clear { yes } => coinguard::AppCommand::Clear { assume_yes: yes },
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => coinguard::cli::setup::setup(),
        Some(cmd) => coinguard::run_command(cmd.into(), cli.config_path.as_deref()),
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}
