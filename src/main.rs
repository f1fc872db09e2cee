use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use chrono::{Datelike, Local, NaiveDate};
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use spendlite::config::SpendlitePaths;
use spendlite::display;
use spendlite::error::SpendliteError;
use spendlite::filter::{self, FilterSpec};
use spendlite::models::{Money, RawTransaction, TransactionId, TransactionKind};
use spendlite::reports;
use spendlite::storage::TransactionStore;

#[derive(Parser)]
#[command(
    name = "spendlite",
    version,
    about = "Local income/expense ledger with filtering, reports, and CSV import/export",
    long_about = "Spendlite keeps a single-user ledger of income and expense entries in a \
                  local JSON file. Entries can be filtered, summarized into totals and \
                  monthly/category reports, and exchanged as CSV."
)]
struct Cli {
    /// Directory holding the ledger data file
    #[arg(long, global = true, env = "SPENDLITE_DATA_DIR", value_name = "DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a new transaction
    Add {
        /// Income or expense
        #[arg(value_enum)]
        kind: KindArg,
        /// Category name
        category: String,
        /// Amount as a decimal, e.g. 4.50
        amount: String,
        /// Transaction date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<NaiveDate>,
        /// Free-text note
        #[arg(short, long)]
        note: Option<String>,
    },

    /// List transactions, most recent first
    List {
        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Edit an existing transaction
    Edit {
        /// Id of the transaction to edit
        id: String,
        #[arg(long, value_enum)]
        kind: Option<KindArg>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        amount: Option<String>,
        #[arg(long)]
        date: Option<NaiveDate>,
        #[arg(long)]
        note: Option<String>,
    },

    /// Delete a transaction
    #[command(alias = "rm")]
    Remove {
        /// Id of the transaction to delete
        id: String,
    },

    /// Show income/expense totals and the balance
    Summary {
        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Aggregated report tables
    #[command(subcommand)]
    Report(ReportCommands),

    /// List distinct category names
    Categories,

    /// Export the ledger to a CSV file
    Export {
        /// Output file
        #[arg(short, long, default_value = "spendlite.csv")]
        output: PathBuf,
    },

    /// Import transactions from a CSV file, merging by id
    Import {
        /// Path to CSV file
        file: PathBuf,
    },

    /// Load a small sample data set into the ledger
    Sample,

    /// Show resolved configuration paths
    Config,
}

#[derive(Subcommand)]
enum ReportCommands {
    /// Income/expense totals per month
    Monthly {
        #[command(flatten)]
        filter: FilterArgs,
    },
    /// Expense totals per category, largest first
    Categories {
        #[command(flatten)]
        filter: FilterArgs,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum KindArg {
    Income,
    Expense,
}

impl From<KindArg> for TransactionKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Income => TransactionKind::Income,
            KindArg::Expense => TransactionKind::Expense,
        }
    }
}

/// Filter flags shared by list, summary, and report
#[derive(Args, Debug, Default)]
struct FilterArgs {
    /// Keep only one kind
    #[arg(long, value_enum)]
    kind: Option<KindArg>,

    /// Case-insensitive exact category match
    #[arg(long)]
    category: Option<String>,

    /// Keep records dated on or after this date (YYYY-MM-DD)
    #[arg(long)]
    from: Option<NaiveDate>,

    /// Keep records dated on or before this date (YYYY-MM-DD)
    #[arg(long)]
    to: Option<NaiveDate>,

    /// Case-insensitive substring search over category and note
    #[arg(long)]
    search: Option<String>,
}

impl FilterArgs {
    fn into_spec(self) -> FilterSpec {
        let mut spec = FilterSpec::new();
        if let Some(kind) = self.kind {
            spec = spec.kind(kind.into());
        }
        if let Some(category) = self.category {
            spec = spec.category(category);
        }
        if let Some(from) = self.from {
            spec = spec.date_from(from);
        }
        if let Some(to) = self.to {
            spec = spec.date_to(to);
        }
        if let Some(search) = self.search {
            spec = spec.search(search);
        }
        spec
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let paths = match cli.data_dir {
        Some(dir) => SpendlitePaths::with_base_dir(dir),
        None => SpendlitePaths::new()?,
    };
    paths.ensure_directories()?;

    let mut store = TransactionStore::open(paths.transactions_file())?;
    let today = Local::now().date_naive();

    match cli.command {
        Commands::Add {
            kind,
            category,
            amount,
            date,
            note,
        } => {
            let amount = parse_amount(&amount)?;
            let txn = store.add(
                RawTransaction {
                    kind: kind.into(),
                    category,
                    amount,
                    date,
                    note: note.unwrap_or_default(),
                },
                today,
            )?;
            println!(
                "Added {} {} {} ({})",
                txn.date_string(),
                txn.category,
                txn.amount,
                txn.id
            );
        }

        Commands::List { filter } => {
            let filtered = filter::apply(store.all(), &filter.into_spec());
            print!("{}", display::format_register(&filtered));
        }

        Commands::Edit {
            id,
            kind,
            category,
            amount,
            date,
            note,
        } => {
            let id = TransactionId::from(id.as_str());
            let Some(existing) = store.get(&id).cloned() else {
                println!("Transaction not found: {}", id);
                return Ok(());
            };

            let amount = match amount {
                Some(s) => parse_amount(&s)?,
                None => existing.amount,
            };
            let raw = RawTransaction {
                kind: kind.map(Into::into).unwrap_or(existing.kind),
                category: category.unwrap_or(existing.category),
                amount,
                date: Some(date.unwrap_or(existing.date)),
                note: note.unwrap_or(existing.note),
            };

            store.update(&id, raw, today)?;
            println!("Updated {}", id);
        }

        Commands::Remove { id } => {
            let id = TransactionId::from(id.as_str());
            match store.remove(&id) {
                Ok(()) => println!("Removed {}", id),
                Err(e) if e.is_not_found() => println!("Transaction not found: {}", id),
                Err(e) => return Err(e.into()),
            }
        }

        Commands::Summary { filter } => {
            let filtered = filter::apply(store.all(), &filter.into_spec());
            print!("{}", display::format_summary(&reports::summary(&filtered)));
        }

        Commands::Report(ReportCommands::Monthly { filter }) => {
            let filtered = filter::apply(store.all(), &filter.into_spec());
            print!(
                "{}",
                display::format_monthly_series(&reports::monthly_series(&filtered))
            );
        }

        Commands::Report(ReportCommands::Categories { filter }) => {
            let filtered = filter::apply(store.all(), &filter.into_spec());
            print!(
                "{}",
                display::format_category_totals(&reports::category_totals(&filtered))
            );
        }

        Commands::Categories => {
            for name in reports::category_names(store.all()) {
                println!("{}", name);
            }
        }

        Commands::Export { output } => {
            let text = spendlite::csv::encode(store.all())?;
            fs::write(&output, text)?;
            println!(
                "Exported {} transactions to {}",
                store.len(),
                output.display()
            );
        }

        Commands::Import { file } => {
            let text = fs::read_to_string(&file)?;
            let records = spendlite::csv::decode(&text, today)?;
            let count = store.merge_import(records);
            tracing::info!(count, file = %file.display(), "merged CSV import");
            println!("Imported {} transactions from {}", count, file.display());
        }

        Commands::Sample => {
            let entries = sample_entries(today);
            let count = entries.len();
            for raw in entries {
                store.add(raw, today)?;
            }
            println!("Loaded {} sample transactions.", count);
        }

        Commands::Config => {
            println!("Spendlite Configuration");
            println!("=======================");
            println!("Data directory: {}", paths.base_dir().display());
            println!("Ledger file:    {}", paths.transactions_file().display());
        }
    }

    Ok(())
}

fn parse_amount(s: &str) -> Result<Money, SpendliteError> {
    Money::parse(s).map_err(|e| SpendliteError::InvalidRecord(e.to_string()))
}

/// The demo data set: one month of typical activity, dated in the current month
fn sample_entries(today: NaiveDate) -> Vec<RawTransaction> {
    let day = |d: u32| NaiveDate::from_ymd_opt(today.year(), today.month(), d);
    let entry = |kind, category: &str, cents, day_of_month, note: &str| RawTransaction {
        kind,
        category: category.to_string(),
        amount: Money::from_cents(cents),
        date: day(day_of_month),
        note: note.to_string(),
    };

    vec![
        entry(TransactionKind::Income, "Salary", 350000, 1, "Monthly salary"),
        entry(TransactionKind::Expense, "Rent", 120000, 2, ""),
        entry(TransactionKind::Expense, "Groceries", 18045, 5, "Weekly shop"),
        entry(TransactionKind::Expense, "Transport", 6000, 6, "Pass"),
        entry(TransactionKind::Income, "Freelance", 42000, 10, "Side gig"),
        entry(TransactionKind::Expense, "Dining", 4820, 11, ""),
        entry(TransactionKind::Expense, "Utilities", 9510, 12, ""),
    ]
}
