use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use finance_ledger::app::App;
use finance_ledger::cli::{Console, Menu};
use finance_ledger::config::paths::{LedgerPaths, DATA_DIR_ENV};
use finance_ledger::config::settings::Settings;
use finance_ledger::storage::initialize_storage;

#[derive(Parser)]
#[command(
    name = "finance",
    author = "Kaylee Beyene",
    version,
    about = "PIN-protected personal finance ledger",
    long_about = "Record income, expenses and savings for PIN-protected accounts \
                  and check balances and monthly summaries from an interactive menu."
)]
struct Cli {
    /// Directory holding the ledger files
    #[arg(long, global = true, env = DATA_DIR_ENV)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the interactive menu (default)
    Menu,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let paths = match cli.data_dir {
        Some(dir) => LedgerPaths::with_base_dir(dir),
        None => LedgerPaths::new()?,
    };

    match cli.command.unwrap_or(Commands::Menu) {
        Commands::Menu => {
            let mut app = App::open(paths)?;
            let mut console = Console::new();
            let mut out = io::stdout();
            Menu::new(&mut app, &mut console, &mut out).run()?;
        }
        Commands::Config => {
            let settings = Settings::load_or_create(&paths)?;
            initialize_storage(&paths, &settings)?;

            println!("Finance Ledger Configuration");
            println!("============================");
            println!("Data directory:   {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Account file:     {}", paths.account_file().display());
            println!("Transaction file: {}", paths.finance_file().display());
            println!("Audit log:        {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Max transactions: {}", settings.max_transactions);
            println!("  Max PIN attempts: {}", settings.max_pin_attempts);
            println!("  Block overdraft:  {}", settings.block_overdraft);
            println!("  Currency symbol:  {}", settings.currency_symbol);
        }
    }

    Ok(())
}
