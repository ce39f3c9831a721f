use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

use finboard::cli::{
    handle_export_command, handle_seal_command, handle_show_command, handle_verify_command,
    PasswordSource, ShowSection,
};
use finboard::config::{DataSource, FinboardPaths, Settings};

#[derive(Parser)]
#[command(
    name = "finboard",
    version,
    about = "Terminal dashboard for personal finance summaries",
    long_about = "Finboard shows a KPI summary, a monthly series and the current month's \
                  daily activity from a deployment root. Datasets may be sealed with a \
                  password; finboard unlocks them all at once or not at all."
)]
struct Cli {
    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Deployment root directory (contains data/*.json)
    #[arg(long, global = true, conflicts_with = "url")]
    root: Option<PathBuf>,

    /// Deployment root URL
    #[arg(long, global = true)]
    url: Option<String>,

    /// Password for sealed datasets (prompted when omitted)
    #[arg(long, global = true, env = "FINBOARD_PASSWORD", hide_env_values = true)]
    password: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the dashboard as text
    Show {
        /// Which part of the dashboard to print
        #[arg(short, long, value_enum, default_value_t = ShowSection::All)]
        section: ShowSection,
    },

    /// Launch the interactive TUI
    #[command(alias = "ui")]
    Tui,

    /// Seal a directory of plain datasets with a password
    Seal {
        /// Directory holding the plain dataset files
        input: PathBuf,
        /// Deployment root to write data/*.json into
        output: PathBuf,
    },

    /// Check that the password unlocks every dataset
    Verify,

    /// Export the unlocked datasets as JSON
    Export {
        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Single-line JSON
        #[arg(long)]
        compact: bool,
    },

    /// Show current configuration and paths
    Config {
        /// Persist --root/--url as the default source
        #[arg(long)]
        save: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = FinboardPaths::new()?;
    let mut settings = Settings::load(&paths)?;

    let is_tui = matches!(cli.command, Some(Commands::Tui));
    init_logging(cli.verbose, is_tui, &paths)?;

    if let Some(root) = cli.root {
        settings.source = DataSource::Directory { root };
    } else if let Some(base) = cli.url {
        settings.source = DataSource::Url { base };
    }

    let password = PasswordSource::from_option(cli.password);

    match cli.command {
        Some(Commands::Show { section }) => {
            let loader = settings.loader()?;
            handle_show_command(&loader, &settings, &password, section)?;
        }
        Some(Commands::Tui) => {
            let loader = settings.loader()?;
            finboard::tui::run_tui(&settings, &loader)?;
        }
        Some(Commands::Seal { input, output }) => {
            handle_seal_command(&input, &output, &password)?;
        }
        Some(Commands::Verify) => {
            let loader = settings.loader()?;
            handle_verify_command(&loader, &password)?;
        }
        Some(Commands::Export { output, compact }) => {
            let loader = settings.loader()?;
            handle_export_command(&loader, &password, output, compact)?;
        }
        Some(Commands::Config { save }) => {
            if save {
                settings.save(&paths)?;
                println!("Saved settings to {}", paths.settings_file().display());
                println!();
            }
            println!("Finboard Configuration");
            println!("======================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Log file:         {}", paths.log_file().display());
            println!();
            println!("Settings:");
            println!("  Source:          {}", settings.source);
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Request timeout: {}s", settings.request_timeout().as_secs());
        }
        None => {
            println!("Finboard - personal finance dashboard");
            println!();
            println!("Run 'finboard --help' for usage information.");
            println!("Run 'finboard tui' to launch the interactive interface.");
        }
    }

    Ok(())
}

/// Set up tracing
///
/// `FINBOARD_LOG` overrides the level picked from `-v`. The TUI owns the
/// terminal, so it logs to a file instead of stderr.
fn init_logging(verbose: u8, to_file: bool, paths: &FinboardPaths) -> Result<()> {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_env("FINBOARD_LOG")
        .unwrap_or_else(|_| EnvFilter::new(format!("finboard={}", default_level)));

    if to_file {
        paths.ensure_directories()?;
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(paths.log_file())?;
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .without_time()
            .init();
    }

    Ok(())
}
