use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

mod commands;

#[derive(Parser)]
#[command(name = "rollcall")]
#[command(author, version, about, long_about = None)]
#[command(
    about = "Extract employee records from a directory page in a running browser",
    long_about = "Rollcall attaches to an already-running Chromium browser over its remote \
                  debugging port, loads an employee directory page, extracts whatever records \
                  it can find, and saves them to an xlsx spreadsheet. The browser is never \
                  launched or closed by this tool."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Attach to the browser, scrape the directory page, save the roster
    Extract {
        /// Remote debugging port the browser is listening on
        #[arg(short, long, default_value_t = 9222)]
        port: u16,

        /// Directory page to scrape
        #[arg(short, long, default_value = commands::extract::DEFAULT_URL)]
        url: url::Url,

        /// Output spreadsheet path (default: employee_data_<timestamp>.xlsx)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// JSON file overriding the built-in element locators
        #[arg(long, value_name = "FILE")]
        locators: Option<PathBuf>,

        /// Maximum seconds to wait for the directory list to render
        #[arg(long, default_value_t = 10)]
        wait_timeout: u64,
    },

    /// Print the built-in locator set as JSON (editable template for --locators)
    Locators,

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    match cli.command {
        Commands::Extract {
            port,
            url,
            output,
            locators,
            wait_timeout,
        } => commands::extract::execute(port, &url, output, locators, wait_timeout),
        Commands::Locators => commands::locators::execute(),
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            commands::completion::execute(shell, &mut cmd)
        }
    }
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("rollcall=debug,rollcall_core=debug,rollcall_browser=debug")
    } else {
        EnvFilter::new("rollcall=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();
}
