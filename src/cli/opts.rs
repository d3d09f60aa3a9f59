use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{Shell, generate};

/// Reporting tool for the TiendaTech store database
#[derive(Debug, Parser)]
#[command(
    name = "tiendatech",
    version,
    about = "Interactive reporting menu over a TiendaTech PostgreSQL database",
    long_about = "A small single-connection CLI for the TiendaTech store schema: table listing, \
customer spend rankings, category hierarchy, best sellers, stock checks, plus a voltage/current \
calibration scatter chart."
)]
pub struct Cli {
    /// Enable verbose output (debug level)
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    /// Suppress non-error output (error level only)
    #[arg(short = 'q', long = "quiet", global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Connect to the database and run the interactive reporting menu
    Run {
        /// Configuration file path
        #[arg(short = 'c', long = "config", default_value = "config.toml")]
        config: String,
    },
    /// Render the voltage/current calibration scatter chart
    #[cfg(feature = "chart")]
    Chart {
        /// Configuration file path
        #[arg(short = 'c', long = "config", default_value = "config.toml")]
        config: String,
        /// Output HTML path (overrides the configured one)
        #[arg(short = 'o', long = "output")]
        output: Option<String>,
        /// Open the rendered chart in the default browser
        #[arg(long = "open")]
        open: bool,
    },
    /// Generate a default configuration file
    Init {
        /// Output configuration file path
        #[arg(short = 'o', long = "output", default_value = "config.toml")]
        output: String,
        /// Force overwrite if file exists
        #[arg(short = 'f', long = "force")]
        force: bool,
    },
    /// Validate a configuration file
    Validate {
        /// Configuration file path
        #[arg(short = 'c', long = "config", default_value = "config.toml")]
        config: String,
    },
    /// Generate shell completion scripts
    Completions {
        /// Shell type to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl Cli {
    /// Generate shell completions
    pub fn generate_completions(shell: Shell) {
        let mut cmd = Cli::command();
        let bin_name = cmd.get_name().to_string();
        generate(shell, &mut cmd, bin_name, &mut std::io::stdout());
    }
}
