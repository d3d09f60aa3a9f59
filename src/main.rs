use log::info;
use std::path::Path;
use tiendatech::cli;
use tiendatech::config::Config;
use tiendatech::error::{self, Result};
use tiendatech::logging;

/// Initialize simple console logging for lightweight commands
fn init_simple_logging(verbose: bool, quiet: bool) {
    let level = if verbose {
        "debug"
    } else if quiet {
        "error"
    } else {
        "info"
    };
    env_logger::Builder::from_default_env()
        .filter_level(match level {
            "debug" => log::LevelFilter::Debug,
            "error" => log::LevelFilter::Error,
            _ => log::LevelFilter::Info,
        })
        .init();
}

fn main() -> Result<()> {
    use clap::Parser;
    let cli = cli::opts::Cli::parse();

    match &cli.command {
        Some(cli::opts::Commands::Init { output, force }) => {
            init_simple_logging(cli.verbose, cli.quiet);
            cli::init::handle_init(output, *force)
        }
        Some(cli::opts::Commands::Completions { shell }) => {
            cli::opts::Cli::generate_completions(*shell);
            Ok(())
        }
        #[cfg(feature = "chart")]
        Some(cli::opts::Commands::Chart {
            config,
            output,
            open,
        }) => {
            init_simple_logging(cli.verbose, cli.quiet);
            let cfg = load_config(config)?;
            cfg.validate()?;
            cli::chart::handle_chart(&cfg, output.as_deref(), *open)
        }
        Some(cli::opts::Commands::Run { config }) => {
            let mut cfg = load_config(config)?;
            cfg.validate()?;

            if cli.verbose {
                cfg.logging.level = "debug".to_string();
            } else if cli.quiet {
                cfg.logging.level = "error".to_string();
            }

            logging::init_logging(&cfg.logging)?;
            info!("Application started");

            cli::run::handle_run(&cfg)
        }
        Some(cli::opts::Commands::Validate { config }) => {
            let mut cfg = load_config(config)?;
            cfg.validate()?;
            eprintln!("Configuration validation passed");

            if cli.verbose {
                cfg.logging.level = "debug".to_string();
            } else if cli.quiet {
                cfg.logging.level = "error".to_string();
            }

            logging::init_logging(&cfg.logging)?;
            info!("Application started");

            cli::validate::handle_validate(&cfg)
        }
        None => {
            print_help();
            std::process::exit(1);
        }
    }
}

fn load_config(config_path: &str) -> Result<Config> {
    let path = Path::new(config_path);
    match Config::from_file(path) {
        Ok(c) => {
            eprintln!("Loaded configuration file: {config_path}");
            Ok(c)
        }
        Err(e) => {
            if let error::Error::Config(error::ConfigError::NotFound(_)) = &e {
                eprintln!(
                    "Configuration file not found: {config_path}, using default configuration"
                );
                eprintln!("Tip: run 'tiendatech init' to generate a configuration file");
                Ok(Config::default())
            } else {
                Err(e)
            }
        }
    }
}

fn print_help() {
    eprintln!("\n━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    eprintln!("tiendatech - TiendaTech Store Reporting CLI");
    eprintln!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    eprintln!("\nUsage: tiendatech <COMMAND> [OPTIONS]");
    eprintln!("\nCommands:");
    eprintln!("  run          Connect and start the interactive reporting menu");
    #[cfg(feature = "chart")]
    eprintln!("  chart        Render the voltage/current calibration chart");
    eprintln!("  init         Generate a default configuration file");
    eprintln!("  validate     Validate a configuration file");
    eprintln!("  completions  Generate shell completion scripts");
    eprintln!("\nOptions:");
    eprintln!("  -v, --verbose   Enable verbose output (debug level)");
    eprintln!("  -q, --quiet     Suppress non-error output");
    eprintln!("  -h, --help      Print help information");
    eprintln!("  -V, --version   Print version information");
    eprintln!("\nExamples:");
    eprintln!("  # Initialize configuration");
    eprintln!("  tiendatech init");
    eprintln!("\n  # Start the reporting menu with default config");
    eprintln!("  tiendatech run");
    #[cfg(feature = "chart")]
    {
        eprintln!("\n  # Render the calibration chart and open it");
        eprintln!("  tiendatech chart --open");
    }
    eprintln!("\n  # Validate configuration");
    eprintln!("  tiendatech validate -c config.toml");
    eprintln!("\nFor more help: tiendatech --help");
    eprintln!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n");
}
