//! CLI entry and dispatch.

use anyhow::{Context, Result};
use clap::Parser;
use flipform_core::FormMode;
use flipform_core::config::{Config, paths};
use flipform_core::logging;

mod commands;

#[derive(Parser)]
#[command(name = "flipform")]
#[command(version)]
#[command(about = "Flip-animated login card over a starfield")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Number of background stars (overrides config)
    #[arg(long, global = true, value_name = "N")]
    stars: Option<usize>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Render a single frame and print it as plain text
    Preview {
        /// Form mode to render (login or register)
        #[arg(long, default_value = "login")]
        mode: FormMode,

        /// Frame width in columns
        #[arg(long, default_value_t = 80)]
        width: u16,

        /// Frame height in rows
        #[arg(long, default_value_t = 24)]
        height: u16,
    },

    /// List the decorative star positions
    Stars {
        /// Number of points (defaults to the configured star count)
        #[arg(long, value_name = "N")]
        count: Option<usize>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Show the path to the config file
    Path,
    /// Initialize a default config file (if not present)
    Init,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load().context("load config")?;
    if let Some(stars) = cli.stars {
        config.star_count = stars;
    }

    let _log_guard = match logging::init(&config) {
        Ok(guard) => Some(guard),
        Err(err) => {
            eprintln!("Warning: file logging disabled: {err:#}");
            None
        }
    };

    tracing::debug!(
        path = %paths::config_path().display(),
        stars = config.star_count,
        "config loaded"
    );

    dispatch(cli.command, &config)
}

fn dispatch(command: Option<Commands>, config: &Config) -> Result<()> {
    // default to the interactive form
    let Some(command) = command else {
        return commands::run::run(config);
    };

    match command {
        Commands::Preview {
            mode,
            width,
            height,
        } => commands::preview::run(config, mode, width, height),

        Commands::Stars { count, json } => {
            commands::stars::run(count.unwrap_or(config.star_count), json)
        }

        Commands::Config { command } => match command {
            ConfigCommands::Path => {
                commands::config::path();
                Ok(())
            }
            ConfigCommands::Init => commands::config::init(),
        },
    }
}
