use clap::{Parser, Subcommand};
use log::info;
use std::path::PathBuf;

use lumi_teamcity::{runner, utils};

#[derive(Parser)]
#[command(name = "lumi-teamcity")]
#[command(author = "NL Team")]
#[command(version)]
#[command(about = "TeamCity service message reporter for test runs", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a recorded event log as TeamCity service messages
    Replay {
        /// Event log (JSON Lines, or YAML for .yaml/.yml). Use "-" for stdin.
        events: PathBuf,

        /// Write messages to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Scheme prepended to location hints
        #[arg(long, default_value = utils::config::DEFAULT_LOCATION_SCHEME)]
        scheme: String,

        /// Product name shown in the banner
        #[arg(long, default_value = utils::config::DEFAULT_PRODUCT_NAME)]
        product: String,

        /// Do not print human-readable progress next to the messages
        #[arg(long, default_value = "false")]
        no_console: bool,

        /// Force colored console output on or off
        #[arg(long)]
        color: Option<bool>,
    },
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout stays a clean message stream
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Replay {
            events,
            output,
            scheme,
            product,
            no_console,
            color,
        } => {
            let mut config = utils::config::Config::default()
                .with_location_scheme(scheme)
                .with_product_name(product);
            if let Some(color) = color {
                config = config.with_colors(color);
            }

            info!("Replaying events from: {}", events.display());
            if let Some(ref path) = output {
                info!("Output: {}", path.display());
            }

            runner::run_replay(&events, output.as_deref(), !no_console, config)?;
        }
    }

    Ok(())
}
