mod board_view;
mod config;
mod console;

use std::io;
use std::path::PathBuf;

use clap::Parser;
use common::{log, logger};

use config::{CONFIG_FILE, Config, get_config_manager};
use console::Console;

#[derive(Parser)]
#[command(name = "tictactoe_client", about = "Play Tic-Tac-Toe against a minimax computer opponent")]
struct Args {
    /// Path to the YAML config file
    #[arg(long, default_value = CONFIG_FILE)]
    config: PathBuf,

    /// Write diagnostic log lines to stderr
    #[arg(long)]
    verbose: bool,

    #[arg(long)]
    use_log_prefix: bool,

    /// Save the default config to the config path and exit
    #[arg(long)]
    write_default_config: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Client".to_string())
    } else {
        None
    };
    logger::init_logger(prefix, args.verbose);

    let config_manager = get_config_manager(&args.config);

    if args.write_default_config {
        config_manager.set_config(&Config::default())?;
        println!("Default config written to {}", args.config.display());
        return Ok(());
    }

    let config = config_manager.get_config()?;
    log!("Using config from {}: {:?}", args.config.display(), config);

    let stdin = io::stdin();
    let stdout = io::stdout();
    Console::new(stdin.lock(), stdout.lock(), config).run()?;

    Ok(())
}
