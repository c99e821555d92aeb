use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;
use urchin::replay::ReplayDisplayServer;
use urchin::utils::log::setup_logging;
use urchin::FileConfig;
use urchin_core::{ExitReason, Manager};

/// Feed a script of display events through the window manager core and print the
/// resulting state as JSON.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Event script, one JSON encoded event per line. Reads stdin when omitted.
    script: Option<PathBuf>,

    /// Configuration file to use instead of `$XDG_CONFIG_HOME/urchin/config.toml`
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log at debug level unless `URCHIN_LOG` says otherwise
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    setup_logging(args.verbose);

    let config = urchin::load(args.config.as_deref()).context("couldn't load the configuration")?;
    let reason = match &args.script {
        Some(path) => {
            let file =
                File::open(path).with_context(|| format!("couldn't open {}", path.display()))?;
            replay(config, BufReader::new(file))?
        }
        None => replay(config, io::stdin().lock())?,
    };
    tracing::info!("Event loop finished: {:?}", reason);
    Ok(())
}

fn replay<R: BufRead>(config: FileConfig, reader: R) -> Result<ExitReason> {
    let mut manager = Manager::new(config, ReplayDisplayServer::new(reader));
    let reason = manager.event_loop().context("the window manager stopped")?;
    let state = serde_json::to_string_pretty(&manager.manager_state())?;
    println!("{state}");
    Ok(reason)
}
