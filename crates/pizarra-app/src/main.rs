//! Headless replay entry point.

use clap::Parser;
use pizarra_app::{AppConfig, AppResult, Script, Whiteboard};
use std::path::PathBuf;

/// Replay a recorded whiteboard session and export the result as PNG.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// JSON script of toolbar and pointer actions.
    #[arg(short, long)]
    script: PathBuf,
    /// JSON configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Export path for actions that do not name one.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn run(args: &Args) -> AppResult<()> {
    let config = match &args.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.export_file_name));

    let mut board = Whiteboard::new(&config)?;
    let script = Script::load(&args.script)?;
    let written = script.run(&mut board, &output)?;
    log::info!(
        "Replayed {} actions, {} strokes committed, {} files written",
        script.actions.len(),
        board.session().committed().len(),
        written.len()
    );
    Ok(())
}

fn main() {
    env_logger::init();
    log::info!("Starting Pizarra");

    let args = Args::parse();
    if let Err(e) = run(&args) {
        log::error!("{e}");
        std::process::exit(1);
    }
}
