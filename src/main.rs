use std::fs::OpenOptions;
use std::io;
use std::path::Path;

use clap::Parser;

use donut_term::cli::{handle_config_action, Args, Command};
use donut_term::config::Config;
use donut_term::error::EXIT_CONFIG;
use donut_term::session::run_session;
use donut_term::signal::{setup_termination_handler, CtrlcSignal};
use donut_term::terminal::TerminalViewport;

/// Initialise logging; default filter is "warn" if RUST_LOG is not set.
///
/// Log lines share the terminal with the animation, so `--log-file` sends
/// them somewhere harmless instead.
fn init_logging(log_file: Option<&Path>) -> io::Result<()> {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if let Some(path) = log_file {
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(path)?;
        builder
            .format_timestamp_micros()
            .target(env_logger::Target::Pipe(Box::new(file)));
    }
    builder.init();
    Ok(())
}

fn main() {
    let args = Args::parse();

    if let Err(e) = init_logging(args.log_file.as_deref()) {
        eprintln!("Error: failed to open log file: {}", e);
        std::process::exit(EXIT_CONFIG);
    }

    let overrides = args.overrides();

    if let Some(Command::Config { action }) = args.command {
        let code = handle_config_action(action, args.config.as_deref(), &overrides);
        std::process::exit(code);
    }

    let settings = match Config::load(args.config.as_deref()).and_then(|c| c.resolve(&overrides)) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };
    log::info!("settings: {:?}", settings);

    if let Err(e) = setup_termination_handler() {
        eprintln!("Error: failed to install signal handler: {}", e);
        std::process::exit(EXIT_CONFIG);
    }

    let code = run_session(settings, TerminalViewport::stdout(), CtrlcSignal, io::stdout());
    std::process::exit(code);
}
