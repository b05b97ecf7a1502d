mod cli;
mod logging;

use std::io;
use std::process::ExitCode;

use calc_config::CalcConfig;
use calc_core::{Console, Session};

fn main() -> ExitCode {
    let args = cli::parse();

    // Config decides the default log level, so load it under a temporary
    // subscriber to keep its diagnostics.
    let loaded = tracing::subscriber::with_default(
        logging::bootstrap_subscriber(args.log_level.as_deref()),
        || calc_config::load_config(args.config.as_deref()),
    );
    let config_level = loaded
        .as_ref()
        .map(|c| c.logging.level)
        .unwrap_or_default();
    logging::init(args.log_level.as_deref(), config_level);

    let config = loaded.unwrap_or_else(|e| {
        tracing::warn!("config load failed, using defaults: {e}");
        CalcConfig::default()
    });

    if args.print_config {
        println!("{}", calc_config::config_to_json(&config));
        return ExitCode::SUCCESS;
    }

    tracing::info!("calc v{} starting", env!("CARGO_PKG_VERSION"));

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session =
        Session::new(Console::new(stdin.lock(), stdout.lock())).with_title(config.menu.title);

    match session.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("console error: {e}");
            ExitCode::FAILURE
        }
    }
}
