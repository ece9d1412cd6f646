use anyhow::Result;

use ecogrid::{cli::config_path_from_args, config::Config, demo, logging, session::Session};

fn main() -> Result<()> {
    let config_path = config_path_from_args()?;
    let config = Config::load_or_default(&config_path)?;
    let logging_guard = logging::init_tracing(&config.logging)?;
    tracing::info!(
        target: "ecogrid",
        run_id = logging_guard.run_id(),
        config = %config_path.display(),
        "startup"
    );

    let mut session = Session::from_seed(&config.seed)?;
    demo::run(&mut session)?;

    tracing::info!(target: "ecogrid", "shutdown");
    Ok(())
}
