// src/main.rs
use clap::Parser;
use spinwait::app;
use spinwait::cli::Args;
use spinwait::config::Config;
use spinwait::error::AppError;
use spinwait::logging::setup_logging;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    let config = app::apply_cli_overrides(&args, Config::load().await?)?;

    // Keep the guard alive until main returns so buffered log lines get flushed
    let (log_file_path, _guard) =
        setup_logging(config.log_file_path.as_deref(), args.debug).await?;
    tracing::info!("Logs are being written to: {log_file_path}");

    app::run(&args, &config).await
}
