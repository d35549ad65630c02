use crate::cli::Args;
use crate::config::Config;
use crate::error::AppError;
use crate::supervisor::{SupervisorConfig, supervise};
use std::io::{Write, stdout};

/// Layers command line values over the loaded configuration and re-validates.
pub fn apply_cli_overrides(args: &Args, mut config: Config) -> Result<Config, AppError> {
    if let Some(label) = &args.label {
        config.label = label.clone();
    }
    if let Some(interval_ms) = args.interval_ms {
        config.frame_interval_ms = interval_ms;
    }
    if let Some(delay_ms) = args.delay_ms {
        config.delay_ms = delay_ms;
    }
    if let Some(log_file) = &args.log_file {
        config.log_file_path = Some(log_file.clone());
    }

    config.validate()?;
    Ok(config)
}

/// Run the application flow.
///
/// - With `--list-config`, prints the effective configuration and returns
/// - Otherwise animates the spinner on stdout until the answer is ready
/// - Prints `Answer: <result>` once the spinner line has been wiped
pub async fn run(args: &Args, config: &Config) -> Result<(), AppError> {
    if args.list_config {
        config.display();
        return Ok(());
    }

    let result = run_supervised(stdout(), &mut stdout(), &SupervisorConfig::from(config)).await?;
    tracing::info!(result, "Run complete");
    Ok(())
}

/// Supervises one run on `spinner_out`, then reports the answer on `answer_out`.
pub async fn run_supervised<W, A>(
    spinner_out: W,
    answer_out: &mut A,
    config: &SupervisorConfig,
) -> Result<i64, AppError>
where
    W: Write + Send + 'static,
    A: Write,
{
    let result = supervise(spinner_out, config).await?;
    report_answer(answer_out, result)?;
    Ok(result)
}

pub fn report_answer(out: &mut impl Write, result: i64) -> Result<(), AppError> {
    writeln!(out, "Answer: {result}")?;
    out.flush()?;
    Ok(())
}
