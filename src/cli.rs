use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Spinner while you wait
///
/// Runs a slow computation while a `| / - \` spinner animates on the current
/// line. When the computation finishes the spinner is wiped and the answer
/// is printed.
///
/// Command line values take precedence over the config file and environment.
#[derive(Parser, Debug, Default)]
#[command(about, long_about = None)]
#[command(styles = get_styles())]
pub struct Args {
    /// Text shown next to the spinning glyph.
    #[arg(long, short = 'l', help_heading = "Display Options")]
    pub label: Option<String>,

    /// Pause between animation frames in milliseconds.
    #[arg(long = "interval-ms", help_heading = "Display Options")]
    pub interval_ms: Option<u64>,

    /// How long the slow computation takes in milliseconds.
    #[arg(long = "delay-ms", help_heading = "Display Options")]
    pub delay_ms: Option<u64>,

    /// List current configuration settings and exit.
    #[arg(long = "list-config", help_heading = "Configuration")]
    pub list_config: bool,

    /// Also write logs to stderr. Stdout is reserved for the spinner and the answer.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}
