//! Spinner while you wait
//!
//! This library runs a slow computation while a terminal spinner animates on the
//! current line, then stops the spinner, wipes its line and hands back the result.
//!
//! # Examples
//!
//! ```rust,no_run
//! use spinwait::error::AppError;
//! use spinwait::supervisor::{SupervisorConfig, supervise};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), AppError> {
//!     let answer = supervise(std::io::stdout(), &SupervisorConfig::default()).await?;
//!     println!("Answer: {answer}");
//!     Ok(())
//! }
//! ```

pub mod app;
pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod slow;
pub mod spinner;
pub mod supervisor;
pub mod testing_utils;

// Re-export commonly used types for convenience
pub use config::Config;
pub use error::AppError;
pub use slow::slow_function;
pub use spinner::{SpinnerHandle, SpinnerState};
pub use supervisor::{SupervisorConfig, supervise};
