//! Error type for the `depositor` binary.

use depositor::error::DepositorError;
use thiserror::Error;

/// Result alias used throughout the binary.
pub type Result<T> = core::result::Result<T, DepositorCliError>;

/// Everything that can stop a command.
#[derive(Error, Debug)]
pub enum DepositorCliError {
  /// Failure inside the library: configuration, rendering or writing output.
  #[error(transparent)]
  Depositor(#[from] DepositorError),

  /// The output directory is unusable.
  #[error("Output directory {0:?} does not exist")]
  MissingOutputDir(std::path::PathBuf),
}
