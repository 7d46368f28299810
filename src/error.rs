// SPDX-License-Identifier: MIT
// Errors for the configuration surface. The distance kernel itself is total.

use thiserror::Error;

/// Errors that can occur while building distance options.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A normalized cutoff must be a finite value in `[0.0, 1.0]`.
    #[error("invalid score cutoff {0}: expected a value between 0.0 and 1.0")]
    InvalidCutoff(f64),
}

pub type Result<T> = std::result::Result<T, Error>;
