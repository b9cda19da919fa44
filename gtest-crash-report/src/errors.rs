// Copyright (c) The nextest Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{CrashReportExitCode, StderrStyles};
use crash_junit::errors::{ReadLogError, WriteReportError};
use owo_colors::OwoColorize;
use std::error::Error;
use swrite::{SWrite, swrite};
use thiserror::Error;

pub(crate) type Result<T, E = ExpectedError> = std::result::Result<T, E>;

// Note that the #[error()] strings are mostly placeholder messages -- the expected way to print out
// errors is with the display_to_stderr method, which colorizes errors.

/// An expected failure of `gtest-crash-report`.
#[derive(Debug, Error)]
#[doc(hidden)]
pub enum ExpectedError {
    #[error("failed to read log file")]
    ReadLogFailed {
        #[from]
        err: ReadLogError,
    },
    #[error("failed to write report")]
    WriteReportFailed {
        #[from]
        err: WriteReportError,
    },
}

impl ExpectedError {
    /// Returns the exit code for the process.
    pub fn process_exit_code(&self) -> i32 {
        match self {
            Self::ReadLogFailed { .. } => CrashReportExitCode::READ_LOG_FAILED,
            Self::WriteReportFailed { .. } => CrashReportExitCode::WRITE_REPORT_FAILED,
        }
    }

    /// Displays this error to stderr as a single line.
    pub fn display_to_stderr(&self, styles: &StderrStyles) {
        let (mut message, mut next_error) = match self {
            Self::ReadLogFailed { err } => (
                format!("failed to read log file `{}`", err.path.style(styles.bold)),
                err.source(),
            ),
            Self::WriteReportFailed { err } => {
                let message = match err {
                    WriteReportError::Fs { file, .. } => {
                        format!("failed to write report to `{}`", file.style(styles.bold))
                    }
                    WriteReportError::Serialize { file, .. } => {
                        format!("failed to serialize report to `{}`", file.style(styles.bold))
                    }
                    _ => format!("failed to write report to `{}`", err.path().style(styles.bold)),
                };
                (message, err.source())
            }
        };

        while let Some(err) = next_error {
            swrite!(message, ": {err}");
            next_error = err.source();
        }

        tracing::error!("{message}");
    }
}
