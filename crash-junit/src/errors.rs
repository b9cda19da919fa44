// Copyright (c) The nextest Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Errors produced by crash-junit.

use camino::{Utf8Path, Utf8PathBuf};
use thiserror::Error;

/// An error that occurred while reading a googletest log.
///
/// Returned by [`GtestLog::read`](crate::GtestLog::read).
#[derive(Debug, Error)]
#[error("error reading log file {path}")]
pub struct ReadLogError {
    /// The log file that couldn't be read.
    pub path: Utf8PathBuf,

    /// The underlying IO error.
    #[source]
    pub error: std::io::Error,
}

/// An error that occurs while serializing a [`CrashReport`](crate::CrashReport).
#[derive(Debug, Error)]
#[error("error serializing JUnit report")]
pub struct SerializeError {
    #[from]
    inner: quick_xml::Error,
}

/// An error that occurred while writing a [`CrashReport`](crate::CrashReport) to disk.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum WriteReportError {
    /// An error occurred while operating on the file system.
    #[error("error operating on path {file}")]
    Fs {
        /// The file or directory being operated on.
        file: Utf8PathBuf,

        /// The underlying IO error.
        #[source]
        error: std::io::Error,
    },

    /// An error occurred while producing JUnit XML.
    #[error("error writing JUnit output to {file}")]
    Serialize {
        /// The output file.
        file: Utf8PathBuf,

        /// The underlying serialization error.
        #[source]
        error: SerializeError,
    },
}

impl WriteReportError {
    /// Returns the path this error relates to.
    pub fn path(&self) -> &Utf8Path {
        match self {
            Self::Fs { file, .. } | Self::Serialize { file, .. } => file.as_path(),
        }
    }
}
