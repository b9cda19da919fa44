// Copyright (c) The nextest Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Reading captured googletest logs.

use crate::errors::ReadLogError;
use camino::Utf8Path;
use tracing::debug;

/// A captured googletest log, split into lines.
///
/// Each line keeps its terminator (`"\n"` or `"\r\n"`). The text after the last `'\n'` is a
/// final line of its own, so a log that ends with a newline has a final empty line and an empty
/// log is a single empty line. Concatenating [`Self::lines`] gives back the decoded text exactly.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GtestLog {
    lines: Vec<String>,
}

impl GtestLog {
    /// Decodes a log from raw bytes.
    ///
    /// Invalid UTF-8 is replaced with U+FFFD rather than rejected.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self::from_text(&String::from_utf8_lossy(bytes))
    }

    /// Splits already-decoded text into lines.
    pub fn from_text(text: &str) -> Self {
        let mut lines: Vec<String> = text.split_inclusive('\n').map(str::to_owned).collect();
        // split_inclusive folds a trailing unterminated segment into the last item, but yields
        // nothing after a final '\n'.
        if text.is_empty() || text.ends_with('\n') {
            lines.push(String::new());
        }
        Self { lines }
    }

    /// Reads and decodes the log at `path`.
    pub fn read(path: &Utf8Path) -> Result<Self, ReadLogError> {
        let bytes = std::fs::read(path).map_err(|error| ReadLogError {
            path: path.to_owned(),
            error,
        })?;
        let log = Self::from_bytes(&bytes);
        debug!(
            "read {} bytes ({} lines) from log `{path}`",
            bytes.len(),
            log.lines.len()
        );
        Ok(log)
    }

    /// Returns the lines of this log.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}
