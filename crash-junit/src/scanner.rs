// Copyright (c) The nextest Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! A single forward pass over a googletest log that tracks which test is running.
//!
//! googletest prints a RUN marker when a test starts and one of the end markers when it finishes.
//! A test whose RUN marker is never followed by an end marker is the one that was executing when
//! the process died.

use std::fmt;
use tracing::debug;

/// Printed by googletest when a test starts. Matched anywhere in a line.
pub const RUN_MARKER: &str = "[ RUN      ]";

/// Printed by googletest around a test suite. Matched anywhere in a line.
pub const SUITE_DELIMITER: &str = "[==========]";

/// Printed by googletest when a test finishes. Matched only at the start of a line.
pub const END_MARKERS: [&str; 3] = ["[       OK ]", "[  FAILED  ]", "[  SKIPPED ]"];

/// The result of [`scan`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScanOutcome {
    /// No test was running when the scan finished.
    NoCrash,

    /// A test started and never finished.
    Crashed(CrashSpan),
}

/// Where in the log a crashed test was found.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CrashSpan {
    /// The index of the line holding the RUN marker.
    pub run_index: usize,

    /// The index of the line the scan stopped on.
    ///
    /// For [`ScanStop::EndOfLog`] this is the index of the final line.
    pub last_scanned_index: usize,

    /// The first whitespace-separated token after the RUN marker, if any.
    pub raw_identity: Option<String>,

    /// Why the scan stopped.
    pub stop: ScanStop,
}

/// The reason a scan stopped with a test still running.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ScanStop {
    /// The log ran out.
    EndOfLog,

    /// A suite delimiter appeared before the test finished.
    SuiteDelimiter,

    /// Another RUN marker appeared before the test finished.
    NextRun,
}

impl fmt::Display for ScanStop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EndOfLog => write!(f, "end of log"),
            Self::SuiteDelimiter => write!(f, "suite delimiter"),
            Self::NextRun => write!(f, "next RUN marker"),
        }
    }
}

struct RunningTest {
    run_index: usize,
    raw_identity: Option<String>,
}

/// Scans `lines` for a test that started and never finished.
///
/// The first unterminated test wins: a second RUN marker while a test is running stops the scan
/// on the second marker's line.
pub fn scan<S: AsRef<str>>(lines: &[S]) -> ScanOutcome {
    let mut running: Option<RunningTest> = None;

    for (idx, line) in lines.iter().enumerate() {
        let line = line.as_ref();
        if line.contains(RUN_MARKER) {
            if let Some(test) = running.take() {
                return crashed(test, idx, ScanStop::NextRun);
            }
            running = Some(RunningTest {
                run_index: idx,
                raw_identity: raw_identity(line),
            });
        } else if let Some(test) = running.take_if(|_| line.contains(SUITE_DELIMITER)) {
            return crashed(test, idx, ScanStop::SuiteDelimiter);
        } else if END_MARKERS.iter().any(|marker| line.starts_with(marker)) {
            running = None;
        }
    }

    match running {
        Some(test) => crashed(test, lines.len().saturating_sub(1), ScanStop::EndOfLog),
        None => {
            debug!("scanned {} lines, no test left running", lines.len());
            ScanOutcome::NoCrash
        }
    }
}

fn crashed(test: RunningTest, last_scanned_index: usize, stop: ScanStop) -> ScanOutcome {
    debug!(
        "test {:?} started on line {} and was still running at {stop} (line {last_scanned_index})",
        test.raw_identity, test.run_index,
    );
    ScanOutcome::Crashed(CrashSpan {
        run_index: test.run_index,
        last_scanned_index,
        raw_identity: test.raw_identity,
        stop,
    })
}

fn raw_identity(line: &str) -> Option<String> {
    let (_, rest) = line.split_once(RUN_MARKER)?;
    rest.split_whitespace().next().map(str::to_owned)
}
