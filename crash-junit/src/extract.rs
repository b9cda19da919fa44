// Copyright (c) The nextest Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Turning a [`ScanOutcome`] into the suite, name and log excerpt of the crashed test.

use crate::{
    input::GtestLog,
    scanner::{ScanOutcome, scan},
};
use std::fmt;
use tracing::debug;

/// The suite reported when no crashed test could be identified.
pub const UNKNOWN_SUITE: &str = "UnknownSuite";

/// The test name reported when no crashed test could be identified.
pub const UNKNOWN_TEST: &str = "UnknownTest";

/// The excerpt reported when the log shows no crash.
pub const NO_CRASH_MESSAGE: &str = "No crash detected in test log.";

/// A googletest `Suite.Name` pair.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TestIdentity {
    suite: String,
    name: String,
}

impl TestIdentity {
    /// Creates a new identity from its parts.
    pub fn new(suite: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            suite: suite.into(),
            name: name.into(),
        }
    }

    /// Returns `UnknownSuite.UnknownTest`.
    pub fn unknown() -> Self {
        Self::new(UNKNOWN_SUITE, UNKNOWN_TEST)
    }

    /// Parses the token printed after a RUN marker.
    ///
    /// The token is split on its first `.`, so parameterized names such as `Test/0.Param` keep
    /// their dots. A missing token, or one without a `.`, yields [`Self::unknown`].
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.and_then(|raw| raw.split_once('.')) {
            Some((suite, name)) => Self::new(suite, name),
            None => {
                debug!(
                    "test identity {raw:?} is not of the form Suite.Name, \
                     using {UNKNOWN_SUITE}.{UNKNOWN_TEST}"
                );
                Self::unknown()
            }
        }
    }

    /// The suite, which becomes the JUnit testsuite name and testcase classname.
    pub fn suite(&self) -> &str {
        &self.suite
    }

    /// The test name within the suite.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for TestIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.suite, self.name)
    }
}

/// What a log says about a crash.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CrashSummary {
    /// Every test that started also finished.
    NoCrash,

    /// A test started and never finished.
    Crashed {
        /// The test that was running.
        identity: TestIdentity,

        /// The log lines attributed to the test, terminators included.
        excerpt: String,
    },
}

impl CrashSummary {
    /// Scans `log` and extracts the crashed test, if any.
    pub fn from_log(log: &GtestLog) -> Self {
        let lines = log.lines();
        Self::extract(lines, &scan(lines))
    }

    /// Extracts the crashed test from a scan of `lines`.
    pub fn extract<S: AsRef<str>>(lines: &[S], outcome: &ScanOutcome) -> Self {
        let span = match outcome {
            ScanOutcome::NoCrash => return Self::NoCrash,
            ScanOutcome::Crashed(span) => span,
        };

        // Half-open at the line the scan stopped on. At end of log this drops the final line;
        // existing reports depend on that.
        let half_open_end = span.last_scanned_index;
        let excerpt = lines
            .get(span.run_index..half_open_end)
            .unwrap_or_default()
            .iter()
            .map(|line| line.as_ref())
            .collect::<String>();

        Self::Crashed {
            identity: TestIdentity::parse(span.raw_identity.as_deref()),
            excerpt,
        }
    }

    /// Returns true if a crashed test was found.
    pub fn is_crash(&self) -> bool {
        matches!(self, Self::Crashed { .. })
    }

    /// The identity to report: the crashed test, or `UnknownSuite.UnknownTest`.
    pub fn identity(&self) -> TestIdentity {
        match self {
            Self::NoCrash => TestIdentity::unknown(),
            Self::Crashed { identity, .. } => identity.clone(),
        }
    }

    /// The excerpt to report: the crashed test's log lines, or [`NO_CRASH_MESSAGE`].
    pub fn excerpt(&self) -> &str {
        match self {
            Self::NoCrash => NO_CRASH_MESSAGE,
            Self::Crashed { excerpt, .. } => excerpt,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(Some("FooSuite.Bar"), "FooSuite", "Bar" ; "simple")]
    #[test_case(Some("Suite.Test/0.Param"), "Suite", "Test/0.Param" ; "split on first dot")]
    #[test_case(Some("Inst/Suite.Test/1"), "Inst/Suite", "Test/1" ; "instantiated prefix")]
    #[test_case(Some("NoDot"), UNKNOWN_SUITE, UNKNOWN_TEST ; "no dot")]
    #[test_case(None, UNKNOWN_SUITE, UNKNOWN_TEST ; "missing")]
    fn parse_identity(raw: Option<&str>, suite: &str, name: &str) {
        let identity = TestIdentity::parse(raw);
        assert_eq!(identity.suite(), suite);
        assert_eq!(identity.name(), name);
    }

    fn summarize(text: &str) -> CrashSummary {
        CrashSummary::from_log(&GtestLog::from_text(text))
    }

    #[test]
    fn crash_mid_test() {
        let summary =
            summarize("[==========] Running 2 tests.\n[ RUN      ] FooSuite.Bar\nsome log line\n");
        assert_eq!(
            summary,
            CrashSummary::Crashed {
                identity: TestIdentity::new("FooSuite", "Bar"),
                excerpt: "[ RUN      ] FooSuite.Bar\nsome log line\n".to_owned(),
            }
        );
    }

    #[test]
    fn clean_run() {
        let summary = summarize("[ RUN      ] A.B\nhello\n[       OK ] A.B (1 ms)\n");
        assert_eq!(summary, CrashSummary::NoCrash);
        assert_eq!(summary.identity(), TestIdentity::unknown());
        assert_eq!(summary.excerpt(), NO_CRASH_MESSAGE);
    }

    #[test]
    fn suite_delimiter_is_excluded() {
        let summary = summarize("[ RUN      ] X.Y\nnoise\n[==========] 1 test ran.\n");
        assert_eq!(summary.identity(), TestIdentity::new("X", "Y"));
        assert_eq!(summary.excerpt(), "[ RUN      ] X.Y\nnoise\n");
    }

    #[test]
    fn final_line_dropped_without_trailing_newline() {
        let summary = summarize("[ RUN      ] Suite.Test/0.Param\nboom");
        assert_eq!(summary.identity(), TestIdentity::new("Suite", "Test/0.Param"));
        assert_eq!(summary.excerpt(), "[ RUN      ] Suite.Test/0.Param\n");
    }

    #[test]
    fn run_on_last_line_gives_empty_excerpt() {
        let summary = summarize("[ RUN      ] A.B");
        assert!(summary.is_crash());
        assert_eq!(summary.excerpt(), "");
    }

    #[test]
    fn empty_input() {
        let summary = summarize("");
        assert!(!summary.is_crash());
        assert_eq!(summary.identity().to_string(), "UnknownSuite.UnknownTest");
    }

    #[test]
    fn second_run_excerpt_stops_before_it() {
        let summary = summarize("[ RUN      ] A.First\nboom\n[ RUN      ] A.Second\nmore\n");
        assert_eq!(summary.identity(), TestIdentity::new("A", "First"));
        assert_eq!(summary.excerpt(), "[ RUN      ] A.First\nboom\n");
    }

    #[test]
    fn crashed_without_dot_is_unknown() {
        let summary = summarize("[ RUN      ] Orphan\nboom\n");
        assert!(summary.is_crash());
        assert_eq!(summary.identity(), TestIdentity::unknown());
        assert_eq!(summary.excerpt(), "[ RUN      ] Orphan\nboom\n");
    }

    #[test]
    fn carriage_returns_are_kept() {
        let summary = summarize("[ RUN      ] A.B\r\nline\r\n");
        assert_eq!(summary.identity(), TestIdentity::new("A", "B"));
        assert_eq!(summary.excerpt(), "[ RUN      ] A.B\r\nline\r\n");
    }

    #[test_case(
        "[ RUN      ] X.Y\nnoise\n[==========] 1 test ran.\n",
        "[ RUN      ] X.Y\nnoise\n"
        ; "suite delimiter lf"
    )]
    #[test_case(
        "[ RUN      ] A.B\r\nline\r\n[==========] done\r\n",
        "[ RUN      ] A.B\r\nline\r\n"
        ; "suite delimiter crlf"
    )]
    #[test_case(
        "[ RUN      ] A.First\nboom\n[ RUN      ] A.Second\n",
        "[ RUN      ] A.First\nboom\n"
        ; "next run lf"
    )]
    #[test_case(
        "[ RUN      ] A.First\r\nboom\r\n[ RUN      ] A.Second\r\nmore\r\n",
        "[ RUN      ] A.First\r\nboom\r\n"
        ; "next run crlf"
    )]
    fn excerpt_keeps_line_terminators(log: &str, expected: &str) {
        assert_eq!(summarize(log).excerpt(), expected);
    }
}
