// Copyright (c) The nextest Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{
    CrashReportExitCode, OutputContext,
    errors::Result,
    output::{OutputOpts, help_styles},
};
use camino::Utf8PathBuf;
use chrono::{DateTime, Utc};
use clap::Parser;
use crash_junit::{CrashReport, CrashSummary, GtestLog, create_parent_dirs};
use tracing::debug;

/// Write a JUnit XML report for the test that crashed a googletest binary.
///
/// Scans LOG_PATH for a test whose RUN marker was never followed by an OK, FAILED or SKIPPED
/// marker, and writes a single errored testcase for it to XML_PATH. If every test finished, the
/// report names UnknownSuite.UnknownTest instead.
///
/// Pass paths that start with `-` after `--`, as in `gtest-crash-report -- -run.log report.xml`.
#[derive(Debug, Parser)]
#[command(version, styles = help_styles())]
pub struct GtestCrashReportApp {
    /// Captured stdout of the googletest binary
    #[arg(value_name = "LOG_PATH")]
    log_path: Utf8PathBuf,

    /// Where to write the JUnit XML report (parent directories are created)
    #[arg(value_name = "XML_PATH")]
    xml_path: Utf8PathBuf,

    /// Record this RFC 3339 time in the report instead of the current time
    #[arg(long, hide = true, value_name = "TIMESTAMP")]
    timestamp: Option<DateTime<Utc>>,

    #[command(flatten)]
    output: OutputOpts,
}

impl GtestCrashReportApp {
    /// Initializes logging and color output.
    pub fn init_output(&self) -> OutputContext {
        self.output.init()
    }

    /// Executes the app, returning the process exit code on success.
    pub fn exec(self) -> Result<i32> {
        create_parent_dirs(&self.xml_path)?;

        let log = GtestLog::read(&self.log_path)?;
        let summary = CrashSummary::from_log(&log);
        match &summary {
            CrashSummary::NoCrash => debug!("no crashed test found in `{}`", self.log_path),
            CrashSummary::Crashed { identity, excerpt } => debug!(
                "test {identity} crashed, excerpt is {} bytes",
                excerpt.len()
            ),
        }

        let timestamp = self.timestamp.unwrap_or_else(Utc::now);
        CrashReport::new(&summary, timestamp).write_to_path(&self.xml_path)?;

        Ok(CrashReportExitCode::OK)
    }
}
