// Copyright (c) The nextest Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

/// Documented exit codes for `gtest-crash-report` failures.
///
/// Command-line usage errors are reported by clap, which exits with code 2.
pub enum CrashReportExitCode {}

impl CrashReportExitCode {
    /// The report was written. This includes logs where no crash was found.
    pub const OK: i32 = 0;

    /// The input log could not be read.
    pub const READ_LOG_FAILED: i32 = 96;

    /// The output directory or report file could not be written.
    pub const WRITE_REPORT_FAILED: i32 = 110;
}
