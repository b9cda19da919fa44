// Copyright (c) The nextest Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Write a JUnit XML report for the test that crashed a googletest binary.
//!
//! ```text
//! gtest-crash-report <LOG_PATH> <XML_PATH>
//! ```
//!
//! `LOG_PATH` is the captured stdout of a googletest binary. The report written to `XML_PATH`
//! always holds exactly one errored testcase: the test that started and never finished, or
//! `UnknownSuite.UnknownTest` if every test finished. The scanning and rendering live in the
//! [`crash_junit`] crate.

#![warn(missing_docs)]

mod dispatch;
mod errors;
mod exit_codes;
mod output;

#[doc(hidden)]
pub use dispatch::*;
#[doc(hidden)]
pub use errors::*;
pub use exit_codes::CrashReportExitCode;
pub use output::{Color, OutputContext, StderrStyles};
