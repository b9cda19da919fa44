// Copyright (c) The nextest Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

#![warn(missing_docs)]

//! Find the test that crashed a googletest binary and describe it as a JUnit report.
//!
//! A googletest binary that dies mid-run leaves behind a log whose last RUN marker was never
//! followed by an end marker. This crate reads such a log ([`GtestLog`]), finds that test
//! ([`scanner::scan`] and [`CrashSummary`]), and renders a single-testcase JUnit report for it
//! ([`CrashReport`]) with the test's log lines embedded as CDATA.
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use crash_junit::{CrashReport, CrashSummary, GtestLog};
//!
//! let log = GtestLog::from_text("[ RUN      ] FooSuite.Bar\nsome log line\n");
//! let summary = CrashSummary::from_log(&log);
//! assert_eq!(summary.identity().to_string(), "FooSuite.Bar");
//!
//! let timestamp = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
//! let xml = CrashReport::new(&summary, timestamp).to_string().unwrap();
//! assert!(xml.contains(r#"<testcase name="Bar" classname="FooSuite" time="0">"#));
//! ```

pub mod errors;
mod extract;
mod input;
mod report;
pub mod scanner;
mod serialize;

pub use extract::*;
pub use input::GtestLog;
pub use report::*;
