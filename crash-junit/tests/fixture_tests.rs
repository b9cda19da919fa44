// Copyright (c) The nextest Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use chrono::{TimeZone, Utc};
use crash_junit::{CrashReport, CrashSummary, GtestLog, TestIdentity};
use goldenfile::Mint;

#[test]
fn fixtures() {
    let mut mint = Mint::new("tests/fixtures");

    let f = mint
        .new_goldenfile("crash_report.xml")
        .expect("creating new goldenfile succeeds");
    crash_report()
        .serialize(f)
        .expect("serializing crash_report succeeds");

    let f = mint
        .new_goldenfile("no_crash_report.xml")
        .expect("creating new goldenfile succeeds");
    no_crash_report()
        .serialize(f)
        .expect("serializing no_crash_report succeeds");
}

fn crash_report() -> CrashReport {
    let summary = CrashSummary::Crashed {
        identity: TestIdentity::new("Suite<T>", "Test/0.\"Param\""),
        excerpt: "[ RUN      ] Suite<T>.Test/0.\"Param\"\nsaw ]]> in output".to_owned(),
    };
    CrashReport::new(
        &summary,
        Utc.with_ymd_and_hms(2021, 6, 15, 8, 0, 0).unwrap(),
    )
}

fn no_crash_report() -> CrashReport {
    let log = GtestLog::from_text(
        "[==========] Running 1 test from 1 test suite.\n\
         [ RUN      ] A.B\n\
         [       OK ] A.B (0 ms)\n\
         [==========] 1 test from 1 test suite ran. (0 ms total)\n",
    );
    CrashReport::new(
        &CrashSummary::from_log(&log),
        Utc.with_ymd_and_hms(2021, 6, 15, 8, 0, 0).unwrap(),
    )
}
