// Copyright (c) The nextest Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{
    errors::{SerializeError, WriteReportError},
    extract::{CrashSummary, TestIdentity},
    serialize::serialize_report,
};
use camino::Utf8Path;
use chrono::{DateTime, Utc};
use std::{
    fs::File,
    io::{self, BufWriter, Write},
};
use tracing::debug;

/// A JUnit report describing a single crashed test.
///
/// The report always contains one testsuite with one errored testcase. When no crash was found,
/// the testcase is `UnknownSuite.UnknownTest` and the excerpt says so.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CrashReport {
    /// The crashed test.
    pub identity: TestIdentity,

    /// The log excerpt, embedded as CDATA.
    pub excerpt: String,

    /// The time the report was generated.
    pub timestamp: DateTime<Utc>,
}

impl CrashReport {
    /// Creates a new report for `summary`, stamped with `timestamp`.
    pub fn new(summary: &CrashSummary, timestamp: DateTime<Utc>) -> Self {
        Self {
            identity: summary.identity(),
            excerpt: summary.excerpt().to_owned(),
            timestamp,
        }
    }

    /// Serialize this report to the given writer.
    pub fn serialize(&self, writer: impl io::Write) -> Result<(), SerializeError> {
        Ok(serialize_report(self, writer)?)
    }

    /// Serialize this report to a string.
    pub fn to_string(&self) -> Result<String, SerializeError> {
        let mut buf: Vec<u8> = vec![];
        self.serialize(&mut buf)?;
        String::from_utf8(buf).map_err(|utf8_err| quick_xml::Error::from(utf8_err).into())
    }

    /// Writes this report to `path`, creating parent directories as needed.
    pub fn write_to_path(&self, path: &Utf8Path) -> Result<(), WriteReportError> {
        create_parent_dirs(path)?;

        let fs_error = |error| WriteReportError::Fs {
            file: path.to_owned(),
            error,
        };
        let mut writer = BufWriter::new(File::create(path).map_err(fs_error)?);
        self.serialize(&mut writer)
            .map_err(|error| WriteReportError::Serialize {
                file: path.to_owned(),
                error,
            })?;
        writer.flush().map_err(fs_error)?;

        debug!("wrote JUnit report for {} to `{path}`", self.identity);
        Ok(())
    }
}

/// Creates the parent directories of `path`, like `mkdir -p`.
///
/// Directories that already exist are not an error. A path with no parent component refers to the
/// current directory and needs nothing created.
pub fn create_parent_dirs(path: &Utf8Path) -> Result<(), WriteReportError> {
    let Some(parent) = path.parent().filter(|parent| !parent.as_str().is_empty()) else {
        return Ok(());
    };
    std::fs::create_dir_all(parent).map_err(|error| WriteReportError::Fs {
        file: parent.to_owned(),
        error,
    })
}
