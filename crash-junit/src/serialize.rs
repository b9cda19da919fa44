// Copyright (c) The nextest Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Serialize a `CrashReport`.
//!
//! The document has a fixed shape and fixed indentation, so whitespace is written out as explicit
//! text events rather than through the writer's indentation support.

use crate::CrashReport;
use quick_xml::{
    Writer,
    events::{BytesCData, BytesDecl, BytesEnd, BytesStart, BytesText, Event},
};
use std::io;

static TESTSUITES_TAG: &str = "testsuites";
static TESTSUITE_TAG: &str = "testsuite";
static TESTCASE_TAG: &str = "testcase";
static ERROR_TAG: &str = "error";

static ERROR_MESSAGE: &str = "Test crashed";

/// Formats the `timestamp` attribute of the testsuite.
pub(crate) static TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

// The counts are fixed: a crash report always describes exactly one errored test.
static COUNT_ATTRIBUTES: [(&str, &str); 5] = [
    ("tests", "1"),
    ("failures", "0"),
    ("disabled", "0"),
    ("errors", "1"),
    ("time", "0"),
];

pub(crate) fn serialize_report(
    report: &CrashReport,
    writer: impl io::Write,
) -> quick_xml::Result<()> {
    let mut writer = Writer::new(writer);

    let decl = BytesDecl::new("1.0", Some("UTF-8"), None);
    writer.write_event(Event::Decl(decl))?;
    serialize_indent(0, &mut writer)?;

    serialize_report_impl(report, &mut writer)?;

    // Add a trailing newline.
    serialize_indent(0, &mut writer)
}

fn serialize_report_impl(
    report: &CrashReport,
    writer: &mut Writer<impl io::Write>,
) -> quick_xml::Result<()> {
    // Use the destructuring syntax to ensure that all fields are handled.
    let CrashReport {
        identity,
        excerpt,
        timestamp,
    } = report;

    let mut testsuites_tag = BytesStart::new(TESTSUITES_TAG);
    testsuites_tag.extend_attributes(COUNT_ATTRIBUTES);
    writer.write_event(Event::Start(testsuites_tag))?;
    serialize_indent(1, writer)?;

    let timestamp = timestamp.format(TIMESTAMP_FORMAT).to_string();
    let mut testsuite_tag = BytesStart::new(TESTSUITE_TAG);
    testsuite_tag.push_attribute(("name", identity.suite()));
    testsuite_tag.extend_attributes(COUNT_ATTRIBUTES);
    testsuite_tag.push_attribute(("timestamp", timestamp.as_str()));
    writer.write_event(Event::Start(testsuite_tag))?;
    serialize_indent(2, writer)?;

    let mut testcase_tag = BytesStart::new(TESTCASE_TAG);
    testcase_tag.extend_attributes([
        ("name", identity.name()),
        ("classname", identity.suite()),
        ("time", "0"),
    ]);
    writer.write_event(Event::Start(testcase_tag))?;
    serialize_indent(3, writer)?;

    let mut error_tag = BytesStart::new(ERROR_TAG);
    error_tag.push_attribute(("message", ERROR_MESSAGE));
    writer.write_event(Event::Start(error_tag))?;
    serialize_indent(4, writer)?;

    for section in cdata_sections(excerpt) {
        writer.write_event(Event::CData(BytesCData::new(section)))?;
    }

    serialize_indent(3, writer)?;
    serialize_end_tag(ERROR_TAG, writer)?;
    serialize_indent(2, writer)?;
    serialize_end_tag(TESTCASE_TAG, writer)?;
    serialize_indent(1, writer)?;
    serialize_end_tag(TESTSUITE_TAG, writer)?;
    serialize_indent(0, writer)?;
    serialize_end_tag(TESTSUITES_TAG, writer)?;

    Ok(())
}

/// Splits the padded excerpt into CDATA sections.
///
/// A CDATA section cannot contain `]]>`, so each occurrence is split between two adjacent sections
/// as `]]` and `>`. Concatenating the sections gives back `" {excerpt} "`.
fn cdata_sections(excerpt: &str) -> Vec<String> {
    let padded = format!(" {excerpt} ");
    let parts: Vec<&str> = padded.split("]]>").collect();
    let last = parts.len() - 1;

    parts
        .iter()
        .enumerate()
        .map(|(idx, part)| {
            let mut section = String::with_capacity(part.len() + 3);
            if idx > 0 {
                section.push('>');
            }
            section.push_str(part);
            if idx < last {
                section.push_str("]]");
            }
            section
        })
        .collect()
}

fn serialize_indent(depth: usize, writer: &mut Writer<impl io::Write>) -> quick_xml::Result<()> {
    let indent = format!("\n{}", "  ".repeat(depth));
    writer.write_event(Event::Text(BytesText::new(&indent)))
}

fn serialize_end_tag(
    tag_name: &'static str,
    writer: &mut Writer<impl io::Write>,
) -> quick_xml::Result<()> {
    let end_tag = BytesEnd::new(tag_name);
    writer.write_event(Event::End(end_tag))
}
