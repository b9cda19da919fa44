// Copyright (c) The nextest Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use clap::{
    Args, ValueEnum,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use owo_colors::{OwoColorize, Style, style};
use std::fmt;
use tracing::{Event, Level, Subscriber, level_filters::LevelFilter};
use tracing_subscriber::{
    Layer,
    filter::Targets,
    fmt::{FmtContext, FormatEvent, FormatFields, format},
    layer::SubscriberExt,
    registry::LookupSpan,
    util::SubscriberInitExt,
};

/// Help output styling, in the same palette cargo uses.
pub(crate) const fn help_styles() -> Styles {
    let heading = AnsiColor::Green.on_default().effects(Effects::BOLD);
    let literal = AnsiColor::Cyan.on_default().effects(Effects::BOLD);
    Styles::styled()
        .header(heading)
        .usage(heading)
        .literal(literal)
        .placeholder(AnsiColor::Cyan.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(literal)
        .invalid(AnsiColor::Yellow.on_default().effects(Effects::BOLD))
}

/// Crates whose events `--verbose` turns up to DEBUG.
static VERBOSE_TARGETS: [&str; 2] = ["crash_junit", "gtest_crash_report"];

#[derive(Copy, Clone, Debug, Args)]
#[must_use]
pub(crate) struct OutputOpts {
    /// Log scan and write details to stderr
    #[arg(long, short)]
    pub(crate) verbose: bool,

    /// Produce color output: auto, always, never
    #[arg(
        long,
        value_enum,
        default_value_t,
        hide_possible_values = true,
        value_name = "WHEN"
    )]
    pub(crate) color: Color,
}

impl OutputOpts {
    pub(crate) fn init(self) -> OutputContext {
        let colorize = self.color.should_colorize(supports_color::Stream::Stderr);
        init_logger(self.verbose, colorize);
        OutputContext { colorize }
    }
}

/// Output settings resolved from the command line and the terminal.
#[derive(Copy, Clone, Debug)]
#[must_use]
pub struct OutputContext {
    colorize: bool,
}

impl OutputContext {
    /// Returns the styles for messages written straight to stderr.
    pub fn stderr_styles(&self) -> StderrStyles {
        if self.colorize {
            StderrStyles {
                bold: style().bold(),
            }
        } else {
            StderrStyles::default()
        }
    }
}

/// When to produce color output.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
#[must_use]
pub enum Color {
    /// Colorize if stderr supports it.
    #[default]
    Auto,
    /// Always colorize.
    Always,
    /// Never colorize.
    Never,
}

impl Color {
    pub(crate) fn should_colorize(self, stream: supports_color::Stream) -> bool {
        match self {
            Color::Auto => supports_color::on_cached(stream).is_some(),
            Color::Always => true,
            Color::Never => false,
        }
    }
}

/// Styles for messages written directly to stderr.
#[derive(Debug, Default)]
pub struct StderrStyles {
    pub(crate) bold: Style,
}

// A successful run prints nothing: everything but warnings and errors is filtered out unless
// --verbose is passed.
fn init_logger(verbose: bool, colorize: bool) {
    let level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    let targets = Targets::new()
        .with_targets(VERBOSE_TARGETS.map(|target| (target, level)))
        .with_default(LevelFilter::WARN);

    let layer = tracing_subscriber::fmt::layer()
        .event_format(LevelPrefixFormat { colorize })
        .with_writer(std::io::stderr)
        .with_filter(targets);

    // Only the first call installs a subscriber; tests may initialize output more than once.
    let _ = tracing_subscriber::registry().with(layer).try_init();
}

/// Formats each event as `<level>: <message>` on a single line, the way compilers report
/// diagnostics.
struct LevelPrefixFormat {
    colorize: bool,
}

impl LevelPrefixFormat {
    fn prefix(&self, level: Level) -> (&'static str, Style) {
        let (label, colored) = match level {
            Level::ERROR => ("error", style().red().bold()),
            Level::WARN => ("warning", style().yellow().bold()),
            Level::INFO => ("info", style().bold()),
            Level::DEBUG => ("debug", style().bold()),
            Level::TRACE => ("trace", style().dimmed()),
        };
        (label, if self.colorize { colored } else { style() })
    }
}

impl<S, N> FormatEvent<S, N> for LevelPrefixFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: format::Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let (label, label_style) = self.prefix(*event.metadata().level());
        write!(writer, "{}: ", label.style(label_style))?;
        ctx.format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}
