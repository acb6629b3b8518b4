//! User-facing console output.
//!
//! Every line has the shape `[YYYY-MM-DD HH:MM:SS] [LEVEL] message`, with a
//! `[DRY RUN]` marker in dry-run mode. Errors go to stderr, everything else
//! to stdout. `--quiet` keeps only errors.

use std::io::{self, IsTerminal};

use chrono::{Local, NaiveDateTime};
use console::Term;
use owo_colors::OwoColorize;

use ralph_core::{
    application::ports::Reporter,
    domain::{Action, ScaffoldReport, Severity},
};

use crate::cli::GlobalArgs;

/// Severity of one output line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Success,
    Warn,
    Error,
}

impl Level {
    fn label(self) -> &'static str {
        match self {
            Self::Info => "INFO",
            Self::Success => "SUCCESS",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
        }
    }

    fn paint(self, tag: &str) -> String {
        match self {
            Self::Info => tag.blue().bold().to_string(),
            Self::Success => tag.green().bold().to_string(),
            Self::Warn => tag.yellow().bold().to_string(),
            Self::Error => tag.red().bold().to_string(),
        }
    }
}

impl From<Severity> for Level {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Info => Self::Info,
            Severity::Success => Self::Success,
            Severity::Warning => Self::Warn,
        }
    }
}

/// Render one log line.
pub fn format_line(
    level: Level,
    message: &str,
    dry_run: bool,
    timestamp: NaiveDateTime,
    color: bool,
) -> String {
    let stamp = format!("[{}]", timestamp.format("%Y-%m-%d %H:%M:%S"));
    let tag = format!("[{}]", level.label());
    let marker = if dry_run { " [DRY RUN]" } else { "" };

    if color {
        format!(
            "{} {}{} {}",
            stamp.dimmed(),
            level.paint(&tag),
            marker.magenta(),
            message
        )
    } else {
        format!("{stamp} {tag}{marker} {message}")
    }
}

/// Manages CLI output based on flags.
pub struct OutputManager {
    quiet: bool,
    no_color: bool,
    dry_run: bool,
    out: Term,
    err: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags.
    ///
    /// Colour is also disabled when stdout is not a terminal.
    pub fn new(args: &GlobalArgs, dry_run: bool) -> Self {
        Self {
            quiet: args.quiet,
            no_color: args.no_color || !io::stdout().is_terminal(),
            dry_run,
            out: Term::stdout(),
            err: Term::stderr(),
        }
    }

    // ── Public write methods ───────────────────────────────────────────────

    pub fn info(&self, msg: &str) -> io::Result<()> {
        self.emit(Level::Info, msg)
    }

    pub fn success(&self, msg: &str) -> io::Result<()> {
        self.emit(Level::Success, msg)
    }

    pub fn warning(&self, msg: &str) -> io::Result<()> {
        self.emit(Level::Warn, msg)
    }

    /// Errors are never suppressed.
    pub fn error(&self, msg: &str) -> io::Result<()> {
        self.emit(Level::Error, msg)
    }

    /// Free-form text beneath an error line, on stderr. Never suppressed.
    pub fn error_details(&self, text: &str) -> io::Result<()> {
        self.err.write_str(text)
    }

    /// Bold header line without timestamp.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            text.to_owned()
        } else {
            text.cyan().bold().to_string()
        };
        self.out.write_line(&line)
    }

    /// Final tally of a run.
    pub fn summary(&self, report: &ScaffoldReport) -> io::Result<()> {
        if self.dry_run {
            return self.info(&format!(
                "Dry run complete: {} change(s) planned, {} already in place; nothing was modified",
                report.planned(),
                report.skipped()
            ));
        }

        let tally = format!(
            "{} created or updated, {} skipped",
            report.changed(),
            report.skipped()
        );
        if report.failed() > 0 {
            self.warning(&format!(
                "Finished with {} warning(s): {tally}",
                report.failed()
            ))
        } else {
            self.success(&format!("Finished: {tally}"))
        }
    }

    /// Numbered follow-up instructions; skipped in dry-run and quiet mode.
    pub fn next_steps(&self, steps: &[String]) -> io::Result<()> {
        if self.dry_run || self.quiet || steps.is_empty() {
            return Ok(());
        }
        self.out.write_line("")?;
        self.header("Next steps:")?;
        for (i, step) in steps.iter().enumerate() {
            self.out.write_line(&format!("  {}. {step}", i + 1))?;
        }
        Ok(())
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// `true` if ANSI colours are enabled.
    pub fn supports_color(&self) -> bool {
        !self.no_color
    }

    fn should_print(&self, level: Level) -> bool {
        !self.quiet || level == Level::Error
    }

    fn emit(&self, level: Level, msg: &str) -> io::Result<()> {
        if !self.should_print(level) {
            return Ok(());
        }
        let line = format_line(
            level,
            msg,
            self.dry_run,
            Local::now().naive_local(),
            !self.no_color,
        );
        match level {
            Level::Error => self.err.write_line(&line),
            _ => self.out.write_line(&line),
        }
    }
}

/// Live progress: one line per action. Write failures are ignored.
impl Reporter for OutputManager {
    fn action(&self, action: &Action) {
        let message = match action.hint() {
            Some(hint) => format!("{action} ({hint})"),
            None => action.to_string(),
        };
        let _ = self.emit(action.severity().into(), &message);
    }

    fn notice(&self, severity: Severity, message: &str) {
        let _ = self.emit(severity.into(), message);
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
