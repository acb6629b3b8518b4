//! Outcomes of scaffolding primitives.
//!
//! Every primitive (ensure a directory, copy a template, initialise the
//! repository, ...) reports an [`ActionResult`] instead of failing on
//! expected conditions such as "already exists". The orchestrator collects
//! them into a [`ScaffoldReport`].

use std::fmt;
use std::path::PathBuf;

/// What happened (or would happen) to one path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionResult {
    /// The path did not exist and was created.
    Created,
    /// The path already existed and was left untouched.
    SkippedExisting,
    /// Dry-run: the path would be created.
    WouldCreate,
    /// The path existed and was replaced (force).
    Overwrote,
    /// Dry-run: the path would be replaced (force).
    WouldOverwrite,
    /// Nothing was done because a policy said so.
    Skipped { reason: String },
    /// Non-fatal failure; the run continues.
    Failed { reason: String },
}

impl ActionResult {
    pub fn skipped(reason: impl Into<String>) -> Self {
        Self::Skipped {
            reason: reason.into(),
        }
    }

    pub fn failed(reason: impl Into<String>) -> Self {
        Self::Failed {
            reason: reason.into(),
        }
    }

    /// `true` if the filesystem was mutated.
    pub fn is_change(&self) -> bool {
        matches!(self, Self::Created | Self::Overwrote)
    }

    /// `true` for dry-run outcomes.
    pub fn is_planned(&self) -> bool {
        matches!(self, Self::WouldCreate | Self::WouldOverwrite)
    }

    pub fn is_skip(&self) -> bool {
        matches!(self, Self::SkippedExisting | Self::Skipped { .. })
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

/// The kind of thing an [`Action`] was applied to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subject {
    /// The new project directory itself.
    ProjectRoot,
    Directory,
    /// A single-file template, by template name.
    Template(&'static str),
    SpecsSeed,
    VersionControl,
    Readme,
    Commit,
    Import,
}

/// How loudly an action should be reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Info,
    Success,
    Warning,
}

/// One reported step of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    pub subject: Subject,
    pub path: PathBuf,
    pub result: ActionResult,
}

impl Action {
    pub fn new(subject: Subject, path: impl Into<PathBuf>, result: ActionResult) -> Self {
        Self {
            subject,
            path: path.into(),
            result,
        }
    }

    /// Conflicts on single-file templates and any failure are warnings;
    /// mutations are successes; everything else is informational.
    pub fn severity(&self) -> Severity {
        match (&self.subject, &self.result) {
            (_, ActionResult::Failed { .. }) => Severity::Warning,
            (Subject::Template(_), ActionResult::SkippedExisting) => Severity::Warning,
            (_, result) if result.is_change() => Severity::Success,
            _ => Severity::Info,
        }
    }

    /// Hint shown alongside the message, if any.
    pub fn hint(&self) -> Option<&'static str> {
        match (&self.subject, &self.result) {
            (Subject::Template(_), ActionResult::SkippedExisting) => {
                Some("use --force to overwrite")
            }
            (Subject::Import, ActionResult::Failed { .. }) => {
                Some("review the generated files manually")
            }
            _ => None,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path = self.path.display();
        match (&self.subject, &self.result) {
            (Subject::VersionControl, ActionResult::Created) => {
                write!(f, "Initialized git repository")
            }
            (Subject::VersionControl, ActionResult::SkippedExisting) => {
                write!(f, "Git repository already exists, skipping")
            }
            (Subject::VersionControl, ActionResult::WouldCreate) => {
                write!(f, "Would initialize git repository")
            }
            (Subject::Commit, ActionResult::Created) => write!(f, "Created initial commit"),
            (Subject::Import, ActionResult::Created) => write!(f, "Imported {path}"),
            (Subject::Import, ActionResult::WouldCreate) => {
                write!(f, "Would import {path} into Ralph format")
            }
            (Subject::SpecsSeed, ActionResult::Created) => {
                write!(f, "Seeded {path} with spec templates")
            }
            (Subject::SpecsSeed, ActionResult::Overwrote) => {
                write!(f, "Reseeded {path} with spec templates")
            }
            (Subject::SpecsSeed, ActionResult::WouldCreate) => {
                write!(f, "Would seed {path} with spec templates")
            }
            (Subject::SpecsSeed, ActionResult::WouldOverwrite) => {
                write!(f, "Would reseed {path} with spec templates")
            }
            (Subject::SpecsSeed, ActionResult::Skipped { reason }) => {
                write!(f, "Skipping spec templates: {reason}")
            }
            (subject, ActionResult::Created) => write!(f, "Created {} {path}", noun(subject)),
            (subject, ActionResult::SkippedExisting) => {
                write!(f, "{} {path} already exists, skipping", capitalised(noun(subject)))
            }
            (subject, ActionResult::WouldCreate) => {
                write!(f, "Would create {} {path}", noun(subject))
            }
            (subject, ActionResult::Overwrote) => write!(f, "Overwrote {} {path}", noun(subject)),
            (subject, ActionResult::WouldOverwrite) => {
                write!(f, "Would overwrite {} {path}", noun(subject))
            }
            (subject, ActionResult::Skipped { reason }) => {
                write!(f, "Skipping {}: {reason}", noun(subject))
            }
            (subject, ActionResult::Failed { reason }) => {
                write!(f, "Could not handle {} {path}: {reason}", noun(subject))
            }
        }
    }
}

fn noun(subject: &Subject) -> &'static str {
    match subject {
        Subject::ProjectRoot => "project directory",
        Subject::Directory => "directory",
        Subject::Template(_) => "template",
        Subject::SpecsSeed => "spec templates in",
        Subject::VersionControl => "git repository",
        Subject::Readme => "file",
        Subject::Commit => "initial commit",
        Subject::Import => "import of",
    }
}

fn capitalised(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Ordered record of every action taken during one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScaffoldReport {
    actions: Vec<Action>,
}

impl ScaffoldReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, action: Action) {
        self.actions.push(action);
    }

    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    pub fn changed(&self) -> usize {
        self.count(ActionResult::is_change)
    }

    pub fn planned(&self) -> usize {
        self.count(ActionResult::is_planned)
    }

    pub fn skipped(&self) -> usize {
        self.count(ActionResult::is_skip)
    }

    pub fn failed(&self) -> usize {
        self.count(ActionResult::is_failure)
    }

    /// Find the action recorded for a subject, if any.
    pub fn find(&self, subject: Subject) -> Option<&Action> {
        self.actions.iter().find(|a| a.subject == subject)
    }

    fn count(&self, predicate: fn(&ActionResult) -> bool) -> usize {
        self.actions.iter().filter(|a| predicate(&a.result)).count()
    }
}
