//! The fixed Ralph project layout: which directories exist and which
//! templates are copied where.

use super::common::RelativePath;

/// Name of the version-control metadata directory at the destination root.
pub const VCS_METADATA_DIR: &str = ".git";

/// Name of the README written for new projects.
pub const README_FILE: &str = "README.md";

/// Commit message recorded after a new project is scaffolded.
pub const INITIAL_COMMIT_MESSAGE: &str = "Initial Ralph project setup";

/// One template file: where it lives under the template root and where it
/// lands under the destination root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateSpec {
    name: &'static str,
    source: RelativePath,
    destination: RelativePath,
}

impl TemplateSpec {
    pub fn new(name: &'static str, source: RelativePath, destination: RelativePath) -> Self {
        Self {
            name,
            source,
            destination,
        }
    }

    /// The three single-file templates every Ralph project carries.
    pub fn standard() -> Vec<TemplateSpec> {
        vec![
            Self::new("PROMPT.md", "PROMPT.md".into(), "PROMPT.md".into()),
            Self::new("fix_plan.md", "fix_plan.md".into(), "@fix_plan.md".into()),
            Self::new("AGENT.md", "AGENT.md".into(), "@AGENT.md".into()),
        ]
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn source(&self) -> &RelativePath {
        &self.source
    }

    pub fn destination(&self) -> &RelativePath {
        &self.destination
    }
}

/// The directory-valued "specs templates" entry.
///
/// Unlike [`TemplateSpec`] this is copied wholesale and only when the
/// destination holds no files yet (or when forced).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecsSeed {
    source: RelativePath,
    destination: RelativePath,
}

impl SpecsSeed {
    pub fn standard() -> Self {
        Self {
            source: "specs".into(),
            destination: "specs".into(),
        }
    }

    pub fn source(&self) -> &RelativePath {
        &self.source
    }

    pub fn destination(&self) -> &RelativePath {
        &self.destination
    }
}

/// Ordered set of directories to ensure under the destination root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectorySpec {
    paths: Vec<RelativePath>,
}

impl DirectorySpec {
    pub fn new(paths: Vec<RelativePath>) -> Self {
        Self { paths }
    }

    /// Layout for initialising an existing project in place.
    pub fn in_place() -> Self {
        Self::new(vec![
            "specs/stdlib".into(),
            "src".into(),
            "examples".into(),
            "logs".into(),
            "docs/generated".into(),
        ])
    }

    /// Layout for a freshly created project directory.
    pub fn new_project() -> Self {
        Self::new(vec![
            "specs/stdlib".into(),
            "logs".into(),
            "docs/generated".into(),
        ])
    }

    pub fn iter(&self) -> impl Iterator<Item = &RelativePath> {
        self.paths.iter()
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}
