//! Conflict-aware template copying.
//!
//! Single-file templates follow [`ConflictPolicy::resolve`]. The specs seed
//! is copied wholesale and best-effort: individual failures are counted and
//! reported as one non-fatal [`ActionResult::Failed`].

use tracing::{debug, warn};

use crate::{
    application::ports::Filesystem,
    domain::{
        Action, ActionResult, ConflictPolicy, RunConfiguration, SpecsSeed, Subject, TemplateSpec,
    },
    error::RalphResult,
};

/// Copies templates from the template root into the destination root.
pub struct Materializer<'a> {
    filesystem: &'a dyn Filesystem,
}

impl<'a> Materializer<'a> {
    pub fn new(filesystem: &'a dyn Filesystem) -> Self {
        Self { filesystem }
    }

    /// Materialize one template file.
    ///
    /// A missing source degrades to a warning for this file only; copy
    /// failures on an existing source are fatal.
    pub fn materialize(
        &self,
        config: &RunConfiguration,
        template: &TemplateSpec,
    ) -> RalphResult<Action> {
        let subject = Subject::Template(template.name());
        let source = template.source().under(config.template_root());
        let destination = template.destination().under(config.destination_root());
        let display_path = template.destination().as_path();

        if !self.filesystem.is_file(&source) {
            warn!(source = %source.display(), "template source missing");
            return Ok(Action::new(
                subject,
                display_path,
                ActionResult::failed(format!(
                    "template source {} not found",
                    source.display()
                )),
            ));
        }

        let decision =
            ConflictPolicy::from_config(config).resolve(self.filesystem.exists(&destination));
        if decision.performs_io() {
            self.filesystem.copy_file(&source, &destination)?;
        }

        debug!(template = template.name(), ?decision, "template materialized");
        Ok(Action::new(subject, display_path, decision.result()))
    }

    /// Seed the destination specs directory from the template root.
    ///
    /// Only runs when the destination holds no files yet, or when forced.
    /// Directories alone do not count as content.
    pub fn seed_specs(&self, config: &RunConfiguration, seed: &SpecsSeed) -> RalphResult<Action> {
        let source_dir = seed.source().under(config.template_root());
        let destination_dir = seed.destination().under(config.destination_root());
        let record = |result| Action::new(Subject::SpecsSeed, seed.destination().as_path(), result);

        if !self.filesystem.is_dir(&source_dir) {
            return Ok(record(ActionResult::skipped(
                "no spec templates in the template root",
            )));
        }

        let destination_has_files = self.filesystem.is_dir(&destination_dir)
            && self
                .filesystem
                .list_files(&destination_dir)
                .map(|files| !files.is_empty())
                .unwrap_or(true);

        let policy = ConflictPolicy::from_config(config);
        if !policy.should_seed(destination_has_files) {
            return Ok(record(ActionResult::skipped(format!(
                "{} already has content (use --force to reseed)",
                seed.destination()
            ))));
        }

        let files = match self.filesystem.list_files(&source_dir) {
            Ok(files) => files,
            Err(e) => {
                return Ok(record(ActionResult::failed(format!(
                    "could not read spec templates: {e}"
                ))));
            }
        };
        if files.is_empty() {
            return Ok(record(ActionResult::skipped("spec template directory is empty")));
        }

        if config.dry_run() {
            return Ok(record(if destination_has_files {
                ActionResult::WouldOverwrite
            } else {
                ActionResult::WouldCreate
            }));
        }

        let mut failures = 0usize;
        for file in &files {
            let from = source_dir.join(file);
            let to = destination_dir.join(file);
            let copied = match to.parent() {
                Some(parent) => self.filesystem.create_dir_all(parent),
                None => Ok(()),
            }
            .and_then(|()| self.filesystem.copy_file(&from, &to));

            if let Err(e) = copied {
                debug!(file = %file.display(), error = %e, "spec template not copied");
                failures += 1;
            }
        }

        let result = if failures > 0 {
            ActionResult::failed(format!(
                "{failures} of {} spec templates could not be copied",
                files.len()
            ))
        } else if destination_has_files {
            ActionResult::Overwrote
        } else {
            ActionResult::Created
        };
        Ok(record(result))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ApplicationError;
    use crate::application::ports::MockFilesystem;
    use std::path::{Path, PathBuf};

    fn config(force: bool, dry_run: bool) -> RunConfiguration {
        RunConfiguration::builder("/templates", "/work")
            .force(force)
            .dry_run(dry_run)
            .build()
            .unwrap()
    }

    fn prompt() -> TemplateSpec {
        TemplateSpec::new("PROMPT.md", "PROMPT.md".into(), "PROMPT.md".into())
    }

    fn fs_with(source_present: bool, destination_present: bool) -> MockFilesystem {
        let mut fs = MockFilesystem::new();
        fs.expect_is_file().return_const(source_present);
        fs.expect_exists().return_const(destination_present);
        fs
    }

    #[test]
    fn absent_destination_is_copied() {
        let mut fs = fs_with(true, false);
        fs.expect_copy_file()
            .withf(|from, to| {
                from == Path::new("/templates/PROMPT.md") && to == Path::new("/work/PROMPT.md")
            })
            .times(1)
            .returning(|_, _| Ok(()));

        let action = Materializer::new(&fs)
            .materialize(&config(false, false), &prompt())
            .unwrap();
        assert_eq!(action.result, ActionResult::Created);
    }

    #[test]
    fn existing_destination_is_kept_without_force() {
        let mut fs = fs_with(true, true);
        fs.expect_copy_file().times(0);

        let action = Materializer::new(&fs)
            .materialize(&config(false, false), &prompt())
            .unwrap();
        assert_eq!(action.result, ActionResult::SkippedExisting);
        assert_eq!(action.hint(), Some("use --force to overwrite"));
    }

    #[test]
    fn existing_destination_is_overwritten_with_force() {
        let mut fs = fs_with(true, true);
        fs.expect_copy_file().times(1).returning(|_, _| Ok(()));

        let action = Materializer::new(&fs)
            .materialize(&config(true, false), &prompt())
            .unwrap();
        assert_eq!(action.result, ActionResult::Overwrote);
    }

    #[test]
    fn dry_run_never_copies() {
        for (force, exists, expected) in [
            (false, false, ActionResult::WouldCreate),
            (true, false, ActionResult::WouldCreate),
            (false, true, ActionResult::SkippedExisting),
            (true, true, ActionResult::WouldOverwrite),
        ] {
            let mut fs = fs_with(true, exists);
            fs.expect_copy_file().times(0);

            let action = Materializer::new(&fs)
                .materialize(&config(force, true), &prompt())
                .unwrap();
            assert_eq!(action.result, expected, "force={force} exists={exists}");
        }
    }

    #[test]
    fn missing_source_is_a_non_fatal_failure() {
        let mut fs = MockFilesystem::new();
        fs.expect_is_file().return_const(false);
        fs.expect_copy_file().times(0);

        let action = Materializer::new(&fs)
            .materialize(&config(false, false), &prompt())
            .unwrap();
        assert!(action.result.is_failure());
    }

    #[test]
    fn copy_error_on_present_source_is_fatal() {
        let mut fs = fs_with(true, false);
        fs.expect_copy_file().returning(|_, to| {
            Err(ApplicationError::FilesystemError {
                path: to.to_path_buf(),
                reason: "permission denied".into(),
            }
            .into())
        });

        let result = Materializer::new(&fs).materialize(&config(false, false), &prompt());
        assert!(result.is_err());
    }

    // ── specs seed ──────────────────────────────────────────────────────────

    fn seed_fs(destination_files: Vec<PathBuf>) -> MockFilesystem {
        let mut fs = MockFilesystem::new();
        fs.expect_is_dir().return_const(true);
        fs.expect_list_files().returning(move |root| {
            if root == Path::new("/templates/specs") {
                Ok(vec![PathBuf::from("api.md"), PathBuf::from("stdlib/io.md")])
            } else {
                Ok(destination_files.clone())
            }
        });
        fs
    }

    #[test]
    fn seed_copies_into_specs_without_files() {
        let mut fs = seed_fs(vec![]);
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_copy_file().times(2).returning(|_, _| Ok(()));

        let action = Materializer::new(&fs)
            .seed_specs(&config(false, false), &SpecsSeed::standard())
            .unwrap();
        assert_eq!(action.result, ActionResult::Created);
    }

    #[test]
    fn seed_skips_specs_with_content_unless_forced() {
        let mut fs = seed_fs(vec![PathBuf::from("mine.md")]);
        fs.expect_copy_file().times(0);

        let action = Materializer::new(&fs)
            .seed_specs(&config(false, false), &SpecsSeed::standard())
            .unwrap();
        assert!(matches!(action.result, ActionResult::Skipped { .. }));
    }

    #[test]
    fn forced_seed_overwrites() {
        let mut fs = seed_fs(vec![PathBuf::from("mine.md")]);
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_copy_file().times(2).returning(|_, _| Ok(()));

        let action = Materializer::new(&fs)
            .seed_specs(&config(true, false), &SpecsSeed::standard())
            .unwrap();
        assert_eq!(action.result, ActionResult::Overwrote);
    }

    #[test]
    fn seed_failures_are_swallowed_into_one_warning() {
        let mut fs = seed_fs(vec![]);
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_copy_file().returning(|from, to| {
            if from.ends_with("api.md") {
                Ok(())
            } else {
                Err(ApplicationError::FilesystemError {
                    path: to.to_path_buf(),
                    reason: "disk full".into(),
                }
                .into())
            }
        });

        let action = Materializer::new(&fs)
            .seed_specs(&config(false, false), &SpecsSeed::standard())
            .unwrap();
        assert_eq!(
            action.result,
            ActionResult::failed("1 of 2 spec templates could not be copied")
        );
    }

    #[test]
    fn seed_dry_run_plans_without_io() {
        let mut fs = seed_fs(vec![]);
        fs.expect_create_dir_all().times(0);
        fs.expect_copy_file().times(0);

        let action = Materializer::new(&fs)
            .seed_specs(&config(false, true), &SpecsSeed::standard())
            .unwrap();
        assert_eq!(action.result, ActionResult::WouldCreate);
    }

    #[test]
    fn seed_without_template_specs_is_skipped() {
        let mut fs = MockFilesystem::new();
        fs.expect_is_dir().return_const(false);
        fs.expect_list_files().times(0);

        let action = Materializer::new(&fs)
            .seed_specs(&config(false, false), &SpecsSeed::standard())
            .unwrap();
        assert!(matches!(action.result, ActionResult::Skipped { .. }));
    }
}
