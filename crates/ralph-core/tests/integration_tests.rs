//! Integration tests for ralph-core, driven through real adapters.

use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use ralph_adapters::{LocalFilesystem, MemoryFilesystem};
use ralph_core::{
    application::ApplicationError,
    domain::{Action, ActionResult, Severity, Subject},
    prelude::*,
};

const TEMPLATES: &str = "/home/.ralph/templates";
const WORK: &str = "/work";

/// Version control that records calls and fakes `.git` through a filesystem.
#[derive(Clone)]
struct FakeGit {
    fs: Arc<dyn Filesystem>,
    commits: Arc<Mutex<Vec<String>>>,
    inits: Arc<Mutex<usize>>,
}

impl FakeGit {
    fn new(fs: Arc<dyn Filesystem>) -> Self {
        Self {
            fs,
            commits: Arc::default(),
            inits: Arc::default(),
        }
    }

    fn commits(&self) -> Vec<String> {
        self.commits.lock().unwrap().clone()
    }

    fn inits(&self) -> usize {
        *self.inits.lock().unwrap()
    }
}

impl VersionControl for FakeGit {
    fn init(&self, root: &Path) -> RalphResult<()> {
        *self.inits.lock().unwrap() += 1;
        self.fs.create_dir_all(&root.join(".git"))
    }

    fn commit_all(&self, _root: &Path, message: &str) -> RalphResult<()> {
        self.commits.lock().unwrap().push(message.to_string());
        Ok(())
    }
}

#[derive(Default)]
struct Recorder {
    lines: RefCell<Vec<(Severity, String)>>,
}

impl Reporter for Recorder {
    fn action(&self, action: &Action) {
        self.lines
            .borrow_mut()
            .push((action.severity(), action.to_string()));
    }

    fn notice(&self, severity: Severity, message: &str) {
        self.lines.borrow_mut().push((severity, message.to_string()));
    }
}

struct FixedProvider(ProviderOutcome);

impl ImportProvider for FixedProvider {
    fn name(&self) -> &'static str {
        "fixed"
    }

    fn attempt(&self, _request: &ImportRequest) -> RalphResult<ProviderOutcome> {
        Ok(self.0.clone())
    }
}

fn installed_templates() -> MemoryFilesystem {
    MemoryFilesystem::new()
        .with_file(format!("{TEMPLATES}/PROMPT.md"), "prompt template")
        .with_file(format!("{TEMPLATES}/fix_plan.md"), "fix plan template")
        .with_file(format!("{TEMPLATES}/AGENT.md"), "agent template")
        .with_file(format!("{TEMPLATES}/specs/api.md"), "api spec")
        .with_file(format!("{TEMPLATES}/specs/stdlib/io.md"), "io spec")
        .with_dir(WORK)
}

fn service(fs: &MemoryFilesystem, import: ImportBridge) -> (ScaffoldService, FakeGit) {
    let git = FakeGit::new(Arc::new(fs.clone()));
    (
        ScaffoldService::new(Box::new(fs.clone()), Box::new(git.clone()), import),
        git,
    )
}

fn config() -> ralph_core::domain::RunConfigurationBuilder {
    RunConfiguration::builder(TEMPLATES, WORK)
}

fn work(path: &str) -> PathBuf {
    Path::new(WORK).join(path)
}

#[test]
fn in_place_on_empty_destination_produces_full_layout() {
    let fs = installed_templates();
    let (service, git) = service(&fs, ImportBridge::empty());

    let report = service
        .init_in_place(&config().build().unwrap(), &SilentReporter)
        .unwrap();

    for dir in ["specs/stdlib", "src", "examples", "logs", "docs/generated", ".git"] {
        assert!(fs.is_dir(&work(dir)), "missing directory {dir}");
    }
    assert_eq!(fs.read_file(work("PROMPT.md")).as_deref(), Some("prompt template"));
    assert_eq!(fs.read_file(work("@fix_plan.md")).as_deref(), Some("fix plan template"));
    assert_eq!(fs.read_file(work("@AGENT.md")).as_deref(), Some("agent template"));
    assert_eq!(fs.read_file(work("specs/api.md")).as_deref(), Some("api spec"));
    assert_eq!(fs.read_file(work("specs/stdlib/io.md")).as_deref(), Some("io spec"));
    assert_eq!(git.inits(), 1);
    assert!(git.commits().is_empty());
    assert_eq!(report.failed(), 0);
    assert!(report.find(Subject::Import).is_none());
}

#[test]
fn second_run_changes_nothing() {
    let fs = installed_templates();
    let (service, git) = service(&fs, ImportBridge::empty());
    let config = config().build().unwrap();

    service.init_in_place(&config, &SilentReporter).unwrap();
    let before = fs.snapshot();
    let report = service.init_in_place(&config, &SilentReporter).unwrap();

    assert_eq!(fs.snapshot(), before);
    assert_eq!(report.changed(), 0);
    assert_eq!(git.inits(), 1, "existing .git must not be re-initialized");
    assert_eq!(
        report.find(Subject::SpecsSeed).map(|a| &a.result),
        Some(&ActionResult::skipped(
            "specs already has content (use --force to reseed)"
        ))
    );
}

#[test]
fn existing_templates_are_kept_without_force_and_replaced_with_force() {
    let fs = installed_templates().with_file(work("PROMPT.md"), "my edits");
    let (service, _) = service(&fs, ImportBridge::empty());

    let recorder = Recorder::default();
    service
        .init_in_place(&config().build().unwrap(), &recorder)
        .unwrap();
    assert_eq!(fs.read_file(work("PROMPT.md")).as_deref(), Some("my edits"));
    assert!(recorder.lines.borrow().contains(&(
        Severity::Warning,
        "Template PROMPT.md already exists, skipping".to_string()
    )));

    let report = service
        .init_in_place(&config().force(true).build().unwrap(), &SilentReporter)
        .unwrap();
    assert_eq!(fs.read_file(work("PROMPT.md")).as_deref(), Some("prompt template"));
    assert_eq!(
        report
            .find(Subject::Template("PROMPT.md"))
            .map(|a| &a.result),
        Some(&ActionResult::Overwrote)
    );
}

#[test]
fn dry_run_leaves_destination_identical() {
    let fs = installed_templates().with_file(work("PROMPT.md"), "my edits");
    let (service, git) = service(&fs, ImportBridge::empty());
    let before = fs.snapshot();

    for force in [false, true] {
        let report = service
            .init_in_place(
                &config().dry_run(true).force(force).build().unwrap(),
                &SilentReporter,
            )
            .unwrap();
        assert_eq!(report.changed(), 0);
        assert!(report.planned() > 0);
    }

    assert_eq!(fs.snapshot(), before);
    assert_eq!(git.inits(), 0);
}

#[test]
fn one_missing_template_does_not_stop_the_others() {
    let fs = MemoryFilesystem::new()
        .with_file(format!("{TEMPLATES}/PROMPT.md"), "prompt")
        .with_file(format!("{TEMPLATES}/fix_plan.md"), "plan")
        .with_dir(WORK);
    let (service, _) = service(&fs, ImportBridge::empty());

    let report = service
        .init_in_place(&config().build().unwrap(), &SilentReporter)
        .unwrap();

    assert!(fs.is_file(&work("PROMPT.md")));
    assert!(fs.is_file(&work("@fix_plan.md")));
    assert!(!fs.exists(&work("@AGENT.md")));
    assert_eq!(report.failed(), 1);
    assert!(matches!(
        report.find(Subject::SpecsSeed).map(|a| &a.result),
        Some(ActionResult::Skipped { .. })
    ));
}

#[test]
fn missing_template_root_creates_nothing() {
    let fs = MemoryFilesystem::new().with_dir(WORK);
    let (service, git) = service(&fs, ImportBridge::empty());
    let before = fs.snapshot();

    let err = service
        .init_in_place(&config().build().unwrap(), &SilentReporter)
        .unwrap_err();

    assert!(matches!(
        err,
        RalphError::Application(ApplicationError::TemplateRootMissing { .. })
    ));
    assert_eq!(err.category(), ErrorCategory::NotFound);
    assert_eq!(fs.snapshot(), before);
    assert_eq!(git.inits(), 0);
}

#[test]
fn skip_flag_leaves_repository_alone() {
    let fs = installed_templates();
    let (service, git) = service(&fs, ImportBridge::empty());

    service
        .init_in_place(
            &config().skip_version_control(true).build().unwrap(),
            &SilentReporter,
        )
        .unwrap();

    assert_eq!(git.inits(), 0);
    assert!(!fs.exists(&work(".git")));
}

#[test]
fn unwritable_destination_is_fatal() {
    let fs = installed_templates().with_read_only(WORK);
    let (service, _) = service(&fs, ImportBridge::empty());

    let result = service.init_in_place(
        &config().skip_version_control(true).build().unwrap(),
        &SilentReporter,
    );
    assert!(result.is_err());
}

// ── import ──────────────────────────────────────────────────────────────────

#[test]
fn missing_import_source_creates_nothing() {
    let fs = installed_templates();
    let (service, _) = service(
        &fs,
        ImportBridge::new(vec![Box::new(FixedProvider(ProviderOutcome::Completed))]),
    );
    let before = fs.snapshot();

    let err = service
        .init_in_place(
            &config().import_source(Some("missing.md".into())).build().unwrap(),
            &SilentReporter,
        )
        .unwrap_err();

    assert!(err.to_string().contains("missing.md"));
    assert_eq!(fs.snapshot(), before);
}

#[test]
fn import_runs_after_scaffolding() {
    let fs = installed_templates().with_file(work("prd.md"), "# PRD");
    let (service, _) = service(
        &fs,
        ImportBridge::new(vec![Box::new(FixedProvider(ProviderOutcome::Completed))]),
    );

    let report = service
        .init_in_place(
            &config().import_source(Some("prd.md".into())).build().unwrap(),
            &SilentReporter,
        )
        .unwrap();

    let last = report.actions().last().unwrap();
    assert_eq!(last.subject, Subject::Import);
    assert_eq!(last.result, ActionResult::Created);
}

#[test]
fn import_soft_failure_keeps_the_run_successful() {
    let fs = installed_templates().with_file(work("prd.md"), "# PRD");
    let (service, _) = service(
        &fs,
        ImportBridge::new(vec![Box::new(FixedProvider(ProviderOutcome::SoftFailure {
            reason: "exit status 1".into(),
        }))]),
    );

    let report = service
        .init_in_place(
            &config().import_source(Some("prd.md".into())).build().unwrap(),
            &SilentReporter,
        )
        .unwrap();
    assert_eq!(report.failed(), 1);
    assert!(fs.is_file(&work("PROMPT.md")));
}

#[test]
fn no_conversion_tool_is_fatal() {
    let fs = installed_templates().with_file(work("prd.md"), "# PRD");
    let (service, _) = service(
        &fs,
        ImportBridge::new(vec![Box::new(FixedProvider(ProviderOutcome::Unavailable {
            reason: "not installed".into(),
        }))]),
    );

    let err = service
        .init_in_place(
            &config().import_source(Some("prd.md".into())).build().unwrap(),
            &SilentReporter,
        )
        .unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Unavailable);
    assert!(!err.suggestions().is_empty());
}

// ── new project ─────────────────────────────────────────────────────────────

fn project_config() -> ralph_core::domain::RunConfigurationBuilder {
    RunConfiguration::builder(TEMPLATES, "/projects/demo")
}

#[test]
fn new_project_gets_readme_and_initial_commit() {
    let fs = installed_templates().with_dir("/projects");
    let (service, git) = service(&fs, ImportBridge::empty());

    let report = service
        .create_project(&project_config().build().unwrap(), "demo", &SilentReporter)
        .unwrap();

    assert!(fs.is_dir(Path::new("/projects/demo/specs/stdlib")));
    assert!(fs.is_dir(Path::new("/projects/demo/logs")));
    assert!(fs.is_dir(Path::new("/projects/demo/docs/generated")));
    assert!(!fs.exists(Path::new("/projects/demo/src")));
    assert!(!fs.exists(Path::new("/projects/demo/examples")));
    assert_eq!(
        fs.read_file("/projects/demo/README.md").as_deref(),
        Some("# demo\n")
    );
    assert_eq!(git.commits(), vec!["Initial Ralph project setup".to_string()]);
    assert_eq!(report.actions()[0].subject, Subject::ProjectRoot);
}

#[test]
fn rerunning_setup_keeps_readme_and_does_not_commit_again() {
    let fs = installed_templates().with_dir("/projects");
    let (service, git) = service(&fs, ImportBridge::empty());
    let config = project_config().build().unwrap();

    service.create_project(&config, "demo", &SilentReporter).unwrap();
    fs.write_file(Path::new("/projects/demo/README.md"), "# demo\n\nnotes\n")
        .unwrap();
    let report = service.create_project(&config, "demo", &SilentReporter).unwrap();

    assert_eq!(
        fs.read_file("/projects/demo/README.md").as_deref(),
        Some("# demo\n\nnotes\n")
    );
    assert_eq!(git.commits().len(), 1);
    assert_eq!(
        report.find(Subject::ProjectRoot).map(|a| &a.result),
        Some(&ActionResult::SkippedExisting)
    );
}

#[test]
fn dry_run_setup_creates_nothing() {
    let fs = installed_templates().with_dir("/projects");
    let (service, git) = service(&fs, ImportBridge::empty());
    let before = fs.snapshot();

    let report = service
        .create_project(
            &project_config().dry_run(true).build().unwrap(),
            "demo",
            &SilentReporter,
        )
        .unwrap();

    assert_eq!(fs.snapshot(), before);
    assert!(git.commits().is_empty());
    assert_eq!(
        report.find(Subject::Commit).map(|a| &a.result),
        Some(&ActionResult::WouldCreate)
    );
}

// ── real filesystem ─────────────────────────────────────────────────────────

#[test]
fn local_filesystem_round_trip() {
    let home = tempfile::TempDir::new().unwrap();
    let dest = tempfile::TempDir::new().unwrap();
    let templates = home.path().join("templates");
    std::fs::create_dir_all(templates.join("specs/stdlib")).unwrap();
    for (name, body) in [("PROMPT.md", "p"), ("fix_plan.md", "f"), ("AGENT.md", "a")] {
        std::fs::write(templates.join(name), body).unwrap();
    }
    std::fs::write(templates.join("specs/stdlib/io.md"), "io").unwrap();

    let fs: Arc<dyn Filesystem> = Arc::new(LocalFilesystem);
    let git = FakeGit::new(fs);
    let service = ScaffoldService::new(
        Box::new(LocalFilesystem),
        Box::new(git.clone()),
        ImportBridge::empty(),
    );
    let config = RunConfiguration::builder(&templates, dest.path())
        .build()
        .unwrap();

    service.init_in_place(&config, &SilentReporter).unwrap();
    let report = service.init_in_place(&config, &SilentReporter).unwrap();

    assert_eq!(report.changed(), 0);
    assert_eq!(std::fs::read_to_string(dest.path().join("@fix_plan.md")).unwrap(), "f");
    assert_eq!(
        std::fs::read_to_string(dest.path().join("specs/stdlib/io.md")).unwrap(),
        "io"
    );
    assert!(dest.path().join("docs/generated").is_dir());
    assert_eq!(git.inits(), 1);
}
