//! Inline conversion through a generative text tool.
//!
//! The conversion instruction and the tool's combined output live in
//! temporary files inside the destination root. Both are removed when this
//! provider returns, whatever the outcome.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use ralph_core::{
    application::{
        ApplicationError,
        ports::{ImportProvider, ImportRequest, ProviderOutcome},
    },
    domain::ConversionInstruction,
    error::RalphResult,
};
use tempfile::{Builder, NamedTempFile};
use tracing::{debug, info, instrument, warn};

use crate::process::describe;

const ARTIFACT_PREFIX: &str = ".ralph-conversion-";

/// One way of launching the generator: a program plus fixed arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorCommand {
    program: String,
    args: Vec<String>,
}

impl GeneratorCommand {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// Split a full argv; `None` when it is empty.
    pub fn from_argv(argv: &[String]) -> Option<Self> {
        let (program, args) = argv.split_first()?;
        Some(Self::new(program.clone(), args.to_vec()))
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

/// Feeds a [`ConversionInstruction`] to the first generator found on PATH.
#[derive(Debug, Clone)]
pub struct InlineConversion {
    candidates: Vec<GeneratorCommand>,
}

impl InlineConversion {
    /// Try `candidates` in order until one is installed.
    pub fn new(candidates: Vec<GeneratorCommand>) -> Self {
        Self { candidates }
    }

    fn locate(&self) -> Option<(PathBuf, &GeneratorCommand)> {
        self.candidates.iter().find_map(|candidate| {
            which::which(&candidate.program)
                .ok()
                .map(|path| (path, candidate))
        })
    }
}

impl Default for InlineConversion {
    fn default() -> Self {
        Self::new(vec![
            GeneratorCommand::new("claude", Vec::new()),
            GeneratorCommand::new("npx", vec!["@anthropic-ai/claude-code".into()]),
        ])
    }
}

fn artifact(root: &Path, suffix: &str) -> RalphResult<NamedTempFile> {
    Builder::new()
        .prefix(ARTIFACT_PREFIX)
        .suffix(suffix)
        .tempfile_in(root)
        .map_err(|e| io_error(root, e).into())
}

/// stdout and stderr handles onto one file, sharing a single write offset.
fn capture_streams(output: &NamedTempFile) -> std::io::Result<(File, File)> {
    let stdout = output.reopen()?;
    let stderr = stdout.try_clone()?;
    Ok((stdout, stderr))
}

fn io_error(path: &Path, e: std::io::Error) -> ApplicationError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: e.to_string(),
    }
}

impl ImportProvider for InlineConversion {
    fn name(&self) -> &'static str {
        "inline conversion"
    }

    #[instrument(skip_all, fields(source = %request.source.display()))]
    fn attempt(&self, request: &ImportRequest) -> RalphResult<ProviderOutcome> {
        let Some((executable, generator)) = self.locate() else {
            let tried: Vec<_> = self.candidates.iter().map(|c| c.program.as_str()).collect();
            return Ok(ProviderOutcome::Unavailable {
                reason: format!("no generator found on PATH (tried {})", tried.join(", ")),
            });
        };
        let command_line = describe(&generator.program, generator.args.as_slice());
        info!(generator = %command_line, "converting document");

        let content = std::fs::read(&request.source).map_err(|e| io_error(&request.source, e))?;
        let file_name = request
            .source
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| request.source.display().to_string());
        let instruction =
            ConversionInstruction::for_document(&file_name, &String::from_utf8_lossy(&content));

        let root = &request.destination_root;
        let mut prompt = artifact(root, ".md")?;
        prompt
            .write_all(instruction.as_str().as_bytes())
            .and_then(|()| prompt.flush())
            .map_err(|e| io_error(prompt.path(), e))?;
        let output = artifact(root, ".log")?;

        let stdin = File::open(prompt.path()).map_err(|e| io_error(prompt.path(), e))?;
        let (stdout, stderr) = capture_streams(&output).map_err(|e| io_error(output.path(), e))?;

        let status = Command::new(&executable)
            .args(&generator.args)
            .current_dir(root)
            .stdin(Stdio::from(stdin))
            .stdout(Stdio::from(stdout))
            .stderr(Stdio::from(stderr))
            .status();

        let captured = std::fs::read_to_string(output.path()).unwrap_or_default();
        debug!(output = %captured.trim(), "generator output");

        match status {
            Ok(status) if status.success() => Ok(ProviderOutcome::Completed),
            Ok(status) => {
                warn!(%status, "generator reported failure");
                Ok(ProviderOutcome::SoftFailure {
                    reason: format!("`{command_line}` exited with {status}"),
                })
            }
            Err(e) => Ok(ProviderOutcome::SoftFailure {
                reason: format!("could not start `{command_line}`: {e}"),
            }),
        }
    }
}
