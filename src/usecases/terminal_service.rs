//! Code terminal session: language selection, editor contents, simulated runs, export.

use crate::domain::catalog::{language_by_id, terminal_language_by_id};
use crate::domain::examples::{DEFAULT_LANGUAGE_ID, RUNNING_PLACEHOLDER, example_for};
use crate::domain::{DomainError, Language, RunState};
use crate::ports::CodeExportPort;
use crate::usecases::execution_simulator::ExecutionSimulator;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

const FALLBACK_EXTENSION: &str = ".txt";

/// Clears the running flag when the run ends, however it ends.
struct RunGuard(Arc<AtomicBool>);

impl RunGuard {
    fn acquire(flag: &Arc<AtomicBool>) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(Arc::clone(flag)))
    }
}

impl Drop for RunGuard {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

pub struct TerminalSession {
    simulator: Arc<ExecutionSimulator>,
    exporter: Arc<dyn CodeExportPort>,
    language_id: String,
    code: String,
    output: Option<String>,
    running: Arc<AtomicBool>,
    cancel: CancellationToken,
}

impl TerminalSession {
    /// Starts on Python with its example loaded.
    pub fn new(simulator: Arc<ExecutionSimulator>, exporter: Arc<dyn CodeExportPort>) -> Self {
        let code = example_for(DEFAULT_LANGUAGE_ID)
            .map(|e| e.source.to_string())
            .unwrap_or_default();
        Self {
            simulator,
            exporter,
            language_id: DEFAULT_LANGUAGE_ID.to_string(),
            code,
            output: None,
            running: Arc::new(AtomicBool::new(false)),
            cancel: CancellationToken::new(),
        }
    }

    pub fn language_id(&self) -> &str {
        &self.language_id
    }

    pub fn language(&self) -> Option<&'static Language> {
        language_by_id(&self.language_id)
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn set_code(&mut self, code: impl Into<String>) {
        self.code = code.into();
    }

    pub fn line_count(&self) -> usize {
        // an empty editor still shows one line
        self.code.split('\n').count()
    }

    pub fn output(&self) -> Option<&str> {
        self.output.as_deref()
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }

    pub fn state(&self) -> RunState {
        if self.is_running() {
            return RunState::Running;
        }
        match &self.output {
            Some(out) => RunState::Finished(out.clone()),
            None => RunState::Idle,
        }
    }

    /// Switch language. Loads the language's example if there is one and clears the output.
    /// Only the terminal's languages are accepted.
    pub fn select_language(&mut self, language_id: &str) -> Result<(), DomainError> {
        let language = terminal_language_by_id(language_id)
            .ok_or_else(|| DomainError::UnknownLanguage(language_id.to_string()))?;
        self.language_id = language.id.to_string();
        if let Some(example) = example_for(language.id) {
            self.code = example.source.to_string();
        }
        self.output = None;
        info!(language = language.id, "terminal language selected");
        Ok(())
    }

    pub fn clear_output(&mut self) {
        self.output = None;
    }

    /// Token that aborts a pending run when fired.
    pub fn cancel_handle(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// Cancel a pending run. The session stays usable.
    pub fn close(&mut self) {
        self.cancel.cancel();
        self.cancel = CancellationToken::new();
    }

    /// Simulate running the editor contents. Rejected while a previous run is pending.
    pub async fn run(&mut self) -> Result<&str, DomainError> {
        let Some(_guard) = RunGuard::acquire(&self.running) else {
            warn!(language = %self.language_id, "run requested while running");
            return Err(DomainError::AlreadyRunning);
        };

        self.output = Some(RUNNING_PLACEHOLDER.to_string());
        let cancel = self.cancel.clone();
        let result = self
            .simulator
            .simulate_run(&self.language_id, &self.code, &cancel)
            .await;
        match result {
            Ok(out) => {
                info!(language = %self.language_id, lines = self.line_count(), "run finished");
                Ok(self.output.insert(out.to_string()).as_str())
            }
            Err(e) => {
                self.output = None;
                Err(e)
            }
        }
    }

    /// Save the editor contents as `code<ext>`.
    pub async fn export_code(&self) -> Result<PathBuf, DomainError> {
        let ext = self
            .language()
            .map(|l| l.file_extension)
            .unwrap_or(FALLBACK_EXTENSION);
        let file_name = format!("code{}", ext);
        let path = self.exporter.export(&file_name, &self.code).await?;
        info!(path = %path.display(), "code exported");
        Ok(path)
    }
}
