//! Simulated code runner. Waits, then prints a canned string. Nothing is parsed or executed.

use crate::domain::DomainError;
use crate::domain::examples::{FALLBACK_OUTPUT, LESSON_OUTPUT, example_for};
use crate::ports::Scheduler;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Default delay of the terminal profile.
pub const DEFAULT_RUN_DELAY: Duration = Duration::from_millis(2000);
/// Default delay of the lesson profile.
pub const DEFAULT_LESSON_DELAY: Duration = Duration::from_millis(1000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Profile {
    /// Per-language outputs with a generic fallback.
    Terminal,
    /// The same output for every language.
    Lesson,
}

pub struct ExecutionSimulator {
    scheduler: Arc<dyn Scheduler>,
    delay: Duration,
    profile: Profile,
}

impl ExecutionSimulator {
    pub fn terminal(scheduler: Arc<dyn Scheduler>, delay: Duration) -> Self {
        Self {
            scheduler,
            delay,
            profile: Profile::Terminal,
        }
    }

    pub fn lesson(scheduler: Arc<dyn Scheduler>, delay: Duration) -> Self {
        Self {
            scheduler,
            delay,
            profile: Profile::Lesson,
        }
    }

    /// Output for `language_id`, without waiting. Unknown ids get the generic fallback.
    pub fn canned_output(&self, language_id: &str) -> &'static str {
        match self.profile {
            Profile::Lesson => LESSON_OUTPUT,
            Profile::Terminal => example_for(language_id)
                .map(|e| e.output)
                .unwrap_or(FALLBACK_OUTPUT),
        }
    }

    /// Wait the simulated delay, then return the canned output.
    ///
    /// `source_text` is accepted but never looked at: the output only depends on the language.
    pub async fn simulate_run(
        &self,
        language_id: &str,
        source_text: &str,
        cancel: &CancellationToken,
    ) -> Result<&'static str, DomainError> {
        debug!(
            language_id,
            source_len = source_text.len(),
            delay_ms = self.delay.as_millis() as u64,
            "simulating run"
        );
        self.scheduler.after(self.delay, cancel).await?;
        Ok(self.canned_output(language_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::scheduler::{ImmediateScheduler, TokioScheduler};
    use crate::domain::examples::{COMPILED_OUTPUT, INTERPRETED_OUTPUT};

    fn terminal() -> ExecutionSimulator {
        ExecutionSimulator::terminal(Arc::new(ImmediateScheduler), DEFAULT_RUN_DELAY)
    }

    #[tokio::test]
    async fn test_python_output_ignores_source() {
        let sim = terminal();
        let cancel = CancellationToken::new();
        for source in ["", "print(1)", "this is not python at all {{{"] {
            let out = sim.simulate_run("python", source, &cancel).await.unwrap();
            assert_eq!(out, INTERPRETED_OUTPUT);
        }
    }

    #[tokio::test]
    async fn test_java_output_verbatim() {
        let sim = terminal();
        let out = sim
            .simulate_run("java", "public class X{}", &CancellationToken::new())
            .await
            .unwrap();
        assert_eq!(
            out,
            "Hello, TechiBug!\nHello Developer, you are 25 years old!\nWelcome to TechiBug, Coder!\n\n✅ Compiled and executed successfully!"
        );
        assert!(out.ends_with("✅ Compiled and executed successfully!"));
    }

    #[tokio::test]
    async fn test_unknown_language_falls_back() {
        let sim = terminal();
        let out = sim
            .simulate_run("unknown-lang", "whatever", &CancellationToken::new())
            .await
            .unwrap();
        assert_eq!(out, FALLBACK_OUTPUT);
    }

    #[test]
    fn test_canned_outputs_per_language() {
        let sim = terminal();
        assert_eq!(sim.canned_output("javascript"), INTERPRETED_OUTPUT);
        assert_eq!(sim.canned_output("cpp"), COMPILED_OUTPUT);
        assert_eq!(sim.canned_output("rust"), FALLBACK_OUTPUT);
    }

    #[test]
    fn test_lesson_profile_ignores_language() {
        let sim = ExecutionSimulator::lesson(Arc::new(ImmediateScheduler), DEFAULT_LESSON_DELAY);
        assert_eq!(sim.canned_output("python"), LESSON_OUTPUT);
        assert_eq!(sim.canned_output("java"), LESSON_OUTPUT);
    }

    #[tokio::test(start_paused = true)]
    async fn test_lesson_run_waits_its_own_delay() {
        let sim = ExecutionSimulator::lesson(Arc::new(TokioScheduler), DEFAULT_LESSON_DELAY);
        let start = tokio::time::Instant::now();
        let out = sim
            .simulate_run("java", "class A {}", &CancellationToken::new())
            .await
            .unwrap();
        assert_eq!(out, LESSON_OUTPUT);
        let waited = start.elapsed();
        assert!(waited >= DEFAULT_LESSON_DELAY);
        assert!(waited < DEFAULT_RUN_DELAY);
    }

    #[tokio::test]
    async fn test_cancelled_run() {
        let sim = terminal();
        let cancel = CancellationToken::new();
        cancel.cancel();
        let err = sim.simulate_run("python", "", &cancel).await.unwrap_err();
        assert_eq!(err, DomainError::Cancelled);
    }
}
