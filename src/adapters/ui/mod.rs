pub mod banner;
pub mod progress;
pub mod tui;

use crate::ports::Scheduler;
use crate::usecases::greeting_after;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Prints the welcome banner, then applies the theme for all subsequent inquire prompts.
/// Call once at startup (e.g. in main after tracing init).
pub fn init_ui() {
    banner::print_welcome();
    tui::apply_theme();
}

/// Shows BugBot's greeting notice once `delay` has passed. Ctrl-C skips it.
pub async fn show_greeting(scheduler: &dyn Scheduler, delay: Duration) {
    let cancel = CancellationToken::new();
    let watcher = tui::cancel_on_ctrl_c(cancel.clone());
    let result = greeting_after(scheduler, delay, &cancel).await;
    watcher.abort();
    match result {
        Ok(notice) => banner::print_notice(notice),
        Err(e) => debug!(error = %e, "greeting skipped"),
    }
}
