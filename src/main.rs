//! Wiring & DI. Entry point: load config, bootstrap adapters, inject into services, run UI.
//! No business logic here.

use dotenv::dotenv;
use std::path::PathBuf;
use std::sync::Arc;
use techibug::adapters::persistence::FsCodeExporter;
use techibug::adapters::scheduler::{ImmediateScheduler, TokioScheduler};
use techibug::adapters::ui::tui::TuiInputPort;
use techibug::domain::ReplyTable;
use techibug::ports::{CodeExportPort, InputPort, Scheduler};
use techibug::shared::config::AppConfig;
use techibug::usecases::ExecutionSimulator;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let env_loaded = dotenv();
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match &env_loaded {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(_) => info!(cwd = %cwd.display(), "no .env found (check CWD)"),
    }

    let cfg = AppConfig::load().unwrap_or_else(|e| {
        warn!(error = %e, "invalid configuration, using defaults");
        AppConfig::default()
    });

    techibug::adapters::ui::init_ui();

    // --- Scheduler: real timers, or none at all in instant mode ---
    let scheduler: Arc<dyn Scheduler> = if cfg.is_instant() {
        info!("instant mode: simulated delays disabled");
        Arc::new(ImmediateScheduler)
    } else {
        Arc::new(TokioScheduler)
    };

    let greeting_delay = cfg.greeting_delay();
    info!(
        greeting_delay_ms = greeting_delay.as_millis() as u64,
        "waiting for BugBot greeting"
    );
    techibug::adapters::ui::show_greeting(scheduler.as_ref(), greeting_delay).await;

    // --- Simulators ---
    let run_delay = cfg.run_delay();
    let lesson_delay = cfg.lesson_delay();
    info!(
        run_delay_ms = run_delay.as_millis() as u64,
        lesson_delay_ms = lesson_delay.as_millis() as u64,
        "execution simulator configured"
    );
    let terminal_sim = Arc::new(ExecutionSimulator::terminal(
        Arc::clone(&scheduler),
        run_delay,
    ));
    let lesson_sim = Arc::new(ExecutionSimulator::lesson(
        Arc::clone(&scheduler),
        lesson_delay,
    ));

    // --- Export ---
    let export_dir = PathBuf::from(cfg.export_dir_or_default());
    info!(path = %export_dir.display(), "code export directory");
    let exporter: Arc<dyn CodeExportPort> = Arc::new(FsCodeExporter::new(&export_dir));

    if let Some(seed) = cfg.rng_seed {
        info!(seed, "BugBot replies seeded");
    }

    let input_port: Arc<dyn InputPort> = Arc::new(TuiInputPort::new(
        Arc::new(ReplyTable::builtin()),
        scheduler,
        terminal_sim,
        lesson_sim,
        exporter,
        cfg.reply_delay(),
        cfg.rng_seed,
    ));

    // --- Run (main menu -> Chat / Terminal / Lesson / Catalog) ---
    input_port
        .run()
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    info!("bye");
    Ok(())
}
