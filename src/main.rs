// Sales dashboard entry point.
//
// Startup sequence:
// 1. Initialize tracing (log to file, not terminal)
// 2. Load config (copying defaults on first run)
// 3. Build the HTTP clients
// 4. Create mpsc channels
// 5. Spawn the app logic task (fires the initial directory fetch)
// 6. Run the TUI event loop (blocking until user quits)
// 7. Cleanup on exit

use sales_desk::api;
use sales_desk::app;
use sales_desk::config;
use sales_desk::tui;

use anyhow::Context;
use tokio::sync::mpsc;
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize tracing (log to file, not terminal)
    init_tracing()?;
    info!("Sales desk starting up");

    // 2. Load config; first run copies config/dashboard.toml from defaults/
    let config = config::load_config().context("failed to load configuration")?;
    info!(
        "Config loaded: directory={}, assistant={}",
        config.api.sales_reps_url, config.api.ask_url
    );

    // 3. Build the HTTP clients (one connection pool shared by both)
    let http = reqwest::Client::new();
    let directory_client =
        api::DirectoryClient::new(http.clone(), config.api.sales_reps_url.clone());
    let assistant_client = api::AssistantClient::new(http, config.api.ask_url.clone());

    // 4. Create mpsc channels
    let (directory_tx, directory_rx) = mpsc::channel(256);
    let (ask_tx, ask_rx) = mpsc::channel(256);
    let (cmd_tx, cmd_rx) = mpsc::channel(64);
    let (ui_tx, ui_rx) = mpsc::channel(256);

    let tick_rate_ms = config.ui.tick_rate_ms;

    // Create the application state
    let app_state = app::AppState::new(
        config,
        directory_client,
        assistant_client,
        directory_tx,
        ask_tx,
    );

    // 5. Spawn the app logic task; it fires the initial directory fetch
    let app_handle = tokio::spawn(async move {
        if let Err(e) = app::run(directory_rx, ask_rx, cmd_rx, ui_tx, app_state).await {
            error!("Application loop error: {}", e);
        }
    });

    // 6. Run the TUI event loop (blocking until user quits)
    info!("Application ready");
    if let Err(e) = tui::run(ui_rx, cmd_tx, tick_rate_ms).await {
        error!("TUI error: {}", e);
    }

    // 7. Cleanup: wait for the app task to finish (with timeout)
    let _ = tokio::time::timeout(std::time::Duration::from_secs(5), async {
        let _ = app_handle.await;
    })
    .await;

    info!("Sales desk shut down cleanly");
    Ok(())
}

/// Initialize tracing to log to a file (not the terminal, which is used by the TUI).
fn init_tracing() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let log_dir = std::env::current_dir()?.join("logs");
    std::fs::create_dir_all(&log_dir)?;

    let log_file = std::fs::File::create(log_dir.join("repdesk.log"))?;

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("sales_desk=info,warn")),
        )
        .with_writer(log_file)
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(true)
        .with_line_number(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    Ok(())
}
