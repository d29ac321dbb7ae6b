//! folio-contact - contact inquiry form for the folio portfolio
//!
//! A Ratatui front end around the contact form controller: validation,
//! draft autosave and a simulated submission transport.

mod app;
mod config;
mod controller;
mod error;
mod platform;
mod state;
mod store;
mod transport;
mod ui;

use anyhow::Result;
use app::ContactApp;
use config::ContactConfig;
use controller::FormController;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use state::PrefillData;
use std::io;
use std::sync::Arc;
use store::{DraftStore, FileDraftStore, MemoryDraftStore};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use transport::{SimulatedTransport, SubmissionTransport};

/// Environment variable holding prefill JSON
const PREFILL_ENV: &str = "FOLIO_CONTACT_PREFILL";

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "folio_contact=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = ContactConfig::load().unwrap_or_else(|e| {
        tracing::warn!("ignoring unreadable config: {e}");
        ContactConfig::default()
    });
    let transport: Arc<dyn SubmissionTransport> = Arc::new(
        SimulatedTransport::new(config.submit_delay()).failing(config.simulate_failure()),
    );

    let draft_path = config.draft_path.clone().or_else(FileDraftStore::default_path);
    match draft_path.map(FileDraftStore::open) {
        Some(Ok(store)) => {
            tracing::info!(path = %store.path().display(), "using draft store");
            run(store, transport, &config).await
        }
        Some(Err(e)) => {
            tracing::warn!("draft store unavailable, drafts will not survive restarts: {e}");
            run(MemoryDraftStore::new(), transport, &config).await
        }
        None => run(MemoryDraftStore::new(), transport, &config).await,
    }
}

/// Build the app around `store` and drive the terminal until quit
async fn run<S: DraftStore>(
    store: S,
    transport: Arc<dyn SubmissionTransport>,
    config: &ContactConfig,
) -> Result<()> {
    let controller = FormController::new(store, transport, config.form_settings());
    let mut app = ContactApp::new(controller);

    if let Ok(raw) = std::env::var(PREFILL_ENV) {
        match serde_json::from_str::<PrefillData>(&raw) {
            Ok(data) => {
                app.controller.prefill_form(data);
                app.controller.scroll_to_form();
            }
            Err(e) => tracing::warn!("ignoring invalid {PREFILL_ENV}: {e}"),
        }
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Handle any errors
    if let Err(err) = result {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    Ok(())
}

async fn run_app<B: ratatui::backend::Backend, S: DraftStore>(
    terminal: &mut Terminal<B>,
    app: &mut ContactApp<S>,
) -> Result<()> {
    let poll_duration = std::time::Duration::from_millis(100);

    loop {
        app.tick().await;

        // Draw the UI
        terminal.draw(|frame| ui::draw(frame, app))?;

        // Handle crossterm events
        if event::poll(poll_duration)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    app.handle_key(key).await?;
                }
                _ => {}
            }
        }

        // Check if app wants to quit
        if app.should_quit() {
            return Ok(());
        }
    }
}
