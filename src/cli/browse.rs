//! Interactive TUI mode for browsing reviews.
//!
//! This module wires the configuration to a review source, spawns the
//! source task, and runs the event loop inside a terminal session guard.

use tokio::sync::mpsc;

use tourlog::catalog::{CatalogError, JsonFileSource, ReviewSource};
use tourlog::tui::messages::AppMsg;
use tourlog::tui::runner::{TerminalSession, run_loop};
use tourlog::tui::ReviewsApp;
use tourlog::TourlogConfig;

/// Depth of the source-to-app message channel.
const SOURCE_CHANNEL_DEPTH: usize = 4;

/// Runs the TUI mode for browsing reviews.
///
/// Must be called from within a tokio runtime: the source task is spawned
/// onto it while the event loop occupies the calling thread.
///
/// # Errors
///
/// Returns an error if:
/// - The reviews path is missing from configuration
/// - The terminal refuses raw mode or the alternate screen
/// - Drawing to the terminal fails
pub fn run(config: &TourlogConfig) -> Result<(), CatalogError> {
    let path = config.require_reviews_path()?;
    let source = JsonFileSource::new(path);

    let (msg_tx, mut msg_rx) = mpsc::channel::<AppMsg>(SOURCE_CHANNEL_DEPTH);
    let (reload_tx, reload_rx) = mpsc::channel::<()>(SOURCE_CHANNEL_DEPTH);
    spawn_source_task(source, msg_tx, reload_rx);

    let mut app = ReviewsApp::new()
        .with_page_header(config.heading.clone(), config.tagline.clone());
    if let Ok((width, height)) = crossterm::terminal::size() {
        let _action = app.handle_message(&AppMsg::WindowResized { width, height });
    }

    // The guard holds raw mode, the alternate screen, and pointer capture
    // for exactly as long as the loop runs.
    let session = TerminalSession::begin(!config.no_pointer)?;
    let result = run_loop(&mut app, &mut msg_rx, &reload_tx);
    drop(session);

    result
}

/// Loads reviews once at startup and again on every reload request.
///
/// The task ends when the TUI side hangs up either channel.
fn spawn_source_task(
    source: JsonFileSource,
    msg_tx: mpsc::Sender<AppMsg>,
    mut reload_rx: mpsc::Receiver<()>,
) {
    tokio::spawn(async move {
        loop {
            let msg = match source.load_reviews().await {
                Ok(reviews) => AppMsg::ReviewsLoaded(reviews),
                Err(error) => AppMsg::LoadFailed(error.to_string()),
            };
            if msg_tx.send(msg).await.is_err() {
                break;
            }
            if reload_rx.recv().await.is_none() {
                break;
            }
        }
    });
}
