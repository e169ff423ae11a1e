//! Terminal session management and the TUI event loop.
//!
//! Terminal input is read in a dedicated thread so the loop never blocks
//! on the terminal; data source results arrive over an async channel and
//! are drained each iteration. Pointer capture is held strictly within
//! [`TerminalSession`]'s lifetime: acquired when the session begins,
//! released on drop, so pointer events are never observed against a
//! torn-down context.

use std::io::{self, Write};
use std::sync::mpsc as std_mpsc;
use std::time::{Duration, Instant};

use crossterm::cursor::{Hide, MoveTo, MoveToNextLine, Show};
use crossterm::event::{
    DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind,
};
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use crossterm::{execute, queue};
use tokio::sync::mpsc as tokio_mpsc;

use crate::catalog::CatalogError;

use super::app::ReviewsApp;
use super::input::{map_key_to_message, map_mouse_to_message};
use super::messages::{AppAction, AppMsg};

/// Interval between loader animation ticks.
const TICK_INTERVAL: Duration = Duration::from_millis(120);

/// How long the loop waits on terminal input before checking timers.
const INPUT_POLL: Duration = Duration::from_millis(50);

/// RAII guard owning raw mode, the alternate screen, and pointer capture.
///
/// Dropping the guard restores the terminal even when the loop exits
/// early; teardown failures are logged rather than propagated because
/// drop cannot fail.
#[derive(Debug)]
pub struct TerminalSession {
    pointer_capture: bool,
}

impl TerminalSession {
    /// Enters raw mode and the alternate screen, optionally capturing
    /// pointer events.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Terminal`] when the terminal refuses raw
    /// mode or the screen switch.
    pub fn begin(pointer_capture: bool) -> Result<Self, CatalogError> {
        enable_raw_mode().map_err(terminal_error)?;

        let mut stdout = io::stdout();
        let entered = if pointer_capture {
            execute!(stdout, EnterAlternateScreen, EnableMouseCapture, Hide)
        } else {
            execute!(stdout, EnterAlternateScreen, Hide)
        };
        if let Err(error) = entered {
            let _ignored = disable_raw_mode();
            return Err(terminal_error(error));
        }

        Ok(Self { pointer_capture })
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let mut stdout = io::stdout();
        let left = if self.pointer_capture {
            execute!(stdout, Show, DisableMouseCapture, LeaveAlternateScreen)
        } else {
            execute!(stdout, Show, LeaveAlternateScreen)
        };
        if let Err(error) = left {
            tracing::warn!("failed to restore terminal screen: {error}");
        }
        if let Err(error) = disable_raw_mode() {
            tracing::warn!("failed to leave raw mode: {error}");
        }
    }
}

/// Runs the event loop until the application requests quit.
///
/// `source_rx` delivers messages from the data source task; an
/// [`AppAction::Reload`] is forwarded to the source task through
/// `reload_tx`.
///
/// # Errors
///
/// Returns [`CatalogError::Terminal`] when drawing to the terminal fails.
pub fn run_loop(
    app: &mut ReviewsApp,
    source_rx: &mut tokio_mpsc::Receiver<AppMsg>,
    reload_tx: &tokio_mpsc::Sender<()>,
) -> Result<(), CatalogError> {
    let (input_tx, input_rx) = std_mpsc::channel();
    spawn_input_reader(input_tx);

    let mut last_tick = Instant::now();
    draw(app)?;

    loop {
        let mut dirty = false;

        while let Ok(msg) = source_rx.try_recv() {
            if apply(app, &msg, reload_tx) == Flow::Quit {
                return Ok(());
            }
            dirty = true;
        }

        match input_rx.recv_timeout(INPUT_POLL) {
            Ok(event) => {
                if let Some(msg) = map_event(app, &event) {
                    if apply(app, &msg, reload_tx) == Flow::Quit {
                        return Ok(());
                    }
                    dirty = true;
                }
            }
            Err(std_mpsc::RecvTimeoutError::Timeout) => {}
            Err(std_mpsc::RecvTimeoutError::Disconnected) => return Ok(()),
        }

        if app.is_loading() && last_tick.elapsed() >= TICK_INTERVAL {
            last_tick = Instant::now();
            let _flow = apply(app, &AppMsg::Tick, reload_tx);
            dirty = true;
        }

        if dirty {
            draw(app)?;
        }
    }
}

/// Whether the loop continues after a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

fn apply(app: &mut ReviewsApp, msg: &AppMsg, reload_tx: &tokio_mpsc::Sender<()>) -> Flow {
    match app.handle_message(msg) {
        Some(AppAction::Quit) => Flow::Quit,
        Some(AppAction::Reload) => {
            if reload_tx.try_send(()).is_err() {
                tracing::warn!("reload requested but the source task is gone");
            }
            Flow::Continue
        }
        None => Flow::Continue,
    }
}

/// Maps a terminal event to an application message.
fn map_event(app: &ReviewsApp, event: &Event) -> Option<AppMsg> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            map_key_to_message(key, app.input_context())
        }
        Event::Mouse(mouse) => map_mouse_to_message(mouse),
        Event::Resize(width, height) => Some(AppMsg::WindowResized {
            width: *width,
            height: *height,
        }),
        _ => None,
    }
}

/// Forwards terminal events over a channel from a dedicated thread.
///
/// The thread exits when the receiving side hangs up.
fn spawn_input_reader(input_tx: std_mpsc::Sender<Event>) {
    std::thread::spawn(move || {
        loop {
            let ready = crossterm::event::poll(INPUT_POLL).unwrap_or(false);
            if !ready {
                continue;
            }
            let Ok(event) = crossterm::event::read() else {
                continue;
            };
            if input_tx.send(event).is_err() {
                break;
            }
        }
    });
}

/// Draws the current frame, rewriting every terminal cell.
fn draw(app: &ReviewsApp) -> Result<(), CatalogError> {
    let frame = app.view();
    let mut stdout = io::stdout().lock();

    queue!(stdout, MoveTo(0, 0)).map_err(terminal_error)?;
    for line in frame.lines() {
        queue!(stdout, crossterm::style::Print(line), MoveToNextLine(1))
            .map_err(terminal_error)?;
    }
    stdout.flush().map_err(terminal_error)
}

fn terminal_error(error: io::Error) -> CatalogError {
    CatalogError::Terminal {
        message: error.to_string(),
    }
}
