use std::sync::mpsc::{RecvTimeoutError, Sender};
use std::time::Duration;

use anyhow::Result;
use tokio::runtime::Runtime;

use crate::config::Config;
use crate::submit::FormSubmitter;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::{handle_key, InputAction};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use crate::ui::theme::Theme;

/// Drive the UI until the user quits.
///
/// The loop itself is synchronous and single-threaded; the tokio
/// runtime exists only to run the one in-flight submission, whose
/// outcome comes back through the event channel.
pub fn run(config: Config, theme: Theme) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_all()
        .build()?;
    let submitter = FormSubmitter::new(&config.form)?;
    tracing::info!(endpoint = %submitter.endpoint(), "starting portfolio UI");

    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(config.terminal.tick_rate_ms);
    let mut app = App::new(
        theme,
        Duration::from_millis(config.terminal.result_display_ms),
    );
    let events = EventHandler::new(tick_rate);

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Input(key)) => {
                if handle_key(&mut app, key) == InputAction::Submit {
                    spawn_submission(&runtime, &submitter, &mut app, events.sender());
                }
            }
            Ok(AppEvent::Tick) => app.on_tick(),
            // The next draw reads the new size from the backend.
            Ok(AppEvent::Resize(_, _)) => {}
            Ok(AppEvent::SubmissionOutcome(result)) => app.on_submission_outcome(result),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    Ok(())
}

/// Snapshot the form and fire the POST. Does nothing when the form is
/// incomplete or already busy, which is what keeps a second submission
/// inert while one is in flight.
fn spawn_submission(
    runtime: &Runtime,
    submitter: &FormSubmitter,
    app: &mut App,
    tx: Sender<AppEvent>,
) {
    let Some(payload) = app.begin_submission() else {
        return;
    };
    let submitter = submitter.clone();
    runtime.spawn(async move {
        let result = submitter.submit(&payload).await;
        let _ = tx.send(AppEvent::SubmissionOutcome(result));
    });
}
