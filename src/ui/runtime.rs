use std::io;
use std::sync::mpsc::Sender;
use std::time::Duration;

use ratatui::layout::Rect;
use tracing::debug;

use crate::client::EvaluatorClient;
use crate::ui::app::App;
use crate::ui::eval::EvalIntent;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::{handle_key, handle_mouse};
use crate::ui::layout::screen_regions;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

pub fn run(client: EvaluatorClient, handle: tokio::runtime::Handle) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(250);
    let mut app = App::new();
    let events = EventHandler::new(tick_rate);

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => {
                if let Some(expression) = handle_key(&mut app, key) {
                    spawn_evaluation(&handle, &client, expression, events.sender());
                }
            }
            Ok(AppEvent::Mouse(mouse)) => {
                let regions = screen_regions(full_screen()?);
                if let Some(expression) = handle_mouse(&mut app, mouse, &regions) {
                    spawn_evaluation(&handle, &client, expression, events.sender());
                }
            }
            Ok(AppEvent::Eval(intent)) => app.apply(intent),
            Ok(AppEvent::Resize(_, _)) => {}
            Ok(AppEvent::Tick) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    Ok(())
}

/// One independent request per submission. The outcome re-enters the UI
/// loop as an event and unconditionally overwrites the display state,
/// whenever it arrives.
fn spawn_evaluation(
    handle: &tokio::runtime::Handle,
    client: &EvaluatorClient,
    expression: String,
    tx: Sender<AppEvent>,
) {
    let client = client.clone();
    handle.spawn(async move {
        debug!(%expression, "evaluation task started");
        let intent = match client.evaluate(&expression).await {
            Ok(evaluation) => EvalIntent::Succeeded { evaluation },
            Err(err) => EvalIntent::Failed {
                message: err.to_string(),
            },
        };
        let _ = tx.send(AppEvent::Eval(intent));
    });
}

/// Current terminal dimensions as a Rect, mirroring what draw() sees.
fn full_screen() -> io::Result<Rect> {
    let (cols, rows) = crossterm::terminal::size()?;
    Ok(Rect::new(0, 0, cols, rows))
}
