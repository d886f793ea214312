use crate::config::NavigatorSettings;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::time::Duration;

pub fn run(settings: &NavigatorSettings) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(250);
    let mut app = App::new(settings);
    let events = EventHandler::new(tick_rate);
    tracing::info!(
        layout = %settings.layout,
        reset_on_switch = settings.reset_stack_on_tab_switch,
        clear_mode = ?settings.clear_mode,
        "navigator started"
    );

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Input(key)) => handle_key(&mut app, key),
            // Redraw happens at the top of the loop.
            Ok(AppEvent::Tick) => {}
            Ok(AppEvent::Resize(cols, rows)) => tracing::debug!(cols, rows, "terminal resized"),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    tracing::info!("navigator stopped");
    Ok(())
}
