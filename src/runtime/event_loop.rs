use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use tracing::debug;

use crate::app::App;
use crate::audio::{AudioEngine, PlaybackController};
use crate::config;
use crate::ui;
use crate::ui::layout::{Button, button_at};

/// State tracked by the runtime event loop across iterations.
#[derive(Debug, Default)]
pub struct EventLoopState {
    /// Terminal area of the last drawn frame; clicks are resolved against it.
    pub canvas: Rect,
}

/// Main terminal event loop: poll input, dispatch to the app and redraw.
/// Returns `Ok(())` once the app stops running.
pub fn run<E: AudioEngine>(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    settings: &config::Settings,
    app: &mut App,
    player: &mut PlaybackController<E>,
    state: &mut EventLoopState,
) -> Result<(), Box<dyn std::error::Error>> {
    let tick = Duration::from_millis(settings.ui.tick_ms);

    while app.is_running() {
        app.tick(player);

        let snapshot = player.snapshot();
        let completed = terminal.draw(|f| ui::draw(f, app, &snapshot, &settings.ui))?;
        state.canvas = completed.area;

        if event::poll(tick)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    handle_key_event(key, app, player);
                }
                Event::Mouse(mouse) => handle_mouse_event(mouse, app, player, state),
                _ => {}
            }
        }
    }

    Ok(())
}

fn handle_mouse_event<E: AudioEngine>(
    mouse: MouseEvent,
    app: &mut App,
    player: &mut PlaybackController<E>,
    state: &EventLoopState,
) {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return;
    }
    // The prompt is modal.
    if app.prompt.is_some() {
        return;
    }

    if let Some(button) = button_at(state.canvas, mouse.column, mouse.row) {
        debug!(?button, column = mouse.column, row = mouse.row, "button clicked");
        app.handle_button(button, player);
    }
}

fn handle_key_event<E: AudioEngine>(
    key: KeyEvent,
    app: &mut App,
    player: &mut PlaybackController<E>,
) {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return;
    }

    if app.prompt.is_some() {
        match key.code {
            KeyCode::Esc => app.cancel_prompt(),
            KeyCode::Enter => app.prompt_submit(),
            KeyCode::Backspace => app.prompt_pop(),
            KeyCode::Char(c) => app.prompt_push(c),
            _ => {}
        }
        return;
    }

    let button = match key.code {
        KeyCode::Enter => Some(Button::Play),
        KeyCode::Char(c) => Button::from_shortcut(c),
        _ => None,
    };
    if let Some(button) = button {
        app.handle_button(button, player);
    }
}
