use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{info, warn};

use crate::app::App;
use crate::audio::{PlaybackController, RodioEngine};

mod event_loop;
mod logging;
mod settings;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let (settings, config_problem) = settings::load_settings();
    // Logging is best-effort: a bad log directory must not stop playback.
    let _log_guard = logging::init(&settings)
        .map_err(|e| eprintln!("allegro: logging disabled: {e}"))
        .ok();
    if let Some(problem) = config_problem {
        warn!("{problem}");
    }

    // Without an output device there is nothing to play; fail before the
    // terminal is taken over so the message stays readable.
    let engine = RodioEngine::open_default()?;
    let mut player = PlaybackController::new(engine, settings.audio.initial_volume);
    let mut app = App::new(settings.ui.max_messages, settings.playback.auto_advance);
    info!(volume = player.volume(), "audio output ready");

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let run_result: Result<(), Box<dyn std::error::Error>> = (|| {
        let mut state = event_loop::EventLoopState::default();
        event_loop::run(&mut terminal, &settings, &mut app, &mut player, &mut state)
    })();

    player.stop();
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;
    info!("shut down");

    run_result
}
