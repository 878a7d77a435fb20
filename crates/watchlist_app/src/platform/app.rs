use std::io::Stdout;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use engine_logging::{engine_debug, engine_info};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use watchlist_core::{update, AppState, Msg};
use watchlist_engine::OmdbClient;

use super::config::Settings;
use super::effects::EffectRunner;
use super::input::{map_key, KeyAction};
use super::session::TerminalSession;
use super::{seed, ui};

const INPUT_POLL: Duration = Duration::from_millis(50);

pub fn run_app() -> Result<()> {
    let (settings, source) = Settings::load()?;
    engine_logging::initialize_file(
        &settings.log_file,
        engine_logging::level_from_name(&settings.log_level),
    )
    .with_context(|| format!("failed to create log file {:?}", settings.log_file))?;
    engine_info!("Using {}", source);
    engine_info!("Starting watchlist against {}", settings.base_url);

    let client = OmdbClient::new(settings.omdb_settings()?)?;
    let runner = EffectRunner::new(Arc::new(client))?;

    let mut app = App::new(runner);
    app.dispatch(Msg::WatchedLoaded(seed::watched_movies()));
    app.dispatch(Msg::RatingConfigured(settings.star_rating()));

    let mut session = TerminalSession::enter()?;
    let result = app.run(session.terminal_mut());
    drop(session);
    engine_info!("Watchlist exited");
    result
}

struct App {
    state: AppState,
    runner: EffectRunner,
}

impl App {
    fn new(runner: EffectRunner) -> Self {
        Self {
            state: AppState::new(),
            runner,
        }
    }

    fn dispatch(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        if !effects.is_empty() {
            self.runner.enqueue(effects);
        }
    }

    fn run(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        let mut needs_draw = true;
        loop {
            if needs_draw || self.state.consume_dirty() {
                let view = self.state.view();
                terminal
                    .draw(|frame| ui::render::render(frame, &view))
                    .context("failed to draw frame")?;
                self.state.consume_dirty();
                needs_draw = false;
            }

            if event::poll(INPUT_POLL).context("failed to poll terminal")? {
                match event::read().context("failed to read terminal event")? {
                    Event::Key(key) => match map_key(key, &self.state.view()) {
                        KeyAction::Dispatch(msg) => self.dispatch(msg),
                        KeyAction::Quit => return Ok(()),
                        KeyAction::Ignore => {}
                    },
                    Event::Resize(..) => needs_draw = true,
                    _ => {}
                }
            }

            for msg in self.runner.pending_messages() {
                engine_debug!("Engine message {:?}", msg);
                self.dispatch(msg);
            }
        }
    }
}
