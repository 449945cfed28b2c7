//! Snack entry point
//!
//! Runs the terminal host loop: poll keys, tick the simulation, play cues,
//! draw the snapshot. Logs go to stderr (`RUST_LOG=info snack 2>snack.log`).

mod term;

use std::io::{self, Stdout};
use std::path::PathBuf;
use std::thread;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use snack::Settings;
use snack::audio::{AudioManager, BellSink};
use snack::consts::MAX_FRAME_DT;
use snack::renderer::build_draw_list;
use snack::sim::{GameState, TickInput, tick};

use term::{Command, TermManager};

/// Game instance holding all host state
struct Game {
    state: GameState,
    audio: AudioManager<BellSink<Stdout>>,
    settings: Settings,
    settings_path: PathBuf,
    /// Inputs gathered since the last tick
    input: TickInput,
}

impl Game {
    fn new(settings: Settings, settings_path: PathBuf, seed: u64) -> Self {
        Self {
            state: GameState::new(seed),
            audio: AudioManager::with_settings(BellSink::new(io::stdout()), &settings),
            settings,
            settings_path,
            input: TickInput::default(),
        }
    }

    fn handle_command(&mut self, command: Command) {
        match command {
            Command::Game(input) => self.input.push(input),
            Command::ToggleMute => {
                self.settings.muted = !self.settings.muted;
                self.audio.set_muted(self.settings.muted);
                log::info!("Audio {}", if self.audio.is_muted() { "muted" } else { "on" });
                self.settings.save_to(&self.settings_path);
            }
        }
    }

    fn quit_requested(&self) -> bool {
        self.input.quit_requested()
    }

    /// Run one simulation tick with this frame's inputs
    fn update(&mut self, dt: f32) {
        let dt = dt.min(MAX_FRAME_DT);
        tick(&mut self.state, &self.input, dt);

        // Clear one-shot inputs after processing
        self.input.clear();

        self.audio.handle_events(self.state.events());
    }

    /// Render the current frame
    fn render(&self, term: &mut TermManager) -> io::Result<()> {
        let list = build_draw_list(&self.state.snapshot(), &self.settings);
        term.draw(&list)
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}

fn run() -> io::Result<()> {
    let settings_path = PathBuf::from(Settings::FILE_NAME);
    let settings = Settings::load_from(&settings_path);
    let seed = settings.seed.unwrap_or_else(clock_seed);
    log::info!("Seed {}", seed);

    let frame_time = Duration::from_secs_f64(1.0 / settings.target_fps as f64);
    let mut game = Game::new(settings, settings_path, seed);
    let mut term = TermManager::setup()?;
    let mut last_frame = Instant::now();

    loop {
        let frame_start = Instant::now();

        for command in term.read_commands()? {
            game.handle_command(command);
        }
        if game.quit_requested() {
            break;
        }

        let dt = frame_start.duration_since(last_frame).as_secs_f32();
        last_frame = frame_start;

        game.update(dt);
        game.render(&mut term)?;

        if let Some(rest) = frame_time.checked_sub(frame_start.elapsed()) {
            thread::sleep(rest);
        }
    }

    log::info!("Quit with score {}", game.state.score);
    Ok(())
}

fn main() {
    env_logger::init();
    log::info!("Snack starting...");

    if let Err(e) = run() {
        log::error!("Terminal error: {}", e);
        eprintln!("snack: {}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use snack::sim::Input;

    fn game(name: &str) -> Game {
        let path = std::env::temp_dir().join(format!("{}_{}.json", name, std::process::id()));
        Game::new(Settings::default(), path, 7)
    }

    #[test]
    fn test_quit_command_stops_loop() {
        let mut game = game("snack_quit");
        game.handle_command(Command::Game(Input::MoveUp));
        assert!(!game.quit_requested());

        game.handle_command(Command::Game(Input::RequestQuit));
        assert!(game.quit_requested());
    }

    #[test]
    fn test_toggle_mute_updates_audio_and_settings() {
        let mut game = game("snack_mute");
        assert!(!game.audio.is_muted());

        game.handle_command(Command::ToggleMute);
        let _ = std::fs::remove_file(&game.settings_path);

        assert!(game.audio.is_muted());
        assert!(game.settings.muted);
    }

    #[test]
    fn test_update_clears_inputs() {
        let mut game = game("snack_update");
        game.handle_command(Command::Game(Input::MoveDown));

        game.update(1.0);

        assert_eq!(game.state.direction, snack::sim::Direction::Down);
        assert!(game.input.inputs.is_empty());
    }
}
