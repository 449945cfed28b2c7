//! End-to-end run: simulation events feeding audio and the draw list

use std::io;

use glam::IVec2;
use snack::Settings;
use snack::audio::{AudioManager, AudioSink, SoundEffect};
use snack::consts::MOVE_INTERVAL;
use snack::renderer::{SpriteKind, build_draw_list};
use snack::sim::{Food, GameEvent, GameState, Input, TickInput, tick};

#[derive(Default)]
struct Recorder {
    played: Vec<SoundEffect>,
}

impl AudioSink for Recorder {
    fn play(&mut self, effect: SoundEffect, _volume: f32) -> io::Result<()> {
        self.played.push(effect);
        Ok(())
    }
}

#[test]
fn test_eat_then_crash_then_restart() {
    let mut state = GameState::new(99);
    let mut audio = AudioManager::new(Recorder::default());
    let idle = TickInput::default();

    // Food directly ahead of the head at (20, 15)
    state.food = Food {
        cell: IVec2::new(21, 15),
        active: true,
    };
    tick(&mut state, &idle, MOVE_INTERVAL);
    audio.handle_events(state.events());

    assert_eq!(state.score, 10);
    assert_eq!(state.snake.len(), 4);
    assert!(matches!(
        state.events(),
        [GameEvent::FoodEaten { score: 10, .. }]
    ));

    // Park the new food out of the way, then steer into the top wall
    state.food.cell = IVec2::new(0, 29);
    tick(&mut state, &Input::MoveUp.into(), MOVE_INTERVAL);
    audio.handle_events(state.events());
    while !state.is_game_over() {
        tick(&mut state, &idle, MOVE_INTERVAL);
        audio.handle_events(state.events());
    }
    assert_eq!(state.snake.head(), IVec2::new(21, 0));
    assert_eq!(audio.sink().played, vec![SoundEffect::Eat, SoundEffect::GameOver]);

    let list = build_draw_list(&state.snapshot(), &Settings::default());
    assert!(list.cells.is_empty());
    assert!(list.texts.iter().any(|t| t.text == "Your Score: 10"));

    tick(&mut state, &Input::Restart.into(), 0.0);
    assert_eq!(state.events(), &[GameEvent::Restarted]);
    assert_eq!(state.score, 0);

    let list = build_draw_list(&state.snapshot(), &Settings::default());
    let heads = list
        .cells
        .iter()
        .filter(|s| s.kind == SpriteKind::SnakeHead)
        .count();
    assert_eq!(heads, 1);
    assert!(list.texts.iter().any(|t| t.text == "Score: 0"));
}

#[test]
fn test_snapshot_json_is_stable_for_a_seed() {
    let play = || {
        let mut state = GameState::new(2024);
        for input in [Input::MoveDown, Input::MoveLeft, Input::MoveUp] {
            tick(&mut state, &input.into(), MOVE_INTERVAL);
        }
        state.snapshot().to_json().ok()
    };
    assert!(play().is_some());
    assert_eq!(play(), play());
}
